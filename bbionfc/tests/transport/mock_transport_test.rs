use std::time::Duration;

use bbionfc::transport::Transport;
use bbionfc::transport::mock::MockTransport;

#[test]
fn mock_transport_write_and_read() {
    let mut m = MockTransport::new();
    m.push_response(vec![0x01]);
    m.write(&[0xAA]).unwrap();
    assert_eq!(m.sent.len(), 1);
    assert_eq!(m.read(1).unwrap(), vec![0x01]);
}

#[test]
fn silence_models_timed_out_reads() {
    let mut m = MockTransport::new();
    m.push_silence(2);
    m.push_response(b"BBIO1".to_vec());
    assert!(m.read(5).unwrap().is_empty());
    assert!(m.read(5).unwrap().is_empty());
    assert_eq!(m.read(5).unwrap(), b"BBIO1".to_vec());
}

#[test]
fn records_configuration_calls() {
    let mut m = MockTransport::new();
    m.set_timeout(Some(Duration::from_millis(10))).unwrap();
    m.clear_input_buffer().unwrap();
    m.set_timeout(None).unwrap();
    assert_eq!(m.timeouts, vec![Some(Duration::from_millis(10)), None]);
    assert_eq!(m.input_clears, 1);
}

#[test]
fn boxed_transport_delegates() {
    let mut boxed: Box<dyn Transport> = Box::new(MockTransport::with_responses([vec![1, 2, 3]]));
    assert_eq!(boxed.read(2).unwrap(), vec![1, 2]);
    assert_eq!(boxed.read(2).unwrap(), vec![3]);
    boxed.write(&[0x00]).unwrap();
}
