#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use bbionfc::test_support::SharedMock;
use bbionfc::transport::MockTransport;
use bbionfc::{EmulatorProfile, Error, Mode, NegotiationError, Session, SessionBuilder, SyncConfig};

fn bridge_on_probe(n: usize) -> MockTransport {
    let mut m = MockTransport::new();
    m.push_silence(n - 1);
    m.push_response(b"BBIO1".to_vec());
    m.push_response(b"NFC2".to_vec());
    m
}

#[test]
fn bridge_reached_on_any_probe_up_to_twenty() {
    common::init_logger();
    for n in [1usize, 2, 10, 20] {
        let shared = SharedMock::new(bridge_on_probe(n));
        let reader = Session::new_with_transport(shared.boxed())
            .reset_to_bridge()
            .and_then(|b| b.enter_reader());
        assert!(reader.is_ok(), "probe {}", n);

        let m = shared.mock();
        assert_eq!(m.sent.len(), n + 1);
        assert_eq!(m.timeouts, vec![Some(Duration::from_millis(10)), None]);
        assert_eq!(m.input_clears, 1);
    }
}

#[test]
fn bridge_unreachable_on_twenty_first_probe() {
    let shared = SharedMock::new(bridge_on_probe(21));
    match Session::new_with_transport(shared.boxed()).reset_to_bridge() {
        Err(NegotiationError::BridgeUnreachable { attempts }) => assert_eq!(attempts, 20),
        Err(other) => panic!("expected BridgeUnreachable, got: {:?}", other),
        Ok(_) => panic!("expected BridgeUnreachable, reached the bridge"),
    }
    assert!(shared.mock().written().iter().all(|b| *b == 0x00));
    assert_eq!(shared.mock().sent.len(), 20);
}

#[test]
fn marker_pushed_past_probe_window() {
    let mut m = MockTransport::with_responses([b"\x01BBIO1".to_vec()]);
    m.push_response(b"NFC2".to_vec());
    // Five bytes per probe: "\x01BBIO" misses, then "1" alone misses too
    let r = Session::new_with_transport(Box::new(m)).reset_to_bridge();
    assert!(r.is_err());

    let m = MockTransport::with_responses([b"1BBIO1".to_vec()]);
    // "1BBIO" has no marker either; the trailing "1" is a separate probe
    assert!(Session::new_with_transport(Box::new(m)).reset_to_bridge().is_err());
}

#[test]
fn wrong_ack_carries_received_bytes() {
    let mut m = MockTransport::with_responses([b"BBIO1".to_vec()]);
    m.push_response(b"CE2\x00".to_vec());
    let bridge = Session::new_with_transport(Box::new(m))
        .reset_to_bridge()
        .unwrap();
    match bridge.enter_card_emulator(EmulatorProfile::tagged()) {
        Err(NegotiationError::UnexpectedAck { expected, got }) => {
            assert_eq!(&expected, b"NCE2");
            assert_eq!(got, b"CE2\x00".to_vec());
        }
        Err(other) => panic!("expected UnexpectedAck, got: {:?}", other),
        Ok(_) => panic!("expected UnexpectedAck, entered emulator mode"),
    }
}

#[test]
fn builder_sync_config_limits_probes() {
    let shared = SharedMock::new(bridge_on_probe(4));
    let session = SessionBuilder::new()
        .with_transport(shared.boxed())
        .sync_config(SyncConfig {
            attempts: 3,
            probe_timeout: Duration::from_millis(50),
        })
        .build()
        .unwrap();
    assert!(session.reset_to_bridge().is_err());
    assert_eq!(shared.mock().sent.len(), 3);
    assert_eq!(shared.mock().timeouts, vec![Some(Duration::from_millis(50))]);
}

#[test]
fn negotiation_errors_convert() {
    fn open(m: MockTransport) -> bbionfc::Result<Mode> {
        let reader = Session::new_with_transport(Box::new(m))
            .reset_to_bridge()?
            .enter_reader()?;
        Ok(reader.mode())
    }
    assert_eq!(open(bridge_on_probe(1)).unwrap(), Mode::Reader);
    assert!(matches!(
        open(MockTransport::new()),
        Err(Error::Negotiation(NegotiationError::BridgeUnreachable { .. }))
    ));
}
