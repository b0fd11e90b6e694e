use bbionfc::protocol::channel;
use bbionfc::test_support::{SharedMock, negotiated_reader, reader_ready_mock};
use bbionfc::transport::mock::MockTransport;
use bbionfc::{ChannelError, CrcMode, Error, NegotiationError, Session, TransportError};

#[test]
fn write_failure_surfaces_as_transport_error() {
    let mut m = MockTransport::new();
    m.set_write_failures(1);
    let err = channel::transact(&mut m, 0x05, 0, &[0x26]).unwrap_err();
    assert!(matches!(err, ChannelError::Transport(TransportError::Closed)));
    assert!(err.is_fatal());
}

#[test]
fn closed_port_ends_blocking_read() {
    let mut m = reader_ready_mock(vec![]);
    m.closed_when_drained = true;
    let shared = SharedMock::new(m);
    let mut reader = negotiated_reader(shared.boxed()).unwrap();
    match reader.send_bytes(CrcMode::Manual, &[0x93, 0x20]) {
        Err(ChannelError::Transport(TransportError::Closed)) => {}
        other => panic!("expected Transport(Closed), got: {:?}", other),
    }
}

#[test]
fn closed_port_during_sync() {
    let mut m = MockTransport::new();
    m.closed_when_drained = true;
    match Session::new_with_transport(Box::new(m)).reset_to_bridge() {
        Err(NegotiationError::Transport(TransportError::Closed)) => {}
        Err(other) => panic!("expected Transport(Closed), got: {:?}", other),
        Ok(_) => panic!("expected Transport(Closed), reached the bridge"),
    }
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "unplugged");
    let err: Error = TransportError::from(io).into();
    assert!(matches!(err, Error::Transport(TransportError::Io(_))));
    assert!(err.to_string().contains("unplugged"));
}
