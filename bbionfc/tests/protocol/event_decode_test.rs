#[path = "../common/mod.rs"]
mod common;

use bbionfc::constants::CE_TAG_CARD_CMD;
use bbionfc::protocol::channel;
use bbionfc::protocol::events::read_event;
use bbionfc::protocol::{EmulationEvent, EventFraming};
use bbionfc::transport::MockTransport;
use bbionfc::ChannelError;

/// Write `payload` with `respond`, then feed the written bytes back as a
/// command event.
fn echo_through_device(payload: &[u8]) -> EmulationEvent {
    let mut host = MockTransport::new();
    channel::respond(&mut host, payload).unwrap();

    let mut echoed = vec![CE_TAG_CARD_CMD];
    echoed.extend_from_slice(&host.written());

    let mut device = MockTransport::with_responses([echoed]);
    channel::next_event(&mut device).unwrap()
}

#[test]
fn respond_round_trips_boundary_lengths() {
    for len in [0usize, 1, 65535] {
        let payload: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
        match echo_through_device(&payload) {
            EmulationEvent::Command { payload: got } => assert_eq!(got, payload, "len {}", len),
            other => panic!("expected Command, got: {:?}", other),
        }
    }
}

#[test]
fn respond_rejects_oversized_payload() {
    let mut m = MockTransport::new();
    assert!(matches!(
        channel::respond(&mut m, &vec![0u8; 65536]),
        Err(ChannelError::PayloadTooLarge { .. })
    ));
    assert!(m.sent.is_empty());
}

#[test]
fn event_sequence_from_fixture() {
    let mut m = MockTransport::with_responses([
        common::activation_event(),
        common::command_event(&common::h(common::EMULATED_COMMAND)),
        common::end_event(),
    ]);
    assert_eq!(channel::next_event(&mut m).unwrap(), EmulationEvent::Activation);
    assert_eq!(
        channel::next_event(&mut m).unwrap(),
        EmulationEvent::Command {
            payload: common::h(common::EMULATED_COMMAND)
        }
    );
    assert_eq!(channel::next_event(&mut m).unwrap(), EmulationEvent::End);
}

#[test]
fn events_decoded_from_one_chunk() {
    // Everything may already be buffered when the host reads
    let mut stream = common::activation_event();
    stream.extend(common::command_event(&[0x00, 0xa4]));
    stream.extend(common::end_event());
    let mut m = MockTransport::with_responses([stream]);

    let mut events = Vec::new();
    loop {
        let ev = read_event(&mut m, EventFraming::Tagged).unwrap();
        let done = ev.is_terminal();
        events.push(ev);
        if done {
            break;
        }
    }
    assert_eq!(events.len(), 3);
    assert_eq!(m.pending(), 0);
}

#[test]
fn event_encode_matches_wire() {
    let ev = EmulationEvent::Command {
        payload: common::h(common::EMULATED_COMMAND),
    };
    assert_eq!(
        ev.encode().unwrap(),
        common::command_event(&common::h(common::EMULATED_COMMAND))
    );
    assert_eq!(EmulationEvent::decode(&ev.encode().unwrap()).unwrap(), ev);
}
