#[path = "../common/mod.rs"]
mod common;

use bbionfc::test_support::{SharedMock, emulator_ready_mock, negotiated_emulator};
use bbionfc::{
    CardProfile, ChannelError, CommandHandler, EmulationEvent, EmulatorProfile, Error, Mode,
};

use common::h;

#[test]
fn tagged_emulation_end_to_end() {
    common::init_logger();
    let shared = SharedMock::new(emulator_ready_mock(vec![
        vec![0x01],
        common::activation_event(),
        common::command_event(&h(common::EMULATED_COMMAND)),
        common::end_event(),
    ]));

    let mut ce = negotiated_emulator(shared.boxed(), EmulatorProfile::tagged()).unwrap();
    ce.set_uid(&h(common::EMULATED_UID)).unwrap();
    let mut ce = ce.start().unwrap();

    assert_eq!(ce.next_event().unwrap(), EmulationEvent::Activation);
    let cmd = match ce.next_event().unwrap() {
        EmulationEvent::Command { payload } => payload,
        other => panic!("expected Command, got: {:?}", other),
    };
    assert_eq!(cmd, h(common::EMULATED_COMMAND));

    let before = shared.mock().sent.len();
    ce.respond(&h(common::EMULATED_RESPONSE)).unwrap();
    assert_eq!(
        shared.mock().sent[before..].concat(),
        vec![0x06, 0x00, 0xca, 0xfe, 0xba, 0xbe, 0x90, 0x00]
    );

    assert_eq!(ce.next_event().unwrap(), EmulationEvent::End);
    let Ok(stopped) = ce.stopped() else {
        panic!("End was read but the handle is still running");
    };
    assert_eq!(stopped.mode(), Mode::CardEmulator);

    // sync, mode, set uid, start
    assert_eq!(
        &shared.mock().written()[..8],
        &[0x00, 0x17, 0x04, 0x04, 0xde, 0xad, 0xbe, 0xef]
    );
    assert_eq!(shared.mock().written()[8], 0x0a);
}

#[test]
fn run_with_card_profile() {
    let card = CardProfile::builder()
        .uid(&h(common::EMULATED_UID))
        .sak(common::EMULATED_SAK)
        .ats_historical(common::ATS_HISTORICAL)
        .build()
        .unwrap();

    let shared = SharedMock::new(emulator_ready_mock(vec![
        vec![0x01],
        vec![0x01],
        vec![0x01],
        common::activation_event(),
        common::command_event(&h("e0 80")),
        common::command_event(&h("02 00 a4 04 00")),
        common::end_event(),
    ]));

    let mut ce = negotiated_emulator(shared.boxed(), EmulatorProfile::tagged()).unwrap();
    ce.configure(&card).unwrap();

    let mut commands = Vec::new();
    let stopped = ce
        .start()
        .unwrap()
        .run(&mut |cmd: &[u8]| {
            commands.push(cmd.to_vec());
            h(common::EMULATED_RESPONSE)
        })
        .unwrap();
    drop(stopped);

    assert_eq!(commands, vec![h("e0 80"), h("02 00 a4 04 00")]);
    let written = shared.mock().written();
    let responses = written.windows(8).filter(|w| *w == &h("0600 cafebabe9000")[..]).count();
    assert_eq!(responses, 2);
}

struct CountingHandler {
    activations: usize,
    unknown: Vec<u8>,
}

impl CommandHandler for CountingHandler {
    fn on_command(&mut self, _command: &[u8]) -> Vec<u8> {
        vec![0x6a, 0x82]
    }

    fn on_activation(&mut self) {
        self.activations += 1;
    }

    fn on_unknown_tag(&mut self, tag: u8) {
        self.unknown.push(tag);
    }
}

#[test]
fn run_tolerates_unknown_tags() {
    let mock = emulator_ready_mock(vec![
        vec![0x0c],
        common::activation_event(),
        vec![0xff],
        common::command_event(&[0x00, 0xb0]),
        common::activation_event(),
        common::end_event(),
    ]);
    let ce = negotiated_emulator(Box::new(mock), EmulatorProfile::tagged()).unwrap();

    let mut handler = CountingHandler {
        activations: 0,
        unknown: Vec::new(),
    };
    ce.start().unwrap().run(&mut handler).unwrap();
    assert_eq!(handler.activations, 2);
    assert_eq!(handler.unknown, vec![0x0c, 0xff]);
}

#[test]
fn configuration_nack_is_fatal() {
    let mock = emulator_ready_mock(vec![vec![0x00]]);
    let mut ce = negotiated_emulator(Box::new(mock), EmulatorProfile::tagged()).unwrap();
    let err = ce.set_sak(common::EMULATED_SAK).unwrap_err();
    assert!(matches!(err, ChannelError::NotAcknowledged { got: 0x00 }));
    assert!(err.is_fatal());

    let as_crate: Error = err.into();
    assert!(as_crate.to_string().contains("0x00"));
}

#[test]
fn legacy_firmware_untagged_commands() {
    let mut banner = b"Card emulator started".to_vec();
    banner.resize(40, b'.');
    let mut cmd = vec![0x02, 0x00];
    cmd.extend_from_slice(&h("e0 80"));

    let shared = SharedMock::new(emulator_ready_mock(vec![vec![0x01], vec![0x01], banner, cmd]));
    let mut ce = negotiated_emulator(shared.boxed(), EmulatorProfile::legacy()).unwrap();
    ce.set_uid(&h(common::EMULATED_UID)).unwrap();
    ce.set_sak(common::EMULATED_SAK).unwrap();

    let mut ce = ce.start().unwrap();
    assert_eq!(
        ce.next_event().unwrap(),
        EmulationEvent::Command {
            payload: h("e0 80")
        }
    );
    ce.respond(&h(common::EMULATED_RESPONSE)).unwrap();
    // uid and sak configuration precede the legacy start opcode
    assert_eq!(shared.mock().written()[11], 0x01);

    // Legacy firmware never reports the end; the stream just stops
    assert!(matches!(ce.next_event(), Err(ChannelError::ShortRead { .. })));
}

#[test]
fn leave_emulation() {
    let shared = SharedMock::new(emulator_ready_mock(vec![]));
    let ce = negotiated_emulator(shared.boxed(), EmulatorProfile::tagged()).unwrap();
    let running = ce.start().unwrap();
    let idle = running.leave().unwrap();
    assert_eq!(idle.mode(), Mode::Idle);
    assert_eq!(shared.mock().written(), vec![0x00, 0x17, 0x0a, 0x00]);
}

#[test]
fn early_stopped_check_keeps_session() {
    let shared = SharedMock::new(emulator_ready_mock(vec![
        common::activation_event(),
        common::end_event(),
    ]));
    let ce = negotiated_emulator(shared.boxed(), EmulatorProfile::tagged()).unwrap();
    let mut ce = ce.start().unwrap();
    assert_eq!(ce.next_event().unwrap(), EmulationEvent::Activation);

    let Err(mut ce) = ce.stopped() else {
        panic!("stopped before End was read");
    };
    assert!(!ce.is_ended());
    assert_eq!(shared.mock().pending(), 1);

    assert_eq!(ce.next_event().unwrap(), EmulationEvent::End);
    assert!(ce.is_ended());
    assert!(ce.stopped().is_ok());
    assert_eq!(shared.mock().pending(), 0);
}
