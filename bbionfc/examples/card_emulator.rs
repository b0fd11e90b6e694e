// ISO 14443-A card emulation example. Presents UID deadbeef and answers
// every command with cafebabe 9000 until the firmware ends emulation.
//
// cargo run --example card_emulator --features serial -- /dev/ttyACM0 [legacy]

use anyhow::{Context, Result};
use bbionfc::prelude::*;
use bbionfc::transport::serial::DEFAULT_BAUD_RATE;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let port = args.next().unwrap_or_else(|| "/dev/ttyACM0".to_string());
    let profile = match args.next().as_deref() {
        Some("legacy") => EmulatorProfile::legacy(),
        _ => EmulatorProfile::tagged(),
    };

    let transport = SerialTransport::open(&port, DEFAULT_BAUD_RATE)
        .with_context(|| format!("opening {}", port))?;

    let card = CardProfile::builder()
        .uid(&[0xde, 0xad, 0xbe, 0xef])
        .sak(0x21)
        .ats_historical(b"HydraNFC")
        .build()?;

    let mut emulator = Session::new_with_transport(Box::new(transport))
        .reset_to_bridge()?
        .enter_card_emulator(profile)?;
    if profile.framing == EventFraming::Tagged {
        emulator.configure(&card)?;
    } else {
        // Older firmware only takes UID and SAK
        emulator.set_uid(card.uid().as_bytes())?;
        emulator.set_sak(card.sak().as_u8())?;
    }
    println!("Emulating UID {}", card.uid().to_hex());

    let mut handler = |cmd: &[u8]| {
        println!("Cmd {}", HexDisplay(cmd));
        vec![0xca, 0xfe, 0xba, 0xbe, 0x90, 0x00]
    };
    emulator.start()?.run(&mut handler)?;
    println!("Emulation stopped");
    Ok(())
}
