// ISO 14443-A reader example: anticollision, select, RATS, PPS and a
// SELECT PPSE APDU against whatever card sits on the HydraNFC antenna.
//
// cargo run --example reader_iso14443a --features serial -- /dev/ttyACM0

use anyhow::{Context, Result, bail};
use bbionfc::prelude::*;
use bbionfc::transport::serial::DEFAULT_BAUD_RATE;

fn main() -> Result<()> {
    env_logger::init();

    let port = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/ttyACM0".to_string());
    let transport = SerialTransport::open(&port, DEFAULT_BAUD_RATE)
        .with_context(|| format!("opening {}", port))?;

    let mut reader = Session::new_with_transport(Box::new(transport))
        .reset_to_bridge()?
        .enter_reader()?;
    println!("Reader mode on {}", port);

    reader.select_protocol(Protocol::Iso14443A)?;
    reader.field_off()?;
    reader.field_on()?;

    let atqa = reader.request_a()?;
    println!("ATQA: {}", HexDisplay(&atqa));
    if atqa.is_empty() {
        bail!("no card answered REQA");
    }

    let uid = reader.send_bytes(CrcMode::Manual, &[0x93, 0x20])?;
    println!("UID + BCC: {}", HexDisplay(&uid));

    let mut select = vec![0x93, 0x70];
    select.extend_from_slice(&uid);
    let sak = reader.send_bytes(CrcMode::Compute, &select)?;
    println!("SAK: {}", HexDisplay(&sak));

    let ats = reader.send_bytes(CrcMode::Compute, &[0xe0, 0x00])?;
    println!("ATS: {}", HexDisplay(&ats));

    let pps = reader.send_bytes(CrcMode::Compute, &[0xd0, 0x01])?;
    println!("PPS: {}", HexDisplay(&pps));

    let apdu = parse_hex("0a 00 00 a4 04 00 0e 32 50 41 59 2e 53 59 53 2e 44 44 46 30 31 00")
        .map_err(anyhow::Error::msg)?;
    let r = reader.send_bytes(CrcMode::Compute, &apdu)?;
    println!("SELECT PPSE: {}", HexDisplay(&r));

    reader.field_off()?;
    reader.leave()?;
    Ok(())
}
