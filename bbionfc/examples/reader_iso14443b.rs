// ISO 14443-B reader example: REQB, ATTRIB and a SELECT PPSE APDU.
//
// cargo run --example reader_iso14443b --features serial -- /dev/ttyACM0

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

    reader.select_protocol(Protocol::Iso14443B)?;
    reader.field_off()?;
    reader.field_on()?;

    let atqb = reader.send_bytes(CrcMode::Compute, &[0x05, 0x00, 0x00])?;
    println!("ATQB: {}", HexDisplay(&atqb));
    if atqb.len() < 5 {
        bail!("no card answered REQB");
    }

    // ATTRIB with the PUPI from the ATQB
    let mut attrib = vec![0x1d];
    attrib.extend_from_slice(&atqb[1..5]);
    attrib.extend_from_slice(&[0x00, 0x00, 0x01, 0x00]);
    let r = reader.send_bytes(CrcMode::Compute, &attrib)?;
    println!("ATTRIB: {}", HexDisplay(&r));

    let apdu = parse_hex("0a 00 00 a4 04 00 0e 32 50 41 59 2e 53 59 53 2e 44 44 46 30 31 00")
        .map_err(anyhow::Error::msg)?;
    let r = reader.send_bytes(CrcMode::Compute, &apdu)?;
    println!("SELECT PPSE: {}", HexDisplay(&r));

    reader.field_off()?;
    reader.leave()?;
    Ok(())
}
