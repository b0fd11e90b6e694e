use bbionfc::ChannelError;
use bbionfc::protocol::{Frame, ShortFrame};
use bbionfc::transport::MockTransport;

#[test]
fn frame_encode_decode() {
    let payload = vec![0xca, 0xfe, 0xba, 0xbe, 0x90, 0x00];
    let f = Frame::encode(&payload).unwrap();
    assert_eq!(&f[..2], &[0x06, 0x00]);
    assert_eq!(Frame::decode(&f).unwrap(), payload);
}

#[test]
fn frame_length_is_little_endian() {
    let payload = vec![0u8; 0x0102];
    let f = Frame::encode(&payload).unwrap();
    assert_eq!(&f[..2], &[0x02, 0x01]);
}

#[test]
fn frame_limits() {
    assert!(Frame::encode(&vec![0u8; 65535]).is_ok());
    assert!(matches!(
        Frame::encode(&vec![0u8; 65536]),
        Err(ChannelError::PayloadTooLarge {
            max: 65535,
            actual: 65536
        })
    ));
    assert!(ShortFrame::encode(&[0u8; 255]).is_ok());
    assert!(ShortFrame::encode(&[0u8; 256]).is_err());
}

#[test]
fn short_frame_read_from_stream() {
    let mut m = MockTransport::with_responses([vec![0x02], vec![0x04], vec![0x00]]);
    assert_eq!(ShortFrame::read_from(&mut m).unwrap(), vec![0x04, 0x00]);
}

#[test]
fn frame_read_from_truncated_stream() {
    let mut m = MockTransport::with_responses([vec![0x03, 0x00, 0xaa]]);
    match Frame::read_from(&mut m) {
        Err(ChannelError::ShortRead { expected, actual }) => {
            assert_eq!(expected, 3);
            assert_eq!(actual, 1);
        }
        other => panic!("expected ShortRead, got: {:?}", other),
    }
}
