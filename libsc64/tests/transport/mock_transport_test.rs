use libsc64::transport::{MockTransport, Transport};

#[test]
fn short_read_reports_count() {
    let mut m = MockTransport::new();
    m.push_bytes(&[1, 2, 3]);
    let mut buf = [0u8; 8];
    assert_eq!(m.receive(&mut buf, 1000).unwrap(), 3);
    assert_eq!(&buf[..3], &[1, 2, 3]);
    assert_eq!(m.receive(&mut buf, 1000).unwrap(), 0);
}

#[test]
fn replies_follow_sends() {
    let mut m = MockTransport::new();
    m.push_reply(vec![0xAA]);
    m.push_reply(vec![0xBB]);

    m.send(b"first").unwrap();
    let mut buf = [0u8; 1];
    m.receive(&mut buf, 1000).unwrap();
    assert_eq!(buf, [0xAA]);

    m.send(b"second").unwrap();
    m.receive(&mut buf, 1000).unwrap();
    assert_eq!(buf, [0xBB]);
    assert_eq!(m.pop_sent(), Some(b"second".to_vec()));
}
