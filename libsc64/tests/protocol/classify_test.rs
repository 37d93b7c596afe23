use libsc64::protocol::{Classified, Expectation, Frame, FrameTag, classify};

#[test]
fn tag_alone_decides_category() {
    let cases = [
        (FrameTag::Completion, Expectation::Response, "response"),
        (FrameTag::Error, Expectation::Response, "response"),
        (FrameTag::Packet, Expectation::Response, "discarded"),
        (FrameTag::Packet, Expectation::Packet, "packet"),
        (FrameTag::Completion, Expectation::Packet, "response"),
    ];
    for (tag, expect, want) in cases {
        let got = match classify(Frame::new(tag, 1, vec![0xAB]), expect) {
            Classified::Response(_) => "response",
            Classified::Packet(_) => "packet",
            Classified::Discarded { .. } => "discarded",
        };
        assert_eq!(got, want, "{:?} / {:?}", tag, expect);
    }
}
