use libsc64::protocol::{Command, CommandId, encode_command_frame};
use libsc64::types::{ConfigId, SdCardOp};

#[test]
fn config_get_button_mode_bytes() {
    let bytes = Command::ConfigGet {
        id: ConfigId::ButtonMode,
    }
    .encode();
    assert_eq!(hex::encode(&bytes), "434d44630000000d00000000");
}

#[test]
fn sd_card_init_bytes() {
    let bytes = Command::SdCardOperation { op: SdCardOp::Init }.encode();
    assert_eq!(hex::encode(&bytes), "434d44690000000100000000");
}

#[test]
fn raw_frame_matches_typed_command() {
    let typed = Command::ConfigSet {
        id: ConfigId::CicSeed,
        value: 0xdead_beef,
    };
    let raw = encode_command_frame(CommandId::ConfigSet.as_u8(), &[7, 0xdead_beef], &[]);
    assert_eq!(typed.encode(), raw);
}
