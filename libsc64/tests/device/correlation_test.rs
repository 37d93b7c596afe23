#[path = "../common/mod.rs"]
mod common;

use libsc64::Error;
use libsc64::test_support::completion;
use proptest::prelude::*;

proptest! {
    #[test]
    fn mismatched_id_always_fails(
        id in any::<u8>().prop_filter("must differ from 'v'", |b| *b != b'v'),
        payload in prop::collection::vec(any::<u8>(), 0..16),
    ) {
        let (_shared, mut dev) = common::shared_ready_device(vec![completion(id, &payload)]);
        match dev.identifier_get() {
            Err(Error::Correlation { expected, actual }) => {
                prop_assert_eq!(expected, b'v');
                prop_assert_eq!(actual, id);
            }
            other => prop_assert!(false, "expected Correlation, got {:?}", other),
        }
    }
}

#[test]
fn silent_device_is_a_read_failure() {
    let (_shared, mut dev) = common::shared_ready_device(vec![]);
    assert!(matches!(
        dev.state_reset(),
        Err(Error::TransportRead { .. })
    ));
}
