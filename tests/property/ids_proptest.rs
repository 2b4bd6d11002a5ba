//! Identifier and version tag parsing properties

use proptest::prelude::*;

use sharelist::shared::items::{parse_version_etag, version_etag};
use sharelist::shared::{ItemId, NoteId, TodoId, UserId};

proptest! {
    #[test]
    fn prop_positive_integers_parse(value in 1i64..=i64::MAX) {
        let text = value.to_string();
        prop_assert_eq!(text.parse::<ItemId>().ok(), Some(ItemId(value)));
        prop_assert_eq!(text.parse::<TodoId>().ok(), Some(TodoId(value)));
        prop_assert_eq!(text.parse::<NoteId>().ok(), Some(NoteId(value)));
        prop_assert_eq!(text.parse::<UserId>().ok(), Some(UserId(value)));
    }

    #[test]
    fn prop_non_positive_integers_rejected(value in i64::MIN..=0i64) {
        prop_assert!(value.to_string().parse::<ItemId>().is_err());
        prop_assert!(ItemId::new(value).is_err());
    }

    #[test]
    fn prop_non_numeric_rejected(text in "[a-zA-Z_\\-\\.]{1,16}") {
        prop_assert!(text.parse::<ItemId>().is_err());
        prop_assert!(text.parse::<UserId>().is_err());
    }

    #[test]
    fn prop_version_tags_round_trip(version in 1i32..=i32::MAX) {
        prop_assert_eq!(parse_version_etag(&version_etag(version)).ok(), Some(version));
    }
}
