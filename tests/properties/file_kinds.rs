//! Property tests for file type handling.

use std::path::PathBuf;

use proptest::prelude::*;

use firesale::domain::value_objects::FileKind;

fn stem() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,16}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a path given the markdown extension is always openable
    /// and adding it again changes nothing.
    #[test]
    fn property_ensure_extension_is_idempotent(
        name in stem()
    ) {
        let once = FileKind::Markdown.ensure_extension(PathBuf::from(format!("/tmp/{}", name)));
        let twice = FileKind::Markdown.ensure_extension(once.clone());

        prop_assert_eq!(&once, &twice);
        prop_assert!(FileKind::can_open(&once));
        prop_assert_eq!(FileKind::from_path(&once), Some(FileKind::Markdown));
    }

    /// PROPERTY: classification never panics on arbitrary names.
    #[test]
    fn property_classification_never_panics(
        s in "(?s).{0,128}"
    ) {
        let path = PathBuf::from(s);
        let _ = FileKind::from_path(&path);
        let _ = FileKind::can_open(&path);
    }
}
