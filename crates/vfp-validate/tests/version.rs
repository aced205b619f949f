//! Property tests for the version grammar.

use proptest::prelude::*;
use vfp_validate::{Version, validate_versions_compatible};

proptest! {
    #[test]
    fn stable_triples_roundtrip(major in 0u64..1000, minor in 0u64..1000, patch in 0u64..1000) {
        let text = format!("{major}.{minor}.{patch}");
        let version: Version = text.parse().unwrap();
        prop_assert_eq!(version.major, major);
        prop_assert_eq!(version.minor, minor);
        prop_assert_eq!(version.patch, patch);
        prop_assert!(version.prerelease.is_none());
        prop_assert_eq!(version.to_string(), text);
    }

    #[test]
    fn prerelease_notations_normalize_identically(
        major in 0u64..100,
        minor in 0u64..100,
        patch in 0u64..100,
        tag in "[a-z]{1,4}[0-9]{0,3}",
    ) {
        let hyphenated: Version = format!("{major}.{minor}.{patch}-{tag}").parse().unwrap();
        let suffixed: Version = format!("{major}.{minor}.{patch}{tag}").parse().unwrap();
        prop_assert_eq!(&hyphenated, &suffixed);
        prop_assert_eq!(hyphenated.prerelease.as_deref(), Some(tag.as_str()));
    }

    #[test]
    fn identical_strings_are_always_compatible(
        major in 0u64..100,
        minor in 0u64..100,
        patch in 0u64..100,
    ) {
        let text = format!("{major}.{minor}.{patch}");
        prop_assert!(validate_versions_compatible(&text, &text).is_ok());
    }

    #[test]
    fn stable_same_major_is_compatible(
        major in 0u64..100,
        minor_a in 0u64..100,
        patch_a in 0u64..100,
        minor_b in 0u64..100,
        patch_b in 0u64..100,
    ) {
        let a = format!("{major}.{minor_a}.{patch_a}");
        let b = format!("{major}.{minor_b}.{patch_b}");
        prop_assert!(validate_versions_compatible(&a, &b).is_ok());
    }

    #[test]
    fn different_majors_are_never_compatible(
        major_a in 0u64..100,
        major_b in 101u64..200,
        minor in 0u64..100,
        patch in 0u64..100,
    ) {
        let a = format!("{major_a}.{minor}.{patch}");
        let b = format!("{major_b}.{minor}.{patch}");
        prop_assert!(validate_versions_compatible(&a, &b).is_err());
    }
}
