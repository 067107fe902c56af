//! Property-based tests for path normalization.

use super::normalize::{normalize, resolve_components};
use proptest::prelude::*;
use std::path::PathBuf;

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,16}"
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(component_strategy(), 1..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

proptest! {
    // Normalization is idempotent: normalize(normalize(p)) == normalize(p)
    #[test]
    fn normalization_idempotent(path in absolute_path_strategy()) {
        let once = normalize(&path).unwrap();
        let twice = normalize(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    // Normalized paths never contain "." or ".." components
    #[test]
    fn normalized_paths_have_no_dot_components(path in absolute_path_strategy()) {
        let normalized = normalize(&path).unwrap();
        let text = normalized.to_string_lossy();
        prop_assert!(!text.contains("/./"));
        prop_assert!(!text.contains(".."));
    }

    // Component resolution preserves absolute paths without dots
    #[test]
    fn clean_absolute_paths_pass_through(path in absolute_path_strategy()) {
        prop_assert_eq!(resolve_components(&path).unwrap(), path);
    }

    // Normalization always yields an absolute path
    #[test]
    fn normalized_paths_are_absolute(name in component_strategy()) {
        let normalized = normalize(std::path::Path::new(&name)).unwrap();
        prop_assert!(normalized.is_absolute());
    }
}
