//! Assertion macros
//!
//! Panics carry the `Debug` form of the unexpected value, which for a
//! `BackendError` includes the underlying SQL error.

/// Unwrap an `Ok`, panicking with the error otherwise
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(err) => panic!("expected Ok, got Err({:?})", err),
        }
    };
}

/// Substring check with both sides in the failure message
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {{
        let haystack = &$haystack;
        let needle = $needle;
        assert!(
            haystack.contains(needle),
            "{:?} does not contain {:?}",
            haystack,
            needle
        );
    }};
}
