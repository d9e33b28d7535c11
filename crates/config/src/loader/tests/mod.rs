//! Tests for the parameter resolver.
//!
//! Responsibilities:
//! - Test layered resolution through the full load path (precedence, fallback, empty override).
//! - Test that missing keys and invalid fields abort the load with precise errors.
//! - Test default store locations derived from the working and home directories.
//!
//! Invariants:
//! - Tests that change `HOME` or the working directory use `serial_test`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

pub mod scenario_tests;
