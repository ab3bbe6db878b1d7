//! Integration tests for the warning channel.
//!
//! Warnings live in process-wide state, so clearing them is tested in its own
//! test binary.

use wren_common::warning::{clear_warnings, emitted_warnings, set_quiet, warn_once};

#[test]
fn test_clear_warnings_allows_reporting_again() {
    set_quiet(true);

    warn_once("CSS", "dropped declaration 'width': empty value");
    warn_once("CSS", "dropped declaration 'width': empty value");
    assert_eq!(emitted_warnings().len(), 1);

    clear_warnings();
    assert!(emitted_warnings().is_empty());

    warn_once("CSS", "dropped declaration 'width': empty value");
    assert_eq!(
        emitted_warnings(),
        ["[CSS] dropped declaration 'width': empty value"]
    );
}
