//! Style warnings with colored terminal output.
//!
//! Each unique message is printed once per process (until [`clear_warnings`]),
//! so resolving thousands of element styles with the same bad declaration
//! does not flood stderr. Messages are recorded even while output is
//! silenced with [`set_quiet`].

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Every `[component] message` key reported so far.
static WARNED: Mutex<BTreeSet<String>> = Mutex::new(BTreeSet::new());

/// When set, warnings are recorded but not printed.
static QUIET: AtomicBool = AtomicBool::new(false);

/// Lock the warning set. A poisoned lock still holds a valid set.
fn warned() -> MutexGuard<'static, BTreeSet<String>> {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Report a style problem (prints once per unique message).
///
/// # Example
/// ```
/// use wren_common::warning::{emitted_warnings, warn_once};
///
/// warn_once("CSS", "dropped declaration 'color: ;'");
/// assert!(emitted_warnings().contains(&"[CSS] dropped declaration 'color: ;'".to_string()));
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let first_time = warned().insert(key);

    if first_time && !QUIET.load(Ordering::Relaxed) {
        eprintln!("{}", format!("[Wren {component}] ⚠ {message}").yellow());
    }
}

/// Silence (or re-enable) warning output. Warnings are still recorded.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// All warnings recorded since start-up or the last [`clear_warnings`],
/// as `[component] message` strings in sorted order.
#[must_use]
pub fn emitted_warnings() -> Vec<String> {
    warned().iter().cloned().collect()
}

/// Forget all recorded warnings (call before resolving a new document).
pub fn clear_warnings() {
    warned().clear();
}
