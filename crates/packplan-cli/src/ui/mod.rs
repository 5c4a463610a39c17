//! Terminal status output.
//!
//! Status lines go to stderr; stdout is reserved for the resolved
//! configuration. Call [`init`] once with the global flags so `--quiet`
//! and `--no-color` apply here as well as to log output.
//!
//! ```no_run
//! use packplan_cli::ui;
//!
//! ui::init(false, false);
//! ui::success("Configuration is valid");
//! ui::error("Entry point not found");
//! ```

mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use messages::{error, info, success, warning};

static QUIET: AtomicBool = AtomicBool::new(false);
static COLOR: AtomicBool = AtomicBool::new(true);

/// Apply the global output flags.
///
/// `quiet` hides everything but errors. Colors are used only when
/// `no_color` is unset and the terminal supports them (see
/// [`crate::logger::should_use_colors`]).
pub fn init(quiet: bool, no_color: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
    COLOR.store(!no_color && crate::logger::should_use_colors(), Ordering::Relaxed);
}

pub(crate) fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub(crate) fn use_color() -> bool {
    COLOR.load(Ordering::Relaxed)
}
