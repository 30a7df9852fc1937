// Library crate: exposes testable modules for integration tests.
// GUI-specific modules (app shell, panel painting) remain in the binary crate.

pub mod events;
pub mod harness;
pub mod helpers;
pub mod i18n;
pub mod state;
pub mod viewport;
