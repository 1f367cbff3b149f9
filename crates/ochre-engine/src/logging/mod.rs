//! Logging and diagnostics.
//!
//! Logger initialization targets the `log` facade with `env_logger` as the
//! backend. Recoverable problems are reported through an injected
//! [`Diagnostics`] sink instead of global state, so callers and tests can
//! capture or silence them.

mod diagnostics;
mod init;

pub use diagnostics::{Diagnostics, LogDiagnostics, MemoryDiagnostics, NullDiagnostics, Report, Severity};
pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
