use std::fmt;
use std::sync::Mutex;

/// Severity of a diagnostic report.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
}

impl Severity {
    #[inline]
    pub fn as_level(self) -> log::Level {
        match self {
            Self::Debug => log::Level::Debug,
            Self::Info => log::Level::Info,
            Self::Warning => log::Level::Warn,
            Self::Error => log::Level::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_level(), f)
    }
}

/// Sink for problems that are recovered from rather than propagated
/// (unreadable images, failed SVG renders).
///
/// `context` identifies the offending source, typically its URL.
pub trait Diagnostics: Send + Sync {
    fn report(&self, severity: Severity, message: &str, context: &str);
}

/// Forwards reports to the `log` facade under the `ochre` target.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&self, severity: Severity, message: &str, context: &str) {
        log::log!(target: "ochre", severity.as_level(), "{message} ({context})");
    }
}

/// One captured report.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Report {
    pub severity: Severity,
    pub message: String,
    pub context: String,
}

/// Keeps every report in memory. Intended for tests and for callers that
/// surface problems after a rendering pass.
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    reports: Mutex<Vec<Report>>,
}

impl MemoryDiagnostics {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains captured reports.
    pub fn take(&self) -> Vec<Report> {
        match self.reports.lock() {
            Ok(mut reports) => std::mem::take(&mut *reports),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn report(&self, severity: Severity, message: &str, context: &str) {
        let report = Report { severity, message: message.to_owned(), context: context.to_owned() };
        match self.reports.lock() {
            Ok(mut reports) => reports.push(report),
            Err(poisoned) => poisoned.into_inner().push(report),
        }
    }
}

/// Drops every report.
#[derive(Debug, Default, Copy, Clone)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn report(&self, _severity: Severity, _message: &str, _context: &str) {}
}
