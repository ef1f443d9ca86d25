pub mod config;
pub mod error;
pub mod network;

// Re-exported so the log macros below resolve at every call site.
pub use tracing;

/// Logs a user-facing success line, rendered with its own glyph by the CLI
/// event formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "sweepr::success", $($arg)*)
    };
}
