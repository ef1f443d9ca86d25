use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Live progress bar for a scan, driven by the engine's completed-record
/// counter.
pub fn scan_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    let style = ProgressStyle::with_template(
        "{spinner:.yellow} {msg} {bar:40.blue/white} {percent:>3}% {elapsed_precise}",
    )
    .unwrap()
    .progress_chars("█▓░");

    bar.set_style(style);
    bar.enable_steady_tick(Duration::from_millis(100));
    bar.set_message("Scanning hosts...");
    bar
}
