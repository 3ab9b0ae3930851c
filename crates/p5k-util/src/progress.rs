use std::io::Write;
use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Print a status line such as `    Building p5k-core (riscv32-kernel)`.
///
/// The `label` is right-aligned to 12 columns and printed in bold green,
/// followed by the `message` in the default terminal colour.
pub fn status(label: &str, message: &str) {
    let green_bold = Style::new().green().bold();
    let _ = writeln!(std::io::stderr(), "{:>12} {message}", green_bold.apply_to(label));
}

/// Create an animated spinner for a step whose output is being captured.
///
/// Finish it with [`ProgressBar::finish_and_clear`] before printing anything else.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
