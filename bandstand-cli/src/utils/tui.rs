use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a simulated delay runs.
pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner} {msg}")
            .unwrap(),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Transient message that the caller dismisses with `finish_and_clear`.
pub fn create_toast(message: String) -> ProgressBar {
    let toast = ProgressBar::new_spinner();
    toast.set_style(ProgressStyle::default_spinner().template("{msg}").unwrap());
    toast.set_message(message);
    toast
}
