//! Loading indicator shown while a tool call is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner around a single tool call; inert when quiet.
pub struct LoadingIndicator {
    bar: Option<ProgressBar>,
}

impl LoadingIndicator {
    /// Start spinning with `message` (e.g. from `RendererBinding::render_loading`)
    pub fn start(message: impl Into<String>, quiet: bool) -> Self {
        if quiet {
            return Self::hidden();
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar: Some(bar) }
    }

    fn hidden() -> Self {
        Self { bar: None }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Stop and clear the spinner line
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
