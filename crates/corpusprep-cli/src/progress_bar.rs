use corpusprep::progress::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};

const BAR_TEMPLATE: &str = "{msg} [{elapsed_precise}] {wide_bar} {human_pos}/{human_len}";

/// Progress display arg group.
#[derive(clap::Args, Debug)]
pub struct ProgressArgs {
    /// Display a progress bar.
    #[arg(long)]
    pub progress: bool,
}

impl ProgressArgs {
    /// Build the reporter; hidden unless `--progress` was given.
    pub fn reporter(&self) -> BarProgress {
        BarProgress::new(self.progress)
    }
}

/// A [`ProgressReporter`] backed by an ``indicatif`` bar.
#[derive(Clone)]
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    /// Create a visible, or hidden, progress bar.
    pub fn new(display: bool) -> Self {
        let bar = if display {
            ProgressBar::new(0)
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::with_template(BAR_TEMPLATE) {
            bar.set_style(style);
        }
        Self { bar }
    }
}

impl ProgressReporter for BarProgress {
    fn begin(
        &self,
        label: &str,
        total: u64,
    ) {
        self.bar.reset();
        self.bar.set_length(total);
        self.bar.set_message(label.to_string());
    }

    fn advance(
        &self,
        delta: u64,
    ) {
        self.bar.inc(delta);
    }

    fn finish(&self) {
        self.bar.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_bar_tracks_position() {
        let progress = BarProgress::new(false);
        progress.begin("Writing", 10);
        progress.advance(3);
        progress.advance(4);
        assert_eq!(progress.bar.position(), 7);
        assert_eq!(progress.bar.length(), Some(10));

        progress.finish();
        progress.begin("Again", 2);
        assert_eq!(progress.bar.position(), 0);
    }
}
