use bookmyseat_client::LoadingFlag;
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::io::IsTerminal;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

const TICK: Duration = Duration::from_millis(80);

pub fn is_interactive() -> bool {
    std::io::stdout().is_terminal() && std::io::stderr().is_terminal()
}

/// Spinner that is visible only while one of the watched loading flags is set.
pub struct LoadingSpinner {
    bar: ProgressBar,
    message: String,
    flags: Vec<LoadingFlag>,
}

impl LoadingSpinner {
    pub fn new(message: impl Into<String>, flags: Vec<LoadingFlag>, enabled: bool) -> Self {
        let bar = if enabled && is_interactive() {
            let bar = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .map(|s| s.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "))
            {
                bar.set_style(style);
            }
            bar
        } else {
            ProgressBar::hidden()
        };

        Self {
            bar,
            message: message.into(),
            flags,
        }
    }

    fn in_flight(&self) -> usize {
        self.flags.iter().map(LoadingFlag::in_flight).sum()
    }

    fn update(&self) {
        match self.in_flight() {
            0 => self.bar.set_message(""),
            1 => {
                self.bar.set_message(self.message.clone());
                self.bar.tick();
            }
            n => {
                self.bar.set_message(format!("{} ({} requests)", self.message, n));
                self.bar.tick();
            }
        }
    }

    /// Drives `work` to completion, animating while requests are in flight
    pub async fn run<F: Future>(self, work: F) -> F::Output {
        debug!(operation = "loading", message = %self.message, "Waiting for services");
        tokio::pin!(work);
        let mut ticker = tokio::time::interval(TICK);

        let output = loop {
            tokio::select! {
                output = &mut work => break output,
                _ = ticker.tick() => self.update(),
            }
        };

        self.bar.finish_and_clear();
        output
    }
}

/// Cancels `token` on Ctrl-C until the guard is dropped.
pub struct InterruptGuard {
    task: JoinHandle<()>,
}

impl InterruptGuard {
    pub fn new(token: CancellationToken) -> Self {
        let task = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, cancelling pending requests");
                token.cancel();
            }
        });
        Self { task }
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        self.task.abort();
    }
}
