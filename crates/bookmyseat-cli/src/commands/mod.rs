pub mod browse;
pub mod config;
pub mod prompts;
pub mod review;

use crate::notify::TerminalNotifier;
use crate::output::Output;
use crate::progress::{InterruptGuard, LoadingSpinner};
use bookmyseat_client::{LoadingFlag, Services};
use bookmyseat_config::{Config, PathManager};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Config file from `--config`, or the default location
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathManager::default().config_file())
}

/// File values (or development defaults) with `BOOKMYSEAT_*` overrides applied
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = config_path(explicit);
    let mut config = Config::load_or_default(&path)
        .map_err(|e| eyre!("Failed to load config from {}: {}", path.display(), e))?;
    config.apply_env_overrides();
    Ok(config)
}

/// What every data command needs: validated config, wired clients and the output sink.
pub struct Session {
    pub config: Config,
    pub services: Services,
    pub output: Output,
}

impl Session {
    pub fn connect(config: Config, output: Output) -> Result<Self> {
        config.validate().map_err(|e| eyre!("Invalid configuration: {}", e))?;

        let notifier = Arc::new(TerminalNotifier::new(output));
        let services = Services::from_config(&config, notifier).map_err(|e| eyre!("Failed to set up HTTP clients: {}", e))?;
        tracing::debug!(
            movie_service = %config.services.movie_service_url,
            review_service = %config.services.review_service_url,
            tracing_headers = config.tracing.enabled,
            "Services configured"
        );

        Ok(Self { config, services, output })
    }

    fn loading_flags(&self) -> Vec<LoadingFlag> {
        vec![
            self.services.movies.loading_flag(),
            self.services.reviews.loading_flag(),
            self.services.reviews.submitting_flag(),
        ]
    }

    /// Runs a view load with a spinner, cancelling through `cancel` on Ctrl-C
    pub async fn load<F: Future>(&self, message: &str, cancel: CancellationToken, work: F) -> F::Output {
        let _interrupt = InterruptGuard::new(cancel);
        let spinner = LoadingSpinner::new(message, self.loading_flags(), !self.output.is_quiet() && self.output.is_human());
        spinner.run(work).await
    }
}
