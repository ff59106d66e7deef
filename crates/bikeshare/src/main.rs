mod bootstrap;

use std::io;

use anyhow::Result;
use bikeshare_core::settings::Settings;
use bikeshare_runtime::orchestrator::ExplorerSession;
use bikeshare_runtime::prompt::Prompter;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("bikeshare v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data directory: {}", settings.data_dir.display());

    let prompter = Prompter::new(io::stdin().lock(), io::stdout().lock())
        .with_max_retries(settings.max_retries);

    let mut session = ExplorerSession::new(
        prompter,
        settings.city_config(),
        settings.preview_rows as usize,
    );
    session.run()?;

    Ok(())
}
