use errors::AppResult;
use tracing_subscriber::EnvFilter;
use uvtax_cli::{cli, errors};

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let rt =
        tokio::runtime::Runtime::new().map_err(|e| errors::AppError::IoError(e.to_string()))?;
    rt.block_on(cli::run())
}
