use ine_demographics::{cli, errors};
use errors::AppResult;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> AppResult<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env).with_target(false).init();

    let rt =
        tokio::runtime::Runtime::new().map_err(|e| errors::AppError::IoError(e.to_string()))?;

    rt.block_on(cli::cli())
}
