pub mod args;
mod setup;

pub use args::AppArgs;

use crate::ui::run_tui;
use anyhow::Result;

pub async fn launch() -> Result<()> {
    launch_with_args(AppArgs::from_cli()).await
}

pub async fn launch_with_args(args: AppArgs) -> Result<()> {
    let setup::PreparedApp { config } = setup::prepare(args)?;
    run_tui(config).await
}
