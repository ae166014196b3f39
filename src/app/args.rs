use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "birthday-terminal")]
#[command(about = "A birthday greeting disguised as a database terminal")]
pub struct AppArgs {
    #[arg(long, help = "Name of the birthday person (overrides the config file)")]
    pub name: Option<String>,

    #[arg(long, help = "Closing message of the COMMIT scene")]
    pub message: Option<String>,

    #[arg(long, help = "Config file path (JSON)")]
    pub config: Option<PathBuf>,

    #[arg(long = "log-file", help = "Write logs to this file")]
    pub log_file: Option<PathBuf>,
}

impl AppArgs {
    pub fn from_cli() -> Self {
        <Self as Parser>::parse()
    }
}
