#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod doctors;
mod error;
mod prelude;
mod serve;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Search, filter and sort a remote doctor directory"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Doctor feed endpoint
    #[clap(
        long,
        env = "DOCDIR_FEED_URL",
        global = true,
        default_value = crate::doctors::FEED_URL
    )]
    feed_url: String,

    /// Whether to display additional information.
    #[clap(long, env = "DOCDIR_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Doctor directory operations
    Doctors(crate::doctors::App),

    /// Serve the directory over HTTP
    Serve(crate::serve::ServeOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Doctors(sub_app) => crate::doctors::run(sub_app, app.global).await,
        SubCommands::Serve(options) => crate::serve::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
