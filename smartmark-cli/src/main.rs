use std::{fmt, io, process::ExitCode};

use clap::Parser;
use colored::Colorize;
use smartmark_lib::{BookmarkId, Controller, CoreConfig, HttpService, config, controller};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod bookmark;

#[derive(Parser, Debug)]
#[command(name = "smartmark")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: bookmark::Command,

    /// Override the bookmark API base URL
    #[arg(long, global = true)]
    api_base_url: Option<String>,
}

/// Why a command did not complete.
#[derive(Debug)]
pub enum Failure {
    Lib(smartmark_lib::Error),
    UnknownId(BookmarkId),
    Output(io::Error),
}

impl Failure {
    fn exit_code(&self) -> sysexits::ExitCode {
        use smartmark_lib::Error;

        match self {
            Self::Lib(Error::Config(_)) => sysexits::ExitCode::Config,
            Self::Lib(Error::Controller(controller::Error::Validation)) => {
                sysexits::ExitCode::DataErr
            }
            Self::Lib(Error::Controller(_)) => sysexits::ExitCode::Unavailable,
            Self::UnknownId(_) => sysexits::ExitCode::NoInput,
            Self::Output(_) => sysexits::ExitCode::IoErr,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lib(err) => write!(f, "{err}"),
            Self::UnknownId(id) => write!(f, "No bookmark with id {id}"),
            Self::Output(err) => write!(f, "Failed to write output: {err}"),
        }
    }
}

impl From<smartmark_lib::Error> for Failure {
    fn from(err: smartmark_lib::Error) -> Self {
        Self::Lib(err)
    }
}

impl From<controller::Error> for Failure {
    fn from(err: controller::Error) -> Self {
        Self::Lib(err.into())
    }
}

impl From<io::Error> for Failure {
    fn from(err: io::Error) -> Self {
        Self::Output(err)
    }
}

impl From<config::Error> for Failure {
    fn from(err: config::Error) -> Self {
        Self::Lib(err.into())
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    human_panic::setup_panic!();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            eprintln!("{} {failure}", "error:".red().bold());
            failure.exit_code().into()
        }
    }
}

async fn run(cli: Cli) -> Result<(), Failure> {
    let mut cfg = CoreConfig::load()?;
    if let Some(url) = cli.api_base_url {
        cfg = cfg.with_api_base_url(url);
    }

    let endpoint = cfg.endpoint();
    debug!("Using bookmark endpoint {endpoint}");

    let mut controller = Controller::new(HttpService::new(endpoint));
    bookmark::handle(&mut controller, &cli.command).await
}
