use clap::{Parser, Subcommand};
use color_eyre::eyre::eyre;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use sonarqube_resource::{
    SonarQube,
    commands::{Check, Get, Put},
    config::RequestLoader,
    logging,
    protocol::{CheckRequest, InRequest, write_response},
};

#[derive(Parser)]
#[command(name = "sonarqube-resource")]
#[command(about = "Pipeline resource for SonarQube analyses", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List one version per analysis, oldest first (request on stdin)
    Check,

    /// Store the current measures as result.json (request on stdin)
    In {
        /// Directory receiving result.json
        #[arg(value_name = "DESTINATION")]
        destination: PathBuf,
    },

    /// No-op publish, always emits an empty version list
    Out {
        /// Build sources directory (unused)
        #[arg(value_name = "SOURCE_DIR")]
        source_dir: Option<PathBuf>,
    },
}

/// Arguments with the subcommand taken from the executable name when the
/// binary is linked as /opt/resource/check, in or out.
fn resource_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut args: Vec<OsString> = args.into_iter().collect();

    let invoked_as = args
        .first()
        .and_then(|arg| Path::new(arg).file_name())
        .and_then(|name| name.to_str())
        .map(str::to_owned);

    if let Some(name) = invoked_as
        && matches!(name.as_str(), "check" | "in" | "out")
    {
        args.insert(1, name.into());
    }

    args
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init().map_err(|e| eyre!("{}", e))?;

    let cli = Cli::parse_from(resource_args(std::env::args_os()));

    match cli.command {
        Command::Check => {
            let request: CheckRequest = RequestLoader::load_from_reader(io::stdin().lock())?;
            let results = Arc::new(SonarQube::for_source(&request.source)?);

            let response = Check::new(results).run(&request).await?;
            write_response(io::stdout().lock(), &response)?;
        }
        Command::In { destination } => {
            let request: InRequest = RequestLoader::load_from_reader(io::stdin().lock())?;
            let results = Arc::new(SonarQube::for_source(&request.source)?);

            let response = Get::new(results).run(&request, &destination).await?;
            write_response(io::stdout().lock(), &response)?;
        }
        Command::Out { source_dir } => {
            debug!(?source_dir, "Nothing to publish");
            write_response(io::stdout().lock(), &Put::new().run())?;
        }
    }

    Ok(())
}
