mod args;
mod error;
mod show;
mod slug;

use clap::Parser;

use crate::error::Result;

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = Cli::parse();

    args::init_logging(cli.verbose.log_level());

    cli.command
        .run()
        .map_err(|e| proc_exit::Code::FAILURE.with_message(format!("{e:#}")))?;

    Ok(())
}

/// Deployment-aware site configuration for EBADBLOG
#[derive(Debug, clap::Parser)]
#[command(name = "ebadblog", about, version)]
struct Cli {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
enum Command {
    Config(show::ConfigArgs),
    Url(show::UrlArgs),
    Slug(slug::SlugArgs),
}

impl Command {
    fn run(&self) -> Result<()> {
        match self {
            Self::Config(cmd) => cmd.run(),
            Self::Url(cmd) => cmd.run(),
            Self::Slug(cmd) => cmd.run(),
        }
    }
}

#[test]
fn verify_app() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
