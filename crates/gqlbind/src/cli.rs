use clap::CommandFactory;
use crate::commands;

/// Binds GraphQL schemas against the members an implementation exposes.
#[derive(clap::Parser, Debug)]
#[command(name = "gqlbind", version, about)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        conflicts_with="verbose",
        help="Only log warnings and errors.",
        long,
        short='q',
    )]
    pub quiet: bool,

    #[arg(
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// With no subcommand there is nothing to bind, so print usage instead.
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
