mod bind;
mod validate;

use crate::Cli;
use crate::CommandResult;
use bind::BindCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlbind")]
pub(crate) enum CommandEnum {
    /// Bind a schema against an implementation member catalog and report how
    /// each field will be resolved.
    Bind(Box<BindCmd>),

    /// Check that a set of schema files builds into a schema.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: &Cli) -> CommandResult {
        match self {
            Self::Bind(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}

#[cfg(test)]
mod tests;
