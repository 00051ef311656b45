use crate::output_utils;
use crate::schema_files::SchemaFileArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use gqlbind_core::schema::SchemaBuilder;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[command(flatten)]
    schema_files: SchemaFileArgs,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let discovered = match self.schema_files.discover() {
            Ok(discovered) => discovered,
            Err(err) => return CommandResult::failed(err),
        };

        let schema = SchemaBuilder::new()
            .load_files(discovered.file_paths.to_owned())
            .and_then(SchemaBuilder::build);

        match schema {
            Ok(schema) => CommandResult::stdout(format_args!(
                concat!(
                    "{} Schema built successfully:\n",
                    "  * Analyzed {} files.\n",
                    "  * Skipped {} non-graphql files.\n",
                    "  * Validated {} type definitions.\n",
                    "  * Validated {} directive definitions.",
                ),
                output_utils::GREEN_CHECK,
                discovered.file_paths.len(),
                discovered.num_skipped,
                schema.types().len(),
                schema.directives().len(),
            )),

            Err(e) => CommandResult::stderr(format_args!(
                "{} Errors building schema: {e:#?}",
                output_utils::RED_X,
            )),
        }
    }
}
