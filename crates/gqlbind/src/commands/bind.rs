use crate::output_utils;
use crate::schema_files::SchemaFileArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use gqlbind_core::binder::BindConfig;
use gqlbind_core::binder::Binder;
use gqlbind_core::binder::BoundSchema;
use gqlbind_core::binder::ResolutionMode;
use gqlbind_core::binder::StaticCatalog;
use gqlbind_core::schema::SchemaBuilder;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, clap::Args)]
pub(crate) struct BindCmd {
    #[arg(
        help="JSON file describing the members of each implementation type.",
        long,
    )]
    catalog: PathBuf,

    #[arg(
        help="Optional JSON bind configuration (model overrides, forced \
             resolvers, scalar host types).",
        long,
    )]
    config: Option<PathBuf>,

    #[arg(
        help="Exit with a failure status if any field needs a hand-written \
             resolver.",
        long,
    )]
    deny_resolvers: bool,

    #[command(flatten)]
    schema_files: SchemaFileArgs,
}

impl BindCmd {
    fn bind(&self) -> anyhow::Result<BoundSchema> {
        let discovered = self.schema_files.discover()?;
        let catalog: StaticCatalog = load_json(&self.catalog)?;
        let config: BindConfig = match &self.config {
            Some(path) => load_json(path)?,
            None => BindConfig::default(),
        };

        let schema = SchemaBuilder::new()
            .load_files(discovered.file_paths)?
            .build()?;
        log::debug!("Built schema with {} types.", schema.types().len());

        let bound = Binder::new(Arc::new(schema), &catalog)
            .with_config(config)
            .bind()?;
        Ok(bound)
    }
}

#[inherent::inherent]
impl RunnableCommand for BindCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let bound = match self.bind() {
            Ok(bound) => bound,
            Err(err) => return CommandResult::failed(err),
        };

        let report = render_report(&bound);
        let num_resolvers = count_user_resolvers(&bound);
        if self.deny_resolvers && num_resolvers > 0 {
            return CommandResult::stderr(format_args!(
                "{report}\n{} {num_resolvers} field(s) need a hand-written resolver.",
                output_utils::RED_X,
            ));
        }
        CommandResult::stdout(format_args!("{report}"))
    }
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("parsing {}", path.display()))
}

fn count_user_resolvers(bound: &BoundSchema) -> usize {
    user_objects(bound)
        .flat_map(|obj| obj.fields().values())
        .filter(|field| field.mode() == ResolutionMode::UserResolver)
        .count()
}

fn user_objects(bound: &BoundSchema) -> impl Iterator<Item = &gqlbind_core::binder::BoundObject> {
    bound.objects().iter().filter(|obj| !obj.name().starts_with("__"))
}

pub(super) fn render_report(bound: &BoundSchema) -> String {
    let mut lines = vec![];
    for object in user_objects(bound) {
        lines.push(format!("{} (model `{}`)", object.name(), object.model()));
        for field in object.fields().values() {
            lines.push(format!(
                "  {}: {} `{}`",
                field.name(),
                field.mode(),
                field.host_name(),
            ));
        }
    }

    let diagnostics = bound.diagnostics();
    if diagnostics.is_empty() {
        lines.push(format!("{} Every field bound to a member.", output_utils::GREEN_CHECK));
    } else {
        lines.push(format!(
            "{} {} diagnostic(s):",
            output_utils::WARNING_SIGN,
            diagnostics.len(),
        ));
        lines.extend(diagnostics.iter().map(|diagnostic| format!("  * {diagnostic}")));
        lines.push(format!(
            "{} field(s) need a hand-written resolver.",
            count_user_resolvers(bound),
        ));
    }
    lines.join("\n")
}
