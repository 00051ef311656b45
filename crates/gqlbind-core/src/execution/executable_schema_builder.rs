use crate::binder::BoundSchema;
use crate::binder::ResolutionMode;
use crate::execution::ExecutableSchema;
use crate::execution::FieldResolver;
use crate::execution::ResolverMiddleware;
use crate::operation::OperationKind;
use crate::value::HostObject;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, ExecutableSchemaBuildError>;

/// Wires a [`BoundSchema`] to its root objects and the hand-written
/// resolvers the binder asked for.
pub struct ExecutableSchemaBuilder {
    bound: BoundSchema,
    middleware: Option<Arc<dyn ResolverMiddleware>>,
    mutation_root: Option<Arc<dyn HostObject>>,
    query_root: Option<Arc<dyn HostObject>>,
    resolvers: HashMap<String, HashMap<String, Arc<dyn FieldResolver>>>,
}
impl ExecutableSchemaBuilder {
    pub fn new(bound: BoundSchema) -> Self {
        Self {
            bound,
            middleware: None,
            mutation_root: None,
            query_root: None,
            resolvers: HashMap::new(),
        }
    }

    /// The host object handed to the query root's fields. Defaults to a
    /// member-less object, which suffices when every root field is served by
    /// a registered resolver.
    pub fn query_root(mut self, root: impl HostObject) -> Self {
        self.query_root = Some(Arc::new(root));
        self
    }

    /// Same as [`query_root()`](Self::query_root) for the mutation root.
    pub fn mutation_root(mut self, root: impl HostObject) -> Self {
        self.mutation_root = Some(Arc::new(root));
        self
    }

    pub fn resolver(
        mut self,
        object: impl Into<String>,
        field: impl Into<String>,
        resolver: impl FieldResolver + 'static,
    ) -> Self {
        self.resolvers
            .entry(object.into())
            .or_default()
            .insert(field.into(), Arc::new(resolver));
        self
    }

    pub fn middleware(mut self, middleware: impl ResolverMiddleware + 'static) -> Self {
        self.middleware = Some(Arc::new(middleware));
        self
    }

    pub fn build(self) -> Result<ExecutableSchema> {
        for (object_name, fields) in &self.resolvers {
            for field_name in fields.keys() {
                let targets_user_resolver = self.bound.object(object_name)
                    .and_then(|obj| obj.field(field_name))
                    .map(|field| field.mode() == ResolutionMode::UserResolver)
                    .unwrap_or(false);
                if !targets_user_resolver {
                    return Err(ExecutableSchemaBuildError::UnknownResolverTarget {
                        field: field_name.to_string(),
                        object: object_name.to_string(),
                    });
                }
            }
        }

        for object in self.bound.objects() {
            for field in object.fields().values() {
                if field.mode() != ResolutionMode::UserResolver {
                    continue;
                }
                let registered = self.resolvers.get(object.name())
                    .map(|fields| fields.contains_key(field.name()))
                    .unwrap_or(false);
                if !registered {
                    return Err(ExecutableSchemaBuildError::MissingResolver {
                        field: field.name().to_string(),
                        object: object.name().to_string(),
                    });
                }
            }
        }

        let schema = Arc::clone(self.bound.schema());
        let query_root = check_root(
            OperationKind::Query,
            schema.query_type().name(),
            self.query_root,
        )?;
        let mutation_root = match schema.mutation_type() {
            Some(def) => Some(check_root(OperationKind::Mutation, def.name(), self.mutation_root)?),
            None => None,
        };

        log::debug!(
            "executable schema ready: {} bound objects, {} registered resolvers",
            self.bound.objects().len(),
            self.resolvers.values().map(HashMap::len).sum::<usize>(),
        );

        Ok(ExecutableSchema {
            bound: self.bound,
            middleware: self.middleware,
            mutation_root,
            query_root,
            resolvers: self.resolvers,
        })
    }
}

fn check_root(
    operation: OperationKind,
    type_name: &str,
    root: Option<Arc<dyn HostObject>>,
) -> Result<Arc<dyn HostObject>> {
    let root = root.unwrap_or_else(|| Arc::new(EmptyRoot(type_name.to_string())));
    if root.type_name() != type_name {
        return Err(ExecutableSchemaBuildError::RootTypeMismatch {
            expected: type_name.to_string(),
            found: root.type_name().to_string(),
            operation,
        });
    }
    Ok(root)
}

/// Stand-in root object with no members.
struct EmptyRoot(String);
impl HostObject for EmptyRoot {
    fn type_name(&self) -> &str {
        self.0.as_str()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExecutableSchemaBuildError {
    #[error("no resolver was registered for {object}.{field}, which has no matching member")]
    MissingResolver {
        field: String,
        object: String,
    },

    #[error(
        "the {operation} root object reports type `{found}`, but the schema's {operation} \
        root type is `{expected}`"
    )]
    RootTypeMismatch {
        expected: String,
        found: String,
        operation: OperationKind,
    },

    #[error("a resolver was registered for {object}.{field}, which is not a user-resolved field")]
    UnknownResolverTarget {
        field: String,
        object: String,
    },
}
