use crate::binder::BoundSchema;
use crate::execution::ExecutableSchemaBuilder;
use crate::execution::ExecutionFault;
use crate::execution::FieldResolver;
use crate::execution::RequestState;
use crate::execution::ResolverMiddleware;
use crate::execution::Response;
use crate::execution::executor::Executor;
use crate::execution::executor::Propagation;
use crate::operation::OperationKind;
use crate::operation::Request;
use crate::operation::RequestError;
use crate::schema::Schema;
use crate::value::HostObject;
use std::collections::HashMap;
use std::sync::Arc;

/// A bound schema together with everything needed to execute requests
/// against it. Built with [`ExecutableSchema::builder()`] and shared by
/// concurrent requests.
pub struct ExecutableSchema {
    pub(crate) bound: BoundSchema,
    pub(crate) middleware: Option<Arc<dyn ResolverMiddleware>>,
    pub(crate) mutation_root: Option<Arc<dyn HostObject>>,
    pub(crate) query_root: Arc<dyn HostObject>,
    pub(crate) resolvers: HashMap<String, HashMap<String, Arc<dyn FieldResolver>>>,
}
impl ExecutableSchema {
    pub fn builder(bound: BoundSchema) -> ExecutableSchemaBuilder {
        ExecutableSchemaBuilder::new(bound)
    }

    pub fn bound(&self) -> &BoundSchema {
        &self.bound
    }

    pub fn schema(&self) -> &Arc<Schema> {
        self.bound.schema()
    }

    pub(crate) fn resolver(&self, object: &str, field: &str) -> Option<&Arc<dyn FieldResolver>> {
        self.resolvers.get(object).and_then(|fields| fields.get(field))
    }

    /// Execute one request.
    ///
    /// Request-level problems (no matching operation, bad variables,
    /// subscriptions) come back as a response with `null` data. Field errors
    /// are collected into the response's `errors`. `Err` is reserved for
    /// [`ExecutionFault`]s.
    pub async fn execute(&self, request: Request) -> Result<Response, ExecutionFault> {
        let operation = match request.select_operation() {
            Ok(operation) => operation,
            Err(err) => return Ok(request_failed(err)),
        };
        let kind = operation.kind();
        if kind == OperationKind::Subscription {
            return Ok(Response::error("subscriptions are not supported"));
        }

        let schema = self.schema();
        let variables = match operation.coerce_variables(schema, request.variables()) {
            Ok(variables) => variables,
            Err(err) => return Ok(request_failed(err)),
        };

        let (root_name, root) = match (schema.root_type_name(kind), self.root_object(kind)) {
            (Some(name), Some(root)) => (name, root),
            _ => return Ok(request_failed(RequestError::UnsupportedOperation(kind))),
        };
        let root_object = self.bound.object(root_name)
            .ok_or_else(|| ExecutionFault::UnboundRootObject(root_name.to_string()))?;

        log::debug!(
            "executing {kind} `{}`",
            operation.name().unwrap_or("<anonymous>"),
        );

        let state = RequestState::new(
            request.document(),
            variables,
            request.cancellation().to_owned(),
        );
        let outcome = {
            let executor = Executor::new(self, &state);
            let fields = executor.collect_fields(
                &[operation.selection_set()],
                root_name,
            );
            executor.execute_selection_set(root_object, root, fields, None).await
        };

        let data = match outcome {
            Ok(data) => serde_json::Value::Object(data),
            Err(Propagation::NonNullViolation) => serde_json::Value::Null,
            Err(Propagation::Fault(fault)) => return Err(fault),
        };
        Ok(Response {
            data,
            errors: state.into_errors(),
        })
    }

    fn root_object(&self, kind: OperationKind) -> Option<&Arc<dyn HostObject>> {
        match kind {
            OperationKind::Query => Some(&self.query_root),
            OperationKind::Mutation => self.mutation_root.as_ref(),
            OperationKind::Subscription => None,
        }
    }
}
impl std::fmt::Debug for ExecutableSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutableSchema")
            .field("bound", &self.bound)
            .field("has_middleware", &self.middleware.is_some())
            .field("resolvers", &self.resolvers.iter()
                .map(|(object, fields)| (object, fields.keys().collect::<Vec<_>>()))
                .collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

fn request_failed(err: RequestError) -> Response {
    log::debug!("request rejected: {err}");
    Response::error(err.to_string())
}
