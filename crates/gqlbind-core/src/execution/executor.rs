use crate::ast;
use crate::binder::BoundField;
use crate::binder::BoundObject;
use crate::binder::ResolutionMode;
use crate::execution::ExecutableSchema;
use crate::execution::ExecutionFault;
use crate::execution::FieldError;
use crate::execution::NextResolver;
use crate::execution::PathSegment;
use crate::execution::RequestState;
use crate::execution::ResolverContext;
use crate::execution::ResponsePath;
use crate::execution::ServerError;
use crate::introspection::SchemaView;
use crate::introspection::TypeView;
use crate::operation::CollectedField;
use crate::operation::FieldCollector;
use crate::operation::Variables;
use crate::schema::Schema;
use crate::types::FieldDef;
use crate::types::InputValueDef;
use crate::types::TypeRef;
use crate::value::Arguments;
use crate::value::FieldValue;
use crate::value::HostObject;
use crate::value::coerce_input;
use crate::value::literal_to_json;
use crate::value::serialize_leaf;
use futures::FutureExt;
use futures::future;
use futures::future::BoxFuture;
use futures::future::Either;
use serde_json::Value as Json;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

type ResponseMap = serde_json::Map<String, Json>;

/// Why a value could not be completed.
#[derive(Debug)]
pub(crate) enum Propagation {
    /// A `null` reached a non-null position. The error has already been
    /// recorded; the nearest nullable ancestor becomes `null`.
    NonNullViolation,

    /// Aborts the whole request.
    Fault(ExecutionFault),
}
impl std::convert::From<ExecutionFault> for Propagation {
    fn from(fault: ExecutionFault) -> Self {
        Self::Fault(fault)
    }
}

/// Walks one operation's selection sets, resolving and completing every
/// field. Lives for a single request.
pub(crate) struct Executor<'a> {
    collector: FieldCollector<'a>,
    exec: &'a ExecutableSchema,
    state: &'a RequestState<'a>,
}
impl<'a> Executor<'a> {
    pub(crate) fn new(exec: &'a ExecutableSchema, state: &'a RequestState<'a>) -> Self {
        Self {
            collector: FieldCollector::new(state.document(), state.variables()),
            exec,
            state,
        }
    }

    pub(crate) fn collect_fields(
        &self,
        selection_sets: &[&'a ast::operation::SelectionSet],
        object_name: &str,
    ) -> Vec<CollectedField<'a>> {
        let implementors = self.exec.schema().implementors(object_name);
        self.collector.collect(selection_sets, &implementors)
    }

    /// Resolve `fields` on `parent`. Siblings run concurrently unless the
    /// object is the mutation root, whose fields run one after another in
    /// document order. Either way the result map follows document order.
    pub(crate) fn execute_selection_set<'b>(
        &'b self,
        object: &'b BoundObject,
        parent: &'b Arc<dyn HostObject>,
        fields: Vec<CollectedField<'a>>,
        path: Option<&'b ResponsePath<'b>>,
    ) -> BoxFuture<'b, Result<ResponseMap, Propagation>> {
        async move {
            let results = if object.disable_concurrency() {
                let mut results = Vec::with_capacity(fields.len());
                for field in &fields {
                    results.push(self.execute_field(object, parent, field, path).await);
                }
                results
            } else {
                future::join_all(
                    fields.iter().map(|field| self.execute_field(object, parent, field, path)),
                ).await
            };

            let mut data = ResponseMap::new();
            let mut violated = false;
            for (field, result) in fields.iter().zip(results) {
                match result {
                    Ok(value) => {
                        data.insert(field.response_key().to_string(), value);
                    },
                    Err(Propagation::NonNullViolation) => violated = true,
                    Err(fault @ Propagation::Fault(_)) => return Err(fault),
                }
            }

            if violated {
                Err(Propagation::NonNullViolation)
            } else {
                Ok(data)
            }
        }.boxed()
    }

    fn execute_field<'b>(
        &'b self,
        object: &'b BoundObject,
        parent: &'b Arc<dyn HostObject>,
        field: &'b CollectedField<'a>,
        path: Option<&'b ResponsePath<'b>>,
    ) -> BoxFuture<'b, Result<Json, Propagation>> {
        async move {
            let field_path = ResponsePath::new(
                path,
                PathSegment::Field(field.response_key().to_string()),
            );
            if field.name() == "__typename" {
                return Ok(Json::String(object.name().to_string()));
            }

            let schema: &Schema = self.exec.schema();
            let (field_def, bound_field) = match self.introspection_field(object, field.name()) {
                Some(def) => (def, None),
                None => {
                    let bound = object.field(field.name()).ok_or_else(|| {
                        ExecutionFault::UnknownField {
                            field: field.name().to_string(),
                            object: object.name().to_string(),
                        }
                    })?;
                    (bound.def(), Some(bound))
                },
            };
            let type_ref: &TypeRef = field_def.type_ref();

            let arguments = match self.coerce_arguments(field_def, bound_field, field) {
                Ok(arguments) => arguments,
                Err(err) => return self.field_failed(type_ref, err, field, &field_path),
            };
            let ctx = ResolverContext {
                arguments: &arguments,
                cancellation: self.state.cancellation(),
                field: field_def,
                object_type: object.name(),
                path: &field_path,
                schema,
            };

            let resolved = match bound_field {
                Some(bound) => self.resolve(&ctx, object, bound, parent).await?,
                None => self.resolve_introspection(field_def, &arguments),
            };
            match resolved {
                Ok(value) => self.complete_value(type_ref, field, value, &field_path).await,
                Err(err) => self.field_failed(type_ref, err, field, &field_path),
            }
        }.boxed()
    }

    /// `__schema` and `__type` exist on the query root without being bound.
    fn introspection_field(&self, object: &BoundObject, name: &str) -> Option<&'a FieldDef> {
        let schema: &'a Schema = self.exec.schema();
        if object.is_root() && schema.query_type().name() == object.name() {
            schema.introspection_field(name)
        } else {
            None
        }
    }

    fn coerce_arguments(
        &self,
        field_def: &FieldDef,
        bound: Option<&BoundField>,
        field: &CollectedField<'_>,
    ) -> Result<Arguments, FieldError> {
        let schema = self.exec.schema();
        let unknown = field.arguments().keys()
            .find(|name| !field_def.arguments().contains_key(name.as_str()));
        if let Some(name) = unknown {
            return Err(FieldError::new(format!(
                "Unknown argument \"{name}\" on field \"{}.{}\".",
                field_def.owner(),
                field_def.name(),
            )));
        }

        let mut arguments = Arguments::new();
        for def in field_def.arguments().values() {
            let value = match field.arguments().get(def.name()) {
                Some(raw) => coerce_input(schema, def.type_ref(), raw).map_err(|err| {
                    FieldError::new(format!(
                        "Argument \"{}\" has invalid value: {err}",
                        def.name(),
                    ))
                })?,
                None => match self.default_value(def, bound) {
                    Some(value) => value,
                    None if def.type_ref().nullable() => Json::Null,
                    None => return Err(FieldError::new(format!(
                        "Argument \"{}\" of required type \"{}\" was not provided.",
                        def.name(),
                        def.type_ref(),
                    ))),
                },
            };
            arguments.insert(def.name(), value);
        }
        Ok(arguments)
    }

    fn default_value(&self, def: &InputValueDef, bound: Option<&BoundField>) -> Option<Json> {
        if let Some(bound) = bound {
            return bound.arguments().iter()
                .find(|arg| arg.name() == def.name())
                .and_then(|arg| arg.default().cloned());
        }
        let literal = literal_to_json(def.default_value()?, &Variables::new());
        coerce_input(self.exec.schema(), def.type_ref(), &literal).ok()
    }

    async fn resolve(
        &self,
        ctx: &ResolverContext<'_>,
        object: &BoundObject,
        bound: &BoundField,
        parent: &Arc<dyn HostObject>,
    ) -> Result<Result<FieldValue, FieldError>, ExecutionFault> {
        let args = ctx.arguments();
        let host_name = bound.host_name();
        let call: BoxFuture<'_, Result<FieldValue, FieldError>> = match bound.mode() {
            ResolutionMode::DirectMember => {
                let read = async move {
                    parent.read_member(host_name).ok_or_else(|| FieldError::new(format!(
                        "`{}` has no member `{host_name}`",
                        parent.type_name(),
                    )))
                }.boxed();
                return Ok(self.guard(ctx, read).await);
            },

            ResolutionMode::GeneratedResolver { .. } =>
                parent.call_method(ctx, host_name, args),

            ResolutionMode::UserResolver => {
                let resolver = self.exec.resolver(object.name(), bound.name())
                    .ok_or_else(|| ExecutionFault::MissingResolver {
                        field: bound.name().to_string(),
                        object: object.name().to_string(),
                    })?;
                resolver.resolve(ctx, parent, args)
            },
        };

        let call = match &self.exec.middleware {
            Some(middleware) => middleware.around_resolver(ctx, NextResolver::new(call)),
            None => call,
        };
        Ok(self.guard(ctx, call).await)
    }

    /// Run a resolver call, turning a panic into a field error and giving up
    /// as soon as the request is cancelled.
    async fn guard(
        &self,
        ctx: &ResolverContext<'_>,
        call: BoxFuture<'_, Result<FieldValue, FieldError>>,
    ) -> Result<FieldValue, FieldError> {
        let cancelled = Box::pin(self.state.cancellation().cancelled());
        let guarded = AssertUnwindSafe(call).catch_unwind();
        match future::select(cancelled, guarded).await {
            Either::Left(_) => {
                log::debug!("request cancelled while resolving `{}`", ctx.path());
                Err(FieldError::new("request cancelled"))
            },
            Either::Right((Ok(result), _)) => result,
            Either::Right((Err(panic), _)) => {
                log::error!(
                    "resolver for {}.{} panicked at `{}`: {}",
                    ctx.object_type(),
                    ctx.field().name(),
                    ctx.path(),
                    panic_message(panic.as_ref()),
                );
                Err(FieldError::new("internal system error"))
            },
        }
    }

    fn resolve_introspection(
        &self,
        field_def: &FieldDef,
        args: &Arguments,
    ) -> Result<FieldValue, FieldError> {
        let schema = Arc::clone(self.exec.schema());
        match field_def.name() {
            "__schema" => Ok(FieldValue::object(SchemaView::new(schema))),
            "__type" => {
                let name: String = args.try_get("name")?;
                Ok(TypeView::from_definition(schema, &name)
                    .map_or(FieldValue::Null, FieldValue::object))
            },
            other => Err(FieldError::new(format!("unknown introspection field `{other}`"))),
        }
    }

    /// Shape `value` according to `type_ref`.
    fn complete_value<'b>(
        &'b self,
        type_ref: &'b TypeRef,
        field: &'b CollectedField<'a>,
        value: FieldValue,
        path: &'b ResponsePath<'b>,
    ) -> BoxFuture<'b, Result<Json, Propagation>> {
        async move {
            if value.is_null() {
                return if type_ref.nullable() {
                    Ok(Json::Null)
                } else {
                    self.field_failed(type_ref, FieldError::new("must not be null"), field, path)
                };
            }

            match type_ref {
                TypeRef::List(list_ref) => {
                    let FieldValue::List(items) = value else {
                        let err = FieldError::new(format!("expected a list, got {value:?}"));
                        return self.field_failed(type_ref, err, field, path);
                    };
                    let element_type: &TypeRef = list_ref.element();
                    let item_paths: Vec<ResponsePath<'_>> = (0..items.len())
                        .map(|idx| ResponsePath::new(Some(path), PathSegment::Index(idx)))
                        .collect();
                    let completed = future::join_all(
                        items.into_iter()
                            .zip(&item_paths)
                            .map(|(item, item_path)| {
                                self.complete_value(element_type, field, item, item_path)
                            }),
                    ).await;

                    // A fault from any element wins over a violation from an
                    // earlier one.
                    let mut list = Vec::with_capacity(completed.len());
                    let mut violated = false;
                    for item in completed {
                        match item {
                            Ok(item) => list.push(item),
                            Err(Propagation::NonNullViolation) => violated = true,
                            Err(fault @ Propagation::Fault(_)) => return Err(fault),
                        }
                    }
                    if violated {
                        bubble(type_ref, Propagation::NonNullViolation)
                    } else {
                        Ok(Json::Array(list))
                    }
                },

                TypeRef::Named(named_ref) => {
                    let schema = self.exec.schema();
                    let Some(def) = schema.get_type(named_ref.name()) else {
                        let err = FieldError::new(format!(
                            "type `{}` is not defined",
                            named_ref.name(),
                        ));
                        return self.field_failed(type_ref, err, field, path);
                    };

                    if def.kind().is_leaf() {
                        return match serialize_leaf(def, &value) {
                            Ok(json) => Ok(json),
                            Err(msg) => self.field_failed(type_ref, FieldError::new(msg), field, path),
                        };
                    }

                    let FieldValue::Object(host) = value else {
                        let err = FieldError::new(format!(
                            "expected an object of type `{}`, got {value:?}",
                            named_ref.name(),
                        ));
                        return self.field_failed(type_ref, err, field, path);
                    };
                    let runtime_type = host.type_name();
                    let bound_object = self.exec.bound.object(runtime_type)
                        .filter(|_| schema.is_possible_type(named_ref.name(), runtime_type));
                    let Some(object) = bound_object else {
                        let err = FieldError::new(format!(
                            "`{runtime_type}` is not a possible type for `{}`",
                            named_ref.name(),
                        ));
                        return self.field_failed(type_ref, err, field, path);
                    };

                    let fields = self.collect_fields(field.selections(), runtime_type);
                    match self.execute_selection_set(object, &host, fields, Some(path)).await {
                        Ok(data) => Ok(Json::Object(data)),
                        Err(propagation) => bubble(type_ref, propagation),
                    }
                },
            }
        }.boxed()
    }

    /// Record `err` at `path` and null the position, or propagate if the
    /// position is non-null.
    fn field_failed(
        &self,
        type_ref: &TypeRef,
        err: FieldError,
        field: &CollectedField<'_>,
        path: &ResponsePath<'_>,
    ) -> Result<Json, Propagation> {
        self.state.record_error(ServerError::from_field_error(
            err,
            path.to_vec(),
            field.position(),
        ));
        if type_ref.nullable() {
            Ok(Json::Null)
        } else {
            Err(Propagation::NonNullViolation)
        }
    }
}

/// A violation from below stops at the first nullable position.
fn bubble(type_ref: &TypeRef, propagation: Propagation) -> Result<Json, Propagation> {
    match propagation {
        Propagation::NonNullViolation if type_ref.nullable() => Ok(Json::Null),
        propagation => Err(propagation),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload.downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string panic payload>")
}
