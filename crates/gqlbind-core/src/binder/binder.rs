use crate::binder::BindConfig;
use crate::binder::BindDiagnostic;
use crate::binder::BindError;
use crate::binder::BoundArgument;
use crate::binder::BoundField;
use crate::binder::BoundObject;
use crate::binder::BoundSchema;
use crate::binder::Member;
use crate::binder::MemberCatalog;
use crate::binder::ResolutionMode;
use crate::binder::naming::to_member_name;
use crate::binder::signature_matcher::SignatureMatcher;
use crate::introspection;
use crate::operation::OperationKind;
use crate::operation::Variables;
use crate::schema::Schema;
use crate::types::Definition;
use crate::types::FieldDef;
use crate::value::coerce_input;
use crate::value::literal_to_json;
use std::collections::HashMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, BindError>;

/// Binds every object type of a [`Schema`] against the implementation types
/// described by a [`MemberCatalog`].
///
/// For each field the binder looks for a member named after the field (see
/// [`to_member_name()`](crate::binder::to_member_name)) and picks a
/// [`ResolutionMode`]:
///
/// * a plain field member of a compatible type is read directly;
/// * a method with a compatible signature (an optional leading `Context`
///   parameter, one parameter per schema argument, returning `T` or
///   `(T, Error)`) is called as a generated resolver;
/// * anything else, and any field the [`BindConfig`] forces, needs a
///   hand-written resolver. This is reported as a [`BindDiagnostic`] but does
///   not fail the run.
///
/// Introspection types are bound against the engine's own introspection
/// views.
pub struct Binder<'a> {
    catalog: &'a dyn MemberCatalog,
    config: BindConfig,
    schema: Arc<Schema>,
}
impl<'a> Binder<'a> {
    pub fn new(schema: Arc<Schema>, catalog: &'a dyn MemberCatalog) -> Self {
        Self {
            catalog,
            config: BindConfig::default(),
            schema,
        }
    }

    pub fn with_config(mut self, config: BindConfig) -> Self {
        self.config = config;
        self
    }

    pub fn bind(self) -> Result<BoundSchema> {
        let matcher = SignatureMatcher::new(&self.schema, &self.config);
        let mut diagnostics = vec![];
        let mut objects = vec![];

        for def in self.schema.objects() {
            let object = self.bind_object(&matcher, def, &mut diagnostics)?;
            objects.push(object);
        }
        objects.sort_by(|a, b| a.name.cmp(&b.name));

        for diagnostic in &diagnostics {
            if matches!(diagnostic, BindDiagnostic::ForcedResolver { .. }) {
                log::debug!("{diagnostic}");
            } else {
                log::warn!("{diagnostic}");
                log::warn!("  adding resolver method");
            }
        }
        log::debug!(
            "Bound {} objects with {} diagnostic(s).",
            objects.len(),
            diagnostics.len(),
        );

        Ok(BoundSchema {
            diagnostics,
            objects,
            schema: self.schema,
        })
    }

    fn bind_object(
        &self,
        matcher: &SignatureMatcher<'_>,
        def: &Definition,
        diagnostics: &mut Vec<BindDiagnostic>,
    ) -> Result<BoundObject> {
        let object_name = def.name();
        let model = matcher.model_name(object_name);
        let members = if introspection::builtin_model(object_name).is_some() {
            introspection::catalog().members(&model)
        } else {
            self.catalog.members(&model)
        };
        if members.is_none() {
            diagnostics.push(BindDiagnostic::MissingImplementationType {
                model: model.to_owned(),
                object: object_name.to_string(),
            });
        }

        let mut member_owners: HashMap<String, &str> = HashMap::new();
        let mut fields = indexmap::IndexMap::new();
        for field_def in def.fields().values() {
            let host_name = to_member_name(field_def.name());
            if let Some(other) = member_owners.insert(host_name.to_owned(), field_def.name()) {
                return Err(BindError::MemberNameCollision {
                    field1: other.to_string(),
                    field2: field_def.name().to_string(),
                    member: host_name,
                    object: object_name.to_string(),
                });
            }

            let arguments = self.bind_arguments(object_name, field_def)?;
            let forced_resolver = self.config.is_resolver_forced(object_name, field_def.name());
            let mode = if forced_resolver {
                diagnostics.push(BindDiagnostic::ForcedResolver {
                    field: field_def.name().to_string(),
                    object: object_name.to_string(),
                });
                ResolutionMode::UserResolver
            } else if let Some(members) = members {
                match find_member(members, &host_name) {
                    Some(member) => matcher.match_member(field_def, &arguments, member)
                        .unwrap_or_else(|reason| {
                            diagnostics.push(BindDiagnostic::IncompatibleMember {
                                field: field_def.name().to_string(),
                                member: host_name.to_owned(),
                                model: model.to_owned(),
                                object: object_name.to_string(),
                                reason,
                            });
                            ResolutionMode::UserResolver
                        }),

                    None => {
                        diagnostics.push(BindDiagnostic::MissingMember {
                            field: field_def.name().to_string(),
                            member: host_name.to_owned(),
                            model: model.to_owned(),
                            object: object_name.to_string(),
                        });
                        ResolutionMode::UserResolver
                    },
                }
            } else {
                ResolutionMode::UserResolver
            };

            fields.insert(field_def.name().to_string(), BoundField {
                arguments,
                def: field_def.to_owned(),
                forced_resolver,
                host_name,
                mode,
            });
        }

        let root_kind = self.schema.root_kind_of(object_name);
        Ok(BoundObject {
            disable_concurrency: root_kind == Some(OperationKind::Mutation),
            fields,
            interfaces: def.interfaces().to_vec(),
            model,
            name: object_name.to_string(),
            root: root_kind.is_some(),
        })
    }

    fn bind_arguments(&self, object_name: &str, field_def: &FieldDef) -> Result<Vec<BoundArgument>> {
        let field_type_name = field_def.type_ref().innermost_type_name();
        if self.schema.get_type(field_type_name).is_none() {
            return Err(BindError::UndefinedType {
                referenced_by: format!("{object_name}.{}", field_def.name()),
                type_name: field_type_name.to_string(),
            });
        }

        let mut host_names: HashMap<String, &str> = HashMap::new();
        let mut arguments = vec![];
        for arg_def in field_def.arguments().values() {
            let type_ref = arg_def.type_ref();
            let type_name = type_ref.innermost_type_name();
            let Some(arg_type) = self.schema.get_type(type_name) else {
                return Err(BindError::UndefinedType {
                    referenced_by: format!("{object_name}.{}({}:)", field_def.name(), arg_def.name()),
                    type_name: type_name.to_string(),
                });
            };
            if !arg_type.kind().is_input() {
                return Err(BindError::InvalidArgumentType {
                    argument: arg_def.name().to_string(),
                    field: field_def.name().to_string(),
                    kind: arg_type.kind(),
                    object: object_name.to_string(),
                    type_name: type_ref.to_string(),
                });
            }

            let host_name = to_member_name(arg_def.name());
            if let Some(other) = host_names.insert(host_name.to_owned(), arg_def.name()) {
                return Err(BindError::ArgumentNameCollision {
                    argument1: other.to_string(),
                    argument2: arg_def.name().to_string(),
                    field: field_def.name().to_string(),
                    host_name,
                    object: object_name.to_string(),
                });
            }

            let default = match arg_def.default_value() {
                Some(literal) => {
                    let raw = literal_to_json(literal, &Variables::default());
                    Some(coerce_input(&self.schema, type_ref, &raw)
                        .map_err(|err| BindError::InvalidDefaultValue {
                            argument: arg_def.name().to_string(),
                            err,
                            field: field_def.name().to_string(),
                            object: object_name.to_string(),
                        })?)
                },
                None => None,
            };
            let strip_optional = type_ref.nullable()
                && default.as_ref().is_some_and(|value| !value.is_null());

            arguments.push(BoundArgument {
                def: arg_def.to_owned(),
                default,
                host_name,
                strip_optional,
            });
        }
        Ok(arguments)
    }
}

fn find_member<'m>(members: &'m [Member], host_name: &str) -> Option<&'m Member> {
    members.iter().find(|member| member.name == host_name)
}
