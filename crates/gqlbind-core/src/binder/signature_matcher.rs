use crate::binder::BindConfig;
use crate::binder::BoundArgument;
use crate::binder::HostType;
use crate::binder::Member;
use crate::binder::MemberKind;
use crate::binder::ResolutionMode;
use crate::introspection;
use crate::schema::Schema;
use crate::types::DefinitionKind;
use crate::types::FieldDef;
use crate::types::TypeRef;

fn builtin_scalar_host_names(scalar: &str) -> Option<&'static [&'static str]> {
    Some(match scalar {
        "Boolean" => &["bool"],
        "Float" => &["f64", "f32"],
        "ID" => &["String", "ID"],
        "Int" => &["i32", "i64"],
        "String" => &["String", "&str"],
        _ => return None,
    })
}

/// Decides whether a host member's signature can serve a schema field.
pub(crate) struct SignatureMatcher<'a> {
    config: &'a BindConfig,
    schema: &'a Schema,
}
impl<'a> SignatureMatcher<'a> {
    pub(crate) fn new(schema: &'a Schema, config: &'a BindConfig) -> Self {
        Self {
            config,
            schema,
        }
    }

    /// Name of the implementation type bound to schema type `type_name`.
    pub(crate) fn model_name(&self, type_name: &str) -> String {
        introspection::builtin_model(type_name)
            .or_else(|| self.config.model_for(type_name))
            .unwrap_or(type_name)
            .to_string()
    }

    /// The resolution mode `member` supports for `field`, or a description of
    /// why it cannot serve the field.
    pub(crate) fn match_member(
        &self,
        field: &FieldDef,
        arguments: &[BoundArgument],
        member: &Member,
    ) -> Result<ResolutionMode, String> {
        match member.kind {
            MemberKind::Field => {
                if !arguments.is_empty() {
                    return Err(format!(
                        "`{}` is a plain field but the schema field takes arguments",
                        member.name,
                    ));
                }
                match member.results.as_slice() {
                    [ty] if self.matches_output(field.type_ref(), ty) =>
                        Ok(ResolutionMode::DirectMember),
                    [ty] => Err(format!(
                        "has type `{ty}`, expected `{}`",
                        self.describe(field.type_ref()),
                    )),
                    _ => Err("a field member must have exactly one type".to_string()),
                }
            },

            MemberKind::Method => {
                let (takes_context, params) = match member.params.split_first() {
                    Some((first, rest)) if first.ty == HostType::Context => (true, rest),
                    _ => (false, member.params.as_slice()),
                };

                if params.len() != arguments.len() {
                    return Err(format!(
                        "takes {} parameter(s), expected {}",
                        params.len(),
                        arguments.len(),
                    ));
                }
                for (param, arg) in params.iter().zip(arguments) {
                    let type_ref = arg.def().type_ref();
                    if !self.matches_input(type_ref, &param.ty, arg.strip_optional()) {
                        return Err(format!(
                            "parameter `{}` has type `{}`, expected `{}`",
                            param.name,
                            param.ty,
                            self.describe_input(type_ref, arg.strip_optional()),
                        ));
                    }
                }

                let (result, returns_error) = match member.results.as_slice() {
                    [result] => (result, false),
                    [result, HostType::Error] => (result, true),
                    _ => return Err(format!(
                        "must return `T` or `(T, Error)`, returns ({})",
                        member.results.iter()
                            .map(ToString::to_string)
                            .collect::<Vec<_>>()
                            .join(", "),
                    )),
                };
                if !self.matches_output(field.type_ref(), result) {
                    return Err(format!(
                        "returns `{result}`, expected `{}`",
                        self.describe(field.type_ref()),
                    ));
                }

                Ok(ResolutionMode::GeneratedResolver {
                    returns_error,
                    takes_context,
                })
            },
        }
    }

    /// Results of nullable types may be `Option<T>` or plain `T`; results of
    /// non-null types must be plain.
    fn matches_output(&self, type_ref: &TypeRef, host: &HostType) -> bool {
        let host = match (type_ref.nullable(), host) {
            (true, HostType::Optional(inner)) => inner.as_ref(),
            (false, HostType::Optional(_)) => return false,
            (_, host) => host,
        };

        match type_ref {
            TypeRef::List(list_ref) => match host {
                HostType::List(element) => self.matches_output(list_ref.element(), element),
                _ => false,
            },
            TypeRef::Named(named_ref) => self.matches_named(named_ref.name(), host),
        }
    }

    /// Parameters of nullable types must be `Option<T>`, unless
    /// `strip_optional` allows the plain `T` as well.
    fn matches_input(&self, type_ref: &TypeRef, host: &HostType, strip_optional: bool) -> bool {
        let host = match (type_ref.nullable(), host) {
            (true, HostType::Optional(inner)) => inner.as_ref(),
            (true, host) if strip_optional => host,
            (true, _) => return false,
            (false, HostType::Optional(_)) => return false,
            (false, host) => host,
        };

        match type_ref {
            TypeRef::List(list_ref) => match host {
                HostType::List(element) => self.matches_input(list_ref.element(), element, false),
                _ => false,
            },
            TypeRef::Named(named_ref) => self.matches_named(named_ref.name(), host),
        }
    }

    fn matches_named(&self, type_name: &str, host: &HostType) -> bool {
        let HostType::Named(host_name) = host else {
            return false;
        };
        self.host_names(type_name).iter().any(|name| name == host_name)
    }

    fn host_names(&self, type_name: &str) -> Vec<String> {
        let is_scalar = self.schema.get_type(type_name)
            .is_some_and(|def| def.kind() == DefinitionKind::Scalar);
        if !is_scalar {
            return vec![self.model_name(type_name)];
        }

        if let Some(names) = self.config.scalars.get(type_name) {
            names.to_owned()
        } else if let Some(names) = builtin_scalar_host_names(type_name) {
            names.iter().map(ToString::to_string).collect()
        } else {
            vec![type_name.to_string()]
        }
    }

    /// The preferred host spelling of `type_ref`, for diagnostics.
    fn describe(&self, type_ref: &TypeRef) -> String {
        let inner = self.describe_non_null(type_ref);
        if type_ref.nullable() {
            format!("Option<{inner}>")
        } else {
            inner
        }
    }

    fn describe_non_null(&self, type_ref: &TypeRef) -> String {
        match type_ref {
            TypeRef::List(list_ref) => format!("Vec<{}>", self.describe(list_ref.element())),
            TypeRef::Named(named_ref) => self.host_names(named_ref.name())
                .into_iter()
                .next()
                .unwrap_or_else(|| named_ref.name().to_string()),
        }
    }

    fn describe_input(&self, type_ref: &TypeRef, strip_optional: bool) -> String {
        if strip_optional {
            self.describe_non_null(type_ref)
        } else {
            self.describe(type_ref)
        }
    }
}
