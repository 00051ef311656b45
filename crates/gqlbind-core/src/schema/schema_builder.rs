use crate::ast;
use crate::file_reader;
use crate::introspection;
use crate::loc;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::schema::builtin_sdl::BUILTIN_SDL;
use crate::types::Definition;
use crate::types::DefinitionKind;
use crate::types::Deprecation;
use crate::types::DirectiveDef;
use crate::types::EnumValueDef;
use crate::types::FieldDef;
use crate::types::InputValueDef;
use crate::types::TypeRef;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [`Schema`] from one or more SDL documents.
///
/// The built-in scalars and directives and the introspection types are loaded
/// up front, so a schema document only has to declare its own types.
///
/// ```
/// use gqlbind_core::schema::SchemaBuilder;
///
/// let schema = SchemaBuilder::new()
///     .load_str(None, "type Query { hello: String }")
///     .unwrap()
///     .build()
///     .unwrap();
/// assert_eq!(schema.query_type().name(), "Query");
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    directives: IndexMap<String, DirectiveDef>,
    extensions: Vec<(PathBuf, ast::schema::TypeExtension)>,
    mutation_type: Option<RootTypeDecl>,
    query_type: Option<RootTypeDecl>,
    str_load_counter: u16,
    subscription_type: Option<RootTypeDecl>,
    types: IndexMap<String, Definition>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        let mut builder = Self {
            directives: IndexMap::new(),
            extensions: vec![],
            mutation_type: None,
            query_type: None,
            str_load_counter: 0,
            subscription_type: None,
            types: IndexMap::new(),
        };

        for sdl in [BUILTIN_SDL, introspection::INTROSPECTION_SDL] {
            let ast_doc = ast::schema::parse(sdl)
                .expect("built-in SDL is well-formed");
            for def in ast_doc.definitions {
                builder.visit_ast_def(None, def)
                    .expect("built-in SDL is free of conflicts");
            }
        }

        builder
    }

    pub fn build(mut self) -> Result<Schema> {
        for (file_path, ext) in std::mem::take(&mut self.extensions) {
            self.apply_type_extension(&file_path, ext)?;
        }

        let query_type = self.resolve_root_type(OperationKind::Query)?
            .ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type = self.resolve_root_type(OperationKind::Mutation)?;
        let subscription_type = self.resolve_root_type(OperationKind::Subscription)?;

        let introspection_fields = introspection_root_fields(&query_type);

        log::debug!(
            "Built schema with {} types and {} directives (query root `{query_type}`).",
            self.types.len(),
            self.directives.len(),
        );

        Ok(Schema {
            directives: self.directives,
            introspection_fields,
            mutation_type,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(mut self, file_paths: Vec<impl AsRef<Path>>) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(Box::new(err)))?;
            self = self.load_str(Some(file_path.to_path_buf()), file_content.as_str())?;
        }
        Ok(self)
    }

    pub fn load_str(mut self, file_path: Option<PathBuf>, content: &str) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc = ast::schema::parse(content)
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            })?;

        self.load_ast(file_path, ast_doc)
    }

    /// Load an already-parsed schema document.
    pub fn load_ast(mut self, file_path: PathBuf, ast_doc: ast::schema::Document) -> Result<Self> {
        for def in ast_doc.definitions {
            if let ast::schema::Definition::TypeExtension(ext) = def {
                self.extensions.push((file_path.to_owned(), ext));
            } else {
                self.visit_ast_def(Some(file_path.as_path()), def)?;
            }
        }
        Ok(self)
    }

    fn resolve_root_type(&self, kind: OperationKind) -> Result<Option<String>> {
        let declared = match kind {
            OperationKind::Query => &self.query_type,
            OperationKind::Mutation => &self.mutation_type,
            OperationKind::Subscription => &self.subscription_type,
        };

        let Some(decl) = declared else {
            // Without a `schema { }` block the conventional names apply.
            let default_name = match kind {
                OperationKind::Query => "Query",
                OperationKind::Mutation => "Mutation",
                OperationKind::Subscription => "Subscription",
            };
            return Ok(match self.types.get(default_name) {
                Some(def) if def.kind() == DefinitionKind::Object => Some(default_name.to_string()),
                _ => None,
            });
        };

        match self.types.get(&decl.type_name) {
            Some(def) if def.kind() == DefinitionKind::Object =>
                Ok(Some(decl.type_name.to_owned())),

            Some(def) => Err(SchemaBuildError::RootTypeNotAnObject {
                operation: kind,
                type_name: decl.type_name.to_owned(),
                kind: def.kind(),
                location: decl.def_location.to_owned(),
            }),

            None => Err(SchemaBuildError::UndefinedRootType {
                operation: kind,
                type_name: decl.type_name.to_owned(),
                location: decl.def_location.to_owned(),
            }),
        }
    }

    fn visit_ast_def(&mut self, origin: Option<&Path>, def: ast::schema::Definition) -> Result<()> {
        use ast::schema::Definition as AstDefinition;
        match def {
            AstDefinition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(origin, schema_def),
            AstDefinition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(origin, type_def),
            AstDefinition::TypeExtension(ext) => {
                let file_path = origin.map(Path::to_path_buf).unwrap_or_default();
                self.extensions.push((file_path, ext));
                Ok(())
            },
            AstDefinition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(origin, directive_def),
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        origin: Option<&Path>,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let def_location = loc::SchemaDefLocation::from_origin(origin, def.position);

        if let Some(existing) = self.directives.get(def.name.as_str()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name.to_owned(),
                location1: existing.def_location().to_owned(),
                location2: def_location,
            });
        }

        self.directives.insert(
            def.name.to_owned(),
            DirectiveDef::from_ast(def_location, &def),
        );
        Ok(())
    }

    fn visit_ast_schemablock_def(
        &mut self,
        origin: Option<&Path>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let def_location = loc::SchemaDefLocation::from_origin(origin, schema_def.position);
        let declarations = [
            (OperationKind::Query, schema_def.query),
            (OperationKind::Mutation, schema_def.mutation),
            (OperationKind::Subscription, schema_def.subscription),
        ];

        for (kind, type_name) in declarations {
            let Some(type_name) = type_name else {
                continue;
            };
            let slot = match kind {
                OperationKind::Query => &mut self.query_type,
                OperationKind::Mutation => &mut self.mutation_type,
                OperationKind::Subscription => &mut self.subscription_type,
            };
            if let Some(existing) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation: kind,
                    location1: existing.def_location.to_owned(),
                    location2: def_location,
                });
            }
            *slot = Some(RootTypeDecl {
                def_location: def_location.to_owned(),
                type_name,
            });
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        origin: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;

        let (kind, name, position, description) = match &type_def {
            TypeDefinition::Enum(d) =>
                (DefinitionKind::Enum, &d.name, d.position, &d.description),
            TypeDefinition::InputObject(d) =>
                (DefinitionKind::InputObject, &d.name, d.position, &d.description),
            TypeDefinition::Interface(d) =>
                (DefinitionKind::Interface, &d.name, d.position, &d.description),
            TypeDefinition::Object(d) =>
                (DefinitionKind::Object, &d.name, d.position, &d.description),
            TypeDefinition::Scalar(d) =>
                (DefinitionKind::Scalar, &d.name, d.position, &d.description),
            TypeDefinition::Union(d) =>
                (DefinitionKind::Union, &d.name, d.position, &d.description),
        };
        let def_location = loc::SchemaDefLocation::from_origin(origin, position);

        // `__`-prefixed names are reserved for the introspection system.
        if origin.is_some() && name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location,
                type_name: name.to_owned(),
            });
        }

        if let Some(existing) = self.types.get(name.as_str()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: name.to_owned(),
                def1: existing.def_location().to_owned(),
                def2: def_location,
            });
        }

        let mut def = Definition::new(kind, name.as_str(), def_location);
        def.description = description.to_owned();

        match type_def {
            TypeDefinition::Enum(d) =>
                add_enum_values(&mut def, &d.values)?,
            TypeDefinition::InputObject(d) =>
                add_input_fields(&mut def, origin, &d.fields)?,
            TypeDefinition::Interface(d) => {
                add_fields(&mut def, origin, &d.fields)?;
                def.interfaces = d.implements_interfaces;
            },
            TypeDefinition::Object(d) => {
                add_fields(&mut def, origin, &d.fields)?;
                def.interfaces = d.implements_interfaces;
            },
            TypeDefinition::Scalar(_) => (),
            TypeDefinition::Union(d) =>
                def.union_members = d.types,
        }

        self.types.insert(def.name.to_owned(), def);
        Ok(())
    }

    fn apply_type_extension(
        &mut self,
        file_path: &Path,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;

        let (name, position, expected_kind) = match &ext {
            TypeExtension::Enum(e) => (&e.name, e.position, DefinitionKind::Enum),
            TypeExtension::InputObject(e) => (&e.name, e.position, DefinitionKind::InputObject),
            TypeExtension::Interface(e) => (&e.name, e.position, DefinitionKind::Interface),
            TypeExtension::Object(e) => (&e.name, e.position, DefinitionKind::Object),
            TypeExtension::Scalar(e) => (&e.name, e.position, DefinitionKind::Scalar),
            TypeExtension::Union(e) => (&e.name, e.position, DefinitionKind::Union),
        };
        let extension_loc: loc::SchemaDefLocation =
            loc::FilePosition::from_pos(file_path, position).into();

        let Some(def) = self.types.get_mut(name.as_str()) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name: name.to_owned(),
                extension_loc,
            });
        };
        if def.kind() != expected_kind {
            return Err(SchemaBuildError::InvalidExtensionType {
                type_name: name.to_owned(),
                type_kind: def.kind(),
                extension_kind: expected_kind,
                extension_loc,
            });
        }

        let origin = Some(file_path);
        match ext {
            TypeExtension::Enum(e) => add_enum_values(def, &e.values)?,
            TypeExtension::InputObject(e) => add_input_fields(def, origin, &e.fields)?,
            TypeExtension::Interface(e) => add_fields(def, origin, &e.fields)?,
            TypeExtension::Object(e) => {
                add_fields(def, origin, &e.fields)?;
                def.interfaces.extend(e.implements_interfaces);
            },
            TypeExtension::Scalar(_) => (),
            TypeExtension::Union(e) => def.union_members.extend(e.types),
        }
        Ok(())
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn add_fields(
    def: &mut Definition,
    origin: Option<&Path>,
    fields: &[ast::schema::Field],
) -> Result<()> {
    for field in fields {
        let field_def = FieldDef::from_ast(def.name(), origin, field);
        if let Some(existing) = def.fields.get(&field_def.name) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: def.name.to_owned(),
                field_name: field_def.name.to_owned(),
                field_def1: existing.def_location().to_owned(),
                field_def2: field_def.def_location().to_owned(),
            });
        }
        def.fields.insert(field_def.name.to_owned(), field_def);
    }
    Ok(())
}

fn add_input_fields(
    def: &mut Definition,
    origin: Option<&Path>,
    fields: &[ast::schema::InputValue],
) -> Result<()> {
    for field in fields {
        let location = loc::SchemaDefLocation::from_origin(origin, field.position);
        let input_field = InputValueDef::from_ast(def.name(), location, field);
        if let Some(existing) = def.input_fields.get(&input_field.name) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: def.name.to_owned(),
                field_name: input_field.name.to_owned(),
                field_def1: existing.def_location().to_owned(),
                field_def2: input_field.def_location().to_owned(),
            });
        }
        def.input_fields.insert(input_field.name.to_owned(), input_field);
    }
    Ok(())
}

fn add_enum_values(def: &mut Definition, values: &[ast::schema::EnumValue]) -> Result<()> {
    for value in values {
        if def.enum_values.contains_key(&value.name) {
            return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                enum_name: def.name.to_owned(),
                value_name: value.name.to_owned(),
            });
        }
        def.enum_values.insert(value.name.to_owned(), EnumValueDef {
            deprecation: Deprecation::from_ast(&value.directives),
            description: value.description.to_owned(),
            name: value.name.to_owned(),
        });
    }
    Ok(())
}

fn introspection_root_fields(query_type: &str) -> IndexMap<String, FieldDef> {
    let schema_field = FieldDef {
        arguments: IndexMap::new(),
        def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
        deprecation: Deprecation::NotDeprecated,
        description: Some("Access the current type schema of this server.".to_string()),
        name: "__schema".to_string(),
        owner: query_type.to_string(),
        type_ref: Arc::new(TypeRef::named("__Schema", false)),
    };

    let name_arg = InputValueDef {
        def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
        default_value: None,
        description: None,
        name: "name".to_string(),
        owner: format!("{query_type}.__type"),
        type_ref: Arc::new(TypeRef::named("String", false)),
    };
    let type_field = FieldDef {
        arguments: IndexMap::from([("name".to_string(), name_arg)]),
        def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
        deprecation: Deprecation::NotDeprecated,
        description: Some("Request the type information of a single type.".to_string()),
        name: "__type".to_string(),
        owner: query_type.to_string(),
        type_ref: Arc::new(TypeRef::named("__Type", true)),
    };

    IndexMap::from([
        (schema_field.name.to_owned(), schema_field),
        (type_field.name.to_owned(), type_field),
    ])
}

/// The type a `schema { }` block assigned to one root operation.
#[derive(Clone, Debug, PartialEq)]
struct RootTypeDecl {
    def_location: loc::SchemaDefLocation,
    type_name: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple directives were defined with the name `{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::SchemaDefLocation,
        location2: loc::SchemaDefLocation,
    },

    #[error("The `{enum_name}` enum defines the value `{value_name}` more than once")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_name: String,
    },

    #[error("The `{type_name}` type defines the field `{field_name}` more than once")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SchemaDefLocation,
        field_def2: loc::SchemaDefLocation,
    },

    #[error("The {operation} root type was declared more than once")]
    DuplicateOperationDefinition {
        operation: OperationKind,
        location1: loc::SchemaDefLocation,
        location2: loc::SchemaDefLocation,
    },

    #[error("Multiple GraphQL types were defined with the name `{type_name}`")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error("Attempted to extend `{type_name}`, which is not defined")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_loc: loc::SchemaDefLocation,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SchemaDefLocation,
        type_name: String,
    },

    #[error(
        "Attempted to extend the {type_kind} type `{type_name}` with an \
        {extension_kind} extension"
    )]
    InvalidExtensionType {
        type_name: String,
        type_kind: DefinitionKind,
        extension_kind: DefinitionKind,
        extension_loc: loc::SchemaDefLocation,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema file `{file:?}`: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error(
        "The {operation} root type must be an object type, but `{type_name}` \
        is a {kind} type"
    )]
    RootTypeNotAnObject {
        operation: OperationKind,
        type_name: String,
        kind: DefinitionKind,
        location: loc::SchemaDefLocation,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error("The {operation} root type `{type_name}` is not defined")]
    UndefinedRootType {
        operation: OperationKind,
        type_name: String,
        location: loc::SchemaDefLocation,
    },
}
