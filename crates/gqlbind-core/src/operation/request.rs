use crate::ast;
use crate::operation::OperationKind;
use crate::operation::RequestError;
use crate::operation::Variables;
use crate::schema::Schema;
use crate::types::TypeRef;
use crate::value::coerce_input;
use crate::value::literal_to_json;
use tokio_util::sync::CancellationToken;

type Result<T> = std::result::Result<T, RequestError>;

/// One incoming operation request: a parsed document, the name of the
/// operation to run, its variables and a cancellation signal.
#[derive(Clone, Debug)]
pub struct Request {
    cancellation: CancellationToken,
    document: ast::operation::Document,
    operation_name: Option<String>,
    variables: Variables,
}
impl Request {
    pub fn new(document: ast::operation::Document) -> Self {
        Self {
            cancellation: CancellationToken::new(),
            document,
            operation_name: None,
            variables: Variables::default(),
        }
    }

    pub fn parse(query: &str) -> std::result::Result<Self, ast::operation::ParseError> {
        Ok(Self::new(ast::operation::parse(query)?))
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn with_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }

    /// Cancelling this token interrupts every resolver still in flight.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn document(&self) -> &ast::operation::Document {
        &self.document
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Pick the operation to execute: the one named by
    /// [`operation_name()`](Self::operation_name), or the only operation in
    /// the document.
    pub fn select_operation(&self) -> Result<SelectedOperation<'_>> {
        let mut operations = self.document.definitions.iter()
            .filter_map(|def| match def {
                ast::operation::Definition::Operation(op) => Some(SelectedOperation::from_ast(op)),
                ast::operation::Definition::Fragment(_) => None,
            });

        match &self.operation_name {
            Some(name) => operations
                .find(|op| op.name == Some(name.as_str()))
                .ok_or_else(|| RequestError::UnknownOperation(name.to_owned())),

            None => {
                let first = operations.next().ok_or(RequestError::NoOperation)?;
                if operations.next().is_some() {
                    return Err(RequestError::MultipleOperationsWithoutName);
                }
                Ok(first)
            },
        }
    }
}

/// The operation of a [`Request`] chosen for execution.
#[derive(Clone, Copy, Debug)]
pub struct SelectedOperation<'a> {
    pub(crate) kind: OperationKind,
    pub(crate) name: Option<&'a str>,
    pub(crate) selection_set: &'a ast::operation::SelectionSet,
    pub(crate) variable_definitions: &'a [ast::operation::VariableDefinition],
}
impl<'a> SelectedOperation<'a> {
    fn from_ast(op: &'a ast::operation::OperationDefinition) -> Self {
        use graphql_parser::query::OperationDefinition;
        match op {
            OperationDefinition::SelectionSet(selection_set) => Self {
                kind: OperationKind::Query,
                name: None,
                selection_set,
                variable_definitions: &[],
            },
            OperationDefinition::Query(query) => Self {
                kind: OperationKind::Query,
                name: query.name.as_deref(),
                selection_set: &query.selection_set,
                variable_definitions: &query.variable_definitions,
            },
            OperationDefinition::Mutation(mutation) => Self {
                kind: OperationKind::Mutation,
                name: mutation.name.as_deref(),
                selection_set: &mutation.selection_set,
                variable_definitions: &mutation.variable_definitions,
            },
            OperationDefinition::Subscription(subscription) => Self {
                kind: OperationKind::Subscription,
                name: subscription.name.as_deref(),
                selection_set: &subscription.selection_set,
                variable_definitions: &subscription.variable_definitions,
            },
        }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> Option<&'a str> {
        self.name
    }

    pub fn selection_set(&self) -> &'a ast::operation::SelectionSet {
        self.selection_set
    }

    /// Coerce the provided variable values against the operation's variable
    /// definitions, filling in declared defaults. Values for variables the
    /// operation does not declare are dropped.
    pub fn coerce_variables(&self, schema: &Schema, provided: &Variables) -> Result<Variables> {
        let mut coerced = Variables::new();
        for var_def in self.variable_definitions {
            let type_ref = TypeRef::from_ast(&var_def.var_type);
            let name = var_def.name.as_str();

            let value = match (provided.get(name), &var_def.default_value) {
                (Some(value), _) => value.to_owned(),
                (None, Some(default)) => literal_to_json(default, &Variables::default()),
                (None, None) if !type_ref.nullable() =>
                    return Err(RequestError::MissingVariable {
                        name: name.to_string(),
                        type_name: type_ref.to_string(),
                    }),
                (None, None) => continue,
            };

            let value = coerce_input(schema, &type_ref, &value)
                .map_err(|err| RequestError::InvalidVariable {
                    name: name.to_string(),
                    err,
                })?;
            coerced.insert(name, value);
        }
        Ok(coerced)
    }
}
