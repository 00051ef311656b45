use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// also records which schema file the position points into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePosition {
    pub col: usize,
    pub file: PathBuf,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos(
        file: impl AsRef<Path>,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            col: pos.column,
            file: file.as_ref().to_path_buf(),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.col)
    }
}

/// Where a schema element was defined: either implicitly by GraphQL itself
/// (built-in scalars, directives and introspection types) or in a schema
/// document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaDefLocation {
    GraphQLBuiltIn,
    Schema(FilePosition),
}
impl std::convert::From<FilePosition> for SchemaDefLocation {
    fn from(value: FilePosition) -> Self {
        Self::Schema(value)
    }
}
impl std::fmt::Display for SchemaDefLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GraphQLBuiltIn => write!(f, "<builtin>"),
            Self::Schema(pos) => write!(f, "{pos}"),
        }
    }
}
impl SchemaDefLocation {
    /// Location of `pos` within the document loaded from `origin`, where a
    /// missing origin means the document is one of the built-in definitions.
    pub(crate) fn from_origin(
        origin: Option<&Path>,
        pos: graphql_parser::Pos,
    ) -> Self {
        match origin {
            Some(file) => FilePosition::from_pos(file, pos).into(),
            None => Self::GraphQLBuiltIn,
        }
    }
}
