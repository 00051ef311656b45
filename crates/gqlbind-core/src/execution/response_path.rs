/// One step of a response path.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}
impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(key) => f.write_str(key),
            Self::Index(idx) => write!(f, "{idx}"),
        }
    }
}

/// The location of the value being resolved within the response tree.
///
/// Each level lives on the stack frame resolving it and points at its
/// parent, so a segment is released as soon as its frame returns, however
/// it returns.
#[derive(Clone, Debug)]
pub struct ResponsePath<'a> {
    parent: Option<&'a ResponsePath<'a>>,
    segment: PathSegment,
}
impl<'a> ResponsePath<'a> {
    pub(crate) fn new(parent: Option<&'a ResponsePath<'a>>, segment: PathSegment) -> Self {
        Self {
            parent,
            segment,
        }
    }

    pub fn parent(&self) -> Option<&'a ResponsePath<'a>> {
        self.parent
    }

    pub fn segment(&self) -> &PathSegment {
        &self.segment
    }

    /// All segments from the response root down to this one.
    pub fn to_vec(&self) -> Vec<PathSegment> {
        let mut segments = match self.parent {
            Some(parent) => parent.to_vec(),
            None => vec![],
        };
        segments.push(self.segment.to_owned());
        segments
    }
}
impl std::fmt::Display for ResponsePath<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(parent) = self.parent {
            write!(f, "{parent}.")?;
        }
        write!(f, "{}", self.segment)
    }
}
