use crate::binder::HostType;

/// One exported member of an implementation type: a plain field or a method.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Member {
    #[serde(default)]
    pub kind: MemberKind,
    pub name: String,
    #[serde(default)]
    pub params: Vec<Param>,
    #[serde(default)]
    pub results: Vec<HostType>,
}
impl Member {
    /// A plain field member of type `ty`.
    pub fn field(name: impl Into<String>, ty: HostType) -> Self {
        Self {
            kind: MemberKind::Field,
            name: name.into(),
            params: vec![],
            results: vec![ty],
        }
    }

    pub fn method(
        name: impl Into<String>,
        params: Vec<Param>,
        results: Vec<HostType>,
    ) -> Self {
        Self {
            kind: MemberKind::Method,
            name: name.into(),
            params,
            results,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    #[default]
    Field,
    Method,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Param {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: HostType,
}
impl Param {
    pub fn new(name: impl Into<String>, ty: HostType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}
