use crate::coerce::ScalarCoercionError;
use crate::error::ErrorPath;
use crate::error::GraphQLError;
use crate::loc::SourcePosition;

/// A coercion failure: what went wrong, and where.
///
/// Variable errors carry a path rooted at `variable` (e.g.
/// `variable.filter.tags[2]`); errors found in a document literal also
/// carry the position of the value.
#[derive(Clone, Debug, PartialEq)]
pub struct CoercionError {
    pub kind: CoercionErrorKind,
    pub path: ErrorPath,
    pub position: Option<SourcePosition>,
}
impl CoercionError {
    pub(crate) fn new(kind: CoercionErrorKind, path: &ErrorPath) -> Self {
        Self {
            kind,
            path: path.clone(),
            position: None,
        }
    }

    pub(crate) fn at(mut self, position: &SourcePosition) -> Self {
        self.position = Some(position.clone());
        self
    }
}
impl std::fmt::Display for CoercionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} {}", self.path, self.kind)
        }
    }
}
impl std::error::Error for CoercionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
impl std::convert::From<CoercionError> for GraphQLError {
    fn from(value: CoercionError) -> Self {
        let mut err = GraphQLError::new(value.kind.to_string())
            .with_path(value.path);
        if let Some(position) = &value.position {
            err = err.with_position(position);
        }
        err
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CoercionErrorKind {
    #[error("argument {argument_name} must be provided")]
    ArgumentNotProvided {
        argument_name: String,
    },

    #[error("cannot be null")]
    CannotBeNull,

    #[error("{value_kind} cannot be coerced to {type_name}")]
    CannotCoerce {
        #[source]
        reason: Option<ScalarCoercionError>,
        type_name: String,
        value_kind: String,
    },

    #[error("must be a {type_name}")]
    MustBeInputObject {
        type_name: String,
    },

    #[error("must be defined")]
    MustBeDefined,

    #[error("must be an input type")]
    NotAnInputType {
        type_name: String,
    },

    #[error("unknown field")]
    UnknownField,

    #[error("unknown type {type_name}")]
    UnknownType {
        type_name: String,
    },
}
