/// A reference to a type as written in a field, argument, or variable
/// definition: a named type optionally wrapped in lists and non-null
/// markers.
///
/// [`Type::NonNull`] never directly wraps another [`Type::NonNull`]; use
/// [`Type::non_null()`] to construct one.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum Type {
    Named(String),
    List(Box<Type>),
    /// Build with [`Type::non_null()`]. A `NonNull` built directly around
    /// another `NonNull` is malformed and trips a debug assertion in
    /// [`Type::is_compatible()`].
    NonNull(Box<Type>),
}
impl Type {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn list(inner: Type) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wrap `inner` in a non-null marker. Wrapping a type that is already
    /// non-null returns it unchanged.
    pub fn non_null(inner: Type) -> Self {
        match inner {
            Self::NonNull(_) => inner,
            _ => Self::NonNull(Box::new(inner)),
        }
    }

    /// The name of the innermost [`Type::Named`] this type wraps.
    pub fn name(&self) -> &str {
        match self {
            Self::Named(name) => name.as_str(),
            Self::List(inner) | Self::NonNull(inner) => inner.name(),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self.nullable(), Self::List(_))
    }

    /// This type with its outermost non-null marker (if any) removed.
    pub fn nullable(&self) -> &Type {
        match self {
            Self::NonNull(inner) => inner,
            _ => self,
        }
    }

    /// The element type if this is a (possibly non-null) list type.
    pub fn list_item_type(&self) -> Option<&Type> {
        match self.nullable() {
            Self::List(inner) => Some(inner),
            _ => None,
        }
    }

    /// Whether a value of this type may be provided where a value of
    /// `expected` is required.
    ///
    /// Named types must match exactly and lists are covariant. A non-null
    /// type is accepted wherever its nullable counterpart is, but a nullable
    /// type is never accepted where a non-null one is required.
    pub fn is_compatible(&self, expected: &Type) -> bool {
        debug_assert!(
            !self.has_nested_non_null() && !expected.has_nested_non_null(),
            "non-null type wraps another non-null type",
        );
        match (self, expected) {
            (Self::NonNull(provided), Self::NonNull(expected))
                => provided.is_compatible(expected),
            (_, Self::NonNull(_))
                => false,
            (Self::NonNull(provided), expected)
                => provided.is_compatible(expected),
            (Self::List(provided), Self::List(expected))
                => provided.is_compatible(expected),
            (Self::Named(provided), Self::Named(expected))
                => provided == expected,
            (Self::List(_), Self::Named(_)) | (Self::Named(_), Self::List(_))
                => false,
        }
    }

    fn has_nested_non_null(&self) -> bool {
        match self {
            Self::Named(_) => false,
            Self::List(inner) => inner.has_nested_non_null(),
            Self::NonNull(inner) =>
                matches!(**inner, Self::NonNull(_)) || inner.has_nested_non_null(),
        }
    }

    pub(crate) fn from_gp(
        ast_type: &graphql_parser::query::Type<'_, String>,
    ) -> Self {
        match ast_type {
            graphql_parser::query::Type::NamedType(name) =>
                Self::Named(name.clone()),
            graphql_parser::query::Type::ListType(inner) =>
                Self::list(Self::from_gp(inner)),
            graphql_parser::query::Type::NonNullType(inner) =>
                Self::non_null(Self::from_gp(inner)),
        }
    }
}
impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
