use core::fmt;

use serde::{Deserialize, Serialize};

/// Built-in host type kinds with a fixed TypeScript rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    Number,
    Text,
    Boolean,
    DateTime,
    Guid,
    /// Catch-all for unknown or opaque host types; renders as `any` so
    /// generation stays total over best-effort models.
    Any,
}

impl Primitive {
    pub fn ts_name(self) -> &'static str {
        match self {
            Primitive::Number => "number",
            Primitive::Text => "string",
            Primitive::Boolean => "boolean",
            Primitive::DateTime => "Date",
            Primitive::Guid => "Guid",
            Primitive::Any => "any",
        }
    }
}

/// A language-neutral type reference as it appears on members, bases and
/// constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeRef {
    Primitive(Primitive),
    /// Reference to a class, enum or interface by its fully-qualified host
    /// name (dotted segments; the flat identifier is the last segment).
    Named(String),
    /// A generic type parameter; renders as its own name.
    GenericParam(String),
    Array(Box<TypeRef>),
    /// Nullable wrapper. Resolution passes through to the inner type; the
    /// member emitter surfaces optionality as the `?` marker instead.
    Optional(Box<TypeRef>),
}

impl Default for TypeRef {
    fn default() -> Self {
        TypeRef::Primitive(Primitive::Any)
    }
}

impl TypeRef {
    pub const NUMBER: TypeRef = TypeRef::Primitive(Primitive::Number);
    pub const TEXT: TypeRef = TypeRef::Primitive(Primitive::Text);
    pub const BOOLEAN: TypeRef = TypeRef::Primitive(Primitive::Boolean);
    pub const DATE_TIME: TypeRef = TypeRef::Primitive(Primitive::DateTime);
    pub const GUID: TypeRef = TypeRef::Primitive(Primitive::Guid);
    pub const ANY: TypeRef = TypeRef::Primitive(Primitive::Any);

    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn generic_param(name: impl Into<String>) -> Self {
        TypeRef::GenericParam(name.into())
    }

    pub fn array(element: TypeRef) -> Self {
        TypeRef::Array(Box::new(element))
    }

    pub fn optional(inner: TypeRef) -> Self {
        TypeRef::Optional(Box::new(inner))
    }

    /// Whether the reference is nullable at the top level. Drives the `?`
    /// marker on member lines.
    pub fn is_optional(&self) -> bool {
        matches!(self, TypeRef::Optional(_))
    }

    /// Parses a compact textual form used by model builders and tests:
    /// a trailing `?` marks the reference optional, a trailing `[]` an
    /// array, primitives map through a fixed table, anything else is a
    /// named reference.
    pub fn parse_type_str(type_str: &str) -> TypeRef {
        let clean = type_str.trim();

        if let Some(rest) = clean.strip_suffix('?') {
            return TypeRef::optional(Self::parse_type_str(rest));
        }
        if let Some(rest) = clean.strip_suffix("[]") {
            return TypeRef::array(Self::parse_type_str(rest));
        }

        match clean {
            "number" | "int" | "long" | "float" | "double" | "decimal" => TypeRef::NUMBER,
            "string" | "text" => TypeRef::TEXT,
            "bool" | "boolean" => TypeRef::BOOLEAN,
            "Date" | "DateTime" | "datetime" => TypeRef::DATE_TIME,
            "Guid" | "guid" | "uuid" => TypeRef::GUID,
            "any" => TypeRef::ANY,
            other => TypeRef::named(other),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Primitive(primitive) => write!(f, "{}", primitive.ts_name()),
            TypeRef::Named(name) => write!(f, "{}", name),
            TypeRef::GenericParam(name) => write!(f, "{}", name),
            TypeRef::Array(element) => write!(f, "{}[]", element),
            TypeRef::Optional(inner) => write!(f, "{}?", inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_primitives() {
        assert_eq!(TypeRef::parse_type_str("string"), TypeRef::TEXT);
        assert_eq!(TypeRef::parse_type_str("int"), TypeRef::NUMBER);
        assert_eq!(TypeRef::parse_type_str("boolean"), TypeRef::BOOLEAN);
        assert_eq!(TypeRef::parse_type_str("Guid"), TypeRef::GUID);
        assert_eq!(TypeRef::parse_type_str("any"), TypeRef::ANY);
    }

    #[test]
    fn test_parse_array_and_optional_suffixes() {
        assert_eq!(
            TypeRef::parse_type_str("Address[]"),
            TypeRef::array(TypeRef::named("Address"))
        );
        assert_eq!(
            TypeRef::parse_type_str("int?"),
            TypeRef::optional(TypeRef::NUMBER)
        );
        assert_eq!(
            TypeRef::parse_type_str("Address[]?"),
            TypeRef::optional(TypeRef::array(TypeRef::named("Address")))
        );
    }

    #[test]
    fn test_parse_unknown_is_named() {
        assert_eq!(
            TypeRef::parse_type_str("Contracts.Address"),
            TypeRef::named("Contracts.Address")
        );
    }

    #[test]
    fn test_is_optional_only_at_top_level() {
        assert!(TypeRef::optional(TypeRef::TEXT).is_optional());
        assert!(!TypeRef::array(TypeRef::optional(TypeRef::TEXT)).is_optional());
    }

    #[test]
    fn test_display_round_trip_shape() {
        assert_eq!(TypeRef::parse_type_str("Address[]?").to_string(), "Address[]?");
        assert_eq!(TypeRef::TEXT.to_string(), "string");
    }
}
