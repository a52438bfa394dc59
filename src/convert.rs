//! Caller-configured rendering overrides for host types.

use core::fmt;
use std::collections::HashMap;

use crate::types::{Primitive, TypeRef};

/// Identity a converter can be registered under: a primitive kind or a
/// fully-qualified host type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKey {
    Primitive(Primitive),
    Named(String),
}

impl TypeKey {
    pub fn named(name: impl Into<String>) -> Self {
        TypeKey::Named(name.into())
    }

    /// The registry identity of a type reference, if it has one. Arrays,
    /// optionals and generic parameters have no identity of their own;
    /// converters apply to their element types instead.
    pub fn of(type_ref: &TypeRef) -> Option<TypeKey> {
        match type_ref {
            TypeRef::Primitive(primitive) => Some(TypeKey::Primitive(*primitive)),
            TypeRef::Named(name) => Some(TypeKey::Named(name.clone())),
            TypeRef::GenericParam(_) | TypeRef::Array(_) | TypeRef::Optional(_) => None,
        }
    }
}

impl From<Primitive> for TypeKey {
    fn from(primitive: Primitive) -> Self {
        TypeKey::Primitive(primitive)
    }
}

/// Rendering override for a single host type. Callers are responsible for
/// returning syntactically valid target-language type expressions.
pub type ConvertFn = Box<dyn Fn(&TypeRef) -> String + Send + Sync>;

/// Mapping from host type identity to rendering functions. Entries are
/// registered once before generation and consulted many times; registering
/// an entry for a named type also removes that type's own declaration from
/// output (it becomes a referenced type only).
#[derive(Default)]
pub struct ConverterRegistry {
    entries: HashMap<TypeKey, ConvertFn>,
}

impl ConverterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs or overwrites the converter for `key`.
    pub fn register<F>(&mut self, key: TypeKey, render: F)
    where
        F: Fn(&TypeRef) -> String + Send + Sync + 'static,
    {
        tracing::debug!(key = ?key, "Registering type converter");
        self.entries.insert(key, Box::new(render));
    }

    pub fn is_registered(&self, key: &TypeKey) -> bool {
        self.entries.contains_key(key)
    }

    /// The rendered override for `type_ref`, if one is registered for its
    /// identity.
    pub fn convert(&self, type_ref: &TypeRef) -> Option<String> {
        let key = TypeKey::of(type_ref)?;
        self.entries.get(&key).map(|render| render(type_ref))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_convert() {
        let mut registry = ConverterRegistry::new();
        registry.register(TypeKey::Primitive(Primitive::Text), |_| {
            "KnockoutObservable<string>".to_string()
        });

        assert!(registry.is_registered(&TypeKey::Primitive(Primitive::Text)));
        assert_eq!(
            registry.convert(&TypeRef::TEXT),
            Some("KnockoutObservable<string>".to_string())
        );
        assert_eq!(registry.convert(&TypeRef::NUMBER), None);
    }

    #[test]
    fn test_registering_twice_overwrites() {
        let mut registry = ConverterRegistry::new();
        registry.register(TypeKey::named("Address"), |_| "first".to_string());
        registry.register(TypeKey::named("Address"), |_| "second".to_string());

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.convert(&TypeRef::named("Address")),
            Some("second".to_string())
        );
    }

    #[test]
    fn test_wrappers_have_no_identity() {
        assert_eq!(TypeKey::of(&TypeRef::array(TypeRef::TEXT)), None);
        assert_eq!(TypeKey::of(&TypeRef::optional(TypeRef::TEXT)), None);
        assert_eq!(
            TypeKey::of(&TypeRef::named("Address")),
            Some(TypeKey::named("Address"))
        );
    }
}
