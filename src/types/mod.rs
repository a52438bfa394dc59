mod type_ref;

pub use crate::types::type_ref::{Primitive, TypeRef};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The externally built type model consumed by the emitter. The emitter
/// never mutates it; per-pass bookkeeping lives on the generator instead.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeModel {
    pub modules: Vec<ModuleModel>,
}

impl TypeModel {
    pub fn new(modules: Vec<ModuleModel>) -> Self {
        Self { modules }
    }

    pub fn single(module: ModuleModel) -> Self {
        Self {
            modules: vec![module],
        }
    }

    pub fn find_class(&self, full_name: &str) -> Option<&ClassModel> {
        self.modules
            .iter()
            .flat_map(|module| module.classes.iter())
            .find(|class| class.name == full_name)
    }

    pub fn find_enum(&self, full_name: &str) -> Option<&EnumModel> {
        self.modules
            .iter()
            .flat_map(|module| module.enums.iter())
            .find(|model| model.name == full_name)
    }

    /// Looks a class or enum up by fully-qualified name, across all modules.
    pub fn find_named(&self, full_name: &str) -> Option<NamedEntity<'_>> {
        if let Some(class) = self.find_class(full_name) {
            return Some(NamedEntity::Class(class));
        }
        self.find_enum(full_name).map(NamedEntity::Enum)
    }
}

/// A class or enum resolved from a named reference.
#[derive(Debug, Clone, Copy)]
pub enum NamedEntity<'a> {
    Class(&'a ClassModel),
    Enum(&'a EnumModel),
}

impl NamedEntity<'_> {
    pub fn name(&self) -> &str {
        match self {
            NamedEntity::Class(class) => &class.name,
            NamedEntity::Enum(model) => &model.name,
        }
    }

    pub fn is_ignored(&self) -> bool {
        match self {
            NamedEntity::Class(class) => class.is_ignored,
            NamedEntity::Enum(model) => model.is_ignored,
        }
    }
}

/// A named container of classes and enums. Container order is irrelevant;
/// the driver sorts modules by name for deterministic output.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, bon::Builder)]
#[builder(on(String, into))]
pub struct ModuleModel {
    pub name: String,
    #[builder(default)]
    pub classes: Vec<ClassModel>,
    #[builder(default)]
    pub enums: Vec<EnumModel>,
}

/// A class or interface declaration. `name` is the fully-qualified host
/// identity (dotted segments); the emitted identifier is its last segment,
/// so two classes from different host modules may collide after flattening.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, bon::Builder)]
#[builder(on(String, into))]
pub struct ClassModel {
    pub name: String,
    /// Fully-qualified name of the single base class, if any.
    pub base: Option<String>,
    /// Fully-qualified names of implemented interfaces.
    #[builder(default)]
    pub interfaces: Vec<String>,
    #[builder(default)]
    pub is_interface: bool,
    #[builder(default)]
    pub properties: Vec<Member>,
    #[builder(default)]
    pub fields: Vec<Member>,
    #[builder(default)]
    pub constants: Vec<Constant>,
    #[builder(default)]
    pub is_ignored: bool,
}

impl ClassModel {
    pub fn has_members(&self) -> bool {
        !self.properties.is_empty() || !self.fields.is_empty()
    }

    pub fn has_constants(&self) -> bool {
        !self.constants.is_empty()
    }
}

/// An enum declaration. Value order is declaration order and is never
/// re-sorted; it drives both representation and comma placement.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, bon::Builder)]
#[builder(on(String, into))]
pub struct EnumModel {
    pub name: String,
    #[builder(default)]
    pub values: Vec<EnumValue>,
    #[builder(default)]
    pub is_ignored: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub value: i64,
}

impl EnumValue {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A property or field. Optionality is derived from the member type's
/// nullability, not stored separately.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, bon::Builder)]
#[builder(on(String, into))]
pub struct Member {
    pub name: String,
    #[builder(default)]
    pub member_type: TypeRef,
    #[builder(default)]
    pub is_ignored: bool,
}

impl Member {
    pub fn new(name: impl Into<String>, member_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            member_type,
            is_ignored: false,
        }
    }
}

/// A class-level constant with a literal value, rendered as a JSON literal.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, bon::Builder)]
#[builder(on(String, into))]
pub struct Constant {
    pub name: String,
    #[builder(default)]
    pub constant_type: TypeRef,
    #[builder(default)]
    pub value: Value,
    #[builder(default)]
    pub is_ignored: bool,
}

impl Constant {
    pub fn new(name: impl Into<String>, constant_type: TypeRef, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            constant_type,
            value: value.into(),
            is_ignored: false,
        }
    }
}
