// Declsync - flat TypeScript declaration generation from a language-neutral type model

pub mod config;
pub mod convert;
pub mod emit;
pub mod error;
pub mod resolve;
pub mod script;
pub mod types;

// Re-export commonly used items for convenience
pub use config::{EnumMode, GeneratorConfig, NameCase, OutputKind, OutputSelection};
pub use convert::{ConverterRegistry, TypeKey};
pub use emit::{Generator, ModulePlan};
pub use error::{DeclsyncError, Result};
pub use resolve::{MemberTypeFormatter, TypeResolver};
pub use script::ScriptBuilder;
pub use types::{
    ClassModel, Constant, EnumModel, EnumValue, Member, ModuleModel, Primitive, TypeModel, TypeRef,
};
