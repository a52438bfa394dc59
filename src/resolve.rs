//! Type-name resolution: converter overrides first, then default naming.

use crate::config::GeneratorConfig;
use crate::convert::{ConverterRegistry, TypeKey};
use crate::error::{DeclsyncError, Result};
use crate::types::{Member, TypeModel, TypeRef};

/// Post-processes the resolved type name of every property and field, e.g.
/// to inject wrapper generics. Applied before emission and before sort-key
/// computation so member ordering sees the final rendering.
pub type MemberTypeFormatter = Box<dyn Fn(&Member, &str) -> String + Send + Sync>;

/// Turns model type references into printable names. Converter overrides win
/// over default resolution; named references render as the referenced
/// entity's flat identifier, with no module qualification.
pub struct TypeResolver<'a> {
    model: &'a TypeModel,
    converters: &'a ConverterRegistry,
    config: &'a GeneratorConfig,
}

impl<'a> TypeResolver<'a> {
    pub fn new(
        model: &'a TypeModel,
        converters: &'a ConverterRegistry,
        config: &'a GeneratorConfig,
    ) -> Self {
        Self {
            model,
            converters,
            config,
        }
    }

    pub fn has_converter(&self, key: &TypeKey) -> bool {
        self.converters.is_registered(key)
    }

    /// Printable name for a type reference.
    ///
    /// References to ignored entities render as `any` so that suppressing a
    /// type removes its name from every member line, not just its own
    /// declaration. References to entities absent from the model are fatal.
    pub fn type_name(&self, type_ref: &TypeRef) -> Result<String> {
        if let Some(rendered) = self.converters.convert(type_ref) {
            tracing::trace!(type_ref = %type_ref, rendered = %rendered, "Resolved via converter");
            return Ok(rendered);
        }

        match type_ref {
            TypeRef::Primitive(primitive) => Ok(primitive.ts_name().to_string()),
            TypeRef::GenericParam(name) => Ok(name.clone()),
            TypeRef::Array(element) => Ok(format!("{}[]", self.type_name(element)?)),
            TypeRef::Optional(inner) => self.type_name(inner),
            TypeRef::Named(full_name) => match self.model.find_named(full_name) {
                Some(entity) if entity.is_ignored() => Ok("any".to_string()),
                Some(entity) => Ok(self.declared_name(entity.name())),
                None => Err(DeclsyncError::type_not_found(full_name)),
            },
        }
    }

    /// Flat identifier for a declared entity: the last dotted segment of its
    /// fully-qualified name, with the naming strategy applied.
    pub fn declared_name(&self, full_name: &str) -> String {
        let flat = full_name.rsplit('.').next().unwrap_or(full_name);
        self.config.type_name_case.apply(flat)
    }

    /// Resolved name of a base or interface reference for an extension
    /// clause. `None` when the referenced entity is ignored (the clause
    /// drops it); an error when it is absent from the model.
    pub fn extension_name(&self, reference: &str) -> Result<Option<String>> {
        let named = TypeRef::named(reference);
        if let Some(rendered) = self.converters.convert(&named) {
            return Ok(Some(rendered));
        }
        match self.model.find_named(reference) {
            Some(entity) if entity.is_ignored() => Ok(None),
            Some(entity) => Ok(Some(self.declared_name(entity.name()))),
            None => Err(DeclsyncError::type_not_found(reference)),
        }
    }

    /// Resolved member type with the member-level hook applied.
    pub fn member_type_name(
        &self,
        member: &Member,
        formatter: Option<&MemberTypeFormatter>,
    ) -> Result<String> {
        let resolved = self.type_name(&member.member_type)?;
        Ok(match formatter {
            Some(format) => format(member, &resolved),
            None => resolved,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClassModel, EnumModel, ModuleModel, Primitive};

    fn model() -> TypeModel {
        TypeModel::single(
            ModuleModel::builder()
                .name("contracts")
                .classes(vec![
                    ClassModel::builder().name("Contracts.Address").build(),
                    ClassModel::builder()
                        .name("Contracts.Hidden")
                        .is_ignored(true)
                        .build(),
                ])
                .enums(vec![EnumModel::builder().name("Contracts.ItemType").build()])
                .build(),
        )
    }

    fn resolve(model: &TypeModel, converters: &ConverterRegistry, ty: &TypeRef) -> Result<String> {
        let config = GeneratorConfig::default();
        TypeResolver::new(model, converters, &config).type_name(ty)
    }

    #[test]
    fn test_primitive_table() {
        let model = TypeModel::default();
        let converters = ConverterRegistry::new();
        assert_eq!(resolve(&model, &converters, &TypeRef::NUMBER).unwrap(), "number");
        assert_eq!(resolve(&model, &converters, &TypeRef::TEXT).unwrap(), "string");
        assert_eq!(resolve(&model, &converters, &TypeRef::BOOLEAN).unwrap(), "boolean");
        assert_eq!(resolve(&model, &converters, &TypeRef::DATE_TIME).unwrap(), "Date");
        assert_eq!(resolve(&model, &converters, &TypeRef::GUID).unwrap(), "Guid");
        assert_eq!(resolve(&model, &converters, &TypeRef::ANY).unwrap(), "any");
    }

    #[test]
    fn test_named_reference_drops_module_qualification() {
        let model = model();
        let converters = ConverterRegistry::new();
        assert_eq!(
            resolve(&model, &converters, &TypeRef::named("Contracts.Address")).unwrap(),
            "Address"
        );
        assert_eq!(
            resolve(&model, &converters, &TypeRef::named("Contracts.ItemType")).unwrap(),
            "ItemType"
        );
    }

    #[test]
    fn test_arrays_and_optionals_resolve_through() {
        let model = model();
        let converters = ConverterRegistry::new();
        assert_eq!(
            resolve(
                &model,
                &converters,
                &TypeRef::array(TypeRef::named("Contracts.Address"))
            )
            .unwrap(),
            "Address[]"
        );
        assert_eq!(
            resolve(&model, &converters, &TypeRef::optional(TypeRef::NUMBER)).unwrap(),
            "number"
        );
    }

    #[test]
    fn test_generic_parameter_renders_as_its_own_name() {
        let model = TypeModel::default();
        let converters = ConverterRegistry::new();
        assert_eq!(
            resolve(&model, &converters, &TypeRef::generic_param("T")).unwrap(),
            "T"
        );
        assert_eq!(
            resolve(&model, &converters, &TypeRef::array(TypeRef::generic_param("T"))).unwrap(),
            "T[]"
        );
    }

    #[test]
    fn test_ignored_reference_renders_any() {
        let model = model();
        let converters = ConverterRegistry::new();
        assert_eq!(
            resolve(&model, &converters, &TypeRef::named("Contracts.Hidden")).unwrap(),
            "any"
        );
    }

    #[test]
    fn test_missing_reference_is_fatal() {
        let model = model();
        let converters = ConverterRegistry::new();
        assert!(matches!(
            resolve(&model, &converters, &TypeRef::named("Contracts.Missing")),
            Err(DeclsyncError::TypeNotFound { .. })
        ));
    }

    #[test]
    fn test_converter_wins_over_default_resolution() {
        let model = model();
        let mut converters = ConverterRegistry::new();
        converters.register(TypeKey::Primitive(Primitive::Guid), |_| "string".to_string());
        assert_eq!(resolve(&model, &converters, &TypeRef::GUID).unwrap(), "string");
    }

    #[test]
    fn test_extension_name_drops_ignored_and_fails_on_missing() {
        let model = model();
        let converters = ConverterRegistry::new();
        let config = GeneratorConfig::default();
        let resolver = TypeResolver::new(&model, &converters, &config);

        assert_eq!(
            resolver.extension_name("Contracts.Address").unwrap(),
            Some("Address".to_string())
        );
        assert_eq!(resolver.extension_name("Contracts.Hidden").unwrap(), None);
        assert!(resolver.extension_name("Contracts.Missing").is_err());
    }

    #[test]
    fn test_member_formatter_post_processes_resolution() {
        let model = model();
        let converters = ConverterRegistry::new();
        let config = GeneratorConfig::default();
        let resolver = TypeResolver::new(&model, &converters, &config);

        let member = Member::new("Street", TypeRef::TEXT);
        let formatter: MemberTypeFormatter =
            Box::new(|_, name| format!("KnockoutObservable<{}>", name));
        assert_eq!(
            resolver.member_type_name(&member, Some(&formatter)).unwrap(),
            "KnockoutObservable<string>"
        );
        assert_eq!(
            resolver.member_type_name(&member, None).unwrap(),
            "string"
        );
    }
}
