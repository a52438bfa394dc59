//! Per-module candidate selection, ordering and the base-class partition.

use std::collections::BTreeSet;

use crate::config::{OutputKind, OutputSelection};
use crate::convert::TypeKey;
use crate::resolve::TypeResolver;
use crate::types::{ClassModel, EnumModel, ModuleModel};

/// Immutable snapshot of what a module contributes to one generation pass:
/// non-ignored, non-converter-overridden classes and enums ordered by
/// rendered name, plus the set of names referenced as a base.
pub struct ModulePlan<'a> {
    pub classes: Vec<&'a ClassModel>,
    pub enums: Vec<&'a EnumModel>,
    /// Fully-qualified names that appear as some candidate's base type.
    pub base_names: BTreeSet<String>,
}

impl<'a> ModulePlan<'a> {
    pub fn build(module: &'a ModuleModel, resolver: &TypeResolver<'_>) -> Self {
        let mut classes: Vec<&ClassModel> = module
            .classes
            .iter()
            .filter(|class| {
                !class.is_ignored && !resolver.has_converter(&TypeKey::named(&class.name))
            })
            .collect();
        classes.sort_by_key(|class| resolver.declared_name(&class.name));

        let mut enums: Vec<&EnumModel> = module
            .enums
            .iter()
            .filter(|model| {
                !model.is_ignored && !resolver.has_converter(&TypeKey::named(&model.name))
            })
            .collect();
        enums.sort_by_key(|model| resolver.declared_name(&model.name));

        let base_names: BTreeSet<String> = classes
            .iter()
            .filter_map(|class| class.base.clone())
            .collect();

        tracing::debug!(
            module = %module.name,
            class_count = classes.len(),
            enum_count = enums.len(),
            base_count = base_names.len(),
            "Planned module"
        );

        Self {
            classes,
            enums,
            base_names,
        }
    }

    /// Early-exit decision: true when the module would contribute nothing
    /// but empty or degenerate blocks for this selection.
    pub fn should_skip(&self, selection: OutputSelection) -> bool {
        if selection.is_exactly(OutputKind::Enums) && self.enums.is_empty() {
            return true;
        }
        if selection.is_exactly(OutputKind::Properties) && self.classes.is_empty() {
            return true;
        }
        if self.enums.is_empty() && self.classes.is_empty() {
            return true;
        }
        if selection.is_exactly(OutputKind::Properties)
            && !self.classes.iter().any(|class| class.has_members())
        {
            return true;
        }
        if selection.is_exactly(OutputKind::Constants)
            && !self.classes.iter().any(|class| class.has_constants())
        {
            return true;
        }
        false
    }

    /// Candidates directly referenced as a base, in rendered-name order.
    /// Two-pass, not topological: a base-of-a-base stays in the remainder
    /// unless some candidate references it directly.
    pub fn base_classes(&self) -> impl Iterator<Item = &'a ClassModel> + '_ {
        self.classes
            .iter()
            .copied()
            .filter(move |class| self.base_names.contains(&class.name))
    }

    /// All remaining candidates, in rendered-name order.
    pub fn remaining_classes(&self) -> impl Iterator<Item = &'a ClassModel> + '_ {
        self.classes
            .iter()
            .copied()
            .filter(move |class| !self.base_names.contains(&class.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::convert::ConverterRegistry;
    use crate::types::{Member, TypeModel, TypeRef};

    fn plan_of<'a>(
        model: &'a TypeModel,
        converters: &'a ConverterRegistry,
        config: &'a GeneratorConfig,
    ) -> ModulePlan<'a> {
        let resolver = TypeResolver::new(model, converters, config);
        ModulePlan::build(&model.modules[0], &resolver)
    }

    fn sample_model() -> TypeModel {
        TypeModel::single(
            ModuleModel::builder()
                .name("people")
                .classes(vec![
                    ClassModel::builder()
                        .name("User")
                        .base("Person")
                        .properties(vec![Member::new("Login", TypeRef::TEXT)])
                        .build(),
                    ClassModel::builder()
                        .name("Person")
                        .properties(vec![Member::new("Name", TypeRef::TEXT)])
                        .build(),
                    ClassModel::builder()
                        .name("Employee")
                        .base("Person")
                        .properties(vec![Member::new("Salary", TypeRef::NUMBER)])
                        .build(),
                ])
                .build(),
        )
    }

    #[test]
    fn test_candidates_sorted_by_rendered_name() {
        let model = sample_model();
        let converters = ConverterRegistry::new();
        let config = GeneratorConfig::default();
        let plan = plan_of(&model, &converters, &config);

        let names: Vec<&str> = plan.classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Employee", "Person", "User"]);
    }

    #[test]
    fn test_partition_puts_referenced_bases_first() {
        let model = sample_model();
        let converters = ConverterRegistry::new();
        let config = GeneratorConfig::default();
        let plan = plan_of(&model, &converters, &config);

        let bases: Vec<&str> = plan.base_classes().map(|c| c.name.as_str()).collect();
        let rest: Vec<&str> = plan.remaining_classes().map(|c| c.name.as_str()).collect();
        assert_eq!(bases, vec!["Person"]);
        assert_eq!(rest, vec!["Employee", "User"]);
    }

    #[test]
    fn test_ignored_and_converted_classes_are_not_candidates() {
        let mut model = sample_model();
        model.modules[0].classes[1].is_ignored = true; // Person

        let mut converters = ConverterRegistry::new();
        converters.register(TypeKey::named("User"), |_| "unused".to_string());
        let config = GeneratorConfig::default();
        let plan = plan_of(&model, &converters, &config);

        let names: Vec<&str> = plan.classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Employee"]);
        // The ignored base still appears in base_names; partitioning only
        // affects candidates, so nothing is emitted for it either way.
        assert!(plan.base_names.contains("Person"));
    }

    #[test]
    fn test_skip_rules() {
        let empty = TypeModel::single(ModuleModel::builder().name("empty").build());
        let converters = ConverterRegistry::new();
        let config = GeneratorConfig::default();
        let plan = plan_of(&empty, &converters, &config);
        assert!(plan.should_skip(OutputSelection::default()));
        assert!(plan.should_skip(OutputKind::Enums.into()));
        assert!(plan.should_skip(OutputKind::Properties.into()));

        let memberless = TypeModel::single(
            ModuleModel::builder()
                .name("markers")
                .classes(vec![ClassModel::builder().name("Marker").build()])
                .build(),
        );
        let plan = plan_of(&memberless, &converters, &config);
        assert!(plan.should_skip(OutputKind::Properties.into()));
        assert!(plan.should_skip(OutputKind::Constants.into()));
        // Combined selections do not trigger the exact-selection rules.
        assert!(!plan.should_skip(OutputKind::Properties | OutputKind::Fields));
    }
}
