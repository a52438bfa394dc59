//! The emission driver: orchestrates enum, interface and constant blocks
//! across modules in a fixed category order.

mod class;
mod constants;
mod enums;
mod filter;

pub use filter::ModulePlan;

use crate::config::{GeneratorConfig, OutputKind, OutputSelection};
use crate::convert::{ConverterRegistry, TypeKey};
use crate::error::Result;
use crate::resolve::{MemberTypeFormatter, TypeResolver};
use crate::script::ScriptBuilder;
use crate::types::{Member, ModuleModel, TypeModel, TypeRef};

/// Flat (non-namespaced) TypeScript declaration generator.
///
/// Configure the converter registry, member formatting hook and enum
/// encoding before calling [`Generator::generate`]; all of them are
/// immutable for the duration of a call. The generated-classes/enums
/// bookkeeping is per-call accumulation state, reset at the start of every
/// pass so repeated calls stay idempotent.
pub struct Generator {
    config: GeneratorConfig,
    converters: ConverterRegistry,
    member_type_formatter: Option<MemberTypeFormatter>,
    generated_classes: Vec<String>,
    generated_enums: Vec<String>,
}

/// Borrowed state threaded through the emitters during one pass.
pub(crate) struct EmitPass<'a> {
    pub(crate) resolver: TypeResolver<'a>,
    pub(crate) config: &'a GeneratorConfig,
    pub(crate) formatter: Option<&'a MemberTypeFormatter>,
    pub(crate) generated_classes: &'a mut Vec<String>,
    pub(crate) generated_enums: &'a mut Vec<String>,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            converters: ConverterRegistry::new(),
            member_type_formatter: None,
            generated_classes: Vec::new(),
            generated_enums: Vec::new(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Mutable access for pre-generation configuration changes. Must not be
    /// used concurrently with an in-flight [`Generator::generate`] call.
    pub fn config_mut(&mut self) -> &mut GeneratorConfig {
        &mut self.config
    }

    pub fn converters(&self) -> &ConverterRegistry {
        &self.converters
    }

    /// Installs or overwrites a converter for a host type. Registering a
    /// converter for a named type also suppresses that type's own
    /// declaration; it becomes a referenced type only.
    pub fn register_type_convertor<F>(&mut self, key: TypeKey, render: F)
    where
        F: Fn(&TypeRef) -> String + Send + Sync + 'static,
    {
        self.converters.register(key, render);
    }

    /// Installs the hook applied to every resolved property/field type name
    /// before sorting and emission.
    pub fn set_member_type_formatter<F>(&mut self, format: F)
    where
        F: Fn(&Member, &str) -> String + Send + Sync + 'static,
    {
        self.member_type_formatter = Some(Box::new(format));
    }

    /// Fully-qualified names of the classes emitted by the most recent pass.
    pub fn generated_classes(&self) -> &[String] {
        &self.generated_classes
    }

    /// Fully-qualified names of the enums emitted by the most recent pass.
    pub fn generated_enums(&self) -> &[String] {
        &self.generated_enums
    }

    /// Renders the model into one flat declaration text. Any non-empty
    /// subset of output kinds is valid; the empty selection yields empty
    /// output for every module.
    pub fn generate(&mut self, model: &TypeModel, selection: OutputSelection) -> Result<String> {
        tracing::info!(
            module_count = model.modules.len(),
            selection = %selection,
            "Generating flat TypeScript declarations"
        );

        self.generated_classes.clear();
        self.generated_enums.clear();

        let mut sb = ScriptBuilder::new(self.config.indent.clone());
        {
            let mut pass = EmitPass {
                resolver: TypeResolver::new(model, &self.converters, &self.config),
                config: &self.config,
                formatter: self.member_type_formatter.as_ref(),
                generated_classes: &mut self.generated_classes,
                generated_enums: &mut self.generated_enums,
            };

            let mut modules: Vec<&ModuleModel> = model.modules.iter().collect();
            modules.sort_by(|a, b| a.name.cmp(&b.name));

            for module in modules {
                append_module(&mut pass, module, &mut sb, selection)?;
            }
        }

        let script = sb.into_string();
        tracing::info!(
            output_length = script.len(),
            class_count = self.generated_classes.len(),
            enum_count = self.generated_enums.len(),
            "Generation complete"
        );
        Ok(script)
    }
}

/// One module, categories in fixed order: enums, then base-partition
/// classes, then remaining classes, then constants. Never interleaved.
fn append_module(
    pass: &mut EmitPass<'_>,
    module: &ModuleModel,
    sb: &mut ScriptBuilder,
    selection: OutputSelection,
) -> Result<()> {
    let plan = ModulePlan::build(module, &pass.resolver);

    if plan.should_skip(selection) {
        tracing::debug!(module = %module.name, "Skipping module with no emittable content");
        return Ok(());
    }

    if selection.contains(OutputKind::Enums) {
        for model in &plan.enums {
            enums::append_enum(pass, model, sb, selection);
        }
    }

    if selection.contains(OutputKind::Properties) || selection.contains(OutputKind::Fields) {
        for model in plan.base_classes() {
            class::append_class(pass, model, sb, selection)?;
        }
        for model in plan.remaining_classes() {
            class::append_class(pass, model, sb, selection)?;
        }
    }

    if selection.contains(OutputKind::Constants) {
        for model in &plan.classes {
            constants::append_constant_block(&pass.resolver, model, sb);
        }
    }

    Ok(())
}
