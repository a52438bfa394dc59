//! Enum block emission over the three textual encodings.

use crate::config::{EnumMode, GeneratorConfig, OutputKind, OutputSelection};
use crate::emit::EmitPass;
use crate::script::ScriptBuilder;
use crate::types::EnumModel;

/// Encoding variants, selected from configuration once per generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EnumEncoding {
    /// The native `enum` construct.
    Classic,
    ConstObjectNumeric,
    ConstObjectString,
}

impl EnumEncoding {
    pub(crate) fn select(config: &GeneratorConfig) -> Self {
        if !config.enum_as_const_assertion {
            return EnumEncoding::Classic;
        }
        match config.enum_mode {
            EnumMode::Number => EnumEncoding::ConstObjectNumeric,
            EnumMode::String => EnumEncoding::ConstObjectString,
        }
    }
}

pub(crate) fn append_enum(
    pass: &mut EmitPass<'_>,
    model: &EnumModel,
    sb: &mut ScriptBuilder,
    selection: OutputSelection,
) {
    let type_name = pass.resolver.declared_name(&model.name);
    let visibility = if selection.contains(OutputKind::Enums)
        || selection.contains(OutputKind::Constants)
    {
        "export "
    } else {
        ""
    };

    let encoding = EnumEncoding::select(pass.config);
    tracing::debug!(enum_name = %model.name, encoding = ?encoding, "Emitting enum block");

    match encoding {
        EnumEncoding::Classic => {
            append_classic(pass.config, model, &type_name, visibility, sb);
        }
        encoding => append_const_object(model, &type_name, visibility, encoding, sb),
    }

    pass.generated_enums.push(model.name.clone());
}

fn append_classic(
    config: &GeneratorConfig,
    model: &EnumModel,
    type_name: &str,
    visibility: &str,
    sb: &mut ScriptBuilder,
) {
    sb.append_line_indented(&format!("{}enum {} {{", visibility, type_name));
    sb.indented(|sb| {
        for (index, value) in model.values.iter().enumerate() {
            let rendering = match config.enum_mode {
                EnumMode::Number => value.value.to_string(),
                EnumMode::String => format!("\"{}\"", value.name),
            };
            let separator = if index + 1 < model.values.len() { "," } else { "" };
            sb.append_line_indented(&format!("{} = {}{}", value.name, rendering, separator));
        }
    });
    sb.append_line_indented("}");
}

fn append_const_object(
    model: &EnumModel,
    type_name: &str,
    visibility: &str,
    encoding: EnumEncoding,
    sb: &mut ScriptBuilder,
) {
    sb.append_line_indented(&format!("{}const {} = {{", visibility, type_name));
    sb.indented(|sb| {
        for (index, value) in model.values.iter().enumerate() {
            let rendering = match encoding {
                EnumEncoding::ConstObjectString => format!("\"{}\"", value.name),
                _ => value.value.to_string(),
            };
            let separator = if index + 1 < model.values.len() { "," } else { "" };
            sb.append_line_indented(&format!("{}: {}{}", value.name, rendering, separator));
        }
    });
    sb.append_line_indented("} as const;");
    sb.append_line_indented(&format!(
        "{}type {} = typeof {}[keyof typeof {}];",
        visibility, type_name, type_name, type_name
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_selection() {
        let mut config = GeneratorConfig::default();
        assert_eq!(EnumEncoding::select(&config), EnumEncoding::Classic);

        config.enum_as_const_assertion = true;
        assert_eq!(EnumEncoding::select(&config), EnumEncoding::ConstObjectNumeric);

        config.enum_mode = EnumMode::String;
        assert_eq!(EnumEncoding::select(&config), EnumEncoding::ConstObjectString);

        // The numeric/string choice only matters once the const-object path
        // is chosen.
        config.enum_as_const_assertion = false;
        assert_eq!(EnumEncoding::select(&config), EnumEncoding::Classic);
    }
}
