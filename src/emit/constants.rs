//! Flat per-class constant blocks.
//!
//! Constants are grouped into one `as const` object per declaring class;
//! no namespace wrapper ever appears in the flat output.

use crate::resolve::TypeResolver;
use crate::script::ScriptBuilder;
use crate::types::{ClassModel, Constant};

pub(crate) fn append_constant_block(
    resolver: &TypeResolver<'_>,
    class: &ClassModel,
    sb: &mut ScriptBuilder,
) {
    let constants: Vec<&Constant> = class
        .constants
        .iter()
        .filter(|constant| !constant.is_ignored)
        .collect();
    if constants.is_empty() {
        return;
    }

    let type_name = resolver.declared_name(&class.name);
    tracing::debug!(class = %class.name, constant_count = constants.len(), "Emitting constant block");

    sb.append_line_indented(&format!("export const {} = {{", type_name));
    sb.indented(|sb| {
        for (index, constant) in constants.iter().enumerate() {
            let separator = if index + 1 < constants.len() { "," } else { "" };
            sb.append_line_indented(&format!("{}: {}{}", constant.name, constant.value, separator));
        }
    });
    sb.append_line_indented("} as const;");
}
