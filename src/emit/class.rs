//! Interface block emission: header, extension clause, sorted members.

use crate::config::{OutputKind, OutputSelection};
use crate::emit::EmitPass;
use crate::error::{DeclsyncError, Result};
use crate::script::ScriptBuilder;
use crate::types::{ClassModel, Member};

/// Appends one `export interface` block. Classes always render as
/// interfaces in this flattened mode; base content is never flattened into
/// descendants, so cyclic base chains cannot loop here.
pub(crate) fn append_class(
    pass: &mut EmitPass<'_>,
    class: &ClassModel,
    sb: &mut ScriptBuilder,
    selection: OutputSelection,
) -> Result<()> {
    let type_name = pass.resolver.declared_name(&class.name);
    tracing::debug!(class = %class.name, "Emitting interface block");

    sb.append_indented(&format!("export interface {}", type_name));
    append_extension_clause(pass, class, sb)?;
    sb.append_line(" {");

    let mut candidates: Vec<&Member> = Vec::new();
    if selection.contains(OutputKind::Properties) {
        candidates.extend(class.properties.iter());
    }
    if selection.contains(OutputKind::Fields) {
        candidates.extend(class.fields.iter());
    }

    let mut members: Vec<(String, &Member)> = Vec::with_capacity(candidates.len());
    for member in candidates.into_iter().filter(|member| !member.is_ignored) {
        let resolved = pass.resolver.member_type_name(member, pass.formatter)?;
        members.push((resolved, member));
    }
    // Stable sort: ties keep declaration order, properties before fields.
    members.sort_by(|a, b| a.0.cmp(&b.0));

    sb.indented(|sb| {
        for (resolved, member) in &members {
            let optional = if member.member_type.is_optional() { "?" } else { "" };
            sb.append_line_indented(&format!("{}{}: {};", member.name, optional, resolved));
        }
    });

    sb.append_line_indented("}");
    pass.generated_classes.push(class.name.clone());
    Ok(())
}

fn append_extension_clause(
    pass: &EmitPass<'_>,
    class: &ClassModel,
    sb: &mut ScriptBuilder,
) -> Result<()> {
    let base_name = match &class.base {
        Some(base) => pass
            .resolver
            .extension_name(base)
            .map_err(|_| DeclsyncError::base_not_found(base, &class.name))?,
        None => None,
    };

    let mut interface_names = Vec::with_capacity(class.interfaces.len());
    for reference in &class.interfaces {
        let resolved = pass
            .resolver
            .extension_name(reference)
            .map_err(|_| DeclsyncError::interface_not_found(reference, &class.name))?;
        if let Some(name) = resolved {
            interface_names.push(name);
        }
    }

    if class.is_interface {
        // Interface kind: base and interfaces join one extends list.
        let mut all = Vec::with_capacity(1 + interface_names.len());
        all.extend(base_name);
        all.extend(interface_names);
        if !all.is_empty() {
            sb.append(&format!(" extends {}", all.join(", ")));
        }
        return Ok(());
    }

    // Class kind: the base owns the extends keyword, the interface list is a
    // comma continuation after it.
    if let Some(base) = &base_name {
        sb.append(&format!(" extends {}", base));
    }
    if !interface_names.is_empty() {
        if base_name.is_some() {
            sb.append(&format!(" , {}", interface_names.join(", ")));
        } else {
            sb.append(&format!(" extends {}", interface_names.join(", ")));
        }
    }
    Ok(())
}
