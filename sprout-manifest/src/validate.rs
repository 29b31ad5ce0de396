//! Post-parse validation of the manifest.

use std::collections::HashSet;

use crate::{Manifest, Result, error::SourceContext};

/// Validate the manifest after parsing.
///
/// Everything here is an InvalidInput failure: the pipeline never starts
/// and nothing is written.
pub fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let entity = &manifest.entity;

    if entity.name.trim().is_empty() {
        return Err(ctx.validation_error("entity name cannot be empty"));
    }
    if !is_java_type_name(&entity.name) {
        return Err(ctx.invalid_identifier_error(
            &entity.name,
            "entity name",
            "use a Java class name: letters, digits, underscores, starting with an upper-case letter",
        ));
    }

    if entity.package.trim().is_empty() {
        return Err(ctx.validation_error("entity package cannot be empty"));
    }
    if !is_package_path(&entity.package) {
        return Err(ctx.invalid_identifier_error(
            &entity.package,
            "entity package",
            "use a dotted package path of Java identifiers, e.g. com.example.shop.model",
        ));
    }

    let mut seen = HashSet::new();
    let mut id_markers = 0usize;
    for field in &entity.fields {
        if field.name.trim().is_empty() {
            return Err(ctx.validation_error("field name cannot be empty"));
        }
        if !is_java_identifier(&field.name) {
            return Err(ctx.invalid_identifier_error(
                &field.name,
                "field name",
                "use a Java identifier: letters, digits, underscores, not starting with a digit",
            ));
        }
        if field.ty.trim().is_empty() {
            return Err(ctx.validation_error(format!("field '{}' has an empty type", field.name)));
        }
        if !seen.insert(field.name.to_lowercase()) {
            return Err(ctx.duplicate_field_error(&field.name));
        }
        if field.id {
            id_markers += 1;
        }
    }
    if id_markers > 1 {
        return Err(ctx.multiple_id_markers_error());
    }

    Ok(())
}

fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

fn is_java_type_name(s: &str) -> bool {
    is_java_identifier(s) && s.chars().next().is_some_and(|c| c.is_uppercase())
}

fn is_package_path(s: &str) -> bool {
    !s.starts_with('.') && !s.ends_with('.') && s.split('.').all(is_java_identifier)
}
