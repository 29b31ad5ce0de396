//! Manifest schema and lowering into the metadata model.

use std::{path::Path, str::FromStr};

use serde::Deserialize;
use sprout_meta::{FeatureFlags, FieldDescriptor, TypeDescriptor};

use crate::{
    Result,
    error::{Error, SourceContext},
    validate,
};

/// Default identifier type when no field carries the `id = true` marker.
const DEFAULT_ID_TYPE: &str = "Long";

/// Root schema for sprout.toml
///
/// Fields are crate-private so a `Manifest` can only be obtained through the
/// parsing functions, all of which validate before returning.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    /// The entity to scaffold.
    pub(crate) entity: EntitySpec,

    /// Optional bundle toggles.
    #[serde(default)]
    pub(crate) features: FeatureSpec,
}

/// The entity declaration.
#[derive(Debug, Deserialize)]
pub struct EntitySpec {
    /// Java class name, e.g. `Product`.
    pub(crate) name: String,

    /// Dotted package of the entity class, e.g. `com.example.shop.model`.
    pub(crate) package: String,

    /// Declared fields, in declaration order.
    #[serde(default)]
    pub(crate) fields: Vec<FieldSpec>,
}

/// One declared field.
#[derive(Debug, Deserialize)]
pub struct FieldSpec {
    pub(crate) name: String,

    /// Java type, e.g. `String`, `Long`, `BigDecimal`.
    #[serde(rename = "type")]
    pub(crate) ty: String,

    /// Identifier marker; at most one field may set this.
    #[serde(default)]
    pub(crate) id: bool,

    /// Static fields are declared but excluded from generation.
    #[serde(default, rename = "static")]
    pub(crate) is_static: bool,
}

/// Bundle toggles, all off by default.
#[derive(Debug, Default, Deserialize)]
pub struct FeatureSpec {
    #[serde(default)]
    pub(crate) security: bool,
    #[serde(default)]
    pub(crate) auditing: bool,
    #[serde(default)]
    pub(crate) pagination: bool,
    #[serde(default)]
    pub(crate) docs: bool,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "sprout.toml")
    }
}

impl Manifest {
    /// Parse a sprout.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }

    /// Lower the manifest to the descriptor consumed by the generators.
    ///
    /// Static fields are dropped; the identifier type comes from the field
    /// marked `id = true`, defaulting to `Long` when none is marked.
    ///
    /// Infallible because every way to obtain a `Manifest` runs validation
    /// first, which rejects blank names and types.
    pub fn descriptor(&self) -> TypeDescriptor {
        let id_type = self
            .entity
            .fields
            .iter()
            .find(|f| f.id)
            .map(|f| f.ty.clone())
            .unwrap_or_else(|| DEFAULT_ID_TYPE.to_string());

        let fields = self
            .entity
            .fields
            .iter()
            .filter(|f| !f.is_static)
            .map(|f| {
                FieldDescriptor::new(&f.name, &f.ty)
                    .expect("validated manifest produced an empty field")
            })
            .collect();

        TypeDescriptor::new(&self.entity.name, &self.entity.package, id_type, fields)
            .expect("validated manifest produced an empty entity")
    }

    /// Bundle toggles as the flags value threaded through the pipeline.
    pub fn flags(&self) -> FeatureFlags {
        FeatureFlags {
            security: self.features.security,
            auditing: self.features.auditing,
            pagination: self.features.pagination,
            docs: self.features.docs,
        }
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate::validate_manifest(&manifest, &source_ctx)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCT: &str = r#"
        [entity]
        name = "Product"
        package = "com.example.shop.model"

        [[entity.fields]]
        name = "id"
        type = "Long"
        id = true

        [[entity.fields]]
        name = "title"
        type = "String"

        [features]
        pagination = true
    "#;

    #[test]
    fn test_parse_and_lower() {
        let manifest = Manifest::from_str(PRODUCT).expect("manifest should parse");
        let meta = manifest.descriptor();

        assert_eq!(meta.name(), "Product");
        assert_eq!(meta.namespace(), "com.example.shop.model");
        assert_eq!(meta.id_type(), "Long");
        assert_eq!(meta.fields().len(), 2);

        let flags = manifest.flags();
        assert!(flags.pagination);
        assert!(!flags.security && !flags.auditing && !flags.docs);
    }

    #[test]
    fn test_id_type_defaults_to_long() {
        let manifest = Manifest::from_str(
            r#"
            [entity]
            name = "Tag"
            package = "com.example.model"

            [[entity.fields]]
            name = "label"
            type = "String"
        "#,
        )
        .unwrap();
        assert_eq!(manifest.descriptor().id_type(), "Long");
    }

    #[test]
    fn test_id_type_from_marked_field() {
        let manifest = Manifest::from_str(
            r#"
            [entity]
            name = "Document"
            package = "com.example.model"

            [[entity.fields]]
            name = "id"
            type = "UUID"
            id = true
        "#,
        )
        .unwrap();
        assert_eq!(manifest.descriptor().id_type(), "UUID");
    }

    #[test]
    fn test_static_fields_are_dropped() {
        let manifest = Manifest::from_str(
            r#"
            [entity]
            name = "Config"
            package = "com.example.model"

            [[entity.fields]]
            name = "KEY"
            type = "String"
            static = true

            [[entity.fields]]
            name = "value"
            type = "String"
        "#,
        )
        .unwrap();
        let meta = manifest.descriptor();
        assert_eq!(meta.fields().len(), 1);
        assert_eq!(meta.fields()[0].name(), "value");
    }

    #[test]
    fn test_parse_error_on_bad_toml() {
        assert!(Manifest::from_str("[entity").is_err());
    }
}
