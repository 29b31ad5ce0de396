//! Canonical description of one entity type.
//!
//! A [`TypeDescriptor`] is produced once per invocation (by manifest
//! lowering) and consumed read-only by every artifact generator. Nothing
//! here touches the filesystem.

use thiserror::Error;

/// Errors raised when constructing descriptor values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetaError {
    #[error("entity name cannot be empty")]
    EmptyName,
    #[error("entity package cannot be empty")]
    EmptyNamespace,
    #[error("identifier type cannot be empty")]
    EmptyIdType,
    #[error("field name cannot be empty")]
    EmptyFieldName,
    #[error("field '{name}' has an empty type")]
    EmptyFieldType { name: String },
}

/// One field of an entity: its name and declared Java type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    ty: String,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Result<Self, MetaError> {
        let name = name.into();
        let ty = ty.into();
        if name.trim().is_empty() {
            return Err(MetaError::EmptyFieldName);
        }
        if ty.trim().is_empty() {
            return Err(MetaError::EmptyFieldType { name });
        }
        Ok(Self { name, ty })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    /// Field name with the first character upper-cased, for Java accessor
    /// naming (`title` → `getTitle` / `setTitle`).
    pub fn capitalized_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            None => String::new(),
            Some(c) => c.to_uppercase().chain(chars).collect(),
        }
    }

    /// True for the conventional identifier field, matched case-insensitively.
    pub fn is_id(&self) -> bool {
        self.name.eq_ignore_ascii_case("id")
    }
}

/// Structural description of one entity to generate code for.
///
/// Field order is declaration order and is semantically meaningful:
/// generated declarations, accessors and `toString` bodies follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    name: String,
    namespace: String,
    id_type: String,
    fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    pub fn new(
        name: impl Into<String>,
        namespace: impl Into<String>,
        id_type: impl Into<String>,
        fields: Vec<FieldDescriptor>,
    ) -> Result<Self, MetaError> {
        let name = name.into();
        let namespace = namespace.into();
        let id_type = id_type.into();
        if name.trim().is_empty() {
            return Err(MetaError::EmptyName);
        }
        if namespace.trim().is_empty() {
            return Err(MetaError::EmptyNamespace);
        }
        if id_type.trim().is_empty() {
            return Err(MetaError::EmptyIdType);
        }
        Ok(Self {
            name,
            namespace,
            id_type,
            fields,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn id_type(&self) -> &str {
        &self.id_type
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Fields excluding the identifier, in declaration order.
    ///
    /// The id is owned by the persistence layer and never appears in the
    /// DTO or in mapper property copies.
    pub fn non_id_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| !f.is_id())
    }

    /// The entity package with a trailing `.model` or `.entity` segment
    /// removed. Generated sub-packages (`.dto`, `.service`, ...) hang off
    /// this value. Idempotent: applying it twice strips nothing further.
    pub fn base_namespace(&self) -> &str {
        strip_conventional_segment(&self.namespace)
    }

    /// Lower-cased type name, used as the REST path segment.
    pub fn path_segment(&self) -> String {
        self.name.to_lowercase()
    }
}

fn strip_conventional_segment(namespace: &str) -> &str {
    for suffix in [".model", ".entity"] {
        if let Some(stripped) = namespace.strip_suffix(suffix) {
            if !stripped.is_empty() {
                return stripped;
            }
        }
    }
    namespace
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, ty: &str) -> FieldDescriptor {
        FieldDescriptor::new(name, ty).unwrap()
    }

    fn product() -> TypeDescriptor {
        TypeDescriptor::new(
            "Product",
            "com.example.shop.model",
            "Long",
            vec![
                field("id", "Long"),
                field("name", "String"),
                field("price", "Double"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_blank_name() {
        let err = TypeDescriptor::new("  ", "com.example", "Long", vec![]).unwrap_err();
        assert_eq!(err, MetaError::EmptyName);
    }

    #[test]
    fn test_rejects_blank_namespace() {
        let err = TypeDescriptor::new("Product", "", "Long", vec![]).unwrap_err();
        assert_eq!(err, MetaError::EmptyNamespace);
    }

    #[test]
    fn test_rejects_blank_id_type() {
        let err = TypeDescriptor::new("Product", "com.example", " ", vec![]).unwrap_err();
        assert_eq!(err, MetaError::EmptyIdType);
    }

    #[test]
    fn test_field_rejects_blank_parts() {
        assert_eq!(
            FieldDescriptor::new("", "Long").unwrap_err(),
            MetaError::EmptyFieldName
        );
        assert!(matches!(
            FieldDescriptor::new("price", "").unwrap_err(),
            MetaError::EmptyFieldType { .. }
        ));
    }

    #[test]
    fn test_capitalized_name() {
        assert_eq!(field("price", "Double").capitalized_name(), "Price");
        assert_eq!(field("unitCost", "Double").capitalized_name(), "UnitCost");
    }

    #[test]
    fn test_base_namespace_strips_model_segment() {
        assert_eq!(product().base_namespace(), "com.example.shop");
    }

    #[test]
    fn test_base_namespace_strips_entity_segment() {
        let meta =
            TypeDescriptor::new("Order", "com.example.shop.entity", "Long", vec![]).unwrap();
        assert_eq!(meta.base_namespace(), "com.example.shop");
    }

    #[test]
    fn test_base_namespace_leaves_other_packages_alone() {
        let meta = TypeDescriptor::new("Order", "com.example.domain", "Long", vec![]).unwrap();
        assert_eq!(meta.base_namespace(), "com.example.domain");
    }

    #[test]
    fn test_base_namespace_is_idempotent() {
        let meta = product();
        let once = meta.base_namespace().to_string();
        let again = TypeDescriptor::new("Product", once.clone(), "Long", vec![]).unwrap();
        assert_eq!(again.base_namespace(), once);
    }

    #[test]
    fn test_non_id_fields_excludes_id_case_insensitively() {
        let meta = TypeDescriptor::new(
            "Product",
            "com.example.model",
            "Long",
            vec![field("ID", "Long"), field("name", "String")],
        )
        .unwrap();
        let names: Vec<_> = meta.non_id_fields().map(|f| f.name()).collect();
        assert_eq!(names, vec!["name"]);
    }

    #[test]
    fn test_non_id_fields_preserve_declaration_order() {
        let meta = product();
        let names: Vec<_> = meta.non_id_fields().map(|f| f.name()).collect();
        assert_eq!(names, vec!["name", "price"]);
    }

    #[test]
    fn test_path_segment_is_lowercased_name() {
        assert_eq!(product().path_segment(), "product");
    }
}
