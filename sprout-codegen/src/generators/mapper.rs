//! Entity/DTO converter generator.

use sprout_meta::{FeatureFlags, TypeDescriptor};

use crate::artifact::Artifact;
use crate::java::JavaFile;
use crate::naming::{self, MAPPER_SEGMENT};

/// `<Entity>Mapper`: static `toEntity`, `toDto`, and `updateEntity`
/// copying every non-id field by accessor pair. Null inputs map to null
/// outputs rather than exceptions.
pub fn generate(descriptor: &TypeDescriptor, _flags: &FeatureFlags) -> Vec<Artifact> {
    let package = naming::sub_package(descriptor, MAPPER_SEGMENT);
    let class = naming::mapper_class(descriptor);
    let entity = descriptor.name();
    let dto = naming::dto_class(descriptor);
    let fields: Vec<_> = descriptor.non_id_fields().collect();

    let file = JavaFile::new(&package)
        .import(&format!("{}.{entity}", descriptor.namespace()))
        .import(&format!(
            "{}.{dto}",
            naming::sub_package(descriptor, naming::DTO_SEGMENT)
        ))
        .body(|b| {
            b.javadoc([format!("Converts between {entity} and {dto}.").as_str()])
                .block(&format!("public final class {class} {{"), |b| {
                    let b = b
                        .blank()
                        .block(&format!("private {class}() {{"), |b| b)
                        .blank()
                        .block(
                            &format!("public static {entity} toEntity({dto} dto) {{"),
                            |mut b| {
                                b = b
                                    .block("if (dto == null) {", |b| b.line("return null;"))
                                    .line(&format!("{entity} entity = new {entity}();"));
                                for f in &fields {
                                    let cap = f.capitalized_name();
                                    b = b.line(&format!("entity.set{cap}(dto.get{cap}());"));
                                }
                                b.line("return entity;")
                            },
                        )
                        .blank()
                        .block(
                            &format!("public static {dto} toDto({entity} entity) {{"),
                            |mut b| {
                                b = b
                                    .block("if (entity == null) {", |b| b.line("return null;"))
                                    .line(&format!("{dto} dto = new {dto}();"));
                                for f in &fields {
                                    let cap = f.capitalized_name();
                                    b = b.line(&format!("dto.set{cap}(entity.get{cap}());"));
                                }
                                b.line("return dto;")
                            },
                        );
                    b.blank()
                        .block(
                            &format!(
                                "public static void updateEntity({entity} entity, {dto} dto) {{"
                            ),
                            |mut b| {
                                b = b.block("if (entity == null || dto == null) {", |b| {
                                    b.line("return;")
                                });
                                for f in &fields {
                                    let cap = f.capitalized_name();
                                    b = b.line(&format!("entity.set{cap}(dto.get{cap}());"));
                                }
                                b
                            },
                        )
                })
        });

    vec![Artifact::java(package, format!("{class}.java"), file.render())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprout_meta::FieldDescriptor;

    fn product() -> TypeDescriptor {
        TypeDescriptor::new(
            "Product",
            "com.example.shop.model",
            "Long",
            vec![
                FieldDescriptor::new("id", "Long").unwrap(),
                FieldDescriptor::new("name", "String").unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_mapper_copies_non_id_fields_both_ways() {
        let content = &generate(&product(), &FeatureFlags::default())[0].content;
        assert!(content.contains("entity.setName(dto.getName());"));
        assert!(content.contains("dto.setName(entity.getName());"));
        assert!(!content.contains("setId("));
    }

    #[test]
    fn test_mapper_imports_entity_and_dto() {
        let content = &generate(&product(), &FeatureFlags::default())[0].content;
        assert!(content.contains("import com.example.shop.model.Product;"));
        assert!(content.contains("import com.example.shop.dto.ProductDto;"));
        assert!(content.contains("public static void updateEntity(Product entity, ProductDto dto) {"));
    }
}
