//! Data-transfer object generator.

use sprout_meta::{FeatureFlags, TypeDescriptor};

use crate::artifact::Artifact;
use crate::java::JavaFile;
use crate::naming::{self, DTO_SEGMENT};

/// `<Entity>Dto`: all non-id fields with validation annotations, accessor
/// pairs, and a `toString` for log output. The identifier never crosses
/// the transfer boundary.
pub fn generate(descriptor: &TypeDescriptor, _flags: &FeatureFlags) -> Vec<Artifact> {
    let package = naming::sub_package(descriptor, DTO_SEGMENT);
    let class = naming::dto_class(descriptor);
    let entity = descriptor.name();
    let fields: Vec<_> = descriptor.non_id_fields().collect();

    let file = JavaFile::new(&package)
        .import("jakarta.validation.constraints.NotNull")
        .body(|b| {
            let b = b.javadoc([format!("Transfer object for the {entity} entity.").as_str()]);
            b.block(&format!("public class {class} {{"), |mut b| {
                for f in &fields {
                    b = b
                        .blank()
                        .annotation("@NotNull")
                        .line(&format!("private {} {};", f.ty(), f.name()));
                }
                for f in &fields {
                    let cap = f.capitalized_name();
                    let (name, ty) = (f.name(), f.ty());
                    b = b
                        .blank()
                        .block(&format!("public {ty} get{cap}() {{"), |b| {
                            b.line(&format!("return {name};"))
                        })
                        .blank()
                        .block(&format!("public void set{cap}({ty} {name}) {{"), |b| {
                            b.line(&format!("this.{name} = {name};"))
                        });
                }
                b.blank()
                    .annotation("@Override")
                    .block("public String toString() {", |b| {
                        b.line(&format!("return \"{class}{{\"{}", to_string_tail(&fields)))
                    })
            })
        });

    vec![Artifact::java(package, format!("{class}.java"), file.render())]
}

fn to_string_tail(fields: &[&sprout_meta::FieldDescriptor]) -> String {
    if fields.is_empty() {
        return " + \"}\";".to_string();
    }
    let mut out = String::new();
    for (i, f) in fields.iter().enumerate() {
        let sep = if i == 0 { "" } else { ", " };
        out.push_str(&format!(
            " + \"{sep}{name}='\" + {name} + \"'\"",
            name = f.name()
        ));
    }
    out.push_str(" + \"}\";");
    out
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
                FieldDescriptor::new("price", "BigDecimal").unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_dto_excludes_id_field() {
        let artifacts = generate(&product(), &FeatureFlags::default());
        assert_eq!(artifacts.len(), 1);
        let dto = &artifacts[0];
        assert_eq!(
            dto.relative_path(),
            "src/main/java/com/example/shop/dto/ProductDto.java"
        );
        assert!(dto.content.contains("private String name;"));
        assert!(dto.content.contains("private BigDecimal price;"));
        assert!(!dto.content.contains("private Long id;"));
    }

    #[test]
    fn test_dto_has_accessors_and_validation() {
        let content = &generate(&product(), &FeatureFlags::default())[0].content;
        assert!(content.contains("public String getName() {"));
        assert!(content.contains("public void setPrice(BigDecimal price) {"));
        assert!(content.contains("@NotNull"));
        assert!(content.contains("import jakarta.validation.constraints.NotNull;"));
    }
}
