//! Persistence-access interface generator.

use sprout_meta::{FeatureFlags, TypeDescriptor};

use crate::artifact::Artifact;
use crate::java::JavaFile;
use crate::naming::{self, REPOSITORY_SEGMENT};

/// `<Entity>Repository extends JpaRepository<Entity, IdType>`. The id
/// type parameter comes straight from the descriptor, so a `UUID`-keyed
/// entity gets `JpaRepository<Entity, UUID>` with no extra configuration.
pub fn generate(descriptor: &TypeDescriptor, _flags: &FeatureFlags) -> Vec<Artifact> {
    let package = naming::sub_package(descriptor, REPOSITORY_SEGMENT);
    let class = naming::repository_class(descriptor);
    let entity = descriptor.name();
    let id_type = descriptor.id_type();

    let file = JavaFile::new(&package)
        .import(&format!("{}.{entity}", descriptor.namespace()))
        .import("org.springframework.data.jpa.repository.JpaRepository")
        .import("org.springframework.stereotype.Repository")
        .body(|b| {
            b.javadoc([format!("Data access for the {entity} entity.").as_str()])
                .annotation("@Repository")
                .line(&format!(
                    "public interface {class} extends JpaRepository<{entity}, {id_type}> {{"
                ))
                .line("}")
        });

    vec![Artifact::java(package, format!("{class}.java"), file.render())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprout_meta::FieldDescriptor;

    #[test]
    fn test_repository_uses_descriptor_id_type() {
        let descriptor = TypeDescriptor::new(
            "Order",
            "com.example.shop.entity",
            "UUID",
            vec![FieldDescriptor::new("id", "UUID").unwrap()],
        )
        .unwrap();

        let artifact = &generate(&descriptor, &FeatureFlags::default())[0];
        assert_eq!(
            artifact.relative_path(),
            "src/main/java/com/example/shop/repository/OrderRepository.java"
        );
        assert!(artifact
            .content
            .contains("public interface OrderRepository extends JpaRepository<Order, UUID> {"));
    }
}
