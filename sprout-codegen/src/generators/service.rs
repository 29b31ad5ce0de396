//! Business-logic layer generator.

use sprout_meta::{FeatureFlags, TypeDescriptor};

use crate::artifact::Artifact;
use crate::java::{CodeBuilder, JavaFile};
use crate::naming::{self, SERVICE_SEGMENT};

const MAX_PAGE_SIZE: u32 = 100;

/// `<Entity>Service`: transactional CRUD operations over the repository.
///
/// Lookups of absent ids raise `ResourceNotFoundException`; null ids and
/// null transfer objects raise `BadRequestException`. With pagination
/// enabled an additional paged-and-sorted listing is emitted.
pub fn generate(descriptor: &TypeDescriptor, flags: &FeatureFlags) -> Vec<Artifact> {
    let package = naming::sub_package(descriptor, SERVICE_SEGMENT);
    let class = naming::service_class(descriptor);
    let entity = descriptor.name().to_string();
    let dto = naming::dto_class(descriptor);
    let repo = naming::repository_class(descriptor);
    let mapper = naming::mapper_class(descriptor);
    let id_type = descriptor.id_type().to_string();
    let base = descriptor.base_namespace().to_string();

    let mut file = JavaFile::new(&package)
        .import(&format!("{}.{entity}", descriptor.namespace()))
        .import(&format!("{base}.dto.{dto}"))
        .import(&format!("{base}.mapper.{mapper}"))
        .import(&format!("{base}.repository.{repo}"))
        .import(&format!("{base}.exception.ResourceNotFoundException"))
        .import(&format!("{base}.exception.BadRequestException"))
        .imports([
            "java.util.List",
            "org.slf4j.Logger",
            "org.slf4j.LoggerFactory",
            "org.springframework.stereotype.Service",
            "org.springframework.transaction.annotation.Transactional",
        ]);
    if flags.pagination {
        file = file.imports([
            "org.springframework.data.domain.Page",
            "org.springframework.data.domain.PageRequest",
            "org.springframework.data.domain.Pageable",
            "org.springframework.data.domain.Sort",
        ]);
    }

    let paginated = flags.pagination;
    let file = file.body(|b| {
        b.javadoc([format!("Business operations for the {entity} entity.").as_str()])
            .annotation("@Service")
            .annotation("@Transactional(readOnly = true)")
            .block(&format!("public class {class} {{"), |b| {
                let b = b
                    .blank()
                    .line(&format!(
                        "private static final Logger log = LoggerFactory.getLogger({class}.class);"
                    ))
                    .line(&format!("private final {repo} repository;"))
                    .blank()
                    .block(&format!("public {class}({repo} repository) {{"), |b| {
                        b.line("this.repository = repository;")
                    })
                    .blank()
                    .block(&format!("public List<{entity}> findAll() {{"), |b| {
                        b.line(&format!("log.debug(\"Finding all {entity} entities\");"))
                            .line("return repository.findAll();")
                    })
                    .when(paginated, |b| paginated_listing(b, &entity))
                    .blank()
                    .block(
                        &format!("public {entity} findById({id_type} id) {{"),
                        |b| {
                            b.block("if (id == null) {", |b| {
                                b.line("throw new BadRequestException(\"ID cannot be null\");")
                            })
                            .line("return repository.findById(id)")
                            .indent()
                            .indent()
                            .line(&format!(
                                ".orElseThrow(() -> new ResourceNotFoundException(\"{entity}\", \"id\", id));"
                            ))
                            .dedent()
                            .dedent()
                        },
                    )
                    .blank()
                    .annotation("@Transactional")
                    .block(&format!("public {entity} create({dto} dto) {{"), |b| {
                        b.block("if (dto == null) {", |b| {
                            b.line("throw new BadRequestException(\"DTO cannot be null\");")
                        })
                        .line(&format!("{entity} entity = {mapper}.toEntity(dto);"))
                        .line(&format!("{entity} saved = repository.save(entity);"))
                        .line(&format!("log.info(\"Created {entity}: {{}}\", saved);"))
                        .line("return saved;")
                    })
                    .blank()
                    .annotation("@Transactional")
                    .block(
                        &format!("public {entity} update({id_type} id, {dto} dto) {{"),
                        |b| {
                            b.block("if (dto == null) {", |b| {
                                b.line("throw new BadRequestException(\"DTO cannot be null\");")
                            })
                            .line(&format!("{entity} entity = findById(id);"))
                            .line(&format!("{mapper}.updateEntity(entity, dto);"))
                            .line(&format!("{entity} updated = repository.save(entity);"))
                            .line(&format!("log.info(\"Updated {entity}: {{}}\", updated);"))
                            .line("return updated;")
                        },
                    )
                    .blank()
                    .annotation("@Transactional")
                    .block(&format!("public void delete({id_type} id) {{"), |b| {
                        b.line(&format!("{entity} entity = findById(id);"))
                            .line("repository.delete(entity);")
                            .line(&format!(
                                "log.info(\"Deleted {entity} with id: {{}}\", id);"
                            ))
                    })
                    .blank()
                    .block(
                        &format!("public boolean existsById({id_type} id) {{"),
                        |b| {
                            b.block("if (id == null) {", |b| b.line("return false;"))
                                .line("return repository.existsById(id);")
                        },
                    );
                b.blank().block("public long count() {", |b| {
                    b.line("return repository.count();")
                })
            })
    });

    vec![Artifact::java(package, format!("{class}.java"), file.render())]
}

fn paginated_listing(b: CodeBuilder, entity: &str) -> CodeBuilder {
    b.blank().block(
        &format!(
            "public Page<{entity}> findAllPaginated(int page, int size, String sortBy, String sortDirection) {{"
        ),
        |b| {
            b.block("if (page < 0) {", |b| {
                b.line("throw new BadRequestException(\"Page number cannot be negative\");")
            })
            .block("if (size <= 0) {", |b| {
                b.line("throw new BadRequestException(\"Page size must be greater than 0\");")
            })
            .block(&format!("if (size > {MAX_PAGE_SIZE}) {{"), |b| {
                b.line(&format!(
                    "log.warn(\"Page size {{}} is too large, limiting to {MAX_PAGE_SIZE}\", size);"
                ))
                .line(&format!("size = {MAX_PAGE_SIZE};"))
            })
            .line("Sort.Direction direction = sortDirection.equalsIgnoreCase(\"DESC\")")
            .indent()
            .indent()
            .line("? Sort.Direction.DESC")
            .line(": Sort.Direction.ASC;")
            .dedent()
            .dedent()
            .line("Pageable pageable = PageRequest.of(page, size, Sort.by(direction, sortBy));")
            .line("return repository.findAll(pageable);")
        },
    )
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
    fn test_service_has_full_crud_surface() {
        let content = &generate(&product(), &FeatureFlags::default())[0].content;
        assert!(content.contains("public List<Product> findAll() {"));
        assert!(content.contains("public Product findById(Long id) {"));
        assert!(content.contains("public Product create(ProductDto dto) {"));
        assert!(content.contains("public Product update(Long id, ProductDto dto) {"));
        assert!(content.contains("public void delete(Long id) {"));
        assert!(content.contains("public boolean existsById(Long id) {"));
        assert!(content.contains("public long count() {"));
    }

    #[test]
    fn test_missing_entity_raises_not_found() {
        let content = &generate(&product(), &FeatureFlags::default())[0].content;
        assert!(content.contains("new ResourceNotFoundException(\"Product\", \"id\", id)"));
        assert!(content.contains("throw new BadRequestException(\"DTO cannot be null\");"));
    }

    #[test]
    fn test_paginated_listing_only_with_flag() {
        let without = &generate(&product(), &FeatureFlags::default())[0].content;
        assert!(!without.contains("findAllPaginated"));
        assert!(!without.contains("org.springframework.data.domain.Page"));

        let flags = FeatureFlags {
            pagination: true,
            ..FeatureFlags::default()
        };
        let with = &generate(&product(), &flags)[0].content;
        assert!(with.contains(
            "public Page<Product> findAllPaginated(int page, int size, String sortBy, String sortDirection) {"
        ));
        assert!(with.contains("size = 100;"));
    }
}
