//! REST API surface generator.

use sprout_meta::{FeatureFlags, TypeDescriptor};

use crate::artifact::Artifact;
use crate::java::JavaFile;
use crate::naming::{self, CONTROLLER_SEGMENT};

/// `<Entity>Controller` mapped at `/api/<entity>` with the standard CRUD
/// endpoints. Pagination adds a `/paginated` listing wrapped in
/// `PageResponse`; the docs flag adds OpenAPI annotations.
pub fn generate(descriptor: &TypeDescriptor, flags: &FeatureFlags) -> Vec<Artifact> {
    let package = naming::sub_package(descriptor, CONTROLLER_SEGMENT);
    let class = naming::controller_class(descriptor);
    let entity = descriptor.name().to_string();
    let dto = naming::dto_class(descriptor);
    let service = naming::service_class(descriptor);
    let id_type = descriptor.id_type().to_string();
    let base = descriptor.base_namespace().to_string();
    let api_path = naming::api_path(descriptor);

    let mut file = JavaFile::new(&package)
        .import(&format!("{}.{entity}", descriptor.namespace()))
        .import(&format!("{base}.dto.{dto}"))
        .import(&format!("{base}.service.{service}"))
        .imports([
            "jakarta.validation.Valid",
            "java.util.List",
            "org.slf4j.Logger",
            "org.slf4j.LoggerFactory",
            "org.springframework.http.HttpStatus",
            "org.springframework.http.ResponseEntity",
            "org.springframework.web.bind.annotation.DeleteMapping",
            "org.springframework.web.bind.annotation.GetMapping",
            "org.springframework.web.bind.annotation.PathVariable",
            "org.springframework.web.bind.annotation.PostMapping",
            "org.springframework.web.bind.annotation.PutMapping",
            "org.springframework.web.bind.annotation.RequestBody",
            "org.springframework.web.bind.annotation.RequestMapping",
            "org.springframework.web.bind.annotation.RequestMethod",
            "org.springframework.web.bind.annotation.RestController",
        ]);
    if flags.pagination {
        file = file
            .import(&format!("{base}.dto.PageResponse"))
            .import("org.springframework.data.domain.Page")
            .import("org.springframework.web.bind.annotation.RequestParam");
    }
    if flags.docs {
        file = file.imports([
            "io.swagger.v3.oas.annotations.Operation",
            "io.swagger.v3.oas.annotations.tags.Tag",
        ]);
    }

    let (paginated, docs) = (flags.pagination, flags.docs);
    let file = file.body(|b| {
        b.javadoc([format!("REST endpoints for the {entity} entity.").as_str()])
            .annotation("@RestController")
            .annotation(&format!("@RequestMapping(\"{api_path}\")"))
            .when(docs, |b| {
                b.annotation(&format!(
                    "@Tag(name = \"{entity} Management\", description = \"Operations for managing {entity} resources\")"
                ))
            })
            .block(&format!("public class {class} {{"), |b| {
                let b = b
                    .blank()
                    .line(&format!(
                        "private static final Logger log = LoggerFactory.getLogger({class}.class);"
                    ))
                    .line(&format!("private final {service} service;"))
                    .blank()
                    .block(&format!("public {class}({service} service) {{"), |b| {
                        b.line("this.service = service;")
                    })
                    .blank()
                    .when(docs, |b| {
                        b.annotation(&format!(
                            "@Operation(summary = \"List all {entity} entities\")"
                        ))
                    })
                    .annotation("@GetMapping")
                    .block(
                        &format!("public ResponseEntity<List<{entity}>> getAll() {{"),
                        |b| {
                            b.line(&format!("log.debug(\"GET {api_path}\");"))
                                .line("return ResponseEntity.ok(service.findAll());")
                        },
                    )
                    .when(paginated, |b| {
                        b.blank()
                            .when(docs, |b| {
                                b.annotation(&format!(
                                    "@Operation(summary = \"List {entity} entities with pagination and sorting\")"
                                ))
                            })
                            .annotation("@GetMapping(\"/paginated\")")
                            .block(
                                &format!(
                                    "public ResponseEntity<PageResponse<{entity}>> getAllPaginated("
                                ),
                                |b| {
                                    b.line("@RequestParam(defaultValue = \"0\") int page,")
                                        .line("@RequestParam(defaultValue = \"10\") int size,")
                                        .line("@RequestParam(defaultValue = \"id\") String sortBy,")
                                        .line(
                                            "@RequestParam(defaultValue = \"ASC\") String sortDirection) {",
                                        )
                                        .line(&format!(
                                            "log.debug(\"GET {api_path}/paginated - page: {{}}, size: {{}}\", page, size);"
                                        ))
                                        .line(&format!(
                                            "Page<{entity}> result = service.findAllPaginated(page, size, sortBy, sortDirection);"
                                        ))
                                        .line("return ResponseEntity.ok(PageResponse.of(result));")
                                },
                            )
                    })
                    .blank()
                    .when(docs, |b| {
                        b.annotation(&format!(
                            "@Operation(summary = \"Get one {entity} by id\")"
                        ))
                    })
                    .annotation("@GetMapping(\"/{id}\")")
                    .block(
                        &format!(
                            "public ResponseEntity<{entity}> getById(@PathVariable {id_type} id) {{"
                        ),
                        |b| {
                            b.line(&format!("log.debug(\"GET {api_path}/{{}}\", id);"))
                                .line("return ResponseEntity.ok(service.findById(id));")
                        },
                    )
                    .blank()
                    .when(docs, |b| {
                        b.annotation(&format!(
                            "@Operation(summary = \"Create a new {entity}\")"
                        ))
                    })
                    .annotation("@PostMapping")
                    .block(
                        &format!(
                            "public ResponseEntity<{entity}> create(@Valid @RequestBody {dto} dto) {{"
                        ),
                        |b| {
                            b.line(&format!("log.info(\"POST {api_path} - {{}}\", dto);"))
                                .line(&format!("{entity} created = service.create(dto);"))
                                .line(
                                    "return ResponseEntity.status(HttpStatus.CREATED).body(created);",
                                )
                        },
                    )
                    .blank()
                    .when(docs, |b| {
                        b.annotation(&format!(
                            "@Operation(summary = \"Update an existing {entity}\")"
                        ))
                    })
                    .annotation("@PutMapping(\"/{id}\")")
                    .block(
                        &format!(
                            "public ResponseEntity<{entity}> update(@PathVariable {id_type} id, @Valid @RequestBody {dto} dto) {{"
                        ),
                        |b| {
                            b.line(&format!("log.info(\"PUT {api_path}/{{}} - {{}}\", id, dto);"))
                                .line("return ResponseEntity.ok(service.update(id, dto));")
                        },
                    );
                b.blank()
                    .when(docs, |b| {
                        b.annotation(&format!("@Operation(summary = \"Delete a {entity}\")"))
                    })
                    .annotation("@DeleteMapping(\"/{id}\")")
                    .block(
                        &format!(
                            "public ResponseEntity<Void> delete(@PathVariable {id_type} id) {{"
                        ),
                        |b| {
                            b.line(&format!("log.info(\"DELETE {api_path}/{{}}\", id);"))
                                .line("service.delete(id);")
                                .line("return ResponseEntity.noContent().build();")
                        },
                    )
                    .blank()
                    .when(docs, |b| {
                        b.annotation(&format!(
                            "@Operation(summary = \"Check whether a {entity} exists\")"
                        ))
                    })
                    .annotation("@RequestMapping(value = \"/{id}\", method = RequestMethod.HEAD)")
                    .block(
                        &format!(
                            "public ResponseEntity<Void> exists(@PathVariable {id_type} id) {{"
                        ),
                        |b| {
                            b.line(&format!("log.debug(\"HEAD {api_path}/{{}}\", id);"))
                                .line("boolean exists = service.existsById(id);")
                                .line(
                                    "return exists ? ResponseEntity.ok().build() : ResponseEntity.notFound().build();",
                                )
                        },
                    )
                    .blank()
                    .when(docs, |b| {
                        b.annotation(&format!(
                            "@Operation(summary = \"Count all {entity} entities\")"
                        ))
                    })
                    .annotation("@GetMapping(\"/count\")")
                    .block("public ResponseEntity<Long> count() {", |b| {
                        b.line(&format!("log.debug(\"GET {api_path}/count\");"))
                            .line("return ResponseEntity.ok(service.count());")
                    })
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
    fn test_controller_maps_lowercased_api_path() {
        let content = &generate(&product(), &FeatureFlags::default())[0].content;
        assert!(content.contains("@RequestMapping(\"/api/product\")"));
        assert!(content.contains("@GetMapping(\"/{id}\")"));
        assert!(content.contains("@DeleteMapping(\"/{id}\")"));
        assert!(content.contains("return ResponseEntity.noContent().build();"));
    }

    #[test]
    fn test_controller_emits_exists_and_count_endpoints() {
        let content = &generate(&product(), &FeatureFlags::default())[0].content;
        assert!(
            content.contains("@RequestMapping(value = \"/{id}\", method = RequestMethod.HEAD)")
        );
        assert!(content.contains("boolean exists = service.existsById(id);"));
        assert!(content.contains(
            "return exists ? ResponseEntity.ok().build() : ResponseEntity.notFound().build();"
        ));
        assert!(content.contains("@GetMapping(\"/count\")"));
        assert!(content.contains("return ResponseEntity.ok(service.count());"));
        assert!(content.contains("import org.springframework.web.bind.annotation.RequestMethod;"));
    }

    #[test]
    fn test_paginated_endpoint_only_with_flag() {
        let without = &generate(&product(), &FeatureFlags::default())[0].content;
        assert!(!without.contains("/paginated"));
        assert!(!without.contains("PageResponse"));

        let flags = FeatureFlags {
            pagination: true,
            ..FeatureFlags::default()
        };
        let with = &generate(&product(), &flags)[0].content;
        assert!(with.contains("@GetMapping(\"/paginated\")"));
        assert!(with.contains("ResponseEntity<PageResponse<Product>>"));
    }

    #[test]
    fn test_openapi_annotations_only_with_docs_flag() {
        let without = &generate(&product(), &FeatureFlags::default())[0].content;
        assert!(!without.contains("@Tag"));
        assert!(!without.contains("@Operation"));

        let flags = FeatureFlags {
            docs: true,
            ..FeatureFlags::default()
        };
        let with = &generate(&product(), &flags)[0].content;
        assert!(with.contains("@Tag(name = \"Product Management\""));
        assert!(with.contains("@Operation(summary = \"Create a new Product\")"));
    }
}
