//! End-to-end pipeline runs against a temporary project tree.

use std::fs;
use std::path::Path;

use sprout_codegen::{GenerateOptions, Pipeline, SourceTree, WriteOutcome};
use sprout_meta::{FeatureFlags, FieldDescriptor, TypeDescriptor};
use tempfile::TempDir;

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src/main/java")).unwrap();
    dir
}

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

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

#[test]
fn test_core_run_produces_exact_artifact_set() {
    let dir = project();
    let tree = SourceTree::open(dir.path()).unwrap();
    let pipeline = Pipeline::standard();

    let report = pipeline
        .run(
            &tree,
            &product(),
            &FeatureFlags::default(),
            GenerateOptions::default(),
        )
        .unwrap();

    let paths: Vec<&str> = report.outcomes.iter().map(|o| o.path.as_str()).collect();
    assert_eq!(
        paths,
        [
            "src/main/java/com/example/shop/exception/ResourceNotFoundException.java",
            "src/main/java/com/example/shop/exception/BadRequestException.java",
            "src/main/java/com/example/shop/exception/DuplicateResourceException.java",
            "src/main/java/com/example/shop/dto/ErrorResponse.java",
            "src/main/java/com/example/shop/exception/GlobalExceptionHandler.java",
            "src/main/java/com/example/shop/dto/ProductDto.java",
            "src/main/java/com/example/shop/mapper/ProductMapper.java",
            "src/main/java/com/example/shop/repository/ProductRepository.java",
            "src/main/java/com/example/shop/service/ProductService.java",
            "src/main/java/com/example/shop/controller/ProductController.java",
        ]
    );
    assert!(report.outcomes.iter().all(|o| o.outcome == WriteOutcome::Created));

    let dto = read(dir.path(), "src/main/java/com/example/shop/dto/ProductDto.java");
    assert!(dto.contains("private String name;"));
    assert!(dto.contains("private BigDecimal price;"));
    assert!(!dto.contains("private Long id;"));

    let repo = read(
        dir.path(),
        "src/main/java/com/example/shop/repository/ProductRepository.java",
    );
    assert!(repo.contains("JpaRepository<Product, Long>"));

    let controller = read(
        dir.path(),
        "src/main/java/com/example/shop/controller/ProductController.java",
    );
    assert!(controller.contains("@RequestMapping(\"/api/product\")"));

    assert!(!dir.path().join("SECURITY_GUIDE.md").exists());
    assert!(!dir.path().join("AUDITING_GUIDE.md").exists());
    assert!(!dir.path().join("src/main/resources/application.properties").exists());
}

#[test]
fn test_full_run_then_rerun_skips_everything() {
    let dir = project();
    let tree = SourceTree::open(dir.path()).unwrap();
    let pipeline = Pipeline::standard();
    let flags = FeatureFlags::all();

    let first = pipeline
        .run(&tree, &product(), &flags, GenerateOptions::default())
        .unwrap();
    assert!(first.outcomes.len() > 20);
    assert_eq!(first.skipped(), 0);
    assert!(dir.path().join("SECURITY_GUIDE.md").is_file());
    assert!(dir.path().join("AUDITING_GUIDE.md").is_file());
    assert!(dir.path().join("API_DOCUMENTATION.md").is_file());
    assert!(dir
        .path()
        .join("src/main/java/com/example/shop/security/JwtService.java")
        .is_file());

    let second = pipeline
        .run(&tree, &product(), &flags, GenerateOptions::default())
        .unwrap();
    assert_eq!(second.outcomes.len(), first.outcomes.len());
    assert_eq!(second.created(), 0);
    assert_eq!(second.merged(), 0);
    assert_eq!(second.skipped(), second.outcomes.len());
}

#[test]
fn test_hand_edits_survive_reruns() {
    let dir = project();
    let tree = SourceTree::open(dir.path()).unwrap();
    let pipeline = Pipeline::standard();
    let flags = FeatureFlags::default();

    pipeline
        .run(&tree, &product(), &flags, GenerateOptions::default())
        .unwrap();

    let service_path = dir
        .path()
        .join("src/main/java/com/example/shop/service/ProductService.java");
    fs::write(&service_path, "// hand edited\n").unwrap();

    pipeline
        .run(&tree, &product(), &flags, GenerateOptions::default())
        .unwrap();
    assert_eq!(fs::read_to_string(&service_path).unwrap(), "// hand edited\n");
}

#[test]
fn test_overwrite_option_regenerates_edited_files() {
    let dir = project();
    let tree = SourceTree::open(dir.path()).unwrap();
    let pipeline = Pipeline::standard();
    let flags = FeatureFlags::default();

    pipeline
        .run(&tree, &product(), &flags, GenerateOptions::default())
        .unwrap();

    let service_path = dir
        .path()
        .join("src/main/java/com/example/shop/service/ProductService.java");
    fs::write(&service_path, "// hand edited\n").unwrap();

    let report = pipeline
        .run(&tree, &product(), &flags, GenerateOptions { overwrite: true })
        .unwrap();
    assert_eq!(report.created(), report.outcomes.len());
    assert!(fs::read_to_string(&service_path)
        .unwrap()
        .contains("public class ProductService {"));
}

#[test]
fn test_properties_merge_is_idempotent_and_preserves_content() {
    let dir = project();
    fs::create_dir_all(dir.path().join("src/main/resources")).unwrap();
    fs::write(
        dir.path().join("src/main/resources/application.properties"),
        "server.port=9090\n",
    )
    .unwrap();

    let tree = SourceTree::open(dir.path()).unwrap();
    let pipeline = Pipeline::standard();
    let flags = FeatureFlags {
        docs: true,
        ..FeatureFlags::default()
    };

    let first = pipeline
        .run(&tree, &product(), &flags, GenerateOptions::default())
        .unwrap();
    assert_eq!(first.merged(), 1);

    let merged = read(dir.path(), "src/main/resources/application.properties");
    assert!(merged.starts_with("server.port=9090\n"));
    assert!(merged.contains("springdoc.swagger-ui.path=/swagger-ui.html"));

    let second = pipeline
        .run(&tree, &product(), &flags, GenerateOptions::default())
        .unwrap();
    assert_eq!(second.merged(), 0);

    let after = read(dir.path(), "src/main/resources/application.properties");
    assert_eq!(merged, after);
}

#[test]
fn test_uuid_id_type_flows_through_core_bundle() {
    let dir = project();
    let tree = SourceTree::open(dir.path()).unwrap();
    let descriptor = TypeDescriptor::new(
        "Order",
        "com.example.shop.entity",
        "UUID",
        vec![
            FieldDescriptor::new("id", "UUID").unwrap(),
            FieldDescriptor::new("total", "BigDecimal").unwrap(),
        ],
    )
    .unwrap();

    Pipeline::standard()
        .run(
            &tree,
            &descriptor,
            &FeatureFlags::default(),
            GenerateOptions::default(),
        )
        .unwrap();

    let repo = read(
        dir.path(),
        "src/main/java/com/example/shop/repository/OrderRepository.java",
    );
    assert!(repo.contains("JpaRepository<Order, UUID>"));

    let service = read(
        dir.path(),
        "src/main/java/com/example/shop/service/OrderService.java",
    );
    assert!(service.contains("public Order findById(UUID id) {"));

    let controller = read(
        dir.path(),
        "src/main/java/com/example/shop/controller/OrderController.java",
    );
    assert!(controller.contains("@PathVariable UUID id"));
    assert!(controller.contains("@RequestMapping(\"/api/order\")"));
}

#[test]
fn test_missing_source_root_aborts_before_writing() {
    let dir = TempDir::new().unwrap();
    assert!(SourceTree::open(dir.path()).is_err());
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}
