//! Pagination bundle: the generic page wrapper and the sort-direction
//! enumeration.

use sprout_meta::{FeatureFlags, TypeDescriptor};

use crate::artifact::Artifact;
use crate::java::JavaFile;
use crate::naming::{self, DTO_SEGMENT};

pub fn generate(descriptor: &TypeDescriptor, _flags: &FeatureFlags) -> Vec<Artifact> {
    let pkg = naming::sub_package(descriptor, DTO_SEGMENT);
    vec![page_response(&pkg), sort_direction(&pkg)]
}

fn page_response(pkg: &str) -> Artifact {
    let file = JavaFile::new(pkg)
        .imports(["java.util.List", "org.springframework.data.domain.Page"])
        .body(|b| {
            b.javadoc([
                "Generic paginated response wrapper.",
                "",
                "@param <T> type of the page content",
            ])
            .block("public class PageResponse<T> {", |b| {
                b.blank()
                    .line("private final List<T> content;")
                    .line("private final int pageNumber;")
                    .line("private final int pageSize;")
                    .line("private final long totalElements;")
                    .line("private final int totalPages;")
                    .blank()
                    .block(
                        "public PageResponse(List<T> content, int pageNumber, int pageSize, long totalElements, int totalPages) {",
                        |b| {
                            b.line("this.content = content;")
                                .line("this.pageNumber = pageNumber;")
                                .line("this.pageSize = pageSize;")
                                .line("this.totalElements = totalElements;")
                                .line("this.totalPages = totalPages;")
                        },
                    )
                    .blank()
                    .block("public static <T> PageResponse<T> of(Page<T> page) {", |b| {
                        b.line("return new PageResponse<>(")
                            .indent()
                            .indent()
                            .line("page.getContent(),")
                            .line("page.getNumber(),")
                            .line("page.getSize(),")
                            .line("page.getTotalElements(),")
                            .line("page.getTotalPages());")
                            .dedent()
                            .dedent()
                    })
                    .blank()
                    .block("public List<T> getContent() {", |b| b.line("return content;"))
                    .blank()
                    .block("public int getPageNumber() {", |b| b.line("return pageNumber;"))
                    .blank()
                    .block("public int getPageSize() {", |b| b.line("return pageSize;"))
                    .blank()
                    .block("public long getTotalElements() {", |b| {
                        b.line("return totalElements;")
                    })
                    .blank()
                    .block("public int getTotalPages() {", |b| b.line("return totalPages;"))
                    .blank()
                    .block("public boolean isFirst() {", |b| {
                        b.line("return pageNumber == 0;")
                    })
                    .blank()
                    .block("public boolean isLast() {", |b| {
                        b.line("return pageNumber >= totalPages - 1;")
                    })
                    .blank()
                    .block("public boolean hasNext() {", |b| {
                        b.line("return pageNumber < totalPages - 1;")
                    })
                    .blank()
                    .block("public boolean hasPrevious() {", |b| {
                        b.line("return pageNumber > 0;")
                    })
            })
        });
    Artifact::java(pkg, "PageResponse.java", file.render())
}

fn sort_direction(pkg: &str) -> Artifact {
    let file = JavaFile::new(pkg).body(|b| {
        b.javadoc(["Sort direction accepted by paginated listings."]).block(
            "public enum SortDirection {",
            |b| b.line("ASC,").line("DESC"),
        )
    });
    Artifact::java(pkg, "SortDirection.java", file.render())
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
            vec![FieldDescriptor::new("id", "Long").unwrap()],
        )
        .unwrap()
    }

    #[test]
    fn test_bundle_emits_wrapper_and_enum() {
        let artifacts = generate(&product(), &FeatureFlags::default());
        let names: Vec<&str> = artifacts.iter().map(|a| a.file_name.as_str()).collect();
        assert_eq!(names, ["PageResponse.java", "SortDirection.java"]);
    }

    #[test]
    fn test_page_response_is_generic_with_factory() {
        let content = &generate(&product(), &FeatureFlags::default())[0].content;
        assert!(content.contains("public class PageResponse<T> {"));
        assert!(content.contains("public static <T> PageResponse<T> of(Page<T> page) {"));
        assert!(content.contains("return pageNumber >= totalPages - 1;"));
    }
}
