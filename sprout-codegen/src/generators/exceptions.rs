//! Error-handling bundle: exception types, the error payload, and the
//! global handler.
//!
//! These are entity-independent support types shared by every generated
//! service and controller, which is why this bundle runs first.

use sprout_meta::{FeatureFlags, TypeDescriptor};

use crate::artifact::Artifact;
use crate::java::JavaFile;
use crate::naming::{self, DTO_SEGMENT, EXCEPTION_SEGMENT};

pub fn generate(descriptor: &TypeDescriptor, _flags: &FeatureFlags) -> Vec<Artifact> {
    let pkg = naming::sub_package(descriptor, EXCEPTION_SEGMENT);
    let dto_pkg = naming::sub_package(descriptor, DTO_SEGMENT);
    vec![
        resource_not_found(&pkg),
        bad_request(&pkg),
        duplicate_resource(&pkg),
        error_response(&dto_pkg),
        global_handler(&pkg, &dto_pkg),
    ]
}

fn resource_not_found(pkg: &str) -> Artifact {
    let file = JavaFile::new(pkg).body(|b| {
        b.javadoc(["Raised when a requested resource does not exist."])
            .block(
                "public class ResourceNotFoundException extends RuntimeException {",
                |b| {
                    b.blank()
                        .line("private final String resourceName;")
                        .line("private final String fieldName;")
                        .line("private final Object fieldValue;")
                        .blank()
                        .block(
                            "public ResourceNotFoundException(String resourceName, String fieldName, Object fieldValue) {",
                            |b| {
                                b.line(
                                    "super(String.format(\"%s not found with %s: '%s'\", resourceName, fieldName, fieldValue));",
                                )
                                .line("this.resourceName = resourceName;")
                                .line("this.fieldName = fieldName;")
                                .line("this.fieldValue = fieldValue;")
                            },
                        )
                        .blank()
                        .block("public String getResourceName() {", |b| {
                            b.line("return resourceName;")
                        })
                        .blank()
                        .block("public String getFieldName() {", |b| {
                            b.line("return fieldName;")
                        })
                        .blank()
                        .block("public Object getFieldValue() {", |b| {
                            b.line("return fieldValue;")
                        })
                },
            )
    });
    Artifact::java(pkg, "ResourceNotFoundException.java", file.render())
}

fn bad_request(pkg: &str) -> Artifact {
    let file = JavaFile::new(pkg).body(|b| {
        b.javadoc(["Raised when a request carries invalid data."]).block(
            "public class BadRequestException extends RuntimeException {",
            |b| {
                b.blank()
                    .block("public BadRequestException(String message) {", |b| {
                        b.line("super(message);")
                    })
                    .blank()
                    .block(
                        "public BadRequestException(String message, Throwable cause) {",
                        |b| b.line("super(message, cause);"),
                    )
            },
        )
    });
    Artifact::java(pkg, "BadRequestException.java", file.render())
}

fn duplicate_resource(pkg: &str) -> Artifact {
    let file = JavaFile::new(pkg).body(|b| {
        b.javadoc(["Raised when creating a resource that already exists."])
            .block(
                "public class DuplicateResourceException extends RuntimeException {",
                |b| {
                    b.blank()
                        .block(
                            "public DuplicateResourceException(String resourceName, String fieldName, Object fieldValue) {",
                            |b| {
                                b.line(
                                    "super(String.format(\"%s already exists with %s: '%s'\", resourceName, fieldName, fieldValue));",
                                )
                            },
                        )
                },
            )
    });
    Artifact::java(pkg, "DuplicateResourceException.java", file.render())
}

fn error_response(dto_pkg: &str) -> Artifact {
    let file = JavaFile::new(dto_pkg)
        .imports(["java.time.LocalDateTime", "java.util.List"])
        .body(|b| {
            b.javadoc(["Uniform error payload returned by the API."]).block(
                "public class ErrorResponse {",
                |b| {
                    b.blank()
                        .line("private final int status;")
                        .line("private final String error;")
                        .line("private final String message;")
                        .line("private final String path;")
                        .line("private final LocalDateTime timestamp;")
                        .line("private List<String> details;")
                        .blank()
                        .block(
                            "public ErrorResponse(int status, String error, String message, String path) {",
                            |b| {
                                b.line("this.status = status;")
                                    .line("this.error = error;")
                                    .line("this.message = message;")
                                    .line("this.path = path;")
                                    .line("this.timestamp = LocalDateTime.now();")
                            },
                        )
                        .blank()
                        .block("public int getStatus() {", |b| b.line("return status;"))
                        .blank()
                        .block("public String getError() {", |b| b.line("return error;"))
                        .blank()
                        .block("public String getMessage() {", |b| b.line("return message;"))
                        .blank()
                        .block("public String getPath() {", |b| b.line("return path;"))
                        .blank()
                        .block("public LocalDateTime getTimestamp() {", |b| {
                            b.line("return timestamp;")
                        })
                        .blank()
                        .block("public List<String> getDetails() {", |b| {
                            b.line("return details;")
                        })
                        .blank()
                        .block("public void setDetails(List<String> details) {", |b| {
                            b.line("this.details = details;")
                        })
                },
            )
        });
    Artifact::java(dto_pkg, "ErrorResponse.java", file.render())
}

fn global_handler(pkg: &str, dto_pkg: &str) -> Artifact {
    let file = JavaFile::new(pkg)
        .import(&format!("{dto_pkg}.ErrorResponse"))
        .imports([
            "java.util.stream.Collectors",
            "org.slf4j.Logger",
            "org.slf4j.LoggerFactory",
            "org.springframework.http.HttpStatus",
            "org.springframework.http.ResponseEntity",
            "org.springframework.web.bind.MethodArgumentNotValidException",
            "org.springframework.web.bind.annotation.ExceptionHandler",
            "org.springframework.web.bind.annotation.RestControllerAdvice",
            "org.springframework.web.context.request.WebRequest",
            "org.springframework.web.method.annotation.MethodArgumentTypeMismatchException",
        ])
        .body(|b| {
            b.javadoc(["Maps exceptions to uniform error responses."])
                .annotation("@RestControllerAdvice")
                .block("public class GlobalExceptionHandler {", |b| {
                    b.blank()
                        .line(
                            "private static final Logger log = LoggerFactory.getLogger(GlobalExceptionHandler.class);",
                        )
                        .blank()
                        .annotation("@ExceptionHandler(ResourceNotFoundException.class)")
                        .block(
                            "public ResponseEntity<ErrorResponse> handleNotFound(ResourceNotFoundException ex, WebRequest request) {",
                            |b| {
                                b.line("log.error(\"Resource not found: {}\", ex.getMessage());")
                                    .line(
                                        "return respond(HttpStatus.NOT_FOUND, \"Not Found\", ex.getMessage(), request);",
                                    )
                            },
                        )
                        .blank()
                        .annotation("@ExceptionHandler(BadRequestException.class)")
                        .block(
                            "public ResponseEntity<ErrorResponse> handleBadRequest(BadRequestException ex, WebRequest request) {",
                            |b| {
                                b.line("log.error(\"Bad request: {}\", ex.getMessage());")
                                    .line(
                                        "return respond(HttpStatus.BAD_REQUEST, \"Bad Request\", ex.getMessage(), request);",
                                    )
                            },
                        )
                        .blank()
                        .annotation("@ExceptionHandler(DuplicateResourceException.class)")
                        .block(
                            "public ResponseEntity<ErrorResponse> handleDuplicate(DuplicateResourceException ex, WebRequest request) {",
                            |b| {
                                b.line("log.error(\"Duplicate resource: {}\", ex.getMessage());")
                                    .line(
                                        "return respond(HttpStatus.CONFLICT, \"Conflict\", ex.getMessage(), request);",
                                    )
                            },
                        )
                        .blank()
                        .annotation("@ExceptionHandler(MethodArgumentNotValidException.class)")
                        .block(
                            "public ResponseEntity<ErrorResponse> handleValidation(MethodArgumentNotValidException ex, WebRequest request) {",
                            |b| {
                                b.line("log.error(\"Validation failed: {}\", ex.getMessage());")
                                    .line(
                                        "ErrorResponse body = error(HttpStatus.BAD_REQUEST, \"Validation Failed\", \"Invalid input data\", request);",
                                    )
                                    .line("body.setDetails(ex.getBindingResult()")
                                    .indent()
                                    .indent()
                                    .line(".getFieldErrors()")
                                    .line(".stream()")
                                    .line(".map(e -> e.getField() + \": \" + e.getDefaultMessage())")
                                    .line(".collect(Collectors.toList()));")
                                    .dedent()
                                    .dedent()
                                    .line("return new ResponseEntity<>(body, HttpStatus.BAD_REQUEST);")
                            },
                        )
                        .blank()
                        .annotation("@ExceptionHandler(MethodArgumentTypeMismatchException.class)")
                        .block(
                            "public ResponseEntity<ErrorResponse> handleTypeMismatch(MethodArgumentTypeMismatchException ex, WebRequest request) {",
                            |b| {
                                b.line("String expected = ex.getRequiredType() != null ? ex.getRequiredType().getSimpleName() : \"unknown\";")
                                    .line(
                                        "String message = String.format(\"Invalid value '%s' for parameter '%s'. Expected type: %s\", ex.getValue(), ex.getName(), expected);",
                                    )
                                    .line("log.error(\"Type mismatch: {}\", message);")
                                    .line(
                                        "return respond(HttpStatus.BAD_REQUEST, \"Bad Request\", message, request);",
                                    )
                            },
                        )
                        .blank()
                        .annotation("@ExceptionHandler(Exception.class)")
                        .block(
                            "public ResponseEntity<ErrorResponse> handleUnexpected(Exception ex, WebRequest request) {",
                            |b| {
                                b.line("log.error(\"Unexpected error occurred: \", ex);")
                                    .line(
                                        "return respond(HttpStatus.INTERNAL_SERVER_ERROR, \"Internal Server Error\", \"An unexpected error occurred. Please try again later.\", request);",
                                    )
                            },
                        )
                        .blank()
                        .block(
                            "private ResponseEntity<ErrorResponse> respond(HttpStatus status, String error, String message, WebRequest request) {",
                            |b| {
                                b.line("return new ResponseEntity<>(error(status, error, message, request), status);")
                            },
                        )
                        .blank()
                        .block(
                            "private ErrorResponse error(HttpStatus status, String error, String message, WebRequest request) {",
                            |b| {
                                b.line("String path = request.getDescription(false).replace(\"uri=\", \"\");")
                                    .line("return new ErrorResponse(status.value(), error, message, path);")
                            },
                        )
                })
        });
    Artifact::java(pkg, "GlobalExceptionHandler.java", file.render())
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
    fn test_bundle_emits_five_artifacts() {
        let artifacts = generate(&product(), &FeatureFlags::default());
        let names: Vec<&str> = artifacts.iter().map(|a| a.file_name.as_str()).collect();
        assert_eq!(
            names,
            [
                "ResourceNotFoundException.java",
                "BadRequestException.java",
                "DuplicateResourceException.java",
                "ErrorResponse.java",
                "GlobalExceptionHandler.java",
            ]
        );
    }

    #[test]
    fn test_handler_covers_status_mapping() {
        let artifacts = generate(&product(), &FeatureFlags::default());
        let handler = &artifacts[4].content;
        assert!(handler.contains("@RestControllerAdvice"));
        assert!(handler.contains("HttpStatus.NOT_FOUND"));
        assert!(handler.contains("HttpStatus.CONFLICT"));
        assert!(handler.contains("HttpStatus.INTERNAL_SERVER_ERROR"));
        assert!(handler.contains("import com.example.shop.dto.ErrorResponse;"));
    }

    #[test]
    fn test_error_response_lands_in_dto_package() {
        let artifacts = generate(&product(), &FeatureFlags::default());
        assert_eq!(
            artifacts[3].relative_path(),
            "src/main/java/com/example/shop/dto/ErrorResponse.java"
        );
    }
}
