//! Auditing bundle: the mapped superclass carrying audit columns, the
//! auditing configuration, and the setup guide.

use sprout_meta::{FeatureFlags, TypeDescriptor};

use crate::artifact::Artifact;
use crate::java::JavaFile;
use crate::naming::{self, CONFIG_SEGMENT, ENTITY_SEGMENT};

pub fn generate(descriptor: &TypeDescriptor, flags: &FeatureFlags) -> Vec<Artifact> {
    let audit_pkg = naming::sub_package(descriptor, ENTITY_SEGMENT);
    let config_pkg = naming::sub_package(descriptor, CONFIG_SEGMENT);
    vec![
        base_audit_entity(&audit_pkg),
        auditing_config(&config_pkg, flags.security),
        guide(descriptor, &audit_pkg),
    ]
}

fn base_audit_entity(pkg: &str) -> Artifact {
    let file = JavaFile::new(pkg)
        .imports([
            "jakarta.persistence.Column",
            "jakarta.persistence.EntityListeners",
            "jakarta.persistence.MappedSuperclass",
            "java.time.LocalDateTime",
            "org.springframework.data.annotation.CreatedBy",
            "org.springframework.data.annotation.CreatedDate",
            "org.springframework.data.annotation.LastModifiedBy",
            "org.springframework.data.annotation.LastModifiedDate",
            "org.springframework.data.jpa.domain.support.AuditingEntityListener",
        ])
        .body(|b| {
            b.javadoc([
                "Base class for entities that track who changed what and when.",
            ])
            .annotation("@MappedSuperclass")
            .annotation("@EntityListeners(AuditingEntityListener.class)")
            .block("public abstract class BaseAuditEntity {", |b| {
                b.blank()
                    .annotation("@CreatedDate")
                    .annotation("@Column(name = \"created_at\", nullable = false, updatable = false)")
                    .line("private LocalDateTime createdAt;")
                    .blank()
                    .annotation("@LastModifiedDate")
                    .annotation("@Column(name = \"updated_at\", nullable = false)")
                    .line("private LocalDateTime updatedAt;")
                    .blank()
                    .annotation("@CreatedBy")
                    .annotation("@Column(name = \"created_by\", updatable = false, length = 100)")
                    .line("private String createdBy;")
                    .blank()
                    .annotation("@LastModifiedBy")
                    .annotation("@Column(name = \"updated_by\", length = 100)")
                    .line("private String updatedBy;")
                    .blank()
                    .block("public LocalDateTime getCreatedAt() {", |b| {
                        b.line("return createdAt;")
                    })
                    .blank()
                    .block("public LocalDateTime getUpdatedAt() {", |b| {
                        b.line("return updatedAt;")
                    })
                    .blank()
                    .block("public String getCreatedBy() {", |b| b.line("return createdBy;"))
                    .blank()
                    .block("public String getUpdatedBy() {", |b| b.line("return updatedBy;"))
            })
        });
    Artifact::java(pkg, "BaseAuditEntity.java", file.render())
}

/// With security enabled the auditor is the authenticated principal;
/// otherwise a fixed `"system"` auditor is recorded.
fn auditing_config(pkg: &str, security: bool) -> Artifact {
    let mut file = JavaFile::new(pkg).imports([
        "java.util.Optional",
        "org.springframework.context.annotation.Bean",
        "org.springframework.context.annotation.Configuration",
        "org.springframework.data.domain.AuditorAware",
        "org.springframework.data.jpa.repository.config.EnableJpaAuditing",
    ]);
    if security {
        file = file.imports([
            "org.springframework.security.core.Authentication",
            "org.springframework.security.core.context.SecurityContextHolder",
        ]);
    }

    let file = file.body(|b| {
        b.javadoc(["Enables JPA auditing and supplies the current auditor."])
            .annotation("@Configuration")
            .annotation("@EnableJpaAuditing(auditorAwareRef = \"auditorProvider\")")
            .block("public class JpaAuditingConfig {", |b| {
                b.blank().annotation("@Bean").block(
                    "public AuditorAware<String> auditorProvider() {",
                    |b| {
                        if security {
                            b.block_with_close("return () -> {", "};", |b| {
                                b.line(
                                    "Authentication authentication = SecurityContextHolder.getContext().getAuthentication();",
                                )
                                .block(
                                    "if (authentication == null || !authentication.isAuthenticated()) {",
                                    |b| b.line("return Optional.of(\"system\");"),
                                )
                                .line("return Optional.of(authentication.getName());")
                            })
                        } else {
                            b.line("return () -> Optional.of(\"system\");")
                        }
                    },
                )
            })
    });
    Artifact::java(pkg, "JpaAuditingConfig.java", file.render())
}

fn guide(descriptor: &TypeDescriptor, audit_pkg: &str) -> Artifact {
    let entity = descriptor.name();
    let content = format!(
        "# Auditing Setup\n\n\
         Generated classes:\n\n\
         - `{audit_pkg}.BaseAuditEntity` - mapped superclass with `created_at`, `updated_at`, `created_by`, `updated_by` columns\n\
         - `JpaAuditingConfig` - enables JPA auditing and provides the auditor\n\n\
         ## Usage\n\n\
         Extend the base class from your entity:\n\n\
         ```java\n\
         @Entity\n\
         public class {entity} extends BaseAuditEntity {{\n\
             // ...\n\
         }}\n\
         ```\n\n\
         The audit columns are populated automatically on save. Without an\n\
         authenticated user the auditor is recorded as `system`.\n"
    );
    Artifact::project_doc("AUDITING_GUIDE.md", content)
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

    fn auditing() -> FeatureFlags {
        FeatureFlags {
            auditing: true,
            ..FeatureFlags::default()
        }
    }

    #[test]
    fn test_bundle_contents() {
        let artifacts = generate(&product(), &auditing());
        let names: Vec<&str> = artifacts.iter().map(|a| a.file_name.as_str()).collect();
        assert_eq!(
            names,
            ["BaseAuditEntity.java", "JpaAuditingConfig.java", "AUDITING_GUIDE.md"]
        );
        assert_eq!(artifacts[2].relative_path(), "AUDITING_GUIDE.md");
    }

    #[test]
    fn test_auditor_defaults_to_system_without_security() {
        let config = &generate(&product(), &auditing())[1].content;
        assert!(config.contains("return () -> Optional.of(\"system\");"));
        assert!(!config.contains("SecurityContextHolder"));
    }

    #[test]
    fn test_auditor_uses_principal_with_security() {
        let flags = FeatureFlags {
            auditing: true,
            security: true,
            ..FeatureFlags::default()
        };
        let config = &generate(&product(), &flags)[1].content;
        assert!(config.contains("SecurityContextHolder.getContext().getAuthentication()"));
        assert!(config.contains("return Optional.of(authentication.getName());"));
    }
}
