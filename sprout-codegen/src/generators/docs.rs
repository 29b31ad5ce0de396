//! Documentation bundle: OpenAPI configuration, the runtime-properties
//! merge, and the usage guide.

use sprout_meta::{FeatureFlags, TypeDescriptor};

use crate::artifact::Artifact;
use crate::java::JavaFile;
use crate::naming::{self, CONFIG_SEGMENT};

/// Marker line guarding the `application.properties` merge. The merge is
/// appended only while this string is absent from the file.
pub const PROPERTIES_MARKER: &str = "Springdoc OpenAPI Configuration";

pub fn generate(descriptor: &TypeDescriptor, flags: &FeatureFlags) -> Vec<Artifact> {
    let config_pkg = naming::sub_package(descriptor, CONFIG_SEGMENT);
    vec![
        open_api_config(&config_pkg, flags.security),
        properties_merge(),
        guide(descriptor, flags.security),
    ]
}

/// With security enabled the document declares the bearer scheme so the
/// interactive UI can authorize requests.
fn open_api_config(pkg: &str, security: bool) -> Artifact {
    let mut file = JavaFile::new(pkg).imports([
        "io.swagger.v3.oas.models.OpenAPI",
        "io.swagger.v3.oas.models.info.Contact",
        "io.swagger.v3.oas.models.info.Info",
        "io.swagger.v3.oas.models.info.License",
        "io.swagger.v3.oas.models.servers.Server",
        "java.util.List",
        "org.springframework.beans.factory.annotation.Value",
        "org.springframework.context.annotation.Bean",
        "org.springframework.context.annotation.Configuration",
    ]);
    if security {
        file = file.imports([
            "io.swagger.v3.oas.models.Components",
            "io.swagger.v3.oas.models.security.SecurityRequirement",
            "io.swagger.v3.oas.models.security.SecurityScheme",
        ]);
    }

    let file = file.body(|b| {
        b.javadoc([
            "OpenAPI document configuration.",
            "",
            "The interactive UI is served at /swagger-ui.html.",
        ])
        .annotation("@Configuration")
        .block("public class OpenApiConfig {", |b| {
            b.blank()
                .annotation("@Value(\"${server.port:8080}\")")
                .line("private String serverPort;")
                .blank()
                .annotation("@Value(\"${spring.application.name:Spring Boot Application}\")")
                .line("private String applicationName;")
                .blank()
                .annotation("@Bean")
                .block("public OpenAPI customOpenAPI() {", |b| {
                    let b = b
                        .line("Server localServer = new Server();")
                        .line("localServer.setUrl(\"http://localhost:\" + serverPort);")
                        .line("localServer.setDescription(\"Local Development Server\");")
                        .blank()
                        .line("Contact contact = new Contact();")
                        .line("contact.setName(\"API Support Team\");")
                        .line("contact.setEmail(\"support@example.com\");")
                        .blank()
                        .line("License license = new License();")
                        .line("license.setName(\"MIT License\");")
                        .line("license.setUrl(\"https://opensource.org/licenses/MIT\");")
                        .blank()
                        .line("Info info = new Info()")
                        .indent()
                        .indent()
                        .line(".title(applicationName + \" API Documentation\")")
                        .line(".version(\"1.0.0\")")
                        .line(".description(\"RESTful API documentation for \" + applicationName)")
                        .line(".contact(contact)")
                        .line(".license(license);")
                        .dedent()
                        .dedent();
                    if security {
                        b.blank()
                            .line("SecurityScheme securityScheme = new SecurityScheme()")
                            .indent()
                            .indent()
                            .line(".type(SecurityScheme.Type.HTTP)")
                            .line(".scheme(\"bearer\")")
                            .line(".bearerFormat(\"JWT\")")
                            .line(".in(SecurityScheme.In.HEADER)")
                            .line(".name(\"Authorization\");")
                            .dedent()
                            .dedent()
                            .blank()
                            .line("return new OpenAPI()")
                            .indent()
                            .indent()
                            .line(".servers(List.of(localServer))")
                            .line(".info(info)")
                            .line(
                                ".components(new Components().addSecuritySchemes(\"bearerAuth\", securityScheme))",
                            )
                            .line(
                                ".addSecurityItem(new SecurityRequirement().addList(\"bearerAuth\"));",
                            )
                            .dedent()
                            .dedent()
                    } else {
                        b.blank()
                            .line("return new OpenAPI()")
                            .indent()
                            .indent()
                            .line(".servers(List.of(localServer))")
                            .line(".info(info);")
                            .dedent()
                            .dedent()
                    }
                })
        })
    });
    Artifact::java(pkg, "OpenApiConfig.java", file.render())
}

fn properties_merge() -> Artifact {
    let content = format!(
        "# ========================================\n\
         # {PROPERTIES_MARKER}\n\
         # ========================================\n\
         # Swagger UI: http://localhost:${{server.port}}/swagger-ui.html\n\
         # OpenAPI JSON: http://localhost:${{server.port}}/v3/api-docs\n\
         \n\
         springdoc.api-docs.path=/v3/api-docs\n\
         springdoc.swagger-ui.path=/swagger-ui.html\n\
         springdoc.swagger-ui.enabled=true\n\
         springdoc.swagger-ui.operations-sorter=method\n\
         springdoc.swagger-ui.tags-sorter=alpha\n\
         springdoc.swagger-ui.doc-expansion=none\n"
    );
    Artifact::resource_merge("application.properties", content, PROPERTIES_MARKER)
}

fn guide(descriptor: &TypeDescriptor, security: bool) -> Artifact {
    let api_path = naming::api_path(descriptor);
    let auth_note = if security {
        "\n## Authenticated requests\n\n\
         Click \"Authorize\" in the UI and paste a token obtained from\n\
         `POST /api/auth/login` to call protected endpoints.\n"
    } else {
        ""
    };
    let content = format!(
        "# API Documentation\n\n\
         Interactive documentation is generated with Springdoc OpenAPI.\n\n\
         - Swagger UI: `http://localhost:8080/swagger-ui.html`\n\
         - OpenAPI JSON: `http://localhost:8080/v3/api-docs`\n\n\
         Generated endpoints live under `{api_path}`.\n\n\
         ## Required dependency\n\n\
         ```xml\n\
         <dependency>\n\
             <groupId>org.springdoc</groupId>\n\
             <artifactId>springdoc-openapi-starter-webmvc-ui</artifactId>\n\
             <version>2.3.0</version>\n\
         </dependency>\n\
         ```\n{auth_note}"
    );
    Artifact::project_doc("API_DOCUMENTATION.md", content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::WriteMode;
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

    fn docs() -> FeatureFlags {
        FeatureFlags {
            docs: true,
            ..FeatureFlags::default()
        }
    }

    #[test]
    fn test_bundle_contents() {
        let artifacts = generate(&product(), &docs());
        let names: Vec<&str> = artifacts.iter().map(|a| a.file_name.as_str()).collect();
        assert_eq!(
            names,
            ["OpenApiConfig.java", "application.properties", "API_DOCUMENTATION.md"]
        );
    }

    #[test]
    fn test_properties_artifact_is_marker_guarded() {
        let artifacts = generate(&product(), &docs());
        let props = &artifacts[1];
        assert_eq!(
            props.mode,
            WriteMode::AppendIfMarkerMissing {
                marker: PROPERTIES_MARKER.to_string()
            }
        );
        assert!(props.content.contains("springdoc.api-docs.path=/v3/api-docs"));
        assert!(props.content.contains(PROPERTIES_MARKER));
    }

    #[test]
    fn test_security_scheme_only_with_security_flag() {
        let plain = &generate(&product(), &docs())[0].content;
        assert!(!plain.contains("SecurityScheme"));

        let flags = FeatureFlags {
            docs: true,
            security: true,
            ..FeatureFlags::default()
        };
        let secured = &generate(&product(), &flags)[0].content;
        assert!(secured.contains("bearerFormat(\"JWT\")"));
        assert!(secured.contains("addSecuritySchemes(\"bearerAuth\", securityScheme)"));
    }
}
