//! The generated-output unit and its write rules.

/// Where an artifact lands relative to the target project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A dotted Java package under the source root (`src/main/java`).
    Package(String),
    /// The project root itself (narrative guides).
    ProjectRoot,
    /// The resources directory (`src/main/resources`), created on demand.
    Resources,
}

/// How to handle an existing file at the artifact's path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteMode {
    /// Skip when the file already exists; regenerate only under the
    /// explicit overwrite option. The uniform policy for source artifacts.
    SkipIfExists,
    /// Append the content when the marker string is absent from the
    /// file's current contents; create the file when missing. Used for
    /// the runtime-configuration merge.
    AppendIfMarkerMissing { marker: String },
}

/// Per-artifact result of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File was written.
    Created,
    /// File already existed (or the merge marker was present); nothing done.
    Skipped,
    /// Content was appended to an existing file.
    Merged,
}

/// One generated output unit: a file name, its target location, its text,
/// and the rule for colliding with a previous run.
///
/// Artifacts are pure data; generators never touch the filesystem.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub location: Location,
    pub file_name: String,
    pub content: String,
    pub mode: WriteMode,
}

impl Artifact {
    /// A source artifact under a dotted package, skipped when present.
    pub fn java(package: impl Into<String>, file_name: impl Into<String>, content: String) -> Self {
        Self {
            location: Location::Package(package.into()),
            file_name: file_name.into(),
            content,
            mode: WriteMode::SkipIfExists,
        }
    }

    /// A project-root file (e.g. a setup guide), skipped when present.
    pub fn project_doc(file_name: impl Into<String>, content: String) -> Self {
        Self {
            location: Location::ProjectRoot,
            file_name: file_name.into(),
            content,
            mode: WriteMode::SkipIfExists,
        }
    }

    /// A marker-guarded append into a resources file.
    pub fn resource_merge(
        file_name: impl Into<String>,
        content: String,
        marker: impl Into<String>,
    ) -> Self {
        Self {
            location: Location::Resources,
            file_name: file_name.into(),
            content,
            mode: WriteMode::AppendIfMarkerMissing {
                marker: marker.into(),
            },
        }
    }

    /// Path relative to the project root, for previews and reports.
    pub fn relative_path(&self) -> String {
        match &self.location {
            Location::Package(pkg) => {
                format!("src/main/java/{}/{}", pkg.replace('.', "/"), self.file_name)
            }
            Location::ProjectRoot => self.file_name.clone(),
            Location::Resources => format!("src/main/resources/{}", self.file_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_for_package_artifact() {
        let artifact = Artifact::java("com.example.shop.dto", "ProductDto.java", String::new());
        assert_eq!(
            artifact.relative_path(),
            "src/main/java/com/example/shop/dto/ProductDto.java"
        );
    }

    #[test]
    fn test_relative_path_for_root_and_resources() {
        assert_eq!(
            Artifact::project_doc("SECURITY_GUIDE.md", String::new()).relative_path(),
            "SECURITY_GUIDE.md"
        );
        assert_eq!(
            Artifact::resource_merge("application.properties", String::new(), "m")
                .relative_path(),
            "src/main/resources/application.properties"
        );
    }
}
