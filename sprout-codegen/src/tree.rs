//! Filesystem view of the target project.
//!
//! All path math lives here; generators produce [`Artifact`] values and the
//! tree turns them into files. Package directories are created lazily by
//! [`SourceTree::ensure`], while [`SourceTree::locate`] and
//! [`SourceTree::exists`] never touch the disk beyond reading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::artifact::{Artifact, Location, WriteMode, WriteOutcome};
use crate::error::PipelineError;

const SOURCE_ROOT: &str = "src/main/java";
const RESOURCES_ROOT: &str = "src/main/resources";

/// Rooted view of a Maven/Gradle-style project.
#[derive(Debug, Clone)]
pub struct SourceTree {
    project_root: PathBuf,
    source_root: PathBuf,
}

impl SourceTree {
    /// Open the tree rooted at `project_root`.
    ///
    /// Fails with [`PipelineError::MissingRoot`] when `src/main/java` does
    /// not exist under it; nothing is created implicitly at this level.
    pub fn open(project_root: impl Into<PathBuf>) -> Result<Self, PipelineError> {
        let project_root = project_root.into();
        let source_root = project_root.join(SOURCE_ROOT);
        if !source_root.is_dir() {
            return Err(PipelineError::MissingRoot { path: project_root });
        }
        Ok(Self {
            project_root,
            source_root,
        })
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Path the directory for a dotted package would have. Pure path math,
    /// empty segments skipped.
    fn package_dir(&self, package: &str) -> PathBuf {
        let mut path = self.source_root.clone();
        for segment in package.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path
    }

    /// Directory for a dotted package, without creating anything.
    /// `None` when any segment of the chain is missing.
    pub fn locate(&self, package: &str) -> Option<PathBuf> {
        let path = self.package_dir(package);
        path.is_dir().then_some(path)
    }

    /// Directory for a dotted package, creating the chain of directories
    /// when missing. Repeated calls are no-ops.
    pub fn ensure(&self, package: &str) -> Result<PathBuf, PipelineError> {
        let path = self.package_dir(package);
        fs::create_dir_all(&path).map_err(|source| PipelineError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Whether `file_name` already exists inside the package directory.
    /// A missing directory simply means the file does not exist.
    pub fn exists(&self, package: &str, file_name: &str) -> bool {
        self.locate(package)
            .is_some_and(|dir| dir.join(file_name).is_file())
    }

    /// Absolute path an artifact would be written to.
    pub fn target_path(&self, artifact: &Artifact) -> PathBuf {
        match &artifact.location {
            Location::Package(pkg) => self.package_dir(pkg).join(&artifact.file_name),
            Location::ProjectRoot => self.project_root.join(&artifact.file_name),
            Location::Resources => self
                .project_root
                .join(RESOURCES_ROOT)
                .join(&artifact.file_name),
        }
    }

    /// Write one artifact, honoring its [`WriteMode`].
    ///
    /// Package directories go through [`SourceTree::ensure`] and the
    /// skip-if-exists check through [`SourceTree::exists`]. With `overwrite`
    /// set, `SkipIfExists` artifacts are rewritten unconditionally;
    /// marker-guarded merges still respect their marker.
    pub fn write(
        &self,
        artifact: &Artifact,
        overwrite: bool,
    ) -> Result<WriteOutcome, PipelineError> {
        let (path, present) = match &artifact.location {
            Location::Package(pkg) => {
                let present = self.exists(pkg, &artifact.file_name);
                (self.ensure(pkg)?.join(&artifact.file_name), present)
            }
            Location::ProjectRoot => {
                let path = self.project_root.join(&artifact.file_name);
                let present = path.is_file();
                (path, present)
            }
            Location::Resources => {
                let dir = self.project_root.join(RESOURCES_ROOT);
                fs::create_dir_all(&dir).map_err(|source| PipelineError::Write {
                    path: dir.clone(),
                    source,
                })?;
                let path = dir.join(&artifact.file_name);
                let present = path.is_file();
                (path, present)
            }
        };

        match &artifact.mode {
            WriteMode::SkipIfExists => {
                if present && !overwrite {
                    return Ok(WriteOutcome::Skipped);
                }
                self.write_file(&path, &artifact.content)?;
                Ok(WriteOutcome::Created)
            }
            WriteMode::AppendIfMarkerMissing { marker } => {
                if !present {
                    self.write_file(&path, &artifact.content)?;
                    return Ok(WriteOutcome::Created);
                }
                let existing = fs::read_to_string(&path).map_err(|source| {
                    PipelineError::Write {
                        path: path.clone(),
                        source,
                    }
                })?;
                if existing.contains(marker) {
                    return Ok(WriteOutcome::Skipped);
                }
                let mut merged = existing;
                if !merged.is_empty() && !merged.ends_with('\n') {
                    merged.push('\n');
                }
                merged.push('\n');
                merged.push_str(&artifact.content);
                self.write_file(&path, &merged)?;
                Ok(WriteOutcome::Merged)
            }
        }
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), PipelineError> {
        fs::write(path, content).map_err(|source| PipelineError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
