//! Where everything lands on disk.
//!
//! ```text
//! <root>/
//! ├── package.json
//! ├── api/
//! └── <app_name>-client/   (written by the generator)
//! ```

use std::path::{Component, Path, PathBuf};

use crate::domain::{
    error::DomainError,
    manifest::MANIFEST_FILE_NAME,
    toolchain::CLIENT_SUFFIX,
};

/// Name of the (empty) API directory under the root.
pub const API_DIR_NAME: &str = "api";

/// Resolved locations for one bootstrap run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    app_name: String,
}

impl ProjectLayout {
    /// Resolve the user's project-directory argument against `cwd`.
    ///
    /// Relative input is joined onto `cwd`; `.` and `..` are folded
    /// lexically (symlinks are not followed, nothing has to exist yet).
    /// The app name is the final segment of the result.
    pub fn resolve(cwd: &Path, input: &str) -> Result<Self, DomainError> {
        if input.trim().is_empty() {
            return Err(DomainError::InvalidProjectDirectory {
                input: input.into(),
                reason: "path cannot be empty".into(),
            });
        }

        let root = normalize(&cwd.join(input));
        let app_name = match root.file_name() {
            None => {
                return Err(DomainError::InvalidProjectDirectory {
                    input: input.into(),
                    reason: format!("'{}' has no final path segment", root.display()),
                });
            }
            Some(name) => name
                .to_str()
                .ok_or_else(|| DomainError::InvalidProjectDirectory {
                    input: input.into(),
                    reason: "final path segment is not valid UTF-8".into(),
                })?
                .to_string(),
        };

        Ok(Self { root, app_name })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE_NAME)
    }

    /// `<app_name>-client`, the argument handed to the generator.
    pub fn client_dir_name(&self) -> String {
        format!("{}{}", self.app_name, CLIENT_SUFFIX)
    }

    pub fn client_dir(&self) -> PathBuf {
        self.root.join(self.client_dir_name())
    }

    pub fn api_dir(&self) -> PathBuf {
        self.root.join(API_DIR_NAME)
    }
}

/// Lexically fold `.` and `..` out of an absolute path.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                out.push(component);
            }
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                out.pop();
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cwd() -> PathBuf {
        std::env::temp_dir().join("work")
    }

    #[test]
    fn plain_name_lands_in_cwd() {
        let layout = ProjectLayout::resolve(&cwd(), "myapp").unwrap();
        assert_eq!(layout.root(), cwd().join("myapp"));
        assert_eq!(layout.app_name(), "myapp");
    }

    #[test]
    fn nested_relative_path_uses_basename() {
        let layout = ProjectLayout::resolve(&cwd(), "./nested/myapp").unwrap();
        assert_eq!(layout.root(), cwd().join("nested").join("myapp"));
        assert_eq!(layout.app_name(), "myapp");
    }

    #[test]
    fn parent_segments_are_folded() {
        let layout = ProjectLayout::resolve(&cwd(), "a/../b").unwrap();
        assert_eq!(layout.root(), cwd().join("b"));
        assert_eq!(layout.app_name(), "b");
    }

    #[test]
    fn dot_resolves_to_cwd_name() {
        let layout = ProjectLayout::resolve(&cwd(), ".").unwrap();
        assert_eq!(layout.app_name(), "work");
    }

    #[test]
    fn trailing_separator_is_ignored() {
        let layout = ProjectLayout::resolve(&cwd(), "myapp/").unwrap();
        assert_eq!(layout.app_name(), "myapp");
    }

    #[test]
    fn derived_paths() {
        let layout = ProjectLayout::resolve(&cwd(), "myapp").unwrap();
        let root = cwd().join("myapp");
        assert_eq!(layout.manifest_path(), root.join("package.json"));
        assert_eq!(layout.client_dir_name(), "myapp-client");
        assert_eq!(layout.client_dir(), root.join("myapp-client"));
        assert_eq!(layout.api_dir(), root.join("api"));
    }

    #[test]
    fn empty_input_rejected() {
        assert!(matches!(
            ProjectLayout::resolve(&cwd(), "  "),
            Err(DomainError::InvalidProjectDirectory { .. })
        ));
    }

    #[test]
    #[cfg(unix)]
    fn absolute_input_ignores_cwd() {
        let layout = ProjectLayout::resolve(Path::new("/work"), "/srv/apps/shop").unwrap();
        assert_eq!(layout.root(), Path::new("/srv/apps/shop"));
        assert_eq!(layout.app_name(), "shop");
    }

    #[test]
    #[cfg(unix)]
    fn filesystem_root_rejected() {
        assert!(matches!(
            ProjectLayout::resolve(Path::new("/work"), "/"),
            Err(DomainError::InvalidProjectDirectory { .. })
        ));
        // climbing above the root also lands on it
        assert!(ProjectLayout::resolve(Path::new("/work"), "../..").is_err());
    }
}
