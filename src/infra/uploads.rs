//! Upload storage - Writes admin-uploaded assets under the frontend asset tree.
//!
//! Layout: `{root}/{category}/{file_name}`, served by the frontend as
//! `/src/assets/{category}/{file_name}`.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use tokio::fs;

use crate::config::UPLOAD_URL_PREFIX;
use crate::errors::{AppError, AppResult};

/// Asset folders an upload may target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadCategory {
    Leaders,
    Partners,
    Services,
    AboutUs,
    Resources,
}

impl UploadCategory {
    pub const ALL: [UploadCategory; 5] = [
        UploadCategory::Leaders,
        UploadCategory::Partners,
        UploadCategory::Services,
        UploadCategory::AboutUs,
        UploadCategory::Resources,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UploadCategory::Leaders => "leaders",
            UploadCategory::Partners => "partners",
            UploadCategory::Services => "services",
            UploadCategory::AboutUs => "aboutus",
            UploadCategory::Resources => "resources",
        }
    }
}

impl fmt::Display for UploadCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UploadCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| AppError::bad_request(format!("Unknown upload category '{}'", s)))
    }
}

/// Reduce a client-supplied file name to its final path component.
///
/// Both separators are honoured so Windows-style names cannot escape the
/// category directory either.
pub fn sanitize_file_name(raw: &str) -> AppResult<String> {
    let name = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() || name == "." || name == ".." {
        return Err(AppError::bad_request("Missing file name"));
    }

    Ok(name.to_string())
}

/// Filesystem store for uploaded assets.
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    /// Create new upload store rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Write `content` and return the public URL of the stored file.
    ///
    /// An existing file with the same name is replaced.
    pub async fn save(
        &self,
        category: UploadCategory,
        file_name: &str,
        content: &[u8],
    ) -> AppResult<String> {
        let name = sanitize_file_name(file_name)?;
        let dir = self.root.join(category.as_str());

        fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::internal(format!("Failed to create {}: {}", dir.display(), e)))?;

        let path = dir.join(&name);
        fs::write(&path, content)
            .await
            .map_err(|e| AppError::internal(format!("Failed to write {}: {}", path.display(), e)))?;

        tracing::info!(category = %category, file = %name, bytes = content.len(), "Upload stored");
        Ok(format!("{}/{}/{}", UPLOAD_URL_PREFIX, category, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_category_parsing() {
        assert_eq!("leaders".parse::<UploadCategory>().unwrap(), UploadCategory::Leaders);
        assert_eq!("aboutus".parse::<UploadCategory>().unwrap(), UploadCategory::AboutUs);

        for bad in ["", "Leaders", "about-us", "../etc", "avatars"] {
            assert!(matches!(bad.parse::<UploadCategory>(), Err(AppError::BadRequest(_))));
        }
    }

    #[test]
    fn test_category_round_trips_through_display() {
        for category in UploadCategory::ALL {
            assert_eq!(category.to_string().parse::<UploadCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_sanitize_keeps_final_component() {
        assert_eq!(sanitize_file_name("logo.png").unwrap(), "logo.png");
        assert_eq!(sanitize_file_name("../../etc/passwd").unwrap(), "passwd");
        assert_eq!(sanitize_file_name("C:\\Users\\me\\photo.jpg").unwrap(), "photo.jpg");
        assert_eq!(sanitize_file_name("/abs/path/team.webp").unwrap(), "team.webp");
    }

    #[test]
    fn test_sanitize_rejects_empty_names() {
        for bad in ["", "   ", "dir/", "..", "a/.."] {
            assert!(sanitize_file_name(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[tokio::test]
    async fn test_save_writes_file_and_returns_url() {
        let temp_dir = TempDir::new().unwrap();
        let store = UploadStore::new(temp_dir.path());

        let url = store
            .save(UploadCategory::Partners, "nested/acme.svg", b"<svg/>")
            .await
            .unwrap();

        assert_eq!(url, "/src/assets/partners/acme.svg");
        let written = std::fs::read(temp_dir.path().join("partners").join("acme.svg")).unwrap();
        assert_eq!(written, b"<svg/>");
    }

    #[tokio::test]
    async fn test_save_replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = UploadStore::new(temp_dir.path());

        store.save(UploadCategory::Leaders, "jane.png", b"old").await.unwrap();
        store.save(UploadCategory::Leaders, "jane.png", b"new").await.unwrap();

        let written = std::fs::read(temp_dir.path().join("leaders").join("jane.png")).unwrap();
        assert_eq!(written, b"new");
    }
}
