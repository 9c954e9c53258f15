use std::path::{Path, PathBuf};

use crate::domain::errors::ValidationError;

// ============================================================================
// Assets Configuration
// ============================================================================

pub const UPLOAD_PATH_AREA_VAR: &str = "FARM_ASSETS_UPLOAD_PATH_AREA";

#[derive(Debug, Clone, PartialEq)]
pub struct AssetsConfig {
    /// Directory uploaded area photos are written to
    pub upload_path_area: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            upload_path_area: PathBuf::from("uploads/areas"),
        }
    }
}

impl AssetsConfig {
    /// Defaults overridden by `FARM_ASSETS_UPLOAD_PATH_AREA` when set
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = var(UPLOAD_PATH_AREA_VAR).filter(|p| !p.trim().is_empty()) {
            config.upload_path_area = PathBuf::from(path.trim());
        }

        tracing::debug!(upload_path_area = %config.upload_path_area.display(), "Loaded assets config");
        config
    }

    /// Where the area photo named `filename` is stored. Only the last path
    /// component is used; a name without one is `INVALID_OPTION(filename)`.
    pub fn area_photo_path(&self, filename: &str) -> Result<PathBuf, ValidationError> {
        let name = Path::new(filename)
            .file_name()
            .ok_or(ValidationError::InvalidOption("filename"))?;
        Ok(self.upload_path_area.join(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overrides_default() {
        let config = AssetsConfig::from_vars(|key| {
            (key == UPLOAD_PATH_AREA_VAR).then(|| "/srv/photos".to_string())
        });
        assert_eq!(config.upload_path_area, PathBuf::from("/srv/photos"));

        let config = AssetsConfig::from_vars(|_| Some("  ".to_string()));
        assert_eq!(config, AssetsConfig::default());
    }

    #[test]
    fn test_area_photo_path_stays_in_upload_dir() {
        let config = AssetsConfig::default();

        assert_eq!(config.area_photo_path("north.jpg"), Ok(PathBuf::from("uploads/areas/north.jpg")));
        assert_eq!(config.area_photo_path("../../etc/passwd"), Ok(PathBuf::from("uploads/areas/passwd")));
    }

    #[test]
    fn test_area_photo_path_needs_file_name() {
        let config = AssetsConfig::default();

        for name in ["..", "/", "", "photos/.."] {
            assert_eq!(config.area_photo_path(name), Err(ValidationError::InvalidOption("filename")));
        }
    }
}
