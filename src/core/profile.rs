use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::ProfileError;
use crate::models::Me;

/// 从固定位置的 JSON 文件读取个人资料，每次调用都重新读取
#[derive(Debug, Clone)]
pub struct ProfileService {
    path: PathBuf,
}

impl ProfileService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_profile(&self) -> Result<Me, ProfileError> {
        debug!("读取个人资料: {}", self.path.display());

        let data = fs::read(&self.path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ProfileError::NotFound {
                path: self.path.clone(),
            },
            _ => ProfileError::Io {
                path: self.path.clone(),
                source,
            },
        })?;

        serde_json::from_slice(&data).map_err(|source| ProfileError::Decode {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JANE: &str = r#"{"name":"Jane","streetAddress":"1 Main St","zip":"00000","city":"Town","job":{"title":"Eng","description":"d","apps":[]},"tags":[]}"#;

    #[test]
    fn reads_valid_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.json");
        fs::write(&path, JANE).unwrap();

        let me = ProfileService::new(&path).get_profile().unwrap();
        assert_eq!(me.name, "Jane");
        assert_eq!(me.city, "Town");
        assert!(me.job.apps.is_empty());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProfileService::new(dir.path().join("me.json")).get_profile().unwrap_err();
        assert!(matches!(err, ProfileError::NotFound { .. }));
    }

    #[test]
    fn malformed_json_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.json");
        fs::write(&path, r#"{"name": "Jane""#).unwrap();

        let err = ProfileService::new(&path).get_profile().unwrap_err();
        assert!(matches!(err, ProfileError::Decode { .. }));
    }

    #[test]
    fn rereads_file_on_every_call() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.json");
        let service = ProfileService::new(&path);

        assert!(service.get_profile().is_err());
        fs::write(&path, JANE).unwrap();
        assert_eq!(service.get_profile().unwrap().name, "Jane");
    }
}
