//! JSON 문서 저장소
//!
//! 글로벌(`<config_dir>/navgate/`)과 프로젝트(`.navgate/`) 두 계층을 지원한다.
//! 계층형 설정은 [`JsonStore::layered`] 순서대로 덮어쓴다 (뒤가 우선).

use crate::{Error, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// 프로젝트 설정 디렉토리 이름
pub const PROJECT_DIR: &str = ".navgate";

/// 디렉토리 하나에 묶인 JSON 문서 저장소
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 글로벌 계층 (<config_dir>/navgate/)
    pub fn global() -> Result<Self> {
        dirs::config_dir()
            .map(|dir| Self::new(dir.join("navgate")))
            .ok_or_else(|| Error::Config("config directory is not available".to_string()))
    }

    /// 프로젝트 계층 (<root>/.navgate/)
    pub fn project(root: impl Into<PathBuf>) -> Self {
        Self::new(root.into().join(PROJECT_DIR))
    }

    /// 현재 디렉토리 기준 프로젝트 계층
    pub fn current_project() -> Result<Self> {
        std::env::current_dir()
            .map(Self::project)
            .map_err(|e| Error::Config(format!("current directory is not available: {}", e)))
    }

    /// 병합 순서대로 나열한 계층들: 글로벌, 프로젝트
    ///
    /// 위치를 알 수 없는 계층은 건너뛴다.
    pub fn layered() -> Vec<Self> {
        [Self::global(), Self::current_project()]
            .into_iter()
            .filter_map(|store| match store {
                Ok(store) => Some(store),
                Err(e) => {
                    debug!(error = %e, "Skipping config layer");
                    None
                }
            })
            .collect()
    }

    pub fn file_path(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    /// 문서 로드 (파일이 없으면 에러)
    pub fn load<T: DeserializeOwned>(&self, filename: &str) -> Result<T> {
        let path = self.file_path(filename);
        debug!(path = %path.display(), "Loading JSON document");

        let content = std::fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    /// 문서 로드 (파일이 없으면 `None`, 깨진 파일은 에러)
    pub fn load_optional<T: DeserializeOwned>(&self, filename: &str) -> Result<Option<T>> {
        if !self.file_path(filename).is_file() {
            return Ok(None);
        }
        self.load(filename).map(Some)
    }

    /// 문서 저장 (디렉토리 자동 생성)
    pub fn save<T: Serialize>(&self, filename: &str, data: &T) -> Result<()> {
        std::fs::create_dir_all(&self.root).map_err(|e| {
            Error::Config(format!("cannot create {}: {}", self.root.display(), e))
        })?;

        let path = self.file_path(filename);
        let content = serde_json::to_string_pretty(data)?;
        std::fs::write(&path, content)
            .map_err(|e| Error::Config(format!("cannot write {}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_save_creates_project_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::project(dir.path());

        let sample = Sample {
            name: "path1".into(),
            count: 2,
        };
        store.save("sample.json", &sample).unwrap();

        assert!(dir.path().join(PROJECT_DIR).join("sample.json").is_file());
        let loaded: Sample = store.load("sample.json").unwrap();
        assert_eq!(loaded, sample);
    }

    #[test]
    fn test_load_optional_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        let loaded: Option<Sample> = store.load_optional("missing.json").unwrap();
        assert!(loaded.is_none());
        assert!(store.load::<Sample>("missing.json").is_err());
    }

    #[test]
    fn test_broken_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        std::fs::write(store.file_path("broken.json"), "{ not json").unwrap();

        let result: Result<Option<Sample>> = store.load_optional("broken.json");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
