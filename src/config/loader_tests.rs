use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use super::*;
use crate::error::BikeshareError;

/// In-memory filesystem for loader tests.
struct MockFileSystem {
    cwd: PathBuf,
    files: HashMap<PathBuf, String>,
}

impl MockFileSystem {
    fn new(cwd: &str) -> Self {
        Self {
            cwd: PathBuf::from(cwd),
            files: HashMap::new(),
        }
    }

    fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.cwd.clone())
    }
}

#[test]
fn load_without_config_file_uses_defaults() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new("/project"));
    let config = loader.load().expect("loads");
    assert_eq!(config, Config::default());
}

#[test]
fn load_discovers_local_config() {
    let fs = MockFileSystem::new("/project").with_file(
        "/project/.bikeshare-stats.toml",
        r#"
            [data]
            dir = "/srv/data"
        "#,
    );
    let loader = FileConfigLoader::with_fs(fs);
    let config = loader.load().expect("loads");
    assert_eq!(config.data.dir, PathBuf::from("/srv/data"));
}

#[test]
fn load_from_path_reads_explicit_file() {
    let fs = MockFileSystem::new("/project").with_file(
        "/etc/bikeshare.toml",
        r#"
            [data.files]
            chicago = "chi.csv"
        "#,
    );
    let loader = FileConfigLoader::with_fs(fs);
    let config = loader
        .load_from_path(Path::new("/etc/bikeshare.toml"))
        .expect("loads");
    assert_eq!(config.data.files.chicago.as_deref(), Some("chi.csv"));
}

#[test]
fn load_from_path_missing_file_is_config_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new("/project"));
    let err = loader
        .load_from_path(Path::new("/missing.toml"))
        .expect_err("must fail");
    assert!(matches!(err, BikeshareError::Config(_)));
    assert!(err.to_string().contains("/missing.toml"));
}

#[test]
fn load_malformed_toml_is_parse_error() {
    let fs = MockFileSystem::new("/project")
        .with_file("/project/.bikeshare-stats.toml", "data = not toml");
    let loader = FileConfigLoader::with_fs(fs);
    let err = loader.load().expect_err("must fail");
    assert!(matches!(err, BikeshareError::TomlParse(_)));
}

#[test]
fn load_invalid_config_fails_validation() {
    let fs = MockFileSystem::new("/project").with_file(
        "/project/.bikeshare-stats.toml",
        r#"
            [data.files]
            washington = ""
        "#,
    );
    let loader = FileConfigLoader::with_fs(fs);
    let err = loader.load().expect_err("must fail");
    assert!(err.to_string().contains("data.files.washington"));
}
