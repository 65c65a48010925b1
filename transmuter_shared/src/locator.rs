//! Config file location.
//!
//! A locator maps the mod's component name to exactly one file path,
//! `<base_dir>/<name>.json`, and opens raw byte streams for it. Nothing else
//! in the subsystem touches the filesystem; everything above works in terms
//! of the [`ConfigLocator`] trait so tests can substitute in-memory doubles.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The config file cannot be opened: missing or unreadable on the read
/// side, unwritable on the write side.
#[derive(Debug, Error)]
#[error("cannot open config file {}: {}", .path.display(), .source)]
pub struct LocateError {
    /// Path the locator resolved for the component.
    pub path: PathBuf,
    /// Underlying OS error.
    #[source]
    pub source: io::Error,
}

/// Capability to produce readable/writable streams for a component's config
/// file.
pub trait ConfigLocator {
    /// Opens the config file for reading.
    ///
    /// The returned stream is closed when dropped; callers must not hold it
    /// past the operation that opened it.
    fn open_reader(&self) -> Result<Box<dyn Read>, LocateError>;

    /// Opens the config file for writing, creating it if absent and
    /// truncating it if present.
    fn open_writer(&self) -> Result<Box<dyn Write>, LocateError>;
}

/// Locator backed by a real directory on disk.
#[derive(Debug, Clone)]
pub struct FileLocator {
    path: PathBuf,
}

impl FileLocator {
    /// Resolves the config file for `component` inside `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>, component: &str) -> Self {
        Self {
            path: base_dir.as_ref().join(format!("{component}.json")),
        }
    }

    /// The resolved file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn locate_err(&self, source: io::Error) -> LocateError {
        LocateError {
            path: self.path.clone(),
            source,
        }
    }
}

impl ConfigLocator for FileLocator {
    fn open_reader(&self) -> Result<Box<dyn Read>, LocateError> {
        let file = File::open(&self.path).map_err(|e| self.locate_err(e))?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn open_writer(&self) -> Result<Box<dyn Write>, LocateError> {
        let file = File::create(&self.path).map_err(|e| self.locate_err(e))?;
        Ok(Box::new(BufWriter::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn resolves_component_path() {
        let locator = FileLocator::new("/srv/game/config", "testmod");
        assert_eq!(
            locator.path(),
            Path::new("/srv/game/config/testmod.json")
        );
    }

    #[test]
    fn reader_for_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("testmod.json"), "some file contents").unwrap();

        let locator = FileLocator::new(dir.path(), "testmod");
        let mut contents = String::new();
        locator
            .open_reader()
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();

        assert_eq!(contents, "some file contents");
    }

    #[test]
    fn reader_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let locator = FileLocator::new(dir.path(), "testmod");

        let err = match locator.open_reader() {
            Ok(_) => panic!("expected open_reader to fail for missing file"),
            Err(e) => e,
        };
        assert_eq!(err.source.kind(), io::ErrorKind::NotFound);
        assert_eq!(err.path, dir.path().join("testmod.json"));
    }

    #[test]
    fn writer_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let locator = FileLocator::new(dir.path(), "testmod");

        {
            let mut writer = locator.open_writer().unwrap();
            writer.write_all(b"some new contents").unwrap();
            writer.flush().unwrap();
        }

        let contents = fs::read_to_string(dir.path().join("testmod.json")).unwrap();
        assert_eq!(contents, "some new contents");
    }

    #[test]
    fn writer_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("testmod.json"),
            "a much longer previous document",
        )
        .unwrap();

        let locator = FileLocator::new(dir.path(), "testmod");
        {
            let mut writer = locator.open_writer().unwrap();
            writer.write_all(b"short").unwrap();
            writer.flush().unwrap();
        }

        let contents = fs::read_to_string(dir.path().join("testmod.json")).unwrap();
        assert_eq!(contents, "short");
    }

    #[test]
    fn writer_fails_when_directory_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let locator = FileLocator::new(dir.path().join("no-such-dir"), "testmod");

        assert!(locator.open_writer().is_err());
    }
}
