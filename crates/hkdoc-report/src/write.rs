//! Publishing rendered documents.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::document::DocumentSet;
use crate::error::WriteError;

/// Write every document of `set` under `output_dir`.
///
/// All documents are first written to sibling temp files. Only when every
/// temp file is synced are they renamed into place; a failed rename restores
/// the documents already replaced, so a run publishes all files or none.
pub fn write_documents(set: &DocumentSet, output_dir: &Path) -> Result<Vec<PathBuf>, WriteError> {
    fs::create_dir_all(output_dir).map_err(|source| WriteError::Io {
        operation: "create directory",
        path: output_dir.to_path_buf(),
        source,
    })?;

    let targets: Vec<(PathBuf, &[u8])> = set
        .iter()
        .map(|document| {
            (
                output_dir.join(&document.file_name),
                document.contents.as_bytes(),
            )
        })
        .collect();
    for (target, _) in &targets {
        ensure_replaceable(target)?;
    }

    let mut staged = Vec::with_capacity(targets.len());
    for (target, bytes) in &targets {
        match stage(target, bytes) {
            Ok(temp_path) => staged.push(Staged {
                temp_path,
                target_path: target.clone(),
            }),
            Err(error) => {
                discard(&staged);
                return Err(error);
            }
        }
    }
    publish(&staged)?;

    let written: Vec<PathBuf> = staged.into_iter().map(|item| item.target_path).collect();
    info!(
        count = written.len(),
        output_dir = %output_dir.display(),
        "wrote support tables"
    );
    Ok(written)
}

/// Paths under `output_dir` whose contents differ from `set` (or are missing).
pub fn check_documents(set: &DocumentSet, output_dir: &Path) -> Result<Vec<PathBuf>, WriteError> {
    let mut stale = Vec::new();
    for document in set.iter() {
        let path = output_dir.join(&document.file_name);
        let current = match fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => None,
            Err(source) => {
                return Err(WriteError::Io {
                    operation: "read",
                    path,
                    source,
                });
            }
        };
        if current.as_deref() != Some(document.contents.as_str()) {
            debug!(path = %path.display(), "document is out of date");
            stale.push(path);
        }
    }
    Ok(stale)
}

/// A fully written temp file waiting to be renamed onto its target.
struct Staged {
    temp_path: PathBuf,
    target_path: PathBuf,
}

/// A target replaced during publishing, with the previous file if there was one.
struct Replaced<'a> {
    target_path: &'a Path,
    backup_path: Option<PathBuf>,
}

fn ensure_replaceable(target: &Path) -> Result<(), WriteError> {
    match fs::metadata(target) {
        Ok(metadata) if !metadata.is_file() => Err(WriteError::NotAFile {
            path: target.to_path_buf(),
        }),
        Ok(_) => Ok(()),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(WriteError::Io {
            operation: "inspect",
            path: target.to_path_buf(),
            source,
        }),
    }
}

fn stage(target: &Path, bytes: &[u8]) -> Result<PathBuf, WriteError> {
    let temp_path = temp_path_for(target);

    let mut file = File::create(&temp_path).map_err(|source| WriteError::Io {
        operation: "create",
        path: temp_path.clone(),
        source,
    })?;
    let written = file
        .write_all(bytes)
        .and_then(|()| file.sync_all())
        .map_err(|source| WriteError::Io {
            operation: "write",
            path: temp_path.clone(),
            source,
        });
    drop(file);
    if let Err(error) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(error);
    }
    debug!(path = %temp_path.display(), bytes = bytes.len(), "staged document");
    Ok(temp_path)
}

fn publish(staged: &[Staged]) -> Result<(), WriteError> {
    let mut replaced = Vec::with_capacity(staged.len());
    for (index, item) in staged.iter().enumerate() {
        match replace(item) {
            Ok(done) => replaced.push(done),
            Err(error) => {
                roll_back(&replaced);
                discard(&staged[index..]);
                return Err(error);
            }
        }
    }
    for done in &replaced {
        if let Some(backup_path) = &done.backup_path {
            let _ = fs::remove_file(backup_path);
        }
    }
    Ok(())
}

fn replace(item: &Staged) -> Result<Replaced<'_>, WriteError> {
    let target = item.target_path.as_path();
    let backup_path = if target.exists() {
        let backup_path = sibling_with_suffix(target, ".bak");
        fs::rename(target, &backup_path).map_err(|source| WriteError::Io {
            operation: "back up",
            path: target.to_path_buf(),
            source,
        })?;
        Some(backup_path)
    } else {
        None
    };

    if let Err(source) = fs::rename(&item.temp_path, target) {
        if let Some(backup_path) = &backup_path {
            let _ = fs::rename(backup_path, target);
        }
        return Err(WriteError::AtomicWriteFailed {
            temp_path: item.temp_path.clone(),
            target_path: target.to_path_buf(),
            source,
        });
    }
    debug!(path = %target.display(), "published document");
    Ok(Replaced {
        target_path: target,
        backup_path,
    })
}

fn roll_back(replaced: &[Replaced<'_>]) {
    for done in replaced.iter().rev() {
        let restored = match &done.backup_path {
            Some(backup_path) => fs::rename(backup_path, done.target_path),
            None => fs::remove_file(done.target_path),
        };
        if let Err(error) = restored {
            warn!(path = %done.target_path.display(), %error, "failed to roll back document");
        }
    }
}

fn discard(staged: &[Staged]) {
    for item in staged {
        let _ = fs::remove_file(&item.temp_path);
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    sibling_with_suffix(path, ".tmp")
}

fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use tempfile::tempdir;

    fn document(name: &str, contents: &str) -> Document {
        Document {
            category: None,
            file_name: name.to_string(),
            coverage_sentence: String::new(),
            contents: contents.to_string(),
        }
    }

    fn set() -> DocumentSet {
        DocumentSet {
            documents: vec![document("a.md", "alpha\n")],
            summary: document("index.md", "summary\n"),
        }
    }

    #[test]
    fn writes_all_documents_without_temp_leftovers() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("docs");

        let written = write_documents(&set(), &out).unwrap();

        assert_eq!(written, vec![out.join("a.md"), out.join("index.md")]);
        assert_eq!(fs::read_to_string(out.join("a.md")).unwrap(), "alpha\n");
        let leftovers: Vec<_> = fs::read_dir(&out)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn check_reports_missing_and_changed_files() {
        let dir = tempdir().unwrap();
        write_documents(&set(), dir.path()).unwrap();
        assert!(check_documents(&set(), dir.path()).unwrap().is_empty());

        fs::write(dir.path().join("a.md"), "edited\n").unwrap();
        fs::remove_file(dir.path().join("index.md")).unwrap();

        let stale = check_documents(&set(), dir.path()).unwrap();
        assert_eq!(
            stale,
            vec![dir.path().join("a.md"), dir.path().join("index.md")]
        );
    }

    #[test]
    fn blocked_destination_publishes_nothing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "previous\n").unwrap();
        fs::create_dir_all(dir.path().join("index.md").join("x")).unwrap();

        let err = write_documents(&set(), dir.path()).unwrap_err();

        assert!(matches!(err, WriteError::NotAFile { .. }));
        assert_eq!(
            fs::read_to_string(dir.path().join("a.md")).unwrap(),
            "previous\n"
        );
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 2, "unexpected files: {names:?}");
    }

    #[test]
    fn failed_rename_restores_replaced_documents() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("a.md");
        let second = dir.path().join("b.md");
        fs::write(&first, "previous\n").unwrap();
        let staged = vec![
            Staged {
                temp_path: stage(&first, b"next\n").unwrap(),
                target_path: first.clone(),
            },
            Staged {
                temp_path: dir.path().join("b.md.tmp"),
                target_path: second.clone(),
            },
        ];

        let err = publish(&staged).unwrap_err();

        assert!(matches!(err, WriteError::AtomicWriteFailed { .. }));
        assert_eq!(fs::read_to_string(&first).unwrap(), "previous\n");
        assert!(!second.exists());
        assert!(!dir.path().join("a.md.tmp").exists());
        assert!(!dir.path().join("a.md.bak").exists());
    }

    #[test]
    fn temp_path_is_a_sibling() {
        assert_eq!(
            temp_path_for(Path::new("docs/Table.md")),
            PathBuf::from("docs/Table.md.tmp")
        );
    }
}
