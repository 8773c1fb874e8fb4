//! Filtered recursive copy of a template tree.

use crate::error::{Error, Result};
use log::debug;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    Ok(())
}

/// Fails with `NotFound` unless `source` is an existing directory.
pub fn ensure_source_dir(source: &Path) -> Result<()> {
    if !source.is_dir() {
        return Err(Error::IoError(io::Error::new(
            io::ErrorKind::NotFound,
            format!("template directory '{}' does not exist", source.display()),
        )));
    }
    Ok(())
}

/// Absolute, symlink-free form of `path`, which need not exist yet.
///
/// The nearest existing ancestor is canonicalized and the remaining
/// components are appended, with `.` and `..` folded lexically.
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    for ancestor in path.ancestors() {
        let existing = if ancestor.as_os_str().is_empty() { Path::new(".") } else { ancestor };
        if !existing.exists() {
            continue;
        }

        let mut resolved = fs::canonicalize(existing).map_err(Error::IoError)?;
        let rest = path
            .strip_prefix(ancestor)
            .map_err(|e| Error::IoError(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        for component in rest.components() {
            match component {
                Component::ParentDir => {
                    resolved.pop();
                }
                Component::CurDir => {}
                other => resolved.push(other),
            }
        }
        return Ok(resolved);
    }

    Err(Error::IoError(io::Error::new(
        io::ErrorKind::NotFound,
        format!("no existing ancestor of '{}'", path.display()),
    )))
}

/// True if `a` and `b` are the same directory or one lies inside the other.
pub fn paths_overlap(a: &Path, b: &Path) -> Result<bool> {
    let a = resolve_path(a)?;
    let b = resolve_path(b)?;
    Ok(a.starts_with(&b) || b.starts_with(&a))
}

/// Copies `source` into `destination`, skipping every entry whose basename
/// fails `include` together with everything below it.
///
/// Directories are only created in the destination once a file beneath them
/// is copied. Files are copied byte for byte. Existing files at the
/// destination are overwritten.
///
/// # Returns
/// * `Result<usize>` - Number of files copied
///
/// # Errors
/// * `Error::IoError` if the source is missing, if source and destination
///   overlap, or if any read or write fails
pub fn copy_tree<P, Q, F>(source: P, destination: Q, mut include: F) -> Result<usize>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    F: FnMut(&OsStr) -> bool,
{
    let source = source.as_ref();
    let destination = destination.as_ref();
    ensure_source_dir(source)?;
    if paths_overlap(source, destination)? {
        return Err(Error::IoError(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "cannot copy '{}' into '{}': the directories overlap",
                source.display(),
                destination.display()
            ),
        )));
    }
    fs::create_dir_all(destination).map_err(Error::IoError)?;

    let walker = WalkDir::new(source)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || include(entry.file_name()));

    let mut copied = 0;
    for entry in walker {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if entry.depth() == 0 || entry.file_type().is_dir() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| Error::IoError(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        let target = destination.join(relative);

        debug!("Copying '{}'", relative.display());
        ensure_parent(&target)?;
        fs::copy(entry.path(), &target).map_err(Error::IoError)?;
        copied += 1;
    }

    Ok(copied)
}
