//! Writes assembled scene files to disk.

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use scene_forge_core::models::{EmitReport, Topic};
use scene_forge_core::ForgeError;
use tempfile::NamedTempFile;

use crate::template;

/// Replace the contents of `path` with `text`, returning the bytes written.
///
/// The text goes to a temporary file in the same directory which is then
/// renamed over the target, so readers never observe a half-written file.
/// The temporary file is removed if any step fails.
///
/// An existing target keeps its permissions, and a symlinked target is
/// written through the link. New files get the same mode a plain create
/// would give them.
pub fn write_file(path: &Path, text: &str) -> Result<usize, ForgeError> {
    let target = resolve_target(path)?;
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = match fs::metadata(&target) {
        Ok(meta) => Some(meta.permissions()),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => return Err(ForgeError::io(path, e)),
    };

    let mut tmp = new_temp(dir, existing.is_none()).map_err(|e| ForgeError::io(path, e))?;
    tmp.write_all(text.as_bytes())
        .and_then(|_| tmp.flush())
        .map_err(|e| ForgeError::io(path, e))?;
    if let Some(permissions) = existing {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| ForgeError::io(path, e))?;
    }
    tmp.persist(&target)
        .map_err(|e| ForgeError::io(path, e.error))?;

    Ok(text.len())
}

/// Follow a symlinked target to the file it points at.
fn resolve_target(path: &Path) -> Result<PathBuf, ForgeError> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(path).map_err(|e| ForgeError::io(path, e))
        }
        _ => Ok(path.to_path_buf()),
    }
}

#[cfg(unix)]
fn new_temp(dir: &Path, fresh: bool) -> io::Result<NamedTempFile> {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    if fresh {
        // 0666 minus the process umask, as for any newly created file.
        tempfile::Builder::new()
            .permissions(Permissions::from_mode(0o666))
            .tempfile_in(dir)
    } else {
        NamedTempFile::new_in(dir)
    }
}

#[cfg(not(unix))]
fn new_temp(dir: &Path, _fresh: bool) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}

/// Assemble and write one topic into `dir`.
pub fn emit_topic(topic: &Topic, dir: &Path) -> Result<EmitReport, ForgeError> {
    let file = template::assemble_file(topic, dir)?;
    let bytes = write_file(&file.path, &file.text)?;
    tracing::info!(topic = %topic.key, path = %file.path.display(), bytes, "wrote scene");

    Ok(EmitReport {
        filename: topic.filename.clone(),
        path: file.path,
        bytes,
    })
}

/// Write every topic in order, calling `on_written` as each file lands.
///
/// The first failure aborts the batch; files already written stay on disk.
pub fn emit_all(
    topics: &[Topic],
    dir: &Path,
    mut on_written: impl FnMut(&EmitReport),
) -> Result<Vec<EmitReport>, ForgeError> {
    let mut reports = Vec::with_capacity(topics.len());
    for topic in topics {
        let report = emit_topic(topic, dir)?;
        on_written(&report);
        reports.push(report);
    }
    Ok(reports)
}
