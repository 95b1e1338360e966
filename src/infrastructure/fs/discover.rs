//! Template discovery on local disk

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ViewError, ViewResult};

/// Every file under `source_root` whose extension is in `extensions`, sorted
///
/// Honors `.gitignore`/`.ignore` files and skips hidden entries, so editor
/// swap files and vendored build output never get compiled.
pub fn discover_templates(source_root: &Path, extensions: &[String]) -> ViewResult<Vec<PathBuf>> {
    if !source_root.is_dir() {
        return Err(ViewError::config(format!(
            "source root {} is not a directory",
            source_root.display()
        )));
    }

    let walker = ignore::WalkBuilder::new(source_root)
        .hidden(true)
        .git_ignore(true)
        .require_git(false)
        .build();

    let mut templates = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            ViewError::Io(
                e.into_io_error()
                    .unwrap_or_else(|| io::Error::other("failed to walk source root")),
            )
        })?;

        let is_file = entry.file_type().is_some_and(|t| t.is_file());
        let matches = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext));

        if is_file && matches {
            templates.push(entry.into_path());
        }
    }

    templates.sort();
    Ok(templates)
}
