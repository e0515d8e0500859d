//! # Artifact IO Utilities

mod atomic_file;

use std::path::{Path, PathBuf};

#[doc(inline)]
pub use atomic_file::AtomicFile;

use crate::errors::{CorpusPrepError, IoPathContext, PrepResult};

/// Expand `~` and `$VARS` in a configured path.
pub fn expand_path(path: &str) -> PrepResult<PathBuf> {
    let expanded = shellexpand::full(path)
        .map_err(|e| CorpusPrepError::Config(format!("cannot expand path {path:?}: {e}")))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// The file an output path will land on: its canonical parent directory
/// joined with its file name.
///
/// The file itself need not exist; its parent directory must.
pub fn resolve_destination<P: AsRef<Path>>(path: P) -> PrepResult<PathBuf> {
    let path = path.as_ref();
    let name = path.file_name().ok_or_else(|| {
        CorpusPrepError::Config(format!("not a file path: {}", path.display()))
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok(parent.canonicalize().with_path(path)?.join(name))
}

/// Check that no two named outputs land on the same file.
///
/// # Errors
/// [`CorpusPrepError::Config`] naming both outputs on a collision;
/// [`CorpusPrepError::Io`] when a destination directory can't be resolved.
pub fn ensure_distinct_destinations(outputs: &[(&str, &Path)]) -> PrepResult<()> {
    let resolved = outputs
        .iter()
        .map(|&(label, path)| Ok((label, path, resolve_destination(path)?)))
        .collect::<PrepResult<Vec<_>>>()?;

    for (idx, (label, path, dest)) in resolved.iter().enumerate() {
        if let Some((other_label, other_path, _)) =
            resolved[..idx].iter().find(|(_, _, other)| other == dest)
        {
            return Err(CorpusPrepError::Config(format!(
                "{other_label} path {} and {label} path {} are the same file",
                other_path.display(),
                path.display()
            )));
        }
    }
    Ok(())
}
