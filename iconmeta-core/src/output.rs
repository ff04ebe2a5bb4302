//! Catalogue writers

use std::fs;
use std::io::Write;
use std::path::Path;

use log::info;
use tempfile::NamedTempFile;

use crate::catalogue::Catalogue;
use crate::error::IconMetaError;

/// Render the catalogue as two-space indented JSON with UTF-8 left unescaped.
pub fn render_json(catalogue: &Catalogue) -> Result<String, IconMetaError> {
    Ok(serde_json::to_string_pretty(catalogue)?)
}

/// Write the catalogue as prettified JSON.
pub fn write_json_pretty(catalogue: &Catalogue, mut w: impl Write) -> Result<(), IconMetaError> {
    let json = render_json(catalogue)?;
    w.write_all(json.as_bytes())
        .map_err(|source| IconMetaError::Write {
            path: "<stream>".into(),
            source,
        })
}

/// Replace `path` with the rendered catalogue, creating parent directories.
///
/// The JSON goes to a temporary file in the destination directory first and is
/// renamed over the target, so readers never see a partial catalogue.
pub fn write_catalogue(path: &Path, catalogue: &Catalogue) -> Result<(), IconMetaError> {
    let json = render_json(catalogue)?;
    let write_err = |source| IconMetaError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(write_err)?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(write_err)?;
    tmp.write_all(json.as_bytes()).map_err(write_err)?;
    tmp.persist(path).map_err(|err| write_err(err.error))?;

    info!(
        "saved {} icons to: {}",
        catalogue.icons.len(),
        path.display()
    );
    Ok(())
}
