// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use tracing::info;

use crate::config::options::ExportOptions;
use crate::csv::write_export;
use crate::data::{DataSet, SearchResult};

/// Write one CSV for a finished search into `export.out_dir()`.
/// File name is derived from the keyword. Returns the final path written to.
pub fn export_results(
    export: &ExportOptions,
    keyword: &str,
    results: &[SearchResult],
) -> io::Result<PathBuf> {
    let path = export.out_path(keyword);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let ds = DataSet::from_results(results);
    let out = BufWriter::new(File::create(&path)?); // truncate/overwrite
    write_export(out, &ds, export.include_headers, export.bom)?;

    info!(path = %path.display(), rows = ds.row_count(), "Export: written");
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
