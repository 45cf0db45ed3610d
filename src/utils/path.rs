use std::path::{Path, PathBuf};

use crate::utils::error::{MdpError, MdpResult};

/// Get file name without extension
pub fn get_stem<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}

/// Output location for a stem: `<dir>/<stem>.html`
pub fn output_path_for<P: AsRef<Path>>(dir: P, stem: &str) -> PathBuf {
    dir.as_ref().join(format!("{}.html", stem))
}

/// Make a path absolute against the current directory without resolving symlinks
pub fn absolute<P: AsRef<Path>>(path: P) -> MdpResult<PathBuf> {
    let path = path.as_ref();
    std::path::absolute(path)
        .map_err(|source| MdpError::Write { path: path.to_path_buf(), source })
}
