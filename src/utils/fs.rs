use std::fs::{self, FileTimes};
use std::io::Write;
use std::path::Path;
use std::time::SystemTime;

use crate::utils::error::{MdpError, MdpResult};

/// Get the last-modified time of a file
pub fn modified_time<P: AsRef<Path>>(path: P) -> MdpResult<SystemTime> {
    let path = path.as_ref();
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|source| MdpError::Stat { path: path.to_path_buf(), source })
}

/// Read a source file fully into memory, replacing invalid UTF-8
pub fn read_source<P: AsRef<Path>>(path: P) -> MdpResult<String> {
    let path = path.as_ref();
    let bytes = fs::read(path)
        .map_err(|source| MdpError::Read { path: path.to_path_buf(), source })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read a template file
pub fn read_template<P: AsRef<Path>>(path: P) -> MdpResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| MdpError::Config(format!(
        "Unable to read template file {}: {}", path.display(), e
    )))
}

/// Write `contents` to `path`, overwriting any existing file, then stamp
/// the file's access and modification times with `mtime`.
///
/// The parent directory must already exist.
pub fn write_output<P: AsRef<Path>>(path: P, contents: &str, mtime: SystemTime) -> MdpResult<()> {
    let path = path.as_ref();
    let to_write_error = |source| MdpError::Write { path: path.to_path_buf(), source };

    let mut file = fs::File::create(path).map_err(to_write_error)?;
    file.write_all(contents.as_bytes()).map_err(to_write_error)?;
    file.flush().map_err(to_write_error)?;

    let times = FileTimes::new().set_accessed(mtime).set_modified(mtime);
    file.set_times(times).map_err(to_write_error)?;
    Ok(())
}
