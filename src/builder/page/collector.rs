use log::{debug, warn};
use glob::glob;

use crate::builder::page::model::FileRecord;
use crate::utils::error::{MdpError, MdpResult};
use crate::utils::fs::modified_time;

/// Resolve the input pattern to the matched source files, in match order.
///
/// Directories are skipped. An empty match set is a configuration error
/// and any file that cannot be stat'ed aborts the run.
pub fn collect_files(pattern: &str) -> MdpResult<Vec<FileRecord>> {
    debug!("Collecting files matching {}", pattern);

    let entries = glob(pattern).map_err(|e| MdpError::Config(format!(
        "Invalid input pattern \"{}\": {}", pattern, e
    )))?;

    let mut records = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            MdpError::Stat { path, source: e.into() }
        })?;

        if path.is_dir() {
            warn!("Skipping directory {}", path.display());
            continue;
        }

        let mod_time = modified_time(&path)?;
        records.push(FileRecord { path, mod_time });
    }

    if records.is_empty() {
        return Err(MdpError::Config(format!(
            "No files found with input \"{}\"", pattern
        )));
    }

    debug!("Found {} source files", records.len());
    Ok(records)
}

/// Order records oldest first; records with equal times keep their order
pub fn sort_by_mod_time(records: &mut [FileRecord]) {
    records.sort_by(|a, b| a.mod_time.cmp(&b.mod_time));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn at(secs: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
    }

    fn record(path: &str, secs: u64) -> FileRecord {
        FileRecord { path: PathBuf::from(path), mod_time: at(secs) }
    }

    fn pattern_in(dir: &Path, pattern: &str) -> String {
        dir.join(pattern).to_string_lossy().into_owned()
    }

    #[test]
    fn test_sort_by_mod_time_ascending() {
        let mut records = vec![record("c.md", 30), record("a.md", 10), record("b.md", 20)];
        sort_by_mod_time(&mut records);

        let names: Vec<_> = records.iter().map(|r| r.stem()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut records = vec![
            record("late.md", 50),
            record("first.md", 10),
            record("second.md", 10),
            record("third.md", 10),
        ];
        sort_by_mod_time(&mut records);

        let names: Vec<_> = records.iter().map(|r| r.stem()).collect();
        assert_eq!(names, ["first", "second", "third", "late"]);
    }

    #[test]
    fn test_collect_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.md"), "b").unwrap();
        fs::write(dir.path().join("a.md"), "a").unwrap();
        fs::write(dir.path().join("notes.txt"), "skip").unwrap();
        fs::create_dir(dir.path().join("folder.md")).unwrap();

        let records = collect_files(&pattern_in(dir.path(), "*.md")).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.stem()).collect();
        assert_eq!(names, ["a", "b"]);

        let expected = fs::metadata(dir.path().join("a.md")).unwrap().modified().unwrap();
        assert_eq!(records[0].mod_time, expected);
    }

    #[test]
    fn test_empty_match_set_is_config_error() {
        let dir = TempDir::new().unwrap();

        let err = collect_files(&pattern_in(dir.path(), "*.md")).unwrap_err();
        match err {
            MdpError::Config(msg) => assert!(msg.starts_with("No files found with input")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_invalid_pattern_is_config_error() {
        assert!(matches!(collect_files("[*.md"), Err(MdpError::Config(_))));
    }
}
