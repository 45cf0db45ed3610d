use std::path::PathBuf;
use std::time::SystemTime;
use chrono::{DateTime, Local};

use crate::builder::page::sanitize_title;
use crate::utils::path::get_stem;

/// Format for `Page::date`, e.g. "January 2, 2006"
const DATE_FORMAT: &str = "%B %-d, %Y";

/// A discovered source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub mod_time: SystemTime,
}

impl FileRecord {
    /// Base name of the source with its extension removed
    pub fn stem(&self) -> String {
        get_stem(&self.path).unwrap_or_default()
    }
}

/// The record a layout is rendered against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Rendered Markdown body
    pub body: String,
    /// Human-readable form of the source file's stem
    pub title: String,
    /// Source modification time in whole seconds since the epoch
    pub unix_time: String,
    /// Source modification time as "Month Day, Year" in local time
    pub date: String,
    pub author: String,
}

impl Page {
    /// Build a page from a source file and its rendered body.
    ///
    /// Dates always come from the source file's modification time.
    pub fn compose(record: &FileRecord, body: String, author: &str) -> Self {
        let modified: DateTime<Local> = record.mod_time.into();

        Page {
            body,
            title: sanitize_title(&record.stem()),
            unix_time: modified.timestamp().to_string(),
            date: modified.format(DATE_FORMAT).to_string(),
            author: author.to_string(),
        }
    }
}
