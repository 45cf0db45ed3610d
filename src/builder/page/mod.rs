mod model;
mod collector;
mod utils;

pub use model::{FileRecord, Page};
pub use collector::{collect_files, sort_by_mod_time};
pub use utils::sanitize_title;
