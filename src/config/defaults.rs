use std::path::PathBuf;

/// Built-in layout used when no template file is configured
pub const DEFAULT_TEMPLATE: &str =
    "<html><head><title>{{title}}</title></head><body>{{body}}</body></html>";

/// Default input pattern
pub fn default_input() -> String {
    "*.md".to_string()
}

/// Default template: the built-in layout text
pub fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

/// Default output directory
pub fn default_output() -> PathBuf {
    PathBuf::from("./")
}

/// Default author
pub fn default_author() -> String {
    String::new()
}
