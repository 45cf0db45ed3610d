use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    // Characters that separate words in file names
    static ref SEPARATOR_REGEX: Regex = Regex::new(r"[-_+.]").unwrap();
}

/// Turn a file stem into readable text: every `-`, `_`, `+` and `.`
/// becomes one space. Runs of separators are not collapsed.
pub fn sanitize_title(stem: &str) -> String {
    SEPARATOR_REGEX.replace_all(stem, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_title() {
        assert_eq!(sanitize_title("my-file_name+v1.2"), "my file name v1 2");
        assert_eq!(sanitize_title("plain"), "plain");
        assert_eq!(sanitize_title(""), "");
    }

    #[test]
    fn test_adjacent_separators_not_collapsed() {
        assert_eq!(sanitize_title("a--b"), "a  b");
        assert_eq!(sanitize_title("._+-"), "    ");
    }

    #[test]
    fn test_length_preserved() {
        for stem in ["über-straße", "x+y", "2024.01.02_notes", "no separators"] {
            let title = sanitize_title(stem);
            assert_eq!(title.chars().count(), stem.chars().count());
            assert!(!title.contains(['-', '_', '+', '.']));
        }
    }
}
