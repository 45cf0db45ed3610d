use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Common result type for mdp operations
pub type MdpResult<T> = Result<T, MdpError>;

/// Which of the two template passes produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplatePass {
    /// Unescaped pass over the configured layout
    Base,
    /// Escaped pass over the output of the base pass
    Final,
}

impl fmt::Display for TemplatePass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplatePass::Base => write!(f, "base"),
            TemplatePass::Final => write!(f, "final"),
        }
    }
}

/// Error kinds for a conversion run. Every kind is terminal.
#[derive(Debug)]
pub enum MdpError {
    /// Bad configuration: unreadable template file, empty input set, bad pattern
    Config(String),
    /// Cannot read file metadata
    Stat { path: PathBuf, source: io::Error },
    /// Cannot read source file contents
    Read { path: PathBuf, source: io::Error },
    /// Base or final template fails to parse
    TemplateCompile { name: String, pass: TemplatePass, message: String },
    /// A compiled template fails while rendering
    TemplateRender { name: String, message: String },
    /// Cannot create or write an output file
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for MdpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MdpError::Config(msg) => write!(f, "Configuration error: {}", msg),
            MdpError::Stat { path, source } => {
                write!(f, "Unable to get file info for {}: {}", path.display(), source)
            }
            MdpError::Read { path, source } => {
                write!(f, "Unable to read {}: {}", path.display(), source)
            }
            MdpError::TemplateCompile { name, pass, message } => {
                write!(f, "Unable to create {} template for {}: {}", pass, name, message)
            }
            MdpError::TemplateRender { name, message } => {
                write!(f, "Unable to render template {}: {}", name, message)
            }
            MdpError::Write { path, source } => {
                write!(f, "Unable to write html file {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for MdpError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MdpError::Stat { source, .. }
            | MdpError::Read { source, .. }
            | MdpError::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_item() {
        let err = MdpError::Read {
            path: PathBuf::from("notes/a.md"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "Unable to read notes/a.md: gone");
        assert!(err.source().is_some());

        let err = MdpError::TemplateCompile {
            name: "a.html-final".to_string(),
            pass: TemplatePass::Final,
            message: "unexpected token".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unable to create final template for a.html-final: unexpected token"
        );
        assert!(err.source().is_none());
    }
}
