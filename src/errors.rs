use std::{error, fmt, io};

#[derive(Debug)]
pub enum ExtractError {
    Io(io::Error),
    // Anything the fasta parser rejects
    Parse(String),
    EmptyInput,
    NoGroupLabel(String),
}

impl ExtractError {
    /// Classifies an error raised while reading records. The fasta reader
    /// reports malformed input as I/O errors of kind `Other` or `InvalidData`.
    pub fn from_read(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::Other | io::ErrorKind::InvalidData => ExtractError::Parse(e.to_string()),
            _ => ExtractError::Io(e),
        }
    }

    /// True if the error means whoever reads our stdout has gone away, e.g. `| head -n 1`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, ExtractError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

impl From<io::Error> for ExtractError {
    fn from(e: io::Error) -> Self {
        ExtractError::Io(e)
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::Io(e) => write!(f, "I/O error: {}", e),
            ExtractError::Parse(msg) => write!(f, "Fasta parse error: {}", msg),
            ExtractError::EmptyInput => write!(f, "Input contains no sequence records"),
            ExtractError::NoGroupLabel(path) => {
                write!(f, "No group label matching OG[0-9]* in path '{}'", path)
            }
        }
    }
}

impl error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ExtractError::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broken_pipe_is_recognised() {
        let e = ExtractError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(e.is_broken_pipe());

        let e = ExtractError::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert!(!e.is_broken_pipe());
        assert!(!ExtractError::EmptyInput.is_broken_pipe());
    }

    #[test]
    fn test_read_errors_are_classified() {
        match ExtractError::from_read(io::Error::new(io::ErrorKind::Other, "Expected > at record start.")) {
            ExtractError::Parse(msg) => assert_eq!(msg, "Expected > at record start."),
            other => panic!("Expected a parse error, got {:?}", other),
        }

        match ExtractError::from_read(io::Error::new(io::ErrorKind::PermissionDenied, "denied")) {
            ExtractError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("Expected an I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_messages_are_plain_text() {
        let e = ExtractError::from_read(io::Error::new(io::ErrorKind::Other, "Expected > at record start."));
        assert_eq!(e.to_string(), "Fasta parse error: Expected > at record start.");
    }
}
