use std::path::PathBuf;

use crate::lexer::LexError;

#[derive(Debug, thiserror::Error)]
pub enum SrcgenError {
    #[error("could not create '{}': {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' line {line} does not lex: {source}", path.display())]
    Lex {
        path: PathBuf,
        line: usize,
        #[source]
        source: LexError,
    },
}

impl SrcgenError {
    pub fn create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SrcgenError::Create {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SrcgenError::Write {
            path: path.into(),
            source,
        }
    }

    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            SrcgenError::Create { source, .. }
            | SrcgenError::Write { source, .. }
            | SrcgenError::Read { source, .. } => Some(source),
            SrcgenError::Lex { .. } => None,
        }
    }
}
