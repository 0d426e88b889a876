use miette::Diagnostic;
use thiserror::Error;

/// Main error type for weaver operations
#[derive(Error, Diagnostic, Debug)]
pub enum WeaveError {
    #[error("IO error: {0}")]
    #[diagnostic(code(weaver::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(weaver::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(weaver::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid gradient: {message}")]
    #[diagnostic(code(weaver::invalid_spec))]
    InvalidSpec {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid treadling: {message}")]
    #[diagnostic(code(weaver::invalid_treadling))]
    InvalidTreadling {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error(
        "Dimension mismatch: loom expects {}x{}, warp is {}x{}, weft is {}x{}",
        .expected.0, .expected.1, .warp.0, .warp.1, .weft.0, .weft.1
    )]
    #[diagnostic(
        code(weaver::dimension_mismatch),
        help("Build the warp and weft with the same thread width, ends and shots")
    )]
    DimensionMismatch {
        expected: (usize, usize),
        warp: (usize, usize),
        weft: (usize, usize),
    },

    #[error("Invalid stencil: {background_regions} background regions")]
    #[diagnostic(
        code(weaver::invalid_stencil),
        help("Every white island must connect to the background before it can be cut")
    )]
    InvalidStencil { background_regions: usize },
}

impl WeaveError {
    pub(crate) fn invalid_spec(message: impl Into<String>) -> Self {
        WeaveError::InvalidSpec {
            message: message.into(),
            help: None,
        }
    }

    pub(crate) fn invalid_treadling(message: impl Into<String>) -> Self {
        WeaveError::InvalidTreadling {
            message: message.into(),
            help: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, WeaveError>;
