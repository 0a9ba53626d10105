use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum GrogError {
    #[error("failed to write {path}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("grog needs an interactive terminal (stdin and stdout must be a tty)")]
    NotATerminal,

    #[error("prompt error: {message}")]
    Prompt { message: String },

    #[error("validation error: {message}")]
    Validation { message: String },

    #[error("cancelled")]
    Cancelled,
}
