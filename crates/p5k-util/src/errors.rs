use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all p5k operations.
#[derive(Debug, Error, Diagnostic)]
pub enum P5kError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed project configuration (`p5k.toml`).
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check your p5k.toml for syntax errors"))]
    Config { message: String },

    /// The build collaborator failed to produce the requested artifact.
    #[error("Build failed: {message}")]
    #[diagnostic(help("Re-run with --verbose to see the builder output"))]
    Build { message: String },

    /// The emulator (or any other launched program) could not be started.
    #[error("Launch failed: {message}")]
    #[diagnostic(help("Make sure the program is installed and on your PATH"))]
    Launch { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type P5kResult<T> = miette::Result<T>;
