use thiserror::Error;

pub type FixResult<T> = Result<T, FixError>;

#[derive(Error, Debug)]
pub enum FixError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Report error: {0}")]
    Report(#[from] serde_json::Error),
}
