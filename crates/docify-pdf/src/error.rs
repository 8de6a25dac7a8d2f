use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No commits to generate PDF!")]
    EmptyCommitList,

    #[error("Failed to write PDF: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to render PDF: {0}")]
    Render(String),
}
