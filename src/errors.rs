use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing the contact book: {0}")]
    Io(#[from] std::io::Error),

    #[error("Contact book is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Could not generate a unique id after {0} attempts")]
    IdExhausted(usize),
}
