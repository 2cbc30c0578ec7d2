use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Could not read word list: {}", .0)]
    Io(#[from] std::io::Error),

    #[error("Invalid word list line {line}: {reason}")]
    InvalidArgument { line: usize, reason: String },
}
