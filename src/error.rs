use std::io;

use thiserror::Error;

pub type PrintResult<T> = Result<T, PrintError>;

#[derive(Error, Debug)]
pub enum PrintError {
    #[error("IO error occurred")]
    IoError(#[from] io::Error),

    #[error("Invalid charset name: {0}")]
    InvalidCharset(String),
}
