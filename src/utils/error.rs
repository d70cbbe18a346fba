use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuideError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("{message}")]
    DemoError { message: String },
}

pub type Result<T> = std::result::Result<T, GuideError>;
