use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error in {path}: {message}")]
    Config { path: String, message: String },

    #[error("Invalid profile: {message}")]
    InvalidProfile { message: String },

    #[error("Layout error: {0}")]
    Layout(#[from] taffy::TaffyError),

    #[error("Terminal error: {message}")]
    Terminal { message: String },
}

impl FolioError {
    pub fn invalid_profile(message: impl Into<String>) -> Self {
        Self::InvalidProfile {
            message: message.into(),
        }
    }

    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
