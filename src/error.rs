pub type Result<T> = std::result::Result<T, DuskfallError>;

/// Errors from the collaborators around the renderer. Rendering itself
/// cannot fail.
#[derive(thiserror::Error, Debug)]
pub enum DuskfallError {
    #[error("invalid size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("display error: {0}")]
    Display(String),

    #[error("feature disabled: {0}")]
    FeatureDisabled(&'static str),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DuskfallError {
    pub fn display(msg: impl Into<String>) -> Self {
        Self::Display(msg.into())
    }
}
