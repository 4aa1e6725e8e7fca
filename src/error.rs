use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Image decode error: {0}")]
    ImageDecode(#[from] png::DecodingError),

    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Engine error: {0}")]
    Engine(#[from] tone_engine::EngineError),

    #[error("Unknown shade: {0}")]
    UnknownShade(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<tone_engine::ImageError> for AppError {
    fn from(e: tone_engine::ImageError) -> Self {
        AppError::Engine(e.into())
    }
}

impl From<tone_engine::GuideError> for AppError {
    fn from(e: tone_engine::GuideError) -> Self {
        AppError::Engine(e.into())
    }
}

impl From<tone_engine::ParseColorError> for AppError {
    fn from(e: tone_engine::ParseColorError) -> Self {
        AppError::Engine(e.into())
    }
}
