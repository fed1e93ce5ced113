use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OrbError {
    #[error("viewport dimensions must be finite and positive, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
    #[error("device pixel ratio must be finite and positive, got {0}")]
    InvalidPixelRatio(f64),
}
