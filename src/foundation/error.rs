use crate::overlay::layers::OverlayKind;

/// Result alias used across the crate.
pub type WrapResult<T> = Result<T, WrapError>;

/// Error taxonomy of the wrap compositor.
///
/// None of these are fatal to the host process: every failing operation leaves the design
/// surface in its last-good state.
#[derive(thiserror::Error, Debug)]
pub enum WrapError {
    /// Unknown product size key or invalid session configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The design surface could not render a snapshot.
    #[error("snapshot failure: {0}")]
    Snapshot(String),

    /// An overlay layer was composited before it was attached to the surface.
    #[error("overlay uninitialized: {0}")]
    OverlayUninitialized(OverlayKind),

    /// Invalid caller input (DPI, border width, buffer shape).
    #[error("validation error: {0}")]
    Validation(String),

    /// Raster allocation or rasterization failure.
    #[error("raster error: {0}")]
    Raster(String),

    /// IO and decoding failures at the edges.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WrapError {
    /// Build a [`WrapError::Configuration`].
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`WrapError::Snapshot`].
    pub fn snapshot(msg: impl Into<String>) -> Self {
        Self::Snapshot(msg.into())
    }

    /// Build a [`WrapError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WrapError::Raster`].
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
