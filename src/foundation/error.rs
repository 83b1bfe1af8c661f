pub type RepeaterResult<T> = Result<T, RepeaterError>;

/// Errors surfaced by the repeater.
///
/// Only [`RepeaterError::BadParameter`] can come out of a frame render; camera failures,
/// numeric degeneracies and cancellation are absorbed before they reach the caller.
#[derive(thiserror::Error, Debug)]
pub enum RepeaterError {
    /// Missing or out-of-bounds input; the frame is not drawn at all.
    #[error("bad parameter: {0}")]
    BadParameter(String),

    /// Camera query failure reported by a [`crate::CameraSource`].
    #[error("camera error: {0}")]
    Camera(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RepeaterError {
    pub fn bad_parameter(msg: impl Into<String>) -> Self {
        Self::BadParameter(msg.into())
    }

    pub fn camera(msg: impl Into<String>) -> Self {
        Self::Camera(msg.into())
    }

    /// `true` for errors that must abort a render before anything is drawn.
    pub fn is_bad_parameter(&self) -> bool {
        matches!(self, Self::BadParameter(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
