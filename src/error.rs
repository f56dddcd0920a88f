//! Error types for depth zooming.
//!
//! Every variant is a contract violation by the caller. Finite out of range field of view requests
//! are not errors, they are clamped.

use thiserror::Error;

/// Result type alias using [`DepthZoomError`].
pub type Result<T> = std::result::Result<T, DepthZoomError>;

/// Errors that can occur while computing a depth zoom step.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DepthZoomError {
    /// The field of view limits are not ordered, or fall outside of `(0, 180)` degrees.
    #[error("invalid field of view limits ({lower}°, {upper}°): need 0 < lower < upper < 180")]
    InvalidConfiguration {
        /// The configured lower bound, in degrees.
        lower: f64,
        /// The configured upper bound, in degrees.
        upper: f64,
    },

    /// The camera position and the far point of its view ray coincide, so there is no view
    /// direction.
    #[error("degenerate view ray: camera position and ray far point coincide")]
    DegenerateRay,

    /// The requested field of view or hint point is NaN or infinite.
    #[error("non-finite depth zoom request: fov {desired_fov_degrees}°, hint {hint_point}")]
    NonFiniteRequest {
        /// The requested field of view, in degrees.
        desired_fov_degrees: f64,
        /// The requested hint point.
        hint_point: bevy_math::DVec3,
    },

    /// No camera state was supplied, e.g. the target entity has no transform or projection.
    #[error("no camera state available to zoom")]
    MissingCameraState,
}
