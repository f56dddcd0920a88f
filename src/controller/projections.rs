//! The projection mode state machine.
//!
//! The camera is orthographic only while its field of view sits at the lower limit. Narrowing to
//! the lower limit enters orthographic, and any widening request leaves it, landing back on the
//! lower limit in perspective.

use bevy_reflect::Reflect;

/// The projection a [`CameraState`](super::camera::CameraState) is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum ProjectionMode {
    /// Perspective projection, parameterized by field of view.
    Perspective,
    /// Orthographic projection, parameterized by scale.
    Orthographic,
}

impl ProjectionMode {
    /// Projection mode from an orthographic flag.
    pub fn from_orthographic(is_orthographic: bool) -> Self {
        if is_orthographic {
            Self::Orthographic
        } else {
            Self::Perspective
        }
    }

    /// Pick the update path for a change of `camera_move` degrees, the clamped request minus the
    /// current field of view.
    pub fn select_path(self, camera_move: f64) -> ZoomPath {
        match self {
            Self::Perspective => ZoomPath::Dolly,
            Self::Orthographic if camera_move > 0.0 => ZoomPath::LeaveOrthographic,
            // Narrowing requests clamp to the lower bound, so the move is zero.
            Self::Orthographic => ZoomPath::Hold,
        }
    }
}

/// One of the three ways a depth zoom step can update the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomPath {
    /// Perspective dolly zoom to the clamped field of view. Enters orthographic when the clamped
    /// field of view is the lower limit.
    Dolly,
    /// Return to perspective at the lower limit, placing the camera from the orthographic scale.
    /// The requested wider angle is not applied until the next step.
    LeaveOrthographic,
    /// Leave the camera unchanged.
    Hold,
}
