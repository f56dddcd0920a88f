//! A dolly zoom ("depth zoom") camera control for Bevy.
//!
//! Changing the field of view of a camera normally makes everything on screen grow or shrink.
//! Depth zoom also moves the camera along its view ray, so the plane through an anchor point keeps
//! the same size on screen while the perspective around it stretches or flattens.
//!
//! Narrowing all the way to the lower field of view limit switches the camera to an orthographic
//! projection sized to match the anchor plane. Widening again returns it to perspective at the
//! lower limit, then continues from there on the next step.
//!
//! # Usage
//!
//! Add [`DefaultDepthZoomPlugins`] to your app, and a [`DepthZoom`](prelude::DepthZoom) component
//! to any camera you want to control. Drag vertically with the left mouse button to zoom, or send
//! a [`DepthZoomTrigger`](prelude::DepthZoomTrigger) yourself.
//!
//! The math is also usable on its own, without an ECS world, through
//! [`depth_zoom`](prelude::depth_zoom) and [`CameraState`](prelude::CameraState).

pub mod controller;
pub mod error;
pub mod extensions;
pub mod input;

/// Common imports.
pub mod prelude {
    pub use crate::{
        controller::{
            anchor::AnchorResult,
            camera::{depth_zoom, CameraState, ZoomOutcome, ZoomRequest},
            component::{DepthZoom, DepthZoomTrigger, FovChange},
            projections::ProjectionMode,
            zoom::FovLimits,
            DepthZoomPlugin,
        },
        error::DepthZoomError,
        input::{DepthZoomInput, DepthZoomInputPlugin},
        DefaultDepthZoomPlugins,
    };
}

use bevy_app::{PluginGroup, PluginGroupBuilder};

/// Adds the depth zoom controller, mouse drag input, and enabled extensions.
pub struct DefaultDepthZoomPlugins;

impl PluginGroup for DefaultDepthZoomPlugins {
    #[allow(clippy::let_and_return)]
    fn build(self) -> PluginGroupBuilder {
        let group = PluginGroupBuilder::start::<Self>()
            .add(controller::DepthZoomPlugin)
            .add(input::DepthZoomInputPlugin);

        #[cfg(feature = "extension_anchor_indicator")]
        let group = group.add(extensions::anchor_indicator::AnchorIndicatorPlugin);

        group
    }
}
