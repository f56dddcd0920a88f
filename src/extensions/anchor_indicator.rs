//! A `bevy_depth_zoom` extension that draws a cross in the scene at the location of the anchor.
//! This makes it obvious which plane the camera is holding at a constant size while zooming.

use bevy_app::prelude::*;
use bevy_color::Color;
use bevy_ecs::prelude::*;
use bevy_gizmos::prelude::*;
use bevy_math::prelude::*;
use bevy_reflect::prelude::*;
use bevy_render::prelude::*;
use bevy_transform::{prelude::*, TransformSystem};

use crate::controller::distance::height_from_distance;
use crate::prelude::*;

/// See the [module](self) docs.
pub struct AnchorIndicatorPlugin;

impl Plugin for AnchorIndicatorPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PostUpdate,
            draw_anchor.after(TransformSystem::TransformPropagate),
        )
        .register_type::<AnchorIndicator>();
    }
}

/// Optional. Configures whether or not a [`DepthZoom`] camera should show an anchor indicator.
/// The indicator will be enabled if this component is not present.
#[derive(Debug, Component, Reflect)]
pub struct AnchorIndicator {
    /// Should the indicator be visible on this camera?
    pub enabled: bool,
}

impl Default for AnchorIndicator {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Size of the cross arms, as a fraction of the view's half height at the anchor.
const ARM_FRACTION: f32 = 0.05;

/// Use gizmos to draw the last anchor in world space.
pub fn draw_anchor(
    cameras: Query<(
        &DepthZoom,
        &Projection,
        &GlobalTransform,
        Option<&AnchorIndicator>,
    )>,
    mut gizmos: Gizmos,
) {
    for (depth_zoom, projection, cam_transform, _) in cameras
        .iter()
        .filter(|(.., anchor_indicator)| anchor_indicator.map(|a| a.enabled).unwrap_or(true))
    {
        let Some(anchor_world) = depth_zoom.last_anchor else {
            continue;
        };
        let anchor_world = anchor_world.as_vec3();
        let half_height = match projection {
            Projection::Perspective(perspective) => height_from_distance(
                perspective.fov as f64 * 0.5,
                cam_transform.translation().distance(anchor_world) as f64,
            ) as f32,
            Projection::Orthographic(ortho) => ortho.area.height() / 2.0,
        };
        let arm = half_height * ARM_FRACTION;

        let color = Color::WHITE;
        for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
            gizmos.line(anchor_world - axis * arm, anchor_world + axis * arm, color);
        }
    }
}
