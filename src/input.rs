//! Default input handling: vertical mouse drags become depth zoom steps.

use bevy_app::prelude::*;
use bevy_ecs::prelude::*;
use bevy_input::{
    mouse::{MouseButton, MouseMotion},
    ButtonInput, InputSystem,
};
use bevy_math::prelude::*;
use bevy_reflect::prelude::*;

use crate::controller::component::{DepthZoom, DepthZoomTrigger, FovChange};

/// Sends a [`DepthZoomTrigger`] to every [`DepthZoom`] camera while the configured mouse button
/// is dragged vertically.
pub struct DepthZoomInputPlugin;

impl Plugin for DepthZoomInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DepthZoomInput>()
            .register_type::<DepthZoomInput>()
            .add_systems(
                PreUpdate,
                DepthZoomInput::send_triggers.after(InputSystem),
            );
    }
}

/// Settings for the default drag gesture.
#[derive(Debug, Clone, Resource, Reflect)]
pub struct DepthZoomInput {
    /// Is the drag gesture active?
    pub enabled: bool,
    /// The mouse button that must be held to zoom.
    pub button: MouseButton,
    /// Degrees of field of view per logical pixel of vertical drag. Dragging up narrows the field
    /// of view, dragging down widens it.
    pub sensitivity: f64,
}

impl Default for DepthZoomInput {
    fn default() -> Self {
        Self {
            enabled: true,
            button: MouseButton::Left,
            sensitivity: 0.01,
        }
    }
}

impl DepthZoomInput {
    /// The field of view change, in degrees, for a drag of `drag` pixels. Screen y grows downward.
    pub fn fov_delta(&self, drag: Vec2) -> f64 {
        drag.y as f64 * self.sensitivity
    }

    fn send_triggers(
        input: Res<Self>,
        buttons: Res<ButtonInput<MouseButton>>,
        mut motion: EventReader<MouseMotion>,
        cameras: Query<Entity, With<DepthZoom>>,
        mut triggers: EventWriter<DepthZoomTrigger>,
    ) {
        let drag: Vec2 = motion.read().map(|event| event.delta).sum();
        if !input.enabled || !buttons.pressed(input.button) || drag.y == 0.0 {
            return;
        }
        let fov = FovChange::By(input.fov_delta(drag));
        for camera in &cameras {
            triggers.send(DepthZoomTrigger {
                camera,
                hint_point: None,
                fov,
            });
        }
    }
}
