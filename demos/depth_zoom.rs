//! Drag vertically with the left mouse button to change the field of view while the plane through
//! the origin keeps its size on screen.

use bevy::prelude::*;
use bevy_depth_zoom::prelude::*;

fn main() {
    App::new()
        .add_plugins((DefaultPlugins, DefaultDepthZoomPlugins))
        .add_systems(Startup, (setup_camera, setup_scene))
        .add_systems(Update, reset_zoom)
        .run();
}

fn setup_camera(mut commands: Commands) {
    let limits = FovLimits::new(2.0, 60.0).expect("limits are ordered and within (0, 180)");
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 0.0, 3.0).looking_at(Vec3::ZERO, Vec3::Y),
        DepthZoom::new(limits)
            .expect("limits are valid")
            .with_target(Vec3::ZERO),
    ));
}

fn reset_zoom(
    keys: Res<ButtonInput<KeyCode>>,
    cam: Query<Entity, With<DepthZoom>>,
    mut zoom: EventWriter<DepthZoomTrigger>,
) {
    if keys.just_pressed(KeyCode::KeyR) {
        for camera in &cam {
            zoom.send(DepthZoomTrigger {
                camera,
                hint_point: None,
                fov: FovChange::To(45.0),
            });
        }
    }
}

//
// --- The below code is not important for the example ---
//

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Cuboid::from_size(Vec3::splat(0.3)));
    let material = materials.add(Color::srgb(0.8, 0.8, 0.8));

    let corners = [-1.0, 1.0]
        .into_iter()
        .flat_map(|x| [-1.0, 1.0].into_iter().map(move |y| (x, y)))
        .flat_map(|(x, y)| [-1.0, 1.0].into_iter().map(move |z| Vec3::new(x, y, z)));
    let axes = [Vec3::X, Vec3::Y, Vec3::Z]
        .into_iter()
        .flat_map(|axis| [axis, -axis]);

    for position in std::iter::once(Vec3::ZERO).chain(corners).chain(axes) {
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(position),
        ));
    }

    commands.spawn((
        DirectionalLight::default(),
        Transform::from_xyz(1.0, 2.0, 3.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        Text::new("Left Mouse Drag - Depth zoom\nR - Reset field of view"),
        Node {
            margin: UiRect::all(Val::Px(20.0)),
            ..Default::default()
        },
    ));
}
