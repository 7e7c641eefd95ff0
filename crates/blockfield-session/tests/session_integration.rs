//! End-to-end session tests over the generated default world.

use blockfield_core::{BlockType, GridCoord};
use blockfield_input::{CursorMode, InputManager, KeyCode, MouseButton};
use blockfield_physics::raycast;
use blockfield_session::{controls, EditEvent, SessionConfig, WorldSession};
use blockfield_world::TerrainGenerator;
use glam::Vec3;

const DT: f32 = 1.0 / 60.0;

fn default_session() -> WorldSession {
    WorldSession::new(SessionConfig::default()).expect("default config is valid")
}

#[test]
fn generated_world_matches_heightmap() {
    let session = default_session();
    let generator = TerrainGenerator::new(SessionConfig::default().terrain);

    let expected: usize = (0..40)
        .flat_map(|x| (0..40).map(move |z| (x, z)))
        .map(|(x, z)| usize::try_from(generator.height_at(x, z)).unwrap())
        .sum();
    assert_eq!(session.store().len(), expected);

    for x in 0..40 {
        for z in 0..40 {
            let h = generator.height_at(x, z);
            assert_eq!(
                session.store().get(GridCoord::new(x, h - 1, z)),
                Some(BlockType::Grass)
            );
            assert_eq!(session.store().get(GridCoord::new(x, h, z)), None);
        }
    }
}

#[test]
fn player_falls_to_ground_and_jumps() {
    let mut session = default_session();
    let mut input = InputManager::with_actions(controls::default_actions());

    for _ in 0..120 {
        controls::drive_frame(&mut session, &mut input, DT);
    }
    assert!(session.player().is_grounded());
    assert_eq!(session.player().state().position.y, 10.0);

    input.keyboard_mut().press(KeyCode::Space);
    controls::drive_frame(&mut session, &mut input, DT);
    controls::drive_frame(&mut session, &mut input, DT);
    assert!(session.player().state().position.y > 10.0);
}

#[test]
fn dig_and_build_from_above() {
    let mut session = default_session();
    let events = session.subscribe();
    let generator = TerrainGenerator::new(SessionConfig::default().terrain);
    let h = generator.height_at(3, 3);
    let eye = Vec3::new(3.0, 20.0, 3.0);

    let removed = session.handle_click(MouseButton::Left, eye, Vec3::NEG_Y, BlockType::Grass);
    assert_eq!(removed, Some(EditEvent::Removed(GridCoord::new(3, h - 1, 3))));

    let placed = session.handle_click(MouseButton::Right, eye, Vec3::NEG_Y, BlockType::Wood);
    assert_eq!(
        placed,
        Some(EditEvent::Added(GridCoord::new(3, h - 1, 3), BlockType::Wood))
    );

    let placed = session.handle_click(MouseButton::Right, eye, Vec3::NEG_Y, BlockType::Stone);
    assert_eq!(
        placed,
        Some(EditEvent::Added(GridCoord::new(3, h, 3), BlockType::Stone))
    );

    let received: Vec<_> = events.try_iter().collect();
    assert_eq!(received.len(), 3);
    assert_eq!(Some(received[2]), placed);
}

#[test]
fn scripted_frames_edit_where_the_player_looks() {
    let mut session = default_session();
    let mut input = InputManager::with_actions(controls::default_actions());
    input.set_cursor_mode(CursorMode::Locked);

    // Settle on the ground, then look straight down.
    for _ in 0..120 {
        controls::drive_frame(&mut session, &mut input, DT);
    }
    input.mouse_mut().add_raw_motion(0.0, 10_000.0);
    controls::drive_frame(&mut session, &mut input, DT);
    let state = *session.player().state();
    assert!(state.look_direction().y < -0.99);

    let target = raycast(session.store(), &state.eye_ray(), None)
        .expect("terrain below the player")
        .adjacent();
    input.keyboard_mut().press(KeyCode::Digit2);
    input.mouse_mut().press(MouseButton::Right);
    let edits = controls::drive_frame(&mut session, &mut input, DT);

    assert_eq!(edits, vec![EditEvent::Added(target, BlockType::Dirt)]);
    assert!(target.y < GridCoord::containing(state.position).y);
    assert_eq!(session.store().get(target), Some(BlockType::Dirt));
}
