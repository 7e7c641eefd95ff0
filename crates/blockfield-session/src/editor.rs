//! Click-driven block editing.

use blockfield_core::{BlockType, Error, GridCoord, Ray};
use blockfield_input::MouseButton;
use blockfield_physics::raycast;
use blockfield_world::SpatialBlockStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A change applied to the block store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditEvent {
    /// A block of the given type now occupies the cell.
    Added(GridCoord, BlockType),
    /// The cell is now empty.
    Removed(GridCoord),
}

impl EditEvent {
    /// Cell the edit applies to.
    #[must_use]
    pub const fn coord(&self) -> GridCoord {
        match *self {
            Self::Added(coord, _) | Self::Removed(coord) => coord,
        }
    }
}

/// Applies removals and placements at the block a ray points at.
///
/// Every operation is a no-op when the ray hits nothing within range.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WorldEditor {
    pick_range: Option<f32>,
}

impl WorldEditor {
    /// Create an editor that only reaches blocks within `pick_range`.
    #[must_use]
    pub const fn new(pick_range: Option<f32>) -> Self {
        Self { pick_range }
    }

    /// Maximum editing distance.
    #[must_use]
    pub const fn pick_range(&self) -> Option<f32> {
        self.pick_range
    }

    /// Remove the block the ray hits first.
    pub fn remove_block(&self, store: &mut SpatialBlockStore, ray: &Ray) -> Option<EditEvent> {
        let hit = raycast(store, ray, self.pick_range)?;
        store.remove(hit.coord)?;
        debug!(coord = ?hit.coord, block = %hit.block, "Removed block");
        Some(EditEvent::Removed(hit.coord))
    }

    /// Place a block against the face the ray hits first.
    ///
    /// The new block goes in the cell touching the hit face. An occupied
    /// target leaves the store untouched.
    pub fn place_block(
        &self,
        store: &mut SpatialBlockStore,
        ray: &Ray,
        block: BlockType,
    ) -> Option<EditEvent> {
        let hit = raycast(store, ray, self.pick_range)?;
        let target = hit.adjacent();
        match store.set(target, block) {
            Ok(()) => {
                debug!(coord = ?target, %block, "Placed block");
                Some(EditEvent::Added(target, block))
            }
            Err(Error::OccupiedCell(coord)) => {
                debug!(?coord, "Placement target occupied, ignoring");
                None
            }
            Err(err) => {
                debug!(%err, "Placement failed");
                None
            }
        }
    }

    /// Dispatch a click: left removes, right places, anything else is ignored.
    pub fn apply_click(
        &self,
        store: &mut SpatialBlockStore,
        button: MouseButton,
        ray: &Ray,
        selected: BlockType,
    ) -> Option<EditEvent> {
        match button {
            MouseButton::Left => self.remove_block(store, ray),
            MouseButton::Right => self.place_block(store, ray, selected),
            other => {
                debug!(button = ?other, "Ignoring click");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn column_store() -> SpatialBlockStore {
        let mut store = SpatialBlockStore::new();
        for y in 0..=4 {
            store.set(GridCoord::new(3, y, 3), BlockType::Stone).unwrap();
        }
        store
    }

    fn down_ray() -> Ray {
        Ray::new(Vec3::new(3.0, 10.0, 3.0), Vec3::NEG_Y)
    }

    #[test]
    fn place_on_top_face() {
        let mut store = column_store();
        let editor = WorldEditor::default();

        let event = editor.place_block(&mut store, &down_ray(), BlockType::Wood);
        assert_eq!(
            event,
            Some(EditEvent::Added(GridCoord::new(3, 5, 3), BlockType::Wood))
        );
        assert_eq!(store.get(GridCoord::new(3, 5, 3)), Some(BlockType::Wood));
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn remove_top_block() {
        let mut store = column_store();
        let editor = WorldEditor::default();

        let event = editor.remove_block(&mut store, &down_ray());
        assert_eq!(event, Some(EditEvent::Removed(GridCoord::new(3, 4, 3))));
        assert!(!store.contains(GridCoord::new(3, 4, 3)));

        // The next removal digs one deeper.
        let event = editor.remove_block(&mut store, &down_ray());
        assert_eq!(event, Some(EditEvent::Removed(GridCoord::new(3, 3, 3))));
    }

    #[test]
    fn miss_is_noop() {
        let mut store = column_store();
        let editor = WorldEditor::default();
        let ray = Ray::new(Vec3::new(3.0, 10.0, 3.0), Vec3::Y);

        assert_eq!(editor.remove_block(&mut store, &ray), None);
        assert_eq!(editor.place_block(&mut store, &ray, BlockType::Dirt), None);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn out_of_range_is_noop() {
        let mut store = column_store();
        let editor = WorldEditor::new(Some(3.0));

        assert_eq!(editor.remove_block(&mut store, &down_ray()), None);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn occupied_target_is_noop() {
        let mut store = column_store();
        // Looking up from inside the column's base at the block above: the
        // hit face is the bottom of (3, 1, 3), whose neighbour is the origin
        // cell (3, 0, 3), already solid.
        let ray = Ray::new(Vec3::new(3.0, 0.0, 3.0), Vec3::Y);
        let editor = WorldEditor::default();

        assert_eq!(editor.place_block(&mut store, &ray, BlockType::Grass), None);
        assert_eq!(store.get(GridCoord::new(3, 0, 3)), Some(BlockType::Stone));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn click_dispatch() {
        let mut store = column_store();
        let editor = WorldEditor::default();
        let ray = down_ray();

        assert!(matches!(
            editor.apply_click(&mut store, MouseButton::Right, &ray, BlockType::Dirt),
            Some(EditEvent::Added(_, BlockType::Dirt))
        ));
        assert!(matches!(
            editor.apply_click(&mut store, MouseButton::Left, &ray, BlockType::Dirt),
            Some(EditEvent::Removed(_))
        ));
        assert_eq!(
            editor.apply_click(&mut store, MouseButton::Middle, &ray, BlockType::Dirt),
            None
        );
        assert_eq!(
            editor.apply_click(&mut store, MouseButton::Other(4), &ray, BlockType::Dirt),
            None
        );
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn event_coord() {
        let coord = GridCoord::new(1, 2, 3);
        assert_eq!(EditEvent::Removed(coord).coord(), coord);
        assert_eq!(EditEvent::Added(coord, BlockType::Stone).coord(), coord);
    }
}
