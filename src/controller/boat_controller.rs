use tracing::trace;

use super::input::Key;
use crate::model::SimulationState;

/// Moves the boat one cell per arrow press, clamped to the grid.
pub struct BoatController {
    pub grid_size: usize,
}

impl BoatController {
    pub fn new(grid_size: usize) -> Self {
        Self { grid_size }
    }

    /// Applies one key press. Returns `false` for keys this scheme ignores.
    pub fn apply_key(&self, state: &mut SimulationState, key: Key) -> bool {
        let max = self.grid_size.saturating_sub(1);
        match key {
            Key::Up => state.boat_y = (state.boat_y + 1).min(max),
            Key::Down => state.boat_y = state.boat_y.saturating_sub(1),
            Key::Left => state.boat_x = state.boat_x.saturating_sub(1),
            Key::Right => state.boat_x = (state.boat_x + 1).min(max),
            _ => return false,
        }
        trace!(?key, x = state.boat_x, y = state.boat_y, "boat");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_at_edge_is_clamped() {
        let controller = BoatController::new(20);
        let mut state = SimulationState { boat_x: 0, boat_y: 5, time_step: 0.0 };

        assert!(controller.apply_key(&mut state, Key::Left));
        assert_eq!((state.boat_x, state.boat_y), (0, 5));

        state.boat_y = 0;
        controller.apply_key(&mut state, Key::Down);
        assert_eq!(state.boat_y, 0);
    }

    #[test]
    fn test_upper_edge_is_clamped() {
        let controller = BoatController::new(20);
        let mut state = SimulationState::new(20);

        for _ in 0..50 {
            controller.apply_key(&mut state, Key::Right);
            controller.apply_key(&mut state, Key::Up);
        }
        assert_eq!((state.boat_x, state.boat_y), (19, 19));
    }

    #[test]
    fn test_moves_one_cell_per_press() {
        let controller = BoatController::new(20);
        let mut state = SimulationState::new(20);

        controller.apply_key(&mut state, Key::Right);
        controller.apply_key(&mut state, Key::Right);
        controller.apply_key(&mut state, Key::Down);
        assert_eq!((state.boat_x, state.boat_y), (12, 9));
    }

    #[test]
    fn test_camera_keys_are_ignored() {
        let controller = BoatController::new(20);
        let mut state = SimulationState::new(20);
        let before = state;

        for key in [Key::W, Key::S, Key::A, Key::D, Key::Q, Key::E] {
            assert!(!controller.apply_key(&mut state, key));
        }
        assert_eq!(state, before);
    }
}
