//! Tuning constants for both demos, grouped by the component that reads them.
//!
//! Everything here is plain data with a `Default` impl; nothing is read from
//! disk or the command line.

/// Lattice terrain rule parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Stone fills every layer below this height; trunks sit on it.
    pub ground_level: isize,
    /// Lattice pitch of the vertical shafts punched through the stone.
    pub spacing: isize,
    /// Lattice pitch of the trees.
    pub tree_spacing: isize,
    /// Leaves occupy heights strictly between `ground_level` and `ground_level + leaf_band`.
    pub leaf_band: isize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            ground_level: 8,
            spacing: 4,
            tree_spacing: 8,
            leaf_band: 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldConfig {
    /// Chunks per axis; the world spans `[0, world_size)³` in chunk space.
    pub world_size: usize,
    pub generation: GenerationConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_size: 2,
            generation: GenerationConfig::default(),
        }
    }
}

/// Input sensitivity of the free camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlConfig {
    /// World units added to the translation per key press.
    pub move_speed: f32,
    /// Degrees added to yaw or pitch per key press.
    pub rotate_speed: f32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            move_speed: 1.0,
            rotate_speed: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterConfig {
    /// Cells per axis of the water surface and of the boat grid.
    pub grid_size: usize,
    /// Edge length of one drawn cube.
    pub voxel_size: f32,
    pub water_level: f32,
    /// Grid coordinates are multiplied by this before sampling the noise.
    pub noise_scale: f64,
    pub noise_amplitude: f32,
    pub noise_octaves: usize,
    pub noise_seed: u32,
    pub time_increment: f32,
    /// Height of the boat above the local water surface.
    pub boat_lift: f32,
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            voxel_size: 0.5,
            water_level: -2.0,
            noise_scale: 0.2,
            noise_amplitude: 0.5,
            noise_octaves: 4,
            noise_seed: 0,
            time_increment: 0.1,
            boat_lift: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub target_fps: u32,
    pub fov_y_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl WindowConfig {
    pub fn chunk_world() -> Self {
        Self {
            title: "chunkvox".to_string(),
            width: 800,
            height: 600,
            target_fps: 30,
            fov_y_degrees: 45.0,
            z_near: 0.1,
            z_far: 200.0,
        }
    }

    pub fn water_boat() -> Self {
        Self {
            title: "chunkvox - water".to_string(),
            z_far: 50.0,
            ..Self::chunk_world()
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::chunk_world()
    }
}
