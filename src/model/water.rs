use glam::Vec3;
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use crate::config::WaterConfig;

/// Height offset of the water surface at a grid cell.
pub trait HeightField {
    fn height_at(&self, x: usize, y: usize) -> f32;
}

/// Fractal Perlin noise sampled at scaled grid coordinates.
pub struct PerlinHeightField {
    fbm: Fbm<Perlin>,
    scale: f64,
    amplitude: f32,
}

impl PerlinHeightField {
    pub fn new(config: &WaterConfig) -> Self {
        Self {
            fbm: Fbm::<Perlin>::new(config.noise_seed).set_octaves(config.noise_octaves),
            scale: config.noise_scale,
            amplitude: config.noise_amplitude,
        }
    }
}

impl HeightField for PerlinHeightField {
    fn height_at(&self, x: usize, y: usize) -> f32 {
        let sample = self.fbm.get([x as f64 * self.scale, y as f64 * self.scale]);
        sample as f32 * self.amplitude
    }
}

/// State of the water demo, owned by its scene and advanced once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    pub boat_x: usize,
    pub boat_y: usize,
    pub time_step: f32,
}

impl SimulationState {
    /// Boat in the middle of a `grid_size`² grid, clock at zero.
    pub fn new(grid_size: usize) -> Self {
        Self {
            boat_x: grid_size / 2,
            boat_y: grid_size / 2,
            time_step: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.time_step += dt;
    }
}

/// A square grid of water cells whose heights come from a [`HeightField`].
pub struct WaterSurface<H: HeightField = PerlinHeightField> {
    config: WaterConfig,
    height_field: H,
}

impl WaterSurface<PerlinHeightField> {
    pub fn new(config: WaterConfig) -> Self {
        Self::with_height_field(config, PerlinHeightField::new(&config))
    }
}

impl<H: HeightField> WaterSurface<H> {
    pub fn with_height_field(config: WaterConfig, height_field: H) -> Self {
        Self { config, height_field }
    }

    pub fn config(&self) -> &WaterConfig {
        &self.config
    }

    /// Minimum corner of the cube drawn for cell `(x, y)`.
    pub fn cell_origin(&self, x: usize, y: usize) -> Vec3 {
        Vec3::new(
            x as f32 * self.config.voxel_size,
            y as f32 * self.config.voxel_size,
            self.config.water_level + self.height_field.height_at(x, y),
        )
    }

    /// Every cell's cube origin, sampled fresh on each call.
    pub fn cells(&self) -> impl Iterator<Item = Vec3> + '_ {
        let size = self.config.grid_size;
        (0..size).flat_map(move |x| (0..size).map(move |y| self.cell_origin(x, y)))
    }

    /// The boat floats `boat_lift` above the water at its cell.
    pub fn boat_origin(&self, state: &SimulationState) -> Vec3 {
        self.cell_origin(state.boat_x, state.boat_y) + Vec3::new(0.0, 0.0, self.config.boat_lift)
    }
}
