use glam::{Mat4, Vec3};

use crate::config::{ControlConfig, WaterConfig, WorldConfig};
use crate::controller::{BoatController, CameraController, Key, Scene};
use crate::model::{
    CameraState, ChunkSource, Color, HeightField, LatticeGenerator, PerlinHeightField,
    SimulationState, WaterSurface, World, CHUNK_SIZE,
};
use crate::view::{draw_world, emit_cube, QuadSink};

/// Eagerly generated chunk world under a free camera.
pub struct ChunkWorldScene<G: ChunkSource = LatticeGenerator> {
    world: World<G>,
    camera: CameraState,
    controller: CameraController,
    eye_distance: f32,
}

impl ChunkWorldScene<LatticeGenerator> {
    pub fn new(world_config: &WorldConfig, control: &ControlConfig) -> Self {
        Self::with_world(World::from_config(world_config), world_config, control)
    }
}

impl<G: ChunkSource> ChunkWorldScene<G> {
    /// Starts looking down at the middle of the world's ground level from
    /// outside the world.
    pub fn with_world(world: World<G>, world_config: &WorldConfig, control: &ControlConfig) -> Self {
        let extent = (world_config.world_size * CHUNK_SIZE) as f32;
        let ground = world_config.generation.ground_level as f32;
        let camera = CameraState::new(
            30.0,
            -60.0,
            Vec3::new(-extent / 2.0, -extent / 2.0, -ground),
        );

        Self {
            world,
            camera,
            controller: CameraController::new(control),
            eye_distance: extent * 1.5,
        }
    }

    pub fn world(&self) -> &World<G> {
        &self.world
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }
}

impl<G: ChunkSource> Scene for ChunkWorldScene<G> {
    fn handle_key(&mut self, key: Key) {
        self.controller.apply_key(&mut self.camera, key);
    }

    fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -self.eye_distance)) * self.camera.view()
    }

    fn draw(&self, sink: &mut dyn QuadSink) {
        draw_world(sink, &self.world);
    }
}

const WATER_COLOR: Color = [0.0, 0.0, 1.0];
const BOAT_COLOR: Color = [0.7, 0.3, 0.0];

/// Noise-perturbed water grid with a boat steered by the arrow keys.
pub struct WaterScene<H: HeightField = PerlinHeightField> {
    surface: WaterSurface<H>,
    state: SimulationState,
    controller: BoatController,
}

impl WaterScene<PerlinHeightField> {
    pub fn new(config: WaterConfig) -> Self {
        Self::with_surface(WaterSurface::new(config))
    }
}

impl<H: HeightField> WaterScene<H> {
    pub fn with_surface(surface: WaterSurface<H>) -> Self {
        let grid_size = surface.config().grid_size;
        Self {
            surface,
            state: SimulationState::new(grid_size),
            controller: BoatController::new(grid_size),
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }
}

impl<H: HeightField> Scene for WaterScene<H> {
    fn handle_key(&mut self, key: Key) {
        self.controller.apply_key(&mut self.state, key);
    }

    fn advance(&mut self) {
        self.state.advance(self.surface.config().time_increment);
    }

    // fixed camera above the grid looking straight down
    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(Vec3::new(5.0, 5.0, 5.0), Vec3::new(5.0, 5.0, 0.0), Vec3::Y)
    }

    fn draw(&self, sink: &mut dyn QuadSink) {
        let size = self.surface.config().voxel_size;
        for origin in self.surface.cells() {
            emit_cube(sink, origin, size, WATER_COLOR);
        }
        emit_cube(sink, self.surface.boat_origin(&self.state), size, BOAT_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{FrameLoop, InputEvent, LoopControl};
    use crate::view::Mesh;

    struct Flat;

    impl HeightField for Flat {
        fn height_at(&self, _x: usize, _y: usize) -> f32 {
            0.0
        }
    }

    #[test]
    fn test_chunk_world_frame_draws_every_block() {
        let scene = ChunkWorldScene::new(&WorldConfig::default(), &ControlConfig::default());
        let solid = scene.world().solid_count();
        let mut frame_loop = FrameLoop::new(scene);
        let mut mesh = Mesh::empty();

        assert_eq!(frame_loop.step(Vec::new(), &mut mesh), LoopControl::Continue);
        assert_eq!(mesh.quad_count(), solid * 6);
        assert_eq!(mesh.vertices.len(), solid * 24);

        // the geometry is static, a second frame redraws the same amount
        frame_loop.step(Vec::new(), &mut mesh);
        assert_eq!(mesh.vertices.len(), solid * 24);
    }

    #[test]
    fn test_chunk_world_keys_move_the_view() {
        let mut scene = ChunkWorldScene::new(&WorldConfig::default(), &ControlConfig::default());
        let before = scene.view_matrix();
        let yaw = scene.camera().yaw;

        scene.handle_key(Key::Right);
        assert_eq!(scene.camera().yaw, yaw + ControlConfig::default().rotate_speed);
        assert!(!scene.view_matrix().abs_diff_eq(before, 1e-6));
    }

    #[test]
    fn test_world_center_is_in_front_of_the_camera() {
        let config = WorldConfig::default();
        let scene = ChunkWorldScene::new(&config, &ControlConfig::default());
        let extent = (config.world_size * CHUNK_SIZE) as f32;
        let center = Vec3::new(extent / 2.0, extent / 2.0, config.generation.ground_level as f32);

        let eye_space = scene.view_matrix().transform_point3(center);
        assert!(eye_space.z < 0.0, "center is behind the camera: {:?}", eye_space);
    }

    #[test]
    fn test_water_frame_draws_grid_and_boat() {
        let config = WaterConfig { grid_size: 4, ..WaterConfig::default() };
        let scene = WaterScene::with_surface(WaterSurface::with_height_field(config, Flat));
        let mut frame_loop = FrameLoop::new(scene);
        let mut mesh = Mesh::empty();

        frame_loop.step([InputEvent::KeyDown(Key::Left)], &mut mesh);

        assert_eq!(mesh.quad_count(), (16 + 1) * 6);
        let boat = frame_loop.scene().state();
        assert_eq!((boat.boat_x, boat.boat_y), (1, 2));
        assert!((boat.time_step - config.time_increment).abs() < 1e-6);

        let boat_vertex = mesh.vertices.last().map(|v| v.color);
        assert_eq!(boat_vertex, Some(BOAT_COLOR));
    }

    #[test]
    fn test_water_camera_looks_down_at_the_grid() {
        let scene = WaterScene::with_surface(WaterSurface::with_height_field(WaterConfig::default(), Flat));
        let eye_space = scene.view_matrix().transform_point3(Vec3::new(5.0, 5.0, -2.0));
        assert!(eye_space.truncate().length() < 1e-5);
        assert!((eye_space.z + 7.0).abs() < 1e-5);
    }
}
