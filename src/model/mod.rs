// MODEL: world data, camera and simulation state
pub mod block;
pub mod camera;
pub mod chunk;
pub mod coords;
pub mod generator;
pub mod water;
pub mod world;

pub use block::{color_of, BlockKind, Color};
pub use camera::{CameraState, Projection};
pub use chunk::{Chunk, CHUNK_SIZE};
pub use coords::{BlockCoord, ChunkCoord, WorldCoord};
pub use generator::{ChunkSource, LatticeGenerator, PaintPass};
pub use water::{HeightField, PerlinHeightField, SimulationState, WaterSurface};
pub use world::World;
