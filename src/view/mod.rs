// VIEW: geometry emission and the wgpu backend
pub mod gpu_init;
pub mod mesh;
pub mod render;
pub mod renderer;

pub use gpu_init::GpuContext;
pub use mesh::{Mesh, Vertex};
pub use render::FrameRenderer;
pub use renderer::{draw_chunk, draw_world, emit_cube, QuadSink};
