// CONTROLLER: input, camera/boat control and the frame loop
pub mod boat_controller;
pub mod camera_controller;
pub mod frame_loop;
pub mod input;

pub use boat_controller::BoatController;
pub use camera_controller::CameraController;
pub use frame_loop::{FrameLoop, FramePacer, LoopControl, Scene};
pub use input::{InputEvent, InputQueue, Key};
