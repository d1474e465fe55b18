use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, warn};
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::Window,
};

use crate::config::WindowConfig;
use crate::controller::{FrameLoop, FramePacer, InputEvent, InputQueue, LoopControl, Scene};
use crate::error::AppError;
use crate::model::Projection;
use crate::view::{FrameRenderer, GpuContext, Mesh};

/// Opens a window and drives `scene` until the window is closed.
///
/// Keys pressed between two frames are queued and handed to the scene at the
/// start of the next frame. Frames are paced to `window_config.target_fps`.
pub fn run<S: Scene>(scene: S, window_config: WindowConfig) -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    let window_attributes = Window::default_attributes()
        .with_title(window_config.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(window_config.width, window_config.height));
    let window = Arc::new(event_loop.create_window(window_attributes)?);

    let mut gpu = pollster::block_on(GpuContext::new_native(window.clone()))?;
    let mut renderer = FrameRenderer::new(&gpu);
    let mut projection = Projection::new(&window_config);
    projection.set_aspect(gpu.config.width, gpu.config.height);

    let mut frame_loop = FrameLoop::new(scene);
    let mut mesh = Mesh::empty();
    let mut queue = InputQueue::new();
    let mut pacer = FramePacer::new(window_config.target_fps);
    info!(title = %window_config.title, fps = window_config.target_fps, "starting frame loop");

    event_loop.run(move |event, elwt| match event {
        Event::NewEvents(StartCause::Init) | Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
            window.request_redraw();
        }
        Event::WindowEvent { ref event, window_id } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => {
                queue.push(InputEvent::Quit);
                window.request_redraw();
            }
            WindowEvent::KeyboardInput {
                event: KeyEvent { state: ElementState::Pressed, physical_key: PhysicalKey::Code(code), .. },
                ..
            } => {
                queue.push_key_code(*code);
            }
            WindowEvent::Resized(size) => {
                if gpu.resize(size.width, size.height) {
                    renderer.resize(&gpu);
                    projection.set_aspect(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                if frame_loop.step(queue.drain(), &mut mesh) == LoopControl::Exit {
                    elwt.exit();
                    return;
                }

                let view_proj = projection.matrix() * frame_loop.scene().view_matrix();
                match renderer.render(&gpu, &mesh, view_proj) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        error!("surface out of memory");
                        elwt.exit();
                        return;
                    }
                    Err(e) => warn!(error = ?e, "dropped frame"),
                }

                elwt.set_control_flow(ControlFlow::WaitUntil(pacer.next_deadline(Instant::now())));
            }
            _ => {}
        },
        _ => {}
    })?;

    info!("window closed");
    Ok(())
}
