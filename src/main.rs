#[macro_use]
extern crate lazy_static;

mod game;
mod io;
mod scene;
mod time;

use glutin::{
    dpi::LogicalSize, event_loop::EventLoop, window::WindowBuilder, Api, ContextBuilder, GlRequest,
};
use log::{error, info};

use crate::game::constants::*;
use crate::scene::error::SceneError;
use crate::scene::input_event::*;
use crate::scene::scene_render::SceneRender;
use crate::scene::Scene;
use crate::time::get_microseconds_as_u64;

fn fatal(err: SceneError) -> ! {
    error!("[Host] {}", err);
    std::process::exit(1);
}

fn main() {
    env_logger::init();

    // Build window and event loop.
    let event_loop = EventLoop::new();
    let windowed_context = ContextBuilder::new()
        .with_gl(GlRequest::Specific(Api::OpenGl, (4, 1)))
        .with_vsync(true)
        .build_windowed(
            WindowBuilder::new()
                .with_title("WorkAdventure Clone")
                .with_resizable(false)
                .with_inner_size(LogicalSize::new(VIEW_WIDTH as f64, VIEW_HEIGHT as f64)),
            &event_loop,
        )
        .unwrap();

    // Initialize context.
    let windowed_context = unsafe {
        let ctx = windowed_context.make_current().unwrap();
        ezgl::gl::load_with(|s| ctx.get_proc_address(s) as *const _);
        ezgl::gl::ClearColor(0., 0., 0., 1.);
        ezgl::bind_vao();
        ctx
    };

    // Create the renderer, run the scene through its phases, then hand the
    // finished map to the renderer before the world starts ticking.
    let mut scene_render = SceneRender::new();
    let mut scene = Scene::new();
    scene.load().unwrap_or_else(|err| fatal(err));
    scene.build().unwrap_or_else(|err| fatal(err));
    if let Some(map) = scene.map() {
        scene_render.upload_map(map);
    }
    info!("[Host] Scene running.");

    // Drive everything from the event loop. Simulation runs in fixed
    // steps; vsync paces the redraws.
    let mut timestamp = get_microseconds_as_u64();
    event_loop.run(move |event, _, control_flow| {
        use glutin::event::*;
        use glutin::event_loop::ControlFlow;

        *control_flow = ControlFlow::Poll;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    scene.handle_input(InputEvent::Close);
                    *control_flow = ControlFlow::Exit;
                }

                // Keyboard input.
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    // Map key state.
                    let key_state = match state {
                        ElementState::Pressed => KeyState::Down,
                        ElementState::Released => KeyState::Up,
                    };

                    // Map key type.
                    let input_key = match key {
                        VirtualKeyCode::Left => InputKey::Left,
                        VirtualKeyCode::Right => InputKey::Right,
                        VirtualKeyCode::Up => InputKey::Up,
                        VirtualKeyCode::Down => InputKey::Down,
                        _ => return,
                    };

                    scene.handle_input(InputEvent::KeyEvent(key_state, input_key));
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                // Simulate the time since the last pass in whole frames.
                let now = get_microseconds_as_u64();
                let frames = (now - timestamp) / FRAME_TIME;
                for _ in 0..frames {
                    scene.step(FRAME_TIME);
                    timestamp += FRAME_TIME;
                }
                windowed_context.window().request_redraw();
            }
            Event::RedrawRequested(_) => {
                unsafe {
                    ezgl::gl::Clear(ezgl::gl::COLOR_BUFFER_BIT);
                }
                if let Some(scene_frame) = scene.frame() {
                    scene_render.render(&scene_frame);
                }
                windowed_context.swap_buffers().unwrap();
            }
            Event::LoopDestroyed => {
                scene.shutdown();
                info!("[Host] Event loop closed.");
            }
            _ => {}
        }
    });
}
