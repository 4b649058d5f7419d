//! A thin glutin wrapper that owns the window, the GL context and the event
//! pump.

use std::collections::HashSet;

use gl;
use glutin;
use glutin::GlContext;

use crate::errors::Result;

pub use glutin::VirtualKeyCode as Key;

/// Initial window settings.
#[derive(Debug, Clone)]
pub struct WindowParams {
    pub title: String,
    pub size: (u32, u32),
    pub multisample: u16,
    pub vsync: bool,
}

impl Default for WindowParams {
    fn default() -> Self {
        WindowParams {
            title: "Window".into(),
            size: (600, 600),
            multisample: 0,
            vsync: false,
        }
    }
}

/// A window with a current OpenGL 3.2 core context and basic keyboard state.
pub struct Window {
    window: glutin::GlWindow,
    events_loop: glutin::EventsLoop,
    pressed: HashSet<Key>,
    close_requested: bool,
}

impl Window {
    /// Opens the window, makes its context current on this thread and loads
    /// the GL function pointers.
    pub fn new(params: WindowParams) -> Result<Window> {
        let events_loop = glutin::EventsLoop::new();

        let builder = glutin::WindowBuilder::new()
            .with_title(params.title.clone())
            .with_dimensions(glutin::dpi::LogicalSize::new(
                f64::from(params.size.0),
                f64::from(params.size.1),
            ));

        let context = glutin::ContextBuilder::new()
            .with_gl(glutin::GlRequest::GlThenGles {
                opengl_version: (3, 2),
                opengles_version: (3, 0),
            })
            .with_gl_profile(glutin::GlProfile::Core)
            .with_multisampling(params.multisample)
            .with_vsync(params.vsync);

        let window = glutin::GlWindow::new(builder, context, &events_loop)?;

        unsafe {
            window.make_current()?;
        }

        gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);

        Ok(Window {
            window,
            events_loop,
            pressed: HashSet::new(),
            close_requested: false,
        })
    }

    /// Pumps pending window events, updating keyboard and close state.
    pub fn poll_events(&mut self) {
        let Window {
            ref mut events_loop,
            ref mut pressed,
            ref mut close_requested,
            ..
        } = *self;

        events_loop.poll_events(|event| {
            if let glutin::Event::WindowEvent { event, .. } = event {
                match event {
                    glutin::WindowEvent::CloseRequested => *close_requested = true,
                    glutin::WindowEvent::KeyboardInput { input, .. } => {
                        if let Some(key) = input.virtual_keycode {
                            match input.state {
                                glutin::ElementState::Pressed => {
                                    pressed.insert(key);
                                }
                                glutin::ElementState::Released => {
                                    pressed.remove(&key);
                                }
                            }
                        }
                    }
                    _ => {}
                }
            }
        });
    }

    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    #[inline]
    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// The inner size in logical pixels, if the window is still alive.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.window
            .get_inner_size()
            .map(|v| (v.width as u32, v.height as u32))
    }

    pub fn swap_buffers(&self) -> Result<()> {
        self.window.swap_buffers()?;
        Ok(())
    }
}
