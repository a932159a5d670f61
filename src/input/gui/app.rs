//! winit event loop for the GUI backend.
//!
//! The loop owns the main thread, the window and the pixels framebuffer;
//! the facade runs on a control thread and reaches the loop only through
//! [`GuiDirective`]s. Closing the window exits the loop, and with it the
//! host process, which tears down the control thread and any timers.

use crate::core::data::color::Color;
use crate::core::data::ellipse::Ellipse;
use crate::core::frame::Frame;
use crate::input::gui::canvas_panel::{CanvasPanel, CanvasState};
use crate::input::gui::directives::GuiDirective;
use crate::input::gui::window_handle::ProxyWindow;
use pixels::{Pixels, SurfaceTexture};
use std::sync::{Arc, Mutex};
use std::thread;
use winit::{
    dpi::{LogicalSize, PhysicalSize},
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoopBuilder},
    window::{Window, WindowBuilder},
};

/// Render-side state: the pixels framebuffer tied to the window.
struct App {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
}

impl App {
    fn new(window: &'static Window) -> Self {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)
            .expect("Failed to create pixels surface");

        Self {
            pixels,
            width: size.width,
            height: size.height,
        }
    }

    /// Handles window resize by recreating the pixels surface and buffer.
    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.width = width;
            self.height = height;
            self.pixels
                .resize_surface(width, height)
                .expect("Failed to resize surface");
            self.pixels
                .resize_buffer(width, height)
                .expect("Failed to resize buffer");
        }
    }

    /// Rasterizes the shared canvas state and presents it.
    fn render(&mut self, canvas: &Mutex<CanvasState>) -> Result<(), pixels::Error> {
        // Skip rendering for invalid size (e.g., minimized window)
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        let (background, foreground, ellipse) = {
            let state = canvas.lock().expect("canvas lock poisoned");
            (state.background, state.foreground, state.ellipse)
        };

        self.fill(background);
        if let Some(ellipse) = ellipse {
            self.fill_ellipse(ellipse, foreground);
        }

        self.pixels.render()
    }

    fn fill(&mut self, color: Color) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel[0] = color.r;
            pixel[1] = color.g;
            pixel[2] = color.b;
            pixel[3] = 255; // A (opaque)
        }
    }

    /// Scanline fill of the circle around the ellipse center, clipped to
    /// the framebuffer.
    fn fill_ellipse(&mut self, ellipse: Ellipse, color: Color) {
        let width = self.width as i64;
        let height = self.height as i64;
        let cx = ellipse.x as i64;
        let cy = ellipse.y as i64;
        let radius = ellipse.radius as i64;
        let frame = self.pixels.frame_mut();

        for dy in -radius..=radius {
            let y = cy + dy;
            if y < 0 || y >= height {
                continue;
            }
            let half_span = (((radius * radius - dy * dy) as f64).sqrt()) as i64;
            let x_start = (cx - half_span).clamp(0, width);
            let x_end = (cx + half_span + 1).clamp(0, width);
            for x in x_start..x_end {
                let offset = ((y * width + x) * 4) as usize;
                frame[offset] = color.r;
                frame[offset + 1] = color.g;
                frame[offset + 2] = color.b;
                frame[offset + 3] = 255;
            }
        }
    }
}

/// Runs the GUI backend.
///
/// Builds the window and event loop, hands a wired frame and canvas panel
/// to `control` on its own thread, then drives rendering until the window
/// closes. Mouse presses are pushed into the frame's event queue as
/// `"click"` by the built-in input adapter.
///
/// This function does not return until the window is closed; the caller's
/// process is expected to exit right after.
pub fn run_gui<F>(title: &str, control: F)
where
    F: FnOnce(Frame<ProxyWindow>, CanvasPanel) + Send + 'static,
{
    let event_loop = EventLoopBuilder::<GuiDirective>::with_user_event()
        .build()
        .expect("Failed to create event loop");

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(title)
            .with_inner_size(LogicalSize::new(640.0, 480.0))
            .with_visible(false)
            .build(&event_loop)
            .expect("Failed to create window"),
    ));

    let canvas = Arc::new(Mutex::new(CanvasState::default()));
    let panel = CanvasPanel::new(Arc::clone(&canvas), event_loop.create_proxy());
    let frame = Frame::new(ProxyWindow::new(event_loop.create_proxy()));
    let input = frame.event_sender();

    thread::spawn(move || control(frame, panel));

    let mut app = App::new(window);

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Wait);

            match event {
                Event::UserEvent(directive) => match directive {
                    GuiDirective::Resize(size) => {
                        let _ =
                            window.request_inner_size(PhysicalSize::new(size.width, size.height));
                    }
                    GuiDirective::Attach(name) => {
                        log::debug!("panel {name:?} attached");
                    }
                    GuiDirective::Show => {
                        window.set_visible(true);
                        window.request_redraw();
                    }
                    GuiDirective::Redraw => {
                        window.request_redraw();
                    }
                },
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => match event {
                    WindowEvent::CloseRequested => {
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        if let Err(e) = app.render(&canvas) {
                            eprintln!("Render error: {e}");
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        app.resize(size.width, size.height);
                        window.request_redraw();
                    }
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        ..
                    } => {
                        input.push("click");
                    }
                    _ => {}
                },
                _ => {}
            }
        })
        .expect("Event loop error");
}
