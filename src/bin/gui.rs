use miniframe::{CanvasPanel, Frame, ProxyWindow, run_gui};

const WIDTH: i32 = 400;
const HEIGHT: i32 = 300;
const RADIUS: u32 = 10;
const TICK_MS: u64 = 16;

struct Ball {
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
}

impl Ball {
    fn step(&mut self) {
        self.x += self.dx;
        self.y += self.dy;

        let r = RADIUS as i32;
        if self.x - r <= 0 || self.x + r >= WIDTH {
            self.dx = -self.dx;
        }
        if self.y - r <= 0 || self.y + r >= HEIGHT {
            self.dy = -self.dy;
        }
    }
}

/// Bouncing-ball demo on the winit backend. Clicking anywhere reverses the
/// ball; closing the window terminates the process.
fn main() {
    env_logger::init();

    run_gui("miniframe", control);
}

fn control(mut frame: Frame<ProxyWindow>, panel: CanvasPanel) {
    frame
        .set_size(WIDTH as u32, HEIGHT as u32)
        .add_panel(Box::new(panel), "main")
        .show();
    frame.schedule(TICK_MS, "tick");

    let events = frame.events();
    let mut ball = Ball {
        x: WIDTH / 2,
        y: HEIGHT / 2,
        dx: 3,
        dy: 2,
    };

    loop {
        match events.next().as_str() {
            "tick" => {
                ball.step();
                frame.draw_ellipse("main", ball.x, ball.y, RADIUS);
                frame.schedule(TICK_MS, "tick");
            }
            "click" => {
                ball.dx = -ball.dx;
                ball.dy = -ball.dy;
            }
            // Empty string: the queue was torn down, stop pulling.
            "" => break,
            other => log::debug!("unhandled event {other:?}"),
        }
    }
}
