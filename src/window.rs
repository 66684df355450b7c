use std::thread;
use std::time::Duration;

use log::debug;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::plot::{Plot, PlotError};

fn sdl_err(e: impl ToString) -> PlotError {
    PlotError::Sdl(e.to_string())
}

/// Line chart with one marker per point in an SDL2 window. Blocks until the
/// window is closed or Escape is pressed.
#[derive(Debug)]
pub struct WindowPlot {
    width: u32,
    height: u32,
}

impl WindowPlot {
    const BACKGROUND: Color = Color::RGB(255, 255, 255);
    const LINE: Color = Color::RGB(31, 119, 180);
    const AXIS: Color = Color::RGB(200, 200, 200);
    const MARGIN: i32 = 30;
    const MARKER_SIZE: u32 = 6;
    const FRAME_DELAY: Duration = Duration::from_millis(16);

    pub fn new() -> Self {
        Self {
            width: 1000,
            height: 300,
        }
    }

    fn points(&self, bits: &[u8]) -> Vec<Point> {
        // Scaled in i64: index times span overflows i32 for long runs.
        let span_x = self.width as i64 - 2 * Self::MARGIN as i64;
        let top = Self::MARGIN;
        let bottom = self.height as i32 - Self::MARGIN;
        let last = bits.len().saturating_sub(1).max(1) as i64;

        bits.iter()
            .enumerate()
            .map(|(i, &b)| {
                let x = Self::MARGIN + (i as i64 * span_x / last) as i32;
                let y = if b == 1 { top } else { bottom };
                Point::new(x, y)
            })
            .collect()
    }

    fn draw(&self, canvas: &mut Canvas<Window>, points: &[Point]) -> Result<(), PlotError> {
        canvas.set_draw_color(Self::BACKGROUND);
        canvas.clear();

        canvas.set_draw_color(Self::AXIS);
        let bottom = self.height as i32 - Self::MARGIN;
        canvas
            .draw_line(
                Point::new(Self::MARGIN, bottom),
                Point::new(self.width as i32 - Self::MARGIN, bottom),
            )
            .map_err(sdl_err)?;

        canvas.set_draw_color(Self::LINE);
        for pair in points.windows(2) {
            canvas.draw_line(pair[0], pair[1]).map_err(sdl_err)?;
        }
        for &point in points {
            canvas
                .fill_rect(Rect::from_center(point, Self::MARKER_SIZE, Self::MARKER_SIZE))
                .map_err(sdl_err)?;
        }

        canvas.present();
        Ok(())
    }
}

impl Default for WindowPlot {
    fn default() -> Self {
        Self::new()
    }
}

impl Plot for WindowPlot {
    fn plot(&mut self, title: &str, bits: &[u8]) -> Result<(), PlotError> {
        let sdl_context = sdl2::init().map_err(sdl_err)?;
        let mut event_pump = sdl_context.event_pump().map_err(sdl_err)?;
        let mut canvas = sdl_context
            .video()
            .map_err(sdl_err)?
            .window(title, self.width, self.height)
            .position_centered()
            .build()
            .map_err(sdl_err)?
            .into_canvas()
            .build()
            .map_err(sdl_err)?;

        let points = self.points(bits);
        debug!("plotting {} points", points.len());

        'running: loop {
            for event in event_pump.poll_iter() {
                match event {
                    Event::Quit { .. }
                    | Event::KeyDown {
                        keycode: Some(Keycode::Escape),
                        ..
                    } => break 'running,
                    _ => {}
                }
            }

            self.draw(&mut canvas, &points)?;
            thread::sleep(Self::FRAME_DELAY);
        }

        Ok(())
    }
}
