//!
//! An interactive window that presents the canvas and feeds pointer input back into a session
//!
//! The window shows a small toolbar strip above the canvas with one cell per palette swatch
//! followed by a clear cell and a play cell. Mouse state is polled once per frame and
//! normalized into [`PointerEvent`]s for the session's input router; polls without a usable
//! cursor position produce a [`PointerEvent::Leave`] so that strokes end when the cursor
//! leaves the window.
//!

use crate::canvas::Point;
use crate::input::PointerEvent;
use crate::session::Session;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode};
use std::time::Duration;
use thiserror::Error;

/// Height of the toolbar strip above the canvas in pixels
pub const TOOLBAR_HEIGHT: usize = 24;

/// Width of one toolbar cell in pixels
const CELL_WIDTH: usize = 24;

/// Margin between a toolbar cell border and the swatch face inside it
const CELL_MARGIN: usize = 4;

/// Background color of the toolbar strip
const TOOLBAR_BACKGROUND: u32 = 0x00_38_38_38;

/// Color of the marker frame around the selected swatch and of the toolbar icons
const TOOLBAR_ACCENT: u32 = 0x00_FF_A0_28;

/// Keys that select the swatch of the same ordinal
const SWATCH_KEYS: [Key; 9] = [
    Key::Key1,
    Key::Key2,
    Key::Key3,
    Key::Key4,
    Key::Key5,
    Key::Key6,
    Key::Key7,
    Key::Key8,
    Key::Key9,
];

/// Options with which the `WindowSink` is configured
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WindowSinkOptions {
    /// Title of the opened window
    pub title: String,
}

/// Errors produced by the window sink
#[derive(Debug, Error)]
pub enum WindowError {
    /// The window could not be opened
    #[error("could not open the window: {0}")]
    Create(String),
    /// A frame could not be presented into the window
    #[error("could not present the canvas: {0}")]
    Present(String),
}

/// What a click into the toolbar strip triggers
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum ToolbarAction {
    SelectSwatch(usize),
    Clear,
    Play,
}

/// Resolve a toolbar-local x coordinate to the action of the cell under it
fn toolbar_hit(x: usize, swatch_count: usize) -> Option<ToolbarAction> {
    let cell = x / CELL_WIDTH;
    if cell < swatch_count {
        Some(ToolbarAction::SelectSwatch(cell))
    } else if cell == swatch_count {
        Some(ToolbarAction::Clear)
    } else if cell == swatch_count + 1 {
        Some(ToolbarAction::Play)
    } else {
        None
    }
}

/// An interactive window sink
///
/// [`run`](Self::run) drives the session until the window is closed or Escape is pressed.
pub struct WindowSink {
    window: minifb::Window,
    buffer: Vec<u32>,
    left_was_down: bool,
}

impl WindowSink {
    /// Open a window fitting the session's canvas plus the toolbar strip
    pub fn new(session: &Session, options: WindowSinkOptions) -> Result<Self, WindowError> {
        let (width, height) = session.canvas().get_size();
        let mut window = minifb::Window::new(
            &options.title,
            width,
            height + TOOLBAR_HEIGHT,
            minifb::WindowOptions::default(),
        )
        .map_err(|e| WindowError::Create(e.to_string()))?;

        // sample input and repaint at roughly 60 fps
        window.limit_update_rate(Some(Duration::from_micros(16_600)));

        Ok(Self {
            window,
            buffer: vec![TOOLBAR_BACKGROUND; width * (height + TOOLBAR_HEIGHT)],
            left_was_down: false,
        })
    }

    /// Drive the session until the window is closed or Escape is pressed
    pub fn run(mut self, session: &mut Session) -> Result<(), WindowError> {
        tracing::debug!("Entering window loop");
        while self.window.is_open() && !self.window.is_key_down(Key::Escape) {
            self.handle_keys(session);
            self.handle_mouse(session);
            self.present(session)?;
        }
        tracing::debug!("Window closed, leaving window loop");
        Ok(())
    }

    /// Apply the keyboard shortcuts: digits select swatches, C clears, Space plays
    fn handle_keys(&mut self, session: &mut Session) {
        let swatch_count = session.palette().swatches().len();
        for (i, key) in SWATCH_KEYS.iter().enumerate().take(swatch_count) {
            if self.window.is_key_pressed(*key, KeyRepeat::No) {
                session.select_swatch(i);
            }
        }

        if self.window.is_key_pressed(Key::C, KeyRepeat::No) {
            session.clear();
        }
        if self.window.is_key_pressed(Key::Space, KeyRepeat::No) {
            trigger_playback(session);
        }
    }

    /// Poll the mouse state and normalize it into pointer events and toolbar actions
    fn handle_mouse(&mut self, session: &mut Session) {
        let left_down = self.window.get_mouse_down(MouseButton::Left);
        let pressed = left_down && !self.left_was_down;
        let released = !left_down && self.left_was_down;
        self.left_was_down = left_down;

        let Some((x, y)) = self.window.get_mouse_pos(MouseMode::Discard) else {
            // the cursor is outside the window, which ends any stroke in progress
            session.handle_pointer(PointerEvent::Leave);
            return;
        };
        let (x, y) = (x as i32, y as i32);

        if pressed {
            if y < TOOLBAR_HEIGHT as i32 {
                let swatch_count = session.palette().swatches().len();
                match toolbar_hit(x as usize, swatch_count) {
                    Some(ToolbarAction::SelectSwatch(i)) => session.select_swatch(i),
                    Some(ToolbarAction::Clear) => session.clear(),
                    Some(ToolbarAction::Play) => trigger_playback(session),
                    None => {}
                }
            } else {
                session.handle_pointer(PointerEvent::Down(Point {
                    x,
                    y: y - TOOLBAR_HEIGHT as i32,
                }));
            }
        } else if left_down {
            // the router ignores moves while no stroke is in progress
            session.handle_pointer(PointerEvent::Move(Point {
                x,
                y: y - TOOLBAR_HEIGHT as i32,
            }));
        } else if released {
            session.handle_pointer(PointerEvent::Up);
        }
    }

    /// Compose the toolbar and the canvas into the frame buffer and present it
    fn present(&mut self, session: &Session) -> Result<(), WindowError> {
        let (width, height) = session.canvas().get_size();

        self.render_toolbar(session, width);
        for (i, px) in session.canvas().pixels().iter().enumerate() {
            self.buffer[TOOLBAR_HEIGHT * width + i] = px.to_argb();
        }

        self.window
            .update_with_buffer(&self.buffer, width, height + TOOLBAR_HEIGHT)
            .map_err(|e| WindowError::Present(e.to_string()))
    }

    /// Render the toolbar strip into the top rows of the frame buffer
    fn render_toolbar(&mut self, session: &Session, width: usize) {
        self.fill_rect(width, 0, 0, width, TOOLBAR_HEIGHT, TOOLBAR_BACKGROUND);

        let swatches = session.palette().swatches();
        for (i, swatch) in swatches.iter().enumerate() {
            let x0 = i * CELL_WIDTH;
            self.fill_rect(
                width,
                x0 + CELL_MARGIN,
                CELL_MARGIN,
                CELL_WIDTH - 2 * CELL_MARGIN,
                TOOLBAR_HEIGHT - 2 * CELL_MARGIN,
                swatch.color.to_argb(),
            );
            if i == session.palette().selected_index() {
                self.frame_rect(
                    width,
                    x0 + 1,
                    1,
                    CELL_WIDTH - 2,
                    TOOLBAR_HEIGHT - 2,
                    TOOLBAR_ACCENT,
                );
            }
        }

        self.render_clear_icon(width, swatches.len() * CELL_WIDTH);
        self.render_play_icon(width, (swatches.len() + 1) * CELL_WIDTH);
    }

    /// Fill an axis-aligned rectangle, clipped against the buffer width
    fn fill_rect(&mut self, width: usize, x0: usize, y0: usize, w: usize, h: usize, argb: u32) {
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                if x < width && y < TOOLBAR_HEIGHT {
                    self.buffer[y * width + x] = argb;
                }
            }
        }
    }

    /// Draw the 1 pixel wide outline of a rectangle
    fn frame_rect(&mut self, width: usize, x0: usize, y0: usize, w: usize, h: usize, argb: u32) {
        self.fill_rect(width, x0, y0, w, 1, argb);
        self.fill_rect(width, x0, y0 + h - 1, w, 1, argb);
        self.fill_rect(width, x0, y0, 1, h, argb);
        self.fill_rect(width, x0 + w - 1, y0, 1, h, argb);
    }

    /// Draw an X into the clear cell
    fn render_clear_icon(&mut self, width: usize, x0: usize) {
        for d in CELL_MARGIN..CELL_WIDTH - CELL_MARGIN {
            self.fill_rect(width, x0 + d, d, 2, 2, TOOLBAR_ACCENT);
            self.fill_rect(width, x0 + CELL_WIDTH - d - 2, d, 2, 2, TOOLBAR_ACCENT);
        }
    }

    /// Draw a right-pointing triangle into the play cell
    fn render_play_icon(&mut self, width: usize, x0: usize) {
        let mid = TOOLBAR_HEIGHT / 2;
        for x in CELL_MARGIN..CELL_WIDTH - CELL_MARGIN {
            let spread = (CELL_WIDTH - CELL_MARGIN - x) / 2;
            self.fill_rect(width, x0 + x, mid - spread, 1, 2 * spread + 1, TOOLBAR_ACCENT);
        }
    }
}

/// Trigger sonification of the current canvas, surfacing audio unavailability to the user
fn trigger_playback(session: &mut Session) {
    #[cfg(feature = "audio")]
    match session.play() {
        Ok(count) => tracing::debug!("Playback of {} tones started", count),
        Err(e) => tracing::error!("Cannot play sound: {}", e),
    }

    #[cfg(not(feature = "audio"))]
    {
        let _ = session;
        tracing::error!("Cannot play sound: this build has no audio support");
    }
}
