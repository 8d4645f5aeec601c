//!
//! The session object which owns all mutable drawing state
//!

use crate::canvas::{Canvas, InvalidSizeError};
use crate::input::{InputRouter, PointerEvent};
use crate::palette::Palette;
#[cfg(feature = "audio")]
use crate::sinks::audio::{AudioError, AudioSink};
use crate::sonify::{sonify, SonifierOptions, ToneEvent};

/// A drawing session
///
/// Owns the canvas, the palette, the in-progress stroke state and the handle to the audio
/// output. All state mutation goes through this object; there is no global state anywhere.
pub struct Session {
    canvas: Canvas,
    palette: Palette,
    router: InputRouter,
    sonifier: SonifierOptions,
    #[cfg(feature = "audio")]
    audio: Option<AudioSink>,
}

impl Session {
    /// Create a new session with a white canvas of the given size and no audio output attached
    pub fn new(
        width: usize,
        height: usize,
        sonifier: SonifierOptions,
    ) -> Result<Self, InvalidSizeError> {
        Ok(Self {
            canvas: Canvas::new(width, height)?,
            palette: Palette::new(),
            router: InputRouter::new(),
            sonifier,
            #[cfg(feature = "audio")]
            audio: None,
        })
    }

    /// Attach the audio sink on which [`play`](Self::play) schedules its tones
    #[cfg(feature = "audio")]
    pub fn attach_audio(&mut self, sink: AudioSink) {
        self.audio = Some(sink);
    }

    /// Whether an audio sink is attached and playback can work
    #[cfg(feature = "audio")]
    pub fn has_audio(&self) -> bool {
        self.audio.is_some()
    }

    /// The canvas being drawn on
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The palette of selectable swatches
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Select the swatch at index `i` as the current stroke color and width
    pub fn select_swatch(&mut self, i: usize) {
        self.palette.select(i);
    }

    /// Route one pointer event through the stroke state machine
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        let swatch = self.palette.selected();
        self.router.handle(event, &mut self.canvas, swatch);
    }

    /// Reset the canvas back to its all-white state, abandoning any stroke in progress
    pub fn clear(&mut self) {
        self.canvas.clear();
        self.router.reset();
        tracing::info!("Cleared canvas");
    }

    /// Compute the tone sequence for the current canvas content
    pub fn sonify(&self) -> Vec<ToneEvent> {
        sonify(&self.canvas, &self.sonifier)
    }

    /// Sonify the current canvas and schedule the result for playback
    ///
    /// Returns the number of scheduled tones. Fails with [`AudioError::Unavailable`] if no
    /// audio sink is attached; drawing is unaffected by that.
    #[cfg(feature = "audio")]
    pub fn play(&self) -> Result<usize, AudioError> {
        let Some(audio) = &self.audio else {
            return Err(AudioError::Unavailable);
        };

        let tones = self.sonify();
        audio.schedule(&tones)?;
        tracing::info!("Scheduled {} tones for playback", tones.len());
        Ok(tones.len())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::canvas::{Color, Point};

    #[test]
    fn test_eraser_restores_the_background() {
        let mut session = Session::new(60, 60, SonifierOptions::default()).unwrap();

        session.handle_pointer(PointerEvent::Down(Point { x: 10, y: 30 }));
        session.handle_pointer(PointerEvent::Move(Point { x: 50, y: 30 }));
        session.handle_pointer(PointerEvent::Up);
        assert_eq!(session.canvas().get_pixel(30, 30).unwrap(), Color::BLACK);

        let eraser_index = session.palette().swatches().len() - 1;
        session.select_swatch(eraser_index);
        session.handle_pointer(PointerEvent::Down(Point { x: 10, y: 30 }));
        session.handle_pointer(PointerEvent::Move(Point { x: 50, y: 30 }));
        session.handle_pointer(PointerEvent::Up);

        assert!(session.canvas().pixels().iter().all(|&px| px == Color::WHITE));
    }

    #[test]
    fn test_clear_resets_canvas_and_stroke() {
        let mut session = Session::new(60, 60, SonifierOptions::default()).unwrap();

        session.handle_pointer(PointerEvent::Down(Point { x: 10, y: 10 }));
        session.clear();
        assert!(session.canvas().pixels().iter().all(|&px| px == Color::WHITE));

        // the interrupted stroke must not continue after the clear
        session.handle_pointer(PointerEvent::Move(Point { x: 50, y: 50 }));
        assert!(session.canvas().pixels().iter().all(|&px| px == Color::WHITE));
    }

    #[test]
    fn test_drawn_strokes_are_audible() {
        let mut session = Session::new(60, 60, SonifierOptions::default()).unwrap();
        assert!(session.sonify().is_empty());

        session.handle_pointer(PointerEvent::Down(Point { x: 20, y: 20 }));
        session.handle_pointer(PointerEvent::Up);
        assert!(!session.sonify().is_empty());
    }

    #[cfg(feature = "audio")]
    #[test]
    fn test_play_without_audio_sink_is_unavailable() {
        let session = Session::new(60, 60, SonifierOptions::default()).unwrap();
        assert!(!session.has_audio());
        assert!(matches!(session.play(), Err(AudioError::Unavailable)));
    }
}
