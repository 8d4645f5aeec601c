//!
//! Conversion of the canvas image into a sequence of scheduled tones
//!
//! Each pixel column becomes at most one tone: the column's ink pixels are averaged to a
//! single vertical position which is mapped linearly onto a frequency range (ink near the top
//! of the canvas sounds higher), and the tone starts at a time offset proportional to the
//! column's horizontal position. Columns without ink stay silent but still occupy their time
//! slot.
//!

use crate::canvas::Canvas;

/// Tuning parameters for column sonification
///
/// The thresholds and timing values are plain tuning constants without deeper rationale, so
/// they are kept configurable. The defaults reproduce the classic doodle sound.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SonifierOptions {
    /// Channel value above which a pixel counts as background
    ///
    /// A pixel is only considered ink if at least one of its red, green and blue channels is
    /// at or below this value.
    pub ink_threshold: u8,
    /// Alpha value a pixel must exceed to be considered visible at all
    pub alpha_threshold: u8,
    /// Frequency in Hz produced by ink at the very bottom of the canvas
    pub min_freq: f64,
    /// Frequency in Hz produced by ink at the very top of the canvas
    pub max_freq: f64,
    /// Playback time in seconds allotted to each pixel column
    pub column_duration: f64,
    /// Fraction of the column duration that a tone actually sounds
    ///
    /// Slightly below 1.0 so that consecutive tones do not click into each other.
    pub gate: f64,
    /// Linear amplitude of every tone
    pub amplitude: f32,
}

impl Default for SonifierOptions {
    fn default() -> Self {
        Self {
            ink_threshold: 240,
            alpha_threshold: 50,
            min_freq: 100.0,
            max_freq: 1000.0,
            column_duration: 0.02,
            gate: 0.9,
            amplitude: 0.3,
        }
    }
}

/// A single tone scheduled for playback
///
/// Tone events are ephemeral: they are produced by [`sonify`], handed to the audio sink and
/// then discarded.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ToneEvent {
    /// Oscillator frequency in Hz
    pub frequency: f64,
    /// Start time in seconds relative to the beginning of playback
    pub start: f64,
    /// Duration in seconds
    pub duration: f64,
    /// Linear amplitude in `0.0..=1.0`
    pub amplitude: f32,
}

/// Convert the canvas into a time-ordered sequence of tones
///
/// This only reads the canvas and is deterministic: equal canvas content always produces the
/// same tone sequence.
pub fn sonify(canvas: &Canvas, options: &SonifierOptions) -> Vec<ToneEvent> {
    let (width, height) = canvas.get_size();
    let pixels = canvas.pixels();
    let mut tones = Vec::new();

    for x in 0..width {
        let mut y_sum = 0usize;
        let mut ink_count = 0usize;
        for y in 0..height {
            let px = pixels[y * width + x];
            let near_white = px.r > options.ink_threshold
                && px.g > options.ink_threshold
                && px.b > options.ink_threshold;
            if !near_white && px.a > options.alpha_threshold {
                y_sum += y;
                ink_count += 1;
            }
        }
        if ink_count == 0 {
            continue;
        }

        let mean_y = y_sum as f64 / ink_count as f64;
        let frequency = options.min_freq
            + ((height as f64 - mean_y) / height as f64) * (options.max_freq - options.min_freq);

        tones.push(ToneEvent {
            frequency,
            start: x as f64 * options.column_duration,
            duration: options.column_duration * options.gate,
            amplitude: options.amplitude,
        });
    }

    tracing::debug!("Sonified canvas into {} tones", tones.len());
    tones
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::canvas::Color;
    use itertools::Itertools;

    #[test]
    fn test_untouched_canvas_is_silent() {
        let canvas = Canvas::new(100, 100).unwrap();
        assert!(sonify(&canvas, &SonifierOptions::default()).is_empty());
    }

    #[test]
    fn test_single_pixel_produces_one_tone() {
        let mut canvas = Canvas::new(100, 100).unwrap();
        canvas.set_pixel(10, 50, Color::BLACK).unwrap();

        let tones = sonify(&canvas, &SonifierOptions::default());
        assert_eq!(tones.len(), 1);

        let tone = tones[0];
        assert_eq!(tone.frequency, 550.0);
        assert!((tone.start - 0.2).abs() < 1e-12);
        assert!((tone.duration - 0.018).abs() < 1e-12);
        assert_eq!(tone.amplitude, 0.3);
    }

    #[test]
    fn test_horizontal_line_produces_an_even_melody() {
        let mut canvas = Canvas::new(40, 30).unwrap();
        for x in 0..40 {
            canvas.set_pixel(x, 12, Color::BLACK).unwrap();
        }

        let tones = sonify(&canvas, &SonifierOptions::default());
        assert_eq!(tones.len(), 40);

        // same row everywhere means the same pitch everywhere
        assert!(tones.iter().all(|t| t.frequency == tones[0].frequency));

        // start times are strictly increasing and evenly spaced
        for (a, b) in tones.iter().tuple_windows() {
            assert!(b.start > a.start);
            assert!((b.start - a.start - 0.02).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sonification_is_deterministic() {
        let mut canvas = Canvas::new(64, 64).unwrap();
        canvas.set_pixel(3, 10, Color::BLACK).unwrap();
        canvas.set_pixel(3, 40, Color::RED).unwrap();
        canvas.set_pixel(60, 5, Color::BLUE).unwrap();

        let options = SonifierOptions::default();
        assert_eq!(sonify(&canvas, &options), sonify(&canvas, &options));
    }

    #[test]
    fn test_mean_of_multiple_ink_pixels() {
        let mut canvas = Canvas::new(10, 100).unwrap();
        canvas.set_pixel(4, 20, Color::BLACK).unwrap();
        canvas.set_pixel(4, 80, Color::BLACK).unwrap();

        let tones = sonify(&canvas, &SonifierOptions::default());
        assert_eq!(tones.len(), 1);
        // mean y is 50, halfway up a 100 pixel canvas
        assert_eq!(tones[0].frequency, 550.0);
    }

    #[test]
    fn test_near_white_pixels_are_background() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.set_pixel(2, 2, Color::rgb(241, 241, 241)).unwrap();
        assert!(sonify(&canvas, &SonifierOptions::default()).is_empty());

        // one channel at the threshold makes the pixel ink again
        canvas.set_pixel(2, 2, Color::rgb(240, 241, 241)).unwrap();
        assert_eq!(sonify(&canvas, &SonifierOptions::default()).len(), 1);
    }

    #[test]
    fn test_alpha_threshold_is_strict() {
        let mut canvas = Canvas::new(10, 10).unwrap();

        canvas.set_pixel(5, 5, Color { r: 0, g: 0, b: 0, a: 50 }).unwrap();
        assert!(sonify(&canvas, &SonifierOptions::default()).is_empty());

        canvas.set_pixel(5, 5, Color { r: 0, g: 0, b: 0, a: 51 }).unwrap();
        assert_eq!(sonify(&canvas, &SonifierOptions::default()).len(), 1);
    }

    #[test]
    fn test_thresholds_are_configurable() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.set_pixel(1, 1, Color::rgb(200, 200, 200)).unwrap();

        let strict = SonifierOptions {
            ink_threshold: 199,
            ..SonifierOptions::default()
        };
        assert!(sonify(&canvas, &strict).is_empty());
        assert_eq!(sonify(&canvas, &SonifierOptions::default()).len(), 1);
    }
}
