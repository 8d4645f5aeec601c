//!
//! The fixed set of color swatches that strokes can be painted with
//!

use crate::canvas::Color;

/// Stroke width used by the normal drawing swatches
pub const DEFAULT_STROKE_WIDTH: u32 = 5;

/// Stroke width used by the eraser swatch
///
/// The eraser paints the background color, so a wider brush is what makes it practical.
pub const ERASER_STROKE_WIDTH: u32 = 20;

/// A selectable color and stroke width preset
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Swatch {
    /// The stroke color this swatch paints with
    pub color: Color,
    /// The brush diameter in pixels this swatch paints with
    pub stroke_width: u32,
}

/// The palette of selectable swatches
///
/// Exactly one swatch is selected at any time; selecting a new one deselects the previous.
#[derive(Debug, Clone)]
pub struct Palette {
    swatches: Vec<Swatch>,
    selected: usize,
}

impl Palette {
    /// Create the default palette with black selected
    ///
    /// It contains black, red, green, blue and yellow drawing swatches plus a white eraser
    /// swatch as the last entry.
    pub fn new() -> Self {
        let mut swatches: Vec<Swatch> = [
            Color::BLACK,
            Color::RED,
            Color::GREEN,
            Color::BLUE,
            Color::YELLOW,
        ]
        .into_iter()
        .map(|color| Swatch {
            color,
            stroke_width: DEFAULT_STROKE_WIDTH,
        })
        .collect();
        swatches.push(Swatch {
            color: Color::WHITE,
            stroke_width: ERASER_STROKE_WIDTH,
        });

        Self {
            swatches,
            selected: 0,
        }
    }

    /// All swatches in display order
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// The currently selected swatch
    pub fn selected(&self) -> Swatch {
        self.swatches[self.selected]
    }

    /// The index of the currently selected swatch
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Select the swatch at index `i`, deselecting the previously selected one
    ///
    /// Selecting an index for which no swatch exists leaves the selection unchanged.
    pub fn select(&mut self, i: usize) {
        if i >= self.swatches.len() {
            tracing::warn!("Ignoring selection of swatch {} which does not exist", i);
            return;
        }
        self.selected = i;
        tracing::debug!("Selected swatch {} ({:?})", i, self.swatches[i]);
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
