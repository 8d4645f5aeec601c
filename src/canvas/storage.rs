use crate::canvas::Color;
use thiserror::Error;

/// The pixel storage of the drawing surface
///
/// Pixels are kept in row-major order and are initialized to the opaque white background.
/// The dimensions are fixed for the lifetime of the canvas.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Canvas {
    data: Vec<Color>,
    width: usize,
    height: usize,
}

/// An error which indicates that invalid coordinates could not be accessed
#[derive(Debug, Error, Copy, Clone)]
#[error("Could not access invalid coordinates {}x{} on canvas of size {}x{}", .target.0, .target.1, .canvas_size.0, .canvas_size.1)]
pub struct InvalidCoordinatesError {
    target: (usize, usize),
    canvas_size: (usize, usize),
}

/// An error which indicates that a canvas of a given size cannot be constructed
#[derive(Debug, Error, Copy, Clone)]
#[error("Given size {}x{} is not valid for constructing a canvas: {details}", .size.0, .size.1)]
pub struct InvalidSizeError {
    size: (usize, usize),
    details: &'static str,
}

impl Canvas {
    /// Create a new canvas with the specified dimensions, filled with the white background
    pub fn new(width: usize, height: usize) -> Result<Self, InvalidSizeError> {
        if width == 0 || height == 0 {
            return Err(InvalidSizeError {
                size: (width, height),
                details: "Width and Height must both be greater than 0",
            });
        }

        Ok(Self {
            data: vec![Color::WHITE; width * height],
            width,
            height,
        })
    }

    /// Get the size of this canvas as `(width, height)` tuple
    pub fn get_size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get the color value of the pixel at position (x,y)
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<Color, InvalidCoordinatesError> {
        if x >= self.width || y >= self.height {
            return Err(InvalidCoordinatesError {
                target: (x, y),
                canvas_size: self.get_size(),
            });
        }
        Ok(self.data[y * self.width + x])
    }

    /// Set the pixel value at position (x,y) to the specified color
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) -> Result<(), InvalidCoordinatesError> {
        if x >= self.width || y >= self.height {
            return Err(InvalidCoordinatesError {
                target: (x, y),
                canvas_size: self.get_size(),
            });
        }
        self.data[y * self.width + x] = color;
        Ok(())
    }

    /// Reset every pixel back to the opaque white background
    pub fn clear(&mut self) {
        self.data.fill(Color::WHITE);
    }

    /// A read-only view of the raw pixel data in row-major order
    pub fn pixels(&self) -> &[Color] {
        &self.data
    }
}
