/// An RGBA color with 8 bits per channel as it is stored on the canvas
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 is fully opaque)
    pub a: u8,
}

impl Color {
    /// Opaque white, the canvas background color
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    /// Opaque black, the default stroke color
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    /// Opaque red
    pub const RED: Color = Color::rgb(0xFF, 0x00, 0x00);
    /// Opaque green
    pub const GREEN: Color = Color::rgb(0x00, 0x80, 0x00);
    /// Opaque blue
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xFF);
    /// Opaque yellow
    pub const YELLOW: Color = Color::rgb(0xFF, 0xD7, 0x00);

    /// Construct a fully opaque color from its three channel values
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Pack the color into `0RGB` form as framebuffer presentation expects it
    ///
    /// The alpha channel is dropped because presented pixels are always fully opaque.
    pub fn to_argb(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<u32> for Color {
    /// Interpret a `0xRRGGBB` value as an opaque color
    fn from(value: u32) -> Self {
        Self::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let color = Color::from(0xAB_CD_EF);
        assert_eq!(color, Color::rgb(0xAB, 0xCD, 0xEF));
        assert_eq!(color.to_argb(), 0xAB_CD_EF);
    }

    #[test]
    fn test_tuple_construction_is_opaque() {
        let color = Color::from((1, 2, 3));
        assert_eq!(color.a, 0xFF);
    }
}
