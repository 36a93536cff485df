// Accent color with a fractional alpha, created from an unsigned 32 representing RRGGBB

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub fn from_u32(num: u32, a: f64) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = (num >> 0) as u8;

        Color { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Color {
        Color { a, ..self }
    }

    // CSS string handed to the 2d context as fill or stroke style
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
