#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ColorRGB {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorRGB {
    #[cfg(test)]
    pub const WHITE: Self = Self::from_u32(0xffffff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_u32(u: u32) -> Self {
        Self::new((u >> 16) as u8, (u >> 8) as u8, u as u8)
    }
}

impl std::fmt::Display for ColorRGB {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
