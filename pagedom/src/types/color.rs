#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    /// CSS custom property reference, e.g. `--border-color`.
    Var(String),
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::Rgba { r, g, b, a }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Parse `#rrggbb` or `#rgb`. Returns `None` for anything else.
    pub fn hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        let channel = |i: usize, len: usize| u8::from_str_radix(digits.get(i..i + len)?, 16).ok();
        match digits.len() {
            6 => Some(Self::rgb(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
            3 => {
                let expand = |v: u8| v * 17;
                Some(Self::rgb(
                    expand(channel(0, 1)?),
                    expand(channel(1, 1)?),
                    expand(channel(2, 1)?),
                ))
            }
            _ => None,
        }
    }

    pub fn to_css(&self) -> String {
        match self {
            Self::Rgb { r, g, b } => format!("rgb({r}, {g}, {b})"),
            Self::Rgba { r, g, b, a } => format!("rgba({r}, {g}, {b}, {a})"),
            Self::Var(name) => format!("var({name})"),
        }
    }
}
