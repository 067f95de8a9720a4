#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    /// A palette slot resolved by the backend (e.g. `"link"`, `"muted"`).
    Var(String),
}

impl Color {
    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Resolve to RGB, using `lookup` for palette variables.
    pub fn resolve(&self, lookup: impl Fn(&str) -> Option<Rgb>) -> Option<Rgb> {
        match self {
            Self::Rgb { r, g, b } => Some(Rgb::new(*r, *g, *b)),
            Self::Var(name) => lookup(name),
        }
    }
}
