use std::fmt;

use rand::Rng;

/// One cell color. Equality is component-wise across the three channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Name -> color registry. Entry order is the sampling order for random
/// grids; the map only indexes names for lookup.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    names: Vec<Box<str>>,
    colors: Vec<Color>,
    index: rustc_hash::FxHashMap<Box<str>, usize>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// The five colors of the standard game: white, black, red, green, blue.
    pub fn standard() -> Self {
        let mut palette = Self::new();
        palette.insert("white", Color::rgb(255, 255, 255));
        palette.insert("black", Color::rgb(0, 0, 0));
        palette.insert("red", Color::rgb(255, 0, 0));
        palette.insert("green", Color::rgb(0, 255, 0));
        palette.insert("blue", Color::rgb(0, 0, 255));
        palette
    }

    /// Registers a named color, returning its slot. Re-inserting a known
    /// name overwrites the color in place.
    pub fn insert(&mut self, name: &str, color: Color) -> usize {
        if let Some(&slot) = self.index.get(name) {
            self.colors[slot] = color;
            return slot;
        }
        let slot = self.colors.len();
        let boxed: Box<str> = name.into();
        self.index.insert(boxed.clone(), slot);
        self.names.push(boxed);
        self.colors.push(color);
        slot
    }

    pub fn get(&self, name: &str) -> Option<Color> {
        self.index.get(name).map(|&slot| self.colors[slot])
    }

    pub fn name_of(&self, color: Color) -> Option<&str> {
        self.colors
            .iter()
            .position(|&c| c == color)
            .map(|slot| &*self.names[slot])
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|n| &**n)
    }

    /// Uniform draw over the entries; `None` on an empty palette.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Color> {
        if self.colors.is_empty() {
            return None;
        }
        Some(self.colors[rng.gen_range(0..self.colors.len())])
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_palette_entries() {
        let palette = Palette::standard();
        assert_eq!(palette.len(), 5);
        assert_eq!(palette.get("white"), Some(Color::rgb(255, 255, 255)));
        assert_eq!(palette.get("blue"), Some(Color::rgb(0, 0, 255)));
        assert_eq!(palette.get("magenta"), None);
    }

    #[test]
    fn name_roundtrip() {
        let palette = Palette::standard();
        assert_eq!(palette.name_of(Color::rgb(255, 0, 0)), Some("red"));
        assert_eq!(palette.name_of(Color::rgb(1, 2, 3)), None);
    }

    #[test]
    fn insert_overwrites_known_name() {
        let mut palette = Palette::standard();
        let slot = palette.insert("red", Color::rgb(200, 0, 0));
        assert_eq!(slot, 2);
        assert_eq!(palette.len(), 5);
        assert_eq!(palette.get("red"), Some(Color::rgb(200, 0, 0)));
    }

    #[test]
    fn pick_stays_inside_palette() {
        use rand::SeedableRng;
        let palette = Palette::standard();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let color = palette.pick(&mut rng).unwrap();
            assert!(palette.colors().contains(&color));
        }
        assert_eq!(Palette::new().pick(&mut rng), None);
    }
}
