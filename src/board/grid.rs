use std::fmt;
use std::path::Path;

use rand::Rng;

use crate::core::{Color, GameError, Palette, Result};

/// Square board of colored cells, stored flat in row-major order:
/// `index = row * side + column`. Length is always `side * side`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Grid {
    side: usize,
    cells: Vec<Color>,
}

impl Grid {
    pub fn from_cells(side: usize, cells: Vec<Color>) -> Result<Self> {
        if side == 0 {
            return Err(GameError::ZeroSide);
        }
        if cells.len() != side * side {
            return Err(GameError::CellCountMismatch {
                expected: side * side,
                got: cells.len(),
            });
        }
        Ok(Self { side, cells })
    }

    /// Every cell drawn independently and uniformly from the palette.
    pub fn random<R: Rng + ?Sized>(side: usize, palette: &Palette, rng: &mut R) -> Result<Self> {
        if side == 0 {
            return Err(GameError::ZeroSide);
        }
        if palette.is_empty() {
            return Err(GameError::EmptyPalette);
        }
        let cells = (0..side * side)
            .map(|_| palette.pick(rng).unwrap_or(Color::rgb(0, 0, 0)))
            .collect();
        Ok(Self { side, cells })
    }

    /// Builds a grid from nested rows of palette color names, the shape the
    /// JSON fixtures use. Rows must form a square of known names.
    pub fn from_names(rows: &[Vec<String>], palette: &Palette) -> Result<Self> {
        let side = rows.len();
        let mut cells = Vec::with_capacity(side * side);
        for row in rows {
            for name in row {
                let color = palette
                    .get(name)
                    .ok_or_else(|| GameError::UnknownColor(name.clone()))?;
                cells.push(color);
            }
        }
        Self::from_cells(side, cells)
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.side + col
    }

    pub fn coords_of(&self, index: usize) -> (usize, usize) {
        (index / self.side, index % self.side)
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.side && col < self.side
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        if self.in_bounds(row, col) {
            Some(self.cells[self.index_of(row, col)])
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, col: usize, color: Color) {
        debug_assert!(self.in_bounds(row, col));
        let index = self.index_of(row, col);
        self.cells[index] = color;
    }

    /// In-place reflection across the main diagonal. Only the upper
    /// triangle (col >= row) is walked so no pair is swapped twice;
    /// diagonal cells swap with themselves.
    pub fn transpose(&mut self) {
        for index in 0..self.cells.len() {
            let (row, col) = self.coords_of(index);
            if col >= row {
                let mirror = col * self.side + row;
                self.cells.swap(index, mirror);
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.side {
            for col in 0..self.side {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[self.index_of(row, col)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Loads a starting grid from a JSON file of nested color-name rows, e.g.
/// `[["white","red"],["blue","black"]]`.
pub fn load_grid(path: impl AsRef<Path>, palette: &Palette) -> anyhow::Result<Grid> {
    let content = std::fs::read_to_string(path)?;
    let rows: Vec<Vec<String>> = serde_json::from_str(&content)?;
    Ok(Grid::from_names(&rows, palette)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(names: &[&[&str]]) -> Grid {
        let palette = Palette::standard();
        let rows: Vec<Vec<String>> = names
            .iter()
            .map(|row| row.iter().map(|n| n.to_string()).collect())
            .collect();
        Grid::from_names(&rows, &palette).unwrap()
    }

    #[test]
    fn index_coordinate_roundtrip() {
        let grid = named(&[
            &["white", "black", "red"],
            &["green", "blue", "white"],
            &["black", "red", "green"],
        ]);
        assert_eq!(grid.index_of(0, 0), 0);
        assert_eq!(grid.index_of(1, 2), 5);
        assert_eq!(grid.coords_of(5), (1, 2));
        assert_eq!(grid.coords_of(8), (2, 2));
        for index in 0..9 {
            let (row, col) = grid.coords_of(index);
            assert_eq!(grid.index_of(row, col), index);
        }
    }

    #[test]
    fn cell_count_is_validated() {
        let cells = vec![Color::rgb(0, 0, 0); 8];
        assert!(matches!(
            Grid::from_cells(3, cells),
            Err(GameError::CellCountMismatch { expected: 9, got: 8 })
        ));
        assert!(matches!(Grid::from_cells(0, vec![]), Err(GameError::ZeroSide)));
    }

    #[test]
    fn transpose_2x2() {
        // [A,B,C,D] row-major becomes [A,C,B,D].
        let a = Color::rgb(255, 255, 255);
        let b = Color::rgb(0, 0, 0);
        let c = Color::rgb(255, 0, 0);
        let d = Color::rgb(0, 255, 0);
        let mut grid = Grid::from_cells(2, vec![a, b, c, d]).unwrap();
        grid.transpose();
        assert_eq!(grid.cells(), &[a, c, b, d]);
    }

    #[test]
    fn transpose_is_an_involution() {
        use rand::SeedableRng;
        let palette = Palette::standard();
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let original = Grid::random(9, &palette, &mut rng).unwrap();
        let mut grid = original.clone();
        grid.transpose();
        grid.transpose();
        assert_eq!(grid, original);
    }

    #[test]
    fn random_cells_come_from_palette() {
        use rand::SeedableRng;
        let palette = Palette::standard();
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let grid = Grid::random(9, &palette, &mut rng).unwrap();
        assert_eq!(grid.cells().len(), 81);
        assert!(grid.cells().iter().all(|c| palette.colors().contains(c)));
        assert!(matches!(
            Grid::random(9, &Palette::new(), &mut rng),
            Err(GameError::EmptyPalette)
        ));
    }

    #[test]
    fn load_grid_reads_name_rows() {
        let palette = Palette::standard();
        let path = std::env::temp_dir().join("floodcell_grid_fixture.json");
        std::fs::write(&path, r#"[["white","red"],["blue","black"]]"#).unwrap();
        let grid = load_grid(&path, &palette).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(grid.side(), 2);
        assert_eq!(grid.get(0, 1), Some(Color::rgb(255, 0, 0)));
        assert_eq!(grid.get(1, 0), Some(Color::rgb(0, 0, 255)));
    }

    #[test]
    fn from_names_rejects_bad_input() {
        let palette = Palette::standard();
        let unknown = vec![vec!["white".to_string(), "mauve".to_string()]];
        assert!(matches!(
            Grid::from_names(&unknown, &palette),
            Err(GameError::UnknownColor(_))
        ));
        let ragged = vec![
            vec!["white".to_string(), "black".to_string()],
            vec!["red".to_string()],
        ];
        assert!(matches!(
            Grid::from_names(&ragged, &palette),
            Err(GameError::CellCountMismatch { .. })
        ));
    }
}
