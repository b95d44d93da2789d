use crate::core::Color;

use super::grid::Grid;

/// Recolors the maximal 4-connected region around the seed, replacing every
/// cell that matches the seed's color as it was before the fill started.
/// Returns the number of recolored cells.
///
/// The traversal is an explicit work-list rather than call recursion, so a
/// region spanning the whole board costs heap, not stack. Cells are
/// recolored when pushed; a revisit no longer matches the captured target
/// color, which prunes it without a visited set. Neighbors are probed in a
/// fixed order (up, down, left, right) for reproducible traces.
///
/// An out-of-bounds seed, or a seed already holding `replacement`, is a
/// no-op returning 0. Callers that treat the equal-color case as a
/// redundant move should check before invoking; the guard here only keeps
/// the fill total.
pub fn flood_fill(grid: &mut Grid, row: usize, col: usize, replacement: Color) -> usize {
    let target = match grid.get(row, col) {
        Some(color) => color,
        None => return 0,
    };
    if target == replacement {
        return 0;
    }

    let mut stack = vec![(row, col)];
    grid.set(row, col, replacement);
    let mut recolored = 1;

    while let Some((r, c)) = stack.pop() {
        for (dr, dc) in &[(-1i32, 0i32), (1, 0), (0, -1), (0, 1)] {
            let nr = r as i32 + dr;
            let nc = c as i32 + dc;
            if nr < 0 || nc < 0 {
                continue;
            }
            let (nr, nc) = (nr as usize, nc as usize);
            if grid.get(nr, nc) == Some(target) {
                grid.set(nr, nc, replacement);
                recolored += 1;
                stack.push((nr, nc));
            }
        }
    }
    recolored
}
