use super::Grid;
use crate::Pos2;

/// A read-only rectangular view over the live cells of a [`Grid`]
///
/// The window covers `top_left` inclusive to `bottom_right` exclusive and never
/// wraps; positions outside `[0, size)` simply have no cells.
pub struct GridWindow<'a> {
    tl: Pos2,
    br: Pos2,
    grid: &'a Grid,
}
impl<'a> GridWindow<'a> {
    pub fn new(grid: &'a Grid, top_left: Pos2, bottom_right: Pos2) -> Self {
        Self {
            tl: top_left,
            br: bottom_right,
            grid,
        }
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Pos2> + 'a {
        let rx = self.tl.x..self.br.x;
        let ry = self.tl.y..self.br.y;
        self.grid
            .iter_alive()
            .filter(move |pos| rx.contains(&pos.x) && ry.contains(&pos.y))
    }
}

impl std::fmt::Display for GridWindow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut last = self.tl - Pos2 { x: 1, y: 0 };
        for alive in self.iter() {
            // determine the number of lines to print
            let lines = alive.y - last.y;
            // determine the number of padding spaces to print
            let padding = match lines {
                0 => alive.x - last.x - 1,
                _ => alive.x - self.tl.x,
            };
            write!(
                f,
                "{0:\n<1$}{0: <2$}█",
                "", lines as usize, padding as usize
            )?;
            last = alive;
        }
        Ok(())
    }
}
