use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{LayoutError, Result};
use crate::solver::config::Configuration;

/// Contents of one Hoppers board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// The single red frog that must survive.
    Red,
    /// A green frog; jumped frogs are removed.
    Green,
    /// A playable cell with nothing on it.
    Empty,
    /// Terrain outside the staggered lattice; never playable.
    Invalid,
}

impl Cell {
    fn from_char(symbol: char) -> std::result::Result<Self, LayoutError> {
        match symbol {
            'R' => Ok(Cell::Red),
            'G' => Ok(Cell::Green),
            '.' => Ok(Cell::Empty),
            '*' => Ok(Cell::Invalid),
            other => Err(LayoutError::UnknownCell(other)),
        }
    }

    fn as_char(self) -> char {
        match self {
            Cell::Red => 'R',
            Cell::Green => 'G',
            Cell::Empty => '.',
            Cell::Invalid => '*',
        }
    }

    fn is_frog(self) -> bool {
        matches!(self, Cell::Red | Cell::Green)
    }
}

/// A rejected interactive hop. The board is left untouched whenever one
/// of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HopError {
    #[error("({0}, {1}) is outside the board")]
    OutOfBounds(usize, usize),
    #[error("no frog at ({0}, {1})")]
    NoFrog(usize, usize),
    #[error("landing cell ({0}, {1}) is not empty")]
    LandingBlocked(usize, usize),
    #[error("({0}, {1}) to ({2}, {3}) is not a legal hop")]
    NotAHop(usize, usize, usize, usize),
    #[error("no green frog to jump between ({0}, {1}) and ({2}, {3})")]
    NothingToJump(usize, usize, usize, usize),
}

/// One board state of the Hoppers puzzle.
///
/// The grid is a staggered lattice: only cells whose row and column sum
/// to an even number are playable, the rest are `*` filler. Frogs jump
/// over an adjacent green frog into the empty cell beyond it, removing
/// the jumped frog. Diagonal jumps are always available; straight jumps
/// exist only on even rows, where the next playable cell in a cardinal
/// direction sits two columns or rows away. The puzzle is won when no
/// green frogs remain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HoppersConfig {
    rows: usize,
    cols: usize,
    board: Vec<Cell>,
}

/// Diagonal jumps go over the cell one step away and land two steps away.
const DIAGONALS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Straight jumps skip the unplayable in-between column/row: the jumped
/// frog is two steps away and the landing four.
const CARDINALS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl HoppersConfig {
    /// Reads a layout file: a `rows cols` header, then one line of
    /// whitespace-separated cell symbols per row.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(LayoutError::Io)?;
        Ok(text.parse::<Self>()?)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at `(row, col)`, or `None` when out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.board[row * self.cols + col])
        } else {
            None
        }
    }

    fn cell_at_offset(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < self.rows && c < self.cols).then_some((r, c))
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.board[row * self.cols + col] = cell;
    }

    /// Collects every single-jump move available to the frog at `(row, col)`.
    fn jumps_from(&self, row: usize, col: usize, configs: &mut Vec<Self>) {
        let mover = self.board[row * self.cols + col];

        for (dr, dc) in DIAGONALS {
            self.try_jump(row, col, dr, dc, mover, configs);
        }
        if row % 2 == 0 {
            for (dr, dc) in CARDINALS {
                self.try_jump(row, col, dr * 2, dc * 2, mover, configs);
            }
        }
    }

    /// Attempts one jump over `(row + dr, col + dc)` landing at twice the
    /// offset, pushing the resulting board if it is legal.
    fn try_jump(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
        mover: Cell,
        configs: &mut Vec<Self>,
    ) {
        let Some((mid_r, mid_c)) = self.cell_at_offset(row, col, dr, dc) else {
            return;
        };
        let Some((land_r, land_c)) = self.cell_at_offset(row, col, dr * 2, dc * 2) else {
            return;
        };
        if self.board[mid_r * self.cols + mid_c] != Cell::Green {
            return;
        }
        if self.board[land_r * self.cols + land_c] != Cell::Empty {
            return;
        }

        let mut next = self.clone();
        next.set(row, col, Cell::Empty);
        next.set(mid_r, mid_c, Cell::Empty);
        next.set(land_r, land_c, mover);
        configs.push(next);
    }

    /// Validates and applies one user-requested hop from `from` to `to`
    /// on this live board. Search nodes are never mutated this way; this
    /// is the interactive-play entry point.
    pub fn hop(
        &mut self,
        from: (usize, usize),
        to: (usize, usize),
    ) -> std::result::Result<(), HopError> {
        let mover = self
            .cell(from.0, from.1)
            .ok_or(HopError::OutOfBounds(from.0, from.1))?;
        if !mover.is_frog() {
            return Err(HopError::NoFrog(from.0, from.1));
        }
        let landing = self
            .cell(to.0, to.1)
            .ok_or(HopError::OutOfBounds(to.0, to.1))?;
        if landing != Cell::Empty {
            return Err(HopError::LandingBlocked(to.0, to.1));
        }

        let dr = to.0 as isize - from.0 as isize;
        let dc = to.1 as isize - from.1 as isize;
        let diagonal = dr.abs() == 2 && dc.abs() == 2;
        let straight =
            from.0 % 2 == 0 && ((dr.abs() == 4 && dc == 0) || (dr == 0 && dc.abs() == 4));
        if !diagonal && !straight {
            return Err(HopError::NotAHop(from.0, from.1, to.0, to.1));
        }

        let mid = (
            from.0.wrapping_add_signed(dr / 2),
            from.1.wrapping_add_signed(dc / 2),
        );
        if self.cell(mid.0, mid.1) != Some(Cell::Green) {
            return Err(HopError::NothingToJump(from.0, from.1, to.0, to.1));
        }

        self.set(from.0, from.1, Cell::Empty);
        self.set(mid.0, mid.1, Cell::Empty);
        self.set(to.0, to.1, mover);
        Ok(())
    }
}

impl Configuration for HoppersConfig {
    /// Scans the board in row-major order and gathers every legal single
    /// jump from every frog. Multi-hop chains are not composed; each hop
    /// is its own edge in the search graph.
    fn neighbors(&self) -> Vec<Self> {
        let mut configs = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.board[row * self.cols + col].is_frog() {
                    self.jumps_from(row, col, &mut configs);
                }
            }
        }
        configs
    }

    fn is_goal(&self) -> bool {
        !self.board.contains(&Cell::Green)
    }
}

impl FromStr for HoppersConfig {
    type Err = LayoutError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut lines = s.lines().filter(|line| !line.trim().is_empty());
        let header = lines.next().ok_or(LayoutError::MissingHeader)?;

        let mut fields = header.split_whitespace();
        let dimension = |field: Option<&str>| {
            field
                .ok_or_else(|| LayoutError::BadDimension(header.to_string()))?
                .parse::<usize>()
                .map_err(|_| LayoutError::BadDimension(header.to_string()))
        };
        let rows = dimension(fields.next())?;
        let cols = dimension(fields.next())?;

        let mut board = Vec::with_capacity(rows * cols);
        let mut found_rows = 0;
        for (row, line) in lines.take(rows).enumerate() {
            let cells: Vec<&str> = line.split_whitespace().collect();
            if cells.len() != cols {
                return Err(LayoutError::RowWidth {
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }
            for token in cells {
                // Cell symbols are single characters; split_whitespace
                // never yields an empty token.
                let symbol = token.chars().next().unwrap_or(' ');
                board.push(Cell::from_char(symbol)?);
            }
            found_rows += 1;
        }
        if found_rows != rows {
            return Err(LayoutError::RowCount {
                expected: rows,
                found: found_rows,
            });
        }

        Ok(Self { rows, cols, board })
    }
}

impl fmt::Display for HoppersConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.board[row * self.cols + col].as_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::engine::Solver;

    fn board(text: &str) -> HoppersConfig {
        text.parse().unwrap()
    }

    #[test]
    fn parses_dimensions_and_cells() {
        let config = board("3 3\nR * .\n* G *\n. * .");
        assert_eq!(config.rows(), 3);
        assert_eq!(config.cols(), 3);
        assert_eq!(config.cell(0, 0), Some(Cell::Red));
        assert_eq!(config.cell(1, 1), Some(Cell::Green));
        assert_eq!(config.cell(2, 2), Some(Cell::Empty));
        assert_eq!(config.cell(3, 0), None);
    }

    #[test]
    fn rejects_malformed_layouts() {
        assert!(matches!(
            "".parse::<HoppersConfig>(),
            Err(LayoutError::MissingHeader)
        ));
        assert!(matches!(
            "x 3\n".parse::<HoppersConfig>(),
            Err(LayoutError::BadDimension(_))
        ));
        assert!(matches!(
            "1 3\nR *".parse::<HoppersConfig>(),
            Err(LayoutError::RowWidth { .. })
        ));
        assert!(matches!(
            "1 3\nR * Q".parse::<HoppersConfig>(),
            Err(LayoutError::UnknownCell('Q'))
        ));
        assert!(matches!(
            "2 3\nR * .".parse::<HoppersConfig>(),
            Err(LayoutError::RowCount { .. })
        ));
    }

    #[test]
    fn diagonal_jump_removes_the_jumped_frog() {
        let config = board("3 3\nR * .\n* G *\n. * .");
        let neighbors = config.neighbors();
        assert_eq!(neighbors.len(), 1);
        assert_eq!(neighbors[0], board("3 3\n. * .\n* . *\n. * R"));
    }

    #[test]
    fn straight_jump_spans_four_cells_on_even_rows() {
        let config = board("1 5\nR * G * .");
        let neighbors = config.neighbors();
        assert_eq!(neighbors.len(), 1);
        assert_eq!(neighbors[0], board("1 5\n. * . * R"));
    }

    #[test]
    fn odd_rows_have_no_straight_jumps() {
        // R and G sit on the same odd row two playable cells apart; only
        // diagonal moves exist there, so the frog is stuck.
        let config = board("3 5\n. * . * .\n* R * G *\n. * . * .");
        assert!(config.neighbors().is_empty());
    }

    #[test]
    fn all_frogs_contribute_moves() {
        // Green frogs jump over green frogs too: R hops (1,1) down-right,
        // the green at (0,2) hops the same frog down-left.
        let neighbors = board("3 3\nR * G\n* G *\n. * .").neighbors();
        assert_eq!(neighbors.len(), 2);
    }

    #[test]
    fn goal_is_no_green_frogs_left() {
        assert!(board("1 3\nR * .").is_goal());
        assert!(!board("1 5\nR * G * .").is_goal());
    }

    #[test]
    fn lone_red_frog_solves_immediately() {
        let start = board("1 3\nR * .");
        let (path, stats) = Solver::new().solve(start.clone());
        assert_eq!(path, Some(vec![start]));
        assert_eq!(stats.unique_configs, 1);
    }

    #[test]
    fn stranded_green_frog_has_no_solution() {
        let (path, _) = Solver::new().solve(board("3 5\n. * . * .\n* R * G *\n. * . * ."));
        assert!(path.is_none());
    }

    #[test]
    fn two_jump_board_is_solved_shortest_first() {
        // R clears both greens with two diagonal hops.
        let start = board("5 5\nR * . * .\n* G * . *\n. * . * .\n* . * G *\n. * . * .");
        let (path, _) = Solver::new().solve(start);
        let path = path.unwrap();
        assert!(path.last().unwrap().is_goal());
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn hop_applies_a_valid_move() {
        let mut config = board("3 3\nR * .\n* G *\n. * .");
        config.hop((0, 0), (2, 2)).unwrap();
        assert_eq!(config, board("3 3\n. * .\n* . *\n. * R"));
    }

    #[test]
    fn hop_rejects_invalid_moves_without_mutating() {
        let pristine = board("3 3\nR * .\n* G *\n. * .");

        let mut config = pristine.clone();
        assert_eq!(config.hop((5, 0), (2, 2)), Err(HopError::OutOfBounds(5, 0)));
        assert_eq!(config.hop((0, 2), (2, 2)), Err(HopError::NoFrog(0, 2)));
        assert_eq!(
            config.hop((0, 0), (1, 1)),
            Err(HopError::LandingBlocked(1, 1))
        );
        assert_eq!(config.hop((0, 0), (2, 0)), Err(HopError::NotAHop(0, 0, 2, 0)));
        assert_eq!(config, pristine);

        // A geometrically sound hop with no frog in between.
        let mut open = board("3 3\nR * .\n* . *\n. * .");
        assert_eq!(
            open.hop((0, 0), (2, 2)),
            Err(HopError::NothingToJump(0, 0, 2, 2))
        );
    }

    #[test]
    fn straight_hop_is_rejected_from_odd_rows() {
        // Distance-four straight hops only exist on even rows, even when
        // the in-between frog and the landing cell line up.
        let mut config = board("3 7\n. * . * . * .\n* R * G * . *\n. * . * . * .");
        assert_eq!(
            config.hop((1, 1), (1, 5)),
            Err(HopError::NotAHop(1, 1, 1, 5))
        );
    }

    #[test]
    fn display_round_trips_the_layout_body() {
        let config = board("3 3\nR * .\n* G *\n. * .");
        assert_eq!(config.to_string(), "R * .\n* G *\n. * .");
    }
}
