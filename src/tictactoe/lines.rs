//! Winning line analysis

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Three in a row for `player`.
pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
    let target = player.to_cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}

/// Lines still free of opponent pieces, weighted by the pieces `player`
/// already has in them.
pub fn open_line_score(cells: &[Cell; 9], player: Player) -> usize {
    let own = player.to_cell();
    let theirs = player.opponent().to_cell();
    WINNING_LINES
        .iter()
        .filter(|line| line.iter().all(|&idx| cells[idx] != theirs))
        .map(|line| 1 + line.iter().filter(|&&idx| cells[idx] == own).count())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(marks: &[(usize, Cell)]) -> [Cell; 9] {
        let mut cells = [Cell::Empty; 9];
        for &(pos, cell) in marks {
            cells[pos] = cell;
        }
        cells
    }

    #[test]
    fn test_has_won() {
        let row = cells(&[(0, Cell::X), (1, Cell::X), (2, Cell::X)]);
        assert!(has_won(&row, Player::X));
        assert!(!has_won(&row, Player::O));

        let column = cells(&[(0, Cell::O), (3, Cell::O), (6, Cell::O)]);
        assert!(has_won(&column, Player::O));
    }

    #[test]
    fn test_open_line_score() {
        let empty = [Cell::Empty; 9];
        assert_eq!(open_line_score(&empty, Player::X), 8);

        // centre X: four lines gain a piece, O keeps the four without it
        let centre = cells(&[(4, Cell::X)]);
        assert_eq!(open_line_score(&centre, Player::X), 12);
        assert_eq!(open_line_score(&centre, Player::O), 4);
    }
}
