use crate::engine::types::{Cell, CellIndex, Mark};

/// 勝利ライン（3マス）のインデックス。インデックスは `x * 3 + y`。
const LINES: [[u8; 3]; 8] = [
    // 行（y 固定）
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // 列（x 固定）
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // 対角線 (0,0)-(1,1)-(2,2)
    [0, 4, 8],
    // 反対角線 (2,0)-(1,1)-(0,2)
    [6, 4, 2],
];

/// 盤面のマス数。
const CELL_COUNT: usize = 9;

/// 3×3 の盤面。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Board {
    /// `CellIndex::index()` 順のマス。
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// 指定マスの状態を返す。
    #[inline]
    #[must_use]
    pub fn cell(&self, index: CellIndex) -> Cell {
        self.cells
            .get(usize::from(index.index()))
            .copied()
            .unwrap_or_default()
    }

    /// 空の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Free; CELL_COUNT],
        }
    }

    /// 空きマスの数を返す。
    #[inline]
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_free()).count()
    }

    /// `mark` が縦・横・斜めのいずれかで3つ揃っているかを返す。
    #[inline]
    #[must_use]
    pub fn has_line(&self, mark: Mark) -> bool {
        let target = Cell::Marked(mark);
        LINES.iter().any(|line| {
            line.iter()
                .all(|&idx| self.cells.get(usize::from(idx)) == Some(&target))
        })
    }

    /// 空きマスが無いかどうかを返す。
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_free())
    }

    /// 全マスを走査順（x が外側、y が内側）に返す。
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, Cell)> + '_ {
        CellIndex::ALL
            .into_iter()
            .map(move |index| (index, self.cell(index)))
    }

    /// 空きマスに記号を置く。置けた場合は `true`。
    ///
    /// 既に記号があるマスは書き換えない。
    #[inline]
    pub fn place(&mut self, index: CellIndex, mark: Mark) -> bool {
        match self.cells.get_mut(usize::from(index.index())) {
            Some(cell) if cell.is_free() => {
                *cell = Cell::Marked(mark);
                true
            }
            Some(_) | None => false,
        }
    }

    /// 全マスを空きに戻す。
    #[inline]
    pub fn clear(&mut self) {
        self.cells = [Cell::Free; CELL_COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::engine::types::{Cell, CellIndex, Mark};

    fn board_with(marks: &[(u8, u8, Mark)]) -> Board {
        let mut board = Board::empty();
        for &(x, y, mark) in marks {
            let index = CellIndex::from_xy(x, y);
            assert!(index.is_some(), "bad coordinate ({x}, {y})");
            if let Some(value) = index {
                assert!(board.place(value, mark));
            }
        }
        board
    }

    fn line_of(mark: Mark, coords: [(u8, u8); 3]) -> Board {
        let marks: Vec<(u8, u8, Mark)> = coords.iter().map(|&(x, y)| (x, y, mark)).collect();
        board_with(&marks)
    }

    #[test]
    fn every_row_and_column_wins() {
        for fixed in 0_u8..3 {
            let row = line_of(Mark::Cross, [(0, fixed), (1, fixed), (2, fixed)]);
            assert!(row.has_line(Mark::Cross), "row y={fixed}");
            assert!(!row.has_line(Mark::Circle));

            let column = line_of(Mark::Circle, [(fixed, 0), (fixed, 1), (fixed, 2)]);
            assert!(column.has_line(Mark::Circle), "column x={fixed}");
            assert!(!column.has_line(Mark::Cross));
        }
    }

    #[test]
    fn main_diagonal_wins() {
        let board = line_of(Mark::Cross, [(0, 0), (1, 1), (2, 2)]);
        assert!(board.has_line(Mark::Cross));
    }

    #[test]
    fn anti_diagonal_wins() {
        let board = line_of(Mark::Circle, [(0, 2), (1, 1), (2, 0)]);
        assert!(board.has_line(Mark::Circle));
        assert!(!board.has_line(Mark::Cross));
    }

    #[test]
    fn mixed_line_does_not_win() {
        let board = board_with(&[
            (0, 0, Mark::Cross),
            (1, 0, Mark::Circle),
            (2, 0, Mark::Cross),
        ]);
        assert!(!board.has_line(Mark::Cross));
        assert!(!board.has_line(Mark::Circle));
    }

    #[test]
    fn place_refuses_occupied_cell() {
        let mut board = Board::empty();
        let center = CellIndex::from_xy(1, 1);
        assert!(center.is_some());
        let Some(center) = center else { return };

        assert!(board.place(center, Mark::Cross));
        let before = board;
        assert!(!board.place(center, Mark::Circle));
        assert_eq!(board, before);
        assert_eq!(board.cell(center), Cell::Marked(Mark::Cross));
    }

    #[test]
    fn full_and_clear() {
        let mut board = Board::empty();
        assert_eq!(board.free_count(), 9);
        for index in CellIndex::ALL {
            assert!(!board.is_full());
            assert!(board.place(index, Mark::Circle));
        }
        assert!(board.is_full());
        assert_eq!(board.free_count(), 0);

        board.clear();
        assert_eq!(board, Board::empty());
    }
}
