/// プレイヤー。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Player {
    /// 先手（プレイヤー1）。
    One,
    /// 後手（プレイヤー2）。
    Two,
}

impl Player {
    /// そのプレイヤーが置く記号を返す。
    #[inline]
    #[must_use]
    pub const fn mark(self) -> Mark {
        match self {
            Self::One => Mark::Cross,
            Self::Two => Mark::Circle,
        }
    }

    /// 相手側のプレイヤーを返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

/// マスに置かれる記号。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Mark {
    /// 後手の記号（○）。
    Circle,
    /// 先手の記号（×）。
    Cross,
}

/// マスの状態。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Cell {
    /// 空きマス。
    #[default]
    Free,
    /// 記号が置かれたマス。
    Marked(Mark),
}

impl Cell {
    /// 空きマスかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_free(self) -> bool {
        matches!(self, Self::Free)
    }
}

/// 盤面上のマス（0..=8のインデックス）。
///
/// 走査順を x 優先（x が外側、y が内側）に揃えるため、インデックスは `x * 3 + y` とする。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CellIndex(
    /// `x * 3 + y` に対応する0..=8の値。
    u8,
);

impl CellIndex {
    /// 全マスを走査順（x が外側、y が内側）に並べたもの。
    pub const ALL: [Self; 9] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
    ];

    /// 盤の一辺の長さ。
    pub const BOARD_LEN: u8 = 3;

    /// 盤面座標（x, y）から `CellIndex` を生成する。
    #[inline]
    #[must_use]
    pub const fn from_xy(x: u8, y: u8) -> Option<Self> {
        if x >= Self::BOARD_LEN || y >= Self::BOARD_LEN {
            return None;
        }

        let mut idx = match x.checked_mul(Self::BOARD_LEN) {
            Some(value) => value,
            None => return None,
        };

        idx = match idx.checked_add(y) {
            Some(value) => value,
            None => return None,
        };

        Some(Self(idx))
    }

    /// 0..=8 のインデックスを返す。
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// x 座標（0..=2）を返す。
    #[inline]
    #[must_use]
    pub const fn x(self) -> u8 {
        match self.0.checked_div(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }

    /// y 座標（0..=2）を返す。
    #[inline]
    #[must_use]
    pub const fn y(self) -> u8 {
        match self.0.checked_rem(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }
}
