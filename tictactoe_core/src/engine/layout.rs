use crate::engine::types::CellIndex;

/// 盤面の一辺の長さ（マス）。
const BOARD_LEN: i32 = 3;

/// ビューポートの短辺を何等分したものを1マスとするか。
const VIEWPORT_DIVISOR: i32 = 4;

/// 描画先の大きさ（ピクセル）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Viewport {
    /// 高さ。
    height: i32,
    /// 幅。
    width: i32,
}

impl Viewport {
    /// 高さを返す。
    #[inline]
    #[must_use]
    pub const fn height(self) -> i32 {
        self.height
    }

    /// 幅と高さから生成する。
    #[inline]
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { height, width }
    }

    /// 幅を返す。
    #[inline]
    #[must_use]
    pub const fn width(self) -> i32 {
        self.width
    }
}

/// 1マス分の矩形（左上と一辺の長さ）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CellRect {
    /// 左端の x 座標。
    left: i32,
    /// 一辺の長さ。
    size: i32,
    /// 上端の y 座標。
    top: i32,
}

impl CellRect {
    /// 点 `(x, y)` が矩形に含まれるかを返す（境界を含む）。
    #[inline]
    #[must_use]
    pub const fn contains(self, x: i32, y: i32) -> bool {
        x >= self.left
            && x <= self.left.saturating_add(self.size)
            && y >= self.top
            && y <= self.top.saturating_add(self.size)
    }

    /// 左端の x 座標を返す。
    #[inline]
    #[must_use]
    pub const fn left(self) -> i32 {
        self.left
    }

    /// 一辺の長さを返す。
    #[inline]
    #[must_use]
    pub const fn size(self) -> i32 {
        self.size
    }

    /// 上端の y 座標を返す。
    #[inline]
    #[must_use]
    pub const fn top(self) -> i32 {
        self.top
    }
}

/// 盤面の描画位置とマスの大きさ。
///
/// 盤面はビューポート中央に置き、1マスは短辺の1/4とする。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Layout {
    /// 1マスの一辺（ピクセル）。
    cell_size: i32,
    /// 盤面左上の x 座標。
    origin_x: i32,
    /// 盤面左上の y 座標。
    origin_y: i32,
}

impl Layout {
    /// マスの一辺を返す。
    #[inline]
    #[must_use]
    pub const fn cell_size(self) -> i32 {
        self.cell_size
    }

    /// 指定マスの矩形を返す。
    #[inline]
    #[must_use]
    pub fn cell_rect(self, index: CellIndex) -> CellRect {
        let x = i32::from(index.x());
        let y = i32::from(index.y());

        CellRect {
            left: self.origin_x.saturating_add(x.saturating_mul(self.cell_size)),
            size: self.cell_size,
            top: self.origin_y.saturating_add(y.saturating_mul(self.cell_size)),
        }
    }

    /// 点 `(x, y)` を含むマスを走査順にすべて返す。
    ///
    /// 境界上の点は隣接する2マス以上に含まれうる。
    #[inline]
    pub fn cells_at(self, x: i32, y: i32) -> impl Iterator<Item = CellIndex> {
        CellIndex::ALL
            .into_iter()
            .filter(move |&index| self.cell_rect(index).contains(x, y))
    }

    /// ビューポートから配置を計算する。
    #[inline]
    #[must_use]
    pub fn from_viewport(viewport: Viewport) -> Self {
        let cell_size = viewport
            .width
            .checked_div(VIEWPORT_DIVISOR)
            .unwrap_or_default()
            .min(viewport.height.checked_div(VIEWPORT_DIVISOR).unwrap_or_default())
            .max(0);
        let half_board = cell_size
            .saturating_mul(BOARD_LEN)
            .checked_div(2)
            .unwrap_or_default();

        Self {
            cell_size,
            origin_x: half_of(viewport.width).saturating_sub(half_board),
            origin_y: half_of(viewport.height).saturating_sub(half_board),
        }
    }

    /// 盤面左上の x 座標を返す。
    #[inline]
    #[must_use]
    pub const fn origin_x(self) -> i32 {
        self.origin_x
    }

    /// 盤面左上の y 座標を返す。
    #[inline]
    #[must_use]
    pub const fn origin_y(self) -> i32 {
        self.origin_y
    }
}

/// 整数の半分（0方向への切り捨て）。
fn half_of(value: i32) -> i32 {
    value.checked_div(2).unwrap_or_default()
}
