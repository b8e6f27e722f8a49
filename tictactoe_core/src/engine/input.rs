/// ポインタ（タッチ/マウス）の入力元。
///
/// 1フレームに1回ポーリングされる。
pub trait InputSource {
    /// ポインタが押されているかを返す。
    fn is_pointer_down(&self) -> bool;

    /// 最後に観測したポインタ位置（描画先のピクセル座標）を返す。
    fn pointer_position(&self) -> (i32, i32);
}

/// 1フレーム分のポインタ状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Pointer {
    /// 押されているかどうか。
    down: bool,
    /// x 座標。
    x: i32,
    /// y 座標。
    y: i32,
}

impl Pointer {
    /// 押されているかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_down(self) -> bool {
        self.down
    }

    /// 入力元から現在の状態を読み取る。
    #[inline]
    #[must_use]
    pub fn poll<I: InputSource + ?Sized>(input: &I) -> Self {
        let (x, y) = input.pointer_position();
        Self {
            down: input.is_pointer_down(),
            x,
            y,
        }
    }

    /// `(x, y)` で押されている状態を返す。
    #[inline]
    #[must_use]
    pub const fn pressed_at(x: i32, y: i32) -> Self {
        Self { down: true, x, y }
    }

    /// 離されている状態を返す。
    #[inline]
    #[must_use]
    pub const fn released() -> Self {
        Self {
            down: false,
            x: 0,
            y: 0,
        }
    }

    /// x 座標を返す。
    #[inline]
    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    /// y 座標を返す。
    #[inline]
    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }
}
