use crate::render::commands::Color;

/// 描画した文字列の大きさ（ピクセル）。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct TextSize {
    /// 高さ。
    height: i32,
    /// 幅。
    width: i32,
}

impl TextSize {
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

/// 文字列を描画したときの大きさを求める。
pub trait MeasureText {
    /// `text` を現在のフォントで描画したときの大きさを返す。
    fn measure_text(&self, text: &str) -> TextSize;
}

/// 描画先。
///
/// 色と線の太さは状態として保持され、以降の描画に適用される。
pub trait Surface: MeasureText {
    /// 中心 `(cx, cy)`、半径 `radius` の円（輪郭）を描く。
    fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32);

    /// 線分を描く。
    fn draw_line_segment(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);

    /// 矩形（輪郭）を描く。
    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// 左上 `(x, y)` に文字列を描く。
    fn draw_text(&mut self, text: &str, x: i32, y: i32);

    /// 背景色を設定する。
    fn set_background_color(&mut self, color: Color);

    /// 描画色を設定する。
    fn set_color(&mut self, color: Color);

    /// 線の太さ（ピクセル）を設定する。
    fn set_line_thickness(&mut self, px: i32);

    fn viewport_height(&self) -> i32;

    fn viewport_width(&self) -> i32;
}
