//! SDL のキャンバスを `Surface` として扱うための実装。

use crate::font;
use sdl2::mouse::MouseState;
use sdl2::pixels::Color as SdlColor;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;
use tictactoe_core::engine::InputSource;
use tictactoe_core::render::{self, MeasureText, Surface};

/// 文字の拡大率（1ドットのピクセル数）。
const TEXT_SCALE: i32 = 3;

/// 意味づけされた色を RGB に変換する。
fn rgb(color: render::Color) -> SdlColor {
    match color {
        render::Color::Background => SdlColor::RGB(255, 255, 255),
        render::Color::Ink => SdlColor::RGB(0, 0, 0),
        render::Color::PlayerOne => SdlColor::RGB(0, 0, 255),
        render::Color::PlayerTwo => SdlColor::RGB(160, 32, 240),
        render::Color::Success => SdlColor::RGB(0, 255, 0),
        _ => SdlColor::RGB(0, 0, 0),
    }
}

/// 太さ `thickness` の線を1ピクセル線の重ね描きで表すときのずらし量。
fn thickness_offsets(thickness: i32) -> std::ops::Range<i32> {
    let start = -(thickness / 2);
    start..start + thickness.max(1)
}

/// 中点円アルゴリズムで円周上の点を返す。
fn circle_points(cx: i32, cy: i32, radius: i32) -> Vec<Point> {
    let mut points = Vec::new();
    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;

    while x >= y {
        for (px, py) in [
            (x, y),
            (y, x),
            (-y, x),
            (-x, y),
            (-x, -y),
            (-y, -x),
            (y, -x),
            (x, -y),
        ] {
            points.push(Point::new(cx + px, cy + py));
        }

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }

    points
}

/// 1フレーム分の描画先。
pub struct CanvasSurface<'canvas> {
    canvas: &'canvas mut Canvas<Window>,
    line_thickness: i32,
}

impl<'canvas> CanvasSurface<'canvas> {
    pub fn new(canvas: &'canvas mut Canvas<Window>) -> Self {
        Self {
            canvas,
            line_thickness: 1,
        }
    }
}

impl MeasureText for CanvasSurface<'_> {
    fn measure_text(&self, text: &str) -> render::TextSize {
        let chars = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        if chars == 0 {
            return render::TextSize::new(0, 0);
        }

        let advance = (font::GLYPH_WIDTH + font::GLYPH_SPACING) * TEXT_SCALE;
        let width = chars.saturating_mul(advance) - font::GLYPH_SPACING * TEXT_SCALE;
        render::TextSize::new(width, font::GLYPH_HEIGHT * TEXT_SCALE)
    }
}

impl Surface for CanvasSurface<'_> {
    fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32) {
        for offset in thickness_offsets(self.line_thickness) {
            let points = circle_points(cx, cy, radius + offset);
            let _: Result<(), String> = self.canvas.draw_points(points.as_slice());
        }
    }

    fn draw_line_segment(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        // 傾きが緩い線は縦に、急な線は横にずらして太くする。
        let shallow = (x2 - x1).abs() >= (y2 - y1).abs();
        for offset in thickness_offsets(self.line_thickness) {
            let (ox, oy) = if shallow { (0, offset) } else { (offset, 0) };
            let _: Result<(), String> = self
                .canvas
                .draw_line((x1 + ox, y1 + oy), (x2 + ox, y2 + oy));
        }
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        for offset in thickness_offsets(self.line_thickness) {
            let w = match u32::try_from(width - offset * 2) {
                Ok(value) if value > 0 => value,
                _ => continue,
            };
            let h = match u32::try_from(height - offset * 2) {
                Ok(value) if value > 0 => value,
                _ => continue,
            };
            let rect = Rect::new(x + offset, y + offset, w, h);
            let _: Result<(), String> = self.canvas.draw_rect(rect);
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        let advance = (font::GLYPH_WIDTH + font::GLYPH_SPACING) * TEXT_SCALE;
        let dot = TEXT_SCALE as u32;
        let mut left = x;

        for c in text.chars() {
            if let Some(rows) = font::glyph(c) {
                for (row, bits) in (0..).zip(rows) {
                    for col in 0..font::GLYPH_WIDTH {
                        if bits & (0x10 >> col) == 0 {
                            continue;
                        }
                        let rect = Rect::new(
                            left + col * TEXT_SCALE,
                            y + row * TEXT_SCALE,
                            dot,
                            dot,
                        );
                        let _: Result<(), String> = self.canvas.fill_rect(rect);
                    }
                }
            }
            left += advance;
        }
    }

    fn set_background_color(&mut self, color: render::Color) {
        let current = self.canvas.draw_color();
        self.canvas.set_draw_color(rgb(color));
        self.canvas.clear();
        self.canvas.set_draw_color(current);
    }

    fn set_color(&mut self, color: render::Color) {
        self.canvas.set_draw_color(rgb(color));
    }

    fn set_line_thickness(&mut self, px: i32) {
        self.line_thickness = px;
    }

    fn viewport_height(&self) -> i32 {
        let (_, height) = self.canvas.output_size().unwrap_or((0, 0));
        i32::try_from(height).unwrap_or(i32::MAX)
    }

    fn viewport_width(&self) -> i32 {
        let (width, _) = self.canvas.output_size().unwrap_or((0, 0));
        i32::try_from(width).unwrap_or(i32::MAX)
    }
}

/// フレーム開始時点のマウス状態（左ボタンをポインタとみなす）。
#[derive(Debug)]
pub struct MouseInput {
    down: bool,
    x: i32,
    y: i32,
}

impl From<MouseState> for MouseInput {
    fn from(state: MouseState) -> Self {
        Self {
            down: state.left(),
            x: state.x(),
            y: state.y(),
        }
    }
}

impl InputSource for MouseInput {
    fn is_pointer_down(&self) -> bool {
        self.down
    }

    fn pointer_position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}
