use crate::render::surface::Surface;

/// 描画に使う色（意味づけのみ。実際の RGB は UI 側で決める）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Color {
    /// 背景。
    Background,
    /// 盤面の線や中立なメッセージ。
    Ink,
    /// プレイヤー1の手番表示。
    PlayerOne,
    /// プレイヤー2の手番表示。
    PlayerTwo,
    /// 勝利表示。
    Success,
}

/// 1つの描画指示。
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Command {
    /// 円（輪郭）。
    Circle {
        /// 中心の x 座標。
        cx: i32,
        /// 中心の y 座標。
        cy: i32,
        /// 半径。
        radius: i32,
    },
    /// 線分。
    LineSegment {
        /// 始点の x 座標。
        x1: i32,
        /// 終点の x 座標。
        x2: i32,
        /// 始点の y 座標。
        y1: i32,
        /// 終点の y 座標。
        y2: i32,
    },
    /// 矩形（輪郭）。
    Rect {
        /// 高さ。
        height: i32,
        /// 幅。
        width: i32,
        /// 左端の x 座標。
        x: i32,
        /// 上端の y 座標。
        y: i32,
    },
    /// 背景色の設定。
    SetBackgroundColor(Color),
    /// 描画色の設定。
    SetColor(Color),
    /// 線の太さの設定。
    SetLineThickness(i32),
    /// 文字列。
    Text {
        /// 描画する文字列。
        text: String,
        /// 左端の x 座標。
        x: i32,
        /// 上端の y 座標。
        y: i32,
    },
}

/// 1フレーム分の描画指示（先頭から順に適用する）。
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct RenderCommands {
    /// 描画指示の列。
    commands: Vec<Command>,
}

impl RenderCommands {
    /// 描画指示の列を返す。
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Command] {
        &self.commands
    }

    /// 描画先に描画指示を順に適用する。
    #[inline]
    pub fn draw_on<S: Surface + ?Sized>(&self, surface: &mut S) {
        for command in &self.commands {
            match *command {
                Command::Circle { cx, cy, radius } => surface.draw_circle(cx, cy, radius),
                Command::LineSegment { x1, x2, y1, y2 } => {
                    surface.draw_line_segment(x1, y1, x2, y2);
                }
                Command::Rect {
                    height,
                    width,
                    x,
                    y,
                } => surface.draw_rect(x, y, width, height),
                Command::SetBackgroundColor(color) => surface.set_background_color(color),
                Command::SetColor(color) => surface.set_color(color),
                Command::SetLineThickness(px) => surface.set_line_thickness(px),
                Command::Text { ref text, x, y } => surface.draw_text(text, x, y),
            }
        }
    }

    /// 描画指示が空かどうかを返す。
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// 描画指示の数を返す。
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// 空の列を返す。
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// 描画指示を末尾に追加する。
    #[inline]
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// 最後の文字列描画（状態表示）を返す。
    #[inline]
    #[must_use]
    pub fn status_text(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|command| match *command {
            Command::Text { ref text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
