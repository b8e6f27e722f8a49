use crate::engine::board::Board;
use crate::engine::input::{InputSource, Pointer};
use crate::engine::layout::{Layout, Viewport};
use crate::engine::types::{Cell, CellIndex, Mark, Player};
use crate::render::commands::{Color, Command, RenderCommands};
use crate::render::surface::MeasureText;
use tracing::{debug, instrument, trace};

/// ゲーム開始までのカウントダウン（秒）。
pub const START_DELAY_SECS: f32 = 5.0;

/// 盤面を描く線の太さ（ピクセル）。
pub const LINE_THICKNESS: i32 = 4;

/// 進行状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Phase {
    /// 開始待ち（カウントダウン中）。
    Pending,
    /// 引き分け。
    Tied,
    /// 手番。
    Turn(Player),
    /// 勝利。
    Won(Player),
}

impl Phase {
    /// 1局が終わった状態（勝利/引き分け）かどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Tied | Self::Won(_))
    }

    /// 状態表示の文言と色を返す。
    ///
    /// `start_timer` は `Pending` のときだけ使われる。
    #[inline]
    #[must_use]
    pub fn status(self, start_timer: f32) -> (String, Color) {
        match self {
            Self::Pending => (
                format!("Starting game in {} seconds...", start_timer.ceil()),
                Color::Ink,
            ),
            Self::Turn(Player::One) => ("Player 1's turn".to_owned(), Color::PlayerOne),
            Self::Turn(Player::Two) => ("Player 2's turn".to_owned(), Color::PlayerTwo),
            Self::Won(Player::One) => ("Player 1 wins!".to_owned(), Color::Success),
            Self::Won(Player::Two) => ("Player 2 wins!".to_owned(), Color::Success),
            Self::Tied => ("Game is tied :(".to_owned(), Color::Ink),
        }
    }
}

/// 記号を置けなかった理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum PlaceError {
    /// 指した位置のマスはすべて埋まっている。
    Occupied,
    /// 盤面の外を指した。
    OutsideBoard,
}

/// 1台の端末で2人が交互に遊ぶゲームの進行を管理する構造体。
///
/// 1フレームに1回 `advance`（または `tick`）を呼び、`render_intent` で描画指示を得る。
#[derive(Clone, Debug, PartialEq)]
pub struct GameController {
    /// 盤面。
    board: Board,
    /// 盤面の配置。
    layout: Layout,
    /// 進行状態。
    phase: Phase,
    /// 開始までの残り秒数。
    start_timer: f32,
    /// 終局後にポインタが一度離されたかどうか。
    victory_acknowledged: bool,
    /// 描画先の大きさ。
    viewport: Viewport,
}

impl GameController {
    /// 1フレーム進める。
    ///
    /// - `Pending`: カウントダウンし、0以下になったらプレイヤー1の手番にする（入力は見ない）。
    /// - 手番: 押されていれば記号を置き、勝利/引き分け/手番交代を判定する。
    /// - 終局: 一度離されるのを待ってから、次に押されたら最初からやり直す。
    #[inline]
    pub fn advance(&mut self, delta: f32, pointer: Pointer) {
        match self.phase {
            Phase::Pending => self.advance_pending(delta),
            Phase::Turn(player) => self.advance_turn(player, pointer),
            Phase::Tied | Phase::Won(_) => self.advance_terminal(pointer),
        }
    }

    /// 開始待ちのカウントダウンを進める。
    fn advance_pending(&mut self, delta: f32) {
        self.start_timer -= delta;
        if self.start_timer <= 0.0 {
            self.start_timer = START_DELAY_SECS;
            self.transition(Phase::Turn(Player::One));
        }
    }

    /// 終局後の確認（離す→押す）を処理する。
    ///
    /// 勝敗を決めた押下がそのまま次のゲームを始めないよう、一度離されるのを待つ。
    fn advance_terminal(&mut self, pointer: Pointer) {
        if !self.victory_acknowledged {
            if !pointer.is_down() {
                self.victory_acknowledged = true;
                debug!(phase = ?self.phase, "result acknowledged");
            }
            return;
        }

        if pointer.is_down() {
            self.reset();
        }
    }

    /// 手番のプレイヤーの入力を処理する。
    fn advance_turn(&mut self, player: Player, pointer: Pointer) {
        if !pointer.is_down() {
            return;
        }

        if self.place_mark(player, pointer.x(), pointer.y()).is_err() {
            return;
        }

        let next = if self.evaluate_win(player.mark()) {
            Phase::Won(player)
        } else if self.evaluate_tied() {
            Phase::Tied
        } else {
            Phase::Turn(player.opponent())
        };
        self.transition(next);
    }

    /// 盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// 空きマスが無いかどうかを返す。
    ///
    /// 勝利判定の後に呼ぶこと（揃った状態で埋まった盤面は勝利であり引き分けではない）。
    #[inline]
    #[must_use]
    pub fn evaluate_tied(&self) -> bool {
        self.board.is_full()
    }

    /// `mark` が3つ揃っているかを返す（3行・3列・2本の対角線）。
    #[inline]
    #[must_use]
    pub fn evaluate_win(&self, mark: Mark) -> bool {
        self.board.has_line(mark)
    }

    /// 盤面の配置を返す。
    #[inline]
    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// 描画先の大きさを指定して初期化する。
    #[inline]
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        let viewport = Viewport::new(width, height);
        Self {
            board: Board::empty(),
            layout: Layout::from_viewport(viewport),
            phase: Phase::Pending,
            start_timer: START_DELAY_SECS,
            victory_acknowledged: false,
            viewport,
        }
    }

    /// 進行状態を返す。
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// 画面座標 `(x, y)` のマスに `player` の記号を置く。
    ///
    /// 走査順（x が外側、y が内側）で最初に見つかった、`(x, y)` を含む空きマスに置く。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す（盤面は変更しない）：
    /// - `PlaceError::OutsideBoard`: どのマスにも含まれない位置の場合
    /// - `PlaceError::Occupied`: 含まれるマスがすべて埋まっている場合
    #[inline]
    pub fn place_mark(&mut self, player: Player, x: i32, y: i32) -> Result<CellIndex, PlaceError> {
        let mut touched = false;
        for index in self.layout.cells_at(x, y) {
            touched = true;
            if self.board.place(index, player.mark()) {
                debug!(?player, x = index.x(), y = index.y(), "mark placed");
                return Ok(index);
            }
        }

        let err = if touched {
            PlaceError::Occupied
        } else {
            PlaceError::OutsideBoard
        };
        trace!(?player, x, y, ?err, "placement rejected");
        Err(err)
    }

    /// 現在の状態から1フレーム分の描画指示を作る。
    ///
    /// 状態を変更しないので、`advance` を挟まなければ何度呼んでも同じ結果になる。
    #[inline]
    #[must_use]
    pub fn render_intent<M: MeasureText + ?Sized>(&self, metrics: &M) -> RenderCommands {
        let mut commands = RenderCommands::new();
        commands.push(Command::SetBackgroundColor(Color::Background));
        commands.push(Command::SetLineThickness(LINE_THICKNESS));
        commands.push(Command::SetColor(Color::Ink));

        let size = self.layout.cell_size();
        let quarter = size.checked_div(4).unwrap_or_default();
        let half = size.checked_div(2).unwrap_or_default();

        for (index, cell) in self.board.iter() {
            let rect = self.layout.cell_rect(index);
            let (left, top) = (rect.left(), rect.top());
            commands.push(Command::Rect {
                height: size,
                width: size,
                x: left,
                y: top,
            });

            match cell {
                Cell::Marked(Mark::Circle) => commands.push(Command::Circle {
                    cx: left.saturating_add(half),
                    cy: top.saturating_add(half),
                    radius: quarter,
                }),
                Cell::Marked(Mark::Cross) => {
                    let near_x = left.saturating_add(quarter);
                    let near_y = top.saturating_add(quarter);
                    let far_x = near_x.saturating_add(half);
                    let far_y = near_y.saturating_add(half);
                    commands.push(Command::LineSegment {
                        x1: near_x,
                        x2: far_x,
                        y1: near_y,
                        y2: far_y,
                    });
                    commands.push(Command::LineSegment {
                        x1: far_x,
                        x2: near_x,
                        y1: near_y,
                        y2: far_y,
                    });
                }
                Cell::Free => {}
            }
        }

        let (text, color) = self.phase.status(self.start_timer);
        let measured = metrics.measure_text(&text);
        let x = half_of(self.viewport.width()).saturating_sub(half_of(measured.width()));
        let y = measured.height();
        commands.push(Command::SetColor(color));
        commands.push(Command::Text { text, x, y });

        commands
    }

    /// 盤面を空にし、開始待ちに戻す。
    fn reset(&mut self) {
        self.board.clear();
        self.start_timer = START_DELAY_SECS;
        self.victory_acknowledged = false;
        self.transition(Phase::Pending);
    }

    /// 描画先の大きさが変わったときに配置を計算し直す。
    ///
    /// 盤面・進行状態・タイマーは変更しない。
    #[inline]
    #[instrument(skip(self))]
    pub fn resize(&mut self, width: i32, height: i32) {
        self.viewport = Viewport::new(width, height);
        self.layout = Layout::from_viewport(self.viewport);
        debug!(cell_size = self.layout.cell_size(), "layout recomputed");
    }

    /// 開始までの残り秒数を返す。
    #[inline]
    #[must_use]
    pub const fn start_timer(&self) -> f32 {
        self.start_timer
    }

    /// 入力元を1回ポーリングして1フレーム進める。
    #[inline]
    pub fn tick<I: InputSource + ?Sized>(&mut self, delta: f32, input: &I) {
        self.advance(delta, Pointer::poll(input));
    }

    /// 進行状態を切り替える。
    fn transition(&mut self, next: Phase) {
        debug!(from = ?self.phase, to = ?next, "phase changed");
        self.phase = next;
    }

    /// 終局後にポインタが一度離されたかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn victory_acknowledged(&self) -> bool {
        self.victory_acknowledged
    }

    /// 描画先の大きさを返す。
    #[inline]
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }
}

/// 整数の半分（0方向への切り捨て）。
fn half_of(value: i32) -> i32 {
    value.checked_div(2).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{GameController, LINE_THICKNESS, Phase, PlaceError, START_DELAY_SECS};
    use crate::engine::board::Board;
    use crate::engine::input::Pointer;
    use crate::engine::types::{Cell, CellIndex, Mark, Player};
    use crate::render::commands::{Color, Command};
    use crate::render::surface::{MeasureText, TextSize};

    /// 400×400 では1マス100px、盤面左上は (50, 50)。
    const SIDE: i32 = 400;

    /// 1文字8px、高さ16pxとして計測する。
    struct FixedFont;

    impl MeasureText for FixedFont {
        fn measure_text(&self, text: &str) -> TextSize {
            let chars = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
            TextSize::new(chars.saturating_mul(8), 16)
        }
    }

    /// マス (x, y) の中心の画面座標。
    fn center_of(x: i32, y: i32) -> Pointer {
        Pointer::pressed_at(100 * x + 100, 100 * y + 100)
    }

    fn cell(x: u8, y: u8) -> CellIndex {
        CellIndex::from_xy(x, y).unwrap_or(CellIndex::ALL[0])
    }

    /// カウントダウンを終えてプレイヤー1の手番にした状態。
    fn started() -> GameController {
        let mut game = GameController::new(SIDE, SIDE);
        game.advance(START_DELAY_SECS, Pointer::released());
        assert_eq!(game.phase(), Phase::Turn(Player::One));
        game
    }

    /// 押して離す、を1手として順に打つ。
    fn play(game: &mut GameController, moves: &[(i32, i32)]) {
        for &(x, y) in moves {
            game.advance(0.016, center_of(x, y));
            game.advance(0.016, Pointer::released());
        }
    }

    #[test]
    fn countdown_starts_player_one() {
        let mut game = GameController::new(SIDE, SIDE);
        assert_eq!(game.phase(), Phase::Pending);
        assert!((game.start_timer() - START_DELAY_SECS).abs() < f32::EPSILON);

        game.advance(5.0, Pointer::released());
        assert_eq!(game.phase(), Phase::Turn(Player::One));
        assert!((game.start_timer() - START_DELAY_SECS).abs() < f32::EPSILON);
    }

    #[test]
    fn countdown_ignores_pointer() {
        let mut game = GameController::new(SIDE, SIDE);
        game.advance(1.0, center_of(1, 1));
        assert_eq!(game.phase(), Phase::Pending);
        assert_eq!(*game.board(), Board::empty());
        assert!((game.start_timer() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn center_tap_marks_center_and_passes_turn() {
        let mut game = started();
        game.advance(0.016, Pointer::pressed_at(200, 200));
        assert_eq!(game.board().cell(cell(1, 1)), Cell::Marked(Mark::Cross));
        assert_eq!(game.phase(), Phase::Turn(Player::Two));
    }

    #[test]
    fn released_pointer_waits() {
        let mut game = started();
        game.advance(0.016, Pointer::released());
        assert_eq!(game.phase(), Phase::Turn(Player::One));
        assert_eq!(*game.board(), Board::empty());
    }

    #[test]
    fn turns_alternate_until_result() {
        let mut game = started();
        let moves = [(0, 0), (1, 0), (2, 0), (1, 1), (0, 1)];
        let mut expected = Player::One;
        for (x, y) in moves {
            assert_eq!(game.phase(), Phase::Turn(expected));
            play(&mut game, &[(x, y)]);
            expected = expected.opponent();
        }
        assert_eq!(game.phase(), Phase::Turn(Player::Two));
    }

    #[test]
    fn occupied_tap_changes_nothing() {
        let mut game = started();
        play(&mut game, &[(1, 1)]);
        let board = *game.board();

        game.advance(0.016, center_of(1, 1));
        assert_eq!(*game.board(), board);
        assert_eq!(game.phase(), Phase::Turn(Player::Two));
    }

    #[test]
    fn held_press_moves_once_then_retries_harmlessly() {
        let mut game = started();
        for _frame in 0_u8..10 {
            game.advance(0.016, center_of(0, 0));
        }
        assert_eq!(game.board().free_count(), 8);
        assert_eq!(game.phase(), Phase::Turn(Player::Two));
    }

    #[test]
    fn place_mark_reports_reason() {
        let mut game = started();
        assert_eq!(
            game.place_mark(Player::One, 0, 0),
            Err(PlaceError::OutsideBoard)
        );
        assert_eq!(game.place_mark(Player::One, 200, 200), Ok(cell(1, 1)));
        assert_eq!(
            game.place_mark(Player::Two, 200, 200),
            Err(PlaceError::Occupied)
        );
    }

    #[test]
    fn shared_edge_falls_through_to_next_free_cell() {
        let mut game = started();
        assert_eq!(game.place_mark(Player::One, 150, 120), Ok(cell(0, 0)));
        assert_eq!(game.place_mark(Player::Two, 150, 120), Ok(cell(1, 0)));
        assert_eq!(
            game.place_mark(Player::One, 150, 120),
            Err(PlaceError::Occupied)
        );
    }

    #[test]
    fn column_win_for_player_one() {
        let mut game = started();
        play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(game.phase(), Phase::Won(Player::One));
    }

    #[test]
    fn anti_diagonal_win_for_player_two() {
        let mut game = started();
        play(&mut game, &[(0, 0), (2, 0), (1, 0), (1, 1), (2, 2), (0, 2)]);
        assert_eq!(game.phase(), Phase::Won(Player::Two));
        assert!(game.evaluate_win(Mark::Circle));
        assert!(!game.evaluate_win(Mark::Cross));
    }

    #[test]
    fn full_board_without_line_is_tied() {
        // X O X
        // X O O
        // O X X
        let mut game = started();
        play(
            &mut game,
            &[
                (0, 0),
                (1, 0),
                (2, 0),
                (1, 1),
                (0, 1),
                (2, 1),
                (1, 2),
                (0, 2),
                (2, 2),
            ],
        );
        assert_eq!(game.phase(), Phase::Tied);
        assert!(game.evaluate_tied());
    }

    #[test]
    fn winning_last_move_on_full_board_is_a_win() {
        // X O X
        // X O O   ← 最後の (0, 1) で左列が揃う
        // X X O
        let mut game = started();
        play(
            &mut game,
            &[
                (2, 0),
                (1, 0),
                (1, 2),
                (1, 1),
                (0, 0),
                (2, 1),
                (0, 2),
                (2, 2),
                (0, 1),
            ],
        );
        assert!(game.evaluate_tied());
        assert_eq!(game.phase(), Phase::Won(Player::One));
    }

    #[test]
    fn result_needs_release_then_press_to_restart() {
        let mut game = started();
        for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            play(&mut game, &[(x, y)]);
        }
        game.advance(0.016, center_of(0, 2));
        assert_eq!(game.phase(), Phase::Won(Player::One));
        assert!(!game.victory_acknowledged());
        let board = *game.board();

        // 勝敗を決めた押下が続いている。
        game.advance(0.016, center_of(0, 2));
        assert!(!game.victory_acknowledged());
        assert_eq!(*game.board(), board);
        assert_eq!(game.phase(), Phase::Won(Player::One));

        game.advance(0.016, Pointer::released());
        assert!(game.victory_acknowledged());
        assert_eq!(game.phase(), Phase::Won(Player::One));

        game.advance(0.016, center_of(2, 2));
        assert_eq!(game.phase(), Phase::Pending);
        assert_eq!(*game.board(), Board::empty());
        assert!(!game.victory_acknowledged());
        assert!((game.start_timer() - START_DELAY_SECS).abs() < f32::EPSILON);
    }

    #[test]
    fn status_lines_follow_phase() {
        assert_eq!(
            Phase::Pending.status(4.2),
            ("Starting game in 5 seconds...".to_owned(), Color::Ink)
        );
        assert_eq!(
            Phase::Pending.status(START_DELAY_SECS),
            ("Starting game in 5 seconds...".to_owned(), Color::Ink)
        );
        assert_eq!(
            Phase::Pending.status(0.3),
            ("Starting game in 1 seconds...".to_owned(), Color::Ink)
        );
        assert_eq!(
            Phase::Turn(Player::One).status(0.0),
            ("Player 1's turn".to_owned(), Color::PlayerOne)
        );
        assert_eq!(
            Phase::Turn(Player::Two).status(0.0),
            ("Player 2's turn".to_owned(), Color::PlayerTwo)
        );
        assert_eq!(
            Phase::Won(Player::One).status(0.0),
            ("Player 1 wins!".to_owned(), Color::Success)
        );
        assert_eq!(
            Phase::Won(Player::Two).status(0.0),
            ("Player 2 wins!".to_owned(), Color::Success)
        );
        assert_eq!(
            Phase::Tied.status(0.0),
            ("Game is tied :(".to_owned(), Color::Ink)
        );
    }

    #[test]
    fn render_intent_draws_grid_marks_and_status() {
        let mut game = started();
        play(&mut game, &[(0, 0), (1, 1)]);

        let commands = game.render_intent(&FixedFont);
        let slice = commands.as_slice();

        assert_eq!(
            slice.get(..3),
            Some(
                &[
                    Command::SetBackgroundColor(Color::Background),
                    Command::SetLineThickness(LINE_THICKNESS),
                    Command::SetColor(Color::Ink),
                ][..]
            )
        );

        let rects = slice
            .iter()
            .filter(|command| matches!(command, Command::Rect { .. }))
            .count();
        assert_eq!(rects, 9);

        // (0, 0) の × は四隅から1/4内側の2本の線分。
        assert!(slice.contains(&Command::LineSegment {
            x1: 75,
            x2: 125,
            y1: 75,
            y2: 125,
        }));
        assert!(slice.contains(&Command::LineSegment {
            x1: 125,
            x2: 75,
            y1: 75,
            y2: 125,
        }));
        // (1, 1) の ○。
        assert!(slice.contains(&Command::Circle {
            cx: 200,
            cy: 200,
            radius: 25,
        }));

        // "Player 1's turn" は15文字 → 幅120、高さ16。
        assert_eq!(
            slice.get(slice.len().saturating_sub(2)..),
            Some(
                &[
                    Command::SetColor(Color::PlayerOne),
                    Command::Text {
                        text: "Player 1's turn".to_owned(),
                        x: 140,
                        y: 16,
                    },
                ][..]
            )
        );
    }

    #[test]
    fn render_intent_is_idempotent() {
        let mut game = started();
        play(&mut game, &[(2, 2)]);
        let first = game.render_intent(&FixedFont);
        let second = game.render_intent(&FixedFont);
        assert_eq!(first, second);
        assert_eq!(game.phase(), Phase::Turn(Player::Two));
    }

    #[test]
    fn resize_keeps_state_and_moves_board() {
        let mut game = started();
        play(&mut game, &[(1, 1)]);
        game.resize(800, 600);

        assert_eq!(game.layout().cell_size(), 150);
        assert_eq!(game.phase(), Phase::Turn(Player::Two));
        assert_eq!(game.board().cell(cell(1, 1)), Cell::Marked(Mark::Cross));
        assert_eq!(
            game.place_mark(Player::Two, 400, 300),
            Err(PlaceError::Occupied)
        );
    }
}
