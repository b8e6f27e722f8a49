/// 盤面（3×3）と勝利ライン判定の実装。
pub mod board;
/// ゲーム進行（開始待ち、手番、勝敗の確認）の実装。
pub mod controller;
/// ポインタ入力の抽象。
pub mod input;
/// ビューポートから盤面の配置を求める実装。
pub mod layout;
pub mod types;

pub type Board = board::Board;
pub type GameController = controller::GameController;
pub type Phase = controller::Phase;
pub type PlaceError = controller::PlaceError;
pub type Pointer = input::Pointer;
pub type Layout = layout::Layout;
pub type Viewport = layout::Viewport;
pub type Cell = types::Cell;
pub type CellIndex = types::CellIndex;
pub type Mark = types::Mark;
pub type Player = types::Player;

pub use controller::START_DELAY_SECS;
pub use input::InputSource;
