/// 描画指示の列と、その再生。
pub mod commands;
/// 描画先（`Surface`）と文字列計測の抽象。
pub mod surface;

pub type Color = commands::Color;
pub type Command = commands::Command;
pub type RenderCommands = commands::RenderCommands;
pub type TextSize = surface::TextSize;

pub use surface::{MeasureText, Surface};
