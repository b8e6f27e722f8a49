//! Tic-tac-toe core logic.
//!
//! このクレートは盤面と手番の状態機械を管理する `engine` と、描画指示を組み立てる
//! `render` を提供します。UI（`sdl`）から利用されることを想定しています。

#![forbid(unsafe_code)]

/// 盤面・手番・入力の対応付けを提供するモジュール。
pub mod engine;

/// 描画指示（`RenderCommands`）と描画先の抽象を提供するモジュール。
pub mod render;
