//! SDL で動作する最小 UI。

mod canvas;
mod font;

use canvas::{CanvasSurface, MouseInput};
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::time::Instant;
use tictactoe_core::engine;
use tictactoe_core::render::Surface as _;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// ウィンドウのタイトル。
const WINDOW_TITLE: &str = "Tic Tac Toe";

/// ウィンドウ幅（ピクセル）。
const WINDOW_W: u32 = 640;

/// ウィンドウ高さ（ピクセル）。
const WINDOW_H: u32 = 480;

/// `RUST_LOG` が無いときのログレベル。
const DEFAULT_LOG_FILTER: &str = "info";

/// JSON 形式のログ出力を設定する。
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .init();
}

/// 描画先の実際の大きさ（HiDPI ではウィンドウサイズと異なる）。
fn viewport(canvas: &mut Canvas<Window>) -> (i32, i32) {
    let surface = CanvasSurface::new(canvas);
    (surface.viewport_width(), surface.viewport_height())
}

fn main() -> Result<(), String> {
    init_tracing();

    let sdl = sdl2::init()?;
    let video = sdl.video()?;

    let window = video
        .window(WINDOW_TITLE, WINDOW_W, WINDOW_H)
        .position_centered()
        .resizable()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window
        .into_canvas()
        .present_vsync()
        .accelerated()
        .build()
        .map_err(|e| e.to_string())?;

    let (width, height) = viewport(&mut canvas);
    info!(width, height, "window created");

    let mut game = engine::GameController::new(width, height);
    let mut event_pump = sdl.event_pump()?;
    let mut last_frame = Instant::now();
    let mut last_status = String::new();

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,
                Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::Window {
                    win_event: WindowEvent::SizeChanged(..),
                    ..
                } => {
                    let (w, h) = viewport(&mut canvas);
                    game.resize(w, h);
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let delta = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        let input = MouseInput::from(event_pump.mouse_state());
        game.tick(delta, &input);

        let mut surface = CanvasSurface::new(&mut canvas);
        let intent = game.render_intent(&surface);
        intent.draw_on(&mut surface);

        // 状態表示はタイトルバーにも出す。
        let status = intent.status_text().unwrap_or_default();
        if status != last_status {
            let _ = canvas
                .window_mut()
                .set_title(&format!("{WINDOW_TITLE} | {status}"));
            last_status = status.to_owned();
        }

        canvas.present();
    }

    info!("exiting");
    Ok(())
}
