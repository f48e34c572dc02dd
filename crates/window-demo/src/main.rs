// File: crates/window-demo/src/main.rs
// Summary: Windowed bubble chart with a year slider; renders via RGBA blit (CPU) using winit + softbuffer.
// Controls: drag the bottom strip or use Left/Right (1 year), PageUp/PageDown (10 years), Home/End.

use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use wealth_health::{AppEvent, AppState, ChartConfig, Dataset, YearSlider};
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Height of the slider strip under the chart, in pixels.
const SLIDER_STRIP: i32 = 40;

#[derive(Parser, Debug)]
#[command(name = "wealth-health-window", version, long_about = None)]
struct Args {
    /// Country dataset (JSON array of records)
    #[arg(short, long, default_value = "data/sample-countries.json")]
    data: PathBuf,

    /// Chart config JSON
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory with extra .ttf/.otf fonts (e.g. Open Sans, Aleo)
    #[arg(long)]
    font_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info })
        .init();

    let config = match &args.config {
        Some(path) => ChartConfig::load(path).with_context(|| format!("reading config {}", path.display()))?,
        None => ChartConfig::default(),
    };
    let years = config.years();

    let mut text = bubble_core::TextShaper::new();
    let fonts_registered = match &args.font_dir {
        Some(dir) => text.register_font_dir(dir).with_context(|| format!("loading fonts from {}", dir.display()))?,
        None => 0,
    };

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Wealth & Health of Nations")
        .with_inner_size(winit::dpi::LogicalSize::new(config.width as f64, (config.height + SLIDER_STRIP) as f64))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e:?}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e:?}"))?;

    let mut size = window.inner_size();
    let mut app = AppState::with_text(config, text);
    app.handle(AppEvent::Resized { width: size.width as i32, height: chart_height(size.height) });

    // One-shot data load; the chart stays empty if it fails.
    match Dataset::load(&args.data) {
        Ok(data) => {
            info!("Using input file: {} ({} countries)", args.data.display(), data.len());
            app.handle(AppEvent::DataLoaded(data));
        }
        Err(e) => {
            app.handle(AppEvent::DataFailed(format!("{}: {e}", args.data.display())));
        }
    }
    if fonts_registered > 0 {
        app.handle(AppEvent::FontsLoaded);
    }

    let mut dragging = false;
    let mut cursor = (0.0f32, 0.0f32);

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        let slider = YearSlider::along_bottom(years, size.width as i32, size.height as i32, SLIDER_STRIP);
        let redraw = match event {
            Event::WindowEvent { event, window_id: _ } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                    false
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    app.handle(AppEvent::Resized { width: size.width as i32, height: chart_height(size.height) });
                    true
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let (x, y) = (position.x as f32, position.y as f32);
                    cursor = (x, y);
                    if dragging {
                        set_year(&mut app, slider.year_at(x))
                    } else if y < chart_height(size.height) as f32 {
                        app.handle(AppEvent::PointerMoved { x, y })
                    } else {
                        app.handle(AppEvent::PointerLeft)
                    }
                }
                WindowEvent::CursorLeft { .. } => app.handle(AppEvent::PointerLeft),
                WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                    dragging = state == ElementState::Pressed && slider.contains(cursor.0, cursor.1);
                    dragging && set_year(&mut app, slider.year_at(cursor.0))
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => match key {
                    VirtualKeyCode::Escape => {
                        *cf = ControlFlow::Exit;
                        false
                    }
                    other => match key_step(other, &slider, app.year()) {
                        Some(year) => set_year(&mut app, year),
                        None => false,
                    },
                },
                _ => false,
            },
            Event::RedrawRequested(_) => {
                draw(&app, &mut surface, size.width, size.height, &slider);
                false
            }
            _ => false,
        };
        if redraw {
            window.request_redraw();
        }
    });
}

fn chart_height(window_height: u32) -> i32 {
    (window_height as i32 - SLIDER_STRIP).max(1)
}

fn set_year(app: &mut AppState, year: i32) -> bool {
    if year == app.year() { return false; }
    app.handle(AppEvent::YearInput(year))
}

/// Year a navigation key moves to, `None` for other keys.
fn key_step(key: VirtualKeyCode, slider: &YearSlider, current: i32) -> Option<i32> {
    let step = |d: i32| slider.step(current, d);
    let years = slider.years;
    match key {
        VirtualKeyCode::Left => Some(step(-1)),
        VirtualKeyCode::Right => Some(step(1)),
        VirtualKeyCode::PageDown => Some(step(-10)),
        VirtualKeyCode::PageUp => Some(step(10)),
        VirtualKeyCode::Home => Some(years.start),
        VirtualKeyCode::End => Some(years.end),
        _ => None,
    }
}

fn draw(
    app: &AppState,
    surface: &mut softbuffer::Surface,
    width: u32,
    height: u32,
    slider: &YearSlider,
) {
    let (Some(nw), Some(nh)) = (NonZeroU32::new(width.max(1)), NonZeroU32::new(height.max(1))) else { return };
    if let Err(e) = surface.resize(nw, nh) {
        error!("resize error: {e:?}");
        return;
    }
    let mut frame = match surface.buffer_mut() {
        Ok(f) => f,
        Err(e) => {
            error!("buffer error: {e:?}");
            return;
        }
    };
    let win_w = nw.get() as usize;

    // background for the area the chart does not cover (also before data loads)
    frame.fill(argb(255, 255, 255));
    match app.render_rgba8() {
        Ok(Some((rgba, w, h, stride))) => blit_rgba(&mut frame, win_w, &rgba, w as usize, h as usize, stride),
        Ok(None) => {}
        Err(e) => error!("render error: {e:#}"),
    }
    draw_slider(&mut frame, win_w, nh.get() as usize, slider, app.year());

    if let Err(e) = frame.present() { error!("present error: {e:?}"); }
}

// Softbuffer pixels are 0RGB in a u32
fn argb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Copy an RGBA8 image into the top-left of a 0RGB window buffer, cropping to fit.
fn blit_rgba(frame: &mut [u32], win_w: usize, rgba: &[u8], w: usize, h: usize, stride: usize) {
    if win_w == 0 { return; }
    let win_h = frame.len() / win_w;
    for y in 0..h.min(win_h) {
        let src = &rgba[y * stride..y * stride + w * 4];
        let dst = &mut frame[y * win_w..y * win_w + w.min(win_w)];
        for (d, px) in dst.iter_mut().zip(src.chunks_exact(4)) {
            *d = argb(px[0], px[1], px[2]);
        }
    }
}

/// Track line with decade ticks and a knob at `year`.
fn draw_slider(frame: &mut [u32], win_w: usize, win_h: usize, slider: &YearSlider, year: i32) {
    let track_color = argb(190, 190, 190);
    let tick_color = argb(150, 150, 150);
    let knob_color = argb(51, 51, 51);
    let mid = ((slider.track.top + slider.track.bottom) / 2).clamp(0, win_h as i32 - 1) as usize;
    let left = slider.track.left.max(0) as usize;
    let right = (slider.track.right.max(0) as usize).min(win_w.saturating_sub(1));
    let mut put = |x: usize, y: usize, c: u32| {
        if x < win_w && y < win_h { frame[y * win_w + x] = c; }
    };

    for x in left..=right {
        put(x, mid, track_color);
        put(x, mid + 1, track_color);
    }
    // decade ticks only while they stay at least 2 px apart
    let (start, end) = (i64::from(slider.years.start), i64::from(slider.years.end));
    if (end - start) / 10 * 2 <= slider.track.width().max(0) as i64 {
        let first_decade = start.div_euclid(10) * 10 + if start.rem_euclid(10) == 0 { 0 } else { 10 };
        for decade in (first_decade..=end).step_by(10) {
            let x = slider.knob_x(decade as i32).round() as usize;
            let len = if decade % 50 == 0 { 8 } else { 4 };
            for y in mid.saturating_sub(len)..mid {
                put(x, y, tick_color);
            }
        }
    }
    let kx = slider.knob_x(year).round() as i64;
    for dy in -7i64..=7 {
        for dx in -7i64..=7 {
            if dx * dx + dy * dy <= 49 {
                let (x, y) = (kx + dx, mid as i64 + dy);
                if x >= 0 && y >= 0 { put(x as usize, y as usize, knob_color); }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wealth_health::YearRange;

    #[test]
    fn keys_step_and_clamp() {
        let s = YearSlider::along_bottom(YearRange::new(1800, 2018), 1024, 680, SLIDER_STRIP);
        assert_eq!(key_step(VirtualKeyCode::Right, &s, 1900), Some(1901));
        assert_eq!(key_step(VirtualKeyCode::Left, &s, 1800), Some(1800));
        assert_eq!(key_step(VirtualKeyCode::PageUp, &s, 2015), Some(2018));
        assert_eq!(key_step(VirtualKeyCode::Home, &s, 1950), Some(1800));
        assert_eq!(key_step(VirtualKeyCode::A, &s, 1950), None);
    }

    #[test]
    fn blit_crops_to_window() {
        let mut frame = vec![0u32; 3 * 2];
        let rgba = vec![
            255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 9, 9, 9, 255,
            1, 2, 3, 255, 4, 5, 6, 255, 7, 8, 9, 255, 9, 9, 9, 255,
            0, 0, 0, 255, 0, 0, 0, 255, 0, 0, 0, 255, 0, 0, 0, 255,
        ];
        blit_rgba(&mut frame, 3, &rgba, 4, 3, 16);
        assert_eq!(frame[0], argb(255, 0, 0));
        assert_eq!(frame[2], argb(0, 0, 255));
        assert_eq!(frame[4], argb(4, 5, 6));
    }

    #[test]
    fn slider_paints_knob_at_year() {
        let (w, h) = (300usize, 40usize);
        let mut frame = vec![0u32; w * h];
        let slider = YearSlider::along_bottom(YearRange::new(1800, 2018), w as i32, h as i32, SLIDER_STRIP);
        draw_slider(&mut frame, w, h, &slider, 1900);
        let kx = slider.knob_x(1900).round() as usize;
        assert_eq!(frame[20 * w + kx], argb(51, 51, 51));
    }

    #[test]
    fn slider_skips_ticks_on_huge_spans() {
        let (w, h) = (300usize, 40usize);
        let mut frame = vec![0u32; w * h];
        let slider = YearSlider::along_bottom(YearRange::new(i32::MIN, i32::MAX), w as i32, h as i32, SLIDER_STRIP);
        draw_slider(&mut frame, w, h, &slider, 0);
        let kx = slider.knob_x(0).round() as usize;
        assert_eq!(frame[20 * w + kx], argb(51, 51, 51));
    }

    #[test]
    fn chart_leaves_room_for_slider() {
        assert_eq!(chart_height(680), 640);
        assert_eq!(chart_height(10), 1);
    }
}
