//! Decorative globe viewport.
//!
//! A continuously rotating wireframe globe on a braille canvas: an
//! orthographic projection of a latitude/longitude point grid spinning about
//! the polar axis, over a static starfield. Purely cosmetic - it takes the
//! animation clock and UI options, and touches nothing else.

use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::widgets::canvas::{Canvas, Circle, Points};

use operative_types::UiOptions;

use crate::theme::{Palette, styles};

/// Polar rotation rate in radians per second.
const ROTATION_RATE: f64 = 0.05;

const GLOBE_RADIUS: f64 = 1.0;
const BOUND: f64 = 1.3;

const LAT_STEP_DEG: i32 = 15;
const LON_STEP_DEG: i32 = 12;

const STAR_COUNT: usize = 48;

/// Orthographic projection of a surface point, viewed from +Z.
///
/// Returns `None` for points on the back hemisphere. Visible points land
/// inside the unit disc.
#[must_use]
fn project(lat_deg: f64, lon_deg: f64, spin: f64) -> Option<(f64, f64)> {
    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians() + spin;
    let z = lat.cos() * lon.cos();
    if z < 0.0 {
        return None;
    }
    Some((GLOBE_RADIUS * lat.cos() * lon.sin(), GLOBE_RADIUS * lat.sin()))
}

/// Render the globe into `area`, with its surveillance overlay.
pub fn draw_globe(
    frame: &mut Frame,
    area: Rect,
    time: Duration,
    options: UiOptions,
    palette: &Palette,
) {
    if area.width < 4 || area.height < 4 {
        return;
    }

    let spin = if options.reduced_motion {
        0.0
    } else {
        time.as_secs_f64() * ROTATION_RATE
    };

    // Terminal cells are about twice as tall as wide; a width = 2 * height
    // viewport keeps the disc round for both braille and dot markers.
    let inner = centered_viewport(area);

    let marker = if options.ascii_only {
        Marker::Dot
    } else {
        Marker::Braille
    };

    let surface = surface_points(spin);
    let stars = starfield();

    let canvas = Canvas::default()
        .marker(marker)
        .x_bounds([-BOUND, BOUND])
        .y_bounds([-BOUND, BOUND])
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &stars,
                color: palette.text_muted,
            });
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: GLOBE_RADIUS,
                color: palette.bg_border,
            });
            ctx.draw(&Points {
                coords: &surface,
                color: palette.primary,
            });
        });
    frame.render_widget(canvas, inner);

    // Overlay caption, top-left of the viewport.
    let caption = Paragraph::new(vec![
        Line::from(Span::styled("GLOBAL_SURVEILLANCE", styles::title(palette))),
        Line::from(Span::styled(
            "LAT: 34.0522 N | LON: 118.2437 W",
            Style::default().fg(palette.primary_dim),
        )),
    ]);
    let caption_area = Rect {
        x: area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: 2.min(area.height),
    };
    frame.render_widget(caption, caption_area);
}

fn centered_viewport(area: Rect) -> Rect {
    let width = area.width.min(area.height.saturating_mul(2));
    let height = (width / 2).max(1);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Visible surface grid points for the current spin angle.
fn surface_points(spin: f64) -> Vec<(f64, f64)> {
    let mut coords = Vec::new();
    let mut lat = -90 + LAT_STEP_DEG;
    while lat < 90 {
        let mut lon = 0;
        while lon < 360 {
            if let Some(point) = project(f64::from(lat), f64::from(lon), spin) {
                coords.push(point);
            }
            lon += LON_STEP_DEG;
        }
        lat += LAT_STEP_DEG;
    }
    coords
}

/// Fixed pseudo-random backdrop outside the disc. Deterministic so the sky
/// doesn't shimmer between frames.
fn starfield() -> Vec<(f64, f64)> {
    let mut seed: u64 = 0x5EED_CAFE;
    let mut next = move || {
        // xorshift64
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        (seed >> 11) as f64 / (1u64 << 53) as f64 * 2.0 - 1.0
    };

    let mut stars = Vec::with_capacity(STAR_COUNT);
    while stars.len() < STAR_COUNT {
        let x = next() * BOUND;
        let y = next() * BOUND;
        if (x * x + y * y).sqrt() > GLOBE_RADIUS + 0.05 {
            stars.push((x, y));
        }
    }
    stars
}
