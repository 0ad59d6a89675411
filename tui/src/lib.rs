//! TUI rendering for Operative using ratatui.

mod globe;
mod input;
mod theme;

pub use globe::draw_globe;
pub use input::handle_events;
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use chrono::Local;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use operative_engine::{App, ROSTER, Screen};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0], &palette, &glyphs);
    draw_content(frame, app, chunks[1], &palette, &glyphs);
    draw_footer(frame, app, chunks[2], &palette);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    // The live dot pulses at ~1Hz unless motion is reduced.
    let pulse_on = app.ui_options().reduced_motion || app.animation_time().as_millis() % 1000 < 600;
    let dot_style = if pulse_on {
        Style::default().fg(palette.crimson)
    } else {
        Style::default().fg(palette.bg_border)
    };

    let left = Paragraph::new(Line::from(vec![
        Span::styled(glyphs.live_dot, dot_style),
        Span::styled(" LIVE CONNECTION", Style::default().fg(palette.crimson)),
        Span::raw("   "),
        Span::styled("ENCRYPTION: AES-4096-GCM", styles::muted(palette)),
    ]));
    frame.render_widget(left, area);

    let clock = Local::now().format("%H:%M:%S").to_string();
    let right = Paragraph::new(Line::from(vec![
        Span::styled("MEM: 64TB", styles::muted(palette)),
        Span::raw("   "),
        Span::styled(clock, styles::chrome(palette)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(right, area);
}

fn draw_content(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_panel));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match app.screen() {
        Screen::Boot => draw_boot(frame, app, inner, palette, glyphs),
        Screen::Affiliation => draw_affiliation(frame, app, inner, palette, glyphs),
        Screen::Standby => draw_standby(frame, app, inner, palette),
    }
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let left = Paragraph::new(Line::from(vec![
        Span::styled("TERMINAL_ID: ", styles::muted(palette)),
        Span::styled("GHOST_01", Style::default().fg(palette.amber)),
    ]));
    frame.render_widget(left, area);

    if let Some(status) = app.status_line() {
        let status = fit_width(status, area.width.saturating_sub(30) as usize);
        let center = Paragraph::new(Span::styled(
            status,
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(center, area);
    }

    let right = Paragraph::new(Span::styled("AGENCY_OS v3.0.4", styles::muted(palette)))
        .alignment(Alignment::Right);
    frame.render_widget(right, area);
}

/// Boot screen: revealed log lines anchored to the bottom, with a pulsing
/// cursor block underneath.
fn draw_boot(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    if area.height == 0 {
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for entry in app.boot_lines() {
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", entry.timestamp), styles::muted(palette)),
            Span::styled(&entry.text, Style::default().fg(palette.primary)),
        ]));
    }

    let cursor_on = app.ui_options().reduced_motion || app.animation_time().as_millis() % 800 < 400;
    if cursor_on {
        lines.push(Line::from(Span::styled(
            glyphs.cursor_block,
            Style::default().fg(palette.primary),
        )));
    } else {
        lines.push(Line::from(""));
    }

    // Bottom-anchored: show the most recent lines if the log outgrows the area.
    let height = area.height as usize;
    if lines.len() > height {
        lines.drain(..lines.len() - height);
    }
    let y = area.y + area.height - lines.len() as u16;
    let log_area = Rect {
        x: area.x + 1,
        y,
        width: area.width.saturating_sub(2),
        height: lines.len() as u16,
    };
    frame.render_widget(Paragraph::new(lines), log_area);
}

/// Affiliation screen: title, three roster cards, key hints.
fn draw_affiliation(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Cards
            Constraint::Length(1), // Hints
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "S E L E C T   A F F I L I A T I O N",
        styles::title(palette),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(title, rows[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);

    for (index, profile) in ROSTER.iter().enumerate() {
        let selected = index == app.selection();
        let accent = palette.accent(profile.accent);

        let border_style = if selected {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.bg_border)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if selected {
                BorderType::Thick
            } else {
                BorderType::Plain
            })
            .border_style(border_style)
            .padding(Padding::new(2, 2, 1, 1));

        let id_line = if selected {
            Line::from(vec![
                Span::styled(glyphs.selected_left, Style::default().fg(accent)),
                Span::styled(
                    format!(" {} ", profile.agency.id()),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(glyphs.selected_right, Style::default().fg(accent)),
            ])
        } else {
            Line::from(Span::styled(
                profile.agency.id(),
                Style::default().fg(accent),
            ))
        };

        let body = vec![
            id_line,
            Line::from(""),
            Line::from(Span::styled(
                profile.codename,
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(profile.doctrine, styles::muted(palette))),
            Line::from(""),
            Line::from(Span::styled(profile.bonus, Style::default().fg(accent))),
        ];

        let card = Paragraph::new(body).wrap(Wrap { trim: true }).block(block);
        frame.render_widget(card, cards[index]);
    }

    let hints = Paragraph::new(Span::styled(
        format!(
            "LEFT/RIGHT SELECT {sep} ENTER CONFIRM {sep} 1-3 QUICK SELECT",
            sep = glyphs.separator
        ),
        styles::muted(palette),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(hints, rows[2]);
}

/// Standby screen: the globe viewport beside the session readout.
fn draw_standby(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    draw_globe(
        frame,
        columns[0],
        app.animation_time(),
        app.ui_options(),
        palette,
    );
    draw_session_readout(frame, app, columns[1], palette);
}

fn draw_session_readout(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(palette.bg_border))
        .padding(Padding::new(2, 2, 1, 1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Banner
            Constraint::Length(6), // Session fields
            Constraint::Length(3), // Trace gauge
            Constraint::Min(0),
        ])
        .split(inner);

    let banner = Paragraph::new(Line::from(Span::styled(
        "AWAITING HANDLE...",
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(banner, rows[0]);

    let state = app.store().state();
    let affiliation = state
        .affiliation
        .map_or("UNASSIGNED".to_owned(), |a| a.to_string());
    let mission = state.current_mission.clone().unwrap_or_else(|| "NONE".to_owned());

    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<14}"), styles::muted(palette)),
            Span::styled(value, Style::default().fg(palette.primary)),
        ])
    };
    let fields = Paragraph::new(vec![
        field("AFFILIATION", affiliation),
        field("MISSION", mission),
        field("HELIX TRUST", state.trust_level.to_string()),
        Line::from(""),
    ]);
    frame.render_widget(fields, rows[1]);

    // Gauge wants [0, 1]; the raw trace level can sit outside the meter.
    let ratio = f64::from(state.trace_level.clamp(0, 100)) / 100.0;
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::NONE)
                .title(Span::styled("TRACE LEVEL", styles::muted(palette))),
        )
        .gauge_style(Style::default().fg(palette.crimson).bg(palette.bg_dark))
        .ratio(ratio)
        .label(format!("{}%", state.trace_level));
    frame.render_widget(gauge, rows[2]);
}

fn fit_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_owned();
    }
    let mut out = String::new();
    for ch in text.chars() {
        if out.width() + 1 > max.saturating_sub(1) {
            break;
        }
        out.push(ch);
    }
    out.push('\u{2026}');
    out
}
