pub mod activity_log;
mod power_panel;
mod upgrade_panel;

use crate::core::view::SessionView;
use activity_log::ActivityLog;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, view: &SessionView, activity: &ActivityLog) {
    let size = frame.size();

    // Main content above, controls footer below
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(size);

    // Left: power and practice. Right: upgrades and recent activity
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(v_chunks[0]);

    power_panel::draw_power_panel(frame, h_chunks[0], view);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(12), Constraint::Length(6)])
        .split(h_chunks[1]);

    upgrade_panel::draw_upgrade_panel(frame, right[0], view);
    draw_activity(frame, right[1], activity);
    draw_footer(frame, v_chunks[1]);
}

fn draw_activity(frame: &mut Frame, area: Rect, activity: &ActivityLog) {
    let visible = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = activity
        .entries()
        .take(visible)
        .map(|entry| Line::from(Span::raw(entry.to_string())))
        .collect();

    let log = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Activity"));
    frame.render_widget(log, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Yellow);
    let controls = Line::from(vec![
        Span::styled("[Enter]", key),
        Span::raw(" Type power  "),
        Span::styled("[a-z…]", key),
        Span::raw(" Practice  "),
        Span::styled("[F1-F3]", key),
        Span::raw(" Upgrade  "),
        Span::styled("[Esc]", key),
        Span::raw(" Save & quit"),
    ]);

    let footer = Paragraph::new(controls)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
