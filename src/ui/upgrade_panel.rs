use crate::core::view::{format_thousands, SessionView, SlotView};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the three upgrade slots stacked vertically
pub fn draw_upgrade_panel(frame: &mut Frame, area: Rect, view: &SessionView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (slot_view, chunk) in view.slots.iter().zip(chunks.iter()) {
        draw_slot(frame, *chunk, slot_view);
    }
}

fn draw_slot(frame: &mut Frame, area: Rect, slot: &SlotView) {
    let border_color = if slot.affordable {
        Color::LightBlue
    } else {
        Color::DarkGray
    };
    let cost_style = if slot.affordable {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Red)
    };

    let text = vec![
        Line::from(Span::styled(
            slot.effect.label(),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("Level {}", slot.level),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(vec![
            Span::styled(format!("[F{}] ", slot.slot.index() + 1), Style::default().fg(Color::Yellow)),
            Span::styled(format!("Cost: {}", format_thousands(slot.cost)), cost_style),
        ]),
    ];

    let panel = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(
                slot.slot.name(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
    );

    frame.render_widget(panel, area);
}
