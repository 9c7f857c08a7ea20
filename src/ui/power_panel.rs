use crate::core::view::{format_thousands, SessionView};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Draws the left half: counter, keyboard button, practice sentence, level bar
pub fn draw_power_panel(frame: &mut Frame, area: Rect, view: &SessionView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Counter
            Constraint::Min(5),    // Keyboard button
            Constraint::Length(6), // Typing display
            Constraint::Length(4), // Level bar + labels
        ])
        .split(area);

    draw_counter(frame, chunks[0], view);
    draw_button(frame, chunks[1]);
    draw_typing_display(frame, chunks[2], view);
    draw_level_bar(frame, chunks[3], view);
}

fn draw_counter(frame: &mut Frame, area: Rect, view: &SessionView) {
    let text = vec![
        Line::from(Span::styled(
            "Typing Power",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format_thousands(view.currency),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let counter = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    frame.render_widget(counter, area);
}

fn draw_button(frame: &mut Frame, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD);

    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(" ┌───────┐ ", key_style),
        ]),
        Line::from(vec![Span::styled(" │ ENTER │ ", key_style)]),
        Line::from(vec![Span::styled(" └───────┘ ", key_style)]),
        Line::from(Span::styled(
            "Press to type!",
            Style::default().fg(Color::Cyan),
        )),
    ];

    let button = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Keyboard"))
        .alignment(Alignment::Center);

    frame.render_widget(button, area);
}

fn draw_typing_display(frame: &mut Frame, area: Rect, view: &SessionView) {
    // Underscores make spaces visible while typing
    let typed = view.typed.replace(' ', "_");
    let remaining = view.remaining.replace(' ', "_");

    let text = vec![
        Line::from(Span::styled(
            view.translation_text.clone(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(typed, Style::default().fg(Color::DarkGray)),
            Span::styled(
                remaining,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let display = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Practice"))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(display, area);
}

fn draw_level_bar(frame: &mut Frame, area: Rect, view: &SessionView) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
        .ratio(view.progress)
        .label(format!("{:5.1}%", view.progress * 100.0));
    frame.render_widget(gauge, rows[0]);

    let labels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let level = Paragraph::new(format!("Lv {}", view.level))
        .style(Style::default().fg(Color::Cyan));
    let next = Paragraph::new(format!("Next: {} XP", format_thousands(view.next_level_xp)))
        .alignment(Alignment::Right);

    frame.render_widget(level, labels[0]);
    frame.render_widget(next, labels[1]);
}
