use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, server: &str, version: Option<&str>) {
    let mut spans = vec![
        Span::styled("mihrab", theme::gold()),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(server, theme::dim()),
    ];
    if let Some(v) = version {
        spans.push(Span::styled("  ·  ", theme::dim()));
        spans.push(Span::styled(format!("content {}", v), theme::dim()));
    }
    spans.push(Span::styled("  ·  ", theme::dim()));
    spans.push(Span::styled("[Esc]", theme::gold()));
    spans.push(Span::styled(" quit", theme::dim()));

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
