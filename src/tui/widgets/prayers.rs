use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::PrayerName;
use crate::tui::board::{Board, Slot};
use crate::tui::theme;

/// One timetable row. All rows share the same column widths so the
/// centered paragraph still lines up as a grid.
fn row<'a>(label: Span<'a>, begins: Span<'a>, jamat: Span<'a>) -> Line<'a> {
    Line::from(vec![label, begins, jamat])
}

pub fn render(frame: &mut Frame, area: Rect, board: &Board) {
    let block = Block::default()
        .title(Span::styled(" Prayer Times ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let mut rows: Vec<Line> = vec![row(
        Span::styled(format!("{:<10}", ""), theme::dim()),
        Span::styled(format!("{:>8}", "BEGINS"), theme::dim()),
        Span::styled(format!("{:>10}", "JAMAT"), theme::dim()),
    )];

    for prayer in PrayerName::all() {
        let label = match prayer {
            PrayerName::Dhuhr => board.text(Slot::DhuhrLabel).to_string(),
            _ => prayer.display_name().to_uppercase(),
        };
        let jamat_slot = Slot::Jamat(prayer);
        let jamat_text = if prayer.has_jamat() {
            board.text(jamat_slot)
        } else {
            ""
        };
        let jamat_style = if board.is_flashing(jamat_slot) {
            theme::flash()
        } else {
            theme::bold()
        };
        rows.push(row(
            Span::styled(format!("{:<10}", label), theme::gold()),
            Span::styled(
                format!("{:>8}", board.text(Slot::Start(prayer))),
                theme::bold(),
            ),
            Span::styled(format!("{:>10}", jamat_text), jamat_style),
        ));
    }

    // The Jumuah jamat keeps its own row so it stays visible all week.
    let jumuah_style = if board.is_flashing(Slot::JumuahJamat) {
        theme::flash()
    } else {
        theme::green()
    };
    rows.push(Line::from(""));
    rows.push(row(
        Span::styled(format!("{:<10}", "JUMUAH"), theme::gold()),
        Span::styled(format!("{:>8}", ""), theme::dim()),
        Span::styled(
            format!("{:>10}", board.text(Slot::JumuahJamat)),
            jumuah_style,
        ),
    ));

    let paragraph = Paragraph::new(rows)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
