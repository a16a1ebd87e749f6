use ratatui::{layout::Rect, Frame};
use tui_big_text::{BigText, PixelSize};

use crate::tui::board::{Board, Slot};
use crate::tui::theme;

/// Full-size digits, eight terminal rows tall. The clock is what people
/// read from the back of the hall, so it gets the whole band to itself.
pub fn render(frame: &mut Frame, area: Rect, board: &Board) {
    let text = board.text(Slot::Clock);
    let big = BigText::builder()
        .pixel_size(PixelSize::Full)
        .style(theme::gold())
        .lines(vec![text.into()])
        .build();

    // Full pixels render each glyph eight cells wide.
    let width = (text.chars().count() as u16).saturating_mul(8);
    let clock_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        width: width.min(area.width),
        ..area
    };
    frame.render_widget(big, clock_area);
}
