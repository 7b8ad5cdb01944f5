use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render a toast notification (brief message above the help line)
pub fn render_toast(f: &mut Frame, area: Rect, message: &str) {
    // Border (2) + icon (2) + breathing room (2)
    let toast_width = (message.width() + 6).min(usize::from(area.width)) as u16;
    let toast_height = 3u16.min(area.height);
    if toast_width == 0 || toast_height == 0 {
        return;
    }

    // Sit just above the footer, clear of the list title
    let toast_y = area.height.saturating_sub(toast_height + 2);
    let toast_area = Rect {
        x: area.x + (area.width.saturating_sub(toast_width)) / 2,
        y: area.y + toast_y,
        width: toast_width,
        height: toast_height,
    };

    f.render_widget(Clear, toast_area);

    let is_error = message.starts_with("Error:");
    let (icon, color) = if is_error {
        ("✗ ", Color::Red)
    } else {
        ("✓ ", Color::Green)
    };

    let toast_line = Line::from(vec![
        Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(message.to_string()),
    ]);

    let toast_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    f.render_widget(
        Paragraph::new(toast_line)
            .block(toast_block)
            .alignment(Alignment::Center),
        toast_area,
    );
}
