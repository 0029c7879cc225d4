use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{HELP_ENTRIES, HELP_FOOTER, HelpPopupState};
use crate::widgets::popup;

pub const HELP_POPUP_WIDTH: u16 = 64;
// borders (2) + blank line and footer (2)
pub const HELP_POPUP_PADDING: u16 = 4;

/// Render the help popup centered over the whole frame
pub fn render_popup(help: &mut HelpPopupState, frame: &mut Frame) {
    let frame_area = frame.area();
    if frame_area.width < 20 || frame_area.height < 8 {
        return;
    }

    let ideal_height = HELP_ENTRIES.len() as u16 + HELP_POPUP_PADDING;
    let popup_area = popup::centered_popup(frame_area, HELP_POPUP_WIDTH, ideal_height);
    popup::clear_area(frame, popup_area);

    let mut lines: Vec<Line> = HELP_ENTRIES.iter().map(|(key, desc)| entry_line(key, desc)).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", HELP_FOOTER),
        Style::default().fg(Color::DarkGray),
    )));

    let visible_height = popup_area.height.saturating_sub(2);
    help.scroll.update_bounds(lines.len() as u32, visible_height);

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keyboard Shortcuts ")
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .scroll((help.scroll.offset, 0));

    frame.render_widget(widget, popup_area);
}

fn entry_line(key: &'static str, desc: &'static str) -> Line<'static> {
    if key.is_empty() {
        return Line::from(Span::styled(
            format!("  {}", desc),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
    }

    Line::from(vec![
        Span::styled(
            format!("  {:<14}", key),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}
