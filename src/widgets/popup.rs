use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rect of the given size centered in `frame_area`, shrunk to fit
pub fn centered_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    Rect {
        x: frame_area.x + (frame_area.width - popup_width) / 2,
        y: frame_area.y + (frame_area.height - popup_height) / 2,
        width: popup_width,
        height: popup_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
