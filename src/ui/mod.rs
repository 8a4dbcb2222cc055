mod dialog;
mod settings;
mod tracker;

use ratatui::layout::Rect;

pub use dialog::{render_confirm_modal, render_notice_modal};
pub use settings::render_settings_modal;
pub use tracker::render_tracker;

/// Calculate a centred rectangle of at most `width` x `height` inside `area`,
/// keeping a small margin when the terminal is too small
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_large_area() {
        let rect = centered_rect(Rect::new(0, 0, 100, 40), 46, 28);
        assert_eq!(rect, Rect::new(27, 6, 46, 28));
    }

    #[test]
    fn test_centered_rect_shrinks_in_small_area() {
        let rect = centered_rect(Rect::new(0, 0, 30, 10), 46, 28);
        assert_eq!(rect.width, 26);
        assert_eq!(rect.height, 6);
        assert_eq!((rect.x, rect.y), (2, 2));
    }
}
