use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{Notice, NoticeLevel};
use crate::ui::centered_rect;

/// Render a notice as a modal overlay
pub fn render_notice_modal(frame: &mut Frame, area: Rect, notice: &Notice) {
    let modal_area = centered_rect(area, 40, 7);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let color = match notice.level {
        NoticeLevel::Info => Color::Cyan,
        NoticeLevel::Success => Color::Green,
        NoticeLevel::Error => Color::Red,
    };
    let block = Block::default()
        .title(format!(" {} ", notice.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Message
        Constraint::Length(1), // Controls
    ])
    .split(inner);

    frame.render_widget(
        Paragraph::new(notice.message.as_str())
            .centered()
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let controls = Line::from(vec![
        Span::styled("[Enter]", Style::default().bold()),
        Span::raw(" OK"),
    ]);
    frame.render_widget(Paragraph::new(controls).centered().dark_gray(), chunks[1]);
}

/// Render the reset confirmation modal
pub fn render_confirm_modal(frame: &mut Frame, area: Rect) {
    let modal_area = centered_rect(area, 40, 7);

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(" Reset ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

    frame.render_widget(
        Paragraph::new("Are you sure you want to reset today's progress?")
            .centered()
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let controls = Line::from(vec![
        Span::styled("[y]", Style::default().bold()),
        Span::raw(" Yes   "),
        Span::styled("[n]", Style::default().bold()),
        Span::raw(" No"),
    ]);
    frame.render_widget(Paragraph::new(controls).centered().dark_gray(), chunks[1]);
}
