use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{App, SettingsField};
use crate::models::Plant;
use crate::ui::centered_rect;

/// Render the settings modal as an overlay
pub fn render_settings_modal(frame: &mut Frame, area: Rect, app: &App) {
    let modal_area = centered_rect(area, 44, 12);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    // Modal block
    let block = Block::default()
        .title(" Settings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::vertical([
        Constraint::Length(2), // Plant selector
        Constraint::Length(2), // Weight
        Constraint::Length(2), // Validation error
        Constraint::Min(0),    // Spacer
        Constraint::Length(2), // Controls
    ])
    .split(inner);

    let field_style = |field: SettingsField| {
        if app.settings.field == field {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default()
        }
    };

    // Plant selector
    let mut plant_spans = vec![Span::styled(
        format!("{:<10}", "Plant:"),
        field_style(SettingsField::Plant),
    )];
    for plant in Plant::ALL {
        let style = if plant == app.settings.plant {
            field_style(SettingsField::Plant).fg(Color::Green)
        } else {
            Style::default().dark_gray()
        };
        let marker = if plant == app.settings.plant {
            "●"
        } else {
            "○"
        };
        plant_spans.push(Span::styled(format!("{} {} ", marker, plant), style));
    }
    frame.render_widget(Paragraph::new(Line::from(plant_spans)), chunks[0]);

    // Weight
    let weight_text = if app.settings.field == SettingsField::Weight {
        format!("{}_", app.settings.weight_input)
    } else {
        app.settings.weight_input.clone()
    };
    let weight_line = Line::from(vec![
        Span::styled(
            format!("{:<10}", "Weight:"),
            field_style(SettingsField::Weight),
        ),
        Span::styled(weight_text, field_style(SettingsField::Weight)),
        Span::raw(" kg"),
    ]);
    frame.render_widget(Paragraph::new(weight_line), chunks[1]);

    if let Some(error) = app.settings.error {
        frame.render_widget(Paragraph::new(error).centered().fg(Color::Red), chunks[2]);
    }

    // Controls
    let controls = Line::from(vec![
        Span::styled("[Enter]", Style::default().bold()),
        Span::raw(" Save  "),
        Span::styled("[Tab]", Style::default().bold()),
        Span::raw(" Field  "),
        Span::styled("[←/→]", Style::default().bold()),
        Span::raw(" Plant  "),
        Span::styled("[Esc]", Style::default().bold()),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(
        Paragraph::new(controls)
            .centered()
            .dark_gray()
            .block(Block::default().borders(Borders::TOP)),
        chunks[4],
    );
}
