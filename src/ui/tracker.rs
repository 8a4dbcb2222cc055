use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
};

use crate::app::App;
use crate::assets::PlantArt;
use crate::config::{ART_HEIGHT, PANEL_HEIGHT, PANEL_WIDTH, WATER_INCREMENTS};
use crate::ui::centered_rect;

/// Render the main tracker view
pub fn render_tracker(frame: &mut Frame, area: Rect, app: &App) {
    let panel = centered_rect(area, PANEL_WIDTH, PANEL_HEIGHT);
    frame.render_widget(Clear, panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let chunks = Layout::vertical([
        Constraint::Length(2), // Title
        Constraint::Length(ART_HEIGHT as u16 + 1), // Plant
        Constraint::Length(1), // Progress text
        Constraint::Length(1), // Progress bar
        Constraint::Length(1), // Spacer
        Constraint::Length(1), // Add bindings
        Constraint::Length(2), // Reset binding
        Constraint::Length(1), // Successful days
        Constraint::Min(0), // Spacer
        Constraint::Length(2), // Controls
    ])
    .split(inner);

    // Title with the settings hint in the corner
    let title_chunks =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(8)]).split(chunks[0]);
    frame.render_widget(
        Paragraph::new(Line::from("Water Tracker").bold().blue().centered())
            .block(Block::default().borders(Borders::BOTTOM)),
        title_chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("[s]", Style::default().bold()),
            Span::raw(" ⚙"),
        ]))
        .block(Block::default().borders(Borders::BOTTOM)),
        title_chunks[1],
    );

    // Plant
    let plant_color = match app.plant_art {
        PlantArt::Art(_) => Color::Green,
        PlantArt::Label { .. } => Color::DarkGray,
    };
    let plant_lines: Vec<Line> = app.plant_art.lines().into_iter().map(Line::from).collect();
    frame.render_widget(
        Paragraph::new(plant_lines)
            .centered()
            .style(Style::default().fg(plant_color)),
        chunks[1],
    );

    // Progress
    let tracker = &app.tracker;
    let progress_text = format!("{} / {} mL", tracker.current_intake, tracker.daily_goal);
    frame.render_widget(Paragraph::new(progress_text).centered().bold(), chunks[2]);

    let gauge_color = if tracker.goal_met() {
        Color::Green
    } else {
        Color::Cyan
    };
    let bar_area = Layout::horizontal([
        Constraint::Percentage(10),
        Constraint::Percentage(80),
        Constraint::Percentage(10),
    ])
    .split(chunks[3])[1];
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(gauge_color).bg(Color::DarkGray))
            .ratio(tracker.progress())
            .label(""),
        bar_area,
    );

    // Add bindings
    let add_spans: Vec<Span> = WATER_INCREMENTS
        .iter()
        .enumerate()
        .flat_map(|(i, amount)| {
            vec![
                Span::styled(format!("[{}]", i + 1), Style::default().bold()),
                Span::styled(
                    format!(" +{} mL  ", amount),
                    Style::default().fg(Color::Green),
                ),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(add_spans)).centered(), chunks[5]);

    let reset_line = Line::from(vec![
        Span::styled("[r]", Style::default().bold()),
        Span::styled(" Reset daily progress", Style::default().fg(Color::Red)),
    ]);
    frame.render_widget(Paragraph::new(reset_line).centered(), chunks[6]);

    frame.render_widget(
        Paragraph::new(format!("Successful days: {}", tracker.days_completed)).centered(),
        chunks[7],
    );

    // Controls
    let controls = "[s] Settings  [q] Quit";
    frame.render_widget(
        Paragraph::new(controls)
            .centered()
            .dark_gray()
            .block(Block::default().borders(Borders::TOP)),
        chunks[9],
    );
}
