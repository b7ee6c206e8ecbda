use chrono::Utc;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::flows::{EmptyState, StatsState};
use crate::utils::validator::Field;
use crate::utils::{format_absolute, format_relative};

use super::app::{App, CurrentScreen};

pub fn ui(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, chunks[0]);
    draw_dashboard(frame, app, chunks[1]);

    match app.current_screen {
        CurrentScreen::AddLink => draw_add_link(frame, app, chunks[1]),
        CurrentScreen::DeleteConfirm => draw_delete_confirm(frame, app, chunks[1]),
        CurrentScreen::Stats => draw_stats(frame, app, chunks[1]),
        CurrentScreen::Health => draw_health(frame, app, chunks[1]),
        CurrentScreen::Help => draw_help(frame, chunks[1]),
        CurrentScreen::Exiting => draw_exiting(frame, chunks[1]),
        CurrentScreen::Dashboard => {}
    }

    draw_status_bar(frame, app, chunks[2]);
    draw_footer(frame, app, chunks[3]);
}

fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled("TinyDash", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!(" | {}", app.config.base_url),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!(" | Total: {}", app.collection.all().len()),
            Style::default().fg(Color::Yellow),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    )
    .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

fn draw_dashboard(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    draw_search_box(frame, app, chunks[0]);
    draw_links_table(frame, app, chunks[1]);
}

fn draw_search_box(frame: &mut Frame, app: &App, area: Rect) {
    let style = if app.is_searching {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let content = if app.collection.search_text().is_empty() && !app.is_searching {
        Span::styled(
            "Search by code or URL... (press / to search)",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::raw(app.collection.search_text().to_string())
    };

    let search = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style)
            .title("Search"),
    );
    frame.render_widget(search, area);
}

fn draw_links_table(frame: &mut Frame, app: &App, area: Rect) {
    if app.collection.is_loading() {
        let loading = Paragraph::new("Loading links...")
            .style(Style::default().fg(Color::DarkGray))
            .block(bordered("Short Links"))
            .alignment(Alignment::Center);
        frame.render_widget(loading, area);
        return;
    }

    if let Some(err) = app.collection.error() {
        let error = Paragraph::new(format!("Error: {}", err))
            .style(Style::default().fg(Color::Red))
            .block(bordered("Short Links"))
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center);
        frame.render_widget(error, area);
        return;
    }

    if let Some(empty_state) = app.collection.empty_state() {
        let text = match empty_state {
            EmptyState::NoLinksYet => vec![
                Line::from("No links yet"),
                Line::from(Span::styled(
                    "Create your first short link to get started (press a)",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
            EmptyState::NoMatches => vec![Line::from(format!(
                "No links found matching \"{}\"",
                app.collection.search_text()
            ))],
        };
        let empty = Paragraph::new(text)
            .block(bordered("Short Links"))
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let now = Utc::now();
    let header = Row::new(vec!["Short Code", "Target URL", "Clicks", "Last Clicked"])
        .style(Style::default().fg(Color::Yellow).bold())
        .bottom_margin(1);

    let visible = app.collection.visible();
    let mut rows = Vec::with_capacity(visible.len());
    for (i, link) in visible.iter().enumerate() {
        let display_url = if link.target_url.chars().count() > 50 {
            let head: String = link.target_url.chars().take(50).collect();
            format!("{}...", head)
        } else {
            link.target_url.clone()
        };

        let row_style = if i == app.selected_index {
            Style::default().bg(Color::DarkGray).fg(Color::White)
        } else {
            Style::default()
        };

        rows.push(
            Row::new(vec![
                Span::styled(link.code.clone(), Style::default().fg(Color::Cyan).bold()),
                Span::styled(display_url, Style::default().fg(Color::Blue)),
                Span::styled(
                    link.total_clicks.to_string(),
                    Style::default().fg(Color::Green),
                ),
                Span::raw(format_relative(link.last_clicked_at, now)),
            ])
            .style(row_style),
        );
    }

    let title = if app.collection.search_text().is_empty() {
        "Short Links".to_string()
    } else {
        format!(
            "Search Results ({} found) - \"{}\"",
            visible.len(),
            app.collection.search_text()
        )
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Min(30),
            Constraint::Length(8),
            Constraint::Length(18),
        ],
    )
    .header(header)
    .block(bordered(&title))
    .column_spacing(2);

    frame.render_widget(table, area);
}

fn draw_add_link(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect(70, 60, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title("Create Short Link")
        .title_style(Style::default().fg(Color::Green).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // target url
            Constraint::Length(1), // target url error
            Constraint::Length(3), // custom code
            Constraint::Length(1), // custom code error
            Constraint::Length(1), // hint
            Constraint::Min(1),    // submit line
        ])
        .split(inner);

    draw_input(
        frame,
        chunks[0],
        "Target URL *",
        app.create_flow.target_url(),
        app.active_field == Field::TargetUrl,
    );
    draw_field_error(frame, chunks[1], app.create_flow.field_error(Field::TargetUrl));
    draw_input(
        frame,
        chunks[2],
        "Custom Code (optional)",
        app.create_flow.custom_code(),
        app.active_field == Field::CustomCode,
    );
    draw_field_error(frame, chunks[3], app.create_flow.field_error(Field::CustomCode));

    let hint = Paragraph::new("Leave the code empty to generate a random one")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, chunks[4]);

    let submit_text = if app.create_flow.is_submitting() {
        Span::styled("Creating...", Style::default().fg(Color::Yellow).bold())
    } else {
        Span::styled(
            "Enter: Create Link   Tab: Switch Field   Esc: Cancel",
            Style::default().fg(Color::DarkGray),
        )
    };
    frame.render_widget(
        Paragraph::new(Line::from(submit_text)).alignment(Alignment::Center),
        chunks[5],
    );
}

fn draw_input(frame: &mut Frame, area: Rect, label: &str, value: &str, active: bool) {
    let border_style = if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let input = Paragraph::new(value.to_string()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(label),
    );
    frame.render_widget(input, area);
}

fn draw_field_error(frame: &mut Frame, area: Rect, error: Option<&'static str>) {
    if let Some(message) = error {
        let error_line =
            Paragraph::new(message).style(Style::default().fg(Color::Red).bold());
        frame.render_widget(error_line, area);
    }
}

fn draw_delete_confirm(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect(55, 30, area);
    frame.render_widget(Clear, popup_area);

    let code = app.delete_flow.pending_code().unwrap_or("?").to_string();
    let body = if app.delete_flow.is_deleting() {
        vec![Line::from(Span::styled(
            "Deleting...",
            Style::default().fg(Color::Yellow).bold(),
        ))]
    } else {
        vec![
            Line::from(vec![
                Span::raw("Are you sure you want to delete the link "),
                Span::styled(code, Style::default().fg(Color::Cyan).bold()),
                Span::raw("?"),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "This action cannot be undone.",
                Style::default().fg(Color::Red),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "y: Delete   n/Esc: Cancel",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    };

    let dialog = Paragraph::new(body)
        .block(
            Block::default()
                .title("Delete Link")
                .title_style(Style::default().fg(Color::Red).bold())
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);
    frame.render_widget(dialog, popup_area);
}

fn draw_stats(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect(75, 70, area);
    frame.render_widget(Clear, popup_area);

    let now = Utc::now();
    let body = match app.stats_view.state() {
        StatsState::Loading => vec![Line::from("Loading stats...")],
        StatsState::NotFound => vec![
            Line::from(Span::styled(
                "Link not found",
                Style::default().fg(Color::Red).bold(),
            )),
            Line::from("This short link doesn't exist or has been deleted."),
            Line::from(""),
            Line::from(Span::styled(
                "Esc: Back to Dashboard",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        StatsState::Failed(message) => vec![
            Line::from(Span::styled(
                "Failed to load stats",
                Style::default().fg(Color::Red).bold(),
            )),
            Line::from(message.clone()),
        ],
        StatsState::Loaded(link) => {
            let last_clicked = format_relative(link.last_clicked_at, now);
            let mut lines = vec![
                Line::from(Span::styled(
                    link.code.clone(),
                    Style::default().fg(Color::Cyan).bold(),
                )),
                Line::from(Span::styled(
                    link.target_url.clone(),
                    Style::default().fg(Color::Blue),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Total Clicks: ", Style::default().fg(Color::Yellow)),
                    Span::styled(
                        link.total_clicks.to_string(),
                        Style::default().fg(Color::Green).bold(),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Last Clicked: ", Style::default().fg(Color::Yellow)),
                    Span::raw(last_clicked),
                ]),
            ];
            if let Some(t) = link.last_clicked_at {
                lines.push(Line::from(Span::styled(
                    format!("              {}", format_absolute(Some(t))),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines.push(Line::from(vec![
                Span::styled("Created:      ", Style::default().fg(Color::Yellow)),
                Span::raw(format_relative(Some(link.created_at), now)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("              {}", format_absolute(Some(link.created_at))),
                Style::default().fg(Color::DarkGray),
            )));
            lines
        }
        StatsState::Idle => vec![Line::from("")],
    };

    let dialog = Paragraph::new(body)
        .block(
            Block::default()
                .title("Link Stats")
                .title_style(Style::default().fg(Color::Cyan).bold())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(dialog, popup_area);
}

fn draw_health(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect(75, 70, area);
    frame.render_widget(Clear, popup_area);

    let body = match &app.health {
        Some(Ok(health)) => {
            let (status_text, status_color) = if health.ok {
                ("Healthy", Color::Green)
            } else {
                ("Unhealthy", Color::Red)
            };
            let mut lines = vec![
                Line::from(vec![
                    Span::styled("Status:     ", Style::default().fg(Color::Yellow)),
                    Span::styled(status_text, Style::default().fg(status_color).bold()),
                ]),
                Line::from(vec![
                    Span::styled("Version:    ", Style::default().fg(Color::Yellow)),
                    Span::raw(health.version.clone()),
                ]),
                Line::from(vec![
                    Span::styled("Uptime:     ", Style::default().fg(Color::Yellow)),
                    Span::raw(health.format_uptime()),
                ]),
                Line::from(vec![
                    Span::styled("Checked at: ", Style::default().fg(Color::Yellow)),
                    Span::raw(health.checked_at.clone()),
                ]),
                Line::from(""),
            ];
            if let Ok(raw) = serde_json::to_string_pretty(health) {
                for raw_line in raw.lines() {
                    lines.push(Line::from(Span::styled(
                        raw_line.to_string(),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
            }
            lines
        }
        Some(Err(message)) => vec![
            Line::from(Span::styled(
                "Health check failed",
                Style::default().fg(Color::Red).bold(),
            )),
            Line::from(message.clone()),
        ],
        None => vec![Line::from("Checking health...")],
    };

    let dialog = Paragraph::new(body)
        .block(
            Block::default()
                .title("System Health")
                .title_style(Style::default().fg(Color::Cyan).bold())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(dialog, popup_area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let lines = vec![
        ("Up/Down, j/k", "Move selection"),
        ("/", "Search by code or URL"),
        ("Enter, v", "View link stats"),
        ("a", "Create a short link"),
        ("d", "Delete selected link"),
        ("c", "Show short URL for selected link"),
        ("r", "Reload list"),
        ("h", "Registry health"),
        ("q", "Quit"),
    ];
    let body: Vec<Line> = lines
        .into_iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{:<14}", key), Style::default().fg(Color::Cyan).bold()),
                Span::raw(action),
            ])
        })
        .collect();

    let dialog = Paragraph::new(body).block(
        Block::default()
            .title("Help")
            .title_style(Style::default().fg(Color::Cyan).bold())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    frame.render_widget(dialog, popup_area);
}

fn draw_exiting(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(45, 20, area);
    frame.render_widget(Clear, popup_area);

    let dialog = Paragraph::new(vec![
        Line::from("Quit TinyDash?"),
        Line::from(""),
        Line::from(Span::styled(
            "y: Quit   n: Stay",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .title("Exit")
            .borders(Borders::ALL)
            .border_type(BorderType::Double),
    )
    .alignment(Alignment::Center);
    frame.render_widget(dialog, popup_area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if !app.error_message.is_empty() {
        (
            format!("[ERROR] {}", app.error_message),
            Style::default().fg(Color::White).bg(Color::Red).bold(),
        )
    } else if !app.status_message.is_empty() {
        (
            format!("[OK] {}", app.status_message),
            Style::default().fg(Color::Black).bg(Color::Green).bold(),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(Color::Cyan))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);
    frame.render_widget(status, area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts: &[(&str, &str)] = match app.current_screen {
        CurrentScreen::Dashboard if app.is_searching => {
            &[("Type", "Filter"), ("Enter", "Done"), ("Esc", "Clear")]
        }
        CurrentScreen::Dashboard => &[
            ("/", "Search"),
            ("a", "Add"),
            ("d", "Delete"),
            ("v", "Stats"),
            ("h", "Health"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
        CurrentScreen::AddLink => &[
            ("Tab", "Switch Field"),
            ("Enter", "Create"),
            ("Esc", "Cancel"),
        ],
        CurrentScreen::DeleteConfirm => &[("y", "Delete"), ("n", "Cancel")],
        CurrentScreen::Stats | CurrentScreen::Health | CurrentScreen::Help => {
            &[("Esc", "Back to Dashboard")]
        }
        CurrentScreen::Exiting => &[("y", "Quit"), ("n", "Stay")],
    };

    let mut spans = Vec::new();
    for (i, (key, action)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  |  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            *key,
            Style::default().fg(Color::Cyan).bold(),
        ));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn bordered(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title.to_string())
        .title_style(Style::default().fg(Color::Cyan))
}

/// helper function to create a centered rect using up certain percentage of
/// the available rect `r`
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
