//! UI layout and rendering logic for the TUI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::app::{App, RunState, View};

/// Render the main UI
pub fn render_ui(frame: &mut Frame, app: &App) {
    match app.view {
        View::Library => render_library(frame, app),
        View::Editor => render_editor(frame, app),
    }

    // Render help overlay if requested
    if app.show_help {
        render_help_overlay(frame, app);
    }
}

/// Render the catalog browser: entry list on the left, preview on the right
fn render_library(frame: &mut Frame, app: &App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Browser area
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let browser_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_layout[0]);

    // Entry list
    let section = app.selected_section();
    let mut list_lines = Vec::new();
    for (i, entry) in section.entries().iter().enumerate() {
        let style = if i == app.entry_index {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        list_lines.push(Line::from(Span::styled(
            format!(" {} ({})", entry.title, entry.difficulty),
            style,
        )));
    }
    let list = Paragraph::new(Text::from(list_lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{} (←/→ to switch)", section.label())),
    );
    frame.render_widget(list, browser_layout[0]);

    // Preview pane
    let entry = app.selected_entry();
    let mut preview_lines = vec![
        Line::from(Span::styled(
            entry.title,
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} / {}", entry.category, entry.difficulty),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(entry.description),
        Line::from(""),
    ];
    for line in entry.code.lines() {
        preview_lines.push(Line::from(Span::styled(
            line.to_string(),
            Style::default().fg(Color::Cyan),
        )));
    }
    let preview = Paragraph::new(Text::from(preview_lines))
        .block(Block::default().borders(Borders::ALL).title("Preview"))
        .wrap(Wrap { trim: false });
    frame.render_widget(preview, browser_layout[1]);

    render_status_bar(frame, app, main_layout[1]);
}

/// Render the editor with its output pane
fn render_editor(frame: &mut Frame, app: &App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),        // Editor area
            Constraint::Percentage(30), // Output area
            Constraint::Length(1),     // Status bar
        ])
        .split(frame.area());

    render_editor_buffer(frame, app, main_layout[0]);
    render_output_pane(frame, app, main_layout[1]);
    render_status_bar(frame, app, main_layout[2]);
}

fn render_editor_buffer(frame: &mut Frame, app: &App, area: Rect) {
    let gutter_width = app.lines.len().to_string().len().max(2);
    let mut content_lines = Vec::new();

    for (row, line) in app.lines.iter().enumerate() {
        let mut spans = vec![Span::styled(
            format!("{:>width$} ", row + 1, width = gutter_width),
            Style::default().fg(Color::DarkGray),
        )];

        if row == app.cursor_row {
            // Draw the cursor as a reversed cell inside the line
            let chars: Vec<char> = line.chars().collect();
            let col = app.cursor_col.min(chars.len());
            let before: String = chars[..col].iter().collect();
            let at: String = chars.get(col).map(|c| c.to_string()).unwrap_or_else(|| " ".to_string());
            let after: String = if col < chars.len() {
                chars[col + 1..].iter().collect()
            } else {
                String::new()
            };
            spans.push(Span::raw(before));
            spans.push(Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)));
            spans.push(Span::raw(after));
        } else {
            spans.push(Span::raw(line.clone()));
        }

        content_lines.push(Line::from(spans));
    }

    let title = match &app.entry_title {
        Some(title) => format!("Editor - {}", title),
        None => "Editor".to_string(),
    };

    // Keep the cursor row visible
    let available_height = area.height.saturating_sub(2) as usize;
    let scroll_y = app.cursor_row.saturating_sub(available_height.saturating_sub(1)) as u16;

    let paragraph = Paragraph::new(Text::from(content_lines))
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((scroll_y, 0));
    frame.render_widget(paragraph, area);
}

fn render_output_pane(frame: &mut Frame, app: &App, area: Rect) {
    let mut content_lines = Vec::new();
    for (i, line) in app.output.iter().enumerate() {
        content_lines.push(Line::from(vec![
            Span::styled(format!("{:>3} ", i + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(line.clone(), output_line_style(line)),
        ]));
    }

    let title = match app.run_state {
        RunState::Running => "Output (running...)",
        RunState::Idle => "Output",
    };

    let paragraph = Paragraph::new(Text::from(content_lines))
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn output_line_style(line: &str) -> Style {
    if line.starts_with("❌") {
        Style::default().fg(Color::Red)
    } else if line.starts_with("⚠️") {
        Style::default().fg(Color::Yellow)
    } else if line.starts_with("ℹ️") {
        Style::default().fg(Color::Cyan)
    } else if line.starts_with("✅") {
        Style::default().fg(Color::Green)
    } else if line.starts_with("Return: ") {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::White)
    }
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status_paragraph = Paragraph::new(app.status_message.clone())
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(status_paragraph, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Create centered popup area
    let popup_area = centered_rect(70, 70, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let help_lines = match app.view {
        View::Library => vec![
            Line::from("Library Help"),
            Line::from(""),
            Line::from("Navigation:"),
            Line::from("  ↑/↓        - Select entry"),
            Line::from("  ←/→, Tab   - Switch section"),
            Line::from("  Enter      - Open entry in the editor"),
            Line::from("  Esc        - Back to the editor"),
            Line::from(""),
            Line::from("General:"),
            Line::from("  F1         - Toggle this help"),
            Line::from("  Ctrl+C ×2  - Quit"),
        ],
        View::Editor => vec![
            Line::from("Editor Help"),
            Line::from(""),
            Line::from("Editing:"),
            Line::from("  Arrows     - Move cursor"),
            Line::from("  Tab        - Insert indent"),
            Line::from("  Enter      - New line"),
            Line::from(""),
            Line::from("Actions:"),
            Line::from("  Ctrl+R     - Run snippet"),
            Line::from("  Ctrl+L     - Clear output"),
            Line::from("  Ctrl+S     - Save snippet to a file"),
            Line::from("  Esc        - Back to the library"),
            Line::from(""),
            Line::from("General:"),
            Line::from("  F1         - Toggle this help"),
            Line::from("  Ctrl+C ×2  - Quit"),
        ],
    };

    let help_text = Text::from(help_lines);
    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .title_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(help_paragraph, popup_area);
}

/// Helper function to create a centered rectangle
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
