//! UI rendering for the to-do list.
//!
//! A thin adapter: all list/stat derivation happens in `view::build`; this
//! module only places widgets.

use crate::app::{AddField, App, MessageType};
use crate::models::{Filter, Priority};
use crate::view::{self, ViewModel};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};
use todo_theme::StyleSet;

/// Draw the application.
pub fn draw(f: &mut Frame, app: &mut App) {
    let set = app.theme.styles();
    let vm = app.view_model();

    // Whole-document background.
    f.render_widget(Block::default().style(set.base()), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Priority selector
            Constraint::Min(0),    // Task list
            Constraint::Length(3), // Footer/status
        ])
        .split(f.area());

    draw_header(f, app, &vm, &set, chunks[0]);
    draw_priority_selector(f, app, &set, chunks[1]);
    draw_tasks(f, app, &vm, &set, chunks[2]);
    draw_footer(f, app, &vm, &set, chunks[3]);

    if app.show_help {
        draw_help_popup(f, &set);
    }

    if app.add_form.is_some() {
        draw_add_dialog(f, app, &set);
    }
}

fn draw_header(f: &mut Frame, app: &App, vm: &ViewModel, set: &StyleSet, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();
    for (i, filter) in Filter::CHOICES.iter().enumerate() {
        spans.push(styled_tab(
            &format!("{}:{}", i + 1, filter.label()),
            vm.filter == *filter,
            set,
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        format!("  {}", app.theme.mode.toggle_glyph()),
        Style::default().fg(set.accent),
    ));

    let title = match &app.theme.background {
        Some(preset) => format!(" To-Do List [{}] ", preset.name),
        None => " To-Do List ".to_string(),
    };

    let header = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(set.border))
                .title(title),
        )
        .alignment(Alignment::Center);

    f.render_widget(header, area);
}

fn styled_tab<'a>(label: &str, active: bool, set: &StyleSet) -> Span<'a> {
    if active {
        Span::styled(
            format!("[{}]", label),
            Style::default().fg(set.accent).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!(" {} ", label), Style::default().fg(set.fg_muted))
    }
}

fn draw_priority_selector(f: &mut Frame, app: &App, set: &StyleSet, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();
    for priority in Priority::ALL {
        let selected = priority == app.selected_priority;
        let style = if selected {
            Style::default()
                .fg(set.priority_color(priority.rank()))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(set.fg_muted)
        };
        let label = if selected {
            format!("[{}]", priority.label())
        } else {
            format!(" {} ", priority.label())
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("   "));
    }

    // The indicator sits proportionally under the selected option.
    let inner_width = area.width.saturating_sub(2) as f32;
    let offset =
        (inner_width * view::indicator_percent(app.selected_priority) / 100.0).round() as usize;
    let segment = ((inner_width / 3.0) as usize).max(1);
    let indicator = Line::from(Span::styled(
        format!("{}{}", " ".repeat(offset), "▔".repeat(segment)),
        Style::default().fg(set.priority_color(app.selected_priority.rank())),
    ));

    let selector = Paragraph::new(vec![Line::from(spans), indicator]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(set.border))
            .title(" New task priority "),
    );

    f.render_widget(selector, area);
}

fn draw_tasks(f: &mut Frame, app: &App, vm: &ViewModel, set: &StyleSet, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(set.border))
        .title(" Tasks ");

    if vm.is_empty() {
        let placeholder = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("∅", Style::default().fg(set.fg_muted))),
            Line::from(Span::styled(
                view::EMPTY_MESSAGE,
                Style::default().fg(set.fg_muted),
            )),
        ])
        .block(block)
        .alignment(Alignment::Center);
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = vm
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let checkbox = if row.completed { "[x]" } else { "[ ]" };
            let mut spans = vec![
                Span::styled(
                    checkbox,
                    Style::default().fg(if row.completed {
                        set.success
                    } else {
                        set.fg_muted
                    }),
                ),
                Span::raw(" "),
            ];

            let text_style = if row.completed {
                set.completed()
            } else if i == app.selected_index {
                Style::default().fg(set.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(set.fg)
            };
            spans.push(Span::styled(row.text.clone(), text_style));

            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!("[{}]", row.priority.label()),
                Style::default().fg(set.priority_color(row.priority.rank())),
            ));

            if !row.schedule.is_empty() {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(row.schedule.clone(), set.muted()));
            }

            let style = if i == app.selected_index {
                set.selected()
            } else {
                Style::default()
            };

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

fn draw_footer(f: &mut Frame, app: &App, vm: &ViewModel, set: &StyleSet, area: Rect) {
    let stats = Span::styled(
        format!("{} · {}", vm.total_label, vm.completed_label),
        Style::default().fg(set.accent),
    );

    let trailing = if let Some((ref message, msg_type)) = app.message {
        let color = match msg_type {
            MessageType::Info => set.accent,
            MessageType::Success => set.success,
            MessageType::Error => set.error,
        };
        Span::styled(message.clone(), Style::default().fg(color))
    } else {
        Span::styled(
            "j/k:Move  Space:Toggle  a:Add  d:Delete  1/2/3:Filter  p:Priority  m:Mode  t:Theme  ?:Help  q:Quit",
            Style::default().fg(set.fg_muted),
        )
    };

    let footer = Paragraph::new(Line::from(vec![stats, Span::raw("  |  "), trailing])).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(set.border)),
    );

    f.render_widget(footer, area);
}

fn draw_add_dialog(f: &mut Frame, app: &App, set: &StyleSet) {
    let Some(form) = &app.add_form else {
        return;
    };

    let area = centered_rect(50, 30, f.area());
    f.render_widget(Clear, area);

    let fields = [
        (AddField::Text, form.text.as_str()),
        (AddField::Date, form.date.as_str()),
        (AddField::Time, form.time.as_str()),
    ];

    let lines: Vec<Line> = fields
        .iter()
        .map(|(field, value)| {
            let style = if *field == form.field {
                Style::default().fg(set.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(set.fg)
            };
            Line::from(vec![
                Span::styled(format!("{:>5}: ", field.label()), set.muted()),
                Span::styled((*value).to_string(), style),
            ])
        })
        .collect();

    let dialog = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(set.accent))
            .title(" New Task (Tab:Next field  Enter:Add  Esc:Cancel) "),
    );

    f.render_widget(dialog, area);

    // Cursor at the end of the focused field.
    let (row, value_len) = match form.field {
        AddField::Text => (0, form.text.len()),
        AddField::Date => (1, form.date.len()),
        AddField::Time => (2, form.time.len()),
    };
    f.set_cursor_position((area.x + 8 + value_len as u16, area.y + 1 + row));
}

fn draw_help_popup(f: &mut Frame, set: &StyleSet) {
    let area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, area);

    let help_text = r#"
To-Do List Keybindings

Navigation:
  j/k, Up/Down    Move selection
  g/G             Jump to first/last

Tasks:
  Space, Enter    Toggle completion
  a               Add new task
  d               Delete task

Filters:
  1               All
  2               Active
  3               Completed

Presentation:
  p               Cycle new-task priority
  m               Toggle dark mode
  t               Cycle background theme

General:
  ?               Show this help
  q               Quit

Press any key to close
"#;

    let popup = Paragraph::new(help_text)
        .style(Style::default().fg(set.fg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(set.border))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(popup, area);
}

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
