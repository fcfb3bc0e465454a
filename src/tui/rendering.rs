use std::path::Path;

use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{MessageType, StatusMessage};
use super::layout::AppLayout;
use super::timestamps::format_timestamp;
use crate::models::Message;
use crate::utils::{format_path_with_tilde, sanitize_for_terminal};

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const ERROR: Color = Color::Rgb(239, 68, 68);
const STATUS_BG: Color = Color::Rgb(24, 24, 27);

/// Everything the renderer needs for one frame
pub struct RenderState<'a> {
    pub messages: &'a [Message],
    pub selected_idx: usize,
    pub source: &'a Path,
    pub store_found: bool,
    pub status_message: Option<&'a StatusMessage>,
    pub now: DateTime<Utc>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_message_list(frame, layout.messages_area, state);
    render_detail(frame, layout.detail_area, state.messages.get(state.selected_idx), &state.now);
    render_status_bar(frame, layout.status_area, state);
}

fn author_style(author: &str) -> Style {
    match author {
        "user" => Style::default().fg(Color::Rgb(96, 165, 250)),
        "assistant" => Style::default().fg(ACCENT),
        _ => Style::default().fg(MUTED),
    }
}

fn render_message_list(frame: &mut Frame, area: Rect, state: &RenderState) {
    let items: Vec<ListItem> = state
        .messages
        .iter()
        .map(|message| {
            let preview = sanitize_for_terminal(message.preview());
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<9} ", sanitize_for_terminal(&message.author)),
                    author_style(&message.author).add_modifier(Modifier::BOLD),
                ),
                Span::raw(preview),
            ]))
        })
        .collect();

    let title = if state.store_found {
        format!(" Conversation ({}) ", state.messages.len())
    } else {
        " No conversation store ".to_string()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(title),
        )
        .highlight_style(Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD));

    let selected = (!state.messages.is_empty()).then_some(state.selected_idx);
    let mut list_state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_detail(frame: &mut Frame, area: Rect, message: Option<&Message>, now: &DateTime<Utc>) {
    let content = match message {
        Some(message) => {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled("Author: ", Style::default().fg(MUTED)),
                    Span::styled(
                        sanitize_for_terminal(&message.author),
                        author_style(&message.author),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Created: ", Style::default().fg(MUTED)),
                    Span::raw(format!(
                        "{} ({})",
                        message.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
                        format_timestamp(&message.created_at, now)
                    )),
                ]),
                Line::from(""),
            ];
            let body = sanitize_for_terminal(&message.content);
            lines.extend(body.lines().map(|l| Line::from(l.to_string())));
            Text::from(lines)
        }
        None => Text::from("No message selected"),
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Message "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (text, style) = match state.status_message {
        Some(status) => {
            let fg = match status.message_type {
                MessageType::Success => ACCENT,
                MessageType::Error => ERROR,
            };
            (format!(" {} ", status.text), Style::default().fg(fg).bg(STATUS_BG))
        }
        None => {
            let mut parts = vec![format_path_with_tilde(state.source)];
            if !state.messages.is_empty() {
                parts.push(format!("message {}/{}", state.selected_idx + 1, state.messages.len()));
            }
            parts.push("r: reload".to_string());
            parts.push("y: copy".to_string());
            parts.push("q: quit".to_string());
            (format!(" {} ", parts.join(" | ")), Style::default().fg(BRIGHT).bg(STATUS_BG))
        }
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}
