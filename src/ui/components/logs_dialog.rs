//! Log viewer overlay backed by the in-memory logger

use crate::constants::TITLE_LOGS;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

pub struct LogsDialog;

impl LogsDialog {
    /// Render `logs` (newest first) in a modal covering most of `area`
    pub fn render(frame: &mut Frame, logs: &[String], area: Rect) {
        let modal_area = LayoutManager::centered_rect(80, 80, area);

        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .title(TITLE_LOGS)
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black))
            .border_style(Style::default().fg(Color::Cyan));
        frame.render_widget(block, modal_area);

        let inner_area = modal_area.inner(Margin {
            vertical: 1,
            horizontal: 1,
        });

        if logs.is_empty() {
            let no_logs = Paragraph::new("No log entries yet").style(Style::default().fg(Color::Gray));
            frame.render_widget(no_logs, inner_area);
            return;
        }

        let items: Vec<ListItem> = logs
            .iter()
            .take(inner_area.height as usize)
            .map(|entry| {
                // Entries look like "[HH:MM:SS] message"
                let (timestamp, message) = match entry.find("] ") {
                    Some(end) => (&entry[..=end], &entry[end + 2..]),
                    None => ("", entry.as_str()),
                };

                let message_style = if message.contains("failed") || message.contains("Failed") {
                    Style::default().fg(Color::Red)
                } else if message.contains("Discarding") || message.contains("Ignoring") {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::White)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(timestamp.to_string(), Style::default().fg(Color::DarkGray)),
                    Span::raw(" "),
                    Span::styled(message.to_string(), message_style),
                ]))
            })
            .collect();

        frame.render_widget(List::new(items), inner_area);
    }
}
