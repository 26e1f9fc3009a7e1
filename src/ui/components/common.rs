use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled modal or panel block
pub fn create_dialog_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Border and title color for a form field, depending on focus and validity
pub fn field_color(focused: bool, invalid: bool) -> Color {
    if invalid {
        Color::Red
    } else if focused {
        Color::Yellow
    } else {
        Color::Gray
    }
}

/// Creates a text input field. The cursor block is only drawn while focused.
pub fn create_input_paragraph<'a>(value: &'a str, field_title: &str, focused: bool, invalid: bool) -> Paragraph<'a> {
    let mut spans = vec![Span::styled(value, Style::default().fg(Color::White))];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::White)));
    }

    let color = field_color(focused, invalid);
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(color))
        .style(Style::default().fg(color));

    Paragraph::new(Line::from(spans)).block(input_block)
}

/// Creates a select field showing the current option between arrows
pub fn create_selection_paragraph(value: String, field_title: &str, focused: bool) -> Paragraph<'static> {
    let display = if focused {
        format!("◀ {} ▶", value)
    } else {
        value
    };

    let color = field_color(focused, false);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(color))
        .style(Style::default().fg(color));

    Paragraph::new(display).block(block).style(Style::default().fg(Color::White))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_BACK: InstructionShortcut = ("Esc", Color::Red, " Back");
    pub const ENTER_SUBMIT: InstructionShortcut = ("Enter", Color::Green, " Submit");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const ARROWS_CHOOSE: InstructionShortcut = ("←/→", Color::Cyan, " Choose");
    pub const ENTER_DISMISS: InstructionShortcut = ("Enter", Color::Green, " Dismiss");
}
