use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::task_row::DELETE_LABEL;
use crate::app::Focus;
use crate::theme::ThemeColors;

/// 渲染底部快捷键提示栏
pub fn render(frame: &mut Frame, area: Rect, focus: Focus, has_items: bool, colors: &ThemeColors) {
    let shortcuts = get_shortcuts(focus, has_items);

    let mut spans = vec![Span::raw("  ")];
    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));

        if i < shortcuts.len() - 1 {
            spans.push(Span::raw("   "));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn get_shortcuts(focus: Focus, has_items: bool) -> Vec<(&'static str, &'static str)> {
    match focus {
        Focus::Input => vec![
            ("Enter", "add"),
            ("Esc", "clear"),
            ("Tab", "list"),
            ("^C", "quit"),
        ],
        Focus::List if has_items => vec![
            ("j/k", "move"),
            ("Space", "toggle"),
            ("d", DELETE_LABEL),
            ("i", "new"),
            ("t", "theme"),
            ("q", "quit"),
        ],
        Focus::List => vec![("i", "new"), ("t", "theme"), ("q", "quit")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_shortcuts_depend_on_items() {
        let with_items = get_shortcuts(Focus::List, true);
        assert!(with_items.iter().any(|(_, desc)| *desc == DELETE_LABEL));

        let empty = get_shortcuts(Focus::List, false);
        assert!(!empty.iter().any(|(_, desc)| *desc == DELETE_LABEL));
    }
}
