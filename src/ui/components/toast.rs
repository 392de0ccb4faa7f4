use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// Toast 区域：屏幕底部居中，空间不足时为 None
pub fn toast_area(area: Rect, message: &str) -> Option<Rect> {
    if area.width < 8 || area.height < 7 {
        return None;
    }

    let message_width = Span::raw(message).width();
    let toast_width = (message_width + 6).min(area.width as usize - 4) as u16;
    let toast_height = 3;
    let toast_x = area.x + (area.width - toast_width) / 2;
    let toast_y = area.y + area.height - toast_height - 3;

    Some(Rect::new(toast_x, toast_y, toast_width, toast_height))
}

/// 在屏幕底部居中显示 Toast 消息，返回占用的区域
pub fn render(frame: &mut Frame, message: &str, colors: &ThemeColors) -> Option<Rect> {
    let toast_area = toast_area(frame.area(), message)?;

    // 清除背景
    frame.render_widget(Clear, toast_area);

    let toast = Paragraph::new(message)
        .style(
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.highlight))
                .style(Style::default().bg(colors.bg)),
        );

    frame.render_widget(toast, toast_area);

    Some(toast_area)
}
