use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// Header 高度：上下边框 + 1 行
pub const HEADER_HEIGHT: u16 = 3;

/// 计数文字，如 "4 tasks · 1 done"
pub fn summary(total: usize, done: usize) -> String {
    let noun = if total == 1 { "task" } else { "tasks" };
    format!("{} {} · {} done", total, noun, done)
}

/// 渲染顶部标题栏
pub fn render(frame: &mut Frame, area: Rect, total: usize, done: usize, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let left = Span::styled(
        " ✓ taskpad",
        Style::default().fg(colors.logo).add_modifier(Modifier::BOLD),
    );
    let right = Span::styled(
        format!("{} ", summary(total, done)),
        Style::default().fg(colors.muted),
    );

    // 计算中间填充空格
    let padding_len = (inner_area.width as usize).saturating_sub(left.width() + right.width());
    let line = Line::from(vec![left, Span::raw(" ".repeat(padding_len)), right]);

    frame.render_widget(Paragraph::new(line), inner_area);
}
