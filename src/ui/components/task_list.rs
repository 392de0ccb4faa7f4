use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::task_row;
use crate::model::Task;
use crate::theme::ThemeColors;
use crate::ui::click_areas::ClickAreas;

/// 列表为空时的占位文字
pub const EMPTY_PLACEHOLDER: &str = "No tasks yet. Add one above!";

/// 计算滚动偏移，保证选中行可见
pub fn scroll_offset(selected: Option<usize>, len: usize, height: usize) -> usize {
    if height == 0 || len <= height {
        return 0;
    }
    match selected {
        Some(i) if i >= height => (i + 1 - height).min(len - height),
        _ => 0,
    }
}

/// 渲染任务列表或空状态
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[Task],
    selected: Option<usize>,
    focused: bool,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let border_color = if focused { colors.highlight } else { colors.border };
    let block = Block::default()
        .title(" Tasks ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);
    click_areas.list_area = Some(inner_area);

    if tasks.is_empty() {
        render_empty(frame, inner_area, colors);
        return;
    }

    let height = inner_area.height as usize;
    let offset = scroll_offset(selected, tasks.len(), height);

    for (row, (index, task)) in tasks
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .enumerate()
    {
        let row_area = Rect {
            x: inner_area.x,
            y: inner_area.y + row as u16,
            width: inner_area.width,
            height: 1,
        };
        let is_selected = focused && selected == Some(index);
        task_row::render(frame, row_area, task, is_selected, colors, click_areas);
    }
}

fn render_empty(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    // 垂直居中
    let y_offset = area.height.saturating_sub(1) / 2;
    let centered_area = Rect {
        x: area.x,
        y: area.y + y_offset,
        width: area.width,
        height: area.height.min(1),
    };

    let placeholder = Paragraph::new(Line::from(Span::styled(
        EMPTY_PLACEHOLDER,
        Style::default().fg(colors.muted),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(placeholder, centered_area);
}
