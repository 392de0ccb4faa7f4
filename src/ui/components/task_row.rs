use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

use super::truncate;
use crate::model::Task;
use crate::theme::ThemeColors;
use crate::ui::click_areas::{ClickAreas, ClickTarget};

/// 删除按钮的无障碍标签
pub const DELETE_LABEL: &str = "Delete task";

/// 低于这个行宽时删除按钮只显示 ✕
pub const NARROW_ROW_WIDTH: u16 = 32;

/// 删除按钮文字，每行都带标签，窄终端下退化为 ✕
pub fn delete_control(row_width: u16) -> String {
    if row_width < NARROW_ROW_WIDTH {
        " ✕ ".to_string()
    } else {
        format!(" ✕ {} ", DELETE_LABEL)
    }
}

/// 渲染单行任务（无状态，只依赖传入的 task）
pub fn render(
    frame: &mut Frame,
    area: Rect,
    task: &Task,
    selected: bool,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let row_style = if selected {
        Style::default().bg(colors.bg_secondary)
    } else {
        Style::default()
    };
    frame.render_widget(Paragraph::new("").style(row_style), area);

    let delete_text = delete_control(area.width);
    let delete_width = Span::raw(delete_text.as_str()).width() as u16;

    let [selector_area, checkbox_area, text_area, delete_area] = Layout::horizontal([
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(delete_width),
    ])
    .areas(area);

    let selector = if selected { "❯" } else { " " };
    frame.render_widget(
        Paragraph::new(Span::styled(selector, Style::default().fg(colors.highlight)))
            .style(row_style),
        selector_area,
    );

    let checkbox_style = if task.completed {
        Style::default().fg(colors.done).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.muted)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(task.checkbox(), checkbox_style)).style(row_style),
        checkbox_area,
    );

    // 已完成：删除线 + 灰色
    let text_style = if task.completed {
        Style::default()
            .fg(colors.muted)
            .add_modifier(Modifier::CROSSED_OUT)
    } else if selected {
        Style::default().fg(colors.text).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.text)
    };
    let max_len = (text_area.width as usize).max(1);
    frame.render_widget(
        Paragraph::new(Span::styled(truncate(&task.text, max_len), text_style))
            .style(row_style),
        text_area,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(delete_text, Style::default().fg(colors.danger)))
            .style(row_style),
        delete_area,
    );

    click_areas.push(area, ClickTarget::Row(task.id));
    click_areas.push(checkbox_area, ClickTarget::Toggle(task.id));
    click_areas.push(delete_area, ClickTarget::Delete(task.id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskId;
    use crate::theme::{get_theme_colors, Theme};
    use ratatui::{backend::TestBackend, Terminal};

    fn render_row(task: &Task, selected: bool) -> (Terminal<TestBackend>, ClickAreas) {
        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        let colors = get_theme_colors(Theme::Dark);
        let mut click_areas = ClickAreas::default();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, task, selected, &colors, &mut click_areas)
            })
            .unwrap();
        (terminal, click_areas)
    }

    fn row_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_completed_row_is_crossed_out() {
        let task = Task::new(TaskId::new(1), "Water plants").toggled();
        let (terminal, _) = render_row(&task, false);

        let text = row_text(&terminal);
        assert!(text.contains("[x] Water plants"));

        let buffer = terminal.backend().buffer();
        let text_start = text.find('W').unwrap() as u16;
        assert!(buffer[(text_start, 0)]
            .modifier
            .contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_open_row_is_not_crossed_out() {
        let task = Task::new(TaskId::new(1), "Water plants");
        let (terminal, _) = render_row(&task, false);

        let text = row_text(&terminal);
        assert!(text.contains("[ ] Water plants"));
        let text_start = text.find('W').unwrap() as u16;
        assert!(!terminal.backend().buffer()[(text_start, 0)]
            .modifier
            .contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_every_row_shows_delete_label() {
        let task = Task::new(TaskId::new(3), "Call mom");
        let (terminal, _) = render_row(&task, true);
        assert!(row_text(&terminal).contains(DELETE_LABEL));

        let (terminal, _) = render_row(&task, false);
        assert!(row_text(&terminal).contains(DELETE_LABEL));
    }

    #[test]
    fn test_narrow_row_falls_back_to_glyph() {
        assert_eq!(delete_control(NARROW_ROW_WIDTH - 1), " ✕ ");
        assert!(delete_control(NARROW_ROW_WIDTH).contains(DELETE_LABEL));
    }

    #[test]
    fn test_row_registers_click_targets() {
        let task = Task::new(TaskId::new(9), "Call mom");
        let (_, areas) = render_row(&task, false);

        // 复选框在第 2..6 列，删除按钮占最右侧 15 列
        assert_eq!(areas.hit(3, 0), Some(ClickTarget::Toggle(task.id)));
        assert_eq!(areas.hit(25, 0), Some(ClickTarget::Delete(task.id)));
        assert_eq!(areas.hit(39, 0), Some(ClickTarget::Delete(task.id)));
        assert_eq!(areas.hit(12, 0), Some(ClickTarget::Row(task.id)));
    }
}
