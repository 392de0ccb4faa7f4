//! 根视图：Header + 输入表单 + 列表 + Footer

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::{App, Focus};

use super::components::{entry_form, footer, header, task_list, toast};

/// 从当前快照渲染整个页面
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let colors = app.ui.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, form_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Length(entry_form::ENTRY_FORM_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    let tasks = app.ctx.tasks();
    let click_areas = &mut app.ui.click_areas;
    click_areas.reset();

    header::render(
        frame,
        header_area,
        tasks.len(),
        app.ctx.completed_count(),
        &colors,
    );

    entry_form::render(
        frame,
        form_area,
        &app.form,
        app.focus == Focus::Input,
        &colors,
        click_areas,
    );

    task_list::render(
        frame,
        list_area,
        &tasks,
        app.selected,
        app.focus == Focus::List,
        &colors,
        click_areas,
    );

    footer::render(frame, footer_area, app.focus, !tasks.is_empty(), &colors);

    // Toast 盖在列表上，遮住的行不再响应点击
    if let Some(ref t) = app.ui.toast {
        if let Some(toast_area) = toast::render(frame, &t.message, &colors) {
            app.ui.click_areas.block(toast_area);
        }
    }
}
