use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::app::{App, Focus};
use crate::ui::click_areas::ClickTarget;

/// 事件轮询超时
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.tick();

    if event::poll(POLL_TIMEOUT)? {
        match event::read()? {
            // 只处理按下事件
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
            Event::Mouse(mouse) => handle_mouse(app, mouse),
            Event::Resize(_, _) => app.request_redraw(),
            _ => {}
        }
    }

    Ok(!app.should_quit)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    app.request_redraw();

    // Ctrl-C 任何时候都退出
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match app.focus {
        Focus::Input => handle_input_key(app, key),
        Focus::List => handle_list_key(app, key),
    }
}

/// 处理输入框焦点下的键盘事件
fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 提交
        KeyCode::Enter => app.submit_entry(),

        // 清空输入
        KeyCode::Esc => app.clear_input(),

        // 切换到列表
        KeyCode::Tab => app.toggle_focus(),
        KeyCode::Down => app.focus_list(),

        // 删除字符
        KeyCode::Backspace => app.delete_char(),

        // 输入字符（忽略 Ctrl/Alt 组合键）
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.input_char(c)
        }

        _ => {}
    }
}

/// 处理列表焦点下的键盘事件
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),

        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // 完成/取消完成
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),

        // 删除
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => app.delete_selected(),

        // 回到输入框
        KeyCode::Tab => app.toggle_focus(),
        KeyCode::Char('i') | KeyCode::Char('a') => app.focus_input(),

        // 切换主题
        KeyCode::Char('t') | KeyCode::Char('T') => app.cycle_theme(),

        _ => {}
    }
}

/// 处理鼠标事件（点击区域来自上一帧渲染）
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(target) = app.ui.click_areas.hit(mouse.column, mouse.row) else {
                return;
            };
            app.request_redraw();
            match target {
                ClickTarget::Input => app.focus_input(),
                ClickTarget::AddButton => {
                    app.focus_input();
                    app.submit_entry();
                }
                ClickTarget::Toggle(id) => {
                    app.focus_list();
                    app.toggle_task(id);
                }
                ClickTarget::Delete(id) => {
                    app.focus_list();
                    app.delete_task(id);
                }
                ClickTarget::Row(id) => {
                    app.focus_list();
                    app.select_task(id);
                }
            }
        }
        MouseEventKind::ScrollDown if app.ui.click_areas.in_list(mouse.column, mouse.row) => {
            app.focus_list();
            app.select_next();
            app.request_redraw();
        }
        MouseEventKind::ScrollUp if app.ui.click_areas.in_list(mouse.column, mouse.row) => {
            app.focus_list();
            app.select_previous();
            app.request_redraw();
        }
        _ => {}
    }
}
