use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::context::TaskContext;
use crate::model::{Task, TaskId};
use crate::storage::config::{load_config_from, save_config_to};
use crate::store::{SubscriptionId, TaskStore};
use crate::theme::Theme;
use crate::ui::components::entry_form::EntryFormData;
use crate::ui::components::truncate;
use crate::ui_state::{UiState, TOAST_DURATION};

/// Toast 中任务文字的最大长度
const TOAST_TEXT_MAX: usize = 32;

/// 当前键盘焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    List,
}

/// 启动选项（CLI 与配置合并后的结果）
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// 是否载入示例任务
    pub seed: bool,
    pub theme: Theme,
    /// 主题切换后写回的配置文件，None 表示不持久化
    pub config_path: Option<PathBuf>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            seed: true,
            theme: Theme::Dark,
            config_path: None,
        }
    }
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 唯一 store 的句柄
    pub ctx: TaskContext,
    /// 输入表单（私有状态）
    pub form: EntryFormData,
    pub focus: Focus,
    /// 列表选中索引
    pub selected: Option<usize>,
    pub ui: UiState,
    /// 由 store 订阅者置位，主循环据此重绘
    redraw: Rc<Cell<bool>>,
    subscription: SubscriptionId,
    config_path: Option<PathBuf>,
}

impl App {
    pub fn new(options: AppOptions) -> Self {
        let store = if options.seed {
            TaskStore::seeded()
        } else {
            TaskStore::new()
        };
        let ctx = TaskContext::new(store);

        let redraw = Rc::new(Cell::new(true));
        let flag = Rc::clone(&redraw);
        let subscription = ctx.subscribe(move |snapshot| {
            debug!(len = snapshot.len(), "snapshot published");
            flag.set(true);
        });

        let selected = if ctx.is_empty() { None } else { Some(0) };
        info!(tasks = ctx.len(), theme = options.theme.label(), "app started");

        Self {
            should_quit: false,
            ctx,
            form: EntryFormData::new(),
            focus: Focus::Input,
            selected,
            ui: UiState::new(options.theme),
            redraw,
            subscription,
            config_path: options.config_path,
        }
    }

    // ========== Redraw ==========

    pub fn request_redraw(&self) {
        self.redraw.set(true);
    }

    /// 取出并清除重绘标记
    pub fn take_redraw(&self) -> bool {
        self.redraw.replace(false)
    }

    /// 每轮主循环调用：清理过期 Toast
    pub fn tick(&mut self) {
        if self.ui.clear_expired_toast() {
            self.request_redraw();
        }
    }

    // ========== Focus ==========

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    pub fn focus_list(&mut self) {
        self.focus = Focus::List;
        self.ensure_selection();
    }

    pub fn toggle_focus(&mut self) {
        match self.focus {
            Focus::Input => self.focus_list(),
            Focus::List => self.focus_input(),
        }
    }

    // ========== Entry Form ==========

    pub fn input_char(&mut self, c: char) {
        self.form.input_char(c);
    }

    pub fn delete_char(&mut self) {
        self.form.delete_char();
    }

    pub fn clear_input(&mut self) {
        self.form.clear();
    }

    /// 提交输入框内容
    pub fn submit_entry(&mut self) {
        let Some(id) = self.form.submit(&self.ctx) else {
            debug!("entry rejected by validation");
            return;
        };
        self.selected = self.ctx.position(id);
        if let Some(task) = self.ctx.get(id) {
            self.show_toast(format!("Added: {}", truncate(&task.text, TOAST_TEXT_MAX)));
        }
    }

    // ========== List ==========

    /// 当前选中的任务
    pub fn selected_task(&self) -> Option<Task> {
        let index = self.selected?;
        self.ctx.tasks().get(index).cloned()
    }

    /// 确保有选中项（列表非空时）
    pub fn ensure_selection(&mut self) {
        let len = self.ctx.len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.ctx.len();
        if len == 0 {
            return;
        }
        let current = self.selected.unwrap_or(0);
        self.selected = Some((current + 1) % len);
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.ctx.len();
        if len == 0 {
            return;
        }
        let current = self.selected.unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.selected = Some(prev);
    }

    pub fn select_task(&mut self, id: TaskId) {
        if let Some(index) = self.ctx.position(id) {
            self.selected = Some(index);
        }
    }

    pub fn toggle_task(&mut self, id: TaskId) {
        self.ctx.toggle(id);
        self.select_task(id);
    }

    pub fn delete_task(&mut self, id: TaskId) {
        let removed = self.ctx.get(id);
        self.ctx.delete(id);
        self.ensure_selection();
        if let Some(task) = removed {
            self.show_toast(format!("Deleted: {}", truncate(&task.text, TOAST_TEXT_MAX)));
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(task) = self.selected_task() {
            self.toggle_task(task.id);
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(task) = self.selected_task() {
            self.delete_task(task.id);
        }
    }

    // ========== Theme ==========

    /// 切换到下一个主题，并写回配置
    pub fn cycle_theme(&mut self) {
        let theme = self.ui.theme.next();
        self.ui.set_theme(theme);
        self.show_toast(format!("Theme: {}", theme.label()));

        if let Some(path) = &self.config_path {
            let mut config = load_config_from(path);
            config.theme.name = theme.label().to_string();
            if let Err(e) = save_config_to(path, &config) {
                warn!(path = %path.display(), error = %e, "failed to save theme");
            }
        }
    }

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.ui.show_toast(message, TOAST_DURATION);
        self.request_redraw();
    }

    /// 退出应用
    pub fn quit(&mut self) {
        info!("quit requested");
        self.should_quit = true;
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.ctx.unsubscribe(self.subscription);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppOptions::default())
    }
}
