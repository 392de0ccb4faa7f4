//! UI 状态管理
//!
//! 管理主题、颜色、Toast 和点击区域，与任务数据无关。

use std::time::{Duration, Instant};

use crate::theme::{get_theme_colors, Theme, ThemeColors};
use crate::ui::click_areas::ClickAreas;

/// Toast 默认显示时长
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// UI 状态
#[derive(Debug)]
pub struct UiState {
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 可点击区域缓存（每帧渲染时填充）
    pub click_areas: ClickAreas,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            toast: None,
            theme,
            colors: get_theme_colors(theme),
            click_areas: ClickAreas::default(),
        }
    }

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>, duration: Duration) {
        self.toast = Some(Toast::new(message, duration));
    }

    /// 清除过期的 Toast，返回是否清除了
    pub fn clear_expired_toast(&mut self) -> bool {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
            return true;
        }
        false
    }

    /// 更新主题
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.colors = get_theme_colors(theme);
    }
}
