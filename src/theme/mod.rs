mod colors;
mod detect;

use ratatui::style::Color;

pub use colors::*;
pub use detect::detect_system_theme;

/// 主题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Auto,
    Dark,
    Light,
    Dracula,
    Nord,
    Gruvbox,
}

impl Theme {
    /// 主题显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Auto => "Auto",
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Dracula => "Dracula",
            Theme::Nord => "Nord",
            Theme::Gruvbox => "Gruvbox",
        }
    }

    /// 所有主题列表
    pub fn all() -> &'static [Theme] {
        &[
            Theme::Auto,
            Theme::Dark,
            Theme::Light,
            Theme::Dracula,
            Theme::Nord,
            Theme::Gruvbox,
        ]
    }

    /// 从名称创建主题（大小写不敏感，未知名称回退 Auto）
    pub fn from_name(name: &str) -> Self {
        Theme::all()
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_default()
    }

    /// 循环到下一个主题
    pub fn next(&self) -> Self {
        let themes = Theme::all();
        let index = themes.iter().position(|t| t == self).unwrap_or(0);
        themes[(index + 1) % themes.len()]
    }
}

/// 主题颜色方案
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// 主背景色
    pub bg: Color,
    /// 次级背景色（选中行）
    pub bg_secondary: Color,
    /// 标题颜色
    pub logo: Color,
    /// 高亮色（焦点边框、快捷键、光标）
    pub highlight: Color,
    /// 普通文字
    pub text: Color,
    /// 次要文字
    pub muted: Color,
    /// 边框颜色
    pub border: Color,
    /// 已完成任务的复选框
    pub done: Color,
    /// 删除按钮
    pub danger: Color,
    /// 校验错误提示
    pub error: Color,
}

/// 获取指定主题的颜色方案
pub fn get_theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Auto => {
            if detect_system_theme() {
                dark_colors()
            } else {
                light_colors()
            }
        }
        Theme::Dark => dark_colors(),
        Theme::Light => light_colors(),
        Theme::Dracula => dracula_colors(),
        Theme::Nord => nord_colors(),
        Theme::Gruvbox => gruvbox_colors(),
    }
}
