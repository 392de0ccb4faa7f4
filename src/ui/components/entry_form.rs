//! 任务输入表单
//!
//! 输入文字和校验错误都是表单私有状态，校验失败不会触达 store。

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::context::TaskContext;
use crate::model::TaskId;
use crate::theme::ThemeColors;
use crate::ui::click_areas::{ClickAreas, ClickTarget};

/// trim 后的最少字符数
pub const MIN_TASK_LEN: usize = 5;

/// 校验失败时显示的固定文案
pub const VALIDATION_MESSAGE: &str = "Task must be at least 5 characters long.";

const PLACEHOLDER: &str = "What needs to be done?";
const ADD_BUTTON: &str = " Add ";
const PROMPT: &str = " › ";

/// 表单高度：边框 2 + 输入行 1 + 错误行 1
pub const ENTRY_FORM_HEIGHT: u16 = 4;

/// 输入表单数据
#[derive(Debug, Clone, Default)]
pub struct EntryFormData {
    pub input: String,
    /// 为空表示没有错误
    pub error: String,
}

fn trimmed_len(s: &str) -> usize {
    s.trim().chars().count()
}

impl EntryFormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// 输入字符
    pub fn input_char(&mut self, c: char) {
        self.input.push(c);
        self.clear_error_if_valid();
    }

    /// 删除最后一个字符
    pub fn delete_char(&mut self) {
        self.input.pop();
        self.clear_error_if_valid();
    }

    /// 清空输入和错误
    pub fn clear(&mut self) {
        self.input.clear();
        self.error.clear();
    }

    /// 已显示错误且长度达标时，提交前就清掉错误
    fn clear_error_if_valid(&mut self) {
        if self.has_error() && trimmed_len(&self.input) >= MIN_TASK_LEN {
            self.error.clear();
        }
    }

    /// 提交：校验通过则调用 add 并清空输入，返回新任务 id
    pub fn submit(&mut self, ctx: &TaskContext) -> Option<TaskId> {
        let text = self.input.trim();
        if text.chars().count() < MIN_TASK_LEN {
            self.error = VALIDATION_MESSAGE.to_string();
            return None;
        }

        let id = ctx.add(text);
        self.input.clear();
        Some(id)
    }
}

/// 取能放进 max_width 列的最长后缀
pub fn visible_tail(s: &str, max_width: usize) -> &str {
    s.char_indices()
        .map(|(i, _)| &s[i..])
        .find(|tail| Span::raw(*tail).width() <= max_width)
        .unwrap_or("")
}

/// 渲染输入表单
pub fn render(
    frame: &mut Frame,
    area: Rect,
    data: &EntryFormData,
    focused: bool,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let border_color = if focused { colors.highlight } else { colors.border };
    let block = Block::default()
        .title(" New Task ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);
    click_areas.push(area, ClickTarget::Input);

    let [input_row, error_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner_area);

    let button_width = ADD_BUTTON.len() as u16;
    let [input_area, _, button_area] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(button_width),
    ])
    .areas(input_row);

    // 输入行: "› {input}█"，空输入时显示占位符
    let mut spans = vec![Span::styled(PROMPT, Style::default().fg(colors.muted))];
    if !data.input.is_empty() {
        // 超出宽度时只显示末尾，保证光标可见
        let cursor_width = usize::from(focused);
        let max_width = (input_area.width as usize)
            .saturating_sub(Span::raw(PROMPT).width() + cursor_width);
        spans.push(Span::styled(
            visible_tail(&data.input, max_width),
            Style::default().fg(colors.text),
        ));
    }
    if focused {
        spans.push(Span::styled("█", Style::default().fg(colors.highlight)));
    }
    if data.input.is_empty() {
        spans.push(Span::styled(PLACEHOLDER, Style::default().fg(colors.muted)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), input_area);

    let button = Paragraph::new(Span::styled(
        ADD_BUTTON,
        Style::default()
            .fg(colors.bg)
            .bg(colors.highlight)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(button, button_area);
    click_areas.push(button_area, ClickTarget::AddButton);

    if data.has_error() {
        let error_line = Line::from(Span::styled(
            format!("   {}", data.error),
            Style::default().fg(colors.error),
        ));
        frame.render_widget(Paragraph::new(error_line), error_row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TaskStore;

    fn type_text(form: &mut EntryFormData, text: &str) {
        for c in text.chars() {
            form.input_char(c);
        }
    }

    #[test]
    fn test_short_input_sets_error_and_skips_add() {
        let ctx = TaskContext::new(TaskStore::seeded());
        let mut form = EntryFormData::new();
        type_text(&mut form, "ok");

        assert_eq!(form.submit(&ctx), None);
        assert_eq!(form.error, VALIDATION_MESSAGE);
        assert_eq!(form.input, "ok");
        assert_eq!(ctx.tasks().len(), 4);
    }

    #[test]
    fn test_whitespace_does_not_count() {
        let ctx = TaskContext::new(TaskStore::new());
        let mut form = EntryFormData::new();
        type_text(&mut form, "   abcd    ");

        assert_eq!(form.submit(&ctx), None);
        assert!(ctx.tasks().is_empty());
    }

    #[test]
    fn test_valid_input_adds_trimmed_text_and_clears() {
        let ctx = TaskContext::new(TaskStore::seeded());
        let mut form = EntryFormData::new();
        type_text(&mut form, "  Buy milk  ");

        let id = form.submit(&ctx).expect("should add");
        let tasks = ctx.tasks();
        let last = tasks.last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.text, "Buy milk");
        assert!(!last.completed);
        assert_eq!(tasks.len(), 5);
        assert!(form.input.is_empty());
        assert!(!form.has_error());
    }

    #[test]
    fn test_error_clears_eagerly_when_long_enough() {
        let ctx = TaskContext::new(TaskStore::new());
        let mut form = EntryFormData::new();
        type_text(&mut form, "abc");
        form.submit(&ctx);
        assert!(form.has_error());

        form.input_char('d');
        assert!(form.has_error());
        form.input_char('e');
        assert!(!form.has_error());
        // 清错误不会提交
        assert!(ctx.tasks().is_empty());
    }

    #[test]
    fn test_error_stays_while_short() {
        let ctx = TaskContext::new(TaskStore::new());
        let mut form = EntryFormData::new();
        type_text(&mut form, "abcdef");
        form.input.clear();
        type_text(&mut form, "ab");
        form.submit(&ctx);

        form.delete_char();
        assert_eq!(form.error, VALIDATION_MESSAGE);
    }

    #[test]
    fn test_visible_tail() {
        assert_eq!(visible_tail("short", 10), "short");
        assert_eq!(visible_tail("abcdefgh", 3), "fgh");
        assert_eq!(visible_tail("abc", 0), "");
    }

    #[test]
    fn test_long_input_keeps_end_and_cursor_visible() {
        use crate::theme::{get_theme_colors, Theme};
        use ratatui::{backend::TestBackend, Terminal};

        let mut form = EntryFormData::new();
        type_text(&mut form, "a very long task description that ends with XYZ");

        let mut terminal = Terminal::new(TestBackend::new(30, 4)).unwrap();
        let colors = get_theme_colors(Theme::Dark);
        let mut click_areas = ClickAreas::default();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, &form, true, &colors, &mut click_areas)
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let input_line: String = (0..buffer.area.width)
            .map(|x| buffer[(x, 1)].symbol())
            .collect();
        assert!(input_line.contains("XYZ█"), "got {input_line:?}");
        assert!(!input_line.contains("a very"));
    }

    #[test]
    fn test_minimum_length_counts_chars() {
        let ctx = TaskContext::new(TaskStore::new());
        let mut form = EntryFormData::new();
        // 5 个字符，多字节
        type_text(&mut form, "ééééé");

        assert!(form.submit(&ctx).is_some());
        assert_eq!(ctx.tasks()[0].text, "ééééé");
    }
}
