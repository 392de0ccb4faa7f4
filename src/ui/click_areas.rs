use ratatui::layout::Rect;

use crate::model::TaskId;

/// 可点击目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// 输入框（获取焦点）
    Input,
    /// Add 按钮
    AddButton,
    /// 行复选框
    Toggle(TaskId),
    /// 行删除按钮
    Delete(TaskId),
    /// 行文字（选中）
    Row(TaskId),
}

/// 每帧渲染时缓存的可点击区域
#[derive(Debug, Default, Clone)]
pub struct ClickAreas {
    /// (区域, 目标)，后注册的优先
    pub targets: Vec<(Rect, ClickTarget)>,
    /// 列表区域（滚轮检测）
    pub list_area: Option<Rect>,
    /// 浮层区域（Toast），其下方的目标不可点击
    pub blockers: Vec<Rect>,
}

impl ClickAreas {
    pub fn reset(&mut self) {
        self.targets.clear();
        self.list_area = None;
        self.blockers.clear();
    }

    /// 登记遮挡区域，必须在被遮挡的内容渲染之后调用
    pub fn block(&mut self, rect: Rect) {
        self.blockers.push(rect);
    }

    fn is_blocked(&self, col: u16, row: u16) -> bool {
        self.blockers.iter().any(|rect| contains(rect, col, row))
    }

    pub fn push(&mut self, rect: Rect, target: ClickTarget) {
        self.targets.push((rect, target));
    }

    /// 查找 (col, row) 处的目标
    pub fn hit(&self, col: u16, row: u16) -> Option<ClickTarget> {
        if self.is_blocked(col, row) {
            return None;
        }
        self.targets
            .iter()
            .rev()
            .find(|(rect, _)| contains(rect, col, row))
            .map(|(_, target)| *target)
    }

    pub fn in_list(&self, col: u16, row: u16) -> bool {
        !self.is_blocked(col, row)
            && self
                .list_area
                .is_some_and(|rect| contains(&rect, col, row))
    }
}

/// 检查坐标 (col, row) 是否在 Rect 内
pub fn contains(rect: &Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let rect = Rect::new(2, 3, 4, 1);
        assert!(contains(&rect, 2, 3));
        assert!(contains(&rect, 5, 3));
        assert!(!contains(&rect, 6, 3));
        assert!(!contains(&rect, 2, 4));
    }

    #[test]
    fn test_hit_prefers_later_targets() {
        let mut areas = ClickAreas::default();
        let id = TaskId::new(1);
        areas.push(Rect::new(0, 0, 20, 1), ClickTarget::Row(id));
        areas.push(Rect::new(2, 0, 3, 1), ClickTarget::Toggle(id));

        assert_eq!(areas.hit(3, 0), Some(ClickTarget::Toggle(id)));
        assert_eq!(areas.hit(10, 0), Some(ClickTarget::Row(id)));
        assert_eq!(areas.hit(10, 5), None);

        areas.reset();
        assert_eq!(areas.hit(3, 0), None);
    }

    #[test]
    fn test_blocker_hides_targets_beneath() {
        let mut areas = ClickAreas::default();
        let id = TaskId::new(1);
        areas.push(Rect::new(0, 0, 20, 2), ClickTarget::Delete(id));
        areas.list_area = Some(Rect::new(0, 0, 20, 2));
        areas.block(Rect::new(5, 1, 10, 1));

        assert_eq!(areas.hit(6, 1), None);
        assert!(!areas.in_list(6, 1));
        assert_eq!(areas.hit(6, 0), Some(ClickTarget::Delete(id)));
        assert_eq!(areas.hit(16, 1), Some(ClickTarget::Delete(id)));

        areas.reset();
        assert!(areas.blockers.is_empty());
    }
}
