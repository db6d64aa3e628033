//! 导航状态定义

use s3_browser_core::{Navigator, Page, Row};

/// 导航状态
pub struct NavigationState {
    /// 当前页面与历史
    pub navigator: Navigator,
    /// 当前页面的选中行
    pub selected: usize,
    /// 对象页面的滚动行数
    pub scroll: u16,
    /// 历史中每一页离开时的选中行
    saved: Vec<usize>,
}

impl NavigationState {
    pub fn new(navigator: Navigator) -> Self {
        let depth = navigator.history().len();
        Self {
            navigator,
            selected: 0,
            scroll: 0,
            saved: vec![0; depth],
        }
    }

    /// 当前页面
    pub fn page(&self) -> &Page {
        self.navigator.current()
    }

    pub fn row_count(&self) -> usize {
        self.page().rows().len()
    }

    /// 当前选中的行
    pub fn selected_row(&self) -> Option<Row> {
        self.page().rows().get(self.selected).cloned()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.row_count().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.row_count().saturating_sub(1);
    }

    /// 按页移动选中项
    pub fn select_by(&mut self, delta: isize) {
        let last = self.row_count().saturating_sub(1);
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    pub fn scroll_by(&mut self, delta: i16) {
        self.scroll = self.scroll.saturating_add_signed(delta);
    }

    /// 进入新页面之后调用：记住离开时的位置，新页面从头开始
    pub fn entered(&mut self) {
        self.saved.push(self.selected);
        self.selected = 0;
        self.scroll = 0;
    }

    /// 返回上一页并恢复选中位置；已在起点时返回 `false`
    pub fn back(&mut self) -> bool {
        if !self.navigator.back() {
            return false;
        }
        self.selected = self.saved.pop().unwrap_or(0);
        self.scroll = 0;
        self.clamp_selection();
        true
    }

    /// 页面刷新后行数可能变化
    pub fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.row_count().saturating_sub(1));
    }
}
