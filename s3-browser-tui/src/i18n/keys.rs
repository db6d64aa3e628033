//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **页面内容归 `page.*` / `table.*`**
//! 4. **键盘提示归 `hints.*`**：状态栏里的按键动作

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 状态栏按键提示
    pub hints: HintTexts,
    /// 页面内容
    pub page: PageTexts,
    /// 表格列名
    pub table: TableTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 状态栏消息
    pub status: StatusTexts,
    /// 帮助弹窗
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub error: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 状态栏中的动作词
pub struct HintTexts {
    pub move_up_down: &'static str,
    pub open: &'static str,
    pub back: &'static str,
    pub alternate: &'static str,
    pub goto: &'static str,
    pub refresh: &'static str,
    pub see_also: &'static str,
    pub scroll: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 页面
// ============================================================================

pub struct PageTexts {
    /// 菜单/表格没有任何条目
    pub empty: &'static str,
    /// 对象页没有数据（对象或策略不存在）
    pub no_value: &'static str,
    /// 列表被服务端截断
    pub truncated: &'static str,
}

pub struct TableTexts {
    pub name: &'static str,
    pub modified: &'static str,
    pub size: &'static str,
    pub class: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

pub struct ModalTexts {
    pub error_title: &'static str,
    pub press_to_close: &'static str,
    pub goto_title: &'static str,
    pub goto_hint: &'static str,
}

// ============================================================================
// 状态栏消息
// ============================================================================

pub struct StatusTexts {
    pub refreshed: &'static str,
    pub no_alternate: &'static str,
    pub no_see_also: &'static str,
    pub at_root: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

pub struct HelpTexts {
    pub title: &'static str,
    pub navigation: &'static str,
    pub actions: &'static str,
    pub move_selection: &'static str,
    pub open_entry: &'static str,
    pub go_back: &'static str,
    pub alternate_view: &'static str,
    pub goto_address: &'static str,
    pub refresh_page: &'static str,
    pub show_see_also: &'static str,
    pub toggle_help: &'static str,
    pub quit: &'static str,
}
