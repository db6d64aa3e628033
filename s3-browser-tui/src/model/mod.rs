//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 "唯一真相来源"。
//! 所有状态变更都通过 Update 层来触发，View 层只读取。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod modal;          // 弹窗状态
//!         mod navigation;     // 导航状态（当前页面、历史、选中位置）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub navigation: NavigationState,    // 导航状态
//!             pub status_message: Option<String>, // 状态栏消息
//!             pub modal: ModalState,              // 弹窗状态
//!             pub browser: BrowserService,        // 浏览服务（backend）
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、导航状态（NavigationState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     页面本身（s3_browser_core::Page）由 core 的 Navigator 持有，
//!     这里只额外记录 UI 相关的位置信息：
//!
//!         NavigationState {
//!             navigator: Navigator,   // 当前页面 + 历史栈
//!             selected: usize,        // 当前页面的选中行
//!             scroll: u16,            // 对象页面的滚动位置
//!             saved: Vec<usize>,      // 历史中每一页离开时的选中行
//!         }
//!
//!     saved 与 navigator 的历史栈一一对应，返回时恢复原来的选中行。
//!
//!     数据流：
//!         用户按 Enter
//!             ↓
//!         update/navigation.rs 取出 selected_row()，调用 BrowserService::descend
//!             ↓
//!         成功：navigation.entered()，新页面从第一行开始
//!         失败：页面不变，弹出错误
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Modal 枚举：
//!             - Help                      帮助
//!             - Error { title, message }  错误信息
//!             - Goto { input }            跳转输入框
//!
//!         ModalState 容器：
//!             - active: Option<Modal>    // None = 无弹窗, Some = 有弹窗
//!

mod app;
mod modal;
mod navigation;

pub use app::App;
pub use modal::{Modal, ModalState};
pub use navigation::NavigationState;
