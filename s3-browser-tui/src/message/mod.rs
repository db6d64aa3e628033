//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 所有的用户操作都通过 Message 来表达，Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod modal;          // 弹窗子消息
//!         mod navigation;     // 页面内移动 / 打开子消息
//!
//!
//!     在 src/event/handler.rs 中：
//!         pub fn handle_event(event: Event, app: &App) -> AppMessage { ... }
//!
//!     在 src/update/mod.rs 中：
//!         pub fn update(app: &mut App, msg: AppMessage) { match msg { ... } }
//!

mod app;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
