//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!
//!     · poll_event      事件轮询，受 src/app.rs 调用，最长等待 timeout
//!
//!     · handle_event    事件分发
//!         Event::Key(KeyEvent)    键盘事件
//!         Event::Resize(..)       终端窗口大小变化，下一轮自动重绘
//!         其他                     忽略
//!
//!         键盘事件的判断顺序：
//!             - 有弹窗打开时，只交给弹窗处理
//!             - 全局快捷键（退出、帮助、返回、刷新……）
//!             - 页面内移动 / 打开
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 默认快捷键
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     ↑↓ / jk             移动选中项（对象页面为滚动）
//!     PgUp / PgDn         翻页
//!     Home / End          第一项 / 最后一项
//!     Enter / → / l       打开选中项
//!     Esc / ← / h / ⌫     返回
//!     a                   备用视图
//!     g                   跳转
//!     r                   刷新
//!     y                   显示等价命令
//!     ?                   帮助
//!     q / Ctrl+C          退出
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
