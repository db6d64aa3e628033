//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码，
//! 主要负责终端的初始化和恢复。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化和恢复
//!
//!         pub use terminal::{init_terminal, restore_terminal, Term};
//!
//!
//!     初始化终端 init_terminal()：
//!         1. 安装 panic hook：panic 时先退出原始模式和备用屏幕，再打印 panic 信息
//!         2. enable_raw_mode()：关闭行缓冲和回显，每个按键立即生效
//!         3. EnterAlternateScreen：在备用屏幕运行，退出后恢复原有内容
//!
//!
//!     恢复终端 restore_terminal()：
//!         无论主循环正常结束还是返回错误，main.rs 都会调用它。
//!         否则终端会保持在原始模式，用户输入不会正常显示。
//!
//!
//!     --print 模式不会初始化终端，页面直接写到 stdout。
//!

mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};
