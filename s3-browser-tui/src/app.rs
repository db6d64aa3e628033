//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，main.rs 已经打开了起始地址，App 的初始状态为：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     navigation: NavigationState {
//!         navigator,                                  // 当前页面 + 历史栈（起始地址的每一级）
//!         selected = 0,                               // 当前页面选中第几行
//!         scroll = 0,                                 // 对象页面的滚动行数
//!     },
//!     status_message = None,                          // 状态栏消息
//!     modal = None,                                   // 弹窗
//!     browser,                                        // tokio runtime + BrowseContext
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新状态；需要访问 S3 时在这里阻塞直到页面构造完成
//!     }
//! }

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 4. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 5. 更新状态
            update::update(app, msg);
        }
    }

    Ok(())
}
