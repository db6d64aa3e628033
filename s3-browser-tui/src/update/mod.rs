//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 页面内移动、打开选中项
//!         mod modal;              // 弹窗（跳转输入框）
//!
//!
//!     需要访问 S3 的消息（打开、返回之外的跳转、刷新）通过 app.browser 同步执行：
//!         成功 → 切换页面，清除状态消息
//!         失败 → 页面保持不变，错误交给 report_error()
//!

mod modal;
mod navigation;

use s3_browser_core::CoreError;

use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::App;
use crate::print::command_line;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::GoBack => {
            if app.navigation.back() {
                app.clear_status();
            } else {
                app.set_status(t().status.at_root);
            }
        }

        AppMessage::Refresh => match app.browser.refresh(&mut app.navigation.navigator) {
            Ok(()) => {
                app.navigation.clamp_selection();
                app.set_status(t().status.refreshed);
            }
            Err(e) => report_error(app, &e),
        },

        AppMessage::OpenAlternate => {
            if app.navigation.navigator.open_alternate() {
                app.navigation.entered();
                app.clear_status();
            } else {
                app.set_status(t().status.no_alternate);
            }
        }

        AppMessage::ShowGoto => {
            app.modal.show_goto();
        }

        AppMessage::ShowSeeAlso => match app.navigation.page().see_also() {
            Some(words) => app.set_status(format!("$ {}", command_line(&words))),
            None => app.set_status(t().status.no_see_also),
        },

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Noop => {}
    }
}

/// 导航步骤成功后的公共处理
fn entered(app: &mut App) {
    app.navigation.entered();
    app.clear_status();
}

/// 导航步骤失败：页面保持不变
///
/// 服务端错误弹窗显示；找不到条目、地址格式不对只写状态栏。
fn report_error(app: &mut App, err: &CoreError) {
    match err {
        CoreError::ChildNotFound { .. } | CoreError::InvalidAddress(_) => {
            log::debug!("{err}");
            app.set_status(err.to_string());
        }
        _ => {
            log::log!(failure_level(err), "Navigation step failed: {err}");
            app.modal.show_error(t().modal.error_title, &err.to_string());
        }
    }
}

/// 权限不足、对象不存在等是正常结果，只记 warn
fn failure_level(err: &CoreError) -> log::Level {
    if err.is_expected() {
        log::Level::Warn
    } else {
        log::Level::Error
    }
}
