//! 弹窗更新逻辑

use crate::message::ModalMessage;
use crate::model::App;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => app.modal.close(),
        ModalMessage::Input(c) => app.modal.push_char(c),
        ModalMessage::Backspace => app.modal.pop_char(),
        ModalMessage::Confirm => confirm(app),
    }
}

/// 提交跳转输入框；其他弹窗直接关闭
fn confirm(app: &mut App) {
    let input = app.modal.goto_input().map(str::to_string);
    app.modal.close();

    let Some(input) = input.filter(|input| !input.trim().is_empty()) else {
        return;
    };

    log::debug!("Go to '{input}'");
    match app.browser.goto(&mut app.navigation.navigator, &input) {
        Ok(()) => super::entered(app),
        Err(e) => super::report_error(app, &e),
    }
}
