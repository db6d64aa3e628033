//! 导航更新逻辑

use s3_browser_core::PageKind;

use crate::message::NavigationMessage;
use crate::model::App;

/// 翻页步长
const PAGE_STEP: i16 = 10;

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    // 对象页面没有可选的行，上下键用来滚动内容
    if app.navigation.page().kind() == PageKind::Object {
        scroll(app, msg);
        return;
    }

    match msg {
        NavigationMessage::SelectPrevious => app.navigation.select_previous(),
        NavigationMessage::SelectNext => app.navigation.select_next(),
        NavigationMessage::SelectFirst => app.navigation.select_first(),
        NavigationMessage::SelectLast => app.navigation.select_last(),
        NavigationMessage::PageUp => app.navigation.select_by(-isize::from(PAGE_STEP)),
        NavigationMessage::PageDown => app.navigation.select_by(isize::from(PAGE_STEP)),
        NavigationMessage::Confirm => confirm(app),
    }
}

fn scroll(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => app.navigation.scroll_by(-1),
        NavigationMessage::SelectNext => app.navigation.scroll_by(1),
        NavigationMessage::PageUp => app.navigation.scroll_by(-PAGE_STEP),
        NavigationMessage::PageDown => app.navigation.scroll_by(PAGE_STEP),
        NavigationMessage::SelectFirst => app.navigation.scroll = 0,
        NavigationMessage::SelectLast | NavigationMessage::Confirm => {}
    }
}

/// 打开选中的行
fn confirm(app: &mut App) {
    let Some(row) = app.navigation.selected_row() else {
        return;
    };

    match app.browser.descend(&mut app.navigation.navigator, &row) {
        Ok(()) => super::entered(app),
        Err(e) => super::report_error(app, &e),
    }
}
