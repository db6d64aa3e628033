//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::event::keymap::{matches_any, DefaultKeymap};
use crate::message::{AppMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app.modal.active.as_ref()),
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, modal: Option<&Modal>) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat（Windows 终端会上报两者）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if let Some(modal) = modal {
        return handle_modal_keys(key, modal);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::ALTERNATE.matches(&key) {
        return AppMessage::OpenAlternate;
    }
    if DefaultKeymap::GOTO.matches(&key) {
        return AppMessage::ShowGoto;
    }
    if DefaultKeymap::SEE_ALSO.matches(&key) {
        return AppMessage::ShowSeeAlso;
    }
    if matches_any(&DefaultKeymap::BACK, &key) {
        return AppMessage::GoBack;
    }

    handle_page_keys(&key)
}

/// 页面内移动 / 打开
fn handle_page_keys(key: &KeyEvent) -> AppMessage {
    let msg = if matches_any(&DefaultKeymap::NAV_UP, key) {
        NavigationMessage::SelectPrevious
    } else if matches_any(&DefaultKeymap::NAV_DOWN, key) {
        NavigationMessage::SelectNext
    } else if matches_any(&DefaultKeymap::NAV_CONFIRM, key) {
        NavigationMessage::Confirm
    } else if DefaultKeymap::NAV_FIRST.matches(key) {
        NavigationMessage::SelectFirst
    } else if DefaultKeymap::NAV_LAST.matches(key) {
        NavigationMessage::SelectLast
    } else if DefaultKeymap::NAV_PAGE_UP.matches(key) {
        NavigationMessage::PageUp
    } else if DefaultKeymap::NAV_PAGE_DOWN.matches(key) {
        NavigationMessage::PageDown
    } else {
        return AppMessage::Noop;
    };
    AppMessage::Navigation(msg)
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    if DefaultKeymap::FORCE_QUIT.matches(&key) || key.code == KeyCode::Esc {
        return AppMessage::Modal(ModalMessage::Close);
    }

    match modal {
        Modal::Goto { .. } => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
            KeyCode::Char(c) => AppMessage::Modal(ModalMessage::Input(c)),
            _ => AppMessage::Noop,
        },
        Modal::Help | Modal::Error { .. } => match key.code {
            KeyCode::Enter | KeyCode::Char('q' | '?') => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}
