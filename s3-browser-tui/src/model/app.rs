//! 应用主状态结构

use s3_browser_core::Navigator;

use super::{ModalState, NavigationState};
use crate::backend::BrowserService;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 导航状态
    pub navigation: NavigationState,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 弹窗状态
    pub modal: ModalState,

    /// 浏览服务
    pub browser: BrowserService,
}

impl App {
    /// 创建新的应用实例
    pub fn new(browser: BrowserService, navigator: Navigator) -> Self {
        Self {
            should_quit: false,
            navigation: NavigationState::new(navigator),
            status_message: None,
            modal: ModalState::new(),
            browser,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
