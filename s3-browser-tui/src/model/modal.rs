//! 弹窗状态定义

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 帮助
    Help,
    /// 错误信息
    Error { title: String, message: String },
    /// 跳转输入框（`s3://` 地址或当前页面的条目名称）
    Goto { input: String },
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有弹窗打开
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    pub fn show_error(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    pub fn show_goto(&mut self) {
        self.active = Some(Modal::Goto {
            input: String::new(),
        });
    }

    /// 跳转输入框中的内容
    pub fn goto_input(&self) -> Option<&str> {
        match &self.active {
            Some(Modal::Goto { input }) => Some(input),
            _ => None,
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(Modal::Goto { input }) = &mut self.active {
            input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(Modal::Goto { input }) = &mut self.active {
            input.pop();
        }
    }
}
