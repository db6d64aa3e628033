//! 应用主消息枚举

use super::{ModalMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 页面内移动 / 打开选中项
    Navigation(NavigationMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 返回上一页
    GoBack,

    /// 重新获取当前页面
    Refresh,

    /// 切换到备用视图
    OpenAlternate,

    /// 打开跳转输入框
    ShowGoto,

    /// 在状态栏显示等价命令
    ShowSeeAlso,

    /// 显示帮助
    ShowHelp,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
