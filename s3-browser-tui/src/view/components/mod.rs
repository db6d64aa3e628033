//! 可复用的 UI 组件

pub mod breadcrumb;
pub mod modal;
pub mod statusbar;
