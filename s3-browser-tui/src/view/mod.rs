//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，把当前状态画到终端上，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局：面包屑 + 内容区 + 状态栏 + 弹窗
//!         mod components;         // 面包屑、状态栏、弹窗
//!         mod pages;              // 按页面类型（菜单 / 表格 / 对象）渲染内容
//!         pub mod theme;          // 颜色方案
//!
//!
//!     页面类型决定渲染方式：
//!         PageKind::Menu      →  pages::menu     列表
//!         PageKind::Table     →  pages::table    Name / Modified / Size / Class 四列
//!         PageKind::Object    →  pages::object   JSON 文本，可滚动
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
