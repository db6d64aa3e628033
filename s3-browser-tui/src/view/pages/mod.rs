//! 页面内容渲染
//!
//! 按 `PageKind` 分派，具体页面（bucket、key、policy……）不需要各自的视图。

mod menu;
mod object;
mod table;

use ratatui::{layout::Rect, style::Style, text::Line, widgets::Paragraph, Frame};
use s3_browser_core::PageKind;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

/// 渲染当前页面的内容
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let page = app.navigation.page();
    match page.kind() {
        PageKind::Menu => menu::render(app, frame, area),
        PageKind::Table => table::render(app, frame, area),
        PageKind::Object => object::render(app, frame, area),
    }
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", t().page.empty),
            Style::default().fg(colors().muted),
        ),
    ];
    frame.render_widget(Paragraph::new(content), area);
}
