//! 对象页面视图
//!
//! 把页面的结构化值以格式化 JSON 显示，上下键滚动。

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};
use serde_json::Value;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

/// 渲染对象页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let lines: Vec<Line> = match app.navigation.page().value() {
        Ok(Some(Value::Null)) | Ok(None) => vec![
            Line::from(""),
            Line::styled(
                format!("  {}", t().page.no_value),
                Style::default().fg(c.muted),
            ),
        ],
        Ok(Some(value)) => match serde_json::to_string_pretty(&value) {
            Ok(text) => text.lines().map(|l| Line::raw(l.to_string())).collect(),
            Err(e) => vec![Line::styled(e.to_string(), Style::default().fg(c.error))],
        },
        Err(e) => vec![Line::styled(e.to_string(), Style::default().fg(c.error))],
    };

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(c.fg))
        .wrap(Wrap { trim: false })
        .scroll((app.navigation.scroll, 0));
    frame.render_widget(paragraph, area);
}
