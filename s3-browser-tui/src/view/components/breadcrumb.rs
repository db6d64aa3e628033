//! 顶部面包屑组件
//!
//! 显示当前页面的规范地址，而不是到达它的路径：从首页逐级进入和用 `s3://` 跳转，
//! 看到的是同一行。

use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

const SEPARATOR: &str = " › ";
const ELLIPSIS: char = '…';

/// 渲染面包屑
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let address = app.navigation.navigator.breadcrumb();
    let text = format!(" {}", crumbs(t().common.app_name, address.segments()));
    let text = fit_left(&text, usize::from(area.width));

    let paragraph =
        Paragraph::new(text).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(paragraph, area);
}

fn crumbs(root: &str, segments: &[String]) -> String {
    std::iter::once(root)
        .chain(segments.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// 超出宽度时保留右侧（最深的几级），左边用省略号代替
fn fit_left(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut used = ELLIPSIS.width().unwrap_or(1);
    let mut kept = Vec::new();
    for ch in text.chars().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        kept.push(ch);
    }

    std::iter::once(ELLIPSIS).chain(kept.into_iter().rev()).collect()
}
