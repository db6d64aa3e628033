//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders},
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：面包屑 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 面包屑
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    components::breadcrumb::render(app, frame, main_layout[0]);
    render_page_content(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染当前页面
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let page = app.navigation.page();

    let mut title = vec![Span::styled(format!(" {} ", page.title()), Styles::title())];
    if page.is_truncated() {
        title.push(Span::styled(
            format!("({}) ", t().page.truncated),
            Style::default().fg(c.warning),
        ));
    }

    let border_color = if app.modal.is_open() {
        c.border
    } else {
        c.border_focused
    };

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    pages::render(app, frame, inner_area);
}
