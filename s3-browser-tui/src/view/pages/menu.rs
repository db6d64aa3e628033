//! 菜单页面视图

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染菜单
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let rows = app.navigation.page().rows();
    if rows.is_empty() {
        super::render_empty(frame, area);
        return;
    }

    let c = colors();
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            ListItem::new(Line::from(vec![
                Span::styled("  ▸ ", Style::default().fg(c.muted)),
                Span::styled(row.name.clone(), Style::default().fg(c.fg)),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(Styles::selected());

    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
