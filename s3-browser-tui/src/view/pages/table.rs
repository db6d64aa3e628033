//! 表格页面视图（bucket 列表、key 列表）

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row as TableRow, Table, TableState},
    Frame,
};
use s3_browser_core::Row;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染表格
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let rows = app.navigation.page().rows();
    if rows.is_empty() {
        super::render_empty(frame, area);
        return;
    }

    let texts = &t().table;
    let c = colors();

    let header = TableRow::new([texts.name, texts.modified, texts.size, texts.class])
        .style(
            Style::default()
                .fg(c.muted)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let body: Vec<TableRow> = rows.iter().map(table_row).collect();

    let widths = [
        Constraint::Min(20),
        Constraint::Length(26),
        Constraint::Length(12),
        Constraint::Length(20),
    ];

    let table = Table::new(body, widths)
        .header(header)
        .column_spacing(2)
        .row_highlight_style(Styles::selected());

    let mut state = TableState::default().with_selected(Some(app.navigation.selected));
    frame.render_stateful_widget(table, area, &mut state);
}

fn table_row(row: &Row) -> TableRow<'static> {
    let c = colors();
    let [name, modified, size, class] = row.columns();

    // 前缀/bucket 用另一种颜色，并加上 `/` 与对象区分
    let name = if row.is_group() {
        Cell::from(format!("{name}/")).style(Style::default().fg(c.group))
    } else {
        Cell::from(name).style(Style::default().fg(c.fg))
    };

    TableRow::new([
        name,
        Cell::from(modified).style(Style::default().fg(c.muted)),
        Cell::from(size),
        Cell::from(class).style(Style::default().fg(c.muted)),
    ])
}
