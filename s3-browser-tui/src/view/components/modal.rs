//! 弹窗组件

use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Goto { input } => render_goto(frame, input),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn modal_block(title: &str, border: Color) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(Color::Black))
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = &t().help;
    let c = colors();

    let sections: [(&str, &[(&str, &str)]); 2] = [
        (
            texts.navigation,
            &[
                ("↑↓ / j k", texts.move_selection),
                ("Enter / → / l", texts.open_entry),
                ("Esc / ← / h", texts.go_back),
            ],
        ),
        (
            texts.actions,
            &[
                ("a", texts.alternate_view),
                ("g", texts.goto_address),
                ("r", texts.refresh_page),
                ("y", texts.show_see_also),
                ("?", texts.toggle_help),
                ("q / Ctrl+C", texts.quit),
            ],
        ),
    ];

    let mut lines = Vec::new();
    for (heading, entries) in sections {
        lines.push(Line::styled(
            heading,
            Style::default().fg(c.group).add_modifier(Modifier::BOLD),
        ));
        for (key, desc) in entries {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<16}"), Style::default().fg(Color::Yellow)),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::styled(
        t().modal.press_to_close,
        Style::default().fg(Color::DarkGray),
    ));

    let height = lines.len() as u16 + 2;
    let area = centered_rect(60, height, frame.area());

    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new(lines)
        .block(modal_block(texts.title, Color::Cyan))
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let area = centered_rect(60, 9, frame.area());

    let lines = vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(c.error)),
        Line::from(""),
        Line::styled(
            t().modal.press_to_close,
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new(lines)
        .block(modal_block(title, c.error))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// 渲染跳转输入框
fn render_goto(frame: &mut Frame, input: &str) {
    let texts = &t().modal;
    let area = centered_rect(64, 6, frame.area());

    let lines = vec![
        Line::styled(texts.goto_hint, Style::default().fg(Color::Gray)),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::styled(input, Style::default().fg(Color::White)),
        ]),
    ];

    frame.render_widget(Clear, area);
    let block = modal_block(texts.goto_title, Color::Cyan);
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(lines).block(block), area);

    // 光标放在输入内容末尾
    let cursor_x = inner.x + 2 + input.width() as u16;
    if inner.height >= 3 && cursor_x < inner.right() {
        frame.set_cursor_position(Position::new(cursor_x, inner.y + 2));
    }
}
