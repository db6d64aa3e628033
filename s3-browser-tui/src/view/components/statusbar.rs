//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use s3_browser_core::{Page, PageKind};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 有状态消息时只保留帮助提示，把位置让给消息
    let hints = match app.status_message {
        Some(_) => vec![("?", t().hints.help)],
        None => get_hints(
            app.navigation.page(),
            app.navigation.navigator.can_go_back(),
        ),
    };

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前页面生成快捷键提示；没有历史时不提示 Esc
fn get_hints(page: &Page, can_go_back: bool) -> Vec<(&'static str, &'static str)> {
    let texts = &t().hints;
    let mut hints = Vec::new();

    match page.kind() {
        PageKind::Menu | PageKind::Table => {
            hints.push(("↑↓", texts.move_up_down));
            hints.push(("Enter", texts.open));
        }
        PageKind::Object => {
            hints.push(("↑↓", texts.scroll));
        }
    }

    if can_go_back {
        hints.push(("Esc", texts.back));
    }
    if page.alternate_view().is_some() {
        hints.push(("a", texts.alternate));
    }

    hints.push(("g", texts.goto));
    hints.push(("r", texts.refresh));
    hints.push(("y", texts.see_also));
    hints.push(("?", texts.help));
    hints.push(("q", texts.quit));

    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{AppMessage, NavigationMessage};
    use crate::test_utils::create_test_app;
    use crate::update::update;
    use s3_browser_core::page::{BucketSettingsPage, KeyPage};

    fn keys(page: &Page) -> Vec<&'static str> {
        get_hints(page, true).into_iter().map(|(key, _)| key).collect()
    }

    #[test]
    fn home_has_no_back_or_alternate() {
        let hints: Vec<_> = get_hints(&Page::Home, false)
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(hints, ["↑↓", "Enter", "g", "r", "y", "?", "q"]);
    }

    #[test]
    fn back_hint_follows_history() {
        let mut app = create_test_app();
        let hints = |app: &App| {
            get_hints(app.navigation.page(), app.navigation.navigator.can_go_back())
                .into_iter()
                .map(|(key, _)| key)
                .collect::<Vec<_>>()
        };
        assert!(!hints(&app).contains(&"Esc"));

        update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
        assert!(hints(&app).contains(&"Esc"));

        update(&mut app, AppMessage::GoBack);
        assert!(!hints(&app).contains(&"Esc"));
    }

    #[test]
    fn bucket_root_offers_alternate() {
        let page = Page::Key(KeyPage {
            bucket: "logs".to_string(),
            key: String::new(),
            info: None,
            rows: Vec::new(),
            truncated: false,
        });
        assert!(keys(&page).contains(&"a"));
        assert_eq!(keys(&page)[0], "↑↓");
        assert_eq!(get_hints(&page, true)[0].1, t().hints.scroll);

        let settings = Page::BucketSettings(BucketSettingsPage::new("logs"));
        assert!(!keys(&settings).contains(&"a"));
        assert!(keys(&settings).contains(&"Esc"));
    }
}
