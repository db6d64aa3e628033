//! `--print` 模式：把页面渲染为纯文本
//!
//! 菜单每行一个名称，表格每行一组制表符分隔的列，对象页为格式化 JSON，
//! 最后一行是等价的 shell 命令。名称与列里的 `\`、制表符、换行按 `\t` 这类写法转义，
//! 一行始终对应一条记录。

use std::fmt::Write as _;

use s3_browser_core::{CoreError, CoreResult, Page, PageKind};
use serde_json::Value;

/// 渲染页面
pub fn render_page(page: &Page) -> CoreResult<String> {
    let mut out = String::new();

    match page.kind() {
        PageKind::Menu => {
            for row in page.rows().iter() {
                let _ = writeln!(out, "{}", escape_field(&row.name));
            }
        }
        PageKind::Table => {
            for row in page.rows().iter() {
                let fields: Vec<_> = row.columns().iter().map(|c| escape_field(c)).collect();
                let _ = writeln!(out, "{}", fields.join("\t"));
            }
        }
        PageKind::Object => {
            let value = page.value()?.unwrap_or(Value::Null);
            let text = serde_json::to_string_pretty(&value)
                .map_err(|e| CoreError::SerializationError(e.to_string()))?;
            let _ = writeln!(out, "{text}");
        }
    }

    if let Some(words) = page.see_also() {
        let _ = writeln!(out, "\n# {}", command_line(&words));
    }

    Ok(out)
}

fn escape_field(field: &str) -> String {
    let mut escaped = String::with_capacity(field.len());
    for c in field.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// 把命令词拼成可以直接粘贴到 shell 的一行
pub fn command_line(words: &[String]) -> String {
    words
        .iter()
        .map(|word| shell_quote(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@%+,".contains(c));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use s3_browser_core::page::{KeyPage, PolicyPage};
    use s3_browser_core::Row;

    #[test]
    fn menu_page() {
        assert_eq!(render_page(&Page::Home).unwrap(), "s3\n\n# s3-browser\n");
    }

    #[test]
    fn table_rows_are_tab_separated() {
        let page = Page::Key(KeyPage {
            bucket: "logs".to_string(),
            key: "2024".to_string(),
            info: None,
            rows: vec![
                Row::group("01"),
                Row::object(
                    "app.log",
                    DateTime::from_timestamp(0, 0),
                    120,
                    Some("STANDARD".to_string()),
                ),
            ],
            truncated: false,
        });

        let text = render_page(&page).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "01\t\t\t");
        assert!(lines[1].starts_with("app.log\t1970-01-01T00:00:00"));
        assert!(lines[1].ends_with("\t120\tSTANDARD"));
        assert_eq!(lines.last(), Some(&"# aws s3 ls s3://logs/2024/"));
    }

    #[test]
    fn control_characters_in_keys_stay_on_one_line() {
        let page = Page::Key(KeyPage {
            bucket: "logs".to_string(),
            key: String::new(),
            info: None,
            rows: vec![
                Row::object("a\tb\nc.txt", None, 7, None),
                Row::group(r"win\dir"),
            ],
            truncated: false,
        });

        let text = render_page(&page).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "a\\tb\\nc.txt\t\t7\t");
        assert_eq!(lines[1], "win\\\\dir\t\t\t");
        assert_eq!(lines[0].split('\t').count(), 4);
    }

    #[test]
    fn escape_field_only_touches_separators() {
        assert_eq!(escape_field("plain name.txt"), "plain name.txt");
        assert_eq!(escape_field("cr\r\n"), r"cr\r\n");
        assert_eq!(escape_field("日志"), "日志");
    }

    #[test]
    fn missing_document_prints_null() {
        let page = Page::Policy(PolicyPage {
            bucket: "media".to_string(),
            document: None,
        });
        assert_eq!(
            render_page(&page).unwrap(),
            "null\n\n# aws s3api get-bucket-policy --bucket media\n"
        );
    }

    #[test]
    fn quoting() {
        let words = ["aws", "s3", "cp", "s3://logs/my file.txt", "-"].map(String::from);
        assert_eq!(command_line(&words), "aws s3 cp 's3://logs/my file.txt' -");
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
        assert_eq!(shell_quote(""), "''");
    }
}
