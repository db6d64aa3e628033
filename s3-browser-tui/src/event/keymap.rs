//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone, Copy)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 字符键忽略 Shift：部分终端输入 `?` 时会带上 SHIFT。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        modifiers == self.modifiers && key.code == self.code
    }
}

/// 任一绑定匹配即可
pub fn matches_any(bindings: &[KeyBinding], key: &KeyEvent) -> bool {
    bindings.iter().any(|binding| binding.matches(key))
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const REFRESH: KeyBinding = KeyBinding::key(KeyCode::Char('r'));
    pub const BACK: [KeyBinding; 4] = [
        KeyBinding::key(KeyCode::Esc),
        KeyBinding::key(KeyCode::Left),
        KeyBinding::key(KeyCode::Char('h')),
        KeyBinding::key(KeyCode::Backspace),
    ];

    // 页面操作
    pub const ALTERNATE: KeyBinding = KeyBinding::key(KeyCode::Char('a'));
    pub const GOTO: KeyBinding = KeyBinding::key(KeyCode::Char('g'));
    pub const SEE_ALSO: KeyBinding = KeyBinding::key(KeyCode::Char('y'));

    // 移动
    pub const NAV_UP: [KeyBinding; 2] = [
        KeyBinding::key(KeyCode::Up),
        KeyBinding::key(KeyCode::Char('k')),
    ];
    pub const NAV_DOWN: [KeyBinding; 2] = [
        KeyBinding::key(KeyCode::Down),
        KeyBinding::key(KeyCode::Char('j')),
    ];
    pub const NAV_FIRST: KeyBinding = KeyBinding::key(KeyCode::Home);
    pub const NAV_LAST: KeyBinding = KeyBinding::key(KeyCode::End);
    pub const NAV_PAGE_UP: KeyBinding = KeyBinding::key(KeyCode::PageUp);
    pub const NAV_PAGE_DOWN: KeyBinding = KeyBinding::key(KeyCode::PageDown);
    pub const NAV_CONFIRM: [KeyBinding; 3] = [
        KeyBinding::key(KeyCode::Enter),
        KeyBinding::key(KeyCode::Right),
        KeyBinding::key(KeyCode::Char('l')),
    ];
}
