//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, HelpTexts, HintTexts, ModalTexts, PageTexts, StatusTexts, TableTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "S3 Browser",
        error: "Error",
    },

    hints: HintTexts {
        move_up_down: "Move",
        open: "Open",
        back: "Back",
        alternate: "Alt view",
        goto: "Go to",
        refresh: "Refresh",
        see_also: "Command",
        scroll: "Scroll",
        help: "Help",
        quit: "Quit",
    },

    page: PageTexts {
        empty: "No entries",
        no_value: "Nothing here (no object or document at this address)",
        truncated: "listing truncated",
    },

    table: TableTexts {
        name: "Name",
        modified: "Modified",
        size: "Size",
        class: "Class",
    },

    modal: ModalTexts {
        error_title: "Error",
        press_to_close: "Press Esc or Enter to close",
        goto_title: "Go to",
        goto_hint: "s3://bucket/key or an entry name, Enter to open",
    },

    status: StatusTexts {
        refreshed: "Refreshed",
        no_alternate: "This page has no alternate view",
        no_see_also: "No equivalent command for this page",
        at_root: "Already at the top",
    },

    help: HelpTexts {
        title: "Help",
        navigation: "Navigation",
        actions: "Actions",
        move_selection: "Move selection / scroll",
        open_entry: "Open selected entry",
        go_back: "Back to previous page",
        alternate_view: "Alternate view (settings / object info)",
        goto_address: "Go to s3:// address or entry",
        refresh_page: "Refresh current page",
        show_see_also: "Show equivalent shell command",
        toggle_help: "Show this help",
        quit: "Quit",
    },
};
