//! 简体中文翻译 (zh-CN)

use super::keys::{
    CommonTexts, HelpTexts, HintTexts, ModalTexts, PageTexts, StatusTexts, TableTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "S3 浏览器",
        error: "错误",
    },

    hints: HintTexts {
        move_up_down: "移动",
        open: "打开",
        back: "返回",
        alternate: "备用视图",
        goto: "跳转",
        refresh: "刷新",
        see_also: "命令",
        scroll: "滚动",
        help: "帮助",
        quit: "退出",
    },

    page: PageTexts {
        empty: "没有条目",
        no_value: "此地址下没有对象或文档",
        truncated: "列表已截断",
    },

    table: TableTexts {
        name: "名称",
        modified: "修改时间",
        size: "大小",
        class: "存储类型",
    },

    modal: ModalTexts {
        error_title: "错误",
        press_to_close: "按 Esc 或 Enter 关闭",
        goto_title: "跳转",
        goto_hint: "输入 s3://bucket/key 或条目名称，Enter 打开",
    },

    status: StatusTexts {
        refreshed: "已刷新",
        no_alternate: "当前页面没有备用视图",
        no_see_also: "当前页面没有对应的命令",
        at_root: "已经在最顶层",
    },

    help: HelpTexts {
        title: "帮助",
        navigation: "导航",
        actions: "操作",
        move_selection: "移动选中项 / 滚动",
        open_entry: "打开选中条目",
        go_back: "返回上一页",
        alternate_view: "备用视图（bucket 设置 / 对象信息）",
        goto_address: "跳转到 s3:// 地址或条目",
        refresh_page: "刷新当前页面",
        show_see_also: "显示等价的命令行",
        toggle_help: "显示帮助",
        quit: "退出",
    },
};
