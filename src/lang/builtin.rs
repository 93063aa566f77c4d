// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in hint texts.

use crate::state::OutcomeState;

use super::pack::LangPack;

const EN_RULE: &str = "Commit message rule as follow:
<type>(<scope>): <subject>
// empty line
<body>
// empty line
<footer>

(<scope>), <body> and <footer> are optional by default
<type> must be one of {{types}}";

const ZH_CN_RULE: &str = "提交信息规范如下:
<type>(<scope>): <subject>
// 空行
<body>
// 空行
<footer>

(<scope>), <body> 和 <footer> 默认可选，也可以在配置设置必选
<type> 必须是关键字 {{types}} 之一";

/// English hint for a state.
fn en_hint(state: OutcomeState) -> &'static str {
    match state {
        OutcomeState::Validated => "Validated: commit message meets the rule.",
        OutcomeState::Merge => "Merge: merge commit detected, skip check.",
        OutcomeState::ArgumentMissing => {
            "Error ArgumentMissing: commit message file argument missing."
        }
        OutcomeState::FileMissing => "Error FileMissing: file {{path}} not exists.",
        OutcomeState::ReadError => "Error ReadError: read file {{path}} error.",
        OutcomeState::EmptyMessage => {
            "Error EmptyMessage: commit message has no content except whitespaces."
        }
        OutcomeState::EmptyHeader => {
            "Error EmptyHeader: header (first line) has no content except whitespaces."
        }
        OutcomeState::BadHeaderFormat => {
            "Error BadHeaderFormat: header (first line) not following the rule:
{{header}}
if you can not find any error after check, maybe you use full-width colon, or lack of whitespace after the colon."
        }
        OutcomeState::WrongType => {
            "Error WrongType: {{type}}, type should be one of the keywords:\n{{types}}"
        }
        OutcomeState::ScopeMissing => {
            "Error ScopeMissing: (scope) is required right after type."
        }
        OutcomeState::WrongScope => {
            "Error WrongScope: {{scope}}, scope should be one of the keywords:\n{{scopes}}"
        }
        OutcomeState::BodyMissing => {
            "Error BodyMissing: body has no content except whitespaces."
        }
        OutcomeState::NoBlankLineBeforeBody => {
            "Error NoBlankLineBeforeBody: no empty line between header and body."
        }
        OutcomeState::LineOverLong => {
            "Error LineOverLong: the length of line is {{length}}, exceed {{limit}}:\n{{line}}"
        }
        OutcomeState::UndefinedError => {
            "Error UndefinedError: unexpected error occurs, please raise an issue."
        }
    }
}

/// Simplified Chinese hint for a state.
fn zh_cn_hint(state: OutcomeState) -> &'static str {
    match state {
        OutcomeState::Validated => "Validated: 提交信息符合规范。",
        OutcomeState::Merge => "Merge: 合并提交，跳过规范检查。",
        OutcomeState::ArgumentMissing => "Error ArgumentMissing: 缺少文件参数。",
        OutcomeState::FileMissing => "Error FileMissing: 文件 {{path}} 不存在。",
        OutcomeState::ReadError => "Error ReadError: 读取 {{path}} 错误。",
        OutcomeState::EmptyMessage => {
            "Error EmptyMessage: 提交信息没有内容（不包括空白字符）。"
        }
        OutcomeState::EmptyHeader => {
            "Error EmptyHeader: 标题（第一行）没有内容（不包括空白字符）。"
        }
        OutcomeState::BadHeaderFormat => {
            "Error BadHeaderFormat: 标题（第一行）不符合规范:
{{header}}
如果您无法发现错误，请注意是否使用了中文冒号，或者冒号后面缺少空格。"
        }
        OutcomeState::WrongType => {
            "Error WrongType: {{type}}, 类型关键字应为以下选项中的一个:\n{{types}}"
        }
        OutcomeState::ScopeMissing => "Error ScopeMissing: 类型后面缺少'(scope)'。",
        OutcomeState::WrongScope => {
            "Error WrongScope: {{scope}}, 范围关键字应为以下选项中的一个:\n{{scopes}}"
        }
        OutcomeState::BodyMissing => {
            "Error BodyMissing: 消息体没有内容（不包括空白字符）。"
        }
        OutcomeState::NoBlankLineBeforeBody => {
            "Error NoBlankLineBeforeBody: 标题和消息体之间缺少空行。"
        }
        OutcomeState::LineOverLong => {
            "Error LineOverLong: 该行长度为 {{length}}, 超出了 {{limit}} 的限制:\n{{line}}"
        }
        OutcomeState::UndefinedError => {
            "Error UndefinedError: 没有预料到的错误，请提交一个错误报告。"
        }
    }
}

/// The English pack.
pub fn en() -> LangPack {
    LangPack::from_fn(en_hint, EN_RULE)
}

/// The Simplified Chinese pack.
pub fn zh_cn() -> LangPack {
    LangPack::from_fn(zh_cn_hint, ZH_CN_RULE)
}
