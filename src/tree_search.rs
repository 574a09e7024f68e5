//! 树查找策略
//!
//! 逐层线性扫描参考表：对每条候选记录，把记录名称从全长到 2 个
//! 字符逐步截短，片段以其中任一截前缀开头即命中，取表序第一条命
//! 中的记录。已知上级时只考察上级编码对得上的记录；上级全部未知
//! 时全表可选，同名记录取表序靠前者，命中后按记录携带的编码回填
//! 上级。

use crate::data::DivisionTables;
use crate::division::{Division, Level};
use crate::resolver::{back_fill, ResolutionState};

/// 解析一个片段，命中的层级名称逐级从片段中剥除，残余文本归入详细地址
pub(crate) fn resolve_fragment<'a>(
    tables: &'a DivisionTables,
    state: &mut ResolutionState<'a>,
    fragment: &str,
) {
    log::trace!("树查找匹配: {}", fragment);
    let mut fragment = fragment.to_string();

    for level in Level::ALL {
        if state.get(level).is_some() {
            continue;
        }
        for record in tables.level(level).records() {
            if !eligible(state, level, record) {
                continue;
            }
            if let Some(matched) = longest_name_prefix(&record.name, &fragment) {
                fragment = fragment.replace(&matched, "");
                state.set(level, record);
                back_fill(tables, state, level, record);
                break;
            }
        }
    }

    if !fragment.is_empty() {
        state.detail.push(fragment);
    }
}

/// 记录名称从全长到 2 个字符截短，返回片段开头命中的最长截前缀
fn longest_name_prefix(name: &str, fragment: &str) -> Option<String> {
    let chars: Vec<char> = name.chars().collect();
    for len in (2..=chars.len()).rev() {
        let prefix: String = chars[..len].iter().collect();
        if fragment.starts_with(&prefix) {
            return Some(prefix);
        }
    }
    None
}

/// 候选资格：上级全部未知时全表可选；已知任一上级时，至少要有
/// 一个已知上级的编码与记录携带的编码一致
fn eligible(state: &ResolutionState<'_>, level: Level, record: &Division) -> bool {
    let mut any_known = false;
    for &ancestor in level.ancestors() {
        if let Some(known) = state.get(ancestor) {
            any_known = true;
            if record.ancestor_code(ancestor) == Some(known.code.as_str()) {
                return true;
            }
        }
    }
    !any_known
}
