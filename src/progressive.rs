//! 渐进前缀匹配策略
//!
//! 对每个未命中的层级，从片段开头取长度 2 的前缀沿前缀索引逐字
//! 加长：候选为零则停止加长并采用此前最后一次唯一命中；候选唯一
//! 则记为当前最优并继续加长（更长的唯一前缀覆盖更短的）；候选多
//! 于一个则不更新最优、继续加长等待后续字符消歧。层级按省、市、
//! 区县、街道的顺序处理，已知上级作为候选过滤条件。

use crate::data::DivisionTables;
use crate::division::{Division, Level};
use crate::resolver::{back_fill, ResolutionState};

/// 解析一个片段，命中的层级名称逐级从片段中剥除，残余文本归入详细地址
pub(crate) fn resolve_fragment<'a>(
    tables: &'a DivisionTables,
    state: &mut ResolutionState<'a>,
    fragment: &str,
) {
    log::trace!("渐进前缀匹配: {}", fragment);
    let mut fragment = fragment.to_string();

    for level in Level::ALL {
        if state.get(level).is_some() {
            continue;
        }
        if let Some((record, matched)) = match_level(tables, state, level, &fragment) {
            fragment = fragment.replace(&matched, "");
            state.set(level, record);
            back_fill(tables, state, level, record);
        }
    }

    if !fragment.is_empty() {
        state.detail.push(fragment);
    }
}

/// 在一个层级内对片段做渐进前缀匹配
///
/// 返回命中的记录和实际命中的前缀文本。
fn match_level<'a>(
    tables: &'a DivisionTables,
    state: &ResolutionState<'a>,
    level: Level,
    fragment: &str,
) -> Option<(&'a Division, String)> {
    let table = tables.level(level);
    let mut node = table.index().root();
    let mut prefix = String::new();
    let mut best: Option<(u32, String)> = None;

    for (i, ch) in fragment.chars().enumerate() {
        node = match node.child(ch) {
            Some(next) => next,
            None => break,
        };
        prefix.push(ch);
        if i == 0 {
            // 前缀从两个字符起算
            continue;
        }

        let mut found: Option<u32> = None;
        let mut ambiguous = false;
        for &id in node.ids() {
            if !ancestors_match(state, level, table.record(id)) {
                continue;
            }
            if found.is_some() {
                ambiguous = true;
                break;
            }
            found = Some(id);
        }

        match found {
            None => break,
            Some(id) if !ambiguous => best = Some((id, prefix.clone())),
            Some(_) => {}
        }
    }

    best.map(|(id, matched)| (table.record(id), matched))
}

/// 候选记录的上级编码必须与全部已知上级一致
fn ancestors_match(state: &ResolutionState<'_>, level: Level, record: &Division) -> bool {
    for &ancestor in level.ancestors() {
        if let Some(known) = state.get(ancestor) {
            if record.ancestor_code(ancestor) != Some(known.code.as_str()) {
                return false;
            }
        }
    }
    true
}
