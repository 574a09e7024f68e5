//! 层级解析：逐片段推进的解析状态与策略分发

use crate::data::DivisionTables;
use crate::division::{Division, Level};
use crate::parser::Strategy;
use crate::{progressive, tree_search};

/// 单次解析调用内的层级解析状态
///
/// 每个层级至多持有一条已命中的记录，命中后在本次调用内不再
/// 覆盖或清除。`detail` 按片段顺序收集未归入层级的文本。
pub(crate) struct ResolutionState<'a> {
    levels: [Option<&'a Division>; 4],
    pub(crate) detail: Vec<String>,
}

impl<'a> ResolutionState<'a> {
    pub(crate) fn new() -> Self {
        Self {
            levels: [None; 4],
            detail: Vec::new(),
        }
    }

    pub(crate) fn get(&self, level: Level) -> Option<&'a Division> {
        self.levels[level.index()]
    }

    /// 记录某层级的命中结果，已有命中时保持不变
    pub(crate) fn set(&mut self, level: Level, record: &'a Division) {
        let slot = &mut self.levels[level.index()];
        if slot.is_none() {
            *slot = Some(record);
        }
    }

    /// 四个层级是否全部命中
    pub(crate) fn all_resolved(&self) -> bool {
        self.levels.iter().all(|slot| slot.is_some())
    }
}

/// 用选定策略解析一个片段，结果合并进解析状态
pub(crate) fn resolve_fragment<'a>(
    tables: &'a DivisionTables,
    state: &mut ResolutionState<'a>,
    fragment: &str,
    strategy: Strategy,
) {
    match strategy {
        Strategy::ProgressivePrefix => progressive::resolve_fragment(tables, state, fragment),
        Strategy::TreeSearch => tree_search::resolve_fragment(tables, state, fragment),
    }
}

/// 用命中记录携带的上级编码回填尚未命中的上级层级
///
/// 编码在上级表中不存在时保持该层级未命中。
pub(crate) fn back_fill<'a>(
    tables: &'a DivisionTables,
    state: &mut ResolutionState<'a>,
    level: Level,
    record: &Division,
) {
    for &ancestor in level.ancestors() {
        if state.get(ancestor).is_some() {
            continue;
        }
        if let Some(code) = record.ancestor_code(ancestor) {
            if let Some(found) = tables.level(ancestor).by_code(code) {
                state.set(ancestor, found);
            }
        }
    }
}
