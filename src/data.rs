//! 参考表加载和索引构建

use crate::division::{Division, Level};
use crate::trie::PrefixIndex;
use std::collections::HashMap;

/// 内嵌的行政区划数据（编译时包含）
const PROVINCES_DATA: &str = include_str!("../data/provinces.csv");
const CITIES_DATA: &str = include_str!("../data/cities.csv");
const AREAS_DATA: &str = include_str!("../data/areas.csv");
const STREETS_DATA: &str = include_str!("../data/streets.csv");

/// 单个层级的参考表
///
/// 记录顺序即数据源顺序，树查找模式按此顺序取首个命中。
pub(crate) struct LevelTable {
    records: Vec<Division>,
    index: PrefixIndex,
    by_code: HashMap<String, u32>,
}

impl LevelTable {
    fn build(records: Vec<Division>) -> Self {
        let mut index = PrefixIndex::new();
        let mut by_code = HashMap::with_capacity(records.len());
        for (id, record) in records.iter().enumerate() {
            index.insert(&record.name, id as u32);
            by_code.insert(record.code.clone(), id as u32);
        }
        Self {
            records,
            index,
            by_code,
        }
    }

    pub(crate) fn records(&self) -> &[Division] {
        &self.records
    }

    pub(crate) fn record(&self, id: u32) -> &Division {
        &self.records[id as usize]
    }

    pub(crate) fn index(&self) -> &PrefixIndex {
        &self.index
    }

    /// 按编码精确查找
    pub(crate) fn by_code(&self, code: &str) -> Option<&Division> {
        self.by_code.get(code).map(|&id| self.record(id))
    }
}

/// 四级行政区划参考表
///
/// 进程级只读共享数据：构建一次后不再变更，可在任意多的并发解析
/// 调用之间共享。
pub struct DivisionTables {
    levels: [LevelTable; 4],
}

impl DivisionTables {
    /// 从调用方提供的四级记录构建参考表
    pub fn new(
        provinces: Vec<Division>,
        cities: Vec<Division>,
        areas: Vec<Division>,
        streets: Vec<Division>,
    ) -> Self {
        Self {
            levels: [
                LevelTable::build(provinces),
                LevelTable::build(cities),
                LevelTable::build(areas),
                LevelTable::build(streets),
            ],
        }
    }

    /// 使用内置数据构建参考表
    pub fn builtin() -> Self {
        Self::new(
            parse_csv(PROVINCES_DATA, Level::Province),
            parse_csv(CITIES_DATA, Level::City),
            parse_csv(AREAS_DATA, Level::Area),
            parse_csv(STREETS_DATA, Level::Street),
        )
    }

    pub(crate) fn level(&self, level: Level) -> &LevelTable {
        &self.levels[level.index()]
    }

    /// 全部省级记录
    pub fn provinces(&self) -> &[Division] {
        self.level(Level::Province).records()
    }

    /// 全部市级记录
    pub fn cities(&self) -> &[Division] {
        self.level(Level::City).records()
    }

    /// 全部区县级记录
    pub fn areas(&self) -> &[Division] {
        self.level(Level::Area).records()
    }

    /// 全部街道级记录
    pub fn streets(&self) -> &[Division] {
        self.level(Level::Street).records()
    }

    /// 按层级和编码精确查找记录
    pub fn find_by_code(&self, level: Level, code: &str) -> Option<&Division> {
        self.level(level).by_code(code)
    }
}

/// 解析一个层级的 CSV 数据
///
/// 列布局：省 `code,name`，市 `code,name,province_code`，
/// 区县 `code,name,city_code,province_code`，
/// 街道 `code,name,area_code,city_code,province_code`。
/// 首行表头跳过，列数不足的行跳过。
fn parse_csv(data: &str, level: Level) -> Vec<Division> {
    let mut records = Vec::new();

    for line in data.lines().skip(1) {
        let parts: Vec<&str> = line.split(',').map(|p| p.trim()).collect();
        if parts.len() < 2 || parts[0].is_empty() || parts[1].is_empty() {
            continue;
        }
        let record = match level {
            Level::Province => Division::province(parts[0], parts[1]),
            Level::City => {
                if parts.len() < 3 {
                    continue;
                }
                Division::city(parts[0], parts[1], parts[2])
            }
            Level::Area => {
                if parts.len() < 4 {
                    continue;
                }
                Division::area(parts[0], parts[1], parts[2], parts[3])
            }
            Level::Street => {
                if parts.len() < 5 {
                    continue;
                }
                Division::street(parts[0], parts[1], parts[2], parts[3], parts[4])
            }
        };
        records.push(record);
    }

    records
}
