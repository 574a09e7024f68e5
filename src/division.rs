//! 行政区划数据结构与解析结果

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 行政区划层级：省 / 市 / 区县 / 街道
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Level {
    Province,
    City,
    Area,
    Street,
}

impl Level {
    /// 自上而下的全部层级
    pub const ALL: [Level; 4] = [Level::Province, Level::City, Level::Area, Level::Street];

    pub(crate) fn index(self) -> usize {
        match self {
            Level::Province => 0,
            Level::City => 1,
            Level::Area => 2,
            Level::Street => 3,
        }
    }

    /// 当前层级的上级层级，自外向内排列
    pub(crate) fn ancestors(self) -> &'static [Level] {
        match self {
            Level::Province => &[],
            Level::City => &[Level::Province],
            Level::Area => &[Level::Province, Level::City],
            Level::Street => &[Level::Province, Level::City, Level::Area],
        }
    }
}

/// 行政区划记录
///
/// 四个层级共用同一记录结构：省不携带上级编码，市携带省编码，
/// 区县携带市、省编码，街道携带区县、市、省编码。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Division {
    /// 行政区划编码，层级内唯一
    pub code: String,
    /// 显示名称
    pub name: String,
    /// 所属省编码
    pub province_code: Option<String>,
    /// 所属市编码
    pub city_code: Option<String>,
    /// 所属区县编码
    pub area_code: Option<String>,
}

impl Division {
    /// 创建省级记录
    pub fn province(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            province_code: None,
            city_code: None,
            area_code: None,
        }
    }

    /// 创建市级记录
    pub fn city(
        code: impl Into<String>,
        name: impl Into<String>,
        province_code: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            province_code: Some(province_code.into()),
            city_code: None,
            area_code: None,
        }
    }

    /// 创建区县级记录
    pub fn area(
        code: impl Into<String>,
        name: impl Into<String>,
        city_code: impl Into<String>,
        province_code: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            province_code: Some(province_code.into()),
            city_code: Some(city_code.into()),
            area_code: None,
        }
    }

    /// 创建街道级记录
    pub fn street(
        code: impl Into<String>,
        name: impl Into<String>,
        area_code: impl Into<String>,
        city_code: impl Into<String>,
        province_code: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            province_code: Some(province_code.into()),
            city_code: Some(city_code.into()),
            area_code: Some(area_code.into()),
        }
    }

    /// 记录携带的某一上级层级的编码
    pub(crate) fn ancestor_code(&self, level: Level) -> Option<&str> {
        match level {
            Level::Province => self.province_code.as_deref(),
            Level::City => self.city_code.as_deref(),
            Level::Area => self.area_code.as_deref(),
            Level::Street => None,
        }
    }
}

/// 解析结果
///
/// 未解析出的字段为空字符串。`detail` 为剩余详细地址片段按原顺序
/// 直接拼接的结果，不插入分隔符。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ParseResult {
    /// 电话号码
    pub phone: String,
    /// 邮政编码
    pub postal_code: String,
    /// 省编码
    pub province_code: String,
    /// 省名称
    pub province: String,
    /// 市编码
    pub city_code: String,
    /// 市名称
    pub city: String,
    /// 区县编码
    pub area_code: String,
    /// 区县名称
    pub area: String,
    /// 街道编码
    pub street_code: String,
    /// 街道名称
    pub street: String,
    /// 详细地址
    pub detail: String,
    /// 收件人姓名
    pub name: String,
}

impl ParseResult {
    /// 创建空的解析结果
    pub fn empty() -> Self {
        Self::default()
    }

    /// 是否解析到了省份
    pub fn has_province(&self) -> bool {
        !self.province_code.is_empty()
    }

    /// 是否解析到了城市
    pub fn has_city(&self) -> bool {
        !self.city_code.is_empty()
    }

    /// 是否解析到了区县
    pub fn has_area(&self) -> bool {
        !self.area_code.is_empty()
    }

    /// 是否解析到了街道
    pub fn has_street(&self) -> bool {
        !self.street_code.is_empty()
    }

    /// 省市区街道是否全部解析出来
    pub fn is_complete(&self) -> bool {
        self.has_province() && self.has_city() && self.has_area() && self.has_street()
    }

    /// 拼接标准化的完整地址
    pub fn full_address(&self) -> String {
        let mut result = String::new();
        result.push_str(&self.province);
        // 直辖市省市同名，不重复拼接
        if self.city != self.province {
            result.push_str(&self.city);
        }
        result.push_str(&self.area);
        result.push_str(&self.street);
        result.push_str(&self.detail);
        result
    }
}
