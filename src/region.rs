//! 解析结果数据结构

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::resolver::Strategy;

/// 泰文名称及其英文译名
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocalizedName {
    /// 泰文原名
    pub native: String,
    /// 英文译名
    pub translated: String,
}

impl LocalizedName {
    pub fn new(native: impl Into<String>, translated: impl Into<String>) -> Self {
        Self {
            native: native.into(),
            translated: translated.into(),
        }
    }
}

/// 某一级的解析结果：要么解析到，要么明确未解析
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Resolution<T> {
    Resolved(T),
    Unresolved,
}

impl<T> Resolution<T> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    /// 转换为 `Option`
    pub fn resolved(self) -> Option<T> {
        match self {
            Resolution::Resolved(value) => Some(value),
            Resolution::Unresolved => None,
        }
    }
}

impl<T> Default for Resolution<T> {
    fn default() -> Self {
        Resolution::Unresolved
    }
}

impl Resolution<LocalizedName> {
    /// 泰文原名，未解析时为 `None`
    pub fn native(&self) -> Option<&str> {
        match self {
            Resolution::Resolved(name) => Some(&name.native),
            Resolution::Unresolved => None,
        }
    }

    /// 英文译名，未解析时为 `None`
    pub fn translated(&self) -> Option<&str> {
        match self {
            Resolution::Resolved(name) => Some(&name.translated),
            Resolution::Unresolved => None,
        }
    }
}

/// 解析结果
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedAddress {
    /// 原始输入
    pub original_address: String,
    /// 标准化后的完整地址，未解析时为空
    pub parsed_address: String,
    /// 府 (จังหวัด)
    pub province: Resolution<LocalizedName>,
    /// 县 (อำเภอ / เขต)
    pub district: Resolution<LocalizedName>,
    /// 区 (ตำบล / แขวง)
    pub sub_district: Resolution<LocalizedName>,
    /// 剩余详细地址
    pub remaining_address: String,
    /// 置信度，仅首都地址给出
    pub confidence: Option<f64>,
    /// 使用的解析策略
    pub strategy: Strategy,
    /// 是否由随机兜底得出
    pub recovered: bool,
}

impl ParsedAddress {
    /// 全部未解析的结果
    pub fn unresolved(original_address: impl Into<String>, strategy: Strategy) -> Self {
        Self {
            original_address: original_address.into(),
            parsed_address: String::new(),
            province: Resolution::Unresolved,
            district: Resolution::Unresolved,
            sub_district: Resolution::Unresolved,
            remaining_address: String::new(),
            confidence: None,
            strategy,
            recovered: false,
        }
    }

    pub fn has_province(&self) -> bool {
        self.province.is_resolved()
    }

    pub fn has_district(&self) -> bool {
        self.district.is_resolved()
    }

    pub fn has_sub_district(&self) -> bool {
        self.sub_district.is_resolved()
    }

    /// 是否完整解析（府县区都有）
    pub fn is_complete(&self) -> bool {
        self.has_province() && self.has_district() && self.has_sub_district()
    }

    /// 英文形式的地址：`<详细地址> <区>, <县>, <府>`
    pub fn translated_address(&self) -> String {
        let names: Vec<&str> = [&self.sub_district, &self.district, &self.province]
            .iter()
            .filter_map(|r| r.translated())
            .collect();
        let names = names.join(", ");
        match (self.remaining_address.is_empty(), names.is_empty()) {
            (true, _) => names,
            (false, true) => self.remaining_address.clone(),
            (false, false) => format!("{} {}", self.remaining_address, names),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(native: &str, translated: &str) -> Resolution<LocalizedName> {
        Resolution::Resolved(LocalizedName::new(native, translated))
    }

    #[test]
    fn test_resolution_helpers() {
        let r = resolved("ภูเก็ต", "Phuket");
        assert!(r.is_resolved());
        assert_eq!(r.native(), Some("ภูเก็ต"));
        assert_eq!(r.translated(), Some("Phuket"));

        let u: Resolution<LocalizedName> = Resolution::default();
        assert!(!u.is_resolved());
        assert_eq!(u.native(), None);
        assert_eq!(u.resolved(), None);
        assert_eq!(r.resolved().map(|n| n.translated), Some("Phuket".to_string()));
    }

    #[test]
    fn test_unresolved_address() {
        let addr = ParsedAddress::unresolved("12/3", Strategy::NoMarker);
        assert!(!addr.has_province());
        assert!(!addr.is_complete());
        assert_eq!(addr.parsed_address, "");
        assert_eq!(addr.translated_address(), "");
    }

    #[test]
    fn test_translated_address() {
        let addr = ParsedAddress {
            original_address: "5 ต.ป่าตอง อ.กะทู้ จ.ภูเก็ต".to_string(),
            parsed_address: "5 ต.ป่าตอง อ.กะทู้ จ.ภูเก็ต".to_string(),
            province: resolved("ภูเก็ต", "Phuket"),
            district: resolved("กะทู้", "Kathu"),
            sub_district: resolved("ป่าตอง", "Patong"),
            remaining_address: "5".to_string(),
            confidence: None,
            strategy: Strategy::Province,
            recovered: false,
        };
        assert!(addr.is_complete());
        assert_eq!(addr.translated_address(), "5 Patong, Kathu, Phuket");
    }
}
