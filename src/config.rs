//! 解析器配置

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::segmenter::MarkerKind;

/// 首都（曼谷）字面量，同时也是首都府的名称
pub const CAPITAL_LITERAL: &str = "กรุงเทพมหานคร";

/// 府（จังหวัด）标记
pub const PROVINCE_MARKER: &str = "จ.";

/// 县（อำเภอ）标记
pub const DISTRICT_MARKER: &str = "อ.";

/// 区（ตำบล）标记
pub const SUB_DISTRICT_MARKER: &str = "ต.";

/// 切分时按此顺序查找标记
pub const MARKER_PRIORITY: [MarkerKind; 4] = [
    MarkerKind::Capital,
    MarkerKind::Province,
    MarkerKind::District,
    MarkerKind::SubDistrict,
];

/// 层级标记字面量
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Markers {
    pub province: String,
    pub district: String,
    pub sub_district: String,
    /// 首都字面量，必须与词典中首都府的名称一致
    pub capital: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            province: PROVINCE_MARKER.to_string(),
            district: DISTRICT_MARKER.to_string(),
            sub_district: SUB_DISTRICT_MARKER.to_string(),
            capital: CAPITAL_LITERAL.to_string(),
        }
    }
}

impl Markers {
    /// 某类标记对应的字面量，`Plain` 没有字面量
    pub fn literal(&self, kind: MarkerKind) -> Option<&str> {
        match kind {
            MarkerKind::Province => Some(&self.province),
            MarkerKind::District => Some(&self.district),
            MarkerKind::SubDistrict => Some(&self.sub_district),
            MarkerKind::Capital => Some(&self.capital),
            MarkerKind::Plain => None,
        }
    }

    /// 按优先级查找第一个出现的标记
    ///
    /// 返回 (标记类型, 字节偏移)
    pub fn find(&self, text: &str) -> Option<(MarkerKind, usize)> {
        MARKER_PRIORITY.iter().find_map(|&kind| {
            let literal = self.literal(kind)?;
            if literal.is_empty() {
                return None;
            }
            text.find(literal).map(|at| (kind, at))
        })
    }

    /// 取出词元内出现的全部标记及其值，按出现位置排序
    ///
    /// 每个值截止到下一个标记之前。首都字面量只有在词元与之完全相同时才算命中。
    pub fn classify(&self, text: &str) -> Vec<(MarkerKind, String)> {
        if !self.capital.is_empty() && text == self.capital {
            return vec![(MarkerKind::Capital, self.capital.clone())];
        }

        let mut found: Vec<(usize, MarkerKind, usize)> =
            [MarkerKind::Province, MarkerKind::District, MarkerKind::SubDistrict]
                .into_iter()
                .filter_map(|kind| {
                    let literal = self.literal(kind).filter(|l| !l.is_empty())?;
                    text.find(literal).map(|at| (at, kind, at + literal.len()))
                })
                .collect();
        found.sort_by_key(|&(at, _, _)| at);

        found
            .iter()
            .enumerate()
            .map(|(i, &(_, kind, start))| {
                let end = found.get(i + 1).map_or(text.len(), |&(next, _, _)| next.max(start));
                (kind, text[start..end].to_string())
            })
            .collect()
    }

    /// 规范化输出时给名称加上层级前缀
    pub fn prefixed(&self, kind: MarkerKind, name: &str) -> String {
        match kind {
            MarkerKind::Capital | MarkerKind::Plain => name.to_string(),
            _ => format!("{}{}", self.literal(kind).unwrap_or_default(), name),
        }
    }
}

/// 解析器配置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ParserConfig {
    /// 层级标记
    pub markers: Markers,
    /// 兜底随机选择使用的固定种子；为空时使用线程随机源
    pub fallback_seed: Option<u64>,
}

impl ParserConfig {
    /// 使用默认泰文标记创建配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置层级标记
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// 固定兜底随机种子，使结果可复现
    pub fn with_fallback_seed(mut self, seed: u64) -> Self {
        self.fallback_seed = Some(seed);
        self
    }

    /// 从 JSON 读取配置，缺省字段取默认值
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, crate::DictionaryError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_marker_priority() {
        let markers = Markers::default();

        assert_eq!(markers.find("ต.สุเทพ"), Some((MarkerKind::SubDistrict, 0)));
        // 府标记优先于区标记，即使它出现在后面
        let text = "ต.สุเทพจ.เชียงใหม่";
        let at = text.find("จ.").unwrap();
        assert_eq!(markers.find(text), Some((MarkerKind::Province, at)));
        assert_eq!(markers.find("ถนนห้วยแก้ว"), None);
    }

    #[test]
    fn test_classify() {
        let markers = Markers::default();

        assert_eq!(
            markers.classify("อ.เมืองเชียงใหม่"),
            vec![(MarkerKind::District, "เมืองเชียงใหม่".to_string())]
        );
        assert_eq!(
            markers.classify("กรุงเทพมหานคร"),
            vec![(MarkerKind::Capital, "กรุงเทพมหานคร".to_string())]
        );
        assert!(markers.classify("99/1").is_empty());
    }

    #[test]
    fn test_classify_several_markers_in_one_token() {
        let markers = Markers::default();

        // 每个值截止到下一个标记
        assert_eq!(
            markers.classify("ต.สุเทพอ.เมืองเชียงใหม่"),
            vec![
                (MarkerKind::SubDistrict, "สุเทพ".to_string()),
                (MarkerKind::District, "เมืองเชียงใหม่".to_string()),
            ]
        );
        assert_eq!(
            markers.classify("อ.เมืองเชียงใหม่จ.เชียงใหม่"),
            vec![
                (MarkerKind::District, "เมืองเชียงใหม่".to_string()),
                (MarkerKind::Province, "เชียงใหม่".to_string()),
            ]
        );
        assert_eq!(markers.classify("ต.ป่าตองอ.กะทู้จ.ภูเก็ต").len(), 3);
    }

    #[test]
    fn test_classify_capital_needs_whole_token() {
        let markers = Markers::default();

        assert!(markers.classify("อาคารกรุงเทพมหานคร").is_empty());
        assert!(markers.classify("กรุงเทพมหานครกรุงเทพมหานคร").is_empty());
        assert_eq!(
            markers.classify("ต.ในกรุงเทพมหานคร"),
            vec![(MarkerKind::SubDistrict, "ในกรุงเทพมหานคร".to_string())]
        );
    }

    #[test]
    fn test_prefixed() {
        let markers = Markers::default();

        assert_eq!(markers.prefixed(MarkerKind::Province, "ภูเก็ต"), "จ.ภูเก็ต");
        assert_eq!(markers.prefixed(MarkerKind::SubDistrict, "ป่าตอง"), "ต.ป่าตอง");
        assert_eq!(markers.prefixed(MarkerKind::Capital, "กรุงเทพมหานคร"), "กรุงเทพมหานคร");
    }

    #[test]
    fn test_builder() {
        let config = ParserConfig::new().with_fallback_seed(7);
        assert_eq!(config.fallback_seed, Some(7));
        assert_eq!(config.markers, Markers::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_defaults() {
        let config = ParserConfig::from_json(r#"{"fallback_seed": 3}"#).unwrap();
        assert_eq!(config.fallback_seed, Some(3));
        assert_eq!(config.markers.province, PROVINCE_MARKER);
    }
}
