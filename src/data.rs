//! 词典数据加载

use crate::error::DictionaryError;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// 内嵌的府县区层级数据（编译时包含）
const HIERARCHY_DATA: &str = include_str!("../data/th_hierarchy.json");

/// 内嵌的泰英名称对照表
const TRANSLATION_DATA: &str = include_str!("../data/th_en.json");

/// 府 -> 县 -> [区]
///
/// 使用有序映射，保证遍历顺序和兜底随机选择在同一种子下可复现。
pub type Hierarchy = BTreeMap<String, BTreeMap<String, Vec<String>>>;

/// 外部提供的原始词典
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    /// 层级数据
    pub hierarchy: Hierarchy,
    /// 泰文名 -> 英文名
    pub translations: HashMap<String, String>,
}

impl Dictionary {
    /// 直接由内存数据构建
    pub fn new(hierarchy: Hierarchy, translations: HashMap<String, String>) -> Self {
        Self {
            hierarchy,
            translations,
        }
    }

    /// 从两段 JSON 文本解析
    ///
    /// `hierarchy` 形如 `{"府": {"县": ["区", ...]}}`，
    /// `translations` 形如 `{"泰文名": "英文名"}`。
    pub fn from_json(hierarchy: &str, translations: &str) -> Result<Self, DictionaryError> {
        Ok(Self {
            hierarchy: serde_json::from_str(hierarchy)?,
            translations: serde_json::from_str(translations)?,
        })
    }

    /// 从两个 JSON 文件读取
    pub fn from_files(
        hierarchy: impl AsRef<Path>,
        translations: impl AsRef<Path>,
    ) -> Result<Self, DictionaryError> {
        let hierarchy = read(hierarchy.as_ref())?;
        let translations = read(translations.as_ref())?;
        Self::from_json(&hierarchy, &translations)
    }

    /// 内嵌的示例词典
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::from_json(HIERARCHY_DATA, TRANSLATION_DATA)
    }

    /// 层级中的名称总数（各层分别计数）
    pub fn name_count(&self) -> usize {
        self.hierarchy
            .values()
            .map(|districts| {
                1 + districts
                    .values()
                    .map(|subs| 1 + subs.len())
                    .sum::<usize>()
            })
            .sum()
    }
}

fn read(path: &Path) -> Result<String, DictionaryError> {
    fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })
}
