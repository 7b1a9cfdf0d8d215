//! 错误类型定义

use std::path::PathBuf;
use thiserror::Error;

/// 词典加载错误
///
/// 只会在构建解析器时出现，解析过程本身没有错误路径。
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// 词典文件读取失败
    #[error("Failed to read dictionary file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON 格式不符合预期结构
    #[error("Malformed dictionary JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// 没有任何府
    #[error("Hierarchy contains no provinces")]
    EmptyHierarchy,

    /// 府下没有县
    #[error("Province has no districts: {0}")]
    EmptyProvince(String),

    /// 县下没有区
    #[error("District {district} of province {province} has no sub-districts")]
    EmptyDistrict { province: String, district: String },

    /// 名称为空白
    #[error("Blank name in province: {0}")]
    BlankName(String),

    /// 配置的首都字面量不是任何府名
    #[error("Capital province not found in hierarchy: {0}")]
    CapitalNotFound(String),

    /// 名称缺少翻译
    #[error("No translation for: {0}")]
    MissingTranslation(String),
}
