//! # Thai Address Parser
//!
//! 泰国地址解析库，从自由文本地址中提取府 (จังหวัด)、县 (อำเภอ) 和区 (ตำบล)。
//!
//! ## 功能特性
//!
//! - 识别 จ./อ./ต. 层级标记，标记可以紧贴在前一个字段后面
//! - 曼谷地址（กรุงเทพมหานคร）按位置回看县、区，并给出置信度
//! - 没有任何标记时按位置推断
//! - 基于相似度的容错匹配，可处理错别字
//! - 查找失败时按策略随机兜底，任何输入都能得到结果
//! - 泰文、英文双语输出
//!
//! ## 快速开始
//!
//! ```rust
//! use thai_address_parser::AddressParser;
//!
//! let parser = AddressParser::embedded().unwrap();
//!
//! // 带层级标记的地址
//! let result = parser.parse("99/1 ถนนห้วยแก้ว ต.สุเทพ อ.เมืองเชียงใหม่ จ.เชียงใหม่ 50200");
//! assert_eq!(result.province.native(), Some("เชียงใหม่"));
//! assert_eq!(result.district.native(), Some("เมืองเชียงใหม่"));
//! assert_eq!(result.sub_district.translated(), Some("Suthep"));
//! assert_eq!(result.remaining_address, "99/1 ถนนห้วยแก้ว");
//!
//! // 曼谷地址
//! let result = parser.parse("123 ซอยสุขุมวิท ลุมพินี ปทุมวัน กรุงเทพมหานคร 10330");
//! assert_eq!(result.district.native(), Some("ปทุมวัน"));
//! assert_eq!(result.confidence, Some(1.0));
//!
//! // 标准化地址
//! let full = parser.normalize("ภูเก็ต", "กะทู้", Some("ป่าตอง"));
//! assert_eq!(full, "ต.ป่าตอง อ.กะทู้ จ.ภูเก็ต");
//! ```
//!
//! ## 自定义词典
//!
//! ```rust
//! use thai_address_parser::{AddressParser, Dictionary};
//!
//! let dictionary = Dictionary::from_json(
//!     r#"{"กรุงเทพมหานคร": {"ปทุมวัน": ["ลุมพินี"]}, "ภูเก็ต": {"กะทู้": ["ป่าตอง"]}}"#,
//!     r#"{"กรุงเทพมหานคร": "Bangkok", "ปทุมวัน": "Pathum Wan", "ลุมพินี": "Lumphini",
//!         "ภูเก็ต": "Phuket", "กะทู้": "Kathu", "ป่าตอง": "Patong"}"#,
//! )
//! .unwrap();
//! let parser = AddressParser::new(&dictionary).unwrap();
//! assert!(parser.is_valid_address("ต.ป่าตอง อ.กะทู้ จ.ภูเก็ต"));
//! ```

mod config;
mod data;
mod error;
mod hierarchy;
mod parser;
mod region;
mod resolver;
mod segmenter;
mod similarity;
mod workspace;

pub use config::{Markers, ParserConfig};
pub use data::{Dictionary, Hierarchy};
pub use error::DictionaryError;
pub use hierarchy::{
    District, DistrictId, HierarchyStore, Province, ProvinceId, SubDistrict, SubDistrictId,
};
pub use parser::AddressParser;
pub use region::{LocalizedName, ParsedAddress, Resolution};
pub use resolver::{RecoveryPolicy, Strategy};
pub use segmenter::{MarkerKind, Segmenter, Token};
pub use similarity::similarity;
pub use workspace::is_thai;

/// 便捷函数：使用全局解析器解析地址
///
/// ```rust
/// let result = thai_address_parser::parse("ต.ป่าตอง อ.กะทู้ จ.ภูเก็ต");
/// assert_eq!(result.province.translated(), Some("Phuket"));
/// ```
pub fn parse(address: &str) -> ParsedAddress {
    AddressParser::global().parse(address)
}

/// 便捷函数：标准化地址
///
/// ```rust
/// let full = thai_address_parser::normalize("กรุงเทพมหานคร", "บางรัก", Some("สีลม"));
/// assert_eq!(full, "สีลม บางรัก กรุงเทพมหานคร");
/// ```
pub fn normalize(
    province: impl AsRef<str>,
    district: impl AsRef<str>,
    sub_district: Option<&str>,
) -> String {
    AddressParser::global().normalize(province, district, sub_district)
}
