//! 地址解析器核心实现

use crate::config::ParserConfig;
use crate::data::Dictionary;
use crate::error::DictionaryError;
use crate::hierarchy::HierarchyStore;
use crate::region::{LocalizedName, ParsedAddress, Resolution};
use crate::resolver::{exact_or_closest, resolve, Outcome};
use crate::segmenter::{MarkerKind, Segmenter};
use crate::workspace::ParseWorkspace;
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// 全局解析器实例
static GLOBAL_PARSER: Lazy<AddressParser> = Lazy::new(|| {
    AddressParser::embedded().expect("embedded dictionary must be well-formed")
});

/// 地址解析器
///
/// 只持有不可变的层级数据和配置，可在多个线程间共享；每次解析的状态都在调用内新建。
#[derive(Debug)]
pub struct AddressParser {
    store: HierarchyStore,
    config: ParserConfig,
}

impl AddressParser {
    /// 使用默认配置从词典创建解析器
    pub fn new(dictionary: &Dictionary) -> Result<Self, DictionaryError> {
        Self::with_config(dictionary, ParserConfig::default())
    }

    pub fn with_config(dictionary: &Dictionary, config: ParserConfig) -> Result<Self, DictionaryError> {
        let store = HierarchyStore::build(dictionary, &config.markers.capital)?;
        debug!(seeded = config.fallback_seed.is_some(), "address parser ready");
        Ok(Self { store, config })
    }

    /// 使用内置词典创建解析器
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::new(&Dictionary::embedded()?)
    }

    /// 获取全局解析器实例（内置词典）
    pub fn global() -> &'static AddressParser {
        &GLOBAL_PARSER
    }

    /// 解析地址字符串
    ///
    /// 对任何输入都返回结果，不会失败。配置了 `fallback_seed` 时兜底随机选择可复现。
    ///
    /// # 示例
    /// ```rust
    /// use thai_address_parser::AddressParser;
    ///
    /// let parser = AddressParser::embedded().unwrap();
    /// let result = parser.parse("99/1 ถนนห้วยแก้ว ต.สุเทพ อ.เมืองเชียงใหม่ จ.เชียงใหม่ 50200");
    /// assert_eq!(result.province.native(), Some("เชียงใหม่"));
    /// assert_eq!(result.district.translated(), Some("Mueang Chiang Mai"));
    /// assert_eq!(result.remaining_address, "99/1 ถนนห้วยแก้ว");
    /// ```
    pub fn parse(&self, address: &str) -> ParsedAddress {
        match self.config.fallback_seed {
            Some(seed) => self.parse_with_rng(address, &mut StdRng::seed_from_u64(seed)),
            None => self.parse_with_rng(address, &mut rand::thread_rng()),
        }
    }

    /// 使用指定随机源解析
    pub fn parse_with_rng<R: Rng + ?Sized>(&self, address: &str, rng: &mut R) -> ParsedAddress {
        let tokens = Segmenter::new(&self.config.markers).segment(address);
        let workspace = ParseWorkspace::build(tokens);
        let outcome = resolve(&self.store, &workspace, rng);
        self.assemble(address, outcome)
    }

    fn assemble(&self, address: &str, outcome: Outcome) -> ParsedAddress {
        let Some(placement) = outcome.placement else {
            return ParsedAddress::unresolved(address, outcome.strategy);
        };

        let store = &self.store;
        let (district, province) = store.lineage(placement.sub_district);
        let sub_district = store.sub_district(placement.sub_district);
        let district = store.district(district);
        let province = store.province(province);

        let parsed_address = join_parts([
            placement.detail.clone(),
            self.label(province.is_capital, MarkerKind::SubDistrict, &sub_district.name),
            self.label(province.is_capital, MarkerKind::District, &district.name),
            self.label(province.is_capital, MarkerKind::Province, &province.name),
        ]);

        ParsedAddress {
            original_address: address.to_string(),
            parsed_address,
            province: Resolution::Resolved(LocalizedName::new(&province.name, &province.translated)),
            district: Resolution::Resolved(LocalizedName::new(&district.name, &district.translated)),
            sub_district: Resolution::Resolved(LocalizedName::new(
                &sub_district.name,
                &sub_district.translated,
            )),
            remaining_address: placement.detail,
            confidence: placement.confidence,
            strategy: outcome.strategy,
            recovered: outcome.recovered,
        }
    }

    /// 首都地址不加层级前缀
    fn label(&self, capital: bool, kind: MarkerKind, name: &str) -> String {
        if capital {
            name.to_string()
        } else {
            self.config.markers.prefixed(kind, name)
        }
    }

    /// 标准化地址
    ///
    /// 将书写不规范的府、县、区名逐级匹配为标准名称（县在府内、区在县内查找），
    /// 按 `区 县 府` 的顺序拼接；非首都地址加上 ต./อ./จ. 前缀。
    ///
    /// # 示例
    /// ```rust
    /// use thai_address_parser::AddressParser;
    ///
    /// let parser = AddressParser::embedded().unwrap();
    /// let full = parser.normalize("เชียงให", "เมืองเชียงใหม", Some("สุเทบ"));
    /// assert_eq!(full, "ต.สุเทพ อ.เมืองเชียงใหม่ จ.เชียงใหม่");
    /// ```
    pub fn normalize(
        &self,
        province: impl AsRef<str>,
        district: impl AsRef<str>,
        sub_district: Option<&str>,
    ) -> String {
        let store = &self.store;
        let provinces: Vec<_> = store.province_ids().collect();

        let Some(province) = exact_or_closest(store, province.as_ref(), &provinces) else {
            return join_parts([
                sub_district.unwrap_or_default().to_string(),
                district.as_ref().to_string(),
                province.as_ref().to_string(),
            ]);
        };
        let province = store.province(province.id);
        let label = |kind: MarkerKind, name: &str| self.label(province.is_capital, kind, name);

        let district = exact_or_closest(store, district.as_ref(), &province.districts)
            .map(|m| store.district(m.id));
        let sub_district = match (district, sub_district) {
            (Some(d), Some(query)) => {
                exact_or_closest(store, query, &d.sub_districts).map(|m| store.sub_district(m.id))
            }
            _ => None,
        };

        join_parts([
            sub_district.map_or_else(String::new, |s| label(MarkerKind::SubDistrict, &s.name)),
            district.map_or_else(String::new, |d| label(MarkerKind::District, &d.name)),
            label(MarkerKind::Province, &province.name),
        ])
    }

    /// 批量解析地址
    pub fn parse_batch(&self, addresses: &[&str]) -> Vec<ParsedAddress> {
        addresses.iter().map(|a| self.parse(a)).collect()
    }

    /// 检查地址是否有效（无需随机兜底即可解析出府）
    pub fn is_valid_address(&self, address: &str) -> bool {
        let result = self.parse(address);
        result.has_province() && !result.recovered
    }

    /// 获取所有府列表
    pub fn provinces(&self) -> Vec<&str> {
        self.store.province_names()
    }

    /// 获取某府下的所有县
    pub fn districts_of_province(&self, province: &str) -> Vec<&str> {
        self.store.district_names_of(province)
    }

    /// 获取某府某县下的所有区
    pub fn sub_districts_of_district(&self, province: &str, district: &str) -> Vec<&str> {
        self.store.sub_district_names_of(province, district)
    }

    pub fn store(&self) -> &HierarchyStore {
        &self.store
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }
}

/// 以单个空格连接非空部分
fn join_parts<const N: usize>(parts: [String; N]) -> String {
    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
