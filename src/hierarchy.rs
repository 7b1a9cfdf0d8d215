//! 府县区层级存储和索引构建

use crate::data::Dictionary;
use crate::error::DictionaryError;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// 府编号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProvinceId(usize);

/// 县编号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DistrictId(usize);

/// 区编号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubDistrictId(usize);

/// 府（จังหวัด）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Province {
    pub name: String,
    pub translated: String,
    /// 是否为首都（曼谷），首都不使用县区标记
    pub is_capital: bool,
    pub districts: Vec<DistrictId>,
}

/// 县（อำเภอ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct District {
    pub name: String,
    pub translated: String,
    /// 所属府
    pub province: ProvinceId,
    pub sub_districts: Vec<SubDistrictId>,
}

/// 区（ตำบล）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubDistrict {
    pub name: String,
    pub translated: String,
    /// 所属县
    pub district: DistrictId,
}

/// 只读层级存储
///
/// 启动时由词典构建一次，之后不再修改，可在线程间共享。
#[derive(Debug)]
pub struct HierarchyStore {
    provinces: Vec<Province>,
    districts: Vec<District>,
    sub_districts: Vec<SubDistrict>,
    capital: ProvinceId,
    /// 府名 -> 府
    province_index: HashMap<String, ProvinceId>,
    /// 县名 -> 县（不同府可能同名）
    district_index: HashMap<String, Vec<DistrictId>>,
    /// 区名 -> 区（不同县可能同名）
    sub_district_index: HashMap<String, Vec<SubDistrictId>>,
    capital_districts: Vec<DistrictId>,
    capital_sub_districts: Vec<SubDistrictId>,
    other_provinces: Vec<ProvinceId>,
    other_districts: Vec<DistrictId>,
    other_sub_districts: Vec<SubDistrictId>,
}

impl HierarchyStore {
    /// 从词典构建存储
    ///
    /// `capital` 为首都府名。结构不完整或缺少翻译时返回错误。
    pub fn build(dictionary: &Dictionary, capital: &str) -> Result<Self, DictionaryError> {
        if dictionary.hierarchy.is_empty() {
            return Err(DictionaryError::EmptyHierarchy);
        }

        let translate = |name: &str| {
            dictionary
                .translations
                .get(name)
                .cloned()
                .ok_or_else(|| DictionaryError::MissingTranslation(name.to_string()))
        };

        let mut provinces = Vec::new();
        let mut districts = Vec::new();
        let mut sub_districts = Vec::new();
        let mut capital_id = None;

        for (province_name, district_map) in &dictionary.hierarchy {
            if province_name.trim().is_empty() {
                return Err(DictionaryError::BlankName(province_name.clone()));
            }
            if district_map.is_empty() {
                return Err(DictionaryError::EmptyProvince(province_name.clone()));
            }

            let province_id = ProvinceId(provinces.len());
            let is_capital = province_name == capital;
            if is_capital {
                capital_id = Some(province_id);
            }

            let mut province_districts = Vec::with_capacity(district_map.len());
            for (district_name, sub_names) in district_map {
                if district_name.trim().is_empty() {
                    return Err(DictionaryError::BlankName(province_name.clone()));
                }
                if sub_names.is_empty() {
                    return Err(DictionaryError::EmptyDistrict {
                        province: province_name.clone(),
                        district: district_name.clone(),
                    });
                }

                let district_id = DistrictId(districts.len());
                let mut seen = HashSet::new();
                let mut district_subs = Vec::with_capacity(sub_names.len());
                for sub_name in sub_names {
                    if sub_name.trim().is_empty() {
                        return Err(DictionaryError::BlankName(province_name.clone()));
                    }
                    // 同一县内的重复区名合并
                    if !seen.insert(sub_name.as_str()) {
                        continue;
                    }
                    let sub_id = SubDistrictId(sub_districts.len());
                    sub_districts.push(SubDistrict {
                        name: sub_name.clone(),
                        translated: translate(sub_name)?,
                        district: district_id,
                    });
                    district_subs.push(sub_id);
                }

                districts.push(District {
                    name: district_name.clone(),
                    translated: translate(district_name)?,
                    province: province_id,
                    sub_districts: district_subs,
                });
                province_districts.push(district_id);
            }

            provinces.push(Province {
                name: province_name.clone(),
                translated: translate(province_name)?,
                is_capital,
                districts: province_districts,
            });
        }

        let capital = capital_id.ok_or_else(|| DictionaryError::CapitalNotFound(capital.to_string()))?;

        let province_index = provinces
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.clone(), ProvinceId(i)))
            .collect();

        let mut district_index: HashMap<String, Vec<DistrictId>> = HashMap::new();
        for (i, d) in districts.iter().enumerate() {
            district_index.entry(d.name.clone()).or_default().push(DistrictId(i));
        }

        let mut sub_district_index: HashMap<String, Vec<SubDistrictId>> = HashMap::new();
        for (i, s) in sub_districts.iter().enumerate() {
            sub_district_index
                .entry(s.name.clone())
                .or_default()
                .push(SubDistrictId(i));
        }

        let shared_names = sub_district_index.values().filter(|ids| ids.len() > 1).count();

        let mut store = Self {
            provinces,
            districts,
            sub_districts,
            capital,
            province_index,
            district_index,
            sub_district_index,
            capital_districts: Vec::new(),
            capital_sub_districts: Vec::new(),
            other_provinces: Vec::new(),
            other_districts: Vec::new(),
            other_sub_districts: Vec::new(),
        };
        store.partition();

        debug!(
            names = dictionary.name_count(),
            provinces = store.provinces.len(),
            districts = store.districts.len(),
            sub_districts = store.sub_districts.len(),
            shared_sub_district_names = shared_names,
            "hierarchy store built"
        );

        Ok(store)
    }

    /// 预先划分首都与其他府的县、区
    fn partition(&mut self) {
        for (i, province) in self.provinces.iter().enumerate() {
            let (districts, subs) = if province.is_capital {
                (&mut self.capital_districts, &mut self.capital_sub_districts)
            } else {
                self.other_provinces.push(ProvinceId(i));
                (&mut self.other_districts, &mut self.other_sub_districts)
            };
            for &district in &province.districts {
                districts.push(district);
                subs.extend_from_slice(&self.districts[district.0].sub_districts);
            }
        }
    }

    // ==================== 节点访问 ====================

    pub fn province(&self, id: ProvinceId) -> &Province {
        &self.provinces[id.0]
    }

    pub fn district(&self, id: DistrictId) -> &District {
        &self.districts[id.0]
    }

    pub fn sub_district(&self, id: SubDistrictId) -> &SubDistrict {
        &self.sub_districts[id.0]
    }

    /// 首都府
    pub fn capital(&self) -> ProvinceId {
        self.capital
    }

    // ==================== 精确查找 ====================

    pub fn find_province(&self, name: &str) -> Option<ProvinceId> {
        self.province_index.get(name).copied()
    }

    /// 按名称查找县，可能有多个同名县
    pub fn find_districts(&self, name: &str) -> &[DistrictId] {
        self.district_index.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// 按名称查找区，可能有多个同名区
    pub fn find_sub_districts(&self, name: &str) -> &[SubDistrictId] {
        self.sub_district_index
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    // ==================== 反向索引 ====================

    /// 县 -> 府
    pub fn province_of(&self, district: DistrictId) -> ProvinceId {
        self.district(district).province
    }

    /// 区 -> (县, 府)
    pub fn lineage(&self, sub_district: SubDistrictId) -> (DistrictId, ProvinceId) {
        let district = self.sub_district(sub_district).district;
        (district, self.province_of(district))
    }

    /// 按区名反查所有可能的 (县名, 府名)
    pub fn locate_sub_district(&self, name: &str) -> Vec<(&str, &str)> {
        self.find_sub_districts(name)
            .iter()
            .map(|&id| {
                let (district, province) = self.lineage(id);
                (
                    self.district(district).name.as_str(),
                    self.province(province).name.as_str(),
                )
            })
            .collect()
    }

    // ==================== 枚举 ====================

    pub fn province_ids(&self) -> impl Iterator<Item = ProvinceId> + '_ {
        (0..self.provinces.len()).map(ProvinceId)
    }

    pub fn province_names(&self) -> Vec<&str> {
        self.provinces.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn district_names(&self) -> Vec<&str> {
        self.districts.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn sub_district_names(&self) -> Vec<&str> {
        self.sub_districts.iter().map(|s| s.name.as_str()).collect()
    }

    /// 某府下的所有县名
    pub fn district_names_of(&self, province: &str) -> Vec<&str> {
        self.find_province(province)
            .map(|p| {
                self.province(p)
                    .districts
                    .iter()
                    .map(|&d| self.district(d).name.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// 某府某县下的所有区名
    pub fn sub_district_names_of(&self, province: &str, district: &str) -> Vec<&str> {
        self.find_district_in(province, district)
            .map(|d| {
                self.district(d)
                    .sub_districts
                    .iter()
                    .map(|&s| self.sub_district(s).name.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// 在指定府内按名称查找县
    pub fn find_district_in(&self, province: &str, district: &str) -> Option<DistrictId> {
        let province = self.find_province(province)?;
        self.find_districts(district)
            .iter()
            .copied()
            .find(|&d| self.province_of(d) == province)
    }

    /// 三级名称是否构成合法路径
    pub fn contains(&self, province: &str, district: &str, sub_district: &str) -> bool {
        self.find_district_in(province, district)
            .map(|d| {
                self.district(d)
                    .sub_districts
                    .iter()
                    .any(|&s| self.sub_district(s).name == sub_district)
            })
            .unwrap_or(false)
    }

    // ==================== 预划分 ====================

    pub fn capital_districts(&self) -> &[DistrictId] {
        &self.capital_districts
    }

    pub fn capital_sub_districts(&self) -> &[SubDistrictId] {
        &self.capital_sub_districts
    }

    pub fn other_provinces(&self) -> &[ProvinceId] {
        &self.other_provinces
    }

    pub fn other_districts(&self) -> &[DistrictId] {
        &self.other_districts
    }

    pub fn other_sub_districts(&self) -> &[SubDistrictId] {
        &self.other_sub_districts
    }
}
