//! 解析失败时的随机兜底

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::hierarchy::{DistrictId, HierarchyStore, ProvinceId, SubDistrictId};
use rand::seq::SliceRandom;
use rand::Rng;

/// 兜底随机选择的范围
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RecoveryPolicy {
    /// 只在首都内选择
    Capital,
    /// 在首都以外的府中选择，没有其他府时放宽到全部
    OtherProvinces,
    /// 在全部府中选择
    AnyProvince,
}

impl RecoveryPolicy {
    /// 随机选出一个层级一致的区
    pub(crate) fn pick<R: Rng + ?Sized>(
        self,
        store: &HierarchyStore,
        rng: &mut R,
    ) -> Option<SubDistrictId> {
        let province = match self {
            RecoveryPolicy::Capital => Some(store.capital()),
            RecoveryPolicy::OtherProvinces => store.other_provinces().choose(rng).copied(),
            RecoveryPolicy::AnyProvince => {
                let all: Vec<ProvinceId> = store.province_ids().collect();
                all.choose(rng).copied()
            }
        };

        match province {
            Some(province) => {
                let district = random_district(store, province, rng)?;
                random_sub_district(store, district, rng)
            }
            None if self != RecoveryPolicy::AnyProvince => RecoveryPolicy::AnyProvince.pick(store, rng),
            None => None,
        }
    }
}

pub(crate) fn random_district<R: Rng + ?Sized>(
    store: &HierarchyStore,
    province: ProvinceId,
    rng: &mut R,
) -> Option<DistrictId> {
    store.province(province).districts.choose(rng).copied()
}

pub(crate) fn random_sub_district<R: Rng + ?Sized>(
    store: &HierarchyStore,
    district: DistrictId,
    rng: &mut R,
) -> Option<SubDistrictId> {
    store.district(district).sub_districts.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dictionary;
    use crate::resolver::test_support::{embedded_store, single_triple_dictionary};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_capital_policy_stays_in_capital() {
        let store = embedded_store();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..50 {
            let sub = RecoveryPolicy::Capital.pick(&store, &mut rng).unwrap();
            assert_eq!(store.lineage(sub).1, store.capital());
        }
    }

    #[test]
    fn test_other_provinces_policy_avoids_capital() {
        let store = embedded_store();
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..50 {
            let sub = RecoveryPolicy::OtherProvinces.pick(&store, &mut rng).unwrap();
            assert_ne!(store.lineage(sub).1, store.capital());
        }
    }

    #[test]
    fn test_any_province_policy_is_consistent() {
        let store = embedded_store();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..50 {
            let sub = RecoveryPolicy::AnyProvince.pick(&store, &mut rng).unwrap();
            let (district, province) = store.lineage(sub);
            assert!(store.province(province).districts.contains(&district));
            assert!(store.district(district).sub_districts.contains(&sub));
        }
    }

    #[test]
    fn test_other_provinces_widens_when_only_capital() {
        let dictionary: Dictionary = single_triple_dictionary();
        let store = HierarchyStore::build(&dictionary, "กรุงเทพมหานคร").unwrap();
        let mut rng = StdRng::seed_from_u64(4);

        let sub = RecoveryPolicy::OtherProvinces.pick(&store, &mut rng).unwrap();
        assert_eq!(store.sub_district(sub).name, "ลุมพินี");
    }

    #[test]
    fn test_same_seed_same_pick() {
        let store = embedded_store();
        let a = RecoveryPolicy::AnyProvince.pick(&store, &mut StdRng::seed_from_u64(9));
        let b = RecoveryPolicy::AnyProvince.pick(&store, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
