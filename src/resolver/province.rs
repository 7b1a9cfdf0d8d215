//! 外府地址解析（带 จ./อ./ต. 标记）
//!
//! 由具体到一般做约束传播：先用精确命中的府、县缩小区的范围，区精确命中即可
//! 反推县和府；否则依次确定府、府内的县、县内的区，每一级都先精确后相似度，
//! 某级没有标记值时改用上一级锚点前面的词元做相似度查询。

use super::matching::{closest, exact_or_closest, resolve_hits, Named};
use super::recovery::{random_district, random_sub_district};
use super::{Placement, Session};
use crate::hierarchy::{DistrictId, ProvinceId, SubDistrictId};
use crate::segmenter::MarkerKind;
use crate::similarity::similarity;
use crate::workspace::{longest, Hit};
use rand::Rng;

impl<R: Rng + ?Sized> Session<'_, R> {
    pub(super) fn province(&mut self) -> Option<Placement> {
        let store = self.store;
        let workspace = self.workspace;
        let province_hits = workspace.hits(MarkerKind::Province);
        let district_hits = workspace.hits(MarkerKind::District);
        let sub_hits = workspace.hits(MarkerKind::SubDistrict);

        // ==================== 精确交集 ====================

        let exact_provinces: Vec<(ProvinceId, usize)> = province_hits
            .iter()
            .filter_map(|h| {
                let id = store.find_province(&h.value)?;
                (!store.province(id).is_capital).then_some((id, h.position))
            })
            .collect();
        let province_in_scope = &|p: ProvinceId| {
            if exact_provinces.is_empty() {
                !store.province(p).is_capital
            } else {
                exact_provinces.iter().any(|&(q, _)| q == p)
            }
        };

        let exact_districts: Vec<(DistrictId, usize)> = district_hits
            .iter()
            .flat_map(move |h| {
                store
                    .find_districts(&h.value)
                    .iter()
                    .filter(move |&&d| province_in_scope(store.province_of(d)))
                    .map(move |&d| (d, h.position))
            })
            .collect();
        let sub_district_in_scope = &|s: SubDistrictId| {
            let (district, province) = store.lineage(s);
            if exact_districts.is_empty() {
                province_in_scope(province)
            } else {
                exact_districts.iter().any(|&(d, _)| d == district)
            }
        };

        let exact_subs: Vec<(SubDistrictId, usize)> = sub_hits
            .iter()
            .flat_map(move |h| {
                store
                    .find_sub_districts(&h.value)
                    .iter()
                    .copied()
                    .filter(move |&s| sub_district_in_scope(s))
                    .map(move |s| (s, h.position))
            })
            .collect();

        if let Some((sub_district, position)) = self.rank_by_lineage(&exact_subs) {
            let (district, province) = store.lineage(sub_district);
            let mut trail = vec![position];
            trail.extend(positions_of(&exact_provinces, province));
            trail.extend(positions_of(&exact_districts, district));
            return self.place(sub_district, &trail);
        }

        // ==================== 府 ====================

        let province = match exact_provinces.first() {
            Some(&(id, position)) => Some((id, position)),
            None => match longest(province_hits) {
                Some(hit) => {
                    let m = closest(store, &hit.value, store.other_provinces())?;
                    Some((m.id, hit.position))
                }
                None => None,
            },
        };

        let mut trail: Vec<usize> = province.iter().map(|&(_, position)| position).collect();

        // ==================== 县 ====================

        let district_scope: &[DistrictId] = match province {
            Some((id, _)) => &store.province(id).districts,
            None => store.other_districts(),
        };

        let (district, district_anchor) = if !district_hits.is_empty() {
            let (m, position) = resolve_hits(store, district_hits, district_scope)?;
            (m.id, Some(position))
        } else if !sub_hits.is_empty() {
            // 没有县标记：直接在整个范围内找区，县由区反推
            let sub_scope: Vec<SubDistrictId> = district_scope
                .iter()
                .flat_map(|&d| store.district(d).sub_districts.iter().copied())
                .collect();
            let hit = longest(sub_hits)?;
            let m = exact_or_closest(store, &hit.value, &sub_scope)?;
            trail.push(hit.position);
            return self.place(m.id, &trail);
        } else {
            let (province_id, province_anchor) = province?;
            match province_anchor.checked_sub(1) {
                Some(position) => {
                    let text = workspace.script_text(position)?;
                    (exact_or_closest(store, text, district_scope)?.id, Some(position))
                }
                None => (random_district(store, province_id, &mut *self.rng)?, None),
            }
        };
        trail.extend(district_anchor);

        // ==================== 区 ====================

        let sub_districts = &store.district(district).sub_districts;
        let sub_district = if !sub_hits.is_empty() {
            let (m, position) = resolve_hits(store, sub_hits, sub_districts)?;
            trail.push(position);
            m.id
        } else {
            match district_anchor.and_then(|a| a.checked_sub(1)) {
                Some(position) => {
                    let text = workspace.script_text(position)?;
                    trail.push(position);
                    exact_or_closest(store, text, sub_districts)?.id
                }
                None => random_sub_district(store, district, &mut *self.rng)?,
            }
        };

        self.place(sub_district, &trail)
    }

    /// 同名区有多个时，取县名、府名与标记值最相近者，同分取靠前者
    fn rank_by_lineage(&self, candidates: &[(SubDistrictId, usize)]) -> Option<(SubDistrictId, usize)> {
        let store = self.store;
        let workspace = self.workspace;
        let affinity = |hits: &[Hit], name: &str| {
            hits.iter()
                .map(|h| similarity(&h.value, name))
                .fold(0.0_f64, f64::max)
        };

        let mut best: Option<((SubDistrictId, usize), f64)> = None;
        for &candidate in candidates {
            let (district, province) = store.lineage(candidate.0);
            let score = affinity(workspace.hits(MarkerKind::District), district.name(store))
                + affinity(workspace.hits(MarkerKind::Province), province.name(store));
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((candidate, score));
            }
        }
        best.map(|(candidate, _)| candidate)
    }

    /// 详细地址取参与解析的最靠前词元之前的部分
    fn place(&self, sub_district: SubDistrictId, trail: &[usize]) -> Option<Placement> {
        let earliest = trail.iter().copied().min()?;
        Some(Placement {
            sub_district,
            detail: self.workspace.detail_before(earliest)?,
            confidence: None,
        })
    }
}

fn positions_of<T: PartialEq + Copy>(hits: &[(T, usize)], id: T) -> impl Iterator<Item = usize> + '_ {
    hits.iter()
        .filter(move |&&(h, _)| h == id)
        .map(|&(_, position)| position)
}
