//! 首都地址解析
//!
//! 曼谷地址不写 อ./ต. 标记，县、区名直接写在首都字面量之前：
//! `... <区> <县> กรุงเทพมหานคร`。从首都字面量向前回看至多两个泰文词元找县，
//! 再从县的位置向前回看至多两个词元找区。

use super::matching::{closest, exact, Match, Named};
use super::recovery::random_sub_district;
use super::{Placement, Session};
use crate::hierarchy::DistrictId;
use rand::seq::SliceRandom;
use rand::Rng;

impl<R: Rng + ?Sized> Session<'_, R> {
    /// 对每个首都字面量分别解析，取置信度最高者，同分时靠后的胜出
    pub(super) fn capital(&mut self) -> Option<Placement> {
        let workspace = self.workspace;
        let mut best: Option<Placement> = None;

        for &anchor in workspace.capitals() {
            let candidate = self.capital_at(anchor)?;
            let better = best
                .as_ref()
                .map_or(true, |b| candidate.confidence >= b.confidence);
            if better {
                best = Some(candidate);
            }
        }

        best
    }

    fn capital_at(&mut self, anchor: usize) -> Option<Placement> {
        let store = self.store;
        let districts = store.capital_districts();

        if anchor == 0 {
            // 首都字面量前没有任何泰文词元
            let district = *districts.choose(&mut *self.rng)?;
            return Some(Placement {
                sub_district: random_sub_district(store, district, &mut *self.rng)?,
                detail: self.workspace.detail_before(anchor)?,
                confidence: Some(0.0),
            });
        }

        let (district, district_anchor) = self.look_back(anchor, districts)?;
        let mut placement = self.capital_sub_district(district.id, district_anchor)?;
        placement.confidence = placement.confidence.map(|c| c * district.score);
        Some(placement)
    }

    fn capital_sub_district(&mut self, district: DistrictId, anchor: usize) -> Option<Placement> {
        let store = self.store;

        if anchor == 0 {
            return Some(Placement {
                sub_district: random_sub_district(store, district, &mut *self.rng)?,
                detail: self.workspace.detail_before(anchor)?,
                confidence: Some(0.0),
            });
        }

        let sub_districts = &store.district(district).sub_districts;
        let (sub_district, position) = self.look_back(anchor, sub_districts)?;
        Some(Placement {
            sub_district: sub_district.id,
            detail: self.workspace.detail_before(position)?,
            confidence: Some(sub_district.score),
        })
    }

    /// 在 `anchor` 之前一到两个泰文词元中寻找候选
    ///
    /// 依次尝试：前一个精确命中、前两个精确命中、两者各自的最佳相似度取较高者
    /// （同分取前一个）。返回匹配和所用词元的位置。
    fn look_back<T: Named>(&self, anchor: usize, candidates: &[T]) -> Option<(Match<T>, usize)> {
        let store = self.store;
        let near_position = anchor.checked_sub(1)?;
        let near = self.workspace.script_text(near_position)?;
        if let Some(id) = exact(store, near, candidates) {
            return Some((Match { id, score: 1.0 }, near_position));
        }

        let Some(far_position) = anchor.checked_sub(2) else {
            return closest(store, near, candidates).map(|m| (m, near_position));
        };
        let far = self.workspace.script_text(far_position)?;
        if let Some(id) = exact(store, far, candidates) {
            return Some((Match { id, score: 1.0 }, far_position));
        }

        let near_match = closest(store, near, candidates)?;
        let far_match = closest(store, far, candidates)?;
        if near_match.score >= far_match.score {
            Some((near_match, near_position))
        } else {
            Some((far_match, far_position))
        }
    }
}
