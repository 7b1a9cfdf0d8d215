//! 候选匹配：精确 -> 相似度

use crate::hierarchy::{DistrictId, HierarchyStore, ProvinceId, SubDistrictId};
use crate::similarity::similarity;
use crate::workspace::{longest, Hit};
use tracing::trace;

/// 可按名称比较的层级节点
pub(crate) trait Named: Copy {
    fn name(self, store: &HierarchyStore) -> &str;
}

impl Named for ProvinceId {
    fn name(self, store: &HierarchyStore) -> &str {
        &store.province(self).name
    }
}

impl Named for DistrictId {
    fn name(self, store: &HierarchyStore) -> &str {
        &store.district(self).name
    }
}

impl Named for SubDistrictId {
    fn name(self, store: &HierarchyStore) -> &str {
        &store.sub_district(self).name
    }
}

/// 匹配结果及得分，精确匹配得 1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Match<T> {
    pub id: T,
    pub score: f64,
}

pub(crate) fn exact<T: Named>(store: &HierarchyStore, query: &str, candidates: &[T]) -> Option<T> {
    candidates.iter().copied().find(|&c| c.name(store) == query)
}

/// 相似度最高的候选，同分取靠前者；候选为空时返回 None
pub(crate) fn closest<T: Named>(
    store: &HierarchyStore,
    query: &str,
    candidates: &[T],
) -> Option<Match<T>> {
    let mut best: Option<Match<T>> = None;
    for &id in candidates {
        let score = similarity(query, id.name(store));
        if best.map_or(true, |b| score > b.score) {
            best = Some(Match { id, score });
        }
    }
    if let Some(m) = best {
        trace!(query, matched = m.id.name(store), score = m.score, "closest candidate");
    }
    best
}

pub(crate) fn exact_or_closest<T: Named>(
    store: &HierarchyStore,
    query: &str,
    candidates: &[T],
) -> Option<Match<T>> {
    match exact(store, query, candidates) {
        Some(id) => Some(Match { id, score: 1.0 }),
        None => closest(store, query, candidates),
    }
}

/// 第一个精确命中候选的标记值，返回 (候选, 位置)
pub(crate) fn first_exact<T: Named>(
    store: &HierarchyStore,
    hits: &[Hit],
    candidates: &[T],
) -> Option<(T, usize)> {
    hits.iter()
        .find_map(|h| exact(store, &h.value, candidates).map(|id| (id, h.position)))
}

/// 先找精确命中，否则以最长的标记值做相似度查询
pub(crate) fn resolve_hits<T: Named>(
    store: &HierarchyStore,
    hits: &[Hit],
    candidates: &[T],
) -> Option<(Match<T>, usize)> {
    if let Some((id, position)) = first_exact(store, hits, candidates) {
        return Some((Match { id, score: 1.0 }, position));
    }
    let hit = longest(hits)?;
    closest(store, &hit.value, candidates).map(|m| (m, hit.position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::test_support::embedded_store;

    #[test]
    fn test_exact_and_closest() {
        let store = embedded_store();
        let phuket = store.find_province("ภูเก็ต").unwrap();
        let districts = &store.province(phuket).districts;

        let m = exact_or_closest(&store, "กะทู้", districts).unwrap();
        assert_eq!(m.score, 1.0);
        assert_eq!(m.id.name(&store), "กะทู้");

        let m = exact_or_closest(&store, "เมืองภูเก็ด", districts).unwrap();
        assert!(m.score < 1.0);
        assert_eq!(m.id.name(&store), "เมืองภูเก็ต");

        assert!(exact(&store, "ป่าตอง", districts).is_none());
        assert!(closest::<DistrictId>(&store, "ป่าตอง", &[]).is_none());
    }

    #[test]
    fn test_closest_keeps_first_on_tie() {
        let store = embedded_store();
        let provinces: Vec<ProvinceId> = store.province_ids().collect();

        // 与所有府名都没有公共字符时，得分全为 0，取第一个
        let m = closest(&store, "xyz", &provinces).unwrap();
        assert_eq!(m.score, 0.0);
        assert_eq!(m.id, provinces[0]);
    }

    #[test]
    fn test_resolve_hits() {
        let store = embedded_store();
        let provinces = store.other_provinces();
        let hits = vec![
            Hit { position: 0, value: "ภูเก็ด".into() },
            Hit { position: 3, value: "เชียงใหม่".into() },
        ];

        let (m, position) = resolve_hits(&store, &hits, provinces).unwrap();
        assert_eq!(m.id.name(&store), "เชียงใหม่");
        assert_eq!(position, 3);

        let typo = vec![
            Hit { position: 1, value: "ภู".into() },
            Hit { position: 2, value: "ภูเก็ด".into() },
        ];
        let (m, position) = resolve_hits(&store, &typo, provinces).unwrap();
        assert_eq!(m.id.name(&store), "ภูเก็ต");
        assert_eq!(position, 2);

        assert!(resolve_hits(&store, &[], provinces).is_none());
    }
}
