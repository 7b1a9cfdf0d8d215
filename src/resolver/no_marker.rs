//! 无标记地址：按位置推断
//!
//! 至少三个泰文词元时，最后三个依次视为区、县、府；不足三个时用全部泰文词元
//! 拼成一个查询串，逐级在上一级的范围内找最相似的名称。

use super::matching::exact_or_closest;
use super::{Placement, Session};
use crate::hierarchy::ProvinceId;
use rand::Rng;

impl<R: Rng + ?Sized> Session<'_, R> {
    /// 外层 `None` 表示查找失败需要兜底，内层 `None` 表示没有泰文词元
    pub(super) fn no_marker(&self) -> Option<Option<Placement>> {
        let store = self.store;
        let workspace = self.workspace;
        let n = workspace.script_len();
        if n == 0 {
            return Some(None);
        }

        let (province_query, district_query, sub_query, detail_anchor) = if n >= 3 {
            (
                workspace.script_text(n - 1)?.to_string(),
                workspace.script_text(n - 2)?.to_string(),
                workspace.script_text(n - 3)?.to_string(),
                n - 3,
            )
        } else {
            let joined = workspace.script_joined();
            (joined.clone(), joined.clone(), joined, 0)
        };

        let provinces: Vec<ProvinceId> = store.province_ids().collect();
        let province = exact_or_closest(store, &province_query, &provinces)?.id;
        let district =
            exact_or_closest(store, &district_query, &store.province(province).districts)?.id;
        let sub_district =
            exact_or_closest(store, &sub_query, &store.district(district).sub_districts)?.id;

        Some(Some(Placement {
            sub_district,
            detail: workspace.detail_before(detail_anchor)?,
            confidence: None,
        }))
    }
}
