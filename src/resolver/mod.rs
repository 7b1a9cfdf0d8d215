//! 层级解析：按标记情况选择策略，逐级 精确 -> 交集 -> 相似度 -> 随机兜底

mod capital;
pub(crate) mod matching;
mod no_marker;
mod province;
mod recovery;

pub use recovery::RecoveryPolicy;
pub(crate) use matching::exact_or_closest;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::hierarchy::{HierarchyStore, SubDistrictId};
use crate::workspace::ParseWorkspace;
use rand::Rng;
use tracing::debug;

/// 解析策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// 首都地址：只有首都字面量，或首都字面量加不足两类标记
    Capital,
    /// 其他府地址：有 จ./อ./ต. 标记
    Province,
    /// 完全没有标记，按位置推断
    NoMarker,
}

impl Strategy {
    /// 根据工作区中的标记情况选择策略
    pub(crate) fn select(workspace: &ParseWorkspace) -> Self {
        let capital = !workspace.capitals().is_empty();
        let marked = workspace.marker_hits() > 0;
        match (capital, marked) {
            (true, false) => Strategy::Capital,
            (false, true) => Strategy::Province,
            // 两者都有时，出现两类及以上标记更像外府地址
            (true, true) if workspace.marker_kinds() >= 2 => Strategy::Province,
            (true, true) => Strategy::Capital,
            (false, false) => Strategy::NoMarker,
        }
    }

    /// 该策略失败时的兜底范围
    pub fn recovery_policy(self) -> RecoveryPolicy {
        match self {
            Strategy::Capital => RecoveryPolicy::Capital,
            Strategy::Province => RecoveryPolicy::OtherProvinces,
            Strategy::NoMarker => RecoveryPolicy::AnyProvince,
        }
    }
}

/// 解析出的位置：区决定了县和府
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Placement {
    pub sub_district: SubDistrictId,
    /// 详细地址
    pub detail: String,
    /// 置信度，仅首都策略给出
    pub confidence: Option<f64>,
}

/// 一次解析的结果
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Outcome {
    /// 没有任何泰文词元时为空
    pub placement: Option<Placement>,
    pub strategy: Strategy,
    /// 是否由随机兜底得出
    pub recovered: bool,
}

/// 单次解析会话，持有本次调用的工作区和随机源
pub(crate) struct Session<'a, R: ?Sized> {
    store: &'a HierarchyStore,
    workspace: &'a ParseWorkspace,
    rng: &'a mut R,
}

/// 解析工作区，总能得到结果
pub(crate) fn resolve<R: Rng + ?Sized>(
    store: &HierarchyStore,
    workspace: &ParseWorkspace,
    rng: &mut R,
) -> Outcome {
    let strategy = Strategy::select(workspace);
    debug!(?strategy, script_tokens = workspace.script_len(), "resolving address");

    let mut session = Session {
        store,
        workspace,
        rng,
    };
    let attempt = match strategy {
        Strategy::Capital => session.capital().map(Some),
        Strategy::Province => session.province().map(Some),
        Strategy::NoMarker => session.no_marker(),
    };

    if let Some(placement) = attempt {
        return Outcome {
            placement,
            strategy,
            recovered: false,
        };
    }

    let policy = strategy.recovery_policy();
    debug!(?strategy, ?policy, "resolution miss, falling back to random choice");
    let placement = policy
        .pick(store, &mut *session.rng)
        .map(|sub_district| Placement {
            sub_district,
            detail: workspace.full_text(),
            confidence: (strategy == Strategy::Capital).then_some(0.0),
        });

    Outcome {
        placement,
        strategy,
        recovered: true,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::{Markers, CAPITAL_LITERAL};
    use crate::data::Dictionary;
    use crate::hierarchy::{HierarchyStore, SubDistrictId};
    use crate::segmenter::Segmenter;
    use crate::workspace::ParseWorkspace;

    pub fn embedded_store() -> HierarchyStore {
        HierarchyStore::build(&Dictionary::embedded().unwrap(), CAPITAL_LITERAL).unwrap()
    }

    pub fn workspace(address: &str) -> ParseWorkspace {
        let markers = Markers::default();
        ParseWorkspace::build(Segmenter::new(&markers).segment(address))
    }

    /// 只有首都一个 (府, 县, 区) 的词典
    pub fn single_triple_dictionary() -> Dictionary {
        Dictionary::from_json(
            r#"{"กรุงเทพมหานคร": {"ปทุมวัน": ["ลุมพินี"]}}"#,
            r#"{"กรุงเทพมหานคร": "Bangkok", "ปทุมวัน": "Pathum Wan", "ลุมพินี": "Lumphini"}"#,
        )
        .unwrap()
    }

    /// (府, 县, 区) 名称
    pub fn names(store: &HierarchyStore, sub: SubDistrictId) -> (&str, &str, &str) {
        let (district, province) = store.lineage(sub);
        (
            store.province(province).name.as_str(),
            store.district(district).name.as_str(),
            store.sub_district(sub).name.as_str(),
        )
    }
}
