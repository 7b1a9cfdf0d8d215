//! 泰文词元筛选和单次解析的工作区

use crate::segmenter::{MarkerKind, Token};
use std::ops::RangeInclusive;

/// 泰文 Unicode 区块
pub const THAI_BLOCK: RangeInclusive<char> = '\u{0E00}'..='\u{0E7F}';

/// 是否含有至少一个泰文字符
pub fn is_thai(text: &str) -> bool {
    text.chars().any(|c| THAI_BLOCK.contains(&c))
}

/// 带标记的泰文词元
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Hit {
    /// 在泰文词元列表中的位置
    pub position: usize,
    /// 去掉标记后的值
    pub value: String,
}

/// 单次解析的工作区
///
/// 每次调用 `parse` 时新建，调用结束即丢弃，不在解析器上保存任何状态。
#[derive(Debug, Default)]
pub(crate) struct ParseWorkspace {
    /// 全部词元
    tokens: Vec<Token>,
    /// 泰文词元在 `tokens` 中的下标
    script: Vec<usize>,
    /// 首都字面量在泰文列表中的位置
    capitals: Vec<usize>,
    provinces: Vec<Hit>,
    districts: Vec<Hit>,
    sub_districts: Vec<Hit>,
}

impl ParseWorkspace {
    /// 筛选泰文词元并按标记类型归类
    pub fn build(tokens: Vec<Token>) -> Self {
        let mut workspace = Self::default();

        for token in &tokens {
            if !is_thai(&token.text) {
                continue;
            }
            let position = workspace.script.len();
            workspace.script.push(token.index);

            // 一个词元可以同时命中多类标记，各自记在同一位置
            for (kind, value) in &token.marks {
                let hit = Hit {
                    position,
                    value: value.clone(),
                };
                match kind {
                    MarkerKind::Capital => workspace.capitals.push(position),
                    MarkerKind::Province => workspace.provinces.push(hit),
                    MarkerKind::District => workspace.districts.push(hit),
                    MarkerKind::SubDistrict => workspace.sub_districts.push(hit),
                    MarkerKind::Plain => {}
                }
            }
        }

        workspace.tokens = tokens;
        workspace
    }

    /// 泰文词元数量
    pub fn script_len(&self) -> usize {
        self.script.len()
    }

    /// 第 `position` 个泰文词元的原文
    pub fn script_text(&self, position: usize) -> Option<&str> {
        let &index = self.script.get(position)?;
        self.tokens.get(index).map(|t| t.text.as_str())
    }

    /// 所有泰文词元原文，以空格连接
    pub fn script_joined(&self) -> String {
        self.script
            .iter()
            .filter_map(|&i| self.tokens.get(i))
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 第 `position` 个泰文词元之前的全部原始词元，作为详细地址
    pub fn detail_before(&self, position: usize) -> Option<String> {
        let &index = self.script.get(position)?;
        Some(join(&self.tokens[..index]))
    }

    /// 全部词元，兜底时整体作为详细地址
    pub fn full_text(&self) -> String {
        join(&self.tokens)
    }

    pub fn capitals(&self) -> &[usize] {
        &self.capitals
    }

    /// 某类标记的命中列表（按出现顺序）
    pub fn hits(&self, kind: MarkerKind) -> &[Hit] {
        match kind {
            MarkerKind::Province => &self.provinces,
            MarkerKind::District => &self.districts,
            MarkerKind::SubDistrict => &self.sub_districts,
            MarkerKind::Capital | MarkerKind::Plain => &[],
        }
    }

    /// 府、县、区三类标记的命中总数
    pub fn marker_hits(&self) -> usize {
        self.provinces.len() + self.districts.len() + self.sub_districts.len()
    }

    /// 出现过的非首都标记种类数
    pub fn marker_kinds(&self) -> usize {
        [&self.provinces, &self.districts, &self.sub_districts]
            .iter()
            .filter(|hits| !hits.is_empty())
            .count()
    }
}

/// 取值最长（按字符数）的命中，等长取靠前者
pub(crate) fn longest(hits: &[Hit]) -> Option<&Hit> {
    hits.iter().fold(None, |best: Option<&Hit>, hit| match best {
        Some(b) if b.value.chars().count() >= hit.value.chars().count() => Some(b),
        _ => Some(hit),
    })
}

fn join(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Markers;
    use crate::segmenter::Segmenter;

    fn workspace(address: &str) -> ParseWorkspace {
        let markers = Markers::default();
        ParseWorkspace::build(Segmenter::new(&markers).segment(address))
    }

    #[test]
    fn test_is_thai() {
        assert!(is_thai("ถนน"));
        assert!(is_thai("99/1ซอย"));
        assert!(!is_thai("99/1"));
        assert!(!is_thai("Moo 5"));
        assert!(!is_thai(""));
    }

    #[test]
    fn test_build_workspace() {
        let ws = workspace("99/1 ถนนห้วยแก้ว ต.สุเทพ อ.เมืองเชียงใหม่ จ.เชียงใหม่ 50200");

        assert_eq!(ws.script_len(), 4);
        assert_eq!(ws.script_text(0), Some("ถนนห้วยแก้ว"));
        assert_eq!(ws.script_text(4), None);
        assert_eq!(ws.hits(MarkerKind::SubDistrict)[0].position, 1);
        assert_eq!(ws.hits(MarkerKind::SubDistrict)[0].value, "สุเทพ");
        assert_eq!(ws.hits(MarkerKind::District)[0].value, "เมืองเชียงใหม่");
        assert_eq!(ws.hits(MarkerKind::Province)[0].position, 3);
        assert_eq!(ws.marker_hits(), 3);
        assert_eq!(ws.marker_kinds(), 3);
        assert!(ws.capitals().is_empty());
    }

    #[test]
    fn test_glued_markers_share_position() {
        let ws = workspace("99 ต.สุเทพ อ.เมืองเชียงใหม่จ.เชียงใหม่");

        assert_eq!(ws.script_len(), 2);
        assert_eq!(ws.hits(MarkerKind::SubDistrict), &[Hit { position: 0, value: "สุเทพ".into() }]);
        assert_eq!(
            ws.hits(MarkerKind::District),
            &[Hit { position: 0, value: "เมืองเชียงใหม่".into() }]
        );
        assert_eq!(ws.hits(MarkerKind::Province)[0].position, 1);
        assert_eq!(ws.marker_hits(), 3);
        assert_eq!(ws.marker_kinds(), 3);
    }

    #[test]
    fn test_capital_must_be_whole_token() {
        let ws = workspace("อาคารกรุงเทพมหานคร ช้างคลาน เมืองเชียงใหม่ เชียงใหม่");
        assert!(ws.capitals().is_empty());
        assert_eq!(ws.marker_hits(), 0);

        let ws = workspace("กรุงเทพมหานคร ชั้น5 ปทุมวัน กรุงเทพมหานคร");
        assert_eq!(ws.capitals(), &[0, 3]);
    }

    #[test]
    fn test_detail_before() {
        let ws = workspace("99/1 ถนนห้วยแก้ว ต.สุเทพ อ.เมืองเชียงใหม่");

        assert_eq!(ws.detail_before(0).as_deref(), Some("99/1"));
        assert_eq!(ws.detail_before(1).as_deref(), Some("99/1 ถนนห้วยแก้ว"));
        assert_eq!(ws.detail_before(9), None);
        assert_eq!(ws.full_text(), "99/1 ถนนห้วยแก้ว ต.สุเทพ อ.เมืองเชียงใหม่");

        // 纯标点词元保留在详细地址中
        let ws = workspace("12 - ซอย5 ต.สุเทพ");
        assert_eq!(ws.detail_before(1).as_deref(), Some("12 - ซอย5"));
    }

    #[test]
    fn test_capital_positions() {
        let ws = workspace("12 ลุมพินี ปทุมวัน กรุงเทพมหานคร 10330");

        assert_eq!(ws.capitals(), &[2]);
        assert_eq!(ws.marker_hits(), 0);
        assert_eq!(ws.script_joined(), "ลุมพินี ปทุมวัน กรุงเทพมหานคร");
    }

    #[test]
    fn test_longest() {
        let hits = vec![
            Hit { position: 0, value: "กะทู้".into() },
            Hit { position: 1, value: "เมืองภูเก็ต".into() },
            Hit { position: 2, value: "ภูเก็ตเมือง".into() },
        ];
        assert_eq!(longest(&hits).map(|h| h.position), Some(1));
        assert!(longest(&[]).is_none());
    }
}
