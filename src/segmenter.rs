//! 地址切分：按空白切词，再按内嵌的层级标记重新切分

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::Markers;

/// 词元的层级标记类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MarkerKind {
    /// ต. 区
    SubDistrict,
    /// อ. 县
    District,
    /// จ. 府
    Province,
    /// 首都字面量
    Capital,
    /// 无标记
    Plain,
}

/// 切分后的词元
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// 词元原文
    pub text: String,
    /// 在切分结果中的位置
    pub index: usize,
    /// 词元内的全部标记及去掉标记后的值，按出现位置排序
    pub marks: Vec<(MarkerKind, String)>,
}

impl Token {
    /// 第一个标记的类型，没有标记时为 `Plain`
    pub fn marker(&self) -> MarkerKind {
        self.marks.first().map_or(MarkerKind::Plain, |&(kind, _)| kind)
    }

    /// 某类标记的值
    pub fn value(&self, kind: MarkerKind) -> Option<&str> {
        self.marks
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, value)| value.as_str())
    }
}

/// 地址切分器
pub struct Segmenter<'a> {
    markers: &'a Markers,
}

impl<'a> Segmenter<'a> {
    pub fn new(markers: &'a Markers) -> Self {
        Self { markers }
    }

    /// 切分地址
    ///
    /// 第一个词保持原样；之后的每个词若含有标记，标记之前的部分并入前一个词元，
    /// 标记及其后的部分成为新词元。
    pub fn segment(&self, address: &str) -> Vec<Token> {
        let mut pieces: Vec<String> = Vec::new();

        for (i, word) in address.split_whitespace().enumerate() {
            if i == 0 {
                pieces.push(word.to_string());
                continue;
            }

            let Some((kind, at)) = self.markers.find(word) else {
                pieces.push(word.to_string());
                continue;
            };

            let (head, tail) = word.split_at(at);
            if !head.is_empty() {
                merge_left(&mut pieces, head, kind == MarkerKind::SubDistrict);
            }

            let literal = self.markers.literal(kind).unwrap_or_default();
            let rest = &tail[literal.len()..];
            if kind == MarkerKind::Capital {
                pieces.push(literal.to_string());
                if !rest.is_empty() {
                    pieces.push(rest.to_string());
                }
            } else if !rest.is_empty() {
                pieces.push(tail.to_string());
            }
        }

        pieces
            .into_iter()
            .enumerate()
            .map(|(index, text)| Token {
                marks: self.markers.classify(&text),
                text,
                index,
            })
            .collect()
    }
}

/// 标记前的溢出文本属于前一个字段的详细地址
fn merge_left(pieces: &mut Vec<String>, head: &str, spaced: bool) {
    match pieces.last_mut() {
        Some(last) => {
            if spaced {
                last.push(' ');
            }
            last.push_str(head);
        }
        None => pieces.push(head.to_string()),
    }
}
