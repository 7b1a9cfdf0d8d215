//! 字符串相似度（Ratcliff/Obershelp 最长公共块比率）

/// 两个字符串的相似度，取值 [0, 1]
///
/// 反复取最长公共连续块，再分别对左右两侧未匹配部分递归，
/// 匹配字符总数为 M，结果为 `2M / (len(a) + len(b))`。
/// 长度按字符计；任一为空时为 0。
///
/// ```rust
/// use thai_address_parser::similarity;
///
/// assert_eq!(similarity("สุเทพ", "สุเทพ"), 1.0);
/// assert!(similarity("สุเทพ", "สุเทบ") > similarity("สุเทพ", "ป่าตอง"));
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    // 固定参数顺序，保证对称
    let (a, b) = if a <= b { (a, b) } else { (b, a) };
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    2.0 * matched_chars(&a, &b) as f64 / (a.len() + b.len()) as f64
}

fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_block(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    matched
}

/// `a[alo..ahi]` 与 `b[blo..bhi]` 的最长公共块 (a 起点, b 起点, 长度)
///
/// 等长时取 a 中最靠前的块。
fn longest_block(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best = (alo, blo, 0);
    let width = bhi - blo + 1;
    // prev[k] / curr[k]：以 a[i-1]、b[blo+k-1] 结尾的公共后缀长度
    let mut prev = vec![0usize; width];
    let mut curr = vec![0usize; width];

    for i in alo..ahi {
        for j in blo..bhi {
            let k = j - blo + 1;
            curr[k] = if a[i] == b[j] { prev[k - 1] + 1 } else { 0 };
            if curr[k] > best.2 {
                best = (i + 1 - curr[k], j + 1 - curr[k], curr[k]);
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(similarity("เชียงใหม่", "เชียงใหม่"), 1.0);
        assert_eq!(similarity("a", "a"), 1.0);
    }

    #[test]
    fn test_empty() {
        assert_eq!(similarity("ภูเก็ต", ""), 0.0);
        assert_eq!(similarity("", "ภูเก็ต"), 0.0);
        assert_eq!(similarity("", ""), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let pairs = [
            ("สุเทพ", "สุเทบ"),
            ("abcd", "bcda"),
            ("เมืองเชียงใหม่", "เชียงใหม่"),
            ("บางรัก", "บางรักน้อย"),
            ("xyzabc", "abcxyz"),
        ];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a), "{} / {}", a, b);
        }
    }

    #[test]
    fn test_range() {
        for (a, b) in [("abc", "xyz"), ("ab", "abc"), ("ลาดยาว", "ลาดพร้าว")] {
            let s = similarity(a, b);
            assert!((0.0..=1.0).contains(&s));
        }
        assert_eq!(similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_ordering() {
        // 打错一个字符的更接近
        let query = "สุเทบ";
        assert!(similarity(query, "สุเทพ") > similarity(query, "ศรีภูมิ"));
        assert!(similarity("บางรัด", "บางรัก") > similarity("บางรัด", "ปทุมวัน"));
        assert!(similarity("abcd", "abce") > similarity("abcd", "axyz"));
    }

    #[test]
    fn test_non_contiguous_blocks() {
        // "ab" 与 "cd" 两个块都计入
        assert!((similarity("abXcd", "abYcd") - 0.8).abs() < 1e-9);
    }
}
