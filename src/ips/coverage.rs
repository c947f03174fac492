use std::collections::BTreeMap;
use std::ops::Range;

use super::record::PatchSet;

/// 已被覆盖的区间集合, 区间互不相交且不相邻
#[derive(Debug, Default)]
struct Coverage {
    spans: BTreeMap<u64, u64>,
}

impl Coverage {
    /// 返回 `range` 中尚未被覆盖的部分
    fn uncovered(&self, range: Range<u64>) -> Vec<Range<u64>> {
        let mut gaps = Vec::new();
        let mut cursor = range.start;

        let first = self
            .spans
            .range(..=range.start)
            .next_back()
            .map(|(&start, _)| start)
            .unwrap_or(range.start);

        for (&start, &end) in self.spans.range(first..range.end) {
            if end <= cursor {
                continue;
            }
            if start > cursor {
                gaps.push(cursor..start);
            }
            cursor = cursor.max(end);
            if cursor >= range.end {
                break;
            }
        }
        if cursor < range.end {
            gaps.push(cursor..range.end);
        }
        gaps
    }

    fn insert(&mut self, range: Range<u64>) {
        let mut start = range.start;
        let mut end = range.end;

        let touching: Vec<(u64, u64)> = self
            .spans
            .range(..=end)
            .rev()
            .take_while(|(_, e)| **e >= start)
            .map(|(&s, &e)| (s, e))
            .collect();
        for (s, e) in touching {
            self.spans.remove(&s);
            start = start.min(s);
            end = end.max(e);
        }
        self.spans.insert(start, end);
    }
}

/// 计算每条记录在应用全部补丁后仍然可见的区间
///
/// 后出现的记录覆盖先出现的记录, 与偏移大小无关。返回值与记录一一对应,
/// 区间使用镜像中的绝对地址。
pub(crate) fn visible_spans(set: &PatchSet) -> Vec<Vec<Range<u64>>> {
    let mut coverage = Coverage::default();
    let mut visible: Vec<Vec<Range<u64>>> = set
        .iter()
        .rev()
        .map(|record| {
            let range = u64::from(record.offset())..record.end();
            let gaps = coverage.uncovered(range.clone());
            coverage.insert(range);
            gaps
        })
        .collect();
    visible.reverse();
    visible
}
