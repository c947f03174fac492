use serde::{Deserialize, Serialize};
use std::slice;

/// 补丁文件开头的魔数
pub const MAGIC: &[u8; 5] = b"PATCH";
/// 记录序列的结束标记，占据偏移字段的位置
pub const END_TAG: &[u8; 3] = b"EOF";
/// 24 位偏移所能表示的最大地址
pub const MAX_OFFSET: u32 = 0x00FF_FFFF;
/// 结束标记按 24 位大端解释后的数值，该偏移无法被记录表示
pub const TERMINATOR_OFFSET: u32 = 0x0045_4F46;

/// 单条补丁记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchRecord {
    /// 在 `offset` 处写入原样字节
    Bytes { offset: u32, data: Vec<u8> },
    /// 在 `offset` 处写入 `length` 个 `value` (RLE)
    Fill { offset: u32, length: u16, value: u8 },
}

impl PatchRecord {
    pub fn offset(&self) -> u32 {
        match self {
            PatchRecord::Bytes { offset, .. } | PatchRecord::Fill { offset, .. } => *offset,
        }
    }

    /// 实际写入的字节数
    pub fn len(&self) -> usize {
        match self {
            PatchRecord::Bytes { data, .. } => data.len(),
            PatchRecord::Fill { length, .. } => usize::from(*length),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_fill(&self) -> bool {
        matches!(self, PatchRecord::Fill { .. })
    }

    /// 记录覆盖范围的结束位置 (不含)
    pub fn end(&self) -> u64 {
        u64::from(self.offset()) + self.len() as u64
    }

    /// 展开后的完整字节序列
    pub fn expanded(&self) -> Vec<u8> {
        match self {
            PatchRecord::Bytes { data, .. } => data.clone(),
            PatchRecord::Fill { length, value, .. } => vec![*value; usize::from(*length)],
        }
    }
}

/// 按文件顺序排列的补丁记录集合，解析完成后不再修改
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchSet {
    records: Vec<PatchRecord>,
}

impl PatchSet {
    pub fn new(records: Vec<PatchRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PatchRecord] {
        &self.records
    }

    pub fn iter(&self) -> slice::Iter<'_, PatchRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 目标镜像至少需要的长度
    pub fn required_len(&self) -> u64 {
        self.records.iter().map(PatchRecord::end).max().unwrap_or(0)
    }

    pub fn summary(&self) -> PatchSummary {
        let fill_records = self.records.iter().filter(|r| r.is_fill()).count();
        PatchSummary {
            records: self.records.len(),
            byte_records: self.records.len() - fill_records,
            fill_records,
            total_bytes: self.records.iter().map(|r| r.len() as u64).sum(),
            required_len: self.required_len(),
        }
    }
}

impl<'a> IntoIterator for &'a PatchSet {
    type Item = &'a PatchRecord;
    type IntoIter = slice::Iter<'a, PatchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// 补丁集统计信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchSummary {
    pub records: usize,
    pub byte_records: usize,
    pub fill_records: usize,
    pub total_bytes: u64,
    pub required_len: u64,
}

impl PatchSummary {
    pub fn describe(&self) -> String {
        format!(
            "记录: {} 条 (普通: {}, RLE: {}), 写入字节: {}, 最小镜像长度: 0x{:X}",
            self.records, self.byte_records, self.fill_records, self.total_bytes, self.required_len
        )
    }
}
