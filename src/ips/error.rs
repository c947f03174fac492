//! IPS 补丁读写过程中的错误类型

use std::io;
use thiserror::Error;

/// 解析补丁流时可能出现的错误
#[derive(Debug, Error)]
pub enum FormatError {
    /// 文件头不是 `PATCH`
    #[error("补丁文件头不匹配, 不是有效的 IPS 补丁")]
    BadMagic,

    /// 数据在记录中途结束
    #[error("补丁数据被截断")]
    Truncated,

    /// 无法为记录内容分配内存
    #[error("无法为补丁记录分配内存")]
    AllocationFailure,

    /// RLE 记录的重复长度为 0
    #[error("偏移 0x{offset:06X} 处的 RLE 记录长度为 0")]
    ZeroLengthFill { offset: u32 },

    #[error("读取补丁失败: {0}")]
    Io(io::Error),
}

impl From<io::Error> for FormatError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            FormatError::Truncated
        } else {
            FormatError::Io(err)
        }
    }
}

/// 序列化补丁集时可能出现的错误
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("偏移 0x{0:X} 超出 24 位地址范围")]
    OffsetOutOfRange(u32),

    /// 该偏移与结束标记 `EOF` 的字节相同, 写出后会被当作结束标记
    #[error("偏移 0x{0:06X} 与结束标记冲突")]
    TerminatorCollision(u32),

    #[error("偏移 0x{offset:06X} 处的记录长度 {len} 无法编码")]
    PayloadTooLarge { offset: u32, len: usize },

    #[error("偏移 0x{0:06X} 处的记录没有内容")]
    EmptyRecord(u32),

    #[error("写出补丁失败: {0}")]
    Io(#[from] io::Error),
}
