//! IPS 补丁格式: 数据模型、解析、校验与应用

mod apply;
mod coverage;
mod encode;
mod error;
mod parse;
mod record;
mod show;
mod verify;

pub use apply::apply_patch_set;
pub use encode::{encode_patch, write_patch};
pub use error::{EncodeError, FormatError};
pub use parse::{parse_patch, read_patch_file};
pub use record::{
    END_TAG, MAGIC, MAX_OFFSET, PatchRecord, PatchSet, PatchSummary, TERMINATOR_OFFSET,
};
pub use show::PatchDump;
pub use verify::is_applied;
