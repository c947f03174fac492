use log::debug;
use std::io::{self, Seek, SeekFrom, Write};

use super::record::{PatchRecord, PatchSet};

/// 按文件顺序把所有记录写入镜像
///
/// 镜像必须已经足够长。写入中途失败时镜像处于部分修改状态, 不会回滚。
pub fn apply_patch_set<I: Write + Seek>(image: &mut I, set: &PatchSet) -> io::Result<()> {
    let mut fill = Vec::new();

    for record in set {
        image.seek(SeekFrom::Start(u64::from(record.offset())))?;
        match record {
            PatchRecord::Bytes { data, .. } => image.write_all(data)?,
            PatchRecord::Fill { length, value, .. } => {
                fill.clear();
                fill.resize(usize::from(*length), *value);
                image.write_all(&fill)?;
            }
        }
        debug!(
            "已写入 0x{:06X}..0x{:06X}",
            record.offset(),
            record.end()
        );
    }

    image.flush()?;
    image.seek(SeekFrom::Start(0))?;
    Ok(())
}
