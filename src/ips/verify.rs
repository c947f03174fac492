use log::debug;
use std::io::{self, Read, Seek, SeekFrom};

use super::coverage::visible_spans;
use super::record::PatchSet;

/// 检查补丁集是否已经应用到镜像上
///
/// 逐条记录比较镜像内容, 遇到第一处不一致立即返回 `false`。被后续记录覆盖的
/// 字节不参与比较, 因此刚应用过补丁的镜像总能通过检查。读到镜像末尾之外视为不一致,
/// 其他 I/O 错误直接返回。
pub fn is_applied<I: Read + Seek>(image: &mut I, set: &PatchSet) -> io::Result<bool> {
    let mut buffer = Vec::new();

    for (record, spans) in set.iter().zip(visible_spans(set)) {
        let base = u64::from(record.offset());
        let expected = record.expanded();
        for span in spans {
            buffer.resize((span.end - span.start) as usize, 0);
            image.seek(SeekFrom::Start(span.start))?;
            match image.read_exact(&mut buffer) {
                Ok(()) => {}
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                    debug!("镜像长度不足, 偏移 0x{:06X}", span.start);
                    return Ok(false);
                }
                Err(err) => return Err(err),
            }

            let relative = (span.start - base) as usize;
            let mismatch = buffer
                .iter()
                .zip(&expected[relative..])
                .position(|(actual, wanted)| actual != wanted);
            if let Some(i) = mismatch {
                debug!("字节不匹配, 偏移 0x{:06X}", span.start + i as u64);
                return Ok(false);
            }
        }
    }

    Ok(true)
}
