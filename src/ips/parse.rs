use anyhow::{Context, Result};
use byteorder::{BigEndian, ByteOrder, ReadBytesExt};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use super::error::FormatError;
use super::record::{END_TAG, MAGIC, PatchRecord, PatchSet};

/// 从补丁流中解析全部记录
///
/// 无论流当前处于什么位置, 都会先回到开头。不足 5 字节的流视为文件头不匹配。
/// 任何错误都会丢弃已解析的记录。
pub fn parse_patch<R: Read + Seek>(stream: &mut R) -> Result<PatchSet, FormatError> {
    stream.seek(SeekFrom::Start(0))?;

    let mut magic = [0u8; 5];
    match stream.read_exact(&mut magic) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            return Err(FormatError::BadMagic);
        }
        Err(err) => return Err(err.into()),
    }
    if &magic != MAGIC {
        return Err(FormatError::BadMagic);
    }

    let mut records = Vec::new();
    loop {
        let mut header = [0u8; 5];
        // 结束标记只占 3 字节, 先读偏移字段再判断
        stream.read_exact(&mut header[..3])?;
        if &header[..3] == END_TAG {
            break;
        }
        stream.read_exact(&mut header[3..])?;

        let offset = BigEndian::read_u24(&header[..3]);
        let size = BigEndian::read_u16(&header[3..]);

        let record = if size == 0 {
            let length = stream.read_u16::<BigEndian>()?;
            let value = stream.read_u8()?;
            if length == 0 {
                return Err(FormatError::ZeroLengthFill { offset });
            }
            PatchRecord::Fill {
                offset,
                length,
                value,
            }
        } else {
            let mut data = Vec::new();
            data.try_reserve_exact(usize::from(size))
                .map_err(|_| FormatError::AllocationFailure)?;
            data.resize(usize::from(size), 0);
            stream.read_exact(&mut data)?;
            PatchRecord::Bytes { offset, data }
        };

        debug!(
            "记录 #{}: 偏移 0x{:06X}, 长度 {}, RLE: {}",
            records.len(),
            record.offset(),
            record.len(),
            record.is_fill()
        );
        records
            .try_reserve(1)
            .map_err(|_| FormatError::AllocationFailure)?;
        records.push(record);
    }

    let mut probe = [0u8; 1];
    if stream.read(&mut probe)? > 0 {
        warn!("结束标记之后仍有数据, 已忽略");
    }

    info!("补丁包含 {} 条记录", records.len());
    Ok(PatchSet::new(records))
}

/// 打开并解析补丁文件
pub fn read_patch_file(path: &Path) -> Result<PatchSet> {
    let file = File::open(path).with_context(|| format!("无法打开补丁文件: {:?}", path))?;
    let mut reader = BufReader::new(file);
    let set =
        parse_patch(&mut reader).with_context(|| format!("无法解析补丁文件: {:?}", path))?;
    Ok(set)
}
