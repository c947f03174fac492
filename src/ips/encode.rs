use byteorder::{BigEndian, WriteBytesExt};
use std::io::Write;

use super::error::EncodeError;
use super::record::{END_TAG, MAGIC, MAX_OFFSET, PatchRecord, PatchSet, TERMINATOR_OFFSET};

/// 把补丁集写成 IPS 格式
pub fn write_patch<W: Write>(writer: &mut W, set: &PatchSet) -> Result<(), EncodeError> {
    writer.write_all(MAGIC)?;

    for record in set {
        let offset = record.offset();
        if offset > MAX_OFFSET {
            return Err(EncodeError::OffsetOutOfRange(offset));
        }
        if offset == TERMINATOR_OFFSET {
            return Err(EncodeError::TerminatorCollision(offset));
        }
        if record.is_empty() {
            return Err(EncodeError::EmptyRecord(offset));
        }

        writer.write_u24::<BigEndian>(offset)?;
        match record {
            PatchRecord::Bytes { data, .. } => {
                let size = u16::try_from(data.len()).map_err(|_| EncodeError::PayloadTooLarge {
                    offset,
                    len: data.len(),
                })?;
                writer.write_u16::<BigEndian>(size)?;
                writer.write_all(data)?;
            }
            PatchRecord::Fill { length, value, .. } => {
                writer.write_u16::<BigEndian>(0)?;
                writer.write_u16::<BigEndian>(*length)?;
                writer.write_u8(*value)?;
            }
        }
    }

    writer.write_all(END_TAG)?;
    Ok(())
}

/// 把补丁集编码到内存
pub fn encode_patch(set: &PatchSet) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::with_capacity(MAGIC.len() + END_TAG.len() + set.len() * 8);
    write_patch(&mut out, set)?;
    Ok(out)
}
