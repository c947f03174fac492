use std::fmt;

use super::record::{PatchRecord, PatchSet};

const SEPARATOR: &str = "-------------------------------";

/// 补丁集的调试输出, 仅用于展示
pub struct PatchDump<'a>(pub &'a PatchSet);

impl fmt::Display for PatchDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in self.0 {
            writeln!(f, "{}", SEPARATOR)?;
            match record {
                PatchRecord::Fill {
                    offset,
                    length,
                    value,
                } => {
                    writeln!(
                        f,
                        "偏移: 0x{:06X}\t长度: 0x{:X}\t填充值: 0x{:02X}\tRLE: 是",
                        offset, length, value
                    )?;
                }
                PatchRecord::Bytes { offset, data } => {
                    writeln!(
                        f,
                        "偏移: 0x{:06X}\t长度: 0x{:X}\tRLE: 否",
                        offset,
                        data.len()
                    )?;
                    for row in data.chunks(16) {
                        let line: Vec<String> = row.iter().map(|b| format!("{:02X}", b)).collect();
                        writeln!(f, "  {}", line.join(" "))?;
                    }
                }
            }
        }
        write!(f, "{}", SEPARATOR)
    }
}
