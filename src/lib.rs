//! # IPS Patcher
//!
//! IPS 补丁工具库
//!
//! ## 功能
//!
//! - 解析 IPS 补丁文件, 支持普通记录与 RLE 记录
//! - 检查补丁是否已经应用到 ROM 镜像
//! - 将补丁应用到源镜像的副本并校验结果
//!
//! ## 使用示例
//!
//! ```no_run
//! use ips_patcher::patcher::{PatchJob, patch_rom};
//! use std::path::PathBuf;
//!
//! let job = PatchJob {
//!     source: PathBuf::from("game.sfc"),
//!     patch: PathBuf::from("translation.ips"),
//!     destination: PathBuf::from("game_patched.sfc"),
//!     force: false,
//!     report: None,
//! };
//! patch_rom(&job).unwrap();
//! ```

pub mod cli;
pub mod ips;
pub mod patcher;
pub mod report;
pub mod utils;

// 重新导出常用类型
pub use ips::{FormatError, PatchRecord, PatchSet, apply_patch_set, is_applied, parse_patch};
pub use patcher::{PatchJob, patch_rom, show_patch, verify_rom};
pub use report::{PatchReport, PatchStatus};
