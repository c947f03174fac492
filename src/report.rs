use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::ips::PatchSummary;

/// 打补丁的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchStatus {
    /// 源镜像已包含补丁内容, 未生成目标镜像
    AlreadyApplied,
    /// 已应用且校验通过
    Applied,
    /// 已写入目标镜像, 但校验未通过
    VerifyFailed,
}

impl PatchStatus {
    pub fn is_success(&self) -> bool {
        !matches!(self, PatchStatus::VerifyFailed)
    }
}

/// 打补丁报告
#[derive(Debug, Serialize, Deserialize)]
pub struct PatchReport {
    pub version: String,
    pub created_at: String,
    pub patch: String,
    pub source: String,
    pub destination: Option<String>,
    pub source_sha256: String,
    pub destination_sha256: Option<String>,
    pub copier_header: Option<u64>,
    pub status: PatchStatus,
    pub summary: PatchSummary,
}

impl PatchReport {
    pub fn new(patch: &Path, source: &Path, source_sha256: String, summary: PatchSummary) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            patch: patch.display().to_string(),
            source: source.display().to_string(),
            destination: None,
            source_sha256,
            destination_sha256: None,
            copier_header: None,
            status: PatchStatus::AlreadyApplied,
            summary,
        }
    }

    pub fn with_destination(mut self, destination: &Path, sha256: String) -> Self {
        self.destination = Some(destination.display().to_string());
        self.destination_sha256 = Some(sha256);
        self
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
