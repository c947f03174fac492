use anyhow::{Context, Result, bail};
use log::{info, warn};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::ips::{PatchDump, PatchSet, apply_patch_set, is_applied, read_patch_file};
use crate::report::{PatchReport, PatchStatus};
use crate::utils::{copier_header_len, duplicate_image, image_sha256, is_same_image};

/// 一次打补丁所需的全部参数
#[derive(Debug, Clone)]
pub struct PatchJob {
    pub source: PathBuf,
    pub patch: PathBuf,
    pub destination: PathBuf,
    /// 即使源镜像已包含补丁也重新生成目标镜像
    pub force: bool,
    pub report: Option<PathBuf>,
}

/// 将补丁应用到源镜像的副本上
pub fn patch_rom(job: &PatchJob) -> Result<PatchStatus> {
    println!("正在读取补丁...");
    let set = read_patch_file(&job.patch)?;
    let summary = set.summary();
    println!("  {}", summary.describe());

    if is_same_image(&job.source, &job.destination)? {
        bail!("输出镜像不能与源镜像相同: {:?}", job.destination);
    }

    let file =
        File::open(&job.source).with_context(|| format!("无法打开镜像: {:?}", job.source))?;
    let source_len = file.metadata()?.len();
    check_image_len(&job.source, source_len, &set)?;
    let header = copier_header_len(source_len);
    if let Some(len) = header {
        warn!("检测到带头部的镜像, 头部长度 {} 字节", len);
    }
    let mut source = BufReader::new(file);

    let source_hash = match &job.report {
        Some(_) => Some(
            image_sha256(&mut source)
                .with_context(|| format!("无法读取镜像: {:?}", job.source))?,
        ),
        None => None,
    };

    println!("正在检查源镜像...");
    let already = is_applied(&mut source, &set)
        .with_context(|| format!("无法读取镜像: {:?}", job.source))?;
    drop(source);

    let mut dest_hash = None;
    let status = if already && !job.force {
        println!("源镜像已包含该补丁, 跳过");
        PatchStatus::AlreadyApplied
    } else {
        if already {
            info!("源镜像已包含该补丁, 仍然生成目标镜像");
        }

        println!("正在应用补丁...");
        let mut dest = duplicate_image(&job.source, &job.destination)?;
        apply_patch_set(&mut dest, &set)
            .with_context(|| format!("写入目标镜像失败: {:?}", job.destination))?;
        if job.report.is_some() {
            dest_hash = Some(image_sha256(&mut dest)?);
        }
        drop(dest);

        println!("正在校验目标镜像...");
        if check_rom(&job.destination, &set)? {
            println!("补丁应用完成!");
            PatchStatus::Applied
        } else {
            println!("  ! 目标镜像校验失败");
            PatchStatus::VerifyFailed
        }
    };

    if let (Some(path), Some(hash)) = (&job.report, source_hash) {
        let mut report = PatchReport::new(&job.patch, &job.source, hash, summary);
        if let Some(dest_hash) = dest_hash {
            report = report.with_destination(&job.destination, dest_hash);
        }
        report.copier_header = header;
        report.status = status;
        report.write_to(path)?;
        println!("报告已写入: {}", path.display());
    }

    Ok(status)
}

/// 检查镜像是否已包含补丁
pub fn verify_rom(rom: &Path, patch: &Path) -> Result<bool> {
    let set = read_patch_file(patch)?;
    check_rom(rom, &set)
}

/// 显示补丁内容
pub fn show_patch(patch: &Path) -> Result<()> {
    let set = read_patch_file(patch)?;
    println!("补丁: {}\n", patch.display());
    println!("{}", set.summary().describe());
    println!("{}", PatchDump(&set));
    Ok(())
}

fn check_rom(rom: &Path, set: &PatchSet) -> Result<bool> {
    let file = File::open(rom).with_context(|| format!("无法打开镜像: {:?}", rom))?;
    let mut reader = BufReader::new(file);
    let applied =
        is_applied(&mut reader, set).with_context(|| format!("无法读取镜像: {:?}", rom))?;
    Ok(applied)
}

fn check_image_len(path: &Path, len: u64, set: &PatchSet) -> Result<()> {
    let required = set.required_len();
    if len < required {
        bail!(
            "镜像 {:?} 长度为 0x{:X}, 补丁至少需要 0x{:X}",
            path,
            len,
            required
        );
    }
    Ok(())
}
