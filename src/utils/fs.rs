use anyhow::{Context, Result, bail};
use log::info;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// 拷贝机头部的对齐单位
const HEADER_ALIGNMENT: u64 = 1024;

/// 复制源镜像, 返回以读写方式打开的目标镜像, 游标位于开头
pub fn duplicate_image(source: &Path, dest: &Path) -> Result<File> {
    if let Some(parent) = dest.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    // 目录创建之后才能解析 `..` 之类的目标路径
    if is_same_image(source, dest)? {
        bail!("输出镜像不能与源镜像相同: {:?}", dest);
    }
    fs::copy(source, dest)
        .with_context(|| format!("无法复制镜像: {:?} -> {:?}", source, dest))?;

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(dest)
        .with_context(|| format!("无法打开目标镜像: {:?}", dest))?;
    info!("已复制镜像到 {:?}", dest);
    Ok(file)
}

/// 判断两个路径是否指向同一个文件, 目标文件可以尚不存在
pub fn is_same_image(source: &Path, dest: &Path) -> Result<bool> {
    let source =
        fs::canonicalize(source).with_context(|| format!("无法解析路径: {:?}", source))?;
    Ok(resolve_destination(dest)?.is_some_and(|dest| dest == source))
}

fn resolve_destination(dest: &Path) -> Result<Option<PathBuf>> {
    if dest.exists() {
        return Ok(Some(fs::canonicalize(dest)?));
    }
    let Some(name) = dest.file_name() else {
        return Ok(None);
    };
    let parent = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !parent.exists() {
        return Ok(None);
    }
    Ok(Some(fs::canonicalize(parent)?.join(name)))
}

/// 镜像长度不是 1024 的整数倍时, 多出的部分视为拷贝机头部
pub fn copier_header_len(len: u64) -> Option<u64> {
    match len % HEADER_ALIGNMENT {
        0 => None,
        header => Some(header),
    }
}
