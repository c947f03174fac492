use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// IPS 补丁工具
#[derive(Parser)]
#[command(name = "ipspatch")]
#[command(about = "将 IPS 补丁应用到 ROM 镜像", long_about = None)]
pub struct Cli {
    /// 输出更多日志 (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// 只输出错误日志
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 将补丁应用到源镜像的副本
    Apply {
        /// 源镜像
        source: PathBuf,
        /// 补丁文件路径
        #[arg(short, long)]
        patch: PathBuf,
        /// 输出镜像路径
        #[arg(short, long)]
        destination: PathBuf,
        /// 即使源镜像已包含补丁也重新生成
        #[arg(short, long)]
        force: bool,
        /// 写入 TOML 格式的报告
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// 检查镜像是否已包含补丁
    Verify {
        /// 镜像路径
        rom: PathBuf,
        /// 补丁文件路径
        #[arg(short, long)]
        patch: PathBuf,
    },
    /// 显示补丁内容
    Show {
        /// 补丁文件路径
        patch: PathBuf,
    },
}
