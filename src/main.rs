use anyhow::{Result, anyhow, bail};
use clap::Parser;

use ips_patcher::cli::{Cli, Commands};
use ips_patcher::patcher::{PatchJob, patch_rom, show_patch, verify_rom};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG 优先于命令行的日志级别
    let level = match (cli.verbose, cli.quiet) {
        (0, true) => "error",
        (0, false) => "warn",
        (1, _) => "info",
        (2, _) => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Apply {
            source,
            patch,
            destination,
            force,
            report,
        } => {
            if !source.exists() {
                return Err(anyhow!("源镜像不存在: {:?}", source));
            }
            if !patch.exists() {
                return Err(anyhow!("补丁文件不存在: {:?}", patch));
            }
            let job = PatchJob {
                source,
                patch,
                destination,
                force,
                report,
            };
            let status = patch_rom(&job)?;
            if !status.is_success() {
                bail!("目标镜像未通过校验: {:?}", job.destination);
            }
        }
        Commands::Verify { rom, patch } => {
            if !rom.exists() {
                return Err(anyhow!("镜像不存在: {:?}", rom));
            }
            if !patch.exists() {
                return Err(anyhow!("补丁文件不存在: {:?}", patch));
            }
            if verify_rom(&rom, &patch)? {
                println!("镜像已包含该补丁");
            } else {
                bail!("镜像未包含该补丁: {:?}", rom);
            }
        }
        Commands::Show { patch } => {
            if !patch.exists() {
                return Err(anyhow!("补丁文件不存在: {:?}", patch));
            }
            show_patch(&patch)?;
        }
    }

    Ok(())
}
