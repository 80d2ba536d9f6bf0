/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */

// --lf 参数生成的日志文件
use anyhow::Context;
use chrono::Local;
use std::io::Write;
use std::path::Path;

pub struct LogFile {
    log_file: std::fs::File,
    log_file_info: bool,
}

impl LogFile {
    pub fn new(log_file_path: &Path, append: bool, log_file_info: bool) -> anyhow::Result<Self> {
        let log_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .append(append)
            .truncate(!append)
            .open(log_file_path)
            .with_context(|| format!("Failed to open log file {}", log_file_path.display()))?;

        Ok(LogFile {
            log_file,
            log_file_info,
        })
    }

    pub fn log_command(&mut self, args: &[String]) -> anyhow::Result<()> {
        // 跳过第一个参数（命令本身）
        let filtered_args = if args.len() > 1 {
            args[1..].join(" ")
        } else {
            String::new()
        };

        writeln!(
            self.log_file,
            "---------\nCsvpart log opened {}",
            Local::now().format("%a %b %d %H:%M:%S %Y")
        )?;
        writeln!(
            self.log_file,
            "command line arguments:\n {}\n",
            filtered_args
        )?;

        Ok(())
    }

    // 只有 --li 时写入
    pub fn write_info(&mut self, message: &str) -> anyhow::Result<()> {
        if self.log_file_info {
            writeln!(self.log_file, "{}", message)?;
        }
        Ok(())
    }

    // 错误总是写入
    pub fn write_error(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.log_file, "error: {}", message)?;
        Ok(())
    }

    pub fn log_summary(&mut self, total_shards: usize, total_lines: usize) -> anyhow::Result<()> {
        writeln!(
            self.log_file,
            "\nTotal {} files ({} data lines)",
            total_shards, total_lines
        )?;

        writeln!(
            self.log_file,
            "Done {}",
            Local::now().format("%a %b %d %H:%M:%S %Y")
        )?;

        Ok(())
    }

    pub fn close(&mut self) -> anyhow::Result<()> {
        self.log_file.flush()?;
        Ok(())
    }
}
