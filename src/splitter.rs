/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */
use crate::cli::CsvPartArgs;
use crate::error::CsvPartError;
use crate::partition::{count_lines, lines_from_percentages, parse_percentages};
use crate::utils::common::{remove_files, shard_path, source_stem};
use crate::utils::log::LogConfig;
use crate::utils::logfile::LogFile;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Seek, SeekFrom, Write};
use std::path::PathBuf;

/// Line counts computed for one invocation, before anything is written.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitPlan {
    pub total_lines: usize,
    pub data_lines: usize,
    pub line_counts: Vec<usize>,
}

pub struct CsvSplitter<'a> {
    source: File,
    stem: String,
    args: &'a CsvPartArgs,
    log_file: Option<LogFile>,
}

impl<'a> CsvSplitter<'a> {
    pub fn new(args: &'a CsvPartArgs) -> Result<Self> {
        let src_path = &args.filename;
        if !src_path.is_file() {
            log::error!("Source file not found: {}", src_path.display());
            return Err(CsvPartError::SourceNotFound(src_path.clone()).into());
        }
        if !args.out_dir.is_dir() {
            return Err(CsvPartError::InvalidArguments(format!(
                "output directory {} does not exist",
                args.out_dir.display()
            ))
            .into());
        }

        let source = File::open(src_path)
            .with_context(|| format!("Failed to open {}", src_path.display()))?;
        Ok(Self {
            source,
            stem: source_stem(src_path),
            args,
            log_file: None,
        })
    }

    pub fn with_log_file(mut self, log_file: LogFile) -> Self {
        self.log_file = Some(log_file);
        self
    }

    // 统计行数并计算每个分片的行数
    pub fn plan(&mut self) -> Result<SplitPlan> {
        self.source.seek(SeekFrom::Start(0))?;
        let total_lines = count_lines(&mut self.source)
            .with_context(|| format!("Failed to read {}", self.args.filename.display()))?;
        log::debug!(
            "{}: {} lines, {} header lines",
            self.args.filename.display(),
            total_lines,
            self.args.headers
        );

        let percs = parse_percentages(&self.args.percentages)?;
        if percs.is_empty() && !self.args.whole {
            return Err(CsvPartError::NothingToDo(
                "no percentages given and --whole not set".to_string(),
            )
            .into());
        }
        // --whole 且没有数据行时计划为空, 不写任何文件
        let line_counts =
            lines_from_percentages(total_lines, &percs, self.args.headers, self.args.whole)?;
        log::debug!("percentages {:?} -> line counts {:?}", percs, line_counts);
        if self.args.whole && !percs.is_empty() && line_counts.len() == percs.len() {
            LogConfig::println_warning("percentages already cover every data line, no remainder file");
        }
        if line_counts.contains(&0) {
            LogConfig::println_warning("some output files will only contain the header lines");
        }

        Ok(SplitPlan {
            total_lines,
            data_lines: total_lines - self.args.headers,
            line_counts,
        })
    }

    // 按计划写出分片, 任何一步失败都会删除本次已创建的文件
    pub fn split(&mut self, plan: &SplitPlan) -> Result<Vec<PathBuf>> {
        let mut created = Vec::with_capacity(plan.line_counts.len());
        match self.write_shards(plan, &mut created) {
            Ok(()) => Ok(created),
            Err(e) => {
                if !created.is_empty() {
                    log::info!("Removing {} partially written files", created.len());
                    let _ = remove_files(&created);
                }
                Err(e)
            }
        }
    }

    fn write_shards(&mut self, plan: &SplitPlan, created: &mut Vec<PathBuf>) -> Result<()> {
        self.source.seek(SeekFrom::Start(0))?;
        let mut reader = BufReader::new(&mut self.source);

        let mut header = Vec::new();
        for read in 0..self.args.headers {
            if !read_line(&mut reader, &mut header)? {
                return Err(CsvPartError::UnexpectedEof(
                    "headers".to_string(),
                    self.args.headers - read,
                )
                .into());
            }
        }

        let mut line = Vec::new();
        for (idx, &count) in plan.line_counts.iter().enumerate() {
            let path = shard_path(&self.args.out_dir, idx, &self.stem);
            let file = File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            created.push(path.clone());

            let mut writer = BufWriter::new(file);
            writer.write_all(&header)?;
            for written in 0..count {
                line.clear();
                if !read_line(&mut reader, &mut line)? {
                    return Err(CsvPartError::UnexpectedEof(
                        path.display().to_string(),
                        count - written,
                    )
                    .into());
                }
                writer.write_all(&line)?;
            }
            writer
                .flush()
                .with_context(|| format!("Failed to write {}", path.display()))?;

            log::info!("Wrote {} ({} lines)", path.display(), count);
            LogConfig::println_verbose(&format!("  {}: {} lines", path.display(), count));
            if let Some(log_file) = self.log_file.as_mut() {
                log_file.write_info(&format!("{}: {} lines", path.display(), count))?;
            }
        }

        Ok(())
    }

    pub fn run(&mut self) -> Result<()> {
        let result = self.run_inner();
        if let Some(log_file) = self.log_file.as_mut() {
            if let Err(e) = &result {
                if let Err(log_err) = log_file.write_error(&format!("{:#}", e)) {
                    log::warn!("Failed to write log file: {:#}", log_err);
                }
            }
            if let Err(log_err) = log_file.close() {
                log::warn!("Failed to close log file: {:#}", log_err);
            }
        }
        result
    }

    fn run_inner(&mut self) -> Result<()> {
        let plan = self.plan()?;
        LogConfig::println_verbose(&format!(
            "{}: {} lines ({} data lines) into {} files",
            self.args.filename.display(),
            plan.total_lines,
            plan.data_lines,
            plan.line_counts.len()
        ));

        if self.args.dry_run {
            for (idx, count) in plan.line_counts.iter().enumerate() {
                let path = shard_path(&self.args.out_dir, idx, &self.stem);
                LogConfig::println(&format!("{}: {} lines", path.display(), count));
            }
            return Ok(());
        }

        let created = self.split(&plan)?;
        if let Some(log_file) = self.log_file.as_mut() {
            log_file.log_summary(created.len(), plan.data_lines)?;
        }
        LogConfig::println("Done 👍");
        Ok(())
    }
}

// 读取一行(包含 '\n'), 追加到 buf; 没有读到完整的行时返回 false
fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> std::io::Result<bool> {
    let n = reader.read_until(b'\n', buf)?;
    Ok(n > 0 && buf.last() == Some(&b'\n'))
}
