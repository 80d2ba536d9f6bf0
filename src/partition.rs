/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */

use crate::error::CsvPartError;
use regex::Regex;
use std::io::{self, Read};
use std::sync::OnceLock;

const READ_BUF_SIZE: usize = 32 * 1024;

static PERCENTAGE_RE: OnceLock<Regex> = OnceLock::new();

// 统计换行符数量, 末尾没有 '\n' 的行不计入
pub fn count_lines<R: Read>(mut reader: R) -> io::Result<usize> {
    let mut buf = vec![0u8; READ_BUF_SIZE];
    let mut count = 0;

    loop {
        match reader.read(&mut buf) {
            Ok(0) => return Ok(count),
            Ok(n) => count += buf[..n].iter().filter(|&&b| b == b'\n').count(),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

// 解析百分比参数, 支持 50, +5, 33.33, 12.5% 等格式
// 累加和在每个参数之后检查, 超过 100 立即报错
pub fn parse_percentages<S: AsRef<str>>(args: &[S]) -> Result<Vec<f32>, CsvPartError> {
    let re = PERCENTAGE_RE.get_or_init(|| {
        Regex::new(r"^\+?(\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?%?$").expect("valid percentage pattern")
    });

    let mut percs = Vec::with_capacity(args.len());
    let mut sum = 0f32;
    for arg in args {
        let arg = arg.as_ref().trim();
        if !re.is_match(arg) {
            return Err(CsvPartError::InvalidPercentage(arg.to_string()));
        }
        let value = arg
            .trim_end_matches('%')
            .parse::<f32>()
            .map_err(|_| CsvPartError::InvalidPercentage(arg.to_string()))?;
        if !value.is_finite() {
            return Err(CsvPartError::InvalidPercentage(arg.to_string()));
        }

        sum += value;
        if sum > 100.0 {
            return Err(CsvPartError::PercentageSumExceeded(sum, arg.to_string()));
        }
        percs.push(value);
    }

    Ok(percs)
}

/// Converts percentages of the data lines (total minus headers) into per-shard
/// line counts.
///
/// Each count is `p / 100 * data_lines` computed in single precision and
/// rounded half away from zero. Rounding errors are not redistributed; with
/// `whole` set, one extra entry holding the exact remainder is appended when
/// the counts don't already cover every data line.
pub fn lines_from_percentages(
    total_lines: usize,
    percs: &[f32],
    headers: usize,
    whole: bool,
) -> Result<Vec<usize>, CsvPartError> {
    let data_lines = total_lines
        .checked_sub(headers)
        .ok_or(CsvPartError::HeadersExceedLines {
            headers,
            lines: total_lines,
        })?;

    let mut counts = Vec::with_capacity(percs.len() + 1);
    let mut sum = 0usize;
    for &p in percs {
        let count = ((p / 100.0) * data_lines as f32) as f64;
        let count = count.round() as usize;
        sum += count;
        counts.push(count);
    }

    // sum == data_lines 时百分比已经覆盖全部数据行
    if whole && sum != data_lines {
        if sum > data_lines {
            return Err(CsvPartError::AllocationExceeded {
                allocated: sum,
                available: data_lines,
            });
        }
        counts.push(data_lines - sum);
    }

    Ok(counts)
}
