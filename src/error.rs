/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CsvPartError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csvpart error: Not found ({0})")]
    SourceNotFound(PathBuf),

    #[error("csvpart error: Invalid command arguments ({0})")]
    InvalidArguments(String),

    #[error("csvpart error: Nothing to do! ({0})")]
    NothingToDo(String),

    #[error("csvpart error: Invalid percentage '{0}'")]
    InvalidPercentage(String),

    #[error("csvpart error: Supplied percentages sum larger than 100 (reached {0} at '{1}')")]
    PercentageSumExceeded(f32, String),

    #[error("csvpart error: Headers cannot be larger than file's line count ({headers} > {lines})")]
    HeadersExceedLines { headers: usize, lines: usize },

    #[error("csvpart error: Line sum larger than line count ({allocated} > {available}). Attempt without --whole flag")]
    AllocationExceeded { allocated: usize, available: usize },

    #[error("csvpart error: Unexpected end of file while writing {0} (expected {1} more lines)")]
    UnexpectedEof(String, usize),
}

impl CsvPartError {
    // 进程退出码: 输入错误 2, 分配错误 3, IO 错误 4
    pub fn exit_code(&self) -> i32 {
        match self {
            CsvPartError::SourceNotFound(_)
            | CsvPartError::InvalidArguments(_)
            | CsvPartError::NothingToDo(_)
            | CsvPartError::InvalidPercentage(_)
            | CsvPartError::PercentageSumExceeded(..)
            | CsvPartError::HeadersExceedLines { .. } => 2,
            CsvPartError::AllocationExceeded { .. } => 3,
            CsvPartError::Io(_) | CsvPartError::UnexpectedEof(..) => 4,
        }
    }
}
