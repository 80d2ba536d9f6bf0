/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */

mod cli;
mod error;
mod partition;
mod splitter;
mod utils;

use clap::Parser;
use cli::CsvPartArgs;
use error::CsvPartError;
use splitter::CsvSplitter;
use utils::log::LogConfig;
use utils::logfile::LogFile;

fn run(args: &CsvPartArgs) -> anyhow::Result<()> {
    let mut splitter = CsvSplitter::new(args)?;

    if let Some(path) = &args.logging.logfile {
        let mut log_file = LogFile::new(path, args.logging.logfile_append, args.logging.logfile_info)?;
        log_file.log_command(&std::env::args().collect::<Vec<_>>())?;
        splitter = splitter.with_log_file(log_file);
    }

    splitter.run()
}

// CsvPartError 按类别返回退出码, 其余 IO 错误为 4, 未知错误为 1
fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<CsvPartError>() {
        e.exit_code()
    } else if err.downcast_ref::<std::io::Error>().is_some() {
        4
    } else {
        1
    }
}

fn main() {
    let args = CsvPartArgs::parse();
    LogConfig::init_logger(
        args.quiet,
        args.verbose,
        LogConfig::level_for(args.quiet, args.verbose),
    );
    log::debug!("{:?}", args);

    if let Err(e) = run(&args) {
        eprintln!("{:#}", e);
        std::process::exit(exit_code(&e));
    }
}
