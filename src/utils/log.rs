/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */

// 统一的日志格式 封装
use ::log::LevelFilter;
use env_logger::Env;
use std::sync::OnceLock;

static LOG_CONFIG: OnceLock<LogConfig> = OnceLock::new();

#[derive(Debug)]
pub struct LogConfig {
    pub quiet: bool,
    pub verbose: bool,
}

impl LogConfig {
    // quiet 时只保留 error, verbose 时打开 debug, RUST_LOG 优先
    pub fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
        if quiet {
            LevelFilter::Error
        } else if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }

    pub fn init_logger(quiet: bool, verbose: bool, level: LevelFilter) {
        if LOG_CONFIG.set(LogConfig { quiet, verbose }).is_err() {
            ::log::warn!("Logger already initialized");
            return;
        }

        env_logger::Builder::from_env(Env::default().default_filter_or(level.to_string()))
            .format(|buf, record| {
                use std::io::Write;
                let level_style = buf.default_level_style(record.level());
                writeln!(
                    buf,
                    "[{} {level_style}{}{level_style:#} {}:{}] {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                    record.level(),
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                    record.args()
                )
            })
            .init();
    }

    pub fn println(msg: &str) {
        if let Some(config) = LOG_CONFIG.get() {
            if !config.quiet {
                println!("{}", msg);
            }
        }
    }

    pub fn println_warning(msg: &str) {
        if let Some(config) = LOG_CONFIG.get() {
            if config.quiet {
                return;
            }
            println!("csvpart warning: {}", msg);
        }
    }

    pub fn println_verbose(msg: &str) {
        if let Some(config) = LOG_CONFIG.get() {
            if config.verbose && !config.quiet {
                println!("{}", msg);
            }
        }
    }
}
