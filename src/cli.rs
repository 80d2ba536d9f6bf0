/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */

use clap::{ArgAction, Args, Parser};
use std::path::PathBuf;

#[derive(Debug, Clone, Args, Default)]
#[group(id = "logging")]
#[command(next_help_heading = "Logging")]
pub struct LoggingOptions {
    /// Open file at path as logfile (overwrite existing file)
    #[arg(long = "lf", value_name = "LOGFILE")]
    pub logfile: Option<PathBuf>,

    /// Append to existing logfile
    #[arg(long = "la", action = ArgAction::SetTrue, requires = "logfile")]
    pub logfile_append: bool,

    /// Include info messages (default just the command line and summary)
    #[arg(long = "li", action = ArgAction::SetTrue, requires = "logfile")]
    pub logfile_info: bool,
}

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "csvpart",
    version,
    about = "Separate a CSV file into smaller ones based on percentage",
    after_help = "Example: csvpart --filename data.csv --headers 1 --whole 70 15"
)]
pub struct CsvPartArgs {
    /// Name of file to be partitioned
    #[arg(short = 'f', long = "filename", value_name = "FILE")]
    pub filename: PathBuf,

    /// Number of header lines to duplicate
    #[arg(short = 'H', long = "headers", value_name = "N")]
    pub headers: usize,

    /// Assume provided percentage is a part of a whole, and fill the remainder
    #[arg(short = 'w', long = "whole", action = ArgAction::SetTrue)]
    pub whole: bool,

    /// Directory the numbered output files are written to
    #[arg(short = 'o', long = "out-dir", value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Print the line count of every output file without writing anything
    #[arg(short = 'n', long = "dry-run", action = ArgAction::SetTrue)]
    pub dry_run: bool,

    /// Quiet operation
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose operation
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue, conflicts_with = "quiet")]
    pub verbose: bool,

    #[command(flatten)]
    pub logging: LoggingOptions,

    /// Percentages of the data lines, one output file each (e.g. 70 15 or 12.5%)
    #[arg(value_name = "PERCENTAGE")]
    pub percentages: Vec<String>,
}
