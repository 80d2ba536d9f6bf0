/*
 * SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
 *
 * SPDX-License-Identifier: GPL-2.0-or-later
 */

use std::fs;
use std::path::{Path, PathBuf};

// 源文件名第一个 '.' 之前的部分, 例如 data.2024.csv -> data
pub fn source_stem(source: &Path) -> String {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.split('.').next() {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => name,
    }
}

// 生成分片文件路径: <out_dir>/<index>_<stem>.csv
pub fn shard_path(out_dir: &Path, index: usize, stem: &str) -> PathBuf {
    out_dir.join(format!("{}_{}.csv", index, stem))
}

// 删除已创建的分片文件, 尽量全部删除, 返回最后一个错误
pub fn remove_files(paths: &[PathBuf]) -> std::io::Result<()> {
    let mut result = Ok(());
    for path in paths {
        match fs::remove_file(path) {
            Ok(()) => log::debug!("Removed {}", path.display()),
            Err(e) => {
                log::warn!("Failed to remove {}: {}", path.display(), e);
                result = Err(e);
            }
        }
    }
    result
}
