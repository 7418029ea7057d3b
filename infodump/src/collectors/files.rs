use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::output::OutputSink;

const GIB: u64 = 1 << 30;
const MIB: u64 = 1 << 20;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct FileSizeEntry {
    pub size: u64,
    pub path: PathBuf,
}

#[derive(Debug, Serialize, Clone)]
pub struct LargestFiles {
    pub scanned: usize,
    pub entries: Vec<FileSizeEntry>,
}

/// Walks the subtree under `root` and keeps the `count` biggest regular
/// files. Entries that vanish or cannot be read mid-scan are skipped; a
/// root that cannot be opened at all fails the whole section.
pub fn collect(root: &Path, count: usize) -> Result<LargestFiles> {
    fs::read_dir(root).with_context(|| format!("cannot open {}", root.display()))?;
    let mut entries = Vec::new();
    walk(root, &mut entries);
    let scanned = entries.len();
    entries.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
    entries.truncate(count);
    debug!(root = %root.display(), scanned, kept = entries.len(), "file scan done");
    Ok(LargestFiles { scanned, entries })
}

fn walk(dir: &Path, out: &mut Vec<FileSizeEntry>) {
    let reader = match fs::read_dir(dir) {
        Ok(reader) => reader,
        Err(_) => return,
    };
    for entry in reader.flatten() {
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(_) => continue,
        };
        if file_type.is_dir() {
            walk(&path, out);
        } else {
            // follows symlinks; broken links and special files drop out here
            match fs::metadata(&path) {
                Ok(meta) if meta.is_file() => out.push(FileSizeEntry {
                    size: meta.len(),
                    path,
                }),
                _ => {}
            }
        }
    }
}

pub fn human_size(bytes: u64) -> String {
    if bytes >= GIB {
        format!("{:.2} GB", bytes as f64 / GIB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    }
}

impl LargestFiles {
    pub fn render(&self, sink: &dyn OutputSink) {
        for entry in &self.entries {
            sink.line(&format!(
                "{} - {}",
                human_size(entry.size),
                entry.path.display()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str, bytes: usize) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(&vec![0u8; bytes]).unwrap();
        path
    }

    #[test]
    fn keeps_the_k_biggest_sorted_descending() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "small.bin", 10);
        let mid = touch(tmp.path(), "mid.bin", 500);
        let sub = tmp.path().join("nested");
        fs::create_dir(&sub).unwrap();
        let big = touch(&sub, "big.bin", 4096);

        let got = collect(tmp.path(), 2).unwrap();
        assert_eq!(got.scanned, 3);
        assert_eq!(
            got.entries,
            vec![
                FileSizeEntry {
                    size: 4096,
                    path: big
                },
                FileSizeEntry {
                    size: 500,
                    path: mid
                },
            ]
        );
    }

    #[test]
    fn equal_sizes_tie_break_on_path() {
        let tmp = TempDir::new().unwrap();
        let b = touch(tmp.path(), "b.bin", 64);
        let a = touch(tmp.path(), "a.bin", 64);

        let got = collect(tmp.path(), 5).unwrap();
        let paths: Vec<PathBuf> = got.entries.into_iter().map(|e| e.path).collect();
        assert_eq!(paths, vec![a, b]);
    }

    #[test]
    fn zero_count_yields_empty_without_error() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "data.bin", 32);

        let got = collect(tmp.path(), 0).unwrap();
        assert_eq!(got.scanned, 1);
        assert!(got.entries.is_empty());
    }

    #[test]
    fn fewer_files_than_requested_returns_all() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "only.bin", 8);

        let got = collect(tmp.path(), 10).unwrap();
        assert_eq!(got.entries.len(), 1);
    }

    #[test]
    fn missing_root_is_a_section_error() {
        let tmp = TempDir::new().unwrap();
        let gone = tmp.path().join("nope");
        assert!(collect(&gone, 3).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn unmeasurable_entries_are_skipped_not_fatal() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "real.bin", 128);
        // a dangling symlink behaves like a file deleted between
        // traversal and size read
        std::os::unix::fs::symlink(tmp.path().join("gone.bin"), tmp.path().join("dangling"))
            .unwrap();

        let got = collect(tmp.path(), 10).unwrap();
        assert_eq!(got.entries.len(), 1);
        assert!(got.entries[0].path.ends_with("real.bin"));
    }

    #[test]
    fn gigabyte_and_megabyte_formatting() {
        let tmp = TempDir::new().unwrap();
        // sparse files keep the fixture cheap; metadata still reports full size
        for (name, len) in [("a.img", 500 * MIB), ("b.img", 2 * GIB), ("c.img", 10 * MIB)] {
            let file = File::create(tmp.path().join(name)).unwrap();
            file.set_len(len).unwrap();
        }

        let got = collect(tmp.path(), 2).unwrap();
        let rendered: Vec<String> = got.entries.iter().map(|e| human_size(e.size)).collect();
        assert_eq!(rendered, vec!["2.00 GB".to_string(), "500.00 MB".to_string()]);
    }

    #[test]
    fn human_size_switches_units_at_one_gigabyte() {
        assert_eq!(human_size(GIB), "1.00 GB");
        assert_eq!(human_size(GIB - 1), "1024.00 MB");
        assert_eq!(human_size(0), "0.00 MB");
    }
}
