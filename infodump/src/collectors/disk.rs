use std::path::PathBuf;

use serde::Serialize;
use sysinfo::Disks;

use crate::output::OutputSink;

#[derive(Debug, Serialize, Clone)]
pub struct DiskMount {
    pub name: String,
    pub mount_point: PathBuf,
    pub total: u64,
    pub available: u64,
    pub used_percent: f64,
}

#[derive(Debug, Serialize, Clone)]
pub struct DiskStats {
    pub mounts: Vec<DiskMount>,
}

pub fn collect() -> DiskStats {
    let disks = Disks::new_with_refreshed_list();
    let mounts = disks
        .list()
        .iter()
        .map(|disk| {
            let total = disk.total_space();
            let available = disk.available_space();
            let used = total.saturating_sub(available);
            DiskMount {
                name: disk.name().to_string_lossy().into_owned(),
                mount_point: disk.mount_point().to_path_buf(),
                total,
                available,
                used_percent: if total == 0 {
                    0.0
                } else {
                    used as f64 * 100.0 / total as f64
                },
            }
        })
        .collect();
    DiskStats { mounts }
}

impl DiskStats {
    pub fn render(&self, sink: &dyn OutputSink) {
        if self.mounts.is_empty() {
            sink.notice("No disks detected.");
            return;
        }
        for mount in &self.mounts {
            sink.line(&format!(
                "{} ({}): {:.1}% used",
                mount.name,
                mount.mount_point.display(),
                mount.used_percent
            ));
        }
    }
}
