use serde::Serialize;
use sysinfo::System;

use crate::output::OutputSink;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ProcessCpuEntry {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: Option<f32>,
}

#[derive(Debug, Serialize, Clone)]
pub struct ProcStats {
    pub process_count: usize,
    pub top: Vec<ProcessCpuEntry>,
}

/// Snapshot of the `count` busiest processes. A single snapshot has no
/// baseline interval, so usage can legitimately read 0.0 for everything.
pub fn collect(sys: &System, count: usize) -> ProcStats {
    let entries: Vec<ProcessCpuEntry> = sys
        .processes()
        .iter()
        .map(|(pid, process)| ProcessCpuEntry {
            pid: pid.as_u32(),
            name: process.name().to_string_lossy().into_owned(),
            cpu_percent: Some(process.cpu_usage()),
        })
        .collect();
    ProcStats {
        process_count: entries.len(),
        top: rank_by_cpu(entries, count),
    }
}

/// Descending by usage; missing usage ranks as zero but stays in. Ties
/// order by ascending PID so identical snapshots print identically.
pub fn rank_by_cpu(mut entries: Vec<ProcessCpuEntry>, count: usize) -> Vec<ProcessCpuEntry> {
    entries.sort_by(|a, b| {
        let (ua, ub) = (a.cpu_percent.unwrap_or(0.0), b.cpu_percent.unwrap_or(0.0));
        ub.partial_cmp(&ua)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.pid.cmp(&b.pid))
    });
    entries.truncate(count);
    entries
}

impl ProcStats {
    pub fn render(&self, sink: &dyn OutputSink) {
        for entry in &self.top {
            sink.line(&format!(
                "{} - {} ({:.1}% CPU)",
                entry.pid,
                entry.name,
                entry.cpu_percent.unwrap_or(0.0)
            ));
        }
    }
}
