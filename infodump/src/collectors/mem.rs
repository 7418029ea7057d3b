use serde::Serialize;
use sysinfo::System;

use crate::output::OutputSink;

const GIB: f64 = (1u64 << 30) as f64;

#[derive(Debug, Serialize, Clone)]
pub struct MemStats {
    pub total: u64,
    pub available: u64,
    pub used: u64,
    pub used_percent: f64,
}

pub fn collect(sys: &System) -> MemStats {
    let total = sys.total_memory();
    let available = sys.available_memory();
    let used = sys.used_memory();
    MemStats {
        total,
        available,
        used,
        used_percent: if total == 0 {
            0.0
        } else {
            used as f64 * 100.0 / total as f64
        },
    }
}

impl MemStats {
    pub fn render(&self, sink: &dyn OutputSink) {
        sink.line(&format!("Total: {:.2} GB", self.total as f64 / GIB));
        sink.line(&format!("Available: {:.2} GB", self.available as f64 / GIB));
        sink.line(&format!(
            "Used: {:.2} GB ({:.1}%)",
            self.used as f64 / GIB,
            self.used_percent
        ));
    }
}
