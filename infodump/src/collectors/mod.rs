use serde::Serialize;
use sysinfo::System;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use uuid::Uuid;

use crate::config::ReportConfig;
use crate::output::OutputSink;

pub mod disk;
pub mod files;
pub mod mem;
pub mod net;
pub mod nvidia;
pub mod os;
pub mod proc;
pub mod temps;

/// Outcome of one fault-isolated report section. `Err` serializes as
/// `{"error": "..."}` and renders as a single error line.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SectionResult<T> {
    Ok(T),
    Err { error: String },
}

impl<T> From<anyhow::Result<T>> for SectionResult<T> {
    fn from(res: anyhow::Result<T>) -> Self {
        match res {
            Ok(value) => SectionResult::Ok(value),
            Err(err) => SectionResult::Err {
                error: format!("{err:#}"),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HostReport {
    pub report_id: String,
    pub generated_at: String,
    pub system: os::SystemInfo,
    pub network: net::NetStats,
    pub memory: mem::MemStats,
    pub disks: disk::DiskStats,
    pub largest_files: SectionResult<files::LargestFiles>,
    pub top_processes: proc::ProcStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperatures: Option<SectionResult<temps::SensorDump>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nvidia: Option<SectionResult<nvidia::GpuStats>>,
}

pub(crate) fn now_iso() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".into())
}

/// Runs every section in sequence. A failing section lands in the report
/// as its error value; nothing here short-circuits.
pub fn collect_report(cfg: &ReportConfig) -> HostReport {
    let mut sys = System::new_all();
    sys.refresh_all();
    HostReport {
        report_id: Uuid::new_v4().to_string(),
        generated_at: now_iso(),
        system: os::collect(),
        network: net::collect(),
        memory: mem::collect(&sys),
        disks: disk::collect(),
        largest_files: files::collect(&cfg.scan_path, cfg.largest_count).into(),
        top_processes: proc::collect(&sys, cfg.top_procs),
        temperatures: cfg.temperatures.then(|| temps::collect().into()),
        nvidia: cfg.nvidia.then(|| nvidia::collect().into()),
    }
}

pub fn render_report(report: &HostReport, cfg: &ReportConfig, sink: &dyn OutputSink) {
    sink.header("SYSTEM INFO");
    report.system.render(sink);

    sink.header("NETWORK");
    report.network.render(sink);

    sink.header("MEMORY");
    report.memory.render(sink);

    sink.header("DISK USAGE");
    report.disks.render(sink);

    sink.header(&format!(
        "{} LARGEST FILES in {}",
        cfg.largest_count,
        cfg.scan_path.display()
    ));
    match &report.largest_files {
        SectionResult::Ok(section) => section.render(sink),
        SectionResult::Err { error } => sink.error(error),
    }

    sink.header(&format!("TOP {} CPU PROCESSES", cfg.top_procs));
    report.top_processes.render(sink);

    if let Some(section) = &report.temperatures {
        sink.header("SYSTEM TEMPERATURES");
        match section {
            SectionResult::Ok(dump) => dump.render(sink),
            SectionResult::Err { error } => sink.error(error),
        }
    }

    // the GPU block prints without a header of its own
    if let Some(section) = &report.nvidia {
        match section {
            SectionResult::Ok(gpus) => gpus.render(sink),
            SectionResult::Err { error } => sink.error(error),
        }
    }
}
