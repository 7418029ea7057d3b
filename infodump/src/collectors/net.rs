use std::io::ErrorKind;
use std::process::{Command, Stdio};

use serde::Serialize;
use sysinfo::Networks;
use tracing::debug;

use crate::output::OutputSink;

const PROBE_TARGET: &str = "1.1.1.1";

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutboundProbe {
    Reachable,
    Unreachable,
    PingMissing,
}

#[derive(Debug, Serialize, Clone)]
pub struct Iface {
    pub name: String,
    pub total_received: u64,
    pub total_transmitted: u64,
}

#[derive(Debug, Serialize, Clone)]
pub struct NetStats {
    pub outbound: OutboundProbe,
    pub ifaces: Vec<Iface>,
}

pub fn collect() -> NetStats {
    let outbound = probe_outbound(PROBE_TARGET);
    debug!(?outbound, "outbound probe finished");
    let networks = Networks::new_with_refreshed_list();
    let mut ifaces: Vec<Iface> = networks
        .iter()
        .map(|(name, data)| Iface {
            name: name.clone(),
            total_received: data.total_received(),
            total_transmitted: data.total_transmitted(),
        })
        .collect();
    // sysinfo hands interfaces back in hash order
    ifaces.sort_by(|a, b| a.name.cmp(&b.name));
    NetStats { outbound, ifaces }
}

fn probe_outbound(target: &str) -> OutboundProbe {
    let count_flag = if cfg!(target_os = "windows") { "-n" } else { "-c" };
    match Command::new("ping")
        .args([count_flag, "1", target])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
    {
        Ok(status) if status.success() => OutboundProbe::Reachable,
        Ok(_) => OutboundProbe::Unreachable,
        Err(err) if err.kind() == ErrorKind::NotFound => OutboundProbe::PingMissing,
        Err(_) => OutboundProbe::Unreachable,
    }
}

impl NetStats {
    pub fn render(&self, sink: &dyn OutputSink) {
        match self.outbound {
            OutboundProbe::Reachable => sink.line("✅ Outbound connection successful."),
            OutboundProbe::Unreachable => sink.line("❌ Outbound connection FAILED."),
            OutboundProbe::PingMissing => {
                sink.notice("ping command not found; outbound check skipped.")
            }
        }
        sink.line("");
        sink.line("Interfaces:");
        for iface in &self.ifaces {
            sink.line(&format!(" - {}", iface.name));
        }
    }
}
