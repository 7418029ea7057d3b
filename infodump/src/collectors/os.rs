use std::env;
use std::path::PathBuf;

use serde::Serialize;
use sysinfo::System;

use crate::output::OutputSink;

#[derive(Debug, Serialize, Clone)]
pub struct SystemInfo {
    pub current_dir: Option<PathBuf>,
    pub username: String,
    pub hostname: Option<String>,
    pub kernel: Option<String>,
    pub os_name: Option<String>,
    pub os_version: Option<String>,
    pub lang: Option<String>,
    pub timestamp: String,
    pub uptime_secs: u64,
}

pub fn collect() -> SystemInfo {
    SystemInfo {
        current_dir: env::current_dir().ok(),
        username: env::var("USER")
            .or_else(|_| env::var("USERNAME"))
            .unwrap_or_else(|_| "unknown".into()),
        hostname: System::host_name(),
        kernel: System::kernel_version(),
        os_name: System::name(),
        os_version: System::os_version(),
        lang: env::var("LANG").ok(),
        timestamp: super::now_iso(),
        uptime_secs: System::uptime(),
    }
}

impl SystemInfo {
    pub fn render(&self, sink: &dyn OutputSink) {
        let or_unknown = |value: &Option<String>| value.clone().unwrap_or_else(|| "Unknown".into());
        sink.line(&format!(
            "Current Directory: {}",
            self.current_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "Unknown".into())
        ));
        sink.line(&format!("Username: {}", self.username));
        sink.line(&format!("Hostname: {}", or_unknown(&self.hostname)));
        sink.line(&format!("Kernel: {}", or_unknown(&self.kernel)));
        let os = match (&self.os_name, &self.os_version) {
            (Some(name), Some(version)) => format!("{name} {version}"),
            (Some(name), None) => name.clone(),
            _ => "Unknown".into(),
        };
        sink.line(&format!("OS: {os}"));
        sink.line(&format!("Language: {}", or_unknown(&self.lang)));
        sink.line(&format!("Time: {}", self.timestamp));
        sink.line(&format!(
            "Uptime: {}h {}m",
            self.uptime_secs / 3600,
            (self.uptime_secs % 3600) / 60
        ));
    }
}
