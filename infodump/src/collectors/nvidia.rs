use std::io::ErrorKind;
use std::process::Command;

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::output::OutputSink;

#[derive(Debug, Serialize, Clone)]
pub struct GpuStats {
    pub detected: bool,
    pub temps_c: Vec<String>,
}

pub fn collect() -> Result<GpuStats> {
    let listing = run_nvidia_smi(&["-L"])?;
    if listing.trim().is_empty() {
        return Ok(GpuStats {
            detected: false,
            temps_c: Vec::new(),
        });
    }
    let readout = run_nvidia_smi(&[
        "--query-gpu=temperature.gpu",
        "--format=csv,noheader,nounits",
    ])?;
    Ok(GpuStats {
        detected: true,
        temps_c: parse_temps(&readout),
    })
}

fn run_nvidia_smi(args: &[&str]) -> Result<String> {
    let output = Command::new("nvidia-smi").args(args).output().map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            anyhow!("nvidia-smi not found. Nvidia drivers may not be installed.")
        } else {
            anyhow!("failed to run nvidia-smi: {err}")
        }
    })?;
    if !output.status.success() {
        return Err(anyhow!("nvidia-smi exited with {}", output.status));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn parse_temps(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

impl GpuStats {
    pub fn render(&self, sink: &dyn OutputSink) {
        if !self.detected {
            sink.notice("No Nvidia GPU detected.");
            return;
        }
        if self.temps_c.is_empty() {
            sink.error("Unable to retrieve Nvidia GPU temperature.");
            return;
        }
        for (idx, temp) in self.temps_c.iter().enumerate() {
            sink.line(&format!("GPU {idx}: {temp}°C"));
        }
    }
}
