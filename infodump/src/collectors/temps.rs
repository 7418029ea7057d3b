use std::io::ErrorKind;
use std::process::Command;

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::output::OutputSink;

#[derive(Debug, Serialize, Clone)]
pub struct SensorDump {
    pub raw: String,
}

/// Captures `sensors` output verbatim. A missing binary is its own named
/// condition so the operator knows to install lm-sensors.
pub fn collect() -> Result<SensorDump> {
    let output = Command::new("sensors").output().map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            anyhow!("sensors command not found. Please install lm-sensors.")
        } else {
            anyhow!("failed to run sensors: {err}")
        }
    })?;
    if !output.status.success() {
        return Err(anyhow!("sensors exited with {}", output.status));
    }
    Ok(SensorDump {
        raw: String::from_utf8_lossy(&output.stdout).into_owned(),
    })
}

impl SensorDump {
    pub fn render(&self, sink: &dyn OutputSink) {
        for line in self.raw.lines() {
            sink.line(line);
        }
    }
}
