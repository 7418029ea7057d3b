use directories::UserDirs;
use std::path::PathBuf;

/// Resolved settings for one report run. Defaults come first, then any
/// CLI/env overrides via [`apply_overrides`].
#[derive(Clone, Debug)]
pub struct ReportConfig {
    pub scan_path: PathBuf,
    pub largest_count: usize,
    pub top_procs: usize,
    pub color: bool,
    pub temperatures: bool,
    pub nvidia: bool,
    pub json: bool,
}

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub path: Option<PathBuf>,
    pub largest: Option<usize>,
    pub cpu: Option<usize>,
    pub no_color: bool,
    pub no_temp: bool,
    pub no_nvidia: bool,
    pub json: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            scan_path: default_scan_path(),
            largest_count: 3,
            top_procs: 3,
            color: true,
            temperatures: true,
            nvidia: true,
            json: false,
        }
    }
}

fn default_scan_path() -> PathBuf {
    UserDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/home"))
}

pub fn apply_overrides(mut cfg: ReportConfig, o: &Overrides) -> ReportConfig {
    if let Some(path) = &o.path {
        cfg.scan_path = path.clone();
    }
    if let Some(n) = o.largest {
        cfg.largest_count = n;
    }
    if let Some(n) = o.cpu {
        cfg.top_procs = n;
    }
    if o.no_color {
        cfg.color = false;
    }
    if o.no_temp {
        cfg.temperatures = false;
    }
    if o.no_nvidia {
        cfg.nvidia = false;
    }
    if o.json {
        cfg.json = true;
    }
    cfg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_the_classic_invocation() {
        let cfg = ReportConfig::default();
        assert_eq!(cfg.largest_count, 3);
        assert_eq!(cfg.top_procs, 3);
        assert!(cfg.color && cfg.temperatures && cfg.nvidia);
        assert!(!cfg.json);
    }

    #[test]
    fn disable_flags_flip_their_sections() {
        let o = Overrides {
            no_color: true,
            no_temp: true,
            no_nvidia: true,
            ..Overrides::default()
        };
        let cfg = apply_overrides(ReportConfig::default(), &o);
        assert!(!cfg.color && !cfg.temperatures && !cfg.nvidia);
    }

    #[test]
    fn explicit_path_and_counts_win() {
        let o = Overrides {
            path: Some(PathBuf::from("/var/log")),
            largest: Some(10),
            cpu: Some(1),
            ..Overrides::default()
        };
        let cfg = apply_overrides(ReportConfig::default(), &o);
        assert_eq!(cfg.scan_path, PathBuf::from("/var/log"));
        assert_eq!(cfg.largest_count, 10);
        assert_eq!(cfg.top_procs, 1);
    }
}
