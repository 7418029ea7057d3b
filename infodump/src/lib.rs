pub mod collectors;
pub mod config;
pub mod logging;
pub mod output;

#[cfg(test)]
mod tests {
    use super::config::{apply_overrides, Overrides, ReportConfig};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn overrides_prefer_cli_over_defaults(n in 0usize..4096) {
            let o = Overrides { largest: Some(n), ..Overrides::default() };
            let cfg = apply_overrides(ReportConfig::default(), &o);
            prop_assert_eq!(cfg.largest_count, n);
        }
    }
}
