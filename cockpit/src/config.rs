use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use chrono::{FixedOffset, Offset, Utc};
use tracing::warn;

/// Default refresh cadence, matching the upstream collection job.
pub const DEFAULT_REFRESH_SECS: u64 = 15 * 60;

/// Calendar times are published in UTC+8.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 8;

/// Workflow dispatch target for the "refresh now" action.
#[derive(Clone, Debug)]
pub struct TriggerConfig {
    /// Personal access token. Without it the trigger is disabled.
    pub token: Option<String>,
    pub owner: Option<String>,
    pub repo: String,
    /// Workflow file name under `.github/workflows`.
    pub workflow: String,
    /// Branch the workflow runs on.
    pub git_ref: String,
    pub api_base: String,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    // =========================
    // Documents
    // =========================
    /// Metrics snapshot written by the collector.
    pub dashboard_path: PathBuf,

    /// Economic calendar written by the collector.
    pub calendar_path: PathBuf,

    // =========================
    // Refresh loop
    // =========================
    /// How often the watcher re-reads both documents.
    pub refresh_interval: Duration,

    /// Offset of the timezone calendar dates are expressed in.
    ///
    /// "Today" for radar bucketing is taken in this offset.
    pub reference_offset: FixedOffset,

    // =========================
    // Update trigger
    // =========================
    pub trigger: TriggerConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    ///
    /// Values that fail to parse fall back to their default with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let string_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let refresh_secs: u64 = parse_or(&lookup, "REFRESH_INTERVAL_SECS", DEFAULT_REFRESH_SECS);
        let refresh_secs = if refresh_secs == 0 {
            warn!(key = "REFRESH_INTERVAL_SECS", "zero interval, using default");
            DEFAULT_REFRESH_SECS
        } else {
            refresh_secs
        };

        let offset_hours: i32 = parse_or(&lookup, "REFERENCE_UTC_OFFSET_HOURS", DEFAULT_UTC_OFFSET_HOURS);
        let reference_offset = offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| {
                warn!(offset_hours, "utc offset out of range, using default");
                default_offset()
            });

        Self {
            dashboard_path: string_or("DASHBOARD_DATA_PATH", "public/dashboard_data.json").into(),
            calendar_path: string_or("CALENDAR_DATA_PATH", "public/calendar_data.json").into(),

            refresh_interval: Duration::from_secs(refresh_secs),
            reference_offset,

            trigger: TriggerConfig {
                token: lookup("GITHUB_PAT").filter(|s| !s.is_empty()),
                owner: lookup("REPO_OWNER").filter(|s| !s.is_empty()),
                repo: string_or("REPO_NAME", "strategic-cockpit-dashboard"),
                workflow: string_or("WORKFLOW_FILE", "update_data.yml"),
                git_ref: string_or("WORKFLOW_REF", "main"),
                api_base: string_or("GITHUB_API_BASE", "https://api.github.com"),
            },
        }
    }
}

fn default_offset() -> FixedOffset {
    FixedOffset::east_opt(DEFAULT_UTC_OFFSET_HOURS * 3600).unwrap_or_else(|| Utc.fix())
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "unparseable config value, using default");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tracing_test::traced_test;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let cfg = AppConfig::from_lookup(|_| None);

        assert_eq!(cfg.dashboard_path, PathBuf::from("public/dashboard_data.json"));
        assert_eq!(cfg.calendar_path, PathBuf::from("public/calendar_data.json"));
        assert_eq!(cfg.refresh_interval, Duration::from_secs(900));
        assert_eq!(cfg.reference_offset.local_minus_utc(), 8 * 3600);
        assert!(cfg.trigger.token.is_none());
        assert_eq!(cfg.trigger.workflow, "update_data.yml");
        assert_eq!(cfg.trigger.git_ref, "main");
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("REFRESH_INTERVAL_SECS", "60"),
            ("REFERENCE_UTC_OFFSET_HOURS", "-5"),
            ("GITHUB_PAT", "ghp_test"),
            ("REPO_OWNER", "acme"),
        ]));

        assert_eq!(cfg.refresh_interval, Duration::from_secs(60));
        assert_eq!(cfg.reference_offset.local_minus_utc(), -5 * 3600);
        assert_eq!(cfg.trigger.token.as_deref(), Some("ghp_test"));
        assert_eq!(cfg.trigger.owner.as_deref(), Some("acme"));
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("GITHUB_PAT", "")]));
        assert!(cfg.trigger.token.is_none());
    }

    #[traced_test]
    #[test]
    fn bad_numbers_fall_back_with_warning() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("REFRESH_INTERVAL_SECS", "soon"),
            ("REFERENCE_UTC_OFFSET_HOURS", "99"),
        ]));

        assert_eq!(cfg.refresh_interval, Duration::from_secs(DEFAULT_REFRESH_SECS));
        assert_eq!(cfg.reference_offset.local_minus_utc(), 8 * 3600);
        assert!(logs_contain("unparseable config value"));
        assert!(logs_contain("utc offset out of range"));
    }
}
