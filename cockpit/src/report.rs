//! Text rendering of the dashboard and the catalyst radar.

use std::fmt;

use radar::{CalendarEvent, Outcome, WeekGroup, format_event_time};
use serde::Serialize;
use signals::format::format_metric_value;
use signals::{DominanceSentiment, MetricId, MetricsDocument, RiskRegime};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetricLine {
    pub metric: MetricId,
    pub label: &'static str,
    /// Formatted reading, `None` when the collector failed.
    pub value: Option<String>,
    /// Week-over-week change text, where the collector provides one.
    pub weekly: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardReport {
    pub timestamp: String,
    pub regime: Option<RiskRegime>,
    pub sentiment: Option<DominanceSentiment>,
    pub lines: Vec<MetricLine>,
}

fn weekly_text(doc: &MetricsDocument, metric: MetricId) -> Option<String> {
    let delta = doc.weekly_delta(metric)?;
    let arrow = if delta.amount >= 0.0 { "▲" } else { "▼" };

    let text = match metric {
        MetricId::FedNetLiquidity => format!(
            "{arrow} ${:.0}B WoW ({})",
            delta.amount.abs(),
            delta.liquidity_label()
        ),
        _ => format!("{arrow} {:.2} (7d)", delta.amount.abs()),
    };
    Some(text)
}

impl DashboardReport {
    pub fn from_document(doc: &MetricsDocument) -> Self {
        let lines = MetricId::ALL
            .into_iter()
            .map(|metric| MetricLine {
                metric,
                label: metric.label(),
                value: doc.value(metric).map(|v| format_metric_value(metric, v)),
                weekly: weekly_text(doc, metric),
            })
            .collect();

        Self {
            timestamp: doc.timestamp.clone(),
            regime: doc.regime(),
            sentiment: doc
                .value(MetricId::UsdtDominance)
                .map(DominanceSentiment::from_dominance),
            lines,
        }
    }
}

impl fmt::Display for DashboardReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Snapshot {}", self.timestamp)?;
        match self.regime {
            Some(regime) => writeln!(f, "Macro: {regime}")?,
            None => writeln!(f, "Macro: N/A")?,
        }

        for line in &self.lines {
            write!(f, "  {:<22} {}", line.label, line.value.as_deref().unwrap_or("N/A"))?;
            if let Some(weekly) = &line.weekly {
                write!(f, "  {weekly}")?;
            }
            if line.metric == MetricId::UsdtDominance {
                if let Some(sentiment) = self.sentiment {
                    write!(f, "  [{sentiment}]")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn result_text(event: &CalendarEvent) -> String {
    let forecast = event.forecast.as_deref().unwrap_or("N/A");

    let Some(actual) = event.actual.as_deref().filter(|_| event.is_completed()) else {
        return format!("Forecast: {forecast}");
    };

    let mut text = format!("Act: {actual}  Frc: {forecast}");
    if let Some(dev) = event.deviation() {
        let tag = match dev.outcome() {
            Outcome::Beat => " beat",
            Outcome::Miss => " miss",
            Outcome::InLine => "",
        };
        let sign = if dev.pct > 0.0 { "+" } else { "" };
        text.push_str(&format!("  Dev: {sign}{:.1}%{tag}", dev.pct));
        if dev.is_notable() {
            text.push_str(" !");
        }
    }
    text
}

/// One line per event, each prefixed by its week label.
pub fn radar_lines(groups: &[WeekGroup<'_>]) -> Vec<String> {
    groups
        .iter()
        .flat_map(|group| {
            group.events.iter().map(move |event| {
                format!(
                    "[{}] {}  {} ({:?})  {}",
                    group.label(),
                    format_event_time(event.date, &event.time),
                    event.name,
                    event.impact,
                    result_text(event)
                )
            })
        })
        .collect()
}
