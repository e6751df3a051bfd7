//! Display formatting for metric values.

use crate::metric::MetricId;

const TRILLION: f64 = 1_000_000_000_000.0;
const BILLION: f64 = 1_000_000_000.0;
const MILLION: f64 = 1_000_000.0;

/// Format a dollar amount with a T/B/M suffix, e.g. `$1.23B`.
///
/// Amounts below one million are written out with thousands separators.
pub fn format_currency(value: f64) -> String {
    if value >= TRILLION {
        format!("${:.2}T", value / TRILLION)
    } else if value >= BILLION {
        format!("${:.2}B", value / BILLION)
    } else if value >= MILLION {
        format!("${:.2}M", value / MILLION)
    } else {
        let decimals = if value.fract() == 0.0 { 0 } else { 2 };
        format!("${}", group_thousands(value, decimals))
    }
}

/// Render `value` with `decimals` fraction digits and comma grouping.
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if let Some(f) = frac_part {
        grouped.push('.');
        grouped.push_str(f);
    }

    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        grouped.insert(0, '-');
    }
    grouped
}

/// Format a reading the way the dashboard shows it.
///
/// Fed net liquidity is reported in millions of dollars.
pub fn format_metric_value(metric: MetricId, value: f64) -> String {
    match metric {
        MetricId::Us10yYield | MetricId::UsdtDominance => format!("{value:.2}%"),
        MetricId::BitcoinPrice => format!("${}", group_thousands(value, 0)),
        MetricId::FedNetLiquidity => format!("${:.2}T", value / MILLION),
        MetricId::StablecoinMcap | MetricId::RwaTvl => format_currency(value),
    }
}
