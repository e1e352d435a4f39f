/// Compact year labels: `950`, `12.5K`, `3.0M`.
pub fn format_years(value: f64) -> String {
    if value >= 1_000_000.0 {
        return format!("{:.1}M", value / 1_000_000.0);
    }
    if value >= 1000.0 {
        return format!("{:.1}K", value / 1000.0);
    }
    format!("{value:.0}")
}

/// Compact count labels up to quadrillions: `999`, `4.2M`, `1.0B`, `7.5T`, `2.0Q`.
/// Thousands stay unscaled.
pub fn format_count(value: f64) -> String {
    const SCALES: [(f64, &str); 4] = [(1e15, "Q"), (1e12, "T"), (1e9, "B"), (1e6, "M")];
    format_scaled(value, &SCALES)
}

/// Axis labels for colony counts: `950`, `45.0K`, `4.2M`, `1.0B`, `7.5T`.
pub fn format_colonies(value: f64) -> String {
    const SCALES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];
    format_scaled(value, &SCALES)
}

fn format_scaled(value: f64, scales: &[(f64, &str)]) -> String {
    for (scale, suffix) in scales {
        if value >= *scale {
            return format!("{:.1}{suffix}", value / scale);
        }
    }
    format!("{value:.0}")
}
