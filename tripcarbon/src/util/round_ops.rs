/// rounds to one decimal place. applied to emissions values at the
/// response boundary only; internal computation keeps full precision.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// rounds to the nearest whole number, as f64 for JSON uniformity.
pub fn round0(value: f64) -> f64 {
    value.round()
}
