/// Round to whole numbers (calories, adjustments).
#[inline]
pub fn round0(value: f64) -> f64 {
    value.round()
}

/// Round to one decimal place (macro grams, weights, rates).
#[inline]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places (trend rates in kg/week).
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
