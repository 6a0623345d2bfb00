use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Reusable output buffer for generated axis ticks.
///
/// The buffer is refilled on every call to [`compute_axis_stops`]; its
/// allocation is kept so per-frame generation does not allocate once warmed up.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisStops {
    stops: Vec<f32>,
    decimals: usize,
}

impl AxisStops {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stops: Vec::with_capacity(capacity),
            decimals: 0,
        }
    }

    /// Tick values in ascending order.
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.stops
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Number of fractional digits labels need for this tick spacing.
    #[must_use]
    pub fn decimals(&self) -> usize {
        self.decimals
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.stops.capacity()
    }

    fn clear(&mut self) {
        self.stops.clear();
        self.decimals = 0;
    }
}

/// Fills `out` with "nice" tick values covering `[start, stop]`.
///
/// The raw interval `(stop - start) / ideal_step_count` is rounded to one
/// significant digit; a leading digit above 5 is promoted to the next power of
/// ten. Ticks are the multiples of the interval inside the range, with the
/// upper bound nudged one ULP so a tick landing exactly on `stop` survives
/// floating-point truncation.
///
/// `start == stop` or `ideal_step_count == 0` yields no ticks.
pub fn compute_axis_stops(
    start: f32,
    stop: f32,
    ideal_step_count: usize,
    out: &mut AxisStops,
) -> ChartResult<()> {
    out.clear();

    if !start.is_finite() || !stop.is_finite() || start > stop {
        return Err(ChartError::InvalidRange { start, stop });
    }
    let range = f64::from(stop) - f64::from(start);
    if ideal_step_count == 0 || range <= 0.0 {
        return Ok(());
    }

    let raw_interval = range / ideal_step_count as f64;
    let mut interval = round_to_one_significant_figure(raw_interval);
    if interval <= 0.0 || !interval.is_finite() {
        return Ok(());
    }

    let magnitude = 10f64.powf(interval.log10().floor());
    let leading_digit = (interval / magnitude).round();
    if leading_digit > 5.0 {
        // Steps such as 0.7 or 90 read badly; promote to 1 or 100.
        interval = 10.0 * magnitude;
    }

    let first = (f64::from(start) / interval).ceil() * interval;
    let last = ((f64::from(stop) / interval).floor() * interval).next_up();

    let mut index = 0u32;
    loop {
        let value = first + f64::from(index) * interval;
        if value > last {
            break;
        }
        out.stops.push(value as f32);
        index += 1;
    }

    out.decimals = decimals_for_interval(interval);
    Ok(())
}

/// Rounds to one significant decimal digit, ties to even (`0.25 -> 0.2`).
#[must_use]
pub fn round_to_one_significant_figure(value: f64) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let digits = value.abs().log10().ceil();
    let power = 1.0 - digits;
    let magnitude = 10f64.powf(power);
    (value * magnitude).round_ties_even() / magnitude
}

fn decimals_for_interval(interval: f64) -> usize {
    if interval >= 1.0 {
        return 0;
    }
    // Absorb log10 noise such as -log10(0.1) = 1.0000000000000002.
    let digits = (-interval.log10() - 1e-9).ceil();
    if digits > 0.0 { digits as usize } else { 0 }
}

/// Ideal tick count for an axis: content extent divided by twice the
/// estimated label extent, so every label keeps a label-sized gap.
#[must_use]
pub fn ideal_step_count(content_extent_px: f32, label_extent_px: f32) -> usize {
    if !content_extent_px.is_finite()
        || !label_extent_px.is_finite()
        || content_extent_px <= 0.0
        || label_extent_px <= 0.0
    {
        return 0;
    }
    (content_extent_px / label_extent_px / 2.0) as usize
}

/// Text rendering options for tick and value labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueFormatter {
    /// Fixed fractional digits; `None` defers to the caller-supplied hint.
    #[serde(default)]
    pub decimal_digits: Option<usize>,
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
    #[serde(default)]
    pub prepended_text: String,
    #[serde(default)]
    pub appended_text: String,
}

fn default_decimal_separator() -> char {
    '.'
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self {
            decimal_digits: None,
            decimal_separator: default_decimal_separator(),
            prepended_text: String::new(),
            appended_text: String::new(),
        }
    }
}

impl ValueFormatter {
    #[must_use]
    pub fn with_decimal_digits(mut self, digits: usize) -> Self {
        self.decimal_digits = Some(digits);
        self
    }

    #[must_use]
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    #[must_use]
    pub fn with_affixes(mut self, prepended: impl Into<String>, appended: impl Into<String>) -> Self {
        self.prepended_text = prepended.into();
        self.appended_text = appended.into();
        self
    }

    /// Formats `value` with the configured digits, or `decimals_hint` if unset.
    #[must_use]
    pub fn format(&self, value: f32, decimals_hint: usize) -> String {
        let digits = self.decimal_digits.unwrap_or(decimals_hint);
        let mut number = format!("{value:.digits$}");
        if number.starts_with('-') && number[1..].chars().all(|c| c == '0' || c == '.') {
            // "-0.0" reads as noise next to "0.0" on an axis.
            number.remove(0);
        }
        if self.decimal_separator != '.' {
            number = number.replace('.', &self.decimal_separator.to_string());
        }

        let mut label = String::with_capacity(
            self.prepended_text.len() + number.len() + self.appended_text.len(),
        );
        label.push_str(&self.prepended_text);
        label.push_str(&number);
        label.push_str(&self.appended_text);
        label
    }

    /// Formats every tick in `stops` using the buffer's decimal hint.
    #[must_use]
    pub fn format_stops(&self, stops: &AxisStops) -> Vec<String> {
        stops
            .values()
            .iter()
            .map(|value| self.format(*value, stops.decimals()))
            .collect()
    }
}
