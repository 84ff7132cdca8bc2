pub struct FloatUtils;

impl FloatUtils {
    /// Arithmetic mean, 0 for an empty slice.
    pub fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }

        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Population standard deviation around the mean.
    pub fn standard_deviation(values: &[f64]) -> f64 {
        if values.len() < 2 {
            return 0.0;
        }

        let mean = Self::mean(values);
        let variance = values
            .iter()
            .map(|value| (value - mean).powi(2))
            .sum::<f64>()
            / values.len() as f64;

        variance.sqrt()
    }
}
