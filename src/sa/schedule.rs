//! Temperature schedule and acceptance rule.

/// A precomputed, decreasing sequence of temperatures.
///
/// # Examples
///
/// ```
/// use u_hive::sa::TemperatureSchedule;
///
/// let schedule = TemperatureSchedule::log_spaced(0.0, 2.0, 3);
/// let temps: Vec<f64> = schedule.iter().collect();
/// assert_eq!(temps.len(), 3);
/// assert!((temps[0] - 100.0).abs() < 1e-9);
/// assert!((temps[1] - 10.0).abs() < 1e-9);
/// assert!((temps[2] - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureSchedule {
    temperatures: Vec<f64>,
}

impl TemperatureSchedule {
    /// `steps` temperatures log-spaced from `10^high` down to `10^low`.
    ///
    /// A single step yields `10^low`.
    pub fn log_spaced(low: f64, high: f64, steps: usize) -> Self {
        let temperatures = match steps {
            0 => Vec::new(),
            1 => vec![10f64.powf(low)],
            _ => {
                let step = (high - low) / (steps - 1) as f64;
                (0..steps)
                    .map(|k| 10f64.powf(high - step * k as f64))
                    .collect()
            }
        };
        Self { temperatures }
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    /// Returns `true` if the schedule has no steps.
    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }

    /// Temperatures in consumption order (hottest first).
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.temperatures.iter().copied()
    }
}

/// Metropolis acceptance probability of moving from `current` to `candidate`.
///
/// Non-worsening moves are always accepted. A worsening move is accepted with
/// probability `exp((current - candidate) / temperature)`, and never at a
/// non-positive temperature.
///
/// ```
/// use u_hive::sa::acceptance_probability;
///
/// assert_eq!(acceptance_probability(10.0, 9.0, 1.0), 1.0);
/// assert!(acceptance_probability(10.0, 11.0, 1e9) > 0.999);
/// assert!(acceptance_probability(10.0, 11.0, 1e-3) < 1e-9);
/// ```
pub fn acceptance_probability(current: f64, candidate: f64, temperature: f64) -> f64 {
    if candidate <= current {
        1.0
    } else if temperature <= 0.0 {
        0.0
    } else {
        ((current - candidate) / temperature).exp()
    }
}
