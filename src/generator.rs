//! Random scenario generation.
//!
//! Each scenario gets an independent frequency (uniform integer draw scaled
//! by `frequency_scale`) and an independent raw injury probability drawn from
//! a normal distribution. Raw probabilities are unbounded; see
//! [`crate::normalize`] for the projection onto [0, 1].

use rand::rngs::SmallRng;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{RawSamples, ScenarioParams};

/// Draw `scenario_count` annual frequencies.
pub fn generate_frequencies(rng: &mut SmallRng, params: &ScenarioParams) -> Result<Vec<f64>> {
    let (low, high) = (params.frequency_low, params.frequency_high);
    if low == 0 || low >= high {
        return Err(Error::InvalidFrequencyRange { low, high });
    }
    let frequencies = (0..params.scenario_count)
        .map(|_| rng.random_range(low..high) as f64 * params.frequency_scale)
        .collect();
    Ok(frequencies)
}

/// Draw `scenario_count` raw injury probabilities from N(mean, std_dev²).
pub fn generate_raw_probabilities(
    rng: &mut SmallRng,
    params: &ScenarioParams,
) -> Result<Vec<f64>> {
    let (mean, std_dev) = (params.injury_mean, params.injury_std_dev);
    if !mean.is_finite() || !std_dev.is_finite() || std_dev < 0.0 {
        return Err(Error::InvalidDistribution(format!(
            "mean={mean}, std_dev={std_dev}"
        )));
    }
    let normal =
        Normal::new(mean, std_dev).map_err(|e| Error::InvalidDistribution(e.to_string()))?;
    Ok(normal
        .sample_iter(rng)
        .take(params.scenario_count)
        .collect())
}

/// Draw frequencies first, then raw probabilities, from the same stream.
pub fn generate_samples(rng: &mut SmallRng, params: &ScenarioParams) -> Result<RawSamples> {
    let frequencies = generate_frequencies(rng, params)?;
    let raw_probabilities = generate_raw_probabilities(rng, params)?;
    debug!(
        scenarios = params.scenario_count,
        "generated frequency and injury-probability samples"
    );
    Ok(RawSamples {
        frequencies,
        raw_probabilities,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_FREQUENCY;
    use rand::SeedableRng;

    #[test]
    fn test_frequencies_within_bounds() {
        let mut rng = SmallRng::seed_from_u64(7);
        let params = ScenarioParams {
            scenario_count: 10_000,
            ..ScenarioParams::default()
        };
        let freqs = generate_frequencies(&mut rng, &params).unwrap();
        assert_eq!(freqs.len(), 10_000);
        for &f in &freqs {
            assert!(f > 0.0 && f <= MAX_FREQUENCY, "frequency {f} out of range");
        }
    }

    #[test]
    fn test_frequency_range_rejected() {
        let mut rng = SmallRng::seed_from_u64(1);
        let empty = ScenarioParams {
            frequency_low: 10,
            frequency_high: 10,
            ..ScenarioParams::default()
        };
        assert!(matches!(
            generate_frequencies(&mut rng, &empty),
            Err(Error::InvalidFrequencyRange { low: 10, high: 10 })
        ));
        let from_zero = ScenarioParams {
            frequency_low: 0,
            ..ScenarioParams::default()
        };
        assert!(generate_frequencies(&mut rng, &from_zero).is_err());
    }

    #[test]
    fn test_invalid_distribution() {
        let mut rng = SmallRng::seed_from_u64(1);
        let params = ScenarioParams {
            injury_std_dev: -1.0,
            ..ScenarioParams::default()
        };
        assert!(matches!(
            generate_raw_probabilities(&mut rng, &params),
            Err(Error::InvalidDistribution(_))
        ));
    }

    #[test]
    fn test_raw_probabilities_centered() {
        let mut rng = SmallRng::seed_from_u64(42);
        let params = ScenarioParams {
            scenario_count: 20_000,
            ..ScenarioParams::default()
        };
        let raw = generate_raw_probabilities(&mut rng, &params).unwrap();
        let mean = raw.iter().sum::<f64>() / raw.len() as f64;
        // Standard error of the mean is 1/sqrt(20000) ~= 0.007.
        assert!((mean - 0.5).abs() < 0.05, "mean={mean}");
    }

    #[test]
    fn test_same_seed_same_samples() {
        let params = ScenarioParams::default();
        let a = generate_samples(&mut SmallRng::seed_from_u64(99), &params).unwrap();
        let b = generate_samples(&mut SmallRng::seed_from_u64(99), &params).unwrap();
        assert_eq!(a.frequencies, b.frequencies);
        assert_eq!(a.raw_probabilities, b.raw_probabilities);
        assert_eq!(a.frequencies.len(), params.scenario_count);
        assert_eq!(a.raw_probabilities.len(), params.scenario_count);
    }
}
