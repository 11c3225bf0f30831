use super::curtain::CurtainParams;
use super::oscillators::{InstrumentParams, PoseTransition, PropParams};
use super::particles::EmitterParams;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ParamError {
    #[error("invalid value {value:?} for `{key}`")]
    InvalidValue { key: String, value: String },
}

/// Immutable configuration handed to each stage component at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StageParams {
    pub curtain: CurtainParams,
    pub instrument: InstrumentParams,
    pub prop: PropParams,
    pub emitter: EmitterParams,
    /// Seed for the note emitter; `None` lets the host pick one.
    pub seed: Option<u64>,
}

impl StageParams {
    /// Apply `key=value` overrides from a page query string (leading `?`
    /// optional). Unknown keys are ignored.
    ///
    /// - `seed=<u64>`: emitter RNG seed
    /// - `pose=snap|smooth`: hand prop regime transition
    /// - `rate=<f32>`: curtain damping rate, positive and finite
    pub fn apply_query(&mut self, query: &str) -> Result<(), ParamError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "seed" => {
                    self.seed = Some(value.parse().map_err(|_| invalid(key, value))?);
                }
                "pose" => {
                    self.prop.transition = match value {
                        "snap" => PoseTransition::Snap,
                        "smooth" => PoseTransition::default(),
                        _ => return Err(invalid(key, value)),
                    };
                }
                "rate" => {
                    let rate: f32 = value.parse().map_err(|_| invalid(key, value))?;
                    if !rate.is_finite() || rate <= 0.0 {
                        return Err(invalid(key, value));
                    }
                    self.curtain.rate = rate;
                }
                _ => {}
            }
        }
        Ok(())
    }
}

fn invalid(key: &str, value: &str) -> ParamError {
    ParamError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
