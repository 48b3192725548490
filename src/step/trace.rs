use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::step::Value;

/// A finite, ordered sequence of steps for one structure kind, paired with
/// the authoritative value sequence the structure must equal once replay
/// ends. Steps narrate; `new_state` decides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace<S> {
    pub steps: Vec<S>,
    pub new_state: Vec<Value>,
}

impl<S> Trace<S> {
    pub fn new(steps: Vec<S>, new_state: Vec<Value>) -> Self {
        Self { steps, new_state }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("trace body must be a JSON object")]
    NotAnObject,
    #[error("'steps' must be a list")]
    MissingSteps,
    #[error("'new_state' must be a list of values")]
    MissingFinalState,
}

/// Decode a wire trace.
///
/// Steps are decoded leniently: an entry with an unrecognized tag or a
/// malformed payload is dropped with a warning, and unknown fields inside a
/// recognized step are ignored. The final state is strict: without a valid
/// `new_state` there is nothing to reconcile against, so the whole trace is
/// rejected before any replay starts.
pub fn decode_trace<S: DeserializeOwned>(raw: &serde_json::Value) -> Result<Trace<S>, DecodeError> {
    let body = raw.as_object().ok_or(DecodeError::NotAnObject)?;

    let new_state = body
        .get("new_state")
        .and_then(|v| v.as_array())
        .ok_or(DecodeError::MissingFinalState)?
        .iter()
        .map(|v| serde_json::from_value::<Value>(v.clone()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| DecodeError::MissingFinalState)?;

    let raw_steps = body
        .get("steps")
        .and_then(|v| v.as_array())
        .ok_or(DecodeError::MissingSteps)?;

    let mut steps = Vec::with_capacity(raw_steps.len());
    for (index, raw_step) in raw_steps.iter().enumerate() {
        match serde_json::from_value::<S>(raw_step.clone()) {
            Ok(step) => steps.push(step),
            Err(err) => {
                tracing::warn!(step = index, %err, "skipping unrecognized trace step");
            }
        }
    }

    Ok(Trace::new(steps, new_state))
}
