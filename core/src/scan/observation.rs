use crate::prelude::RadarResult;
use serde::{Deserialize, Serialize};

/// One network seen by a scan.
///
/// `signal` is whatever the radio reports: a 0-100 quality percentage or a
/// negative dBm reading. The distance estimator accepts either. The BSSID is
/// optional because simulated feeds omit it; the merge path keys on SSID only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkObservation {
    #[serde(rename = "SSID")]
    pub ssid: String,
    #[serde(rename = "BSSID", default, skip_serializing_if = "Option::is_none")]
    pub bssid: Option<String>,
    #[serde(rename = "Signal")]
    pub signal: i32,
}

impl NetworkObservation {
    pub fn new(ssid: impl Into<String>, signal: i32) -> Self {
        Self {
            ssid: ssid.into(),
            bssid: None,
            signal,
        }
    }
}

/// One decoded payload pushed by a secondary device.
///
/// Created when an inbound connection's payload decodes cleanly, buffered,
/// and consumed at the start of the next merge cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSubmission {
    pub wifi_data: Vec<NetworkObservation>,
}

/// The two shapes secondaries send for the same conceptual payload.
#[derive(Deserialize)]
#[serde(untagged)]
enum SubmissionPayload {
    Wrapped { wifi_data: Vec<NetworkObservation> },
    Bare(Vec<NetworkObservation>),
}

impl RemoteSubmission {
    pub fn new(wifi_data: Vec<NetworkObservation>) -> Self {
        Self { wifi_data }
    }

    /// Decodes a raw payload, accepting both the wrapped object form
    /// `{"wifi_data": [...]}` and the bare list the standalone client sends.
    pub fn decode(bytes: &[u8]) -> RadarResult<Self> {
        let submission = match serde_json::from_slice::<SubmissionPayload>(bytes)? {
            SubmissionPayload::Wrapped { wifi_data } => Self { wifi_data },
            SubmissionPayload::Bare(wifi_data) => Self { wifi_data },
        };
        Ok(submission)
    }
}
