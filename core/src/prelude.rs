use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

/// Shared configuration for the radar node.
///
/// Defaults match the reference deployment: listen on every interface at
/// port 5000, merge every two seconds, sweep 2 degrees per 50 ms tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    pub bind_address: IpAddr,
    pub listen_port: u16,
    pub merge_interval_secs: u64,
    pub sweep_tick_millis: u64,
    pub sweep_step_deg: f32,
    pub default_extent: f32,
    pub distance_scale: f32,
    pub max_payload_bytes: usize,
    pub read_timeout_secs: u64,
    /// Reply "ACK" after a well-formed submission. Off by default; the
    /// standalone client variant of the protocol expects the reply.
    pub acknowledge: bool,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            listen_port: 5000,
            merge_interval_secs: 2,
            sweep_tick_millis: 50,
            sweep_step_deg: 2.0,
            default_extent: 950.0,
            distance_scale: 30.0,
            max_payload_bytes: 4096,
            read_timeout_secs: 5,
            acknowledge: false,
        }
    }
}

impl RadarConfig {
    pub fn merge_interval(&self) -> Duration {
        Duration::from_secs(self.merge_interval_secs)
    }

    pub fn sweep_tick(&self) -> Duration {
        Duration::from_millis(self.sweep_tick_millis)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}

/// Common error type for the core's fallible operations.
///
/// None of these are fatal to a running loop: decode failures drop the
/// payload, connectivity failures retry on the next scheduled attempt.
#[derive(thiserror::Error, Debug)]
pub enum RadarError {
    #[error("payload decode failed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot reach {target}: {reason}")]
    Connectivity { target: String, reason: String },
}

pub type RadarResult<T> = Result<T, RadarError>;
