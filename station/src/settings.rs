use anyhow::Context;
use radarcore::RadarConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;

/// Node settings loadable from a YAML file; anything omitted falls back to
/// the reference defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StationSettings {
    pub bind_address: IpAddr,
    pub listen_port: u16,
    pub merge_interval_secs: u64,
    pub push_interval_secs: u64,
    pub sweep_tick_millis: u64,
    pub sweep_step_deg: f32,
    pub default_extent: f32,
    pub distance_scale: f32,
    pub max_payload_bytes: usize,
    pub read_timeout_secs: u64,
    pub acknowledge: bool,
}

impl Default for StationSettings {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            listen_port: 5000,
            merge_interval_secs: 2,
            push_interval_secs: 5,
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

impl StationSettings {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading station settings {}", path_ref.display()))?;
        let settings: StationSettings = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing station settings {}", path_ref.display()))?;
        Ok(settings)
    }

    pub fn to_radar_config(&self) -> RadarConfig {
        RadarConfig {
            bind_address: self.bind_address,
            listen_port: self.listen_port,
            merge_interval_secs: self.merge_interval_secs,
            sweep_tick_millis: self.sweep_tick_millis,
            sweep_step_deg: self.sweep_step_deg,
            default_extent: self.default_extent,
            distance_scale: self.distance_scale,
            max_payload_bytes: self.max_payload_bytes,
            read_timeout_secs: self.read_timeout_secs,
            acknowledge: self.acknowledge,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_match_the_reference_deployment() {
        let settings = StationSettings::default();
        let config = settings.to_radar_config();
        assert_eq!(config.listen_port, 5000);
        assert_eq!(config.merge_interval_secs, 2);
        assert_eq!(config.default_extent, 950.0);
        assert!(!config.acknowledge);
    }

    #[test]
    fn settings_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"listen_port: 6000\nacknowledge: true\npush_interval_secs: 1\n")
            .unwrap();
        let path = temp.into_temp_path();
        let settings = StationSettings::load(&path).unwrap();
        assert_eq!(settings.listen_port, 6000);
        assert!(settings.acknowledge);
        assert_eq!(settings.push_interval_secs, 1);
        // omitted keys keep their defaults
        assert_eq!(settings.distance_scale, 30.0);
        assert_eq!(settings.sweep_tick_millis, 50);
    }

    #[test]
    fn sweep_and_protocol_knobs_reach_the_radar_config() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"sweep_tick_millis: 25\nsweep_step_deg: 4.0\nread_timeout_secs: 9\nmax_payload_bytes: 8192\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let config = StationSettings::load(&path).unwrap().to_radar_config();
        assert_eq!(config.sweep_tick_millis, 25);
        assert_eq!(config.sweep_step_deg, 4.0);
        assert_eq!(config.read_timeout_secs, 9);
        assert_eq!(config.max_payload_bytes, 8192);
    }
}
