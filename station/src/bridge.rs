use anyhow::Result;
use log::info;
use radarcore::radar::RadarFrame;
use radarcore::telemetry::MetricsRecorder;
use radarcore::RadarConfig;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::Filter;

fn gui_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

/// Hosts the HTTP endpoint the visualizer polls for the latest radar frame.
pub struct GuiBridge {
    state: Arc<RwLock<RadarFrame>>,
}

impl GuiBridge {
    pub fn new(config: &RadarConfig, metrics: Arc<MetricsRecorder>) -> Self {
        let state = Arc::new(RwLock::new(RadarFrame::empty(config)));
        let state_for_filter = state.clone();
        let state_filter = warp::any().map(move || state_for_filter.clone());
        let metrics_filter = warp::any().map(move || metrics.clone());
        let config_for_route = config.clone();

        let frame_route = warp::path("frame")
            .and(warp::get())
            .and(state_filter)
            .map(|state: Arc<RwLock<RadarFrame>>| warp::reply::json(&*state.read().unwrap()));

        // the effective node configuration, so presenters pick up the same
        // sweep timing and extent the merger runs with
        let config_route = warp::path("config")
            .and(warp::get())
            .map(move || warp::reply::json(&config_for_route));

        let metrics_route = warp::path("metrics")
            .and(warp::get())
            .and(metrics_filter)
            .map(|metrics: Arc<MetricsRecorder>| {
                let (accepted, rejected) = metrics.snapshot();
                warp::reply::json(&json!({
                    "accepted": accepted,
                    "rejected": rejected,
                }))
            });

        thread::spawn(move || {
            let routes = frame_route.or(config_route).or(metrics_route);
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(gui_bind_address()).await;
            });
        });

        Self { state }
    }

    pub fn publish(&self, frame: &RadarFrame) -> Result<()> {
        let mut guard = self.state.write().unwrap();
        *guard = frame.clone();
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        info!("[bridge] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> RadarFrame {
        self.state.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radarcore::merge::PositionMap;
    use radarcore::radar::layout;

    #[test]
    fn gui_bridge_updates_state() {
        let config = RadarConfig::default();
        let bridge = GuiBridge::new(&config, Arc::new(MetricsRecorder::new()));

        let mut positions = PositionMap::new();
        positions.insert_first("Home", 5.0);
        let frame = layout(&positions, &config);

        bridge.publish(&frame).unwrap();
        assert_eq!(bridge.snapshot().entries.len(), 1);
        assert_eq!(bridge.snapshot().entries[0].ssid, "Home");
    }
}
