use crate::bridge::GuiBridge;
use crate::settings::StationSettings;
use crate::simulate::{SimulatedScanSource, SimulatorConfig};
use anyhow::Context;
use log::error;
use radarcore::ingest::{IngressListener, PendingBuffer};
use radarcore::merge::PositionMerger;
use radarcore::scan::ScanSource;
use radarcore::telemetry::MetricsRecorder;
use std::sync::Arc;
use tokio::signal;
use tokio::sync::watch;

/// Wires the full primary node: ingress listener, merge loop, HTTP bridge.
/// Runs until Ctrl+C flips the shutdown signal; each loop observes it at the
/// top of its next iteration.
pub async fn run(settings: StationSettings, simulator: SimulatorConfig) -> anyhow::Result<()> {
    let config = settings.to_radar_config();
    let buffer = Arc::new(PendingBuffer::new());
    let metrics = Arc::new(MetricsRecorder::new());
    let scan: Arc<dyn ScanSource> = Arc::new(SimulatedScanSource::new(simulator));

    let bridge = GuiBridge::new(&config, metrics.clone());
    bridge.publish_status("radar bridge running (Ctrl+C to stop)...");

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let listener = IngressListener::new(config.clone(), buffer.clone(), metrics);
    let listener_shutdown = shutdown_rx.clone();
    tokio::spawn(async move {
        if let Err(err) = listener.run(listener_shutdown).await {
            error!("ingress listener stopped: {}", err);
        }
    });

    let (merger, mut frames) = PositionMerger::new(config, scan, buffer);
    tokio::spawn(merger.run(shutdown_rx));

    let publisher = tokio::spawn(async move {
        while frames.changed().await.is_ok() {
            let frame = frames.borrow_and_update().clone();
            if let Err(err) = bridge.publish(&frame) {
                error!("publishing frame failed: {}", err);
            }
        }
    });

    signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
    shutdown_tx.send(true).context("signalling shutdown")?;
    // the merger drops its frame sender on exit, which ends the publisher
    let _ = publisher.await;
    Ok(())
}
