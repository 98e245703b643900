use crate::ingest::PendingBuffer;
use crate::merge::{estimate_distance, PositionMap};
use crate::prelude::RadarConfig;
use crate::radar::{layout, RadarFrame};
use crate::scan::ScanSource;
use crate::telemetry::LogManager;
use log::{debug, info};
use std::sync::Arc;
use tokio::sync::watch;

/// Produces one position map per cycle and publishes the laid-out frame.
///
/// Local observations are merged before remote ones, so within a cycle a
/// name seen by the local scan always keeps its local distance. The buffer
/// drain is atomic; submissions arriving mid-cycle wait for the next one.
pub struct PositionMerger {
    config: RadarConfig,
    scan: Arc<dyn ScanSource>,
    buffer: Arc<PendingBuffer>,
    frames: watch::Sender<RadarFrame>,
    logger: LogManager,
}

impl PositionMerger {
    pub fn new(
        config: RadarConfig,
        scan: Arc<dyn ScanSource>,
        buffer: Arc<PendingBuffer>,
    ) -> (Self, watch::Receiver<RadarFrame>) {
        let (frames, receiver) = watch::channel(RadarFrame::empty(&config));
        let merger = Self {
            config,
            scan,
            buffer,
            frames,
            logger: LogManager::new("merger"),
        };
        (merger, receiver)
    }

    /// One merge pass: local scan first, then everything buffered since the
    /// previous pass.
    pub fn merge_cycle(&self) -> PositionMap {
        let mut positions = PositionMap::new();

        let local = self.scan.scan();
        debug!("local scan found {} networks", local.len());
        for net in &local {
            positions.insert_first(&net.ssid, estimate_distance(net.signal));
        }

        for submission in self.buffer.drain_all() {
            for net in &submission.wifi_data {
                positions.insert_first(&net.ssid, estimate_distance(net.signal));
            }
        }

        self.logger
            .record(&format!("merge cycle produced {} positions", positions.len()));
        positions
    }

    /// Runs merge cycles until shutdown flips. Never exits on its own; an
    /// empty cycle publishes an empty frame rather than skipping.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        loop {
            if *shutdown.borrow() {
                info!("position merger shutting down");
                return;
            }

            let positions = self.merge_cycle();
            let frame = layout(&positions, &self.config);
            debug!(
                "publishing frame: {} entries, extent {}",
                frame.entries.len(),
                frame.extent
            );
            // a send failure only means nobody is watching right now
            let _ = self.frames.send(frame);

            tokio::select! {
                _ = shutdown.changed() => {}
                _ = tokio::time::sleep(self.config.merge_interval()) => {}
            }
        }
    }
}
