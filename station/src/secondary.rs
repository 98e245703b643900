use crate::settings::StationSettings;
use crate::simulate::{SimulatedScanSource, SimulatorConfig};
use log::{debug, info, warn};
use radarcore::scan::{RemoteSubmission, ScanSource};
use radarcore::{RadarError, RadarResult};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Push loop for a secondary device: scan, submit to the primary, sleep,
/// repeat. A failed push is logged and retried on the next cycle; nothing
/// here is fatal short of Ctrl+C.
pub async fn run(
    host: String,
    settings: StationSettings,
    expect_ack: bool,
    simulator: SimulatorConfig,
) -> anyhow::Result<()> {
    let scan = SimulatedScanSource::new(simulator);
    let interval = Duration::from_secs(settings.push_interval_secs);
    let target = format!("{}:{}", host, settings.listen_port);
    info!("pushing scans to {} every {:?}", target, interval);

    loop {
        let observations = scan.scan();
        if observations.is_empty() {
            info!("no networks found, nothing to push");
        } else {
            let submission = RemoteSubmission::new(observations);
            match push_once(&target, &submission, expect_ack).await {
                Ok(()) => info!("submitted {} networks", submission.wifi_data.len()),
                Err(err) => warn!("push failed, will retry next cycle: {}", err),
            }
        }

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = tokio::signal::ctrl_c() => {
                info!("secondary stopping");
                return Ok(());
            }
        }
    }
}

/// One submission over one connection, mirroring the wire contract the
/// listener expects: a single JSON payload, optionally answered with "ACK".
pub async fn push_once(
    target: &str,
    submission: &RemoteSubmission,
    expect_ack: bool,
) -> RadarResult<()> {
    let mut stream = TcpStream::connect(target)
        .await
        .map_err(|err| RadarError::Connectivity {
            target: target.to_string(),
            reason: err.to_string(),
        })?;
    let payload = serde_json::to_vec(submission)?;
    stream.write_all(&payload).await?;
    if expect_ack {
        let mut reply = [0u8; 16];
        let read = stream.read(&mut reply).await?;
        debug!("primary replied: {}", String::from_utf8_lossy(&reply[..read]));
    }
    Ok(())
}
