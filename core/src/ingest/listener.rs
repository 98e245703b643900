use crate::ingest::PendingBuffer;
use crate::prelude::{RadarConfig, RadarResult};
use crate::scan::RemoteSubmission;
use crate::telemetry::MetricsRecorder;
use log::{info, warn};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::watch;
use tokio::time::timeout;

const ACK: &[u8] = b"ACK";

/// Accept loop for pushed scan submissions.
///
/// One submission per connection: a single bounded read, a JSON decode, an
/// append to the pending buffer on success, then close. In ack mode every
/// non-empty payload is answered with "ACK", decodable or not; the sender
/// never learns about a decode failure. There
/// is no framing; the whole payload must fit one receive of
/// `max_payload_bytes`, and anything longer is truncated at the protocol
/// level. Connections are handled inline, so a stalled sender delays the
/// next accept; the read timeout bounds how long that can last.
pub struct IngressListener {
    config: RadarConfig,
    buffer: Arc<PendingBuffer>,
    metrics: Arc<MetricsRecorder>,
}

impl IngressListener {
    pub fn new(
        config: RadarConfig,
        buffer: Arc<PendingBuffer>,
        metrics: Arc<MetricsRecorder>,
    ) -> Self {
        Self {
            config,
            buffer,
            metrics,
        }
    }

    /// Binds the configured address and serves until shutdown flips.
    pub async fn run(self, shutdown: watch::Receiver<bool>) -> RadarResult<()> {
        let listener =
            TcpListener::bind((self.config.bind_address, self.config.listen_port)).await?;
        self.serve(listener, shutdown).await
    }

    /// Accept loop over an already-bound listener. Per-connection failures
    /// are logged and dropped; only losing the listening socket itself ends
    /// the loop with an error.
    pub async fn serve(
        self,
        listener: TcpListener,
        mut shutdown: watch::Receiver<bool>,
    ) -> RadarResult<()> {
        info!("ingress listening on {}", listener.local_addr()?);
        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    info!("ingress listener shutting down");
                    return Ok(());
                }
                accepted = listener.accept() => {
                    match accepted {
                        Ok((stream, peer)) => {
                            if let Err(err) = self.handle(stream, peer).await {
                                warn!("connection from {} failed: {}", peer, err);
                            }
                        }
                        Err(err) => warn!("accept failed: {}", err),
                    }
                }
            }
        }
    }

    async fn handle(&self, mut stream: TcpStream, peer: SocketAddr) -> RadarResult<()> {
        let mut payload = vec![0u8; self.config.max_payload_bytes];
        let read = timeout(self.config.read_timeout(), stream.read(&mut payload))
            .await
            .map_err(|_| io::Error::new(io::ErrorKind::TimedOut, "payload read timed out"))??;
        if read == 0 {
            return Ok(());
        }

        match RemoteSubmission::decode(&payload[..read]) {
            Ok(submission) => {
                info!(
                    "accepted {} observations from {}",
                    submission.wifi_data.len(),
                    peer
                );
                self.buffer.append(submission);
                self.metrics.record_accepted();
            }
            Err(err) => {
                warn!("dropping undecodable payload from {}: {}", peer, err);
                self.metrics.record_rejected();
            }
        }
        // ack mode replies to every non-empty payload; a decode failure is
        // never surfaced to the sender
        if self.config.acknowledge {
            stream.write_all(ACK).await?;
        }
        Ok(())
    }
}
