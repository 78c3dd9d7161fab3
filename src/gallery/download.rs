// SPDX-License-Identifier: MPL-2.0
//! Thumbnail batch download with progress reporting.
//!
//! [`download_events`] runs [`download_artwork`] on a spawned tokio task and
//! exposes its progress and final report as one stream, so the caller can
//! turn it into messages with `Task::stream`.

use super::{decode_thumbnail, Artwork};
use crate::search::ItunesClient;
use iced::futures::channel::{mpsc, oneshot};
use iced::futures::{stream, Stream, StreamExt};

/// Outcome of a batch download. Failed thumbnails are already replaced by
/// placeholders in `artwork`.
#[derive(Debug, Clone)]
pub struct DownloadReport {
    pub artwork: Vec<Artwork>,
    pub failed: usize,
}

#[derive(Debug, Clone)]
pub enum DownloadEvent {
    /// Fraction of thumbnails processed, in `0.0..=1.0`.
    Progress(f32),
    /// The batch finished, or the download task died.
    Finished(Result<DownloadReport, String>),
}

/// Downloads and decodes every URL in order.
///
/// `progress` is called with `i / n` after the i-th thumbnail. A thumbnail
/// that cannot be fetched or decoded becomes a placeholder.
pub async fn download_artwork(
    client: &ItunesClient,
    urls: &[String],
    mut progress: impl FnMut(f32) + Send,
) -> DownloadReport {
    let total = urls.len();
    let mut artwork = Vec::with_capacity(total);
    let mut failed = 0;

    for (done, url) in urls.iter().enumerate() {
        let decoded = match client.fetch_image(url).await {
            Ok(bytes) => decode_thumbnail(&bytes).map_err(|err| err.to_string()),
            Err(err) => Err(err.to_string()),
        };
        match decoded {
            Ok(handle) => artwork.push(Artwork::loaded(url.as_str(), handle)),
            Err(reason) => {
                tracing::warn!(url = %url, reason = %reason, "using placeholder thumbnail");
                failed += 1;
                artwork.push(Artwork::placeholder(url.as_str()));
            }
        }

        #[allow(clippy::cast_precision_loss)]
        progress((done + 1) as f32 / total as f32);
    }

    DownloadReport { artwork, failed }
}

enum DownloadPhase {
    Start {
        client: ItunesClient,
        urls: Vec<String>,
    },
    ReceivingProgress {
        progress_rx: mpsc::Receiver<f32>,
        result_rx: oneshot::Receiver<DownloadReport>,
    },
    WaitingForResult {
        result_rx: oneshot::Receiver<DownloadReport>,
    },
    Completed,
}

/// Streams progress values followed by exactly one
/// [`DownloadEvent::Finished`].
pub fn download_events(
    client: ItunesClient,
    urls: Vec<String>,
) -> impl Stream<Item = DownloadEvent> + Send + 'static {
    stream::unfold(DownloadPhase::Start { client, urls }, |phase| async move {
        match phase {
            DownloadPhase::Start { client, urls } => {
                let (progress_tx, progress_rx) = mpsc::channel::<f32>(32);
                let (result_tx, result_rx) = oneshot::channel::<DownloadReport>();

                tokio::spawn(async move {
                    let mut progress_tx = progress_tx;
                    let report = download_artwork(&client, &urls, |value| {
                        // Dropped values are superseded by the next one.
                        let _ = progress_tx.try_send(value);
                    })
                    .await;
                    let _ = result_tx.send(report);
                });

                Some((
                    DownloadEvent::Progress(0.0),
                    DownloadPhase::ReceivingProgress {
                        progress_rx,
                        result_rx,
                    },
                ))
            }
            DownloadPhase::ReceivingProgress {
                mut progress_rx,
                result_rx,
            } => match progress_rx.next().await {
                Some(value) => Some((
                    DownloadEvent::Progress(value),
                    DownloadPhase::ReceivingProgress {
                        progress_rx,
                        result_rx,
                    },
                )),
                None => Some((
                    DownloadEvent::Progress(1.0),
                    DownloadPhase::WaitingForResult { result_rx },
                )),
            },
            DownloadPhase::WaitingForResult { result_rx } => {
                let event = match result_rx.await {
                    Ok(report) => DownloadEvent::Finished(Ok(report)),
                    Err(_) => DownloadEvent::Finished(Err("download task cancelled".to_string())),
                };
                Some((event, DownloadPhase::Completed))
            }
            DownloadPhase::Completed => None,
        }
    })
}
