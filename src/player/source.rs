use std::sync::Arc;

use tracing::{info, warn};

use super::error::PlayerError;
use super::traits::{MediaSink, StreamSource};

/// How a source URL ended up wired to the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachMode {
    /// The adaptive loader owns the source; playback starts on
    /// `ManifestReady`.
    Adaptive,

    /// The sink was pointed at the URL directly; playback starts on
    /// `MetadataLoaded`.
    Direct,
}

/// Wire a source URL to the sink, preferring the adaptive loader.
///
/// Falls back to handing the URL to the sink directly when no loader is
/// available or the environment does not support adaptive streaming.
///
/// # Errors
/// Returns `PlayerError::SourceError` when the adaptive loader fails to
/// fetch, parse or attach the manifest. Non-fatal; the embedder may retry
/// or fall back itself.
pub async fn attach_source(
    sink: &Arc<dyn MediaSink>,
    source: Option<&Arc<dyn StreamSource>>,
    url: &str,
) -> Result<AttachMode, PlayerError> {
    match source {
        Some(loader) if loader.is_supported() => {
            loader.load_manifest(url).await.inspect_err(|e| {
                warn!("Manifest load failed for {url}: {e}");
            })?;
            loader.attach(Arc::clone(sink)).await?;
            info!("Adaptive source attached: {url}");
            Ok(AttachMode::Adaptive)
        }
        _ => {
            sink.set_source_url(url);
            info!("Direct source attached: {url}");
            Ok(AttachMode::Direct)
        }
    }
}
