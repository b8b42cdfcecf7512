use std::sync::Arc;

use async_trait::async_trait;

use super::MediaSink;
use crate::player::error::PlayerError;

/// The adaptive-streaming source loader.
///
/// When supported, the loader parses the manifest and feeds segments into
/// the sink, reporting readiness through a `ManifestReady` event. When
/// unsupported, the player falls back to handing the URL to the sink
/// directly.
#[async_trait]
pub trait StreamSource: Send + Sync {
    /// Whether adaptive streaming is available in this environment.
    fn is_supported(&self) -> bool;

    /// Begin loading and parsing the manifest at `url`.
    ///
    /// # Errors
    /// Returns `PlayerError::SourceError` if the manifest cannot be fetched
    /// or parsed.
    async fn load_manifest(&self, url: &str) -> Result<(), PlayerError>;

    /// Attach the loader's output to the media sink.
    ///
    /// # Errors
    /// Returns `PlayerError::SourceError` if attachment fails.
    async fn attach(&self, sink: Arc<dyn MediaSink>) -> Result<(), PlayerError>;

    /// Quality variant labels parsed from the manifest, in manifest order.
    ///
    /// Empty until the manifest is ready; the player prepends "Auto".
    fn variant_labels(&self) -> Vec<String>;
}
