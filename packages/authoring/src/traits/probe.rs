//! Media metadata probing, used to enforce the video duration cap.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::{ProbeError, ProbeResult};
use crate::types::media::SelectedFile;

/// Reads metadata out of media files.
///
/// An error here is a real answer, not a hang: a file whose duration
/// cannot be determined is rejected at selection time rather than left
/// pending forever.
#[async_trait]
pub trait MediaProbe: Send + Sync {
    /// Measure a video file's duration.
    async fn video_duration(&self, file: &SelectedFile) -> ProbeResult<Duration>;
}

/// Probe that serves fixed durations keyed by file name.
///
/// Useful in tests and in tools that know durations out of band. Files
/// without an entry get the default duration, or an `Unreadable` error
/// when no default is set.
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
    durations: HashMap<String, Duration>,
    fallback: Option<Duration>,
}

impl StaticProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration reported for a file name.
    pub fn with_duration(mut self, file_name: impl Into<String>, duration: Duration) -> Self {
        self.durations.insert(file_name.into(), duration);
        self
    }

    /// Set the duration reported for files with no explicit entry.
    pub fn with_fallback(mut self, duration: Duration) -> Self {
        self.fallback = Some(duration);
        self
    }
}

#[async_trait]
impl MediaProbe for StaticProbe {
    async fn video_duration(&self, file: &SelectedFile) -> ProbeResult<Duration> {
        self.durations
            .get(&file.file_name)
            .copied()
            .or(self.fallback)
            .ok_or_else(|| ProbeError::Unreadable(file.file_name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mp4(name: &str) -> SelectedFile {
        SelectedFile::new(name, "video/mp4", &b"fake-mp4"[..])
    }

    #[tokio::test]
    async fn test_static_probe_explicit_and_fallback() {
        let probe = StaticProbe::new()
            .with_duration("long.mp4", Duration::from_secs(45))
            .with_fallback(Duration::from_secs(10));

        let long = probe.video_duration(&mp4("long.mp4")).await.unwrap();
        assert_eq!(long, Duration::from_secs(45));

        let other = probe.video_duration(&mp4("other.mp4")).await.unwrap();
        assert_eq!(other, Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_static_probe_without_fallback_errors() {
        let probe = StaticProbe::new();
        let err = probe.video_duration(&mp4("clip.mp4")).await.unwrap_err();
        assert!(matches!(err, ProbeError::Unreadable(name) if name == "clip.mp4"));
    }
}
