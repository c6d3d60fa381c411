use std::path::PathBuf;

/// Result alias that carries the crate [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the backend and the configuration layer.
///
/// Only [`Error::MusicLoad`] is ever seen by the simulation, and it is
/// recovered there with an on-screen notification.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A dropped file could not be opened as a music stream.
    #[error("failed to load music from {}: {reason}", path.display())]
    MusicLoad { path: PathBuf, reason: String },
    /// Settings file is not valid JSON for [`crate::Settings`].
    #[error("invalid settings file: {0}")]
    Settings(#[from] serde_json::Error),
    /// Settings parsed but hold out-of-range values.
    #[error("invalid setting: {0}")]
    InvalidSettings(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn music_load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MusicLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_music_load_message_names_path() {
        let err = Error::music_load("/tmp/song.txt", "unsupported format");
        assert_eq!(
            err.to_string(),
            "failed to load music from /tmp/song.txt: unsupported format"
        );
    }
}
