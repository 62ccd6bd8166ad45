use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum SettingsError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    /// A value parsed but is out of range.
    Invalid { field: &'static str, reason: String },
}

impl SettingsError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SettingsError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io { path, source } => {
                write!(f, "failed to read settings from {}: {source}", path.display())
            }
            SettingsError::Parse(err) => write!(f, "failed to parse settings: {err}"),
            SettingsError::Serialize(err) => write!(f, "failed to serialize settings: {err}"),
            SettingsError::Invalid { field, reason } => {
                write!(f, "invalid setting {field}: {reason}")
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Parse(err) => Some(err),
            SettingsError::Serialize(err) => Some(err),
            SettingsError::Invalid { .. } => None,
        }
    }
}
