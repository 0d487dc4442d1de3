/// Problems found while assembling players or a game; nothing is half-built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Missing or unusable API credentials.
    Credentials(String),
    /// No rules text registered for the requested game kind.
    MissingTemplate(String),
    /// A configuration or template file could not be read.
    Unreadable(String),
    /// A configuration value could not be parsed or is out of range.
    Malformed(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Credentials(s) => write!(f, "invalid credentials: {}", s),
            Self::MissingTemplate(s) => write!(f, "no rules template for game kind {:?}", s),
            Self::Unreadable(s) => write!(f, "unreadable configuration: {}", s),
            Self::Malformed(s) => write!(f, "malformed configuration: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}
