use crate::config::enums::configuration_error::ConfigurationError;

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigurationError::IOError(e) => e.fmt(f),
            ConfigurationError::ParseError(e) => e.fmt(f),
            ConfigurationError::SerializeError(e) => e.fmt(f),
            ConfigurationError::TemplateCreated(path) => write!(f, "configuration template written to '{path}'"),
            ConfigurationError::UnknownLogLevel(level) => write!(f, "unknown log level encountered: '{level}'"),
            ConfigurationError::LoggerError(e) => e.fmt(f)
        }
    }
}

impl std::error::Error for ConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigurationError::IOError(e) => Some(e),
            ConfigurationError::ParseError(e) => Some(e),
            ConfigurationError::SerializeError(e) => Some(e),
            ConfigurationError::LoggerError(e) => Some(e),
            _ => None
        }
    }
}
