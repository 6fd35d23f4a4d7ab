#[derive(Debug)]
pub enum ConfigurationError {
    IOError(std::io::Error),
    ParseError(toml::de::Error),
    SerializeError(toml::ser::Error),
    TemplateCreated(String),
    UnknownLogLevel(String),
    LoggerError(log::SetLoggerError),
}
