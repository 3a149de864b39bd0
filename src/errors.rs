use crate::remote::RemoteError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read configuration: {0}")]
    ConfigurationError(#[from] ConfigurationError),
    #[error("socket address parsing error: {0}")]
    SocketAddressParsingError(#[from] std::net::AddrParseError),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    AppErrors(#[from] AppErrors),
}

#[derive(Error, Debug)]
pub enum AppErrors {
    #[error("failed to build remote client: {0}")]
    RemoteError(#[from] RemoteError),
}

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("{0} is not a supported environment. Use either `dev` or `prod`.")]
    UnknownEnvironment(String),
    #[error("backend url {0} cannot be used as a base")]
    InvalidBackendUrl(String),
    #[error("page size must be greater than zero")]
    ZeroPageSize,
    #[error("notification capacity must be greater than zero")]
    ZeroNotificationCapacity,
    #[error("notification life must be greater than zero")]
    ZeroNotificationLife,
    #[error("notification sweep interval must be greater than zero")]
    ZeroSweepInterval,
}
