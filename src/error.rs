use thiserror::Error;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub(crate) type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub(crate) enum Error {
    /// The address-echo request could not be sent or completed.
    #[error("sending request")]
    Network(#[source] BoxError),

    /// The address-echo response body could not be read.
    #[error("reading response body")]
    Io(#[source] BoxError),

    /// Any failure of the DNS provider API, read or write.
    #[error("sending AWS request")]
    Provider(#[source] BoxError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn provider(err: impl Into<BoxError>) -> Self {
        Error::Provider(err.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}

/// A report and all of its causes on one line.
pub(crate) fn chain(report: &color_eyre::Report) -> String {
    report
        .chain()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ")
}
