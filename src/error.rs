use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(StatusCode),

    #[error("couldn't parse the routing script")]
    ParseCodeMap,

    #[error("couldn't serialize the result: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("couldn't write the result: {0}")]
    Io(#[from] std::io::Error),
}
