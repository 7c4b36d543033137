/// Failure to complete an exchange with the server.
///
/// Business failures are not `ApiError`s, they arrive as unsuccessful envelopes. This covers
/// transport errors, undecodable bodies and non-envelope error responses. `status` is 0 when
/// no response was received.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}
