//! Error types for the API client.

/// Errors that can occur when making API requests.
///
/// The set is closed: transport, status and decode failures are mapped onto
/// the first four kinds, everything else lands in [`Error::Custom`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The API answered 404.
    #[error("Data Not Found")]
    NotFound,
    /// The API answered 429.
    #[error("Too Many Requests")]
    TooManyRequests,
    /// The response body did not match the expected record shape.
    #[error("JSON Conversion Error")]
    JsonConversion,
    /// The API answered 500/503, or the request never reached it.
    #[error("Service is not available")]
    ServiceOffline,
    /// Any other failure, carrying its message verbatim.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Maps an HTTP status code onto a typed failure.
    ///
    /// Returns `None` for every status that should proceed to decoding,
    /// including non-2xx codes without a dedicated kind.
    pub fn from_status(status: u16) -> Option<Error> {
        match status {
            500 | 503 => Some(Error::ServiceOffline),
            429 => Some(Error::TooManyRequests),
            404 => Some(Error::NotFound),
            _ => None,
        }
    }

    /// Classifies a transport error raised while sending a request. Bodies are
    /// decoded separately, so only build and network failures arrive here.
    pub(crate) fn from_transport(err: reqwest::Error) -> Error {
        if err.is_builder() {
            Error::Custom(err.to_string())
        } else {
            Error::ServiceOffline
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn descriptions() {
        assert_eq!(Error::NotFound.to_string(), "Data Not Found");
        assert_eq!(Error::TooManyRequests.to_string(), "Too Many Requests");
        assert_eq!(Error::JsonConversion.to_string(), "JSON Conversion Error");
        assert_eq!(Error::ServiceOffline.to_string(), "Service is not available");
        assert_eq!(
            Error::Custom("socket closed".to_string()).to_string(),
            "socket closed"
        );
    }

    #[test]
    fn status_classification() {
        assert_eq!(Error::from_status(500), Some(Error::ServiceOffline));
        assert_eq!(Error::from_status(503), Some(Error::ServiceOffline));
        assert_eq!(Error::from_status(429), Some(Error::TooManyRequests));
        assert_eq!(Error::from_status(404), Some(Error::NotFound));
        for status in [200, 201, 204, 301, 400, 401, 403, 502] {
            assert_eq!(Error::from_status(status), None, "status {}", status);
        }
    }
}
