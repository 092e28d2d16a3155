use http::StatusCode;

/// The configuration for [`IntParamExtractor`](crate::request::path::IntParamExtractor).
///
/// Every field has a default, therefore an empty configuration source is valid.
///
/// # Example
///
/// ```yaml
/// # configuration/base.yml
/// rejection_status: 422
/// body_format: json
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// The status code used when a path parameter is missing or is not an integer.
    pub rejection_status: RejectionStatus,
    /// The representation used for the body of a rejection.
    pub body_format: BodyFormat,
}

/// How the body of a rejection is represented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFormat {
    /// `text/plain; charset=utf-8`.
    #[default]
    PlainText,
    /// `application/json`, with an `error` and a `parameter` field.
    Json,
}

/// A client error (4xx) status code.
///
/// It defaults to `400 Bad Request`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(try_from = "u16")]
pub struct RejectionStatus(StatusCode);

impl RejectionStatus {
    /// The underlying status code.
    pub fn status_code(self) -> StatusCode {
        self.0
    }
}

impl Default for RejectionStatus {
    fn default() -> Self {
        Self(StatusCode::BAD_REQUEST)
    }
}

impl TryFrom<u16> for RejectionStatus {
    type Error = InvalidRejectionStatus;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match StatusCode::from_u16(code) {
            Ok(status) if status.is_client_error() => Ok(Self(status)),
            _ => Err(InvalidRejectionStatus { code }),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("`{code}` can't be used to reject requests: it must be a client error (4xx) status code")]
/// The error returned when trying to build a [`RejectionStatus`] out of a
/// status code that isn't a client error.
pub struct InvalidRejectionStatus {
    code: u16,
}

#[cfg(test)]
mod tests {
    use super::RejectionStatus;

    #[test]
    fn only_client_errors_are_accepted() {
        assert!(RejectionStatus::try_from(400).is_ok());
        assert!(RejectionStatus::try_from(499).is_ok());
        for code in [200, 302, 399, 500, 1000] {
            let err = RejectionStatus::try_from(code).unwrap_err();
            assert!(err.to_string().starts_with(&format!("`{code}`")));
        }
    }
}
