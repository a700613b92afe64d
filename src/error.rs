use std::error::Error;

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use crate::news::{Country, InputError};

#[derive(Debug, Error)]
pub enum RestError {
    #[error("Invalid type. Use \"crypto\" or \"gold\"")]
    InvalidTopic(#[source] InputError),

    #[error("Invalid country code")]
    InvalidCountry(#[source] InputError),
}

impl From<InputError> for RestError {
    fn from(e: InputError) -> Self {
        match e {
            InputError::Topic(_) => RestError::InvalidTopic(e),
            InputError::Country(_) => RestError::InvalidCountry(e),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        warn!("{}: {:?}", self, self.source());

        let payload = match &self {
            RestError::InvalidTopic(_) => json!({"error": self.to_string()}),
            RestError::InvalidCountry(_) => json!({
                "error": self.to_string(),
                "validCountries": Country::SUPPORTED,
            }),
        };

        (StatusCode::BAD_REQUEST, Json(payload)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_map_to_variants() {
        let topic: RestError = InputError::Topic("silver".to_string()).into();
        assert!(matches!(topic, RestError::InvalidTopic(_)));

        let country: RestError = InputError::Country("xx".to_string()).into();
        assert!(matches!(country, RestError::InvalidCountry(_)));
    }

    #[test]
    fn test_rejections_are_bad_requests() {
        let response = RestError::from(InputError::Country("xx".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
