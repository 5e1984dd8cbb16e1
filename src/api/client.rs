//! HTTP API Client
//!
//! Functions for communicating with the prediction service.

use gloo_net::http::Request;

use crate::readings::ReadingSequence;

/// Default prediction service URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Get the service base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("glucast_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the service base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("glucast_api_url", url);
        }
    }
}

// ============ Request / Response Types ============

#[derive(Debug, serde::Serialize)]
struct PredictRequest {
    glucose_values: Vec<f64>,
}

#[derive(Debug, serde::Deserialize)]
pub struct PredictResponse {
    pub predicted_glucose_levels: Vec<f64>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// The service answers with either a forecast or an `error` field,
/// on 2xx and non-2xx statuses alike.
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum PredictBody {
    Err(ApiError),
    Ok(PredictResponse),
}

/// How a prediction request failed.
#[derive(Clone, Debug, PartialEq)]
pub enum PredictError {
    /// The service answered with an application-level error message.
    /// Shown inline in the result area.
    Service(String),
    /// The request never produced a usable response (network failure,
    /// unparseable body). Logged only.
    Transport(String),
}

// ============ API Functions ============

/// Request a forecast for a validated reading sequence.
///
/// Issues exactly one `POST /predict` with the parsed values as payload.
pub async fn predict(readings: &ReadingSequence) -> Result<Vec<f64>, PredictError> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/predict", api_base))
        .json(&PredictRequest {
            glucose_values: readings.values().to_vec(),
        })
        .map_err(|e| PredictError::Transport(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| PredictError::Transport(format!("Network error: {}", e)))?;

    let body: PredictBody = response
        .json()
        .await
        .map_err(|e| PredictError::Transport(format!("Parse error: {}", e)))?;

    match body {
        PredictBody::Ok(forecast) => Ok(forecast.predicted_glucose_levels),
        PredictBody::Err(err) => Err(PredictError::Service(err.error)),
    }
}

/// Check that the prediction service is reachable
pub async fn check_health() -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Prediction service is not healthy".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_payload_shape() {
        let readings: ReadingSequence =
            "80,85,90,95,100,105,110,115,120,125".parse().unwrap();
        let json = serde_json::to_value(PredictRequest {
            glucose_values: readings.values().to_vec(),
        })
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "glucose_values": [80.0, 85.0, 90.0, 95.0, 100.0, 105.0, 110.0, 115.0, 120.0, 125.0]
            })
        );
    }

    #[test]
    fn parses_forecast_body() {
        let body: PredictBody =
            serde_json::from_str(r#"{"predicted_glucose_levels":[128.0,130.5,132.25]}"#).unwrap();
        match body {
            PredictBody::Ok(forecast) => {
                assert_eq!(forecast.predicted_glucose_levels, vec![128.0, 130.5, 132.25])
            }
            PredictBody::Err(_) => panic!("expected forecast"),
        }
    }

    #[test]
    fn parses_error_body() {
        let body: PredictBody =
            serde_json::from_str(r#"{"error":"model unavailable"}"#).unwrap();
        match body {
            PredictBody::Err(err) => assert_eq!(err.error, "model unavailable"),
            PredictBody::Ok(_) => panic!("expected error"),
        }
    }

    #[test]
    fn unparseable_body_is_not_a_service_error() {
        let parsed: Result<PredictBody, _> = serde_json::from_str(r#"{"status":"ok"}"#);
        assert!(parsed.is_err());
    }
}
