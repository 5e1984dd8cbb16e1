//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

/// A completed forecast: the readings that were submitted and the values
/// the service predicted for the following steps.
#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
    pub readings: Vec<f64>,
    pub predicted: Vec<f64>,
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Latest successful prediction; drives the result area and the chart
    pub prediction: RwSignal<Option<Prediction>>,
    /// Application-level error from the service, shown inline in the
    /// result area. Does not clear the chart.
    pub service_error: RwSignal<Option<String>>,
    /// Global loading state (request in flight)
    pub loading: RwSignal<bool>,
    /// Timestamp of the last successful prediction
    pub last_predicted: RwSignal<Option<i64>>,
    /// Error message (for toasts)
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        prediction: create_rw_signal(None),
        service_error: create_rw_signal(None),
        loading: create_rw_signal(false),
        last_predicted: create_rw_signal(None),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Record a successful forecast. Clears any inline service error and
    /// stamps the prediction time.
    pub fn set_prediction(&self, readings: Vec<f64>, predicted: Vec<f64>) {
        self.service_error.set(None);
        self.prediction.set(Some(Prediction { readings, predicted }));
        self.last_predicted
            .set(Some(chrono::Utc::now().timestamp_millis()));
    }

    /// Record an application-level service error. The previous chart, if
    /// any, stays on screen; only the result area changes.
    pub fn set_service_error(&self, message: String) {
        self.service_error.set(Some(message));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

/// Format a millisecond timestamp as a wall-clock label for the footer.
pub fn clock_label(timestamp_ms: i64) -> Option<String> {
    chrono::DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format("%H:%M:%S").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_keeps_both_series_in_order() {
        let prediction = Prediction {
            readings: vec![80.0, 85.0],
            predicted: vec![128.0, 130.0],
        };
        assert_eq!(prediction.readings, vec![80.0, 85.0]);
        assert_eq!(prediction.predicted, vec![128.0, 130.0]);
    }

    #[test]
    fn clock_label_formats_wall_time() {
        // 2026-01-01 12:34:56 UTC
        let label = clock_label(1_767_271_496_000).unwrap();
        assert_eq!(label.len(), 8);
        assert!(label.contains(':'));
    }

    #[test]
    fn clock_label_rejects_out_of_range() {
        assert!(clock_label(i64::MAX).is_none());
    }
}
