//! Background execution of a single forecast request. The UI thread never
//! blocks: outcomes come back over an mpsc channel that the frame loop polls.

use std::sync::mpsc::Sender;

use crate::app::FetchOutcome;

#[cfg(not(target_arch = "wasm32"))]
use crate::data::ForecastSource;

#[cfg(target_arch = "wasm32")]
use crate::data::HttpForecastSource;

/// Run one fetch on a worker thread with its own runtime, delivering the
/// generation-tagged outcome over `tx`. Send failure means the app dropped
/// the receiver, which is not worth reporting.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn spawn_fetch<S>(source: S, generation: u64, horizon_days: u32, tx: Sender<FetchOutcome>)
where
    S: ForecastSource + 'static,
{
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("Failed to create runtime");
        rt.block_on(async move {
            let result = source.fetch_forecast(horizon_days).await;
            let _ = tx.send(FetchOutcome { generation, result });
        });
    });
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn spawn_fetch(
    source: HttpForecastSource,
    generation: u64,
    horizon_days: u32,
    tx: Sender<FetchOutcome>,
) {
    wasm_bindgen_futures::spawn_local(async move {
        let result = source.fetch(horizon_days).await;
        let _ = tx.send(FetchOutcome { generation, result });
    });
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::sync::mpsc;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::error::ForecastError;
    use crate::models::ForecastPoint;

    struct CannedSource {
        outcome: Result<Vec<ForecastPoint>, ForecastError>,
    }

    #[async_trait]
    impl ForecastSource for CannedSource {
        async fn fetch_forecast(
            &self,
            _horizon_days: u32,
        ) -> Result<Vec<ForecastPoint>, ForecastError> {
            match &self.outcome {
                Ok(points) => Ok(points.clone()),
                Err(_) => Err(ForecastError::BadStatus { status: 500 }),
            }
        }
    }

    fn point(ds: &str) -> ForecastPoint {
        ForecastPoint {
            ds: ds.into(),
            yhat: 12.0,
            yhat_lower: 10.0,
            yhat_upper: 14.0,
        }
    }

    #[test]
    fn delivers_successful_outcome_with_its_generation() {
        let (tx, rx) = mpsc::channel();
        let source = CannedSource {
            outcome: Ok(vec![point("2025-10-05"), point("2025-10-06")]),
        };

        spawn_fetch(source, 7, 30, tx);

        let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(outcome.generation, 7);
        assert_eq!(outcome.result.unwrap().len(), 2);
    }

    #[test]
    fn delivers_failure_outcome_with_its_generation() {
        let (tx, rx) = mpsc::channel();
        let source = CannedSource {
            outcome: Err(ForecastError::BadStatus { status: 500 }),
        };

        spawn_fetch(source, 3, 30, tx);

        let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(outcome.generation, 3);
        assert!(matches!(
            outcome.result,
            Err(ForecastError::BadStatus { status: 500 })
        ));
    }
}
