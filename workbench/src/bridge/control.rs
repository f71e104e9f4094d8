use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};
use wavecore::surface::{ParameterEvent, SeriesSnapshot};
use wavecore::{PipelineResult, SignalPipeline};

fn surface_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9600))
}

/// Bridge that owns the shared pipeline and serves it over HTTP for an
/// external control surface.
pub struct ControlBridge {
    pipeline: Arc<RwLock<SignalPipeline>>,
}

impl ControlBridge {
    pub fn new(pipeline: SignalPipeline) -> Self {
        Self {
            pipeline: Arc::new(RwLock::new(pipeline)),
        }
    }

    pub fn apply(&self, event: &ParameterEvent) -> PipelineResult<SeriesSnapshot> {
        self.pipeline.write().unwrap().apply_event(event)
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> SeriesSnapshot {
        self.pipeline.read().unwrap().snapshot()
    }

    #[cfg(test)]
    pub fn parameters(&self) -> ParameterEvent {
        self.pipeline.read().unwrap().parameters()
    }

    pub fn publish_status(&self, message: &str) {
        println!("[surface] {}", message);
    }

    /// Routes served by the bridge, split out so tests can drive them
    /// without binding a socket.
    fn routes(
        &self,
    ) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        let state = self.pipeline.clone();
        let state_filter = warp::any().map(move || state.clone());

        let snapshot_route = warp::path("snapshot")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: Arc<RwLock<SignalPipeline>>| {
                warp::reply::json(&state.read().unwrap().snapshot())
            });

        let parameters_route = warp::path("parameters")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: Arc<RwLock<SignalPipeline>>| {
                warp::reply::json(&state.read().unwrap().parameters())
            });

        let status_route = warp::path("status")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: Arc<RwLock<SignalPipeline>>| {
                let pipeline = state.read().unwrap();
                warp::reply::json(&json!({
                    "samples": pipeline.grid().len(),
                    "metrics": pipeline.metrics(),
                }))
            });

        let update_route = warp::path("update")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter.clone())
            .map(
                |event: ParameterEvent, state: Arc<RwLock<SignalPipeline>>| {
                    match state.write().unwrap().apply_event(&event) {
                        Ok(snapshot) => warp::reply::with_status(
                            warp::reply::json(&json!({
                                "status": "ok",
                                "samples": snapshot.sample_count(),
                            })),
                            StatusCode::OK,
                        ),
                        Err(err) => warp::reply::with_status(
                            warp::reply::json(&json!({
                                "status": "rejected",
                                "message": err.to_string(),
                            })),
                            StatusCode::UNPROCESSABLE_ENTITY,
                        ),
                    }
                },
            );

        let reset_route = warp::path("reset")
            .and(warp::post())
            .and(state_filter)
            .map(|state: Arc<RwLock<SignalPipeline>>| {
                let mut pipeline = state.write().unwrap();
                match pipeline.reset() {
                    Ok(_) => warp::reply::with_status(
                        warp::reply::json(&json!({
                            "status": "ok",
                            "parameters": pipeline.parameters(),
                        })),
                        StatusCode::OK,
                    ),
                    Err(err) => warp::reply::with_status(
                        warp::reply::json(&json!({
                            "status": "rejected",
                            "message": err.to_string(),
                        })),
                        StatusCode::UNPROCESSABLE_ENTITY,
                    ),
                }
            });

        snapshot_route
            .or(parameters_route)
            .or(status_route)
            .or(update_route)
            .or(reset_route)
    }

    /// Serves the bridge on a background thread until the process exits.
    pub fn spawn(&self) {
        let routes = self.routes();
        thread::spawn(move || {
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(surface_bind_address()).await;
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavecore::filtering::FilterSpec;

    fn seeded_bridge() -> ControlBridge {
        ControlBridge::new(SignalPipeline::with_seed(64, 5).unwrap())
    }

    #[test]
    fn bridge_applies_events_to_the_shared_pipeline() {
        let bridge = seeded_bridge();
        let event = ParameterEvent {
            amplitude: 2.5,
            ..ParameterEvent::default()
        };
        bridge.apply(&event).unwrap();
        assert_eq!(bridge.parameters().amplitude, 2.5);
    }

    #[tokio::test]
    async fn snapshot_route_serves_the_current_series() {
        let bridge = seeded_bridge();
        let reply = warp::test::request()
            .method("GET")
            .path("/snapshot")
            .reply(&bridge.routes())
            .await;
        assert_eq!(reply.status(), 200);
        let snapshot: SeriesSnapshot = serde_json::from_slice(reply.body()).unwrap();
        assert_eq!(snapshot.sample_count(), 64);
        assert_eq!(snapshot, bridge.snapshot());
    }

    #[tokio::test]
    async fn parameters_route_echoes_the_current_event() {
        let bridge = seeded_bridge();
        let event = ParameterEvent {
            phase: 0.5,
            ..ParameterEvent::default()
        };
        bridge.apply(&event).unwrap();

        let reply = warp::test::request()
            .method("GET")
            .path("/parameters")
            .reply(&bridge.routes())
            .await;
        assert_eq!(reply.status(), 200);
        let echoed: ParameterEvent = serde_json::from_slice(reply.body()).unwrap();
        assert_eq!(echoed, event);
    }

    #[tokio::test]
    async fn status_route_reports_sample_count_and_metrics() {
        let bridge = seeded_bridge();
        let reply = warp::test::request()
            .method("GET")
            .path("/status")
            .reply(&bridge.routes())
            .await;
        assert_eq!(reply.status(), 200);
        let body: serde_json::Value = serde_json::from_slice(reply.body()).unwrap();
        assert_eq!(body["samples"], 64);
        assert_eq!(body["metrics"]["recomputes"], 1);
    }

    #[tokio::test]
    async fn update_route_recomputes_and_reports_ok() {
        let bridge = seeded_bridge();
        let reply = warp::test::request()
            .method("POST")
            .path("/update")
            .json(&json!({
                "amplitude": 3.0,
                "filter": {"kind": "moving_average", "window": 2}
            }))
            .reply(&bridge.routes())
            .await;
        assert_eq!(reply.status(), 200);
        assert_eq!(bridge.parameters().amplitude, 3.0);
        assert_eq!(
            bridge.parameters().filter,
            FilterSpec::MovingAverage { window: 2 }
        );
    }

    #[tokio::test]
    async fn update_route_rejects_bad_parameters_and_keeps_the_series() {
        let bridge = seeded_bridge();
        let before = bridge.snapshot();
        let reply = warp::test::request()
            .method("POST")
            .path("/update")
            .json(&json!({"noise_std": -1.0}))
            .reply(&bridge.routes())
            .await;
        assert_eq!(reply.status(), 422);
        assert_eq!(bridge.snapshot(), before);
        assert_eq!(bridge.parameters(), ParameterEvent::default());
    }

    #[tokio::test]
    async fn reset_route_echoes_the_default_parameters() {
        let bridge = seeded_bridge();
        let event = ParameterEvent {
            frequency: 4.0,
            ..ParameterEvent::default()
        };
        bridge.apply(&event).unwrap();

        let reply = warp::test::request()
            .method("POST")
            .path("/reset")
            .reply(&bridge.routes())
            .await;
        assert_eq!(reply.status(), 200);
        assert_eq!(bridge.parameters(), ParameterEvent::default());

        let body: serde_json::Value = serde_json::from_slice(reply.body()).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["parameters"]["frequency"], 1.0);
    }
}
