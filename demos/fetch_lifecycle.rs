//! Fetch Lifecycle Example
//!
//! Simulates orchestration code that owns a `LazyResult` and replaces it as a
//! background request progresses, while a render loop shows whatever the
//! current value is.
//!
//! Run with: cargo run --example fetch_lifecycle --features tracing

use std::sync::Arc;
use std::time::Duration;

use lazy_result::LazyResult;
use tokio::sync::watch;

#[derive(Debug, Clone)]
struct Weather {
    city: String,
    celsius: f32,
}

#[derive(Debug, Clone)]
enum FetchError {
    UnknownCity(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::UnknownCity(c) => write!(f, "unknown city {}", c),
        }
    }
}

type WeatherState = LazyResult<FetchError, Arc<Weather>>;

async fn fetch_weather(city: &str) -> Result<Weather, FetchError> {
    tokio::time::sleep(Duration::from_millis(50)).await;
    match city {
        "Oslo" => Ok(Weather {
            city: city.to_string(),
            celsius: -3.5,
        }),
        "Lisbon" => Ok(Weather {
            city: city.to_string(),
            celsius: 19.0,
        }),
        other => Err(FetchError::UnknownCity(other.to_string())),
    }
}

fn render(state: &WeatherState) -> String {
    state.as_ref().dispatch(
        || "Pick a city".to_string(),
        || "Loading...".to_string(),
        |e| format!("Error: {}", e),
        |w| format!("{}: {:.1}°C", w.city, w.celsius),
    )
}

async fn load(city: &str, tx: &watch::Sender<WeatherState>) {
    tx.send_replace(LazyResult::loading().trace(city));
    let next = LazyResult::from(fetch_weather(city).await)
        .map_success(Arc::new)
        .trace_failure(city);
    tx.send_replace(next);
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let (tx, mut rx) = watch::channel(WeatherState::default());

    let renderer = tokio::spawn(async move {
        println!("{}", render(&rx.borrow()));
        while rx.changed().await.is_ok() {
            println!("{}", render(&rx.borrow_and_update()));
        }
    });

    for city in ["Oslo", "Atlantis", "Lisbon"] {
        load(city, &tx).await;
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    drop(tx);
    if let Err(e) = renderer.await {
        eprintln!("renderer failed: {}", e);
    }
}
