//! Two-view demo: a control surface and a preview pane behind one router.

mod pages;

use waypoint::{routes, Application, BoxedView, HistoryMode, Router};

use crate::pages::{ControlPane, PreviewPane};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mode = match std::env::var("WAYPOINT_HISTORY") {
        Ok(raw) => raw.parse::<HistoryMode>()?,
        Err(_) => HistoryMode::Addressable,
    };

    let table = routes! {
        "/control" => "Control": Box::new(ControlPane::new()) as BoxedView,
        "/" => "Preview": Box::new(PreviewPane::new()) as BoxedView,
    };
    let mut router = Router::new(mode, table)?;

    // Start at "/", or at an externally supplied address; either way the
    // restored location enters without polluting history.
    let start = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    router.sync(&start)?;

    Application::new().run(router)
}
