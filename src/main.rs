use combat_tracker::ui::app::TrackerApp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "combat_tracker=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting combat tracker");

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Combat Tracker",
        options,
        Box::new(|_cc| Ok(Box::new(TrackerApp::new()))),
    )
}
