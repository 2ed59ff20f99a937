mod ui;

use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

fn main() -> glib::ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokepairs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    ui::app::run()
}
