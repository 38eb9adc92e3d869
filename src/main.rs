use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use whack_a_zombie::app::App;
use whack_a_zombie::config::GameConfig;

fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish()
        .with(ErrorLayer::default());
    tracing::subscriber::set_global_default(subscriber)?;

    let config = GameConfig {
        log_path: Some("game_log.md".into()),
        ..Default::default()
    };

    App::new(config)?.run()?;
    Ok(())
}
