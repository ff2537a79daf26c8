mod telemetry;

use medivault_reminders_infra::setup_context;
use medivault_reminders_scheduler::ReminderScheduler;
use telemetry::{get_subscriber, init_subscriber};
use tracing::info;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("medivault_reminders".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context().await;

    let scheduler = ReminderScheduler::new(context);
    let restored = scheduler.schedule_all_active().await;
    info!("Restored {} active reminder triggers", restored);

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received. Cancelling reminder triggers.");
    scheduler.shutdown().await;

    Ok(())
}
