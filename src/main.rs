use anyhow::Context;
use create_user_checks::configuration::get_configuration;
use create_user_checks::startup::Harness;
use create_user_checks::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr, the scenario report to stdout
    let subscriber = get_subscriber("create-user-checks".into(), "info".into(), std::io::stderr);
    init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let harness = Harness::build(configuration).context("Failed to build the HTTP client.")?;
    let summary = harness.run_until_complete().await;

    if !summary.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
