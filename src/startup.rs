use crate::configuration::Settings;
use crate::runner::{RunSummary, run_all};
use crate::scenarios::ScenarioContext;

pub struct Harness {
    context: ScenarioContext,
}

impl Harness {
    pub fn build(configuration: Settings) -> Result<Self, reqwest::Error> {
        let client = configuration.target.client()?;
        tracing::debug!(endpoint = client.endpoint(), "Built create-user client");
        Ok(Self {
            context: ScenarioContext {
                client,
                run: configuration.run,
            },
        })
    }

    pub fn context(&self) -> &ScenarioContext {
        &self.context
    }

    pub async fn run_until_complete(&self) -> RunSummary {
        println!("Starting API tests...");
        let summary = run_all(&self.context).await;
        println!("{summary}");
        summary
    }
}
