use crate::config::Config;
use crate::oracle::CompletionClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub oracle: CompletionClient,
}

impl AppState {
    pub fn new(config: Config, http: reqwest::Client) -> Self {
        let oracle = CompletionClient::new(http, &config);
        Self { config, oracle }
    }
}
