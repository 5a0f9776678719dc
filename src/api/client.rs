use anyhow::{Context, Result};
use reqwest::Client;

const USER_AGENT: &str = concat!("deepcheck/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct HttpClient {
    pub client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}
