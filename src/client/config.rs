use std::env;

use url::Url;

use crate::client::models::endpoint::EndpointDescriptor;

pub const ACTIVITY_API_URL: &str = "https://www.boredapi.com/api/activity";
pub const FACT_API_URL: &str = "https://catfact.ninja/fact";

pub const CACHE_KEY_ACTIVITY: &str = "lastActivity";
pub const CACHE_KEY_FACT: &str = "lastFact";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub activity_url: String,
    pub fact_url: String,
    pub data_dir: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            activity_url: env_url("ACTIVITY_API_URL", ACTIVITY_API_URL),
            fact_url: env_url("FACT_API_URL", FACT_API_URL),
            data_dir: env::var("WHIM_DATA_DIR").unwrap_or_else(|_| "data".to_string()),
        }
    }

    /// The two resources the dashboard presents, in display order.
    pub fn endpoints(&self) -> Vec<EndpointDescriptor> {
        vec![
            EndpointDescriptor {
                label: "Activity".to_string(),
                url: self.activity_url.clone(),
                json_field: "activity".to_string(),
                cache_key: CACHE_KEY_ACTIVITY.to_string(),
            },
            EndpointDescriptor {
                label: "Fact".to_string(),
                url: self.fact_url.clone(),
                json_field: "fact".to_string(),
                cache_key: CACHE_KEY_FACT.to_string(),
            },
        ]
    }
}

/// Read an endpoint override from the environment, falling back to the
/// built-in default when the variable is unset or not a parseable URL.
fn env_url(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(raw) => match Url::parse(&raw) {
            Ok(_) => raw,
            Err(e) => {
                log::warn!("{} is not a valid URL ({}), using default", name, e);
                default.to_string()
            }
        },
        Err(_) => default.to_string(),
    }
}
