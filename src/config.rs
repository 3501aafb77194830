//! NEAR network configuration keyed by environment label.
//!
//! The label is resolved at compile time (`APP_ENV`, then `NODE_ENV`) because
//! the bundle runs in a browser with no process environment. The resulting
//! record only parametrizes the SDK connection; the shell never reads it.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use serde::Serialize;

pub const DEFAULT_ENV_LABEL: &str = "development";
pub const DEFAULT_CONTRACT_NAME: &str = "qanda-near.testnet";

/// Contract methods callable without a signed transaction.
pub const VIEW_METHODS: &[&str] = &[
    "get_list_question",
    "get_question_detail",
    "get_list_answer_for_question",
    "get_donate_history",
];

/// Contract methods that require a signed-in account.
pub const CHANGE_METHODS: &[&str] = &["create_question", "create_answer", "donate"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unconfigured environment '{0}'")]
    Unconfigured(String),
}

/// Connection settings handed to `nearApi.connect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub network_id: String,
    pub node_url: String,
    #[serde(skip)]
    pub contract_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helper_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_account: Option<String>,
}

impl NetworkConfig {
    /// Look up the configuration for `label` using the compiled-in contract name.
    pub fn for_env(label: &str) -> Result<Self, ConfigError> {
        Self::for_env_with_contract(label, contract_name())
    }

    /// Look up the configuration for `label` against an explicit contract.
    ///
    /// Accepted labels: `production`/`mainnet`, `development`/`testnet`,
    /// `betanet`, `local`, `test`/`ci`, `ci-betanet`.
    pub fn for_env_with_contract(label: &str, contract_name: &str) -> Result<Self, ConfigError> {
        let config = match label {
            "production" | "mainnet" => public_network("mainnet", "https://wallet.near.org", contract_name),
            "development" | "testnet" => {
                public_network("testnet", "https://wallet.testnet.near.org", contract_name)
            }
            "betanet" => public_network("betanet", "https://wallet.betanet.near.org", contract_name),
            "local" => Self {
                network_id: "local".into(),
                node_url: "http://localhost:3030".into(),
                contract_name: contract_name.into(),
                wallet_url: Some("http://localhost:4000/wallet".into()),
                helper_url: None,
                explorer_url: None,
                master_account: None,
            },
            "test" | "ci" => shared_test("shared-test", "https://rpc.ci-testnet.near.org", contract_name),
            "ci-betanet" => {
                shared_test("shared-test-staging", "https://rpc.ci-betanet.near.org", contract_name)
            }
            other => return Err(ConfigError::Unconfigured(other.to_owned())),
        };
        Ok(config)
    }
}

/// Mainnet, testnet and betanet share one URL layout.
fn public_network(network_id: &str, wallet_url: &str, contract_name: &str) -> NetworkConfig {
    NetworkConfig {
        network_id: network_id.into(),
        node_url: format!("https://rpc.{network_id}.near.org"),
        contract_name: contract_name.into(),
        wallet_url: Some(wallet_url.into()),
        helper_url: Some(format!("https://helper.{network_id}.near.org")),
        explorer_url: Some(format!("https://explorer.{network_id}.near.org")),
        master_account: None,
    }
}

fn shared_test(network_id: &str, node_url: &str, contract_name: &str) -> NetworkConfig {
    NetworkConfig {
        network_id: network_id.into(),
        node_url: node_url.into(),
        contract_name: contract_name.into(),
        wallet_url: None,
        helper_url: None,
        explorer_url: None,
        master_account: Some("test.near".into()),
    }
}

/// Environment label baked in at build time.
pub fn active_env_label() -> &'static str {
    option_env!("APP_ENV")
        .or(option_env!("NODE_ENV"))
        .unwrap_or(DEFAULT_ENV_LABEL)
}

/// Contract account baked in at build time.
pub fn contract_name() -> &'static str {
    option_env!("CONTRACT_NAME").unwrap_or(DEFAULT_CONTRACT_NAME)
}
