use clap::Parser;
use serde::Serialize;
use url::Url;

#[derive(Clone, Parser, Serialize)]
#[command(author, version, about, long_about = None)]
pub struct DeployConfig {
    /// Node host
    #[arg(long, env = "NODE_HOST", default_value = "localhost")]
    pub node_host: String,

    /// Node port
    #[arg(long, env = "NODE_PORT", default_value = "8545")]
    pub node_port: String,

    /// Deployer private key (with or without 0x prefix)
    #[arg(long, env = "DEPLOYER_KEY")]
    #[serde(skip_serializing)]
    pub deployer_key: String,
}

impl DeployConfig {
    pub fn node_url(&self) -> Result<Url, url::ParseError> {
        let node_url = format!("http://{}:{}", self.node_host, self.node_port);
        Url::parse(&node_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_url_is_built_from_host_and_port() {
        let config = DeployConfig {
            node_host: "localhost".to_string(),
            node_port: "8545".to_string(),
            deployer_key: "0x00".to_string(),
        };
        assert_eq!(config.node_url().unwrap().as_str(), "http://localhost:8545/");
    }

    #[test]
    fn deployer_key_is_not_serialized() {
        let config = DeployConfig {
            node_host: "localhost".to_string(),
            node_port: "8545".to_string(),
            deployer_key: "super-secret".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super-secret"));
    }
}
