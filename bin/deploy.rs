use alloy::signers::local::PrivateKeySigner;
use anyhow::Result;
use clap::Parser;
use nft_market_deploy::{
    cli::DeployConfig,
    deployer::{deploy_contracts, ChainDeployer, DeployedContracts},
    env::{create_provider, init_console_subscriber},
};
use std::str::FromStr;
use tracing::info;

async fn deploy(config: DeployConfig) -> Result<DeployedContracts> {
    info!("{}", serde_json::to_string_pretty(&config)?);

    let deployer_key = PrivateKeySigner::from_str(config.deployer_key.as_str())?;
    info!(
        "Deploying contracts with the account: {:#}",
        deployer_key.address()
    );

    let provider = create_provider(config.node_url()?, deployer_key);
    let deployer = ChainDeployer::new(provider);
    deploy_contracts(&deployer).await
}

#[tokio::main]
async fn main() -> Result<()> {
    init_console_subscriber();
    let config = DeployConfig::parse();
    let addresses = deploy(config).await?;
    println!("{}", serde_json::to_string(&addresses)?);
    Ok(())
}
