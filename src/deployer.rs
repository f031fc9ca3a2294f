use alloy::{
    network::Ethereum,
    primitives::Address,
    providers::Provider,
    transports::http::{Client, Http},
};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::contract::{Market, NFT};

/// The deployment surface consumed by [`deploy_contracts`]. The production
/// implementation is [`ChainDeployer`]; tests substitute a mock.
pub trait DeployContracts {
    fn deploy_market(&self) -> impl std::future::Future<Output = Result<Address>> + Send;
    fn deploy_nft(
        &self,
        market: Address,
    ) -> impl std::future::Future<Output = Result<Address>> + Send;
}

/// Deploys the compiled artifacts through an alloy provider.
#[derive(Clone)]
pub struct ChainDeployer<P> {
    provider: P,
}

impl<P> ChainDeployer<P>
where
    P: Provider<Http<Client>, Ethereum> + Clone,
{
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P> DeployContracts for ChainDeployer<P>
where
    P: Provider<Http<Client>, Ethereum> + Clone + Send + Sync,
{
    async fn deploy_market(&self) -> Result<Address> {
        let contract = Market::deploy(&self.provider).await?;
        Ok(*contract.address())
    }

    async fn deploy_nft(&self, market: Address) -> Result<Address> {
        let contract = NFT::deploy(&self.provider, market).await?;
        Ok(*contract.address())
    }
}

/// Addresses of the deployed contracts. The JSON field names match what the
/// downstream tooling already consumes, including the `nftAdress` spelling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployedContracts {
    #[serde(rename = "marketAddress")]
    pub market: Address,
    #[serde(rename = "nftAdress")]
    pub nft: Address,
}

/// Deploy the Market contract, then the NFT contract bound to it.
///
/// The two deployments are serialized: the NFT constructor takes the
/// marketplace address, so it cannot start before the Market address is
/// resolved. Any failure short-circuits; in particular a failed Market
/// deployment means the NFT deployment is never attempted.
pub async fn deploy_contracts(deployer: &impl DeployContracts) -> Result<DeployedContracts> {
    info!("Deploying Market");
    let market = deployer.deploy_market().await?;
    info!("Deployed Market at {:#}", market);

    info!("Deploying NFT");
    let nft = deployer.deploy_nft(market).await?;
    info!("Deployed NFT at {:#}", nft);

    Ok(DeployedContracts { market, nft })
}
