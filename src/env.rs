use alloy::{
    network::{Ethereum, EthereumWallet},
    providers::{Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::{Client, Http},
};
use time::macros::format_description;
use tracing_subscriber::{fmt::time::UtcTime, EnvFilter};
use url::Url;

/// Console logging, filtered by `RUST_LOG`. Progress goes to stderr so that
/// stdout carries only the final address record.
pub fn init_console_subscriber() {
    let timer = UtcTime::new(format_description!(
        "[year]-[month]-[day]T[hour repr:24]:[minute]:[second].[subsecond digits:3]Z"
    ));
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_timer(timer)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// A wallet-filled HTTP provider: nonce and gas management are handled by the
/// recommended fillers, transactions are signed with `signer`.
pub fn create_provider(
    node_url: Url,
    signer: PrivateKeySigner,
) -> impl Provider<Http<Client>, Ethereum> + Clone {
    let wallet = EthereumWallet::from(signer);
    ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(wallet)
        .on_http(node_url)
}
