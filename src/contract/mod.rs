//! RPC bindings for the marketplace contract artifacts.
//!
//! The Solidity sources live in their own repository; the creation bytecode
//! embedded here is taken from the `forge build` output of that repo.

pub mod market;
pub mod nft;

pub use market::Market;
pub use nft::NFT;
