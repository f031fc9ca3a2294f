pub mod cli;
pub mod contract;
pub mod deployer;
pub mod env;
