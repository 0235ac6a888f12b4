pub mod artifacts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod contracts;
pub mod deployer;
pub mod error;
pub mod ledger;
pub mod rpc;
pub mod runner;

#[cfg(test)]
mod test_support;
