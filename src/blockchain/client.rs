//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to a JSON-RPC endpoint, optionally with a signing wallet
//! - Query native balances
//! - Submit signed transactions (exactly one attempt per call, no retry)
//! - Verify the endpoint serves the expected chain

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::blockchain::types::{ChainError, ChainId, ChainResult};
use crate::config::schema::ChainEndpoint;

/// Read and write access to one chain, as seen by the orchestrator.
///
/// The orchestrator only ever needs these two operations; tests substitute a
/// programmable mock behind the same trait.
#[async_trait]
pub trait ChainAccess {
    /// Current native balance of an address, in wei.
    async fn balance_of(&self, address: Address) -> ChainResult<U256>;

    /// Submit one transaction. Returns the pending hash without waiting for
    /// confirmation. Exactly one submission attempt per call.
    async fn send_transaction(
        &self,
        to: Address,
        calldata: Bytes,
        value: U256,
    ) -> ChainResult<TxHash>;
}

/// Pre-validated connection parameters for one chain.
///
/// URL parsing happens once here, so per-account client construction later in
/// the batch cannot fail.
#[derive(Debug, Clone)]
pub struct ChainConnector {
    name: String,
    chain_id: u64,
    url: url::Url,
    timeout_duration: Duration,
}

impl ChainConnector {
    /// Build a connector from an endpoint configuration.
    pub fn from_endpoint(endpoint: &ChainEndpoint) -> ChainResult<Self> {
        let url: url::Url = endpoint.rpc_url.parse().map_err(|e| {
            ChainError::Rpc(format!("Invalid RPC URL '{}': {}", endpoint.rpc_url, e))
        })?;

        Ok(Self {
            name: endpoint.name.clone(),
            chain_id: endpoint.chain_id,
            url,
            timeout_duration: Duration::from_secs(endpoint.rpc_timeout_secs),
        })
    }

    /// Read-only client (balance queries, chain verification).
    pub fn connect(&self) -> ChainClient {
        let provider = ProviderBuilder::new().connect_http(self.url.clone());
        self.client_with(Arc::new(provider))
    }

    /// Client that can also sign and submit transactions for one account.
    pub fn connect_with_signer(&self, signer: PrivateKeySigner) -> ChainClient {
        let provider = ProviderBuilder::new()
            .wallet(signer)
            .connect_http(self.url.clone());
        self.client_with(Arc::new(provider))
    }

    fn client_with(&self, provider: Arc<dyn Provider + Send + Sync>) -> ChainClient {
        ChainClient {
            provider,
            chain_name: self.name.clone(),
            expected_chain_id: self.chain_id,
            timeout_duration: self.timeout_duration,
        }
    }
}

/// Blockchain RPC client wrapper for one chain.
#[derive(Clone)]
pub struct ChainClient {
    provider: Arc<dyn Provider + Send + Sync>,
    chain_name: String,
    expected_chain_id: u64,
    timeout_duration: Duration,
}

impl ChainClient {
    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> ChainResult<ChainId> {
        let fut = self.provider.get_chain_id();
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(id)) => Ok(ChainId(id)),
            Ok(Err(e)) => Err(ChainError::Rpc(e.to_string())),
            Err(_) => Err(ChainError::Timeout(self.timeout_duration.as_secs())),
        }
    }

    /// Verify the connected chain ID matches configuration.
    pub async fn verify_chain_id(&self) -> ChainResult<()> {
        let chain_id = self.get_chain_id().await?;
        if chain_id.0 != self.expected_chain_id {
            return Err(ChainError::ChainMismatch {
                expected: self.expected_chain_id,
                actual: chain_id.0,
            });
        }
        tracing::info!(
            chain = %self.chain_name,
            chain_id = chain_id.0,
            "Chain verified"
        );
        Ok(())
    }

    /// Get the chain name used in log events.
    pub fn chain_name(&self) -> &str {
        &self.chain_name
    }
}

#[async_trait]
impl ChainAccess for ChainClient {
    async fn balance_of(&self, address: Address) -> ChainResult<U256> {
        let fut = self.provider.get_balance(address);
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(balance)) => Ok(balance),
            Ok(Err(e)) => Err(ChainError::Rpc(e.to_string())),
            Err(_) => Err(ChainError::Timeout(self.timeout_duration.as_secs())),
        }
    }

    async fn send_transaction(
        &self,
        to: Address,
        calldata: Bytes,
        value: U256,
    ) -> ChainResult<TxHash> {
        let tx = TransactionRequest::default()
            .with_to(to)
            .with_value(value)
            .with_input(calldata);

        let fut = self.provider.send_transaction(tx);
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(pending)) => Ok(*pending.tx_hash()),
            Ok(Err(e)) => Err(ChainError::Rpc(e.to_string())),
            Err(_) => Err(ChainError::Timeout(self.timeout_duration.as_secs())),
        }
    }
}

impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("chain_name", &self.chain_name)
            .field("expected_chain_id", &self.expected_chain_id)
            .field("timeout", &self.timeout_duration)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ChainEndpoint;

    #[test]
    fn test_connector_from_valid_endpoint() {
        let endpoint = ChainEndpoint::sepolia();
        let connector = ChainConnector::from_endpoint(&endpoint).unwrap();
        let client = connector.connect();
        assert_eq!(client.chain_name(), "sepolia");
    }

    #[test]
    fn test_connector_rejects_invalid_url() {
        let endpoint = ChainEndpoint {
            name: "broken".to_string(),
            rpc_url: "not a url".to_string(),
            chain_id: 1,
            rpc_timeout_secs: 5,
        };
        let result = ChainConnector::from_endpoint(&endpoint);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid RPC URL"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_times_out_or_errors() {
        let endpoint = ChainEndpoint {
            name: "dead".to_string(),
            rpc_url: "http://127.0.0.1:1".to_string(),
            chain_id: 1,
            rpc_timeout_secs: 1,
        };
        let client = ChainConnector::from_endpoint(&endpoint).unwrap().connect();
        let result = client.get_chain_id().await;
        assert!(result.is_err());
    }
}
