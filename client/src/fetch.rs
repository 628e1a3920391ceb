//! Account fetch-and-decode helpers: the boundary between the RPC byte-fetch
//! collaborator and the interface codecs.

use std::fmt::{self, Display, Formatter};

use lockup_interface::{
    error::LockupError,
    state::{lockup::Lockup, lockup_pool::LockupPool},
};
use solana_address::Address;
use solana_client::{client_error::ClientError, rpc_client::RpcClient};
use solana_commitment_config::CommitmentConfig;

use crate::logs::log_error;

/// Errors surfaced by the fetch boundary.
///
/// A missing account is reported unchanged as [`FetchError::AccountNotFound`];
/// whether to retry it is the caller's policy decision.
#[derive(Debug)]
pub enum FetchError {
    AccountNotFound(Address),
    Decode {
        address: Address,
        source: LockupError,
    },
    Rpc(ClientError),
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::AccountNotFound(address) => {
                write!(f, "account {address} does not exist")
            }
            FetchError::Decode { address, source } => {
                write!(f, "account {address} failed to decode: {source}")
            }
            FetchError::Rpc(error) => write!(f, "rpc request failed: {error}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Rpc(error) => Some(error),
            _ => None,
        }
    }
}

impl From<ClientError> for FetchError {
    fn from(error: ClientError) -> Self {
        FetchError::Rpc(error)
    }
}

/// Fetches and decodes a [`Lockup`] account, failing when it does not exist.
pub fn fetch_lockup(rpc: &RpcClient, address: &Address) -> Result<Lockup, FetchError> {
    let data = fetch_account_data(rpc, address)?;
    Lockup::from_bytes(&data)
        .map(Clone::clone)
        .map_err(|source| decode_error(address, source))
}

/// Fetches and decodes a [`Lockup`] account, mapping a missing account to
/// `None`.
pub fn fetch_maybe_lockup(rpc: &RpcClient, address: &Address) -> Result<Option<Lockup>, FetchError> {
    match fetch_lockup(rpc, address) {
        Ok(lockup) => Ok(Some(lockup)),
        Err(FetchError::AccountNotFound(_)) => Ok(None),
        Err(error) => Err(error),
    }
}

/// Fetches and decodes a [`LockupPool`] account, failing when it does not
/// exist. Boxed: the pool record is a 40 KiB fixed table.
pub fn fetch_lockup_pool(rpc: &RpcClient, address: &Address) -> Result<Box<LockupPool>, FetchError> {
    let data = fetch_account_data(rpc, address)?;
    LockupPool::from_bytes(&data)
        .map(|pool| Box::new(pool.clone()))
        .map_err(|source| decode_error(address, source))
}

/// Fetches and decodes a [`LockupPool`] account, mapping a missing account to
/// `None`.
pub fn fetch_maybe_lockup_pool(
    rpc: &RpcClient,
    address: &Address,
) -> Result<Option<Box<LockupPool>>, FetchError> {
    match fetch_lockup_pool(rpc, address) {
        Ok(pool) => Ok(Some(pool)),
        Err(FetchError::AccountNotFound(_)) => Ok(None),
        Err(error) => Err(error),
    }
}

fn decode_error(address: &Address, source: LockupError) -> FetchError {
    log_error("Account decode", format!("{address}: {source}"));
    FetchError::Decode {
        address: *address,
        source,
    }
}

fn fetch_account_data(rpc: &RpcClient, address: &Address) -> Result<Vec<u8>, FetchError> {
    rpc.get_account_with_commitment(address, CommitmentConfig::confirmed())?
        .value
        .map(|account| account.data)
        .ok_or(FetchError::AccountNotFound(*address))
}
