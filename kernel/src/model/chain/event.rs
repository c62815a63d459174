use crate::model::id::ChainId;
use derive_new::new;

#[derive(Debug, new)]
pub struct UpdateChainName {
    pub chain_id: ChainId,
    pub chain_name: String,
}

#[derive(Debug, new)]
pub struct DeleteChain {
    pub chain_id: ChainId,
}
