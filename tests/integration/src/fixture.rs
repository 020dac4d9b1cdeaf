use cosmwasm_std::{from_json, Addr, Coin, Uint128};
use cw_multi_test::ContractWrapper;
use random_ipfs_nft::msg::{
    ExecuteMsg as NftExecuteMsg, InstantiateMsg as NftInstantiateMsg, OwnerOfResponse,
    QueryMsg as NftQueryMsg,
};
use random_ipfs_nft::state::{NftConfig, PendingRequest, TokenInfo};
use tracing::{debug, info};
use vrf_coordinator_mock::msg::{
    ExecuteMsg as VrfExecuteMsg, InstantiateMsg as VrfInstantiateMsg, QueryMsg as VrfQueryMsg,
};
use vrf_coordinator_mock::state::Subscription;

use crate::chain::{AppResponse, MockChain};
use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::events::{
    EventListener, NftRequested, NFT_MINTED_EVENT, NFT_REQUESTED_EVENT, SUBSCRIPTION_CREATED_EVENT,
};

/// A freshly deployed coordinator + NFT pair on its own chain.
///
/// `deployer` owns both contracts and the subscription; `user` only mints.
pub struct MintContext {
    pub chain: MockChain,
    pub config: HarnessConfig,
    pub deployer: Addr,
    pub user: Addr,
    pub coordinator: Addr,
    pub nft: Addr,
    pub subscription_id: u64,
}

impl MintContext {
    /// 1. Fund deployer and user
    /// 2. Instantiate the coordinator, open and fund a subscription
    /// 3. Instantiate the NFT against it and register it as a consumer
    pub fn deploy(config: HarnessConfig) -> Result<Self, HarnessError> {
        let mut chain = MockChain::new(config.event_bus_capacity);
        let deployer = chain.api().addr_make("deployer");
        let user = chain.api().addr_make("user");
        let genesis = [Coin::new(config.account_balance, &config.fee_denom)];
        chain.set_balance(&deployer, &genesis)?;
        chain.set_balance(&user, &genesis)?;

        let vrf_code = chain.store_code(Box::new(ContractWrapper::new(
            vrf_coordinator_mock::contract::execute,
            vrf_coordinator_mock::contract::instantiate,
            vrf_coordinator_mock::contract::query,
        )));
        let nft_code = chain.store_code(Box::new(ContractWrapper::new(
            random_ipfs_nft::contract::execute,
            random_ipfs_nft::contract::instantiate,
            random_ipfs_nft::contract::query,
        )));

        let coordinator = chain.instantiate(
            vrf_code,
            &deployer,
            &VrfInstantiateMsg {
                base_fee: config.base_fee,
                gas_price: config.gas_price,
            },
            &[],
            "vrf-coordinator-mock",
        )?;

        let res = chain.execute(
            &deployer,
            &coordinator,
            &VrfExecuteMsg::CreateSubscription {},
            &[],
        )?;
        let subscription_id: u64 = res
            .single_event(&coordinator, SUBSCRIPTION_CREATED_EVENT)?
            .parse_attr("sub_id")?;
        if let Some(data) = &res.data {
            let from_data: u64 = from_json(data)?;
            if from_data != subscription_id {
                return Err(HarnessError::AssertionFailure(format!(
                    "subscription id mismatch: event {subscription_id}, data {from_data}"
                )));
            }
        }

        chain.execute(
            &deployer,
            &coordinator,
            &VrfExecuteMsg::FundSubscription {
                sub_id: subscription_id,
                amount: config.subscription_funding,
            },
            &[],
        )?;

        let nft = chain.instantiate(
            nft_code,
            &deployer,
            &NftInstantiateMsg {
                vrf_coordinator: coordinator.to_string(),
                subscription_id,
                key_hash: config.key_hash.clone(),
                callback_gas_limit: config.callback_gas_limit,
                mint_fee: config.mint_fee,
                fee_denom: config.fee_denom.clone(),
                token_uris: config.token_uris.clone(),
            },
            &[],
            "random-ipfs-nft",
        )?;

        chain.execute(
            &deployer,
            &coordinator,
            &VrfExecuteMsg::AddConsumer {
                sub_id: subscription_id,
                consumer: nft.to_string(),
            },
            &[],
        )?;

        info!(
            %coordinator,
            %nft,
            subscription_id,
            mint_fee = %config.mint_fee,
            "deployed mint fixture"
        );

        Ok(Self {
            chain,
            config,
            deployer,
            user,
            coordinator,
            nft,
            subscription_id,
        })
    }

    // ─── Reads ───

    pub fn nft_config(&self) -> Result<NftConfig, HarnessError> {
        self.chain.query(&self.nft, &NftQueryMsg::Config {})
    }

    pub fn token_uris(&self, index: u64) -> Result<String, HarnessError> {
        self.chain.query(&self.nft, &NftQueryMsg::TokenUris { index })
    }

    pub fn initialized(&self) -> Result<bool, HarnessError> {
        self.chain.query(&self.nft, &NftQueryMsg::Initialized {})
    }

    pub fn mint_fee(&self) -> Result<Coin, HarnessError> {
        self.chain.query(&self.nft, &NftQueryMsg::MintFee {})
    }

    pub fn token_counter(&self) -> Result<u64, HarnessError> {
        self.chain.query(&self.nft, &NftQueryMsg::TokenCounter {})
    }

    pub fn token_uri(&self, token_id: u64) -> Result<String, HarnessError> {
        self.chain.query(&self.nft, &NftQueryMsg::TokenUri { token_id })
    }

    pub fn nft_info(&self, token_id: u64) -> Result<TokenInfo, HarnessError> {
        self.chain.query(&self.nft, &NftQueryMsg::NftInfo { token_id })
    }

    pub fn owner_of(&self, token_id: u64) -> Result<Addr, HarnessError> {
        let res: OwnerOfResponse = self
            .chain
            .query(&self.nft, &NftQueryMsg::OwnerOf { token_id })?;
        Ok(Addr::unchecked(res.owner))
    }

    pub fn pending_request(&self, request_id: u64) -> Result<Option<PendingRequest>, HarnessError> {
        self.chain
            .query(&self.nft, &NftQueryMsg::PendingRequest { request_id })
    }

    pub fn subscription(&self) -> Result<Subscription, HarnessError> {
        let sub: Option<Subscription> = self.chain.query(
            &self.coordinator,
            &VrfQueryMsg::Subscription {
                sub_id: self.subscription_id,
            },
        )?;
        sub.ok_or_else(|| {
            HarnessError::AssertionFailure(format!(
                "subscription {} does not exist",
                self.subscription_id
            ))
        })
    }

    pub fn balance(&self, addr: &Addr) -> Result<Uint128, HarnessError> {
        self.chain.balance(addr, &self.config.fee_denom)
    }

    // ─── Actions ───

    /// Request an NFT as `user`, attaching `payment` if any.
    pub fn request_nft(&mut self, payment: Option<Coin>) -> Result<NftRequested, HarnessError> {
        let user = self.user.clone();
        self.request_nft_from(&user, payment)
    }

    pub fn request_nft_from(
        &mut self,
        sender: &Addr,
        payment: Option<Coin>,
    ) -> Result<NftRequested, HarnessError> {
        let funds: Vec<Coin> = payment.into_iter().collect();
        let res = self
            .chain
            .execute(sender, &self.nft, &NftExecuteMsg::RequestNft {}, &funds)?;
        let requested = NftRequested::try_from(res.single_event(&self.nft, NFT_REQUESTED_EVENT)?)?;
        debug!(request_id = requested.request_id, requester = %requested.requester, "nft requested");
        Ok(requested)
    }

    /// Have the coordinator fulfill `request_id` with derived words.
    pub fn fulfill_random_words(&mut self, request_id: u64) -> Result<AppResponse, HarnessError> {
        let msg = VrfExecuteMsg::FulfillRandomWords {
            request_id,
            consumer: self.nft.to_string(),
        };
        let deployer = self.deployer.clone();
        self.chain.execute(&deployer, &self.coordinator, &msg, &[])
    }

    /// Have the coordinator fulfill `request_id` with the given words.
    pub fn fulfill_random_words_with_override(
        &mut self,
        request_id: u64,
        words: Vec<Uint128>,
    ) -> Result<AppResponse, HarnessError> {
        let msg = VrfExecuteMsg::FulfillRandomWordsWithOverride {
            request_id,
            consumer: self.nft.to_string(),
            words,
        };
        let deployer = self.deployer.clone();
        self.chain.execute(&deployer, &self.coordinator, &msg, &[])
    }

    pub fn withdraw_from(&mut self, sender: &Addr) -> Result<AppResponse, HarnessError> {
        self.chain
            .execute(sender, &self.nft, &NftExecuteMsg::Withdraw {}, &[])
    }

    /// Listen for the next `ty` event from the NFT contract.
    pub fn once(&self, ty: &str) -> EventListener {
        self.chain.once(Some(&self.nft), ty)
    }

    pub fn once_minted(&self) -> EventListener {
        self.once(NFT_MINTED_EVENT)
    }

    /// Exactly the configured fee in the fee denom.
    pub fn exact_fee(&self) -> Coin {
        Coin::new(self.config.mint_fee, &self.config.fee_denom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deploy_wires_contracts() {
        let ctx = MintContext::deploy(HarnessConfig::default()).unwrap();

        assert!(ctx.initialized().unwrap());
        assert_eq!(ctx.token_counter().unwrap(), 0);
        assert_ne!(ctx.nft, ctx.coordinator);

        let config = ctx.nft_config().unwrap();
        assert_eq!(config.vrf_coordinator, ctx.coordinator);
        assert_eq!(config.subscription_id, ctx.subscription_id);

        let sub = ctx.subscription().unwrap();
        assert_eq!(sub.owner, ctx.deployer);
        assert_eq!(sub.consumers, vec![ctx.nft.clone()]);
        assert_eq!(sub.balance, ctx.config.subscription_funding);

        assert_eq!(ctx.balance(&ctx.user).unwrap(), ctx.config.account_balance);
        assert_eq!(ctx.balance(&ctx.nft).unwrap(), Uint128::zero());
    }

    #[test]
    fn test_deploy_rejects_bad_token_uris() {
        let config = HarnessConfig {
            token_uris: vec!["https://example.com/pug.json".to_string()],
            ..HarnessConfig::default()
        };
        let err = MintContext::deploy(config).err().unwrap();
        match err {
            HarnessError::RejectedCall { reason, .. } => {
                assert!(reason.contains("expected 3 token URIs"), "{reason}")
            }
            other => panic!("expected rejection, got {other}"),
        }
    }
}
