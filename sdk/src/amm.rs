//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

use solana_instruction::AccountMeta;
use solana_pubkey::Pubkey;
use std::collections::HashMap;
use std::error::Error;
use tidepool_client::{get_tick_array_address, get_tick_array_bitmap_extension_address, TickArrayState, TIDEPOOL_CLMM_ID};
use tidepool_core::{initialized_tick_arrays_in_range, TickArrayCache};

use crate::{compute_amount_out, decode_pool, get_accounts_for_update, Pool, TICK_ARRAYS_PER_SIDE};

/// Parameters for a routed quote request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteParams {
    pub amount: u64,
    pub input_mint: Pubkey,
    pub output_mint: Pubkey,
}

/// A routed quote.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub in_amount: u64,
    pub out_amount: u64,
    pub min_out_amount: u64,
    pub fee_amount: u64,
    pub fee_mint: Pubkey,
    pub price_impact_pct: f64,
    pub required_accounts: Vec<Pubkey>,
}

/// The leg a routed swap instruction executes through an [`Amm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapLeg {
    Clmm,
}

/// The interface a routing engine drives. Implementations own a cached
/// snapshot of their pool and refresh it from account bytes the router
/// fetches; quoting itself stays pure.
pub trait Amm {
    fn label(&self) -> String;
    fn program_id(&self) -> Pubkey;
    /// The pool account address.
    fn key(&self) -> Pubkey;
    /// The accounts whose fresh bytes [`Amm::update`] wants.
    fn get_accounts_for_update(&self) -> Vec<Pubkey>;
    /// Replaces the cached snapshot with the bytes in `account_map`.
    fn update(&mut self, account_map: &HashMap<Pubkey, Vec<u8>>) -> Result<(), Box<dyn Error>>;
    fn get_quote(&self, quote_params: &QuoteParams) -> Result<Quote, Box<dyn Error>>;
    /// The swap leg and the writable account metas an instruction built
    /// from these params passes, in the on-chain order.
    fn get_swap_leg_and_accounts(&self, quote_params: &QuoteParams) -> Result<(SwapLeg, Vec<AccountMeta>), Box<dyn Error>>;
}

/// [`Amm`] implementation backed by the quote engine and a cached set of
/// decoded accounts.
pub struct ClmmAdapter {
    pool: Pool,
    tick_arrays: TickArrayCache,
}

impl ClmmAdapter {
    /// Builds an adapter from raw account bytes. The tick array cache
    /// starts empty; call [`Amm::update`] before quoting.
    pub fn new(
        pool_address: Pubkey,
        pool_data: &[u8],
        config_data: &[u8],
        extension_data: Option<&[u8]>,
    ) -> Result<Self, Box<dyn Error>> {
        let pool = decode_pool(pool_address, pool_data, config_data, extension_data)?;
        Ok(Self {
            pool,
            tick_arrays: TickArrayCache::new(),
        })
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }
}

impl Amm for ClmmAdapter {
    fn label(&self) -> String {
        "Tidepool CLMM".to_string()
    }

    fn program_id(&self) -> Pubkey {
        TIDEPOOL_CLMM_ID
    }

    fn key(&self) -> Pubkey {
        self.pool.address
    }

    fn get_accounts_for_update(&self) -> Vec<Pubkey> {
        get_accounts_for_update(&self.pool).unwrap_or_else(|_| vec![self.pool.address, self.pool.amm_config_address])
    }

    fn update(&mut self, account_map: &HashMap<Pubkey, Vec<u8>>) -> Result<(), Box<dyn Error>> {
        let pool_data = account_map
            .get(&self.pool.address)
            .ok_or(format!("Missing pool account {}", self.pool.address))?;
        let config_data = account_map
            .get(&self.pool.amm_config_address)
            .ok_or(format!("Missing config account {}", self.pool.amm_config_address))?;
        let extension_data = if self.pool.extension.is_some() {
            let address = get_tick_array_bitmap_extension_address(&self.pool.address)?.0;
            account_map.get(&address).map(|data| data.as_slice())
        } else {
            None
        };
        self.pool = decode_pool(self.pool.address, pool_data, config_data, extension_data)?;

        let mut tick_arrays = TickArrayCache::new();
        let starts = initialized_tick_arrays_in_range(&self.pool.facade(), self.pool.extension_facade(), TICK_ARRAYS_PER_SIDE)?;
        for start_tick_index in starts {
            let address = get_tick_array_address(&self.pool.address, start_tick_index)?.0;
            if let Some(data) = account_map.get(&address) {
                tick_arrays.insert(TickArrayState::from_bytes(data)?.into());
            }
        }
        self.tick_arrays = tick_arrays;
        Ok(())
    }

    fn get_quote(&self, quote_params: &QuoteParams) -> Result<Quote, Box<dyn Error>> {
        if quote_params.output_mint != self.pool.token_mint_a && quote_params.output_mint != self.pool.token_mint_b {
            return Err(format!("Mint {} does not belong to pool {}", quote_params.output_mint, self.pool.address).into());
        }
        let quote = compute_amount_out(
            &self.pool,
            &self.tick_arrays,
            quote_params.input_mint,
            quote_params.amount,
            None,
            None,
        )?;
        Ok(Quote {
            in_amount: quote.amount_in,
            out_amount: quote.amount_out,
            min_out_amount: quote.min_amount_out,
            fee_amount: quote.fee,
            fee_mint: quote_params.input_mint,
            price_impact_pct: quote.price_impact_pct,
            required_accounts: quote.required_accounts,
        })
    }

    fn get_swap_leg_and_accounts(&self, quote_params: &QuoteParams) -> Result<(SwapLeg, Vec<AccountMeta>), Box<dyn Error>> {
        let quote = self.get_quote(quote_params)?;
        let metas = quote
            .required_accounts
            .into_iter()
            .map(|pubkey| AccountMeta::new(pubkey, false))
            .collect();
        Ok((SwapLeg::Clmm, metas))
    }
}
