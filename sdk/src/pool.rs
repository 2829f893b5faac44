//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

use solana_pubkey::Pubkey;
use std::error::Error;
use tidepool_client::{
    get_tick_array_address, get_tick_array_bitmap_extension_address, AmmConfig, PoolState, TickArrayBitmapExtension,
};
use tidepool_core::{initialized_tick_arrays_in_range, ClmmPoolFacade, TickArrayBitmapExtensionFacade};

/// How many initialized tick array segments to track on each side of the
/// current price when assembling the refresh account list.
pub const TICK_ARRAYS_PER_SIDE: usize = 7;

/// A decoded pool snapshot: the pool account joined with its fee config
/// and, when present, its bitmap extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    pub address: Pubkey,
    pub amm_config_address: Pubkey,
    pub token_mint_a: Pubkey,
    pub token_mint_b: Pubkey,
    pub mint_decimals_a: u8,
    pub mint_decimals_b: u8,
    pub tick_spacing: u16,
    pub trade_fee_rate: u32,
    pub liquidity: u128,
    pub sqrt_price_x64: u128,
    pub tick_current: i32,
    pub tick_array_bitmap: [u64; 16],
    pub extension: Option<TickArrayBitmapExtensionFacade>,
}

impl Pool {
    pub fn facade(&self) -> ClmmPoolFacade {
        ClmmPoolFacade {
            tick_spacing: self.tick_spacing,
            fee_rate: self.trade_fee_rate,
            liquidity: self.liquidity,
            sqrt_price: self.sqrt_price_x64,
            tick_current_index: self.tick_current,
            tick_array_bitmap: self.tick_array_bitmap,
        }
    }

    pub fn extension_facade(&self) -> Option<&TickArrayBitmapExtensionFacade> {
        self.extension.as_ref()
    }
}

/// Assembles a [`Pool`] snapshot from raw account bytes.
///
/// # Arguments
///
/// * `address` - The pool account address.
/// * `pool_data` - The raw pool account data.
/// * `config_data` - The raw data of the pool's `AmmConfig` account.
/// * `extension_data` - The raw bitmap extension data, for pools that have one.
///
/// # Errors
///
/// Fails when any buffer does not decode as its account type.
pub fn decode_pool(
    address: Pubkey,
    pool_data: &[u8],
    config_data: &[u8],
    extension_data: Option<&[u8]>,
) -> Result<Pool, Box<dyn Error>> {
    let pool_state = PoolState::from_bytes(pool_data)?;
    let config = AmmConfig::from_bytes(config_data)?;
    let extension = extension_data
        .map(TickArrayBitmapExtension::from_bytes)
        .transpose()?
        .map(Into::into);

    Ok(Pool {
        address,
        amm_config_address: pool_state.amm_config,
        token_mint_a: pool_state.token_mint_a,
        token_mint_b: pool_state.token_mint_b,
        mint_decimals_a: pool_state.mint_decimals_a,
        mint_decimals_b: pool_state.mint_decimals_b,
        tick_spacing: pool_state.tick_spacing,
        trade_fee_rate: config.trade_fee_rate,
        liquidity: pool_state.liquidity,
        sqrt_price_x64: pool_state.sqrt_price_x64,
        tick_current: pool_state.tick_current,
        tick_array_bitmap: pool_state.tick_array_bitmap,
        extension,
    })
}

/// The accounts a caller should refetch to keep a quote fresh: the pool,
/// its config, the bitmap extension, and the initialized tick arrays
/// within [`TICK_ARRAYS_PER_SIDE`] segments of the current price.
pub fn get_accounts_for_update(pool: &Pool) -> Result<Vec<Pubkey>, Box<dyn Error>> {
    let mut accounts = vec![pool.address, pool.amm_config_address];
    accounts.push(get_tick_array_bitmap_extension_address(&pool.address)?.0);

    let facade = pool.facade();
    let starts = initialized_tick_arrays_in_range(&facade, pool.extension_facade(), TICK_ARRAYS_PER_SIDE)?;
    for start_tick_index in starts {
        accounts.push(get_tick_array_address(&pool.address, start_tick_index)?.0);
    }
    Ok(accounts)
}
