//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

use borsh::{BorshDeserialize, BorshSerialize};
use solana_pubkey::Pubkey;

use crate::DecodeError;

#[derive(BorshSerialize, BorshDeserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct RewardInfo {
    pub reward_state: u8,
    pub open_time: u64,
    pub end_time: u64,
    pub last_update_time: u64,
    pub emissions_per_second_x64: u128,
    pub reward_total_emissioned: u64,
    pub reward_claimed: u64,
    pub token_mint: Pubkey,
    pub token_vault: Pubkey,
    pub authority: Pubkey,
    pub reward_growth_global_x64: u128,
}

/// The pool account. The quote engine reads the price, liquidity, tick
/// spacing, and the core tick array bitmap; the remaining fields are kept
/// for layout parity with the on-chain account.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PoolState {
    pub discriminator: [u8; 8],
    pub bump: u8,
    pub amm_config: Pubkey,
    pub owner: Pubkey,
    pub token_mint_a: Pubkey,
    pub token_mint_b: Pubkey,
    pub token_vault_a: Pubkey,
    pub token_vault_b: Pubkey,
    pub observation_key: Pubkey,
    pub mint_decimals_a: u8,
    pub mint_decimals_b: u8,
    pub tick_spacing: u16,
    pub liquidity: u128,
    pub sqrt_price_x64: u128,
    pub tick_current: i32,
    pub observation_index: u16,
    pub observation_update_duration: u16,
    pub fee_growth_global_a: u128,
    pub fee_growth_global_b: u128,
    pub protocol_fees_token_a: u64,
    pub protocol_fees_token_b: u64,
    pub swap_in_amount_token_a: u128,
    pub swap_out_amount_token_b: u128,
    pub swap_in_amount_token_b: u128,
    pub swap_out_amount_token_a: u128,
    pub status: u8,
    pub padding: [u8; 7],
    pub reward_infos: [RewardInfo; 3],
    pub tick_array_bitmap: [u64; 16],
    pub total_fees_token_a: u64,
    pub total_fees_claimed_token_a: u64,
    pub total_fees_token_b: u64,
    pub total_fees_claimed_token_b: u64,
    pub reserved: [u64; 60],
}

impl PoolState {
    pub const LEN: usize = 1544;
    pub const DISCRIMINATOR: [u8; 8] = [247, 237, 227, 245, 215, 195, 222, 70];

    pub fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() != Self::LEN {
            return Err(DecodeError::UnexpectedLength {
                expected: Self::LEN,
                actual: data.len(),
            });
        }
        if data[..8] != Self::DISCRIMINATOR {
            return Err(DecodeError::InvalidDiscriminator);
        }
        let mut data = data;
        Ok(Self::deserialize(&mut data)?)
    }
}
