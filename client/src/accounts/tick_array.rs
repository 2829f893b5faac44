//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

use borsh::{BorshDeserialize, BorshSerialize};
use solana_pubkey::Pubkey;

use crate::DecodeError;

pub const TICK_ARRAY_SIZE: usize = 60;

#[derive(BorshSerialize, BorshDeserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct TickState {
    pub tick: i32,
    pub liquidity_net: i128,
    pub liquidity_gross: u128,
    pub fee_growth_outside_a: u128,
    pub fee_growth_outside_b: u128,
    pub reward_growths_outside_x64: [u128; 3],
    pub padding: [u32; 13],
}

/// A fixed window of 60 consecutive ticks, spaced `tick_spacing` apart and
/// anchored at `start_tick_index`.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TickArrayState {
    pub discriminator: [u8; 8],
    pub pool_id: Pubkey,
    pub start_tick_index: i32,
    pub ticks: [TickState; TICK_ARRAY_SIZE],
    pub initialized_tick_count: u8,
    pub recent_epoch: u64,
    pub padding: [u8; 107],
}

impl TickArrayState {
    pub const LEN: usize = 10240;
    pub const DISCRIMINATOR: [u8; 8] = [192, 155, 85, 205, 49, 249, 129, 42];

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
