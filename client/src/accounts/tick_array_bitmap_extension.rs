//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

use borsh::{BorshDeserialize, BorshSerialize};
use solana_pubkey::Pubkey;

use crate::DecodeError;

/// Extended tick array bitmap for pools whose price range outgrows the
/// 1024-segment window stored inside the pool account. Negative-side
/// groups are serialized before positive-side groups.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TickArrayBitmapExtension {
    pub discriminator: [u8; 8],
    pub pool_id: Pubkey,
    pub negative_tick_array_bitmap: [[u64; 8]; 14],
    pub positive_tick_array_bitmap: [[u64; 8]; 14],
}

impl TickArrayBitmapExtension {
    pub const LEN: usize = 1832;
    pub const DISCRIMINATOR: [u8; 8] = [60, 150, 36, 219, 97, 128, 139, 153];

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
