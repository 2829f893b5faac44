//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

use borsh::{BorshDeserialize, BorshSerialize};
use solana_pubkey::Pubkey;

use crate::DecodeError;

/// Per-fee-tier pool configuration. Carries the trade fee rate the quote
/// engine charges, in hundredths of a basis point.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct AmmConfig {
    pub discriminator: [u8; 8],
    pub bump: u8,
    pub index: u16,
    pub owner: Pubkey,
    pub protocol_fee_rate: u32,
    pub trade_fee_rate: u32,
    pub tick_spacing: u16,
    pub fund_fee_rate: u32,
    pub padding: [u8; 60],
}

impl AmmConfig {
    pub const LEN: usize = 117;
    pub const DISCRIMINATOR: [u8; 8] = [218, 244, 33, 104, 203, 203, 43, 111];

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

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AmmConfig {
        AmmConfig {
            discriminator: AmmConfig::DISCRIMINATOR,
            bump: 252,
            index: 1,
            owner: Pubkey::new_unique(),
            protocol_fee_rate: 120000,
            trade_fee_rate: 2500,
            tick_spacing: 10,
            fund_fee_rate: 40000,
            padding: [0; 60],
        }
    }

    #[test]
    fn test_roundtrip() {
        let config = test_config();
        let data = config.try_to_vec().unwrap();
        assert_eq!(data.len(), AmmConfig::LEN);
        assert_eq!(AmmConfig::from_bytes(&data).unwrap(), config);
    }

    #[test]
    fn test_rejects_short_buffer() {
        let config = test_config();
        let data = config.try_to_vec().unwrap();
        assert!(matches!(
            AmmConfig::from_bytes(&data[..data.len() - 1]),
            Err(DecodeError::UnexpectedLength { expected: 117, actual: 116 })
        ));
    }

    #[test]
    fn test_rejects_wrong_discriminator() {
        let mut config = test_config();
        config.discriminator = [0; 8];
        let data = config.try_to_vec().unwrap();
        assert!(matches!(AmmConfig::from_bytes(&data), Err(DecodeError::InvalidDiscriminator)));
    }
}
