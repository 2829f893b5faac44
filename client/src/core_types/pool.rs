//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

use tidepool_core::ClmmPoolFacade;

use crate::PoolState;

impl PoolState {
    /// Projects the pool account onto the quote engine view. The trade fee
    /// rate lives in the pool's `AmmConfig` account and is supplied by the
    /// caller.
    pub fn to_facade(&self, trade_fee_rate: u32) -> ClmmPoolFacade {
        ClmmPoolFacade {
            tick_spacing: self.tick_spacing,
            fee_rate: trade_fee_rate,
            liquidity: self.liquidity,
            sqrt_price: self.sqrt_price_x64,
            tick_current_index: self.tick_current,
            tick_array_bitmap: self.tick_array_bitmap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_pubkey::Pubkey;

    #[test]
    fn test_pool_conversion() {
        let pool_state = PoolState {
            discriminator: PoolState::DISCRIMINATOR,
            bump: 254,
            amm_config: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            token_mint_a: Pubkey::new_unique(),
            token_mint_b: Pubkey::new_unique(),
            token_vault_a: Pubkey::new_unique(),
            token_vault_b: Pubkey::new_unique(),
            observation_key: Pubkey::new_unique(),
            mint_decimals_a: 9,
            mint_decimals_b: 6,
            tick_spacing: 60,
            liquidity: 777,
            sqrt_price_x64: 1u128 << 64,
            tick_current: -3,
            observation_index: 0,
            observation_update_duration: 15,
            fee_growth_global_a: 0,
            fee_growth_global_b: 0,
            protocol_fees_token_a: 0,
            protocol_fees_token_b: 0,
            swap_in_amount_token_a: 0,
            swap_out_amount_token_b: 0,
            swap_in_amount_token_b: 0,
            swap_out_amount_token_a: 0,
            status: 0,
            padding: [0; 7],
            reward_infos: [Default::default(); 3],
            tick_array_bitmap: [3; 16],
            total_fees_token_a: 0,
            total_fees_claimed_token_a: 0,
            total_fees_token_b: 0,
            total_fees_claimed_token_b: 0,
            reserved: [0; 60],
        };

        let facade = pool_state.to_facade(2500);
        assert_eq!(facade.tick_spacing, 60);
        assert_eq!(facade.fee_rate, 2500);
        assert_eq!(facade.liquidity, 777);
        assert_eq!(facade.sqrt_price, 1u128 << 64);
        assert_eq!(facade.tick_current_index, -3);
        assert_eq!(facade.tick_array_bitmap, [3; 16]);
    }
}
