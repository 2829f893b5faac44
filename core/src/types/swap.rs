//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

/// Outcome of a quote computed over the cached pool state.
///
/// `token_a` and `token_b` are the gross amounts moved in each mint,
/// fees included on the input side. `touched_tick_arrays` lists the start
/// indexes of every tick array the traversal read, in first-touch order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SwapResult {
    pub token_a: u64,
    pub token_b: u64,
    pub fee_amount: u64,
    pub next_sqrt_price: u128,
    pub next_liquidity: u128,
    pub next_tick_index: i32,
    pub touched_tick_arrays: Vec<i32>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct ExactInSwapQuote {
    pub token_in: u64,
    pub token_est_out: u64,
    pub token_min_out: u64,
    pub trade_fee: u64,
    pub next_sqrt_price: u128,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct ExactOutSwapQuote {
    pub token_out: u64,
    pub token_est_in: u64,
    pub token_max_in: u64,
    pub trade_fee: u64,
    pub next_sqrt_price: u128,
}
