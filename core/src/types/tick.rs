//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

use std::collections::BTreeMap;

use crate::TICK_ARRAY_SIZE;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct TickFacade {
    pub liquidity_net: i128,
    pub liquidity_gross: u128,
}

impl TickFacade {
    /// A tick slot takes part in swaps only while some position references it.
    pub fn is_initialized(&self) -> bool {
        self.liquidity_gross > 0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickArrayFacade {
    pub start_tick_index: i32,
    pub ticks: [TickFacade; TICK_ARRAY_SIZE],
}

impl TickArrayFacade {
    /// Next initialized tick strictly below-or-at (`a_to_b`) or strictly above
    /// (`!a_to_b`) the given tick index, within this array. The tick index may
    /// lie outside the array; the scan clamps to the array edges.
    pub fn next_initialized_tick(&self, tick_index: i32, tick_spacing: u16, a_to_b: bool) -> Option<(i32, &TickFacade)> {
        let spacing = tick_spacing as i32;
        let offset = (tick_index - self.start_tick_index).div_euclid(spacing);
        if a_to_b {
            let mut i = offset.min(TICK_ARRAY_SIZE as i32 - 1);
            while i >= 0 {
                let tick = &self.ticks[i as usize];
                if tick.is_initialized() {
                    return Some((self.start_tick_index + i * spacing, tick));
                }
                i -= 1;
            }
        } else {
            let mut i = (offset + 1).max(0);
            while i < TICK_ARRAY_SIZE as i32 {
                let tick = &self.ticks[i as usize];
                if tick.is_initialized() {
                    return Some((self.start_tick_index + i * spacing, tick));
                }
                i += 1;
            }
        }
        None
    }
}

/// Tick arrays available to the quote engine, keyed by start tick index.
/// The engine fails with `ACCOUNT_LACK` when it needs one that is absent.
#[derive(Clone, Debug, Default)]
pub struct TickArrayCache {
    arrays: BTreeMap<i32, TickArrayFacade>,
}

impl TickArrayCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tick_array: TickArrayFacade) {
        self.arrays.insert(tick_array.start_tick_index, tick_array);
    }

    pub fn get(&self, start_tick_index: i32) -> Option<&TickArrayFacade> {
        self.arrays.get(&start_tick_index)
    }

    pub fn contains(&self, start_tick_index: i32) -> bool {
        self.arrays.contains_key(&start_tick_index)
    }

    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }
}

impl FromIterator<TickArrayFacade> for TickArrayCache {
    fn from_iter<T: IntoIterator<Item = TickArrayFacade>>(iter: T) -> Self {
        let mut cache = Self::new();
        for tick_array in iter {
            cache.insert(tick_array);
        }
        cache
    }
}
