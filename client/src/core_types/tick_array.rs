//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

use tidepool_core::{TickArrayFacade, TickFacade};

use crate::{TickArrayState, TickState};

impl From<TickArrayState> for TickArrayFacade {
    fn from(val: TickArrayState) -> Self {
        TickArrayFacade {
            start_tick_index: val.start_tick_index,
            ticks: val.ticks.map(|tick| tick.into()),
        }
    }
}

impl From<TickState> for TickFacade {
    fn from(val: TickState) -> Self {
        TickFacade {
            liquidity_net: val.liquidity_net,
            liquidity_gross: val.liquidity_gross,
        }
    }
}
