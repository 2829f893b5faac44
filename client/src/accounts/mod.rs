//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

mod amm_config;
mod pool_state;
mod tick_array;
mod tick_array_bitmap_extension;

pub use amm_config::*;
pub use pool_state::*;
pub use tick_array::*;
pub use tick_array_bitmap_extension::*;
