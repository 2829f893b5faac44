//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

/// The number of ticks in a tick array account.
pub const TICK_ARRAY_SIZE: usize = 60;

/// The minimum tick index.
pub const MIN_TICK_INDEX: i32 = -221818;

/// The maximum tick index.
pub const MAX_TICK_INDEX: i32 = 221818;
