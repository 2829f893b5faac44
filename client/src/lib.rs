//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

mod accounts;
mod consts;
mod errors;
mod pda;

#[cfg(feature = "core-types")]
mod core_types;

pub use accounts::*;
pub use consts::*;
pub use errors::*;
pub use pda::*;

pub use consts::TIDEPOOL_CLMM_ID as ID;
