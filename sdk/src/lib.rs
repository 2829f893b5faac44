//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

mod amm;
mod config;
mod pool;
mod swap;

pub use amm::*;
pub use config::*;
pub use pool::*;
pub use swap::*;
