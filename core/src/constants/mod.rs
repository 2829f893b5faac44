//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

mod error;
mod swap;
mod tick;

pub use error::*;
pub use swap::*;
pub use tick::*;
