//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

mod tick;
mod tick_array_bitmap;
mod token;

#[cfg(feature = "floats")]
mod price;

pub use tick::*;
pub use tick_array_bitmap::*;
pub use token::*;

#[cfg(feature = "floats")]
pub use price::*;
