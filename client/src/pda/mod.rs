//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

mod tick_array;
mod tick_array_bitmap_extension;

pub use tick_array::*;
pub use tick_array_bitmap_extension::*;
