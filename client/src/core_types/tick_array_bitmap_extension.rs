//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

use tidepool_core::TickArrayBitmapExtensionFacade;

use crate::TickArrayBitmapExtension;

impl From<TickArrayBitmapExtension> for TickArrayBitmapExtensionFacade {
    fn from(val: TickArrayBitmapExtension) -> Self {
        TickArrayBitmapExtensionFacade {
            negative_tick_array_bitmap: val.negative_tick_array_bitmap,
            positive_tick_array_bitmap: val.positive_tick_array_bitmap,
        }
    }
}
