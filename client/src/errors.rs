//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("account data length {actual} does not match the expected {expected} bytes")]
    UnexpectedLength { expected: usize, actual: usize },

    #[error("account discriminator mismatch")]
    InvalidDiscriminator,

    #[error("borsh deserialization failed: {0}")]
    Borsh(#[from] std::io::Error),
}
