//
// Copyright (c) Tidepool Labs
//
// Licensed under the Apache License, Version 2.0.
// See the LICENSE file in the project root for license information.
//

use crate::{
    tick_array_start_tick_index, ClmmPoolFacade, CoreError, TickArrayBitmapExtensionFacade, INVALID_TICK_ARRAY_BITMAP,
    MAX_TICK_INDEX, MIN_TICK_INDEX, POOL_TICK_ARRAY_BITMAP_SIZE, TICK_ARRAY_BITMAP_EXTENSION_GROUPS,
    TICK_ARRAY_BITMAP_GROUP_SIZE, TICK_ARRAY_SIZE,
};

/// Segment offsets covered by the pool's own bitmap: [-512, 512).
const CORE_HALF_RANGE: i32 = (POOL_TICK_ARRAY_BITMAP_SIZE * 64 / 2) as i32;

/// Segment offsets covered per side once the extension is included.
const EXTENSION_HALF_RANGE: i32 =
    CORE_HALF_RANGE + (TICK_ARRAY_BITMAP_EXTENSION_GROUPS * TICK_ARRAY_BITMAP_GROUP_SIZE * 64) as i32;

fn ticks_per_array(tick_spacing: u16) -> i32 {
    tick_spacing as i32 * TICK_ARRAY_SIZE as i32
}

/// Lowest and highest segment offsets that contain any tick in bounds.
fn offset_bounds(tick_spacing: u16) -> (i32, i32) {
    let span = ticks_per_array(tick_spacing);
    (MIN_TICK_INDEX.div_euclid(span), MAX_TICK_INDEX.div_euclid(span))
}

/// Reads the merged bitmap bit for a segment offset. A missing extension
/// reads as all zeroes.
fn is_offset_set(
    pool: &ClmmPoolFacade,
    extension: Option<&TickArrayBitmapExtensionFacade>,
    offset: i32,
) -> Result<bool, CoreError> {
    if (-CORE_HALF_RANGE..CORE_HALF_RANGE).contains(&offset) {
        let bit = (offset + CORE_HALF_RANGE) as usize;
        return Ok(pool.tick_array_bitmap[bit / 64] & (1u64 << (bit % 64)) != 0);
    }
    if !(-EXTENSION_HALF_RANGE..EXTENSION_HALF_RANGE).contains(&offset) {
        return Err(INVALID_TICK_ARRAY_BITMAP);
    }
    let Some(extension) = extension else {
        return Ok(false);
    };
    let (side, n) = if offset >= CORE_HALF_RANGE {
        (&extension.positive_tick_array_bitmap, (offset - CORE_HALF_RANGE) as usize)
    } else {
        // Negative extension words count outward from the core window.
        (&extension.negative_tick_array_bitmap, (-offset - CORE_HALF_RANGE - 1) as usize)
    };
    let group = n / (TICK_ARRAY_BITMAP_GROUP_SIZE * 64);
    let bit = n % (TICK_ARRAY_BITMAP_GROUP_SIZE * 64);
    Ok(side[group][bit / 64] & (1u64 << (bit % 64)) != 0)
}

/// Returns whether the tick array containing `tick_index` is marked
/// initialized, along with that array's start tick index.
pub fn check_tick_array_is_initialized(
    pool: &ClmmPoolFacade,
    extension: Option<&TickArrayBitmapExtensionFacade>,
    tick_index: i32,
) -> Result<(bool, i32), CoreError> {
    let span = ticks_per_array(pool.tick_spacing);
    let start_tick_index = tick_array_start_tick_index(tick_index, pool.tick_spacing);
    let initialized = is_offset_set(pool, extension, start_tick_index / span)?;
    Ok((initialized, start_tick_index))
}

/// Returns whether the tick array starting at `start_tick_index` is marked
/// initialized.
pub fn is_tick_array_initialized(
    pool: &ClmmPoolFacade,
    extension: Option<&TickArrayBitmapExtensionFacade>,
    start_tick_index: i32,
) -> Result<bool, CoreError> {
    let span = ticks_per_array(pool.tick_spacing);
    is_offset_set(pool, extension, start_tick_index.div_euclid(span))
}

/// Start index of the first initialized tick array strictly before
/// (`a_to_b`) or after (`!a_to_b`) the one starting at `start_tick_index`.
/// Returns `None` when the search exhausts the in-bounds segment range.
pub fn next_initialized_tick_array_start_index(
    pool: &ClmmPoolFacade,
    extension: Option<&TickArrayBitmapExtensionFacade>,
    start_tick_index: i32,
    a_to_b: bool,
) -> Result<Option<i32>, CoreError> {
    let span = ticks_per_array(pool.tick_spacing);
    let (min_offset, max_offset) = offset_bounds(pool.tick_spacing);
    let mut offset = start_tick_index.div_euclid(span);
    loop {
        offset = if a_to_b { offset - 1 } else { offset + 1 };
        if offset < min_offset || offset > max_offset {
            return Ok(None);
        }
        if is_offset_set(pool, extension, offset)? {
            return Ok(Some(offset * span));
        }
    }
}

/// Start indexes of initialized tick arrays within `count_per_side` segments
/// at or below the current tick's segment, and `count_per_side` above it.
/// Ordered nearest-first per side, the lower side first.
pub fn initialized_tick_arrays_in_range(
    pool: &ClmmPoolFacade,
    extension: Option<&TickArrayBitmapExtensionFacade>,
    count_per_side: usize,
) -> Result<Vec<i32>, CoreError> {
    let span = ticks_per_array(pool.tick_spacing);
    let (min_offset, max_offset) = offset_bounds(pool.tick_spacing);
    let current_offset = pool.tick_current_index.div_euclid(span);
    let mut result = Vec::new();
    let mut offset = current_offset;
    while offset >= min_offset && result.len() < count_per_side {
        if is_offset_set(pool, extension, offset)? {
            result.push(offset * span);
        }
        offset -= 1;
    }
    let mut upper = Vec::new();
    offset = current_offset + 1;
    while offset <= max_offset && upper.len() < count_per_side {
        if is_offset_set(pool, extension, offset)? {
            upper.push(offset * span);
        }
        offset += 1;
    }
    result.extend(upper);
    Ok(result)
}
