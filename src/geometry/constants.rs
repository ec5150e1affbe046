// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constants shared by the geometry types.

/// Half units per grid step. Real coordinates are doubled on the way in.
pub const HALF_UNITS_PER_STEP: i32 = 2;

/// Side length of the reference puzzle grid.
pub const REFERENCE_GRID_SIZE: u32 = 10;
