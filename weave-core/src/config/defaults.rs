//! Compiled defaults for every config section.

use super::LoadOrderPolicy;

pub const DEFAULT_LOAD_ORDER: LoadOrderPolicy = LoadOrderPolicy::Verify;
