//! Independent components of the Ms. Pac-Man settings
//!
//! Each component only depends on code from common/ and on constants exported by the
//! extractor, which owns the memory layout of the game:
//! - `extractor` decodes raw memory into game quantities
//! - `reward` turns two consecutive extractions into a reward and a terminal flag
//! - `mode_select` negotiates the game variant by driving console input

pub mod extractor;
pub mod mode_select;
pub mod reward;
