//! Elementary transcendental functions.
//!
//! Every function here follows the same three-step engine: reduce the
//! argument with exponent-field manipulation or a compensated constant
//! split, evaluate a fixed-degree kernel polynomial on the reduced
//! interval, then reconstruct with the tabulated pivot values. Special
//! values never panic: NaN propagates, domain errors return NaN, range
//! errors saturate to the appropriate infinity or zero.

mod arctan;
mod cbrt;
mod exp;
mod log;
mod trig;

pub use self::arctan::{atan, atan2, atanf};
pub use self::cbrt::{cbrt, cbrtf};
pub use self::exp::{exp, expf};
pub use self::log::{log, logf};
pub use self::trig::{cos, sin};
