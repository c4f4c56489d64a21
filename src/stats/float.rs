//! Float trait

use cast::From;
use num_traits::float;

/// An extension of `num_traits::float::Float` that adds safe casting from
/// the integer types the percentile math needs, plus `Sync + Send`. Once
/// `num_traits` grows these capabilities this can go away.
pub trait Float:
    float::Float + From<usize, Output = Self> + From<f32, Output = Self> + Sync + Send
{
}

impl Float for f32 {}
impl Float for f64 {}
