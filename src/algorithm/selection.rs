//! Weighted random selection and distribution tree walking

use crate::math::random::RandomSource;
use crate::model::distribution::{Distribution, DistributionNode};

/// An option carrying a selection probability
pub trait Weighted {
    /// Share of the unit interval claimed by this option
    fn probability(&self) -> f64;
}

impl<V> Weighted for Distribution<V> {
    fn probability(&self) -> f64 {
        self.probability
    }
}

impl Weighted for f64 {
    fn probability(&self) -> f64 {
        *self
    }
}

/// Pick the option whose cumulative probability interval contains `draw`
///
/// Probabilities are accumulated in list order and the first option whose
/// running sum strictly exceeds `draw` wins, so a draw landing exactly on a
/// boundary belongs to the next option. Returns `None` when the sum never
/// exceeds `draw`, which is how a list summing to less than one leaves gaps.
pub fn select_with_draw<T: Weighted>(options: &[T], draw: f64) -> Option<&T> {
    let mut accumulated = 0.0;
    options.iter().find(|option| {
        accumulated += option.probability();
        draw < accumulated
    })
}

/// Draw once from `random` and select among `options`
pub fn select_weighted<'a, T, R>(options: &'a [T], random: &mut R) -> Option<&'a T>
where
    T: Weighted,
    R: RandomSource + ?Sized,
{
    select_with_draw(options, random.next_unit())
}

/// Walk a distribution tree down to a leaf value
///
/// Each level consumes one draw. A gap at any level, or a branch without
/// children, ends the walk with `None`.
pub fn select_value<'a, V, R>(distributions: &'a [Distribution<V>], random: &mut R) -> Option<&'a V>
where
    R: RandomSource + ?Sized,
{
    let mut options = distributions;
    loop {
        if options.is_empty() {
            return None;
        }

        let selected = select_weighted(options, random)?;
        match &selected.node {
            DistributionNode::Leaf(value) => return Some(value),
            DistributionNode::Branch(children) => options = children,
        }
    }
}
