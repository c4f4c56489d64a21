//! Tukey's fence method
//!
//! The quartiles of a sample define two "fences"; the observations inside
//! the fences are considered "normal", and the rest are considered
//! outliers:
//!
//! ``` ignore
//! // q1, q3 are the first and third quartiles
//! let iqr = q3 - q1;  // The interquartile range
//! let (lower, upper) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);  // the "fences"
//!
//! let is_outlier = |x| x < lower || x > upper;
//! ```
//!
//! Besides classifying observations, the fences can repair them: [`clamp`]
//! maps every observation strictly beyond a fence onto the fence itself and
//! leaves the rest untouched, so a clamped sample always lies inside the
//! closed interval `[lower, upper]`.
//!
//! [`clamp`]: Fences::clamp

use crate::stats::float::Float;
use crate::stats::univariate::Sample;

/// The pair of fences derived from a sample's quartiles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fences<A>
where
    A: Float,
{
    /// Lower fence: `Q1 - k * IQR`
    pub lower: A,
    /// Upper fence: `Q3 + k * IQR`
    pub upper: A,
}

impl<A> Fences<A>
where
    A: Float,
    usize: cast::From<A, Output = Result<usize, cast::Error>>,
{
    /// Computes the fences of `sample` at `k` multiples of the IQR.
    pub fn with_k(sample: &Sample<A>, k: A) -> Fences<A> {
        let (q1, _, q3) = sample.percentiles().quartiles();
        let iqr = q3 - q1;

        Fences {
            lower: q1 - k * iqr,
            upper: q3 + k * iqr,
        }
    }

    /// Computes the standard `k = 1.5` fences of `sample`.
    pub fn of(sample: &Sample<A>) -> Fences<A> {
        Fences::with_k(sample, A::cast(1.5_f32))
    }
}

impl<A> Fences<A>
where
    A: Float,
{
    /// Checks whether `x` lies strictly outside the fences.
    pub fn is_outlier(&self, x: A) -> bool {
        x < self.lower || x > self.upper
    }

    /// Maps `x` onto the violated fence, or returns it unchanged when it
    /// lies inside the closed `[lower, upper]` interval.
    pub fn clamp(&self, x: A) -> A {
        if x > self.upper {
            self.upper
        } else if x < self.lower {
            self.lower
        } else {
            x
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::Fences;
    use crate::stats::univariate::Sample;

    #[test]
    fn fences_of_a_known_sample() {
        let v = [1.0_f64, 2.0, 3.0, 4.0, 5.0, 100.0];
        let fences = Fences::of(Sample::new(&v));

        // Q1 = 2.25, Q3 = 4.75, IQR = 2.5
        assert_relative_eq!(fences.lower, -1.5);
        assert_relative_eq!(fences.upper, 8.5);
    }

    #[test]
    fn clamp_moves_outliers_onto_the_fence() {
        let v = [1.0_f64, 2.0, 3.0, 4.0, 5.0, 100.0];
        let fences = Fences::of(Sample::new(&v));

        assert_relative_eq!(fences.clamp(100.0), 8.5);
        assert_relative_eq!(fences.clamp(-30.0), -1.5);
        // the fence itself is inside the closed interval
        assert_relative_eq!(fences.clamp(8.5), 8.5);
        assert_relative_eq!(fences.clamp(3.0), 3.0);
    }

    #[test]
    fn boundary_values_are_not_outliers() {
        let fences = Fences {
            lower: -1.5_f64,
            upper: 8.5,
        };

        assert!(!fences.is_outlier(-1.5));
        assert!(!fences.is_outlier(8.5));
        assert!(fences.is_outlier(8.500001));
        assert!(fences.is_outlier(-1.500001));
    }

    #[test]
    fn wider_k_widens_the_fences() {
        let v = [1.0_f64, 2.0, 3.0, 4.0, 5.0, 100.0];
        let sample = Sample::new(&v);
        let inner = Fences::of(sample);
        let outer = Fences::with_k(sample, 3.0);

        assert!(outer.lower < inner.lower);
        assert!(outer.upper > inner.upper);
    }
}
