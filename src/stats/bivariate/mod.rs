//! Bivariate analysis

use crate::stats::float::Float;
use crate::stats::univariate::Sample;

/// Paired `(X, Y)` observations
///
/// Invariants:
///
/// - Both sides have the same length, and it is at least 2
/// - No `NaN`s in the data
pub struct Data<'a, A>(&'a [A], &'a [A]);

impl<'a, A> Copy for Data<'a, A> {}

#[allow(clippy::expl_impl_clone_on_copy)]
impl<'a, A> Clone for Data<'a, A> {
    fn clone(&self) -> Data<'a, A> {
        *self
    }
}

impl<'a, A> Data<'a, A>
where
    A: Float,
{
    /// Creates a new data set from two existing slices
    ///
    /// # Panics
    ///
    /// Panics if the slices have different lengths, fewer than two
    /// elements, or contain any `NaN`
    pub fn new(xs: &'a [A], ys: &'a [A]) -> Data<'a, A> {
        assert!(
            xs.len() == ys.len()
                && xs.len() > 1
                && xs.iter().all(|x| !x.is_nan())
                && ys.iter().all(|y| !y.is_nan())
        );

        Data(xs, ys)
    }

    /// Returns the length of the data set
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns a view into the `X` data
    pub fn x(&self) -> &'a Sample<A> {
        Sample::new(self.0)
    }

    /// Returns a view into the `Y` data
    pub fn y(&self) -> &'a Sample<A> {
        Sample::new(self.1)
    }

    /// Returns the Pearson product-moment correlation coefficient, or
    /// `None` when either side has zero variance and the coefficient is
    /// undefined.
    ///
    /// - Time: `O(length)`
    pub fn pearson(&self) -> Option<A> {
        let _0 = A::cast(0);
        let x_bar = self.x().mean();
        let y_bar = self.y().mean();

        let mut sxy = _0;
        let mut sxx = _0;
        let mut syy = _0;
        for (&x, &y) in self.0.iter().zip(self.1.iter()) {
            let dx = x - x_bar;
            let dy = y - y_bar;

            sxy = sxy + dx * dy;
            sxx = sxx + dx * dx;
            syy = syy + dy * dy;
        }

        let denominator = (sxx * syy).sqrt();
        if denominator == _0 {
            None
        } else {
            Some(sxy / denominator)
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::Data;

    #[test]
    fn perfect_linear_relations() {
        let xs = [1.0_f64, 2.0, 3.0, 4.0];
        let up = [10.0_f64, 20.0, 30.0, 40.0];
        let down = [40.0_f64, 30.0, 20.0, 10.0];

        assert_relative_eq!(Data::new(&xs, &up).pearson().unwrap(), 1.0);
        assert_relative_eq!(Data::new(&xs, &down).pearson().unwrap(), -1.0);
    }

    #[test]
    fn constant_side_has_no_coefficient() {
        let xs = [1.0_f64, 2.0, 3.0, 4.0];
        let flat = [7.0_f64, 7.0, 7.0, 7.0];

        assert_eq!(Data::new(&xs, &flat).pearson(), None);
        assert_eq!(Data::new(&flat, &xs).pearson(), None);
    }

    #[test]
    fn coefficient_is_symmetric_and_bounded() {
        let xs = [1.0_f64, 2.0, 4.0, 8.0, 16.0];
        let ys = [3.0_f64, 1.0, 4.0, 1.0, 5.0];

        let r_xy = Data::new(&xs, &ys).pearson().unwrap();
        let r_yx = Data::new(&ys, &xs).pearson().unwrap();

        assert_relative_eq!(r_xy, r_yx);
        assert!(r_xy.abs() <= 1.0);
    }
}
