use crate::errors::Result;
use crate::traits::{check_dimensions, SamplingMethod};
use crate::utils::pdist;
use linfa::Float;
use ndarray::{s, Array, Array2};
use ndarray_rand::{
    rand::seq::SliceRandom, rand::Rng, rand::SeedableRng, rand_distr::Uniform, RandomExt,
};
use ndarray_stats::QuantileExt;
use rand_xoshiro::Xoshiro256Plus;
#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// Kinds of Latin Hypercube Design
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub enum LhsKind {
    /// sample is choosen randomly within its latin hypercube interval
    #[default]
    Classic,
    /// sample is the middle of its latin hypercube interval
    Centered,
    /// classic draws are repeated and the plan with the largest minimal
    /// distance between samples is retained
    Maximin,
}

/// The LHS design is built as follows: the `[0., 1.]` interval of each factor
/// is divided into ns strata where ns is the number of samples, one draw is
/// placed in each stratum, and the stratum-to-sample assignment is permuted
/// independently per factor. Every factor therefore sees exactly one sample
/// per stratum of width `1/ns`. The position of the draw within its stratum
/// depends on the kind of LHS (see [LhsKind]).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct Lhs<R: Rng + Clone> {
    /// The requested kind of LHS
    kind: LhsKind,
    /// Random generator used for reproducibility
    rng: R,
}

impl Lhs<Xoshiro256Plus> {
    /// Constructor using the default, entropy-seeded random generator
    ///
    /// ```
    /// use doegen_sampling::{Lhs, SamplingMethod};
    ///
    /// let raw: ndarray::Array2<f64> = Lhs::new().generate_samples(2, 5).unwrap();
    /// assert_eq!(raw.dim(), (2, 5));
    /// ```
    pub fn new() -> Self {
        Lhs {
            kind: LhsKind::default(),
            rng: Xoshiro256Plus::from_entropy(),
        }
    }
}

impl<R: Rng + Clone> Lhs<R> {
    /// Sets the kind of LHS
    pub fn kind(mut self, kind: LhsKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the random generator, for reproducible designs
    pub fn with_rng<R2: Rng + Clone>(self, rng: R2) -> Lhs<R2> {
        Lhs {
            kind: self.kind,
            rng,
        }
    }
}

impl<F: Float, R: Rng + Clone> SamplingMethod<F> for Lhs<R> {
    fn generate_samples(&self, factor_count: usize, sample_count: usize) -> Result<Array2<F>> {
        check_dimensions(factor_count, sample_count)?;
        let mut rng = self.rng.clone();
        let lhs = match self.kind {
            LhsKind::Classic => classic_lhs(factor_count, sample_count, &mut rng),
            LhsKind::Centered => centered_lhs(factor_count, sample_count, &mut rng),
            LhsKind::Maximin => maximin_lhs(factor_count, sample_count, &mut rng, 5),
        };
        Ok(lhs.mapv(F::cast))
    }
}

fn classic_lhs<R: Rng + Clone>(nf: usize, ns: usize, rng: &mut R) -> Array2<f64> {
    let cut = Array::linspace(0., 1., ns + 1);
    let a = cut.slice(s![..ns]).to_owned();
    let b = cut.slice(s![1..ns + 1]);
    let c = &b - &a;

    let rnd = Array::random_using((nf, ns), Uniform::new(0., 1.), rng);
    let mut lhs = Array2::zeros((nf, ns));
    for i in 0..nf {
        let mut row = rnd.row(i).to_owned() * &c + &a;
        row.as_slice_mut().unwrap().shuffle(rng);
        lhs.row_mut(i).assign(&row);
    }
    lhs
}

fn centered_lhs<R: Rng + Clone>(nf: usize, ns: usize, rng: &mut R) -> Array2<f64> {
    let cut = Array::linspace(0., 1., ns + 1);
    let a = cut.slice(s![..ns]);
    let b = cut.slice(s![1..ns + 1]);
    let mut c = (&a + &b) / 2.;

    let mut lhs = Array2::zeros((nf, ns));
    for i in 0..nf {
        c.as_slice_mut().unwrap().shuffle(rng);
        lhs.row_mut(i).assign(&c);
    }
    lhs
}

fn maximin_lhs<R: Rng + Clone>(nf: usize, ns: usize, rng: &mut R, n_iter: usize) -> Array2<f64> {
    let mut best = classic_lhs(nf, ns, rng);
    if ns < 2 {
        return best;
    }
    let mut max_dist = *pdist(&best).min().unwrap();
    for _ in 1..n_iter {
        let lhs = classic_lhs(nf, ns, rng);
        let d_min = *pdist(&lhs).min().unwrap();
        if d_min > max_dist {
            max_dist = d_min;
            best = lhs;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{Array1, Array2};

    /// Each of the ns strata of width 1/ns must hold exactly one value.
    fn assert_stratified(row: ndarray::ArrayView1<f64>, ns: usize) {
        let mut seen = vec![0usize; ns];
        for &v in row {
            assert!((0. ..1.).contains(&v), "value {v} escaped the unit interval");
            seen[(v * ns as f64) as usize] += 1;
        }
        assert!(seen.iter().all(|&count| count == 1), "strata occupancy {seen:?}");
    }

    #[test]
    fn test_classic_lhs_stratification() {
        let raw: Array2<f64> = Lhs::new()
            .with_rng(Xoshiro256Plus::seed_from_u64(42))
            .generate_samples(3, 8)
            .unwrap();
        assert_eq!(raw.dim(), (3, 8));
        for row in raw.rows() {
            assert_stratified(row, 8);
        }
    }

    #[test]
    fn test_centered_lhs_hits_stratum_midpoints() {
        let ns = 5;
        let raw: Array2<f64> = Lhs::new()
            .with_rng(Xoshiro256Plus::seed_from_u64(0))
            .kind(LhsKind::Centered)
            .generate_samples(2, ns)
            .unwrap();
        let midpoints: Array1<f64> = (0..ns)
            .map(|k| (2 * k + 1) as f64 / (2 * ns) as f64)
            .collect();
        for row in raw.rows() {
            let mut sorted = row.to_vec();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
            assert_abs_diff_eq!(Array1::from(sorted), midpoints, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_maximin_lhs_stays_stratified() {
        let raw: Array2<f64> = Lhs::new()
            .with_rng(Xoshiro256Plus::seed_from_u64(42))
            .kind(LhsKind::Maximin)
            .generate_samples(4, 10)
            .unwrap();
        for row in raw.rows() {
            assert_stratified(row, 10);
        }
    }

    #[test]
    fn test_lhs_reproducible() {
        let lhs = Lhs::new().with_rng(Xoshiro256Plus::seed_from_u64(42));
        let a: Array2<f64> = lhs.generate_samples(3, 6).unwrap();
        let b: Array2<f64> = lhs.generate_samples(3, 6).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_sample_design() {
        let raw: Array2<f64> = Lhs::new()
            .with_rng(Xoshiro256Plus::seed_from_u64(1))
            .generate_samples(2, 1)
            .unwrap();
        assert_eq!(raw.dim(), (2, 1));
        assert!(raw.iter().all(|&v| (0. ..1.).contains(&v)));
    }
}
