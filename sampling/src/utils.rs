use ndarray::{s, Array1, ArrayBase, Data, Ix2, NdFloat};
use ndarray_stats::DeviationExt;
use num_traits::Signed;

/// Pairwise euclidean distances between the columns of `x`, i.e. between the
/// samples of a (factor_count, sample_count) matrix.
pub fn pdist<F: NdFloat + Signed>(x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> Array1<F> {
    let ncols = x.ncols();
    let size: usize = (ncols - 1) * ncols / 2;
    let mut res: Array1<F> = Array1::zeros(size);
    let mut k = 0;
    for i in 0..ncols {
        for j in (i + 1)..ncols {
            let a = x.slice(s![.., i]);
            let b = x.slice(s![.., j]);
            res[k] = F::from(a.l2_dist(&b).unwrap()).unwrap();
            k += 1;
        }
    }
    res
}
