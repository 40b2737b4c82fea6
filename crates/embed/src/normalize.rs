/// In-place L2 normalization. Zero vectors are left untouched.
pub(crate) fn l2_normalize_in_place(v: &mut [f32]) {
    let norm_sq: f32 = v.iter().map(|x| x * x).sum();
    if norm_sq > 0.0 {
        let inv_norm = norm_sq.sqrt().recip();
        for x in v.iter_mut() {
            *x *= inv_norm;
        }
    }
}

/// Divides every component by `count`, turning a running sum into a mean.
pub(crate) fn mean_in_place(sum: &mut [f32], count: usize) {
    if count > 1 {
        let n = count as f32;
        for x in sum.iter_mut() {
            *x /= n;
        }
    }
}
