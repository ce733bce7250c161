//! Recorded k-means benchmark results: milliseconds per Lloyd iteration for
//! each implementation, measured on the same image.

use super::model::Dataset;
use crate::error::ShapeError;

/// Cluster counts used for the K sweep.
const KS: [f64; 12] = [
    2.0, 3.0, 4.0, 6.0, 8.0, 12.0, 16.0, 24.0, 32.0, 64.0, 128.0, 256.0,
];

/// Points of the K sweep up to and including K = 64.
const KS_UP_TO_64: usize = 10;

/// Time per iteration against the number of clusters K.
pub fn results_k() -> Result<Dataset, ShapeError> {
    Dataset::new(
        KS.to_vec(),
        [
            (
                "Basic",
                vec![
                    13.842975, 16.512825, 18.402375, 23.492075, 28.859325, 38.6017, 49.268275,
                    68.21045, 89.08465, 170.961, 329.4995, 646.918,
                ],
            ),
            (
                "SIMD",
                vec![
                    13.76595, 14.21425, 13.475175, 13.4063, 13.21385, 17.63375, 17.848625,
                    21.57505, 24.774525, 37.2634, 62.544525, 112.92275,
                ],
            ),
            (
                "OMP",
                vec![
                    5.4087875, 5.3340125, 5.7453625, 8.1338, 8.701205, 11.103325, 14.499525,
                    18.809225, 23.79645, 44.837175, 86.10775, 168.1855,
                ],
            ),
            (
                "OMP + SIMD",
                vec![
                    5.12325, 4.72181, 4.5060975, 4.2786075, 4.242735, 5.22269, 5.24332,
                    6.122445, 6.8563175, 10.2356, 17.0769, 30.22315,
                ],
            ),
            (
                "Scikit-Learn",
                vec![
                    10.5790471, 10.15588726, 9.29654837, 11.24959946, 13.51514578, 13.67138743,
                    17.18689322, 21.48360848, 25.62408686, 42.34225273, 70.51656485,
                    129.60475802,
                ],
            ),
        ],
    )
}

/// The K sweep without its two largest cluster counts, so the start of the
/// curves is readable.
pub fn results_k_64() -> Result<Dataset, ShapeError> {
    results_k()?.head(KS_UP_TO_64)
}

/// Time per iteration against the number of threads, at K = 16.
pub fn results_num_threads() -> Result<Dataset, ShapeError> {
    Dataset::new(
        vec![1.0, 2.0, 3.0, 4.0],
        [
            ("OMP", vec![16.604175, 8.87628, 6.03486, 4.70602]),
            ("OMP + SIMD", vec![6.193465, 3.34056, 2.3584275, 1.9104375]),
            (
                "Scikit-Learn",
                vec![19.45247889, 11.09330535, 7.96846867, 6.79661989],
            ),
        ],
    )
}
