// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Binomial coefficients for deck sized sets.

/// Creates table for nck(n, k) for n <= 52 and k <= 7.
const fn make_nck() -> [[u32; 8]; 53] {
    let mut t = [[0u32; 8]; 53];
    t[0][0] = 1;

    let mut n = 1;
    while n <= 52 {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= 7 {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u32; 8]; 53] = make_nck();

/// Returns the binomial coefficient for n choose k, zero when k > n.
///
/// Panics if n > 52 or k > 7.
#[inline]
pub fn nck(n: usize, k: usize) -> u64 {
    assert!(n <= 52, "n={n} must be 0 <= n <= 52");
    assert!(k <= 7, "k={k} must be 0 <= k <= 7");

    NCKS[n][k] as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nck() {
        // For n < k = 0
        assert_eq!(nck(2, 3), 0);
        assert_eq!(nck(0, 0), 1);
        assert_eq!(nck(0, 1), 0);

        [1, 52, 1326, 22100, 270725, 2598960, 20358520, 133784560]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(52, k), v));

        [1, 51, 1275, 20825, 249900, 2349060, 18009460, 115775100]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(51, k), v));

        [1, 23, 253, 1771, 8855, 33649, 100947, 245157]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(23, k), v));

        [1, 5, 10, 10, 5, 1, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(5, k), v));

        [1, 1, 0, 0, 0, 0, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(1, k), v));
    }
}
