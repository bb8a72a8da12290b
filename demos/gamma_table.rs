// Gamma function sampled at 100 uniformly-spaced points on [-10, 10].
// Prints JSON: {"x":[...], "y":[...]}
// Poles and overflows print as null.

use cephes_gamma::gamma;

fn fmt_val(v: f64) -> String {
    if v.is_finite() {
        format!("{v:e}")
    } else {
        "null".to_string()
    }
}

fn fmt_arr(v: &[f64]) -> String {
    let inner: Vec<String> = v.iter().map(|&x| fmt_val(x)).collect();
    format!("[{}]", inner.join(","))
}

fn main() {
    const N: usize = 100;
    let (lo, hi) = (-10.0_f64, 10.0_f64);

    let x_vals: Vec<f64> = (0..N)
        .map(|i| lo + (hi - lo) * (i as f64) / (N - 1) as f64)
        .collect();
    let y_vals: Vec<f64> = x_vals.iter().map(|&x| gamma(x)).collect();

    println!("{{\"x\":{},\"y\":{}}}", fmt_arr(&x_vals), fmt_arr(&y_vals));
}
