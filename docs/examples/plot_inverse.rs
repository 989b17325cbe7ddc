// Inverse comparison: arcsin recovered from sin sampled at 7 points on [-π/2, π/2].
// Prints JSON with the sample points and 200 evaluation points for five kinds:
//   {"ky":[...], "kx":[...], "y":[...], "x_true":[...],
//    "x_linear":[...], "x_nearest":[...], "x_quadratic":[...], "x_cubic":[...], "x_spline":[...]}
// Evaluation runs slightly past the sampled range; table kinds refuse those
// points and print null, the spline extrapolates.

use interp_inverse::{invert_fn, Inverse, Kind};

fn fmt_arr(v: &[f64]) -> String {
    let inner: Vec<String> = v.iter().map(|x| format!("{x:.6}")).collect();
    format!("[{}]", inner.join(","))
}

fn fmt_opt_arr(v: &[Option<f64>]) -> String {
    let inner: Vec<String> = v
        .iter()
        .map(|x| match x {
            Some(x) => format!("{x:.6}"),
            None => "null".to_string(),
        })
        .collect();
    format!("[{}]", inner.join(","))
}

fn main() {
    let half_pi = std::f64::consts::FRAC_PI_2;
    let kx: Vec<f64> = (0..7).map(|i| -half_pi + half_pi * i as f64 / 3.0).collect();
    let ky: Vec<f64> = kx.iter().map(|x| x.sin()).collect();

    let kinds = [Kind::Linear, Kind::Nearest, Kind::Quadratic, Kind::Cubic, Kind::Spline];
    let inverses: Vec<Inverse<f64>> = kinds
        .iter()
        .map(|&kind| invert_fn(f64::sin, &kx, kind).unwrap())
        .collect();

    const N: usize = 200;
    let mut y_vals = vec![0.0_f64; N];
    let mut x_true = vec![0.0_f64; N];
    let mut x_kinds = vec![vec![None; N]; kinds.len()];

    for i in 0..N {
        let y = -1.05 + 2.1 * i as f64 / (N - 1) as f64;
        y_vals[i] = y;
        x_true[i] = y.clamp(-1.0, 1.0).asin();
        for (out, inv) in x_kinds.iter_mut().zip(&inverses) {
            out[i] = inv.eval(y).ok();
        }
    }

    let mut json = format!(
        "{{\"ky\":{},\"kx\":{},\"y\":{},\"x_true\":{}",
        fmt_arr(&ky),
        fmt_arr(&kx),
        fmt_arr(&y_vals),
        fmt_arr(&x_true)
    );
    for (kind, xs) in kinds.iter().zip(&x_kinds) {
        json.push_str(&format!(",\"x_{}\":{}", kind, fmt_opt_arr(xs)));
    }
    json.push('}');
    println!("{json}");
}
