extern crate bounded_spline;

use bounded_spline::{interpolate, Coverage, KnotSet};

fn main() {
    // amplitude response sampled at a few frequencies, listed high to low
    let frequencies = [50.0, 20.0, 10.0, 5.0, 1.0, 0.5, 0.1];
    let amplitudes = [0.70, 0.95, 1.00, 1.00, 0.98, 0.90, 0.40];

    let number_of_steps = 40;
    let f_min = 0.05;
    let f_max = 60.0;
    let step = (f_max - f_min) / number_of_steps as f64;

    let queries: Vec<f64> = (0..=number_of_steps).map(|i| f_min + step * i as f64).collect();

    let result = interpolate(&frequencies, &amplitudes, 0.0, 1.0, &queries).unwrap();

    if let Coverage::Partial { discarded } = result.coverage() {
        eprintln!("{discarded} frequencies outside the response curve were skipped");
    }

    let knots = KnotSet::new(&frequencies, &amplitudes).unwrap();
    let retained = queries.iter().filter(|f| knots.contains(**f));

    println!("f;amplitude");
    for (f, amplitude) in retained.zip(result.values()) {
        println!("{:.2};{:.4}", f, amplitude);
    }
}
