use pretty_assertions::assert_eq;
use uniplot_histogram::Linear;
use uniplot_histogram::fprint;
use uniplot_histogram::fprintf;
use uniplot_histogram::hist;

const SAMPLES: [f64; 20] = [
    0.1, 0.2, 0.21, 0.22, 0.22, 0.3, 0.4, 0.5, 0.51, 0.52, 0.53, 0.54, 0.55, 0.56, 0.57, 0.58,
    0.6, 0.8, 0.9, 1.0,
];

#[test]
fn prints_aligned_buckets() {
    let histogram = hist(9, &SAMPLES);
    let mut out = Vec::new();
    fprint(&mut out, &histogram, &Linear::new(5)).unwrap();

    let expected = [
        "0.1-0.2  5%   ▋       [1/20]",
        "0.2-0.3  25%  ██▊     [5/20]",
        "0.3-0.4  0%   ▏       [0/20]",
        "0.4-0.5  5%   ▋       [1/20]",
        "0.5-0.6  45%  █████▏  [9/20]",
        "0.6-0.7  5%   ▋       [1/20]",
        "0.7-0.8  0%   ▏       [0/20]",
        "0.8-0.9  5%   ▋       [1/20]",
        "0.9-1    10%  █▏      [2/20]",
    ];
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("{}\n", expected.join("\n"))
    );
}

#[test]
fn counts_cover_every_sample() {
    let histogram = hist(9, &SAMPLES);
    let total: usize = histogram.buckets.iter().map(|bucket| bucket.count).sum();
    assert_eq!(total, SAMPLES.len());
    assert_eq!(histogram.count, SAMPLES.len());
    assert_eq!((histogram.min, histogram.max), (0, 9));
}

#[test]
fn duration_labels() {
    let histogram = hist(3, &[100.0, 200.0, 300.0, 400.0]);
    let mut out = Vec::new();
    fprintf(&mut out, &histogram, &Linear::new(4), |v| {
        format!("{}ms", v.round())
    })
    .unwrap();

    let expected = [
        "100ms-200ms  25%  ██▏    [1/4]",
        "200ms-300ms  25%  ██▏    [1/4]",
        "300ms-400ms  50%  ████▏  [2/4]",
    ];
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("{}\n", expected.join("\n"))
    );
}
