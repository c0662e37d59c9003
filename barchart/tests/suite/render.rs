use pretty_assertions::assert_eq;
use uniplot_barchart::BarChart;
use uniplot_barchart::Linear;
use uniplot_barchart::XY;
use uniplot_barchart::fprint;

const POINTS: [(i64, i64); 14] = [
    (0, 1),
    (1, 3),
    (2, 4),
    (3, 6),
    (4, 8),
    (7, 15),
    (8, 10),
    (9, 7),
    (10, 5),
    (11, 3),
    (12, 2),
    (13, 1),
    (14, 0),
    (15, 20),
];

#[test]
fn gaps_in_x_are_none() {
    let chart = BarChart::from_pairs(&POINTS);
    let slots = chart.xys().unwrap();

    assert_eq!(slots.len(), 16);
    let gaps: Vec<usize> = slots
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.is_none())
        .map(|(idx, _)| idx)
        .collect();
    assert_eq!(gaps, vec![5, 6]);
    assert_eq!(slots[7], Some(XY { x: 7, y: 15 }));
}

#[test]
fn prints_one_row_per_x() {
    let chart = BarChart::from_pairs(&POINTS);
    let mut out = Vec::new();
    fprint(&mut out, &chart, &Linear::new(19)).unwrap();

    let expected = [
        "0   █ 1",
        "1   ██▉ 3",
        "2   ███▉ 4",
        "3   █████▊ 6",
        "4   ███████▋ 8",
        "5   nil",
        "6   nil",
        "7   ██████████████▎ 15",
        "8   █████████▋ 10",
        "9   ██████▋ 7",
        "10  ████▊ 5",
        "11  ██▉ 3",
        "12  ██ 2",
        "13  █ 1",
        "14  ▏ 0",
        "15  ███████████████████▏ 20",
    ];
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("{}\n", expected.join("\n"))
    );
}
