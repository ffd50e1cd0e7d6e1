use gestmatch::{report_from_match, ImageView, MatchResult};

fn detected(top_left: (usize, usize), bottom_right: (usize, usize)) -> MatchResult {
    MatchResult {
        detected: true,
        label: "palm".to_string(),
        top_left,
        bottom_right,
        probability: 0.9,
    }
}

#[test]
fn centered_box_has_zero_offset() {
    let frame = vec![77u8; 64 * 48];
    let view = ImageView::from_slice(&frame, 64, 48).unwrap();

    // 16-wide box starting at x = 24 centers exactly on a 64-wide frame.
    let report = report_from_match(&detected((24, 8), (40, 24)), view);
    assert_eq!(report.label, "palm");
    assert_eq!(report.offset, 0.0);
    assert_eq!(report.depth, 77.0);
}

#[test]
fn offset_approaches_the_edges() {
    let frame = vec![0u8; 64 * 48];
    let view = ImageView::from_slice(&frame, 64, 48).unwrap();

    let left = report_from_match(&detected((0, 10), (2, 12)), view);
    assert!((left.offset - (-0.96875)).abs() < 1e-6);

    let right = report_from_match(&detected((62, 10), (64, 12)), view);
    assert!((right.offset - 0.96875).abs() < 1e-6);
}

#[test]
fn depth_is_exact_median_of_constant_block() {
    let mut frame = vec![5u8; 32 * 32];
    for y in 10..18 {
        for x in 12..20 {
            frame[y * 32 + x] = 142;
        }
    }
    let view = ImageView::from_slice(&frame, 32, 32).unwrap();

    let report = report_from_match(&detected((12, 10), (20, 18)), view);
    assert_eq!(report.depth, 142.0);
}

#[test]
fn even_sized_block_averages_middle_values() {
    let mut frame = vec![0u8; 8 * 8];
    // 2x2 block at (3, 3) holding {1, 2, 3, 4}.
    frame[3 * 8 + 3] = 1;
    frame[3 * 8 + 4] = 2;
    frame[4 * 8 + 3] = 3;
    frame[4 * 8 + 4] = 4;
    let view = ImageView::from_slice(&frame, 8, 8).unwrap();

    let report = report_from_match(&detected((3, 3), (5, 5)), view);
    assert_eq!(report.depth, 2.5);
}

#[test]
fn no_detection_reports_neutral_zeros() {
    let frame = vec![255u8; 16 * 16];
    let view = ImageView::from_slice(&frame, 16, 16).unwrap();

    let result = MatchResult {
        detected: false,
        label: String::new(),
        top_left: (0, 0),
        bottom_right: (0, 0),
        probability: 0.4,
    };
    let report = report_from_match(&result, view);
    assert_eq!(report.label, "");
    assert_eq!(report.offset, 0.0);
    assert_eq!(report.depth, 0.0);
}
