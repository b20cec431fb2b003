use super::*;
use crate::geom::Point;
use crate::spatial::ObjectId;

fn world() -> Rect {
    Rect::new(-10.0, -10.0, 60.0, 60.0).unwrap()
}

fn unit_square(x: f64, y: f64) -> Polygon {
    Polygon::new(vec![
        Point::new(x, y),
        Point::new(x + 1.0, y),
        Point::new(x + 1.0, y + 1.0),
        Point::new(x, y + 1.0),
    ])
    .unwrap()
}

fn right_triangle() -> Polygon {
    Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
    ])
    .unwrap()
}

#[test]
fn empty_processor_reports_perfect_score() {
    let processor = GeometryProcessor::new(world());
    let analysis = processor.analyze(30.0, 1.0);
    assert_eq!(analysis.sharp_angles.count(), 0);
    assert_eq!(analysis.sharp_angles.sharpest, 180.0);
    assert_eq!(analysis.narrow_distances.count(), 0);
    assert!(analysis.narrow_distances.min_distance.is_infinite());
    assert_eq!(analysis.intersections.pair_count(), 0);

    let report = processor.optimize();
    assert_eq!(report.score, 100.0);
    assert!(report.suggestions.is_empty());
}

#[test]
fn disjoint_squares_score_perfectly() {
    let mut processor = GeometryProcessor::new(world());
    processor.add_component(unit_square(0.0, 0.0)).unwrap();
    processor.add_component(unit_square(5.0, 0.0)).unwrap();

    let report = processor.optimize();
    assert_eq!(report.analysis.sharp_angles.count(), 0);
    assert_eq!(report.analysis.narrow_distances.count(), 0);
    assert_eq!(report.analysis.intersections.pair_count(), 0);
    assert_eq!(report.score, 100.0);
    assert!(report.suggestions.is_empty());
}

#[test]
fn overlapping_squares_lose_points() {
    let mut processor = GeometryProcessor::new(world());
    processor.add_component(unit_square(0.0, 0.0)).unwrap();
    processor.add_component(unit_square(0.5, 0.0)).unwrap();

    let report = processor.optimize();
    let crossings = &report.analysis.intersections;
    assert_eq!(crossings.pairs, vec![(ObjectId(0), ObjectId(1))]);
    assert_eq!(
        crossings.points,
        vec![
            Point::new(0.5, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.5, 1.0),
        ]
    );
    assert_eq!(crossings.total_points, 4);

    // Overlapping squares also saturate the narrow-distance penalty at the
    // default threshold: 13 edge pairs sit below 1.0, several at 0.
    assert_eq!(report.analysis.narrow_distances.count(), 13);
    assert_eq!(report.analysis.narrow_distances.min_distance, 0.0);
    assert_eq!(report.score, 100.0 - 40.0 - 20.0);
}

#[test]
fn sharp_triangle_costs_ten_points() {
    let mut processor = GeometryProcessor::new(world());
    processor.add_component(right_triangle()).unwrap();

    let analysis = processor.analyze(60.0, 1.0);
    assert_eq!(analysis.sharp_angles.count(), 2);
    assert_eq!(analysis.narrow_distances.count(), 0);
    assert_eq!(analysis.intersections.pair_count(), 0);
    assert_eq!(layout_score(&analysis), 90.0);
    assert_eq!(
        suggestions(&analysis),
        vec!["Found 2 sharp angles. Consider rounding corners or adjusting geometry.".to_string()]
    );
}

#[test]
fn near_touching_squares_flag_narrow_regions() {
    let mut processor = GeometryProcessor::new(world());
    processor.add_component(unit_square(0.0, 0.0)).unwrap();
    processor.add_component(unit_square(1.0001, 0.0)).unwrap();

    let analysis = processor.analyze(30.0, 0.001);
    assert_eq!(analysis.intersections.pair_count(), 0);
    assert_eq!(analysis.narrow_distances.count(), 8);
    assert!(analysis.narrow_distances.min_distance > 0.0);
    assert!(analysis.narrow_distances.min_distance < 0.001);
    assert!(layout_score(&analysis) <= 90.0);
}

#[test]
fn analyze_twice_returns_equal_records() {
    let mut processor = GeometryProcessor::new(world());
    processor.add_component(unit_square(0.0, 0.0)).unwrap();
    processor.add_component(unit_square(0.5, 0.0)).unwrap();
    processor.add_component(right_triangle()).unwrap();
    processor
        .add_component(Rect::new(20.0, 20.0, 3.0, 2.0).unwrap())
        .unwrap();

    assert_eq!(processor.analyze(30.0, 1.0), processor.analyze(30.0, 1.0));
    assert_eq!(processor.optimize(), processor.optimize());
}

#[test]
fn each_new_crossing_pair_lowers_the_score_until_the_cap() {
    let mut processor = GeometryProcessor::new(world());
    let mut scores = Vec::new();
    // Each overlapping couple adds exactly one intersecting pair, placed far
    // enough apart that couples never interact.
    for k in 0..4 {
        let x = 10.0 * k as f64;
        processor.add_component(unit_square(x, 0.0)).unwrap();
        processor.add_component(unit_square(x + 0.5, 0.0)).unwrap();
        scores.push(processor.optimize().score);
    }
    assert_eq!(scores, vec![40.0, 20.0, 10.0, 10.0]);
}

#[test]
fn component_ids_are_monotone_across_kinds() {
    let mut processor = GeometryProcessor::new(world());
    let a = processor
        .add_component(Rect::new(0.0, 0.0, 1.0, 1.0).unwrap())
        .unwrap();
    let b = processor.add_component(unit_square(3.0, 3.0)).unwrap();
    let c = processor
        .add_component(Rect::new(6.0, 6.0, 1.0, 1.0).unwrap())
        .unwrap();
    assert_eq!((a, b, c), (ObjectId(0), ObjectId(1), ObjectId(2)));
    assert_eq!(processor.component_count(), 3);
    assert_eq!(processor.polygon_count(), 1);
}

#[test]
fn rejected_components_leave_no_trace() {
    let mut processor = GeometryProcessor::new(world());
    let far = Rect::new(500.0, 500.0, 1.0, 1.0).unwrap();
    assert!(matches!(
        processor.add_component(far),
        Err(LayoutError::OutOfBounds { .. })
    ));
    assert!(matches!(
        processor.add_component(unit_square(500.0, 500.0)),
        Err(LayoutError::OutOfBounds { .. })
    ));
    assert_eq!(processor.component_count(), 0);
    assert_eq!(processor.polygon_count(), 0);

    let id = processor.add_component(unit_square(0.0, 0.0)).unwrap();
    assert_eq!(id, ObjectId(0));
}

#[test]
fn suggestions_follow_the_fixed_order_and_format() {
    let mut processor = GeometryProcessor::new(world());
    // One sharp vertex (~14°), far from the crossing couple.
    processor
        .add_component(
            Polygon::new(vec![
                Point::new(20.0, 20.0),
                Point::new(24.0, 20.0),
                Point::new(20.0, 21.0),
            ])
            .unwrap(),
        )
        .unwrap();
    processor.add_component(unit_square(0.0, 0.0)).unwrap();
    processor.add_component(unit_square(0.5, 0.0)).unwrap();

    let report = processor.optimize();
    assert_eq!(report.suggestions.len(), 3);
    assert_eq!(
        report.suggestions[0],
        "Found 1 sharp angles. Consider rounding corners or adjusting geometry."
    );
    assert_eq!(
        report.suggestions[1],
        "Found 13 narrow regions. Minimum distance: 0.000"
    );
    assert_eq!(
        report.suggestions[2],
        "Found 1 intersecting polygon pairs. Total intersection points: 4"
    );
}
