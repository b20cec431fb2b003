//! Deterministic scoring and suggestion text.

use super::LayoutAnalysis;

/// 0-100 quality score. Penalties: 5 per sharp vertex (capped at 30),
/// 10 per narrow region (capped at 40), 20 per intersecting polygon pair
/// (capped at 50); the floor is 0.
pub fn layout_score(analysis: &LayoutAnalysis) -> f64 {
    let sharp = (analysis.sharp_angles.count() as f64 * 5.0).min(30.0);
    let narrow = (analysis.narrow_distances.count() as f64 * 10.0).min(40.0);
    let crossing = (analysis.intersections.pair_count() as f64 * 20.0).min(50.0);
    (100.0 - sharp - narrow - crossing).max(0.0)
}

/// One message per non-empty category, in the fixed order sharp angles,
/// narrow distances, intersections.
pub fn suggestions(analysis: &LayoutAnalysis) -> Vec<String> {
    let mut out = Vec::new();
    let sharp = analysis.sharp_angles.count();
    if sharp > 0 {
        out.push(format!(
            "Found {sharp} sharp angles. Consider rounding corners or adjusting geometry."
        ));
    }
    let narrow = analysis.narrow_distances.count();
    if narrow > 0 {
        out.push(format!(
            "Found {narrow} narrow regions. Minimum distance: {:.3}",
            analysis.narrow_distances.min_distance
        ));
    }
    let pairs = analysis.intersections.pair_count();
    if pairs > 0 {
        out.push(format!(
            "Found {pairs} intersecting polygon pairs. Total intersection points: {}",
            analysis.intersections.total_points
        ));
    }
    out
}
