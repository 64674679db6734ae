/// Places a distance-along-route value on the route polyline.
///
/// The mile value is mapped to a *positional* index: the polyline is treated
/// as if its points were evenly spaced along the traveled distance, and
/// latitude/longitude are interpolated linearly between the two bracketing
/// points. This is a deliberate approximation (no per-segment geodesic
/// lengths); markers land close enough for map display on road polylines,
/// which are densely and fairly uniformly sampled.
///
/// Returns `None` for an empty polyline or a non-positive total distance.
/// The target mile is clamped into `[0, total_miles]` first.
pub fn point_at_mile(
    polyline: &[(f64, f64)],
    total_miles: f64,
    target_mile: f64,
) -> Option<(f64, f64)> {
    let last = polyline.last()?;
    if total_miles <= 0.0 {
        return None;
    }

    let fraction = (target_mile / total_miles).clamp(0.0, 1.0);
    let raw_index = fraction * (polyline.len() - 1) as f64;
    let i = raw_index.floor() as usize;
    let t = raw_index - i as f64;

    if i >= polyline.len() - 1 {
        return Some(*last);
    }

    let (lat1, lon1) = polyline[i];
    let (lat2, lon2) = polyline[i + 1];
    Some((lat1 + t * (lat2 - lat1), lon1 + t * (lon2 - lon1)))
}
