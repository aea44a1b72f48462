use geo::Point;

/// mean Earth radius in kilometers used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// computes the great-circle distance between two points using the
/// haversine formula. points are (x = longitude, y = latitude) in degrees.
///
/// # Arguments
///
/// * `a` - origin point
/// * `b` - destination point
///
/// # Returns
///
/// * distance in kilometers
pub fn haversine_km(a: Point<f64>, b: Point<f64>) -> f64 {
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();
    let delta_lat = (b.y() - a.y()).to_radians();
    let delta_lon = (b.x() - a.x()).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
