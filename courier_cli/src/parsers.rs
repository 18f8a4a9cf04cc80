use courier_directions::lat_lng::LatLng;

/// Parses `"lat,lng"`, e.g. `50.8466,4.3528`.
pub fn parse_lat_lng(input: &str) -> Result<LatLng, String> {
    let (lat, lng) = input
        .split_once(',')
        .ok_or_else(|| String::from("Expected LAT,LNG"))?;

    let lat = lat
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid latitude: {lat}"))?;
    let lng = lng
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid longitude: {lng}"))?;

    let lat_lng = LatLng::new(lat, lng);
    if !lat_lng.is_valid() {
        return Err(format!("Coordinates out of range: {lat_lng}"));
    }

    Ok(lat_lng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lat_lng() {
        assert_eq!(
            parse_lat_lng("50.8466,4.3528"),
            Ok(LatLng::new(50.8466, 4.3528))
        );
        assert_eq!(parse_lat_lng(" -33.9 , 151.2 "), Ok(LatLng::new(-33.9, 151.2)));
    }

    #[test]
    fn test_parse_lat_lng_errors() {
        assert!(parse_lat_lng("50.8466").is_err());
        assert!(parse_lat_lng("north,4.3").is_err());
        assert!(parse_lat_lng("50.1,").is_err());
        assert!(parse_lat_lng("91,0").is_err());
        assert!(parse_lat_lng("NaN,0").is_err());
    }
}
