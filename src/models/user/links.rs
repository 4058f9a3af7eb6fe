//! Outbound navigation targets rendered next to a user. None of these are
//! fetched by the server; they are hrefs for the browser.

const MAP_BASE_URL: &str = "https://www.google.com/maps";

/// Map link for a coordinate pair. Coordinates are substituted verbatim,
/// without escaping or numeric validation.
pub fn generate_map_url(lat: &str, lng: &str) -> String {
    format!("{MAP_BASE_URL}?q={lat},{lng}")
}

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{email}")
}

pub fn tel_href(phone: &str) -> String {
    format!("tel:{phone}")
}

/// The scheme is always prefixed. A stored website that already carries one
/// produces a malformed link.
pub fn website_href(website: &str) -> String {
    format!("http://{website}")
}
