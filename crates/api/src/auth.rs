/// Check the request's `key` against the configured secret.
///
/// Without a configured secret nothing is authorized, not even an empty key.
pub fn authorize(secret: Option<&str>, key: Option<&str>) -> bool {
    let Some(secret) = secret.filter(|s| !s.is_empty()) else {
        return false;
    };
    let Some(key) = key else {
        return false;
    };
    constant_time_eq(secret.as_bytes(), key.as_bytes())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
