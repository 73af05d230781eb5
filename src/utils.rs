use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Returns seconds since epoch as u32
/// # Warning
/// This will overflow on 2038-01-19 (Year 2038 problem)
#[inline]
pub fn get_now_as_u32() -> u32 {
    get_duration_since_epoch().as_secs() as u32
}

#[inline]
pub fn get_duration_since_epoch() -> Duration {
    SystemTime::now().duration_since(UNIX_EPOCH).expect("Time went backwards")
}

/// accept host either like 127.0.0.1 or a docker host name: store1
pub(crate) fn address_str(addr: &str) -> String {
    // Strip existing "http://" or "https://" prefixes if duplicated.
    let normalized = addr.trim_start_matches("http://").trim_start_matches("https://");
    // Re-add a single "http://" prefix (or use HTTPS if needed).
    format!("http://{normalized}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_str_plain_host_port() {
        assert_eq!(address_str("127.0.0.1:1982"), "http://127.0.0.1:1982");
    }

    #[test]
    fn test_address_str_strips_duplicate_scheme() {
        assert_eq!(address_str("http://store1:1982"), "http://store1:1982");
        assert_eq!(address_str("https://store1:1982"), "http://store1:1982");
    }
}
