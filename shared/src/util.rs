/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms)
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

/// Check a CNIC identity number: `#####-#######-#` (13 digits, 2 dashes).
pub fn is_valid_cnic(cnic: &str) -> bool {
    let parts: Vec<&str> = cnic.split('-').collect();
    if parts.len() != 3 {
        return false;
    }
    let lens = [5usize, 7, 1];
    parts
        .iter()
        .zip(lens)
        .all(|(part, len)| part.len() == len && part.chars().all(|c| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snowflake_ids_are_positive_and_distinct() {
        let a = snowflake_id();
        let b = snowflake_id();
        assert!(a > 0);
        assert!(b > 0);
        // Collisions are possible in theory but vanishingly unlikely here
        assert_ne!(a, b);
    }

    #[test]
    fn cnic_format() {
        assert!(is_valid_cnic("12345-1234567-1"));
        assert!(!is_valid_cnic("12345-1234567"));
        assert!(!is_valid_cnic("1234a-1234567-1"));
        assert!(!is_valid_cnic("123456-123456-1"));
        assert!(!is_valid_cnic(""));
    }
}
