use rand::{distributions::Alphanumeric, Rng};

/// Generate a random alphanumeric token, used for identifiers the provider
/// does not supply.
pub fn generate_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_length() {
        assert_eq!(generate_string(9).len(), 9);
        assert_eq!(generate_string(0).len(), 0);
    }

    #[test]
    fn generates_alphanumeric_only() {
        let token = generate_string(64);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
