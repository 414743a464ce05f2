use rand::Rng;

use crate::constants::NONCE_LEN;

const CHARSET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

// Bytes at or above this value would bias the modulo and are drawn again.
const REJECT_FROM: u8 = (u8::MAX / 62) * 62;

// Draws allowed before falling back to plain modulo.
const MAX_DRAWS: usize = NONCE_LEN * 16;

/// Generate a fresh 32 characters nonce over `[A-Za-z0-9]` from the thread rng.
pub fn generate_nonce() -> String {
    generate_nonce_with(&mut rand::thread_rng())
}

/// Generate a nonce from the given rng.
///
/// Random bytes are rejection sampled to stay uniform over the charset. A rng that
/// keeps producing rejected bytes can not stall the caller: after a bounded number of
/// draws the remaining characters are taken by modulo instead.
pub fn generate_nonce_with<R: Rng>(rng: &mut R) -> String {
    let mut nonce = String::with_capacity(NONCE_LEN);
    let mut draws = 0;

    while nonce.len() < NONCE_LEN {
        let b: u8 = rng.gen();
        draws += 1;

        if b < REJECT_FROM || draws > MAX_DRAWS {
            nonce.push(CHARSET[usize::from(b) % CHARSET.len()] as char);
        }
    }

    nonce
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn assert_nonce(nonce: &str) {
        assert_eq!(nonce.len(), NONCE_LEN);
        assert!(nonce.bytes().all(|b| b.is_ascii_alphanumeric()), "{nonce}");
    }

    #[test]
    fn test_nonce_shape() {
        for _ in 0..100 {
            assert_nonce(&generate_nonce());
        }
    }

    #[test]
    fn test_nonce_no_duplicates() {
        let nonces: HashSet<String> = (0..10_000).map(|_| generate_nonce()).collect();
        assert_eq!(nonces.len(), 10_000);
    }

    #[test]
    fn test_nonce_deterministic_with_seed() {
        let a = generate_nonce_with(&mut StdRng::seed_from_u64(42));
        let b = generate_nonce_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert_nonce(&a);
    }

    #[test]
    fn test_nonce_terminates_on_rejecting_rng() {
        // Every byte is 0xff, which is always rejected.
        let mut rng = StepRng::new(u64::MAX, 0);
        let nonce = generate_nonce_with(&mut rng);
        assert_nonce(&nonce);
    }
}
