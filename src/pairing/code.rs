//! Invite code generation
//!
//! Codes are short, human-typable strings drawn from uppercase letters
//! and digits. No collision check is performed; lookups resolve a
//! colliding code to its oldest invitation.

use rand::Rng;

/// Characters an invite code is drawn from
const CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of a generated invite code
pub const CODE_LEN: usize = 6;

/// Generate a random invite code
pub fn generate_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LEN)
        .map(|_| CODE_CHARSET[rng.gen_range(0..CODE_CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_code_length() {
        assert_eq!(generate_code().len(), CODE_LEN);
    }

    #[test]
    fn test_code_charset() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(
                code.chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
                "unexpected character in code {code}"
            );
        }
    }
}
