use crate::error::AppError;

/// One-way salted password hashing (bcrypt) with a configurable work factor.
///
/// Hashes are salted, so hashing the same password twice yields different strings;
/// verification still succeeds against either.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| AppError::InternalServerError(format!("Failed to hash password: {}", e)))
    }

    /// Checks `password` against a stored hash.
    ///
    /// A malformed hash is treated as a mismatch, never as an error.
    pub fn verify(&self, password: &str, hashed_password: &str) -> bool {
        match bcrypt::verify(password, hashed_password) {
            Ok(matches) => matches,
            Err(e) => {
                log::warn!("Stored password hash could not be parsed: {}", e);
                false
            }
        }
    }

    /// Stands in for `verify` when there is no stored hash to check against.
    ///
    /// Spends the same work factor as a real verification, so a login for an unknown
    /// account takes as long as one with a wrong password. Always `false`.
    pub fn verify_absent(&self, password: &str) -> bool {
        if let Err(e) = bcrypt::hash(password, self.cost) {
            log::warn!("Placeholder password hash failed: {}", e);
        }
        false
    }
}
