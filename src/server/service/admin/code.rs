use std::{sync::Arc, time::Duration};

use rand::Rng;
use tokio::{sync::RwLock, time::Instant};

/// Lifetime of a bootstrap admin code.
const ADMIN_CODE_TTL: Duration = Duration::from_secs(60);

const CODE_LENGTH: usize = 32;

#[derive(Clone)]
struct AdminCode {
    code: String,
    expires_at: Instant,
}

impl AdminCode {
    fn new(code: String) -> Self {
        Self {
            code,
            expires_at: Instant::now() + ADMIN_CODE_TTL,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Holds at most one in-memory admin code.
///
/// A code is valid for 60 seconds and is consumed by the first successful validation.
/// Generating a new code replaces the previous one.
#[derive(Clone, Default)]
pub struct AdminCodeService {
    code: Arc<RwLock<Option<AdminCode>>>,
}

impl AdminCodeService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates and stores a fresh 32-character alphanumeric code.
    pub async fn generate(&self) -> String {
        let code = random_token(CODE_LENGTH);
        *self.code.write().await = Some(AdminCode::new(code.clone()));
        code
    }

    /// Checks `input` against the stored code and consumes it on success.
    ///
    /// # Returns
    /// - `true` - Code matched and was still valid, it is now spent
    /// - `false` - No code, wrong code, or expired (an expired code is dropped)
    pub async fn validate_and_consume(&self, input: &str) -> bool {
        let mut code = self.code.write().await;

        match code.as_ref() {
            Some(stored) if stored.is_expired() => {
                *code = None;
                false
            }
            Some(stored) if stored.code == input => {
                *code = None;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    async fn has_valid_code(&self) -> bool {
        let code = self.code.read().await;
        code.as_ref().is_some_and(|stored| !stored.is_expired())
    }
}

/// Random alphanumeric string from the thread-local RNG.
pub fn random_token(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

    let mut rng = rand::rng();
    (0..length)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}
