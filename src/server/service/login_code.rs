//! One-time login codes.
//!
//! Accounts have no credentials. An admin issues a login code for an account and the
//! account holder exchanges it for a session. While no admin exists, startup issues a
//! bootstrap code whose claimant becomes admin. Codes live in memory for five minutes and
//! are removed when redeemed.

use rand::{distr::Alphanumeric, Rng};
use std::{collections::HashMap, sync::Arc, time::Duration};
use tokio::{sync::RwLock, time::Instant};

pub const LOGIN_CODE_TTL: Duration = Duration::from_secs(300);

const CODE_LENGTH: usize = 32;

/// What redeeming a code grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeGrant {
    /// Admin rights for the account named when claiming.
    Bootstrap,
    /// A session for the account with this ID.
    Login(i32),
}

struct IssuedCode {
    grant: CodeGrant,
    expires_at: Instant,
}

/// Outstanding login codes, shared across request handlers.
///
/// Clones share the same code table. At most one code is outstanding per grant: issuing a
/// new code for an account replaces the previous one.
#[derive(Clone, Default)]
pub struct LoginCodeService {
    codes: Arc<RwLock<HashMap<String, IssuedCode>>>,
}

impl LoginCodeService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the admin bootstrap code.
    pub async fn issue_bootstrap(&self) -> String {
        self.issue(CodeGrant::Bootstrap).await
    }

    /// Issues a login code for an existing account.
    pub async fn issue_login(&self, user_id: i32) -> String {
        self.issue(CodeGrant::Login(user_id)).await
    }

    /// Redeems a bootstrap code.
    ///
    /// Login codes are left untouched.
    pub async fn redeem_bootstrap(&self, code: &str) -> bool {
        self.redeem(code, |grant| grant == CodeGrant::Bootstrap)
            .await
            .is_some()
    }

    /// Redeems a login code, returning the ID of the account it was issued for.
    ///
    /// The bootstrap code is left untouched.
    pub async fn redeem_login(&self, code: &str) -> Option<i32> {
        match self
            .redeem(code, |grant| matches!(grant, CodeGrant::Login(_)))
            .await?
        {
            CodeGrant::Login(user_id) => Some(user_id),
            CodeGrant::Bootstrap => None,
        }
    }

    async fn issue(&self, grant: CodeGrant) -> String {
        let code: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(CODE_LENGTH)
            .map(char::from)
            .collect();
        let now = Instant::now();

        let mut codes = self.codes.write().await;
        codes.retain(|_, issued| issued.grant != grant && issued.expires_at > now);
        codes.insert(
            code.clone(),
            IssuedCode {
                grant,
                expires_at: now + LOGIN_CODE_TTL,
            },
        );

        code
    }

    async fn redeem(&self, code: &str, accepts: impl Fn(CodeGrant) -> bool) -> Option<CodeGrant> {
        let mut codes = self.codes.write().await;
        let (grant, expires_at) = codes
            .get(code)
            .map(|issued| (issued.grant, issued.expires_at))?;

        if expires_at <= Instant::now() {
            codes.remove(code);
            return None;
        }
        if !accepts(grant) {
            return None;
        }

        codes.remove(code);
        Some(grant)
    }
}
