// tests/support/mocks/random.rs
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use scrivener_core::application::ports::random::TokenGenerator;
use scrivener_core::domain::article::ArticleToken;
use scrivener_core::domain::errors::{DomainError, DomainResult};

/// 00000001, 00000002, ... の順にトークンを返す
#[derive(Default)]
pub struct SequentialTokens {
    next: AtomicU32,
}

impl TokenGenerator for SequentialTokens {
    fn generate(&self) -> DomainResult<ArticleToken> {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(ArticleToken::from_bytes(n.to_be_bytes()))
    }
}

/// 指定した順にトークンを返す（衝突の再現用）
pub struct ScriptedTokens {
    queue: Mutex<VecDeque<&'static str>>,
}

impl ScriptedTokens {
    pub fn new(tokens: &[&'static str]) -> Self {
        Self {
            queue: Mutex::new(tokens.iter().copied().collect()),
        }
    }
}

impl TokenGenerator for ScriptedTokens {
    fn generate(&self) -> DomainResult<ArticleToken> {
        let next = self
            .queue
            .lock()
            .unwrap()
            .pop_front()
            .expect("scripted tokens exhausted");
        ArticleToken::parse(next)
    }
}

/// 乱数源が使えない状況を再現する
pub struct UnavailableRandomSource;

impl TokenGenerator for UnavailableRandomSource {
    fn generate(&self) -> DomainResult<ArticleToken> {
        Err(DomainError::IdentityGeneration(
            "entropy source unavailable".into(),
        ))
    }
}
