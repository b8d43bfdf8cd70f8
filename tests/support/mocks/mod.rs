// tests/support/mocks/mod.rs
//! テスト用のクロックとトークン生成器
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod random;
pub mod time;

pub use random::{ScriptedTokens, SequentialTokens, UnavailableRandomSource};
pub use time::{FixedClock, fixed_now};
