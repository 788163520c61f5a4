//! コンテンツハッシュ
//!
//! ShellState のパック済みバイト列の SHA-1 を標準 base64（パディングあり）で
//! 表した文字列。ShellStateDiff はこの値で起点のスナップショットを参照する。

use alloc::string::String;
use core::fmt;

use base64::Engine as _;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

/// スナップショットのコンテンツ ID
///
/// 値による弱参照で、参照先が存在するかどうかはこの型では保証しない。
/// 解決は呼び出し側のストアが行う。
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateHash(String);

impl StateHash {
    /// パック済みバイト列からハッシュを計算する
    ///
    /// ```
    /// use shellsync_state::StateHash;
    /// let hash = StateHash::of_packed(b"");
    /// assert_eq!(hash.as_str(), "2jmj7l5rSw0yVb/vlWAYkK/YBwk=");
    /// ```
    pub fn of_packed(packed: &[u8]) -> Self {
        let digest = Sha1::digest(packed);
        StateHash(base64::engine::general_purpose::STANDARD.encode(digest))
    }

    /// ハッシュ文字列
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 空（未設定）かどうか
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for StateHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for StateHash {
    fn from(s: String) -> Self {
        StateHash(s)
    }
}

impl From<&str> for StateHash {
    fn from(s: &str) -> Self {
        StateHash(String::from(s))
    }
}

impl AsRef<str> for StateHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
