//! shellsync-state エラー型

use shellsync_binpack::PackError;
use thiserror::Error;

/// ShellState / ShellStateDiff のデコードエラー
///
/// いずれも入力が壊れているか互換性がないことを示す。リトライしても結果は変わらない。
/// キャプチャ側の失敗（`Error` フィールド）はデコードエラーではない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// パック形式バージョンが一致しない
    #[error("invalid {entity} pack version: {actual} (expected {expected})")]
    VersionMismatch {
        entity: &'static str,
        expected: u64,
        actual: u64,
    },

    /// バイナリが途中で切れている、または不正
    #[error(transparent)]
    Pack(#[from] PackError),

    /// 文字列フィールドが UTF-8 ではない
    #[error("{field} is not valid UTF-8")]
    InvalidUtf8 { field: &'static str },

    /// JSON 文字列が base64 としてデコードできない
    #[error("invalid base64 payload: {0}")]
    Base64(base64::DecodeError),
}
