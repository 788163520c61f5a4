//! shellsync-binpack エラー型

use thiserror::Error;

/// アンパック時のエラー
///
/// どのバリアントも失敗したフィールドのラベルを持つ。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// フィールドを読む前にバッファが尽きた
    #[error("cannot unpack {field}: buffer truncated")]
    Truncated { field: &'static str },

    /// varint が不正（10 バイトを超える、または u64 に収まらない）
    #[error("cannot unpack {field}: malformed varint")]
    MalformedInt { field: &'static str },

    /// 長さプレフィックスが残りのバッファより大きい
    #[error("cannot unpack {field}: value length {len} exceeds remaining {remaining} bytes")]
    LengthOverrun {
        field: &'static str,
        len: u64,
        remaining: usize,
    },

    /// 長さプレフィックスが上限を超えている
    #[error("cannot unpack {field}: value length {len} exceeds limit of {limit} bytes")]
    ValueTooLarge {
        field: &'static str,
        len: u64,
        limit: usize,
    },
}

impl PackError {
    /// 失敗したフィールドのラベル
    pub fn field(&self) -> &'static str {
        match self {
            PackError::Truncated { field }
            | PackError::MalformedInt { field }
            | PackError::LengthOverrun { field, .. }
            | PackError::ValueTooLarge { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_includes_field_label() {
        let err = PackError::LengthOverrun {
            field: "ShellState.Cwd",
            len: 40,
            remaining: 3,
        };
        assert_eq!(
            err.to_string(),
            "cannot unpack ShellState.Cwd: value length 40 exceeds remaining 3 bytes"
        );
        assert_eq!(err.field(), "ShellState.Cwd");
    }
}
