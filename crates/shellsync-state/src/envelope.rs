//! バージョンタグ付きエンベロープ
//!
//! ```text
//! [pack_version: int][field_1: value]...[field_n: value]
//! ```
//!
//! エンティティごとのフィールド順はラベル配列として 1 か所で定義し、
//! `seal` と `open` の両方がその配列を同じ順に辿る。

use alloc::string::String;
use alloc::vec::Vec;

use shellsync_binpack::{pack_int, pack_value, packed_value_len, Unpacker};

use crate::error::StateError;

/// エンティティのエンベロープ定義
pub(crate) struct Envelope<const N: usize> {
    /// エラーメッセージ用のエンティティ名
    pub entity: &'static str,
    /// パック形式バージョン
    pub pack_version: u64,
    /// バージョンタグのラベル
    pub version_label: &'static str,
    /// フィールドのラベル（パック順）
    pub fields: [&'static str; N],
}

impl<const N: usize> Envelope<N> {
    /// バージョンタグとフィールド値をパックする
    ///
    /// `values` は `fields` と同じ順序で渡す。
    pub fn seal(&self, values: [&[u8]; N]) -> Vec<u8> {
        let len = 1 + values.iter().map(|v| packed_value_len(v.len())).sum::<usize>();
        let mut buf = Vec::with_capacity(len);

        pack_int(&mut buf, self.pack_version);
        for value in values {
            pack_value(&mut buf, value);
        }

        tracing::trace!(entity = self.entity, len = buf.len(), "sealed envelope");
        buf
    }

    /// バージョンタグを検証し、フィールド値を `fields` の順に取り出す
    ///
    /// バージョンが一致しない場合はフィールドを 1 つも読まずに失敗する。
    pub fn open<'a>(&self, bytes: &'a [u8]) -> Result<[&'a [u8]; N], StateError> {
        let mut u = Unpacker::new(bytes);

        let version = u.unpack_int(self.version_label);
        if let Some(e) = u.error() {
            return Err(e.clone().into());
        }
        if version != self.pack_version {
            tracing::debug!(
                entity = self.entity,
                expected = self.pack_version,
                actual = version,
                "rejecting payload with unknown pack version"
            );
            return Err(StateError::VersionMismatch {
                entity: self.entity,
                expected: self.pack_version,
                actual: version,
            });
        }

        let values = self.fields.map(|label| u.unpack_value(label));
        u.finish()?;

        tracing::trace!(entity = self.entity, len = bytes.len(), "opened envelope");
        Ok(values)
    }
}

/// フィールド値を UTF-8 文字列に変換する
pub(crate) fn text(field: &'static str, bytes: &[u8]) -> Result<String, StateError> {
    core::str::from_utf8(bytes)
        .map(String::from)
        .map_err(|_| StateError::InvalidUtf8 { field })
}
