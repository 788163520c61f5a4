//! 差分ペイロード
//!
//! 変数マップの差分と行差分のエンコード済みバイト列。中身の構造は
//! 差分アルゴリズム側が所有し、このクレートではバイト列として運ぶだけ。

use alloc::vec::Vec;

macro_rules! opaque_payload {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $name(Vec<u8>);

        impl $name {
            /// エンコード済みバイト列
            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            pub fn into_bytes(self) -> Vec<u8> {
                self.0
            }

            /// バイト数
            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<Vec<u8>> for $name {
            fn from(bytes: Vec<u8>) -> Self {
                $name(bytes)
            }
        }

        impl From<&[u8]> for $name {
            fn from(bytes: &[u8]) -> Self {
                $name(bytes.to_vec())
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }
    };
}

opaque_payload! {
    /// 環境変数マップの差分（`MapDiffDecoder` で解釈する）
    EncodedMapDiff
}

opaque_payload! {
    /// alias / 関数テキストの行差分
    EncodedLineDiff
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_payload_keeps_bytes() {
        let diff = EncodedMapDiff::from(vec![0x00u8, 0x01, 0x02]);
        assert_eq!(diff.len(), 3);
        assert_eq!(diff.as_bytes(), &[0x00u8, 0x01, 0x02]);
        assert!(EncodedLineDiff::default().is_empty());
    }
}
