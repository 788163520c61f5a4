//! パック（エンコード）側
//!
//! すべて `Vec<u8>` への追記で、失敗しない。

use alloc::vec::Vec;

// prost::encoding は doc(hidden) の内部 API。varint のバイト列がそのまま
// コンテンツハッシュに効くので、prost のバージョン固定を外さないこと
use prost::encoding::{encode_varint, encoded_len_varint};

/// 非負整数を varint で追記する
///
/// 現状はパック形式のバージョンタグにのみ使う。0 は 1 バイト `0x00` になる。
pub fn pack_int(buf: &mut Vec<u8>, value: u64) {
    encode_varint(value, buf);
}

/// 長さプレフィックス付きの不透明バイト列を追記する
///
/// ```text
/// [len: varint][bytes: len]
/// ```
///
/// 空のバイト列は `[0x00]` の 1 バイトになる。
pub fn pack_value(buf: &mut Vec<u8>, value: &[u8]) {
    buf.reserve(packed_value_len(value.len()));
    encode_varint(value.len() as u64, buf);
    buf.extend_from_slice(value);
}

/// `len` バイトの値をパックしたときの総バイト数（プレフィックス込み）
pub fn packed_value_len(len: usize) -> usize {
    encoded_len_varint(len as u64) + len
}
