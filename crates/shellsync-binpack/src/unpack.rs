//! アンパック（デコード）側
//!
//! `Unpacker` はバッファを先頭から順に消費する。最初のエラーを保持し、
//! 以降の呼び出しは入力を読まずにゼロ値を返す（sticky error）。

// prost::encoding は doc(hidden) の内部 API。varint のバイト列がそのまま
// コンテンツハッシュに効くので、prost のバージョン固定を外さないこと
use prost::encoding::decode_varint;

use crate::error::PackError;
use crate::{DEFAULT_MAX_VALUE_LEN, MAX_VARINT_LEN};

/// パック済みバッファを順に読み出すデコーダ
///
/// フィールドはパックした順序と同じ順序で読む必要がある。
/// 各 unpack 呼び出しにはエラーメッセージに使うフィールドラベルを渡す。
#[derive(Debug, Clone)]
pub struct Unpacker<'a> {
    /// 未読部分
    buf: &'a [u8],
    /// 1 つの値として受け付ける最大バイト数
    max_value_len: usize,
    /// 最初に発生したエラー
    err: Option<PackError>,
}

impl<'a> Unpacker<'a> {
    /// バッファ全体を読む Unpacker を生成する
    pub fn new(buf: &'a [u8]) -> Self {
        Unpacker {
            buf,
            max_value_len: DEFAULT_MAX_VALUE_LEN,
            err: None,
        }
    }

    /// 値の最大バイト数を変更する
    pub fn with_max_value_len(mut self, max_value_len: usize) -> Self {
        self.max_value_len = max_value_len;
        self
    }

    /// varint 整数を 1 つ読む
    ///
    /// エラー済み、または読み出しに失敗した場合は 0 を返す。
    pub fn unpack_int(&mut self, field: &'static str) -> u64 {
        if self.err.is_some() {
            return 0;
        }
        match self.read_varint(field) {
            Ok(value) => value,
            Err(e) => {
                self.fail(e);
                0
            }
        }
    }

    /// 長さプレフィックス付きの値を 1 つ読む（コピーなし）
    ///
    /// エラー済み、または読み出しに失敗した場合は空スライスを返す。
    pub fn unpack_value(&mut self, field: &'static str) -> &'a [u8] {
        if self.err.is_some() {
            return &[];
        }
        match self.read_value(field) {
            Ok(value) => value,
            Err(e) => {
                self.fail(e);
                &[]
            }
        }
    }

    /// 最初に発生したエラー（なければ `None`）
    pub fn error(&self) -> Option<&PackError> {
        self.err.as_ref()
    }

    /// 未読のバイト数
    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    /// 読み出しを終了し、記録されたエラーがあれば返す
    ///
    /// 末尾の未読バイトはエラーにしない。
    pub fn finish(self) -> Result<(), PackError> {
        match self.err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn fail(&mut self, e: PackError) {
        tracing::trace!(field = e.field(), error = %e, "unpack failed");
        self.err = Some(e);
    }

    fn read_varint(&mut self, field: &'static str) -> Result<u64, PackError> {
        if self.buf.is_empty() {
            return Err(PackError::Truncated { field });
        }

        let mut cursor = self.buf;
        match decode_varint(&mut cursor) {
            Ok(value) => {
                self.buf = cursor;
                Ok(value)
            }
            // 継続ビットが立ったままバッファが尽きた → 途中で切れている
            Err(_) if self.buf.len() < MAX_VARINT_LEN && self.buf.iter().all(|b| b & 0x80 != 0) => {
                Err(PackError::Truncated { field })
            }
            Err(_) => Err(PackError::MalformedInt { field }),
        }
    }

    fn read_value(&mut self, field: &'static str) -> Result<&'a [u8], PackError> {
        let len = self.read_varint(field)?;
        let remaining = self.buf.len();

        if len > self.max_value_len as u64 {
            return Err(PackError::ValueTooLarge {
                field,
                len,
                limit: self.max_value_len,
            });
        }
        if len > remaining as u64 {
            return Err(PackError::LengthOverrun {
                field,
                len,
                remaining,
            });
        }

        let (value, rest) = self.buf.split_at(len as usize);
        self.buf = rest;
        Ok(value)
    }
}
