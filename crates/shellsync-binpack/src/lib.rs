//! # shellsync-binpack
//!
//! 位置依存（タグなし）の自己記述型バイナリパック形式。
//!
//! ShellState / ShellStateDiff のエンコードに使う最下層のプリミティブで、
//! 整数と長さプレフィックス付きの不透明バイト列だけを扱う。
//!
//! ## Wire Format
//!
//! ```text
//! int   = [varint: unsigned LEB128 (1..10 bytes)]
//! value = [len: unsigned LEB128][bytes: len]
//!
//! envelope = [version_tag: int][field_1: value]...[field_n: value]
//! ```
//!
//! フィールドにタグは付かない。エンコード側とデコード側がフィールドの
//! 順序と個数について合意している必要があり、スキップや省略の仕組みはない。
//!
//! ## Unpacker のエラー処理
//!
//! `Unpacker` は最初のエラーを記録し、以降の unpack 呼び出しは何も読まずに
//! ゼロ値を返す。すべてのフィールドを読んだ後に `finish()` で一度だけ確認する。
//!
//! ```
//! use shellsync_binpack::{pack_int, pack_value, Unpacker};
//!
//! let mut buf = Vec::new();
//! pack_int(&mut buf, 0);
//! pack_value(&mut buf, b"/home/u");
//!
//! let mut u = Unpacker::new(&buf);
//! assert_eq!(u.unpack_int("version"), 0);
//! assert_eq!(u.unpack_value("cwd"), b"/home/u");
//! assert!(u.finish().is_ok());
//! ```

#![no_std]
extern crate alloc;

pub mod error;
pub mod pack;
pub mod unpack;

pub use error::PackError;
pub use pack::{pack_int, pack_value, packed_value_len};
pub use unpack::Unpacker;

/// 1 つの値として受け付ける最大バイト数（デフォルト）
///
/// 長さプレフィックスがこれを超える場合、バッファを確保する前に
/// `PackError::ValueTooLarge` で失敗する。
pub const DEFAULT_MAX_VALUE_LEN: usize = 256 * 1024 * 1024;

/// u64 varint の最大バイト数
pub const MAX_VARINT_LEN: usize = 10;
