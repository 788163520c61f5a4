//! # shellsync-state
//!
//! リモートシェルセッションの環境（cwd・環境変数・alias・関数）を
//! コントローラとリモート実行エージェントの間で同期するためのエンコード。
//!
//! ## 2 つのエンティティ
//!
//! - **ShellState**: 環境のフルスナップショット。パック済みバイト列の
//!   SHA-1（base64）がそのままコンテンツ ID（`StateHash`）になる
//! - **ShellStateDiff**: ある `StateHash` を起点とした差分
//!
//! ## Wire Format
//!
//! ```text
//! ShellState     = [pack_version=0][Version][Cwd][ShellVars][Aliases][Funcs][Error]
//! ShellStateDiff = [pack_version=0][Version][BaseHash][Cwd]
//!                  [VarsDiff][AliasesDiff][FuncsDiff][Error]
//! ```
//!
//! 各フィールドは `shellsync-binpack` の長さプレフィックス付き値。
//! 同じ内容の ShellState は常に同じバイト列になるので、ハッシュも一致する。
//!
//! ## JSON 輸送形式
//!
//! どちらのエンティティもパック済みバイト列を標準 base64 にした
//! JSON 文字列 1 つにシリアライズされる。ハッシュは含まれない。
//!
//! ```text
//! "AAUwLjEuMAcvaG9tZS91B0ZPTz1iYXILbGw9J2xzIC1sYScAAA=="
//! ```

#![no_std]
extern crate alloc;

mod envelope;
mod json;

pub mod diff;
pub mod dump;
pub mod error;
pub mod hash;
pub mod payload;
pub mod state;

pub use diff::ShellStateDiff;
pub use dump::{DiffDump, MapDiffDecoder};
pub use error::StateError;
pub use hash::StateHash;
pub use payload::{EncodedLineDiff, EncodedMapDiff};
pub use state::ShellState;

/// ShellState のパック形式バージョン
pub const SHELL_STATE_PACK_VERSION: u64 = 0;

/// ShellStateDiff のパック形式バージョン（ShellState とは独立に管理する）
pub const SHELL_STATE_DIFF_PACK_VERSION: u64 = 0;
