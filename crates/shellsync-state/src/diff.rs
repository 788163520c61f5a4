//! ShellStateDiff（起点ハッシュに対する差分）
//!
//! ## Wire Format
//! ```text
//! [pack_version: int = 0]
//! [Version][BaseHash][Cwd][VarsDiff][AliasesDiff][FuncsDiff][Error]
//! ```
//!
//! ShellState と同じエンベロープだが、パック形式バージョンは独立している。
//! 差分自体のハッシュは計算しない。

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::dump::{DiffDump, MapDiffDecoder};
use crate::envelope::{text, Envelope};
use crate::error::StateError;
use crate::hash::StateHash;
use crate::json;
use crate::payload::{EncodedLineDiff, EncodedMapDiff};
use crate::SHELL_STATE_DIFF_PACK_VERSION;

const ENVELOPE: Envelope<7> = Envelope {
    entity: "ShellStateDiff",
    pack_version: SHELL_STATE_DIFF_PACK_VERSION,
    version_label: "ShellStateDiff pack version",
    fields: [
        "ShellStateDiff.Version",
        "ShellStateDiff.BaseHash",
        "ShellStateDiff.Cwd",
        "ShellStateDiff.VarsDiff",
        "ShellStateDiff.AliasesDiff",
        "ShellStateDiff.FuncsDiff",
        "ShellStateDiff.Error",
    ],
};

/// `base_hash` で示すスナップショットに対する差分
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellStateDiff {
    /// 内容のバージョン
    pub version: String,
    /// 起点となる ShellState のハッシュ
    pub base_hash: StateHash,
    /// 変更後の cwd（空 = 変更なし）
    pub cwd: String,
    /// 環境変数マップの差分
    pub vars_diff: EncodedMapDiff,
    /// alias テキストの行差分
    pub aliases_diff: EncodedLineDiff,
    /// 関数テキストの行差分
    pub funcs_diff: EncodedLineDiff,
    /// キャプチャに失敗した場合のみ非空
    pub error: String,
}

impl ShellStateDiff {
    /// version と起点ハッシュ以外がすべてゼロ値か（変更なしの差分）
    pub fn is_empty(&self) -> bool {
        self.cwd.is_empty()
            && self.vars_diff.is_empty()
            && self.aliases_diff.is_empty()
            && self.funcs_diff.is_empty()
            && self.error.is_empty()
    }

    /// パック済みバイト列を返す
    pub fn encode(&self) -> Vec<u8> {
        ENVELOPE.seal([
            self.version.as_bytes(),
            self.base_hash.as_str().as_bytes(),
            self.cwd.as_bytes(),
            self.vars_diff.as_bytes(),
            self.aliases_diff.as_bytes(),
            self.funcs_diff.as_bytes(),
            self.error.as_bytes(),
        ])
    }

    /// パック済みバイト列から復元する
    ///
    /// # エラー
    /// `ShellState::decode` と同じ。
    pub fn decode(bytes: &[u8]) -> Result<Self, StateError> {
        let [version, base_hash, cwd, vars_diff, aliases_diff, funcs_diff, error] = ENVELOPE.open(bytes)?;
        let [version_label, base_hash_label, cwd_label, .., error_label] = ENVELOPE.fields;

        Ok(ShellStateDiff {
            version: text(version_label, version)?,
            base_hash: StateHash::from(text(base_hash_label, base_hash)?),
            cwd: text(cwd_label, cwd)?,
            vars_diff: EncodedMapDiff::from(vars_diff),
            aliases_diff: EncodedLineDiff::from(aliases_diff),
            funcs_diff: EncodedLineDiff::from(funcs_diff),
            error: text(error_label, error)?,
        })
    }

    /// デバッグ用の表示アダプタを返す
    ///
    /// `vars_diff` は `decoder` で解釈する。デコードに失敗しても表示は失敗しない。
    ///
    /// ```text
    /// ShellStateDiff:
    ///   version: 0.1.0
    ///   base: eZFJnPtAFVeYq8oQ9eURhD6VV6E=
    ///   vars: ...
    ///   aliases: 0, funcs: 0
    /// ```
    pub fn dump<'a, D: MapDiffDecoder>(&'a self, decoder: &'a D) -> DiffDump<'a, D> {
        DiffDump::new(self, decoder)
    }
}

impl Serialize for ShellStateDiff {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        json::serialize_packed(&self.encode(), serializer)
    }
}

impl<'de> Deserialize<'de> for ShellStateDiff {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error as _;

        let packed = json::deserialize_packed(deserializer)?;
        ShellStateDiff::decode(&packed).map_err(D::Error::custom)
    }
}
