//! ShellState（フルスナップショット）
//!
//! ## Wire Format
//! ```text
//! [pack_version: int = 0]
//! [Version][Cwd][ShellVars][Aliases][Funcs][Error]   (すべて長さプレフィックス付き値)
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::envelope::{text, Envelope};
use crate::error::StateError;
use crate::hash::StateHash;
use crate::json;
use crate::SHELL_STATE_PACK_VERSION;

const ENVELOPE: Envelope<6> = Envelope {
    entity: "ShellState",
    pack_version: SHELL_STATE_PACK_VERSION,
    version_label: "ShellState pack version",
    fields: [
        "ShellState.Version",
        "ShellState.Cwd",
        "ShellState.ShellVars",
        "ShellState.Aliases",
        "ShellState.Funcs",
        "ShellState.Error",
    ],
};

/// シェル環境のフルスナップショット
///
/// シェル側のイントロスペクションで構築され、以後は変更しない。
/// JSON にはパック済みバイト列（base64 文字列）としてシリアライズされる。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellState {
    /// スナップショット内容のバージョン（`[type] [semver]`）。パック形式のバージョンとは別
    pub version: String,
    /// カレントディレクトリ
    pub cwd: String,
    /// シリアライズ済みの環境変数マップ（このクレートでは解釈しない）
    pub shell_vars: Vec<u8>,
    /// alias 定義
    pub aliases: String,
    /// 関数定義
    pub funcs: String,
    /// キャプチャに失敗した場合のみ非空
    pub error: String,
}

impl ShellState {
    /// すべてのフィールドがゼロ値か
    pub fn is_empty(&self) -> bool {
        self.version.is_empty()
            && self.cwd.is_empty()
            && self.shell_vars.is_empty()
            && self.aliases.is_empty()
            && self.funcs.is_empty()
            && self.error.is_empty()
    }

    /// パックしてハッシュを計算する
    ///
    /// # 戻り値
    /// `(コンテンツハッシュ, パック済みバイト列)`。同じ内容なら常に同じ値になる。
    pub fn encode_and_hash(&self) -> (StateHash, Vec<u8>) {
        let packed = self.encode();
        (StateHash::of_packed(&packed), packed)
    }

    /// パック済みバイト列を返す
    pub fn encode(&self) -> Vec<u8> {
        ENVELOPE.seal([
            self.version.as_bytes(),
            self.cwd.as_bytes(),
            &self.shell_vars,
            self.aliases.as_bytes(),
            self.funcs.as_bytes(),
            self.error.as_bytes(),
        ])
    }

    /// コンテンツハッシュのみを返す
    pub fn hash(&self) -> StateHash {
        self.encode_and_hash().0
    }

    /// パック済みバイト列から復元する
    ///
    /// # エラー
    /// - `StateError::VersionMismatch`: パック形式バージョンが 0 以外
    /// - `StateError::Pack`: バイト列が途中で切れている、または不正
    /// - `StateError::InvalidUtf8`: 文字列フィールドが UTF-8 ではない
    pub fn decode(bytes: &[u8]) -> Result<Self, StateError> {
        let [version, cwd, shell_vars, aliases, funcs, error] = ENVELOPE.open(bytes)?;
        let [version_label, cwd_label, _, aliases_label, funcs_label, error_label] = ENVELOPE.fields;

        Ok(ShellState {
            version: text(version_label, version)?,
            cwd: text(cwd_label, cwd)?,
            shell_vars: shell_vars.to_vec(),
            aliases: text(aliases_label, aliases)?,
            funcs: text(funcs_label, funcs)?,
            error: text(error_label, error)?,
        })
    }
}

impl Serialize for ShellState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        json::serialize_packed(&self.encode(), serializer)
    }
}

impl<'de> Deserialize<'de> for ShellState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error as _;

        let packed = json::deserialize_packed(deserializer)?;
        ShellState::decode(&packed).map_err(D::Error::custom)
    }
}
