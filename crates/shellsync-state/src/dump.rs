//! ShellStateDiff のデバッグ表示
//!
//! `vars_diff` の解釈は外部の変数マップ差分デコーダ（`MapDiffDecoder`）に任せる。
//! alias / 関数の行差分はバイト数だけを表示する。

use core::fmt;

use crate::diff::ShellStateDiff;

/// 変数マップ差分のデコーダ
///
/// 差分アルゴリズム側が実装する。空のバイト列は「変更なし」としてデコードできること。
pub trait MapDiffDecoder {
    /// デコード結果。`Display` で 1 行に整形される
    type Diff: fmt::Display;
    /// デコードエラー
    type Error: fmt::Display;

    fn decode(&self, bytes: &[u8]) -> Result<Self::Diff, Self::Error>;
}

/// `ShellStateDiff::dump` が返す表示アダプタ
///
/// ```text
/// ShellStateDiff:
///   version: <version>
///   base: <base hash>
///   cwd: <cwd>                 (cwd が非空の場合のみ)
///   vars: <map diff>           (デコード失敗時は vars: error[<message>])
///   aliases: <len>, funcs: <len>
///   error: <error>             (error が非空の場合のみ)
/// ```
pub struct DiffDump<'a, D> {
    diff: &'a ShellStateDiff,
    decoder: &'a D,
}

impl<'a, D: MapDiffDecoder> DiffDump<'a, D> {
    pub(crate) fn new(diff: &'a ShellStateDiff, decoder: &'a D) -> Self {
        DiffDump { diff, decoder }
    }
}

impl<D: MapDiffDecoder> fmt::Display for DiffDump<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let diff = self.diff;

        writeln!(f, "ShellStateDiff:")?;
        writeln!(f, "  version: {}", diff.version)?;
        writeln!(f, "  base: {}", diff.base_hash)?;
        if !diff.cwd.is_empty() {
            writeln!(f, "  cwd: {}", diff.cwd)?;
        }

        // デコード失敗は表示に含め、呼び出し側には伝播しない
        match self.decoder.decode(diff.vars_diff.as_bytes()) {
            Ok(vars) => writeln!(f, "  vars: {}", vars)?,
            Err(e) => writeln!(f, "  vars: error[{}]", e)?,
        }

        writeln!(
            f,
            "  aliases: {}, funcs: {}",
            diff.aliases_diff.len(),
            diff.funcs_diff.len()
        )?;
        if !diff.error.is_empty() {
            writeln!(f, "  error: {}", diff.error)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::StateHash;
    use crate::payload::{EncodedLineDiff, EncodedMapDiff};
    use alloc::format;
    use alloc::vec;

    /// 先頭バイトを追加件数として読むだけのデコーダ
    struct CountDecoder;

    impl MapDiffDecoder for CountDecoder {
        type Diff = u8;
        type Error = &'static str;

        fn decode(&self, bytes: &[u8]) -> Result<u8, &'static str> {
            match bytes {
                [] => Ok(0),
                [n] => Ok(*n),
                _ => Err("trailing bytes"),
            }
        }
    }

    #[test]
    fn test_dump_minimal() {
        let diff = ShellStateDiff {
            version: "0.1.0".into(),
            base_hash: StateHash::from("eZFJnPtAFVeYq8oQ9eURhD6VV6E="),
            ..Default::default()
        };
        assert_eq!(
            format!("{}", diff.dump(&CountDecoder)),
            "ShellStateDiff:\n  version: 0.1.0\n  base: eZFJnPtAFVeYq8oQ9eURhD6VV6E=\n  vars: 0\n  aliases: 0, funcs: 0\n"
        );
    }

    #[test]
    fn test_dump_reports_decode_error_inline() {
        let diff = ShellStateDiff {
            version: "0.1.0".into(),
            cwd: "/tmp".into(),
            vars_diff: EncodedMapDiff::from(vec![1u8, 2, 3]),
            aliases_diff: EncodedLineDiff::from(vec![0u8; 12]),
            funcs_diff: EncodedLineDiff::from(vec![0u8; 4]),
            error: "capture timed out".into(),
            ..Default::default()
        };
        let out = format!("{}", diff.dump(&CountDecoder));
        assert_eq!(
            out,
            "ShellStateDiff:\n  version: 0.1.0\n  base: \n  cwd: /tmp\n  vars: error[trailing bytes]\n  aliases: 12, funcs: 4\n  error: capture timed out\n"
        );
    }
}
