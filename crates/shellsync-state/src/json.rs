//! JSON 輸送形式
//!
//! パック済みバイト列を標準 base64 の JSON 文字列として運ぶ。
//! ShellState と ShellStateDiff の両方がこの形式を使う。

use alloc::string::String;
use alloc::vec::Vec;

use base64::Engine as _;
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::StateError;

pub(crate) fn serialize_packed<S: Serializer>(packed: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&base64::engine::general_purpose::STANDARD.encode(packed))
}

pub(crate) fn deserialize_packed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    use serde::de::Error as _;

    let text = String::deserialize(deserializer)?;
    decode_packed(&text).map_err(D::Error::custom)
}

fn decode_packed(text: &str) -> Result<Vec<u8>, StateError> {
    base64::engine::general_purpose::STANDARD
        .decode(text)
        .map_err(StateError::Base64)
}
