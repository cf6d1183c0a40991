//! # Canonical Encoder
//!
//! Sorted-key, whitespace-free JSON. Two logically equal records produce the
//! same bytes no matter the order their fields were inserted in, at every
//! nesting level. Arrays keep their order; objects inside arrays are sorted too.
//!
//! Keys are ordered by UTF-16 code units, the order records already on the
//! ledger were written in. It matches UTF-8 byte order except for keys that
//! mix U+E000..U+FFFF with characters outside the BMP.
//!
//! The encoder walks `serde_json::Value` itself rather than relying on
//! `serde_json::Map` iteration order, which changes with the `preserve_order`
//! feature.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::errors::{DecodeError, LedgerError};

/// Canonical bytes of an arbitrary JSON value.
pub fn canonical_bytes(value: &Value) -> Vec<u8> {
    let mut out = Vec::with_capacity(128);
    write_canonical(value, &mut out);
    out
}

/// Encode a record for the world state.
pub fn encode<T: Serialize>(record: &T) -> Result<Vec<u8>, LedgerError> {
    let value = serde_json::to_value(record).map_err(|e| LedgerError::Encode {
        message: e.to_string(),
    })?;
    Ok(canonical_bytes(&value))
}

/// Decode world-state bytes into a record.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(bytes).map_err(DecodeError::from)
}

fn write_canonical(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.encode_utf16().cmp(b.0.encode_utf16()));

            out.push(b'{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_string(key, out);
                out.push(b':');
                write_canonical(item, out);
            }
            out.push(b'}');
        }
        Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_canonical(item, out);
            }
            out.push(b']');
        }
        Value::String(s) => write_string(s, out),
        // null, bool and number have a single compact rendering
        scalar => out.extend_from_slice(scalar.to_string().as_bytes()),
    }
}

fn write_string(s: &str, out: &mut Vec<u8>) {
    // Serializing a str into a Vec cannot fail.
    let _ = serde_json::to_writer(&mut *out, s);
}
