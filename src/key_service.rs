use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::code_map::CodeMap;
use crate::Result;

/// The computation the runner delegates to. The payload is opaque to the
/// caller; it only has to be serializable as JSON.
#[async_trait]
pub trait KeyService {
    /// `None` marks an argument that had no numeric prefix; it is forwarded
    /// as-is rather than rejected upstream.
    async fn derive(
        &self,
        content_id: Option<i64>,
        code_number: Option<i64>,
    ) -> Result<serde_json::Value>;
}

/// What downstream URL builders consume: the server code picked for a code
/// number and the base path images are currently served under.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyCode {
    pub m: u32,
    pub b: String,
}

/// Derives key codes from the live routing script, fetched once per call.
pub struct GgKeyService;

#[async_trait]
impl KeyService for GgKeyService {
    async fn derive(
        &self,
        content_id: Option<i64>,
        code_number: Option<i64>,
    ) -> Result<serde_json::Value> {
        tracing::debug!(?content_id, ?code_number, "deriving key code");

        let map = CodeMap::from_remote().await?;

        // The routing table is keyed on the code number alone; the content
        // id identifies the request but doesn't influence the lookup.
        let key_code = KeyCode {
            m: map.code(code_number),
            b: map.base_path().to_owned(),
        };

        Ok(serde_json::to_value(key_code)?)
    }
}

#[cfg(test)]
mod tests {
    use super::KeyCode;

    #[test]
    fn key_code_serializes_m_before_b() {
        let key_code = KeyCode {
            m: 3,
            b: "1754016002".to_string(),
        };

        assert_eq!(
            serde_json::to_string(&key_code).unwrap(),
            r#"{"m":3,"b":"1754016002"}"#
        );
    }
}
