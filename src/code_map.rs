use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::network::{self, BASE_DOMAIN};
use crate::{Error, Result};

static FALLBACK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?si)(var\s|default:)\s*o\s*=\s*(?<value>\d+)"#).unwrap());

static CASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?si)case\s+(?<key>\d+):\s+o?\s*=?\s*(?<value>\d+)?"#).unwrap());

static COND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?si)if\s*[(]g\s*===\s*(?<key>\d+)[)]\s*[{]?\s*o\s*=\s*(?<value>\d+);?\s*[}]?"#)
        .unwrap()
});

static BASE_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?si)b:\s*["'](?<path>.+?)["']"#).unwrap());

/// The routing table published as `gg.js` by the gallery service: a sparse
/// `code number -> server code` map with a fallback, plus the base path
/// images are currently served under.
#[derive(Debug)]
pub struct CodeMap {
    cases: HashMap<u32, u32>,
    fallback: u32,
    base_path: String,
}

impl CodeMap {
    /// Fetches the current routing script and parses it.
    pub async fn from_remote() -> Result<Self> {
        let url = format!("https://ltn.{BASE_DOMAIN}/gg.js");

        let resp = network::get(&url).await?;
        let status = resp.status();

        if !status.is_success() {
            return Err(Error::Status(status));
        }

        let script = resp.text().await.unwrap_or_default();

        Self::from_script(&script)
    }

    /// Parses the routing script. The script is a small piece of JavaScript
    /// whose shape changes over time; the patterns here cover the observed
    /// variants: a `var o = N` / `default: o = N` fallback, fall-through
    /// `case K:` groups closed by an `o = V` assignment, standalone
    /// `if (g === K) { o = V; }` overrides, and a `b: '<path>'` entry.
    pub fn from_script(script: &str) -> Result<Self> {
        parse(script).ok_or(Error::ParseCodeMap)
    }

    /// Server code for a code number; the fallback covers the sentinel and
    /// keys outside the table.
    pub fn code(&self, key: Option<i64>) -> u32 {
        key.and_then(|key| u32::try_from(key).ok())
            .and_then(|key| self.cases.get(&key).copied())
            .unwrap_or(self.fallback)
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }
}

fn parse(script: &str) -> Option<CodeMap> {
    let fallback = FALLBACK_RE
        .captures(script)?
        .name("value")
        .unwrap()
        .as_str()
        .parse::<u32>()
        .ok()?;

    let mut cases = HashMap::new();
    let mut pending_keys = Vec::new();

    for caps in CASE_RE.captures_iter(script) {
        let key = caps["key"].parse::<u32>().ok()?;

        pending_keys.push(key);

        if let Some(value) = caps.name("value") {
            let value = value.as_str().parse::<u32>().ok()?;

            for key in pending_keys.drain(..) {
                cases.insert(key, value);
            }
        }
    }

    for caps in COND_RE.captures_iter(script) {
        let key = caps["key"].parse::<u32>().ok()?;
        let value = caps["value"].parse::<u32>().ok()?;

        cases.insert(key, value);
    }

    let base_path = &BASE_PATH_RE.captures(script)?["path"];
    let base_path = base_path.strip_suffix('/').unwrap_or(base_path);

    tracing::debug!(
        cases = cases.len(),
        fallback,
        base_path,
        "parsed routing script"
    );

    Some(CodeMap {
        cases,
        fallback,
        base_path: base_path.to_owned(),
    })
}
