//! Closed registry of libraries importable with `using`.
//!
//! Each entry maps a library name to a literal JavaScript block providing an
//! equivalent capability. The registry is data: the transformer never embeds
//! import text itself, so target-surface drift stays out of classification.

use std::collections::BTreeMap;

use lilt_syntax::{Error, Result};
use once_cell::sync::Lazy;

/// HTTP GET helper returning the response body.
const FETCH: &str = r#"const request = require('request');
const { promisify } = require('util');
const requestAsync = promisify(request.get);

async function fetch (url) {
  const res = await requestAsync(url);
  return res.body;
}"#;

static LIBRARIES: Lazy<BTreeMap<&'static str, &'static str>> =
    Lazy::new(|| BTreeMap::from([("fetch", FETCH)]));

/// Look up the JavaScript block for a library name.
///
/// Unknown names fail with a message enumerating the valid ones.
pub fn lookup(name: &str) -> Result<&'static str> {
    LIBRARIES
        .get(name)
        .copied()
        .ok_or_else(|| Error::UnknownLibrary {
            name: name.to_string(),
            valid: known_names().join(", "),
        })
}

/// Names accepted by `using`, in sorted order.
pub fn known_names() -> Vec<&'static str> {
    LIBRARIES.keys().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_is_registered() {
        let block = lookup("fetch").unwrap();
        assert!(block.contains("async function fetch (url)"));
    }

    #[test]
    fn unknown_names_enumerate_the_registry() {
        let err = lookup("sockets").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown library 'sockets', valid libraries are: fetch"
        );
    }
}
