//! Golden JSON cases under `fixtures/`, looked up by name through
//! `fixtures/manifest.json`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

/// Case set name -> relative path, per kind of golden case.
#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(rename = "format-cases")]
    format_cases: HashMap<String, String>,
    #[serde(rename = "keyed-cases")]
    keyed_cases: HashMap<String, String>,
}

/// One kind of case set in the manifest.
#[derive(Copy, Clone)]
struct CaseKind {
    label: &'static str,
    entries: fn(&Manifest) -> &HashMap<String, String>,
}

const FORMAT: CaseKind = CaseKind {
    label: "format case",
    entries: |m| &m.format_cases,
};

const KEYED: CaseKind = CaseKind {
    label: "keyed case",
    entries: |m| &m.keyed_cases,
};

impl CaseKind {
    fn names(self) -> Vec<String> {
        let mut names: Vec<String> = (self.entries)(&MANIFEST).keys().cloned().collect();
        names.sort();
        names
    }

    fn path(self, name: &str) -> Result<PathBuf> {
        let rel = (self.entries)(&MANIFEST)
            .get(name)
            .ok_or_else(|| anyhow!("unknown {} fixture '{name}'", self.label))?;
        Ok(Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures")
            .join(rel))
    }

    fn json(self, name: &str) -> Result<String> {
        let path = self.path(name)?;
        fs::read_to_string(&path)
            .with_context(|| format!("failed to read {} '{name}' at {}", self.label, path.display()))
    }

    fn load<T: DeserializeOwned>(self, name: &str) -> Result<T> {
        let text = self.json(name)?;
        serde_json::from_str(&text).with_context(|| format!("failed to parse {} '{name}'", self.label))
    }
}

/// Golden `format_to_parts` cases: formatter input and expected text/parts.
pub mod format_cases {
    use super::*;

    pub fn keys() -> Vec<String> {
        FORMAT.names()
    }

    pub fn json(name: &str) -> Result<String> {
        FORMAT.json(name)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        FORMAT.load(name)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        FORMAT.path(name)
    }
}

/// Golden keyed-part sequences: a series of values rendered with one config.
pub mod keyed_cases {
    use super::*;

    pub fn keys() -> Vec<String> {
        KEYED.names()
    }

    pub fn json(name: &str) -> Result<String> {
        KEYED.json(name)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        KEYED.load(name)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        KEYED.path(name)
    }
}
