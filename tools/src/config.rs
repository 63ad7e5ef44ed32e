//! Generator configuration.
use anyhow::Context as _;
use faker_crypto::HashKind;
use std::{fs, path::Path};

/// Decodes a JSON document, rejecting trailing data.
pub fn decode_json<T: serde::de::DeserializeOwned>(json: &str) -> anyhow::Result<T> {
    let mut d = serde_json::Deserializer::from_str(json);
    let p = T::deserialize(&mut d)?;
    d.end()?;
    Ok(p)
}

/// How generated hashes are printed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One hash per line.
    #[default]
    Plain,
    /// JSON array of `{"kind", "hash"}` objects.
    Json,
}

/// Partial configuration, as read from a JSON file or from the command line.
/// Unset fields fall back to the other source, then to defaults.
#[derive(Debug, Default, Clone, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Kinds to generate, in output order.
    #[serde(default)]
    pub kinds: Option<Vec<HashKind>>,
    /// Number of hashes per kind.
    #[serde(default)]
    pub count: Option<usize>,
    /// Seed for reproducible output.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Output format.
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl ConfigFile {
    /// Reads a config file from disk.
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        (|| {
            let raw = fs::read_to_string(path).context("failed reading file")?;
            decode_json::<Self>(&raw).context("failed decoding JSON")
        })()
        .with_context(|| path.display().to_string())
    }

    /// Fields set in `other` replace the ones in `self`.
    pub fn merge(self, other: ConfigFile) -> Self {
        Self {
            kinds: other.kinds.or(self.kinds),
            count: other.count.or(self.count),
            seed: other.seed.or(self.seed),
            format: other.format.or(self.format),
        }
    }

    /// Applies defaults and validates the result.
    pub fn build(self) -> anyhow::Result<Config> {
        let kinds = self.kinds.unwrap_or_else(|| HashKind::ALL.to_vec());
        anyhow::ensure!(!kinds.is_empty(), "kinds: at least one hash kind is required");
        let count = self.count.unwrap_or(1);
        anyhow::ensure!(count > 0, "count: must be at least 1");
        Ok(Config {
            kinds,
            count,
            seed: self.seed,
            format: self.format.unwrap_or_default(),
        })
    }
}

/// Validated generator configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Kinds to generate, in output order. Never empty.
    pub kinds: Vec<HashKind>,
    /// Number of hashes per kind. At least 1.
    pub count: usize,
    /// Seed for reproducible output. OS entropy is used if unset.
    pub seed: Option<u64>,
    /// Output format.
    pub format: OutputFormat,
}
