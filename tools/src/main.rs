//! Prints fake MD5/SHA1/SHA256/SHA512 hashes.
use anyhow::Context as _;
use clap::Parser;
use faker_crypto::HashKind;
use faker_crypto_tools::{ConfigFile, OutputFormat};
use std::{
    io::{self, IsTerminal as _},
    path::PathBuf,
};
use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Command-line application printing fake hashes.
#[derive(Debug, Parser)]
struct Args {
    /// Hash kind to generate. Repeat for several kinds. Defaults to all kinds.
    #[arg(long = "kind", value_parser = parse_kind)]
    kinds: Vec<HashKind>,
    /// Number of hashes per kind.
    #[arg(long)]
    count: Option<usize>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Output format.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Path to a JSON config file. Flags given on the command line take precedence.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn parse_kind(s: &str) -> Result<HashKind, String> {
    s.parse::<HashKind>().map_err(|err| err.to_string())
}

impl Args {
    /// Flags given on the command line, as a partial config.
    fn overrides(&self) -> ConfigFile {
        ConfigFile {
            kinds: (!self.kinds.is_empty()).then(|| self.kinds.clone()),
            count: self.count,
            seed: self.seed,
            format: self.format,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Stdout carries the hashes, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_ansi(std::env::var("NO_COLOR").is_err() && io::stderr().is_terminal())
        .with_file(false)
        .with_line_number(false)
        .init();

    let args = Args::parse();
    tracing::trace!(?args, "Starting");

    let file = match &args.config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading config file.");
            ConfigFile::read(path)?
        }
        None => ConfigFile::default(),
    };
    let config = file.merge(args.overrides()).build().context("invalid config")?;
    tracing::debug!(?config, "Configuration loaded.");

    let rng = &mut faker_crypto_tools::rng(&config);
    let records = faker_crypto_tools::generate(&config, rng);
    let out = io::BufWriter::new(io::stdout().lock());
    let generated = faker_crypto_tools::write(config.format, records, out)?;
    tracing::info!(generated, "Done.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser as _;
    use faker_crypto::HashKind;
    use faker_crypto_tools::{ConfigFile, OutputFormat};
    use pretty_assertions::assert_eq;

    #[test]
    fn no_flags_override_nothing() {
        let args = Args::try_parse_from(["fake-hash"]).unwrap();
        assert_eq!(args.overrides(), ConfigFile::default());
    }

    #[test]
    fn repeated_kind_flags() {
        let args = Args::try_parse_from([
            "fake-hash", "--kind", "md5", "--kind", "SHA-256", "--count", "3", "--format", "json",
        ])
        .unwrap();
        let got = args.overrides();
        assert_eq!(got.kinds, Some(vec![HashKind::Md5, HashKind::Sha256]));
        assert_eq!(got.count, Some(3));
        assert_eq!(got.seed, None);
        assert_eq!(got.format, Some(OutputFormat::Json));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(Args::try_parse_from(["fake-hash", "--kind", "md4"]).is_err());
    }
}
