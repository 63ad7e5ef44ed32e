//! Generation and printing of fake hashes.
use crate::{Config, OutputFormat};
use anyhow::Context as _;
use faker_crypto::HashKind;
use rand::{
    rngs::{OsRng, StdRng},
    Rng, SeedableRng as _,
};
use std::io::Write;

/// A generated hash together with its kind.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Record {
    /// Hash algorithm.
    pub kind: HashKind,
    /// Lowercase hex digest.
    pub hash: String,
}

/// Rng for `config`: seeded if a seed is configured, from OS entropy otherwise.
pub fn rng(config: &Config) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_seed(OsRng.gen()),
    }
}

/// Lazy sequence of records, see [`generate`].
pub struct Records<'a, R: ?Sized> {
    kinds: std::slice::Iter<'a, HashKind>,
    count: usize,
    /// Kind being generated and the number of its records still to produce.
    current: Option<(HashKind, usize)>,
    rng: &'a mut R,
}

impl<R: Rng + ?Sized> Iterator for Records<'_, R> {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        loop {
            if let Some((kind, left)) = &mut self.current {
                if *left > 0 {
                    *left -= 1;
                    let hash = faker_crypto::generate_with(*kind, &mut *self.rng);
                    return Some(Record { kind: *kind, hash });
                }
            }
            let kind = *self.kinds.next()?;
            tracing::debug!(%kind, count = self.count, "generating");
            self.current = Some((kind, self.count));
        }
    }
}

/// Generates `config.count` hashes for each configured kind, grouped by kind.
/// Hashes are produced on demand, so any count runs in constant memory.
pub fn generate<'a, R: Rng + ?Sized>(config: &'a Config, rng: &'a mut R) -> Records<'a, R> {
    Records {
        kinds: config.kinds.iter(),
        count: config.count,
        current: None,
        rng,
    }
}

/// Writes `records` to `w` in the given format, one at a time.
/// Returns the number of records written.
pub fn write(
    format: OutputFormat,
    records: impl IntoIterator<Item = Record>,
    mut w: impl Write,
) -> anyhow::Result<usize> {
    let mut n = 0;
    match format {
        OutputFormat::Plain => {
            for r in records {
                writeln!(w, "{}", r.hash).context("write")?;
                n += 1;
            }
        }
        OutputFormat::Json => {
            w.write_all(b"[").context("write")?;
            for r in records {
                if n > 0 {
                    w.write_all(b",").context("write")?;
                }
                w.write_all(b"\n  ").context("write")?;
                serde_json::to_writer(&mut w, &r).context("serde_json::to_writer()")?;
                n += 1;
            }
            w.write_all(b"\n]\n").context("write")?;
        }
    }
    w.flush().context("flush")?;
    Ok(n)
}
