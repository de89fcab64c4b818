//! blobmap Demo Binary
//!
//! Exercises the map through its public surface: bulk single-letter inserts,
//! lookups, a remove, and a re-insert. The map itself imposes no contract
//! beyond call/return; this driver just prints what it sees.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use blobmap::{BlobMap, Config};

/// blobmap demo driver
#[derive(Parser, Debug)]
#[command(name = "blobmap-demo")]
#[command(about = "Exercises the blobmap key-value map")]
#[command(version)]
struct Args {
    /// Number of single-letter keys to insert (wraps past 26)
    #[arg(short, long, default_value = "26")]
    count: u32,

    /// Load-factor ceiling before the map doubles its bucket count
    #[arg(short, long, default_value = "0.1")]
    load_factor: f64,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,blobmap=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("blobmap demo v{}", blobmap::VERSION);

    let config = Config::builder().max_load_factor(args.load_factor).build();
    let mut map = match BlobMap::with_config(config) {
        Ok(m) => m,
        Err(e) => {
            tracing::error!("Failed to create map: {}", e);
            std::process::exit(1);
        }
    };

    // Insert one entry per letter, A onward.
    for i in 0..args.count {
        let key = letter_key(i);
        let value = i.to_le_bytes();
        match map.set(&key, &value) {
            Ok(outcome) => tracing::info!("set {} = {} ({:?})", key, i, outcome),
            Err(e) => tracing::error!("set {} failed: {}", key, e),
        }
    }

    // Read every key back.
    for i in 0..args.count {
        let key = letter_key(i);
        match map.get(&key) {
            Ok(Some(bytes)) => match decode_u32(&bytes) {
                Some(value) => tracing::info!("get {} -> {}", key, value),
                None => tracing::warn!(
                    "get {} -> unexpected {}-byte value: {:02x?}",
                    key,
                    bytes.len(),
                    bytes
                ),
            },
            Ok(None) => tracing::warn!("get {} -> absent", key),
            Err(e) => tracing::error!("get {} failed: {}", key, e),
        }
    }

    tracing::info!(
        "{} items across {} buckets (load factor {:.3})",
        map.len(),
        map.bucket_count(),
        map.load_factor()
    );

    // Remove and re-insert one key.
    tracing::info!("has C ? {}", map.has("C"));
    if let Err(e) = map.remove("C") {
        tracing::error!("remove C failed: {}", e);
    }
    tracing::info!("has C ? {}", map.has("C"));

    if let Err(e) = map.set("C", &999u32.to_le_bytes()) {
        tracing::error!("re-set C failed: {}", e);
    }
    tracing::info!("has C ? {}", map.has("C"));
}

/// Key for the i-th insert: a single letter, wrapping past Z
fn letter_key(i: u32) -> String {
    char::from(b'A' + (i % 26) as u8).to_string()
}

/// Decode a stored little-endian u32, or report a width mismatch as None
fn decode_u32(bytes: &[u8]) -> Option<u32> {
    <[u8; 4]>::try_from(bytes).ok().map(u32::from_le_bytes)
}
