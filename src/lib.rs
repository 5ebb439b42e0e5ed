//! Fixed-capacity string dictionary backed by a linear-probing hash table.
//!
//! The `probemap` crate provides an in-memory associative store built for
//! one-shot bulk loading followed by repeated exact-key queries. All entries
//! live directly in a fixed slot array (open addressing); collisions are
//! resolved by advancing one slot at a time, and the table keeps per-instance
//! collision and probe counters so the quality of the hash on a given data
//! set can be measured.
//!
//! Typical usage loads a line-oriented `"key: value"` source with
//! [`DictLoader`] and then queries the resulting [`ProbeMap`]:
//!
//! ```
//! use probemap::{DictLoader, ProbeMap};
//!
//! # fn main() -> Result<(), probemap::LoadError> {
//! let source = "ferrous: containing iron\noxide: a compound of oxygen\n";
//!
//! let mut map = ProbeMap::new(1115);
//! let report = DictLoader::default().load(&mut map, source.as_bytes())?;
//! assert_eq!(report.loaded, 2);
//!
//! assert_eq!(map.get("oxide"), Some("a compound of oxygen"));
//! assert_eq!(map.get("aurous"), None);
//! println!("average probe length: {:.2}", map.stats().average_probe_length());
//! # Ok(())
//! # }
//! ```

mod error;
pub use error::{LoadError, TableFull};

mod hasher;
pub use hasher::{KeyHash, WeightedKeyHash};

mod stats;
pub use stats::{LoadReport, ProbeMapStats};

mod table;
pub use table::ProbeMap;

mod loader;
pub use loader::DictLoader;
