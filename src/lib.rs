//! Guarded bulk deletion of A records in a Route53 hosted zone.
//!
//! Zonesweep finds every A record set in a hosted zone whose name
//! matches a regular expression, lists the matches, and deletes them
//! as a single atomic change batch - but only after the operator
//! types an explicit "yes".
//!
//! # Overview
//!
//! A run is a fixed, fully sequential pipeline:
//!
//! 1. **Resolve** - map the zone name to its identifier
//!    ([`zone::resolve_zone`]). Only an exact name match counts.
//! 2. **Scan** - page through the zone's record sets and keep the
//!    ones a [`RecordMatcher`] selects ([`scan::scan_records`]).
//! 3. **Confirm** - show the matches (wildcard escapes rendered as
//!    `*`) and ask for a literal yes/no ([`confirm::prompt_confirm`]).
//!    Anything else re-prompts; only "yes" proceeds.
//! 4. **Delete** - submit one change batch with a delete action per
//!    match ([`delete::delete_records`]). The service applies or
//!    rejects the batch as a unit; there is no partial apply, no
//!    retry, and no post-submit polling.
//!
//! All remote access goes through the [`RecordStore`] trait, so the
//! pipeline runs against the real Route53 client
//! ([`Route53Store`]) in production and a hand-written fake in
//! tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use clap::Parser;
//! use zonesweep::{Cli, Outcome, Route53Store, sweep};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let cli = Cli::parse();
//!     let store = Route53Store::from_env().await;
//!     let mut input = std::io::stdin().lock();
//!     let mut output = std::io::stdout();
//!
//!     match sweep(&store, &cli.name_regex, &cli.zone, &mut input, &mut output).await? {
//!         Outcome::NoMatches => println!("No matching record sets."),
//!         Outcome::Declined => println!("Aborted."),
//!         Outcome::Deleted(count) => println!("Deleted {count} record set(s)."),
//!     }
//!     Ok(())
//! }
//! ```

// Allow noisy pedantic lints that don't add value for a small
// operational CLI crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod confirm;
pub mod delete;
pub mod error;
pub mod matcher;
pub mod pipeline;
pub mod scan;
pub mod store;
pub mod zone;

pub use error::{SweepError, SweepResult};
pub use matcher::RecordMatcher;
pub use pipeline::{Cli, Outcome, sweep};
pub use store::route53::Route53Store;
pub use store::{PageToken, RecordPage, RecordStore, ZoneEntry};
