use std::io::{BufRead, Write};

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use log::info;

use crate::confirm;
use crate::delete;
use crate::error::SweepResult;
use crate::matcher::RecordMatcher;
use crate::scan;
use crate::store::RecordStore;
use crate::zone;

#[derive(Parser)]
#[command(name = "zonesweep")]
#[command(about = "Delete matching A records from a hosted zone")]
pub struct Cli {
    /// Regular expression matched against record set names
    #[arg(long, value_name = "REGEX")]
    pub name_regex: String,

    /// Zone the record sets live in
    #[arg(long, value_name = "ZONE", value_parser = NonEmptyStringValueParser::new())]
    pub zone: String,
}

/// How a run ended when no error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing in the zone matched; no prompt was issued.
    NoMatches,
    /// The operator declined; nothing was deleted.
    Declined,
    /// The change batch was accepted; carries the candidate count.
    Deleted(usize),
}

/// Run the sweep: resolve the zone, scan for matches, list them,
/// ask the operator, and delete on an explicit "yes".
pub async fn sweep<S, R, W>(
    store: &S,
    pattern: &str,
    zone_name: &str,
    input: &mut R,
    output: &mut W,
) -> SweepResult<Outcome>
where
    S: RecordStore + Sync,
    R: BufRead,
    W: Write,
{
    // Pattern validation happens before any remote call.
    let matcher = RecordMatcher::new(pattern)?;

    let zone_id = zone::resolve_zone(store, zone_name).await?;
    let matches = scan::scan_records(store, &zone_id, &matcher).await?;

    if matches.is_empty() {
        return Ok(Outcome::NoMatches);
    }

    writeln!(output, "Matching record sets:")?;
    for set in &matches {
        writeln!(output, "  -- {}", confirm::display_name(set.name()))?;
    }

    if !confirm::prompt_confirm(input, output)? {
        return Ok(Outcome::Declined);
    }

    writeln!(output, "Deleting...")?;
    let count = matches.len();
    delete::delete_records(store, &zone_id, matches).await?;
    info!("deleted {count} record set(s) from {zone_id}");
    Ok(Outcome::Deleted(count))
}
