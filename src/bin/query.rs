use clap::Parser;
use serde::Serialize;

use cyclesight::{find_matches, forecast, CycleIndex, Forecast, PartitionTable, Pitch, SWING_TABLE};

#[derive(Debug, Parser)]
#[command(name = "query", about = "One-shot swing-sequence scan over the generator orbit")]
struct Args {
    /// Observed swing sounds in order, e.g. "MMHL" (aliases 1/2/3 accepted)
    #[arg(long, default_value = "")]
    sounds: String,

    /// Partition table mapping low-order output values to pitches,
    /// one letter (L/M/H) per value
    #[arg(long, default_value_t = SWING_TABLE)]
    table: PartitionTable,

    /// List up to N matching positions with their register pairs
    #[arg(long, default_value_t = 0)]
    show: usize,

    /// Emit a single JSON object instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct QueryOut<'a> {
    sounds: &'a str,
    period: usize,
    matches: usize,
    forecast: String,
    /// Present only when the candidates agree on a wait.
    #[serde(skip_serializing_if = "Option::is_none")]
    swings: Option<u32>,
}

fn parse_sounds(s: &str) -> Result<Vec<Pitch>, String> {
    s.chars()
        .map(|c| Pitch::from_key(c).ok_or_else(|| format!("unrecognized sound '{c}' in --sounds")))
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let sounds = parse_sounds(&args.sounds).map_err(|e| format!("[query] {e}"))?;
    let cycle = CycleIndex::build().map_err(|e| format!("[query] cycle build error: {e}"))?;

    let matches: Vec<usize> = find_matches(&cycle, &args.table, &sounds).collect();
    let outcome = forecast(&cycle, &matches, sounds.len());

    if args.json {
        let out = QueryOut {
            sounds: &args.sounds,
            period: cycle.period(),
            matches: matches.len(),
            forecast: outcome.to_string(),
            swings: match outcome {
                Forecast::Swings(n) => Some(n),
                _ => None,
            },
        };
        println!("{}", serde_json::to_string(&out)?);
        return Ok(());
    }

    println!("[query] Period: {}", cycle.period());
    println!("[query] Sequence: {} ({} sounds)", args.sounds, sounds.len());
    println!("[query] Matches: {}", matches.len());
    for &position in matches.iter().take(args.show) {
        let (r1, r2) = cycle.state_at(position).registers();
        println!("[query]   position {position}: r1=0x{r1:02x} r2=0x{r2:02x}");
    }
    if args.show > 0 && matches.len() > args.show {
        println!("[query]   ... {} more", matches.len() - args.show);
    }
    println!("[query] {outcome}");

    Ok(())
}
