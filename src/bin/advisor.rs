use std::io::{self, BufRead, Write};

use clap::Parser;
use cyclesight::{find_matches, forecast, letters, CycleIndex, PartitionTable, Pitch, SWING_TABLE};

#[derive(Debug, Parser)]
#[command(name = "advisor", about = "Interactive sword-swing advisor")]
struct Args {
    /// Partition table mapping low-order output values to pitches,
    /// one letter (L/M/H) per value
    #[arg(long, default_value_t = SWING_TABLE)]
    table: PartitionTable,
}

/// Terminal session handles, acquired once in `main` and passed by
/// reference. Dropping the session releases the stdio locks on every exit
/// path.
struct Session<'a> {
    stdin: io::StdinLock<'a>,
    stdout: io::StdoutLock<'a>,
}

impl<'a> Session<'a> {
    fn new(stdin: &'a io::Stdin, stdout: &'a io::Stdout) -> Self {
        Self {
            stdin: stdin.lock(),
            stdout: stdout.lock(),
        }
    }
}

fn render(
    session: &mut Session<'_>,
    cycle: &CycleIndex,
    table: &PartitionTable,
    sounds: &[Pitch],
) -> io::Result<()> {
    let matches: Vec<usize> = find_matches(cycle, table, sounds).collect();
    let outcome = forecast(cycle, &matches, sounds.len());

    writeln!(session.stdout)?;
    writeln!(session.stdout, "Sequence: {}", letters(sounds))?;
    writeln!(session.stdout, "Matches: {}", matches.len())?;
    writeln!(session.stdout, "{outcome}")?;
    session.stdout.flush()
}

fn run(session: &mut Session<'_>, cycle: &CycleIndex, table: &PartitionTable) -> io::Result<()> {
    writeln!(
        session.stdout,
        "Enter the sequence of sword swings (L/M/H or 1/2/3; u = undo, r = reset, q = quit)."
    )?;

    let mut sounds: Vec<Pitch> = Vec::new();
    render(session, cycle, table, &sounds)?;

    let mut line = String::new();
    loop {
        line.clear();
        if session.stdin.read_line(&mut line)? == 0 {
            break;
        }
        match line.trim() {
            "q" | "quit" => break,
            "u" | "undo" => {
                sounds.pop();
            }
            "r" | "reset" => sounds.clear(),
            cmd => {
                // Unrecognized characters are silently ignored.
                for c in cmd.chars() {
                    if let Some(p) = Pitch::from_key(c) {
                        sounds.push(p);
                    }
                }
            }
        }
        render(session, cycle, table, &sounds)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let cycle = CycleIndex::build().map_err(|e| format!("[advisor] cycle build error: {e}"))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&stdin, &stdout);

    run(&mut session, &cycle, &args.table)?;
    Ok(())
}
