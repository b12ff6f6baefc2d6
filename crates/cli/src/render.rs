use fibsol_core::{Deck, Event, RoundOutcome, RoundReport, RoundTally, SessionReport};
use serde::Serialize;
use std::io::{self, Write};

pub fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

pub fn write_deck(out: &mut impl Write, deck: &Deck) -> io::Result<()> {
    writeln!(out, "{deck}")
}

/// Prints the dealt cards as they landed, one line per closed pile.
pub fn write_round(out: &mut impl Write, report: &RoundReport, events: &[Event]) -> io::Result<()> {
    if report.outcome == RoundOutcome::Aborted && report.dealt == 0 {
        writeln!(out)?;
        writeln!(out, "--- Warning: Deck is empty !!! ---")?;
        return writeln!(out);
    }
    writeln!(out)?;
    writeln!(out, "Playing Fibonacci Solitaire !!!")?;
    writeln!(out)?;
    for event in events {
        match event {
            Event::CardDealt { card, .. } => write!(out, "{card}, ")?,
            Event::PileClosed { card, pile_sum, .. } => writeln!(out, "{card} Fibo: {pile_sum}")?,
            Event::RoundFinished { .. } | Event::RoundAborted { .. } => {}
        }
    }
    write_outcome(out, report)
}

pub fn write_outcome(out: &mut impl Write, report: &RoundReport) -> io::Result<()> {
    match report.outcome {
        RoundOutcome::Win => {
            writeln!(out)?;
            writeln!(out)?;
            writeln!(out, "Winner in {} piles!", report.total_piles)
        }
        RoundOutcome::Loss => {
            writeln!(out)?;
            writeln!(out, "Last Pile Not Fibo: {}", report.leftover)?;
            writeln!(out)?;
            writeln!(out, "Loser in {} piles!", report.total_piles)?;
            writeln!(out)
        }
        RoundOutcome::Aborted => {
            writeln!(out)?;
            writeln!(
                out,
                "--- Warning: deck ran out after {} cards !!! ---",
                report.dealt
            )?;
            writeln!(out)
        }
    }
}

pub fn write_session(out: &mut impl Write, report: &SessionReport) -> io::Result<()> {
    let piles: Vec<String> = report
        .winning_round
        .piles
        .iter()
        .map(|pile| format!("{}={}", pile.card, pile.pile_sum))
        .collect();
    writeln!(out, "winning piles: {}", piles.join(" "))?;
    writeln!(out, "Winner in {} games!", report.games_played)
}

pub fn write_tally(out: &mut impl Write, tally: &RoundTally) -> io::Result<()> {
    writeln!(out, "rounds:     {}", tally.rounds)?;
    writeln!(out, "wins:       {}", tally.wins)?;
    writeln!(out, "losses:     {}", tally.losses)?;
    if tally.aborted > 0 {
        writeln!(out, "aborted:    {}", tally.aborted)?;
    }
    writeln!(out, "win rate:   {:.2}%", tally.win_rate() * 100.0)?;
    writeln!(out, "mean piles: {:.2}", tally.mean_piles())
}
