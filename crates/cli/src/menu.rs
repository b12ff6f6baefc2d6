use crate::render::{write_deck, write_round, write_session};
use crate::table::Table;
use std::io::{self, BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    NewDeck,
    Shuffle,
    Display,
    Play,
    Win,
    Exit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 6] = [
        MenuCommand::NewDeck,
        MenuCommand::Shuffle,
        MenuCommand::Display,
        MenuCommand::Play,
        MenuCommand::Win,
        MenuCommand::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::NewDeck => "Create New Deck",
            Self::Shuffle => "Shuffle Deck",
            Self::Display => "Display Deck",
            Self::Play => "Play Fibo Solitaire",
            Self::Win => "Win Fibo Solitaire",
            Self::Exit => "Exit",
        }
    }

    /// Accepts the menu number or a short command name.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" | "new" | "reset" => Some(Self::NewDeck),
            "2" | "shuffle" => Some(Self::Shuffle),
            "3" | "show" | "display" => Some(Self::Display),
            "4" | "play" => Some(Self::Play),
            "5" | "win" => Some(Self::Win),
            "6" | "exit" | "quit" | "q" => Some(Self::Exit),
            _ => None,
        }
    }
}

pub fn run_menu<R: BufRead, W: Write>(input: &mut R, out: &mut W, table: &mut Table) -> io::Result<()> {
    writeln!(out, "Welcome to Fibonacci Solitaire!")?;
    let mut line = String::new();
    loop {
        for (idx, command) in MenuCommand::ALL.iter().enumerate() {
            writeln!(out, "{}) {}", idx + 1, command.label())?;
        }
        write!(out, "Enter your choice: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        let Some(command) = MenuCommand::parse(&line) else {
            writeln!(out, "Invalid choice, please try again.")?;
            continue;
        };
        debug!(?command, "menu command");
        if !dispatch(out, table, command)? {
            return Ok(());
        }
    }
}

/// Runs one command. Returns `false` once the player asks to leave.
fn dispatch<W: Write>(out: &mut W, table: &mut Table, command: MenuCommand) -> io::Result<bool> {
    match command {
        MenuCommand::NewDeck => {
            table.new_deck();
            writeln!(out, "New deck created!")?;
        }
        MenuCommand::Shuffle => {
            table.shuffle();
            writeln!(out, "Deck shuffled!")?;
        }
        MenuCommand::Display => write_deck(out, &table.deck)?,
        MenuCommand::Play => {
            let (report, events) = table.play();
            write_round(out, &report, &events)?;
        }
        MenuCommand::Win => match table.win() {
            Ok(report) => write_session(out, &report)?,
            Err(err) => writeln!(out, "{err}")?,
        },
        MenuCommand::Exit => {
            writeln!(out, "Goodbye!")?;
            return Ok(false);
        }
    }
    Ok(true)
}
