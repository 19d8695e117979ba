// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::io::{self, BufRead, BufReader, Write};

use clap::{value_t, App, Arg, ArgMatches};
use rand::{rngs::StdRng, SeedableRng};

use salvo::{
    board::{column_name, BoardSetup, Cell, InputError, Placement},
    config::DEFAULT_BOARD_SIZE,
    participant::{Operator, Request},
    Automated, DecisionError, Driven, FirstTurn, Fleet, Game, GameConfig, GameError, Observer,
    Participant, ParticipantKind, Player, ShotReport,
};

mod logging;

/// Seed used by the demo modes so they play out the same way every time.
const DEMO_SEED: u64 = 6;

/// Demo modes selectable from the command line.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Demo {
    /// Play against the computer with a single ship each.
    Short,
    /// Watch the computer play against itself.
    Auto,
}

fn main() -> io::Result<()> {
    logging::init();
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Play a game of battleship against the computer.")
        .arg(
            Arg::with_name("demo")
                .short("d")
                .long("demo")
                .value_name("DEMO")
                .help("play a shortened game, or watch the computer play itself")
                .takes_value(true)
                .possible_values(&["short", "auto", "apagon"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("first_player")
                .short("f")
                .long("first_player")
                .alias("first")
                .value_name("FIRST_PLAYER")
                .help("pre-specify which player goes first")
                .takes_value(true)
                .possible_values(&["human", "me", "computer", "bot", "random", "rand"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed the computer's choices to replay a game")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("size")
                .long("size")
                .value_name("SIZE")
                .help("side length of the board, 2 to 26")
                .takes_value(true),
        )
        .get_matches();

    let demo = matches
        .value_of("demo")
        .map(|demo| match demo.to_ascii_lowercase().as_str() {
            "short" => Demo::Short,
            _ => Demo::Auto,
        });
    let seed = if matches.is_present("seed") {
        Some(value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit()))
    } else if demo.is_some() {
        Some(DEMO_SEED)
    } else {
        None
    };
    let size = if matches.is_present("size") {
        value_t!(matches, "size", usize).unwrap_or_else(|e| e.exit())
    } else {
        DEFAULT_BOARD_SIZE
    };

    let mut fleet = Fleet::default();
    if demo == Some(Demo::Short) {
        fleet = fleet.truncated(1);
    }
    let config = GameConfig::new(size, fleet)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    print_header(demo);

    let computer = Participant::new("Computer", Automated::new(fork(&mut rng)?), &config);
    let computer = match decided(computer)? {
        Some(computer) => computer,
        None => return Ok(()),
    };

    let (human, first) = if demo == Some(Demo::Auto) {
        let human = Participant::new("Fake Human", Automated::new(fork(&mut rng)?), &config);
        let first = choose_first(&matches).unwrap_or(FirstTurn::Random);
        (human, first)
    } else {
        let mut input = InputReader::new(BufReader::new(io::stdin()));
        let name = match input.read_input("What should I call you?", |name| {
            if name.is_empty() {
                None
            } else {
                Some(name.to_string())
            }
        })? {
            Some(name) => name,
            None => return Ok(()),
        };
        println!("\n\tHi {}!\n", name);

        let first = match choose_first(&matches) {
            Some(first) => first,
            None => match ask_first(&mut input, &name)? {
                Some(first) => first,
                None => return Ok(()),
            },
        };

        println!("Using the row numbers and column letters, tell me where you want to place each of your ships.");
        println!("For instance, to place a ship of size 4 horizontally on the top left corner, type: 1A-1D\n");
        print_lines(&pretty_board("Your board:", &BoardSetup::new(size).render()));
        println!();
        let human = Participant::new(name, Driven::new(Console::new(input)), &config);
        (human, first)
    };
    let human = match decided(human)? {
        Some(human) => human,
        None => return Ok(()),
    };

    let mut game = Game::with_first_turn(human, computer, first, &mut rng)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    println!();
    print_boards(&game, Player::P1);

    let winner = match game.run(&mut Commentary { viewer: Player::P1 }) {
        Ok(winner) => winner,
        Err(GameError::Decision {
            source: DecisionError::InputClosed,
            ..
        }) => {
            println!();
            return Ok(());
        }
        Err(err) => return Err(io::Error::new(io::ErrorKind::Other, err)),
    };

    let human = game.participant(Player::P1);
    let computer = game.participant(Player::P2);
    match (human.kind(), winner) {
        (ParticipantKind::Driven, Player::P1) => {
            println!("\tCongratulations {}! You won!", human.name())
        }
        (ParticipantKind::Driven, Player::P2) => {
            println!("\tSorry {}, {} won this time.", human.name(), computer.name())
        }
        (ParticipantKind::Automated, winner) => println!(
            "\t{} won after {} shots.",
            game.participant(winner).name(),
            game.shots(winner)
        ),
    }
    Ok(())
}

/// Split off an independent random source for an automated participant, so seeded
/// games replay the same way.
fn fork(rng: &mut StdRng) -> io::Result<StdRng> {
    StdRng::from_rng(rng).map_err(|err| io::Error::new(io::ErrorKind::Other, err))
}

/// Unwrap the result of a participant's decision. Returns `None` if the player closed
/// the input, which ends the program quietly.
fn decided<T>(result: Result<T, DecisionError>) -> io::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(DecisionError::InputClosed) => {
            println!();
            Ok(None)
        }
        Err(DecisionError::Io(err)) => Err(err),
        Err(err) => Err(io::Error::new(io::ErrorKind::Other, err)),
    }
}

/// Which player goes first, if given on the command line. The human is always `P1`.
fn choose_first(matches: &ArgMatches) -> Option<FirstTurn> {
    matches
        .value_of("first_player")
        .map(|choice| match choice.to_ascii_lowercase().as_str() {
            "human" | "me" => FirstTurn::Player(Player::P1),
            "computer" | "bot" => FirstTurn::Player(Player::P2),
            _ => FirstTurn::Random,
        })
}

/// Ask the human whether they want to go first.
fn ask_first<B: BufRead>(input: &mut InputReader<B>, name: &str) -> io::Result<Option<FirstTurn>> {
    let prompt = format!("{} would you like to go first? [y/n]", name);
    let first = input.read_input_lower(&prompt, |answer| {
        Some(match answer {
            "y" | "yes" | "1" | "first" => Player::P1,
            _ => Player::P2,
        })
    })?;
    if first == Some(Player::P2) {
        println!("Computer will go first since you did not type \"y\".\n");
    }
    Ok(first.map(FirstTurn::Player))
}

fn print_header(demo: Option<Demo>) {
    let title = "# # #  THE AMAZING BATTLESHIP GAME  # # #";
    let h_border = "# ".repeat((title.len() + 1) / 2);
    let v_border = format!("# # #{}# # #", " ".repeat(title.len() - 10));
    println!("\n{}\n{}\n{}\n{}\n{}\n", h_border, v_border, title, v_border, h_border);
    if demo.is_some() {
        println!("{:^width$}\n", "# # NOTE: You are in demo mode. # #", width = title.len());
    }
}

/// Observer printing every shot followed by both boards.
struct Commentary {
    /// Player whose own board is shown revealed.
    viewer: Player,
}

impl Observer for Commentary {
    fn shot(&mut self, game: &Game, report: &ShotReport) {
        println!(
            "\n{} shot at {}: {}",
            game.participant(report.shooter).name(),
            report.target,
            if report.outcome.is_hit() { "HIT" } else { "Miss" }
        );
        print_boards(game, self.viewer);
    }
}

/// Print the viewer's own board next to what they know about the opponent's.
fn print_boards(game: &Game, viewer: Player) {
    let own = pretty_board("Your board:", &game.participant(viewer).board().render(true));
    let other = pretty_board(
        "Opponent:",
        &game.participant(viewer.opponent()).board().guess_view().render(),
    );
    for (left, right) in own.iter().zip(&other) {
        println!("{}    {}", left, right);
    }
    println!();
}

/// Lay out a board as lines of text: a centered title, the column letters and one line
/// per row.
fn pretty_board(title: &str, rows: &[Vec<Cell>]) -> Vec<String> {
    let size = rows.len();
    let width = size * 2 + 2;
    let mut lines = vec![format!("{:^width$}", title, width = width)];
    let mut header = String::from("  ");
    for col in 0..size {
        header.push(' ');
        header.push_str(&column_name(col));
    }
    lines.push(header);
    for (i, row) in rows.iter().enumerate() {
        let mut line = format!("{:>2}", i + 1);
        for cell in row {
            line.push(' ');
            line.push(cell.symbol());
        }
        lines.push(line);
    }
    lines
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

/// [`Operator`] reading the human's decisions from the console.
struct Console<B> {
    input: InputReader<B>,
}

impl<B: BufRead> Console<B> {
    fn new(input: InputReader<B>) -> Self {
        Self { input }
    }
}

impl<B: BufRead> Operator for Console<B> {
    fn read_line(&mut self, request: Request) -> io::Result<Option<String>> {
        match request {
            Request::Placement { length, .. } => {
                self.input.read_line(&format!("Ship of size {}:", length))
            }
            Request::Target { .. } => self.input.read_line(
                "Where would you like to shoot?\n(Provide the row number and the column letter. Ex: 1A):",
            ),
        }
    }

    fn rejected(&mut self, error: InputError) {
        println!("Please try again, {}.", error);
    }

    fn placed(&mut self, setup: &BoardSetup, _placement: &Placement) {
        println!();
        print_lines(&pretty_board("Your board:", &setup.render()));
        println!();
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker. Returns `None` at the end of input.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            if !self.read_input_inner(prompt)? {
                return Ok(None);
            }
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(Some(val));
            }
        }
    }

    /// Repeatedly tries to read input until the input checker returns `Some`. Returns
    /// `None` at the end of input.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            if !self.read_input_inner(prompt)? {
                return Ok(None);
            }
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(Some(val));
            }
        }
    }

    /// Read a single trimmed line. Returns `None` at the end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if self.read_input_inner(prompt)? {
            Ok(Some(self.buf.trim().to_string()))
        } else {
            Ok(None)
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line. Returns
    /// false at the end of input.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<bool> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        Ok(self.read.read_line(&mut self.buf)? != 0)
    }
}
