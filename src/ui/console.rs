//! Line-oriented terminal front end
//!
//! `ConsolePrompt` reads choices, `ConsoleNarrator` prints battle events.
//! Both are generic over their streams so tests can drive them with buffers.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use crossterm::style::Stylize;

use crate::combat::{Action, ActionProvider, BattleEvent, BattleView, EventSink};
use crate::entity::{ClassKind, ItemKind};
use crate::ui::narration::narrate;

/// Reads player decisions from a line stream
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
    closed: bool,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            closed: false,
        }
    }

    /// Whether the input stream has ended
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn say(&mut self, text: impl Display) {
        // a broken terminal has nowhere to report to
        let _ = writeln!(self.output, "{}", text);
    }

    /// Print `prompt` and read one trimmed line; `None` once input is closed
    pub fn ask(&mut self, prompt: &str) -> Option<String> {
        let _ = write!(self.output, "{}", prompt);
        let _ = self.output.flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                self.closed = true;
                None
            }
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                tracing::warn!("input error: {}", e);
                self.closed = true;
                None
            }
        }
    }

    /// Runner handle; empty input becomes `anon`
    pub fn ask_handle(&mut self) -> String {
        match self.ask("Choose your handle: ") {
            Some(handle) if !handle.is_empty() => handle,
            _ => "anon".to_string(),
        }
    }

    /// Class menu; re-asks until a listed class is picked
    pub fn ask_class(&mut self) -> ClassKind {
        self.say("Choose your netrunner specialization:".bold());
        for (i, class) in ClassKind::selectable().iter().enumerate() {
            self.say(format!("{}) {:<12} - {}", i + 1, class.to_string(), class.blurb()));
        }
        loop {
            let Some(choice) = self.ask("Choice (1-3): ") else {
                return ClassKind::Default;
            };
            match choice.parse::<ClassKind>() {
                Ok(class) if class != ClassKind::Default => return class,
                _ => self.say("Invalid choice."),
            }
        }
    }

    /// Continue/stop prompt between encounters
    pub fn ask_continue(&mut self) -> bool {
        self.say("\nKeep hacking or log off now?");
        self.say("1) Continue the run");
        self.say("2) Log off and save score");
        matches!(self.ask("Choice [1-2]: ").as_deref(), Some("1"))
    }

    fn item_menu(&mut self, view: &BattleView<'_>) -> Option<Action> {
        let inventory = view.player.inventory;
        if inventory.is_empty() {
            self.say("You have no items. Come back when you've scavenged some.");
            return None;
        }

        loop {
            self.say("\nItems:");
            let kinds = ItemKind::all();
            for (i, (kind, count)) in inventory.iter().enumerate() {
                self.say(format!("{}) {} x{}  ({})", i + 1, kind, count, kind.description()));
            }
            self.say(format!("{}) Back", kinds.len() + 1));

            let choice = self.ask("Use which? ")?;
            match choice.parse::<usize>() {
                Ok(n) if n == kinds.len() + 1 => return None,
                Ok(n) if (1..=kinds.len()).contains(&n) => {
                    return Some(Action::UseItem(kinds[n - 1]))
                }
                _ => self.say("Invalid input."),
            }
        }
    }

    fn show_status(&mut self, view: &BattleView<'_>) {
        let player = view.player;
        let enemy = view.enemy;
        self.say(
            format!(
                "\n{} (Lvl {}) - HP: {}/{}  |  XP: {}/{}",
                player.name(),
                player.level,
                player.actor.hp(),
                player.actor.hp_max,
                player.xp,
                player.xp_to_next
            )
            .bold(),
        );
        self.say(format!(
            "{} - HP: {}/{}",
            enemy.name(),
            enemy.actor.hp(),
            enemy.actor.hp_max
        ));
    }
}

impl<R: BufRead, W: Write> ActionProvider for ConsolePrompt<R, W> {
    fn choose_action(&mut self, view: BattleView<'_>) -> Action {
        self.show_status(&view);
        loop {
            self.say("Your options:".bold());
            self.say("1) Exploit (attack)");
            self.say("2) Fortify (temporary defense)");
            self.say("3) Use item");
            self.say("4) Flee");

            let Some(choice) = self.ask("Choose [1-4]: ") else {
                // closed input: make for the exit every round
                return Action::Flee;
            };

            if choice == "3" {
                match self.item_menu(&view) {
                    Some(action) => return action,
                    None if self.closed => return Action::Flee,
                    None => continue,
                }
            }

            match choice.parse::<Action>() {
                Ok(action) => return action,
                Err(_) => self.say("Invalid choice. Type 1-4."),
            }
        }
    }
}

/// Prints narration for battle events, optionally typewriter-style
pub struct ConsoleNarrator<W> {
    output: W,
    delay: Duration,
}

impl<W: Write> ConsoleNarrator<W> {
    pub fn new(output: W, delay: Duration) -> Self {
        Self { output, delay }
    }

    /// Write one line, one character at a time when a delay is set
    pub fn typewrite(&mut self, text: impl Display) {
        let text = text.to_string();
        if self.delay.is_zero() {
            let _ = writeln!(self.output, "{}", text);
            return;
        }
        for c in text.chars() {
            let _ = write!(self.output, "{}", c);
            let _ = self.output.flush();
            thread::sleep(self.delay);
        }
        let _ = writeln!(self.output);
    }
}

impl<W: Write> EventSink for ConsoleNarrator<W> {
    fn emit(&mut self, event: BattleEvent) {
        if let Some(line) = narrate(&event) {
            let styled = line.styled().to_string();
            self.typewrite(styled);
        }
    }
}
