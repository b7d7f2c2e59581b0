//! Battle events rendered as terminal lines

use crossterm::style::{StyledContent, Stylize};

use crate::combat::{BattleEvent, EffectKind, ItemEffect};

/// Colour family of a narration line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Good,
    Highlight,
    Warning,
    Danger,
}

/// One line of narration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub tone: Tone,
}

impl Line {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn styled(&self) -> StyledContent<&str> {
        let text = self.text.as_str();
        match self.tone {
            Tone::Plain => text.stylize(),
            Tone::Good => text.green(),
            Tone::Highlight => text.cyan(),
            Tone::Warning => text.yellow(),
            Tone::Danger => text.red(),
        }
    }
}

/// Narration for an event; `None` for events the player need not see
pub fn narrate(event: &BattleEvent) -> Option<Line> {
    let line = match event {
        BattleEvent::EncounterStarted { enemy, hp, hp_max, boss } => {
            if *boss {
                Line::new(
                    format!(
                        "!!! ALERT: {} DETECTED !!! (HP {}/{})",
                        enemy.to_uppercase(),
                        hp,
                        hp_max
                    ),
                    Tone::Danger,
                )
            } else {
                Line::new(
                    format!(">>> Engaging: {} (HP {}/{})", enemy, hp, hp_max),
                    Tone::Warning,
                )
            }
        }
        BattleEvent::ActionRejected { reason } => {
            Line::new(format!("Rejected: {}.", reason), Tone::Plain)
        }
        BattleEvent::PlayerAttacked { damage, crit: true } => Line::new(
            format!("CRITICAL! You blew open a vulnerability for {} damage.", damage),
            Tone::Warning,
        ),
        BattleEvent::PlayerAttacked { damage, crit: false } => {
            Line::new(format!("Your exploit dealt {} damage.", damage), Tone::Plain)
        }
        BattleEvent::Fortified { defense } => Line::new(
            format!("You harden your personal firewall (defense {} this round).", defense),
            Tone::Plain,
        ),
        BattleEvent::ItemUsed { effect, .. } => match effect {
            ItemEffect::Healed(hp) => {
                Line::new(format!("Patch applied. Recovered {} HP.", hp), Tone::Good)
            }
            ItemEffect::Overclocked(bonus) => Line::new(
                format!("Overclock engaged: +{} attack for 3 rounds. Watch the heat.", bonus),
                Tone::Highlight,
            ),
            ItemEffect::ProxyArmed => Line::new(
                "Proxy armed: your next flee attempt gets +25% chance.",
                Tone::Highlight,
            ),
        },
        BattleEvent::FleeFailed => {
            Line::new("Escape failed! The system locked your route.", Tone::Danger)
        }
        BattleEvent::Escaped => Line::new("Escape successful!", Tone::Highlight),
        BattleEvent::EnemyAttacked { enemy, damage, crit: true } => Line::new(
            format!("{} landed a critical strike for {} damage!", enemy, damage),
            Tone::Danger,
        ),
        BattleEvent::EnemyAttacked { enemy, damage, crit: false } => {
            Line::new(format!("{} attacked for {} damage.", enemy, damage), Tone::Plain)
        }
        BattleEvent::EffectExpired(EffectKind::Overclock) => {
            Line::new("Overclock cooled down.", Tone::Plain)
        }
        BattleEvent::EffectExpired(EffectKind::Fortify) => return None,
        BattleEvent::EnemyDefeated { enemy, xp_reward } => Line::new(
            format!("{} taken down! XP gained: {}", enemy, xp_reward),
            Tone::Good,
        ),
        BattleEvent::PlayerDefeated => Line::new(
            "You were disconnected... your avatar is lost in the Neon Grid.",
            Tone::Danger,
        ),
        BattleEvent::LevelUp { level } => Line::new(
            format!("~ LEVEL UP! You are now level {}. Stats increased, HP restored.", level),
            Tone::Highlight,
        ),
        BattleEvent::ItemFound(item) => {
            Line::new(format!("You scavenged an item: {}", item), Tone::Warning)
        }
    };
    Some(line)
}
