use crate::ids::Ability;
use crate::sunit::Tag;
use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Target {
    None,
    Pos(Vec2),
    Tag(Tag),
}

/// Where commands go. Fire and forget: the effect only shows up in a later snapshot.
pub trait ActionSink {
    fn issue(&mut self, unit: Tag, ability: Ability, target: Target);
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub unit: Tag,
    pub ability: Ability,
    pub target: Target,
}

/// Collects commands of one tick in issue order, for hosts that send them in one batch.
#[derive(Debug, Default)]
pub struct CommandBuffer {
    pub commands: Vec<Command>,
}

impl CommandBuffer {
    pub fn drain(&mut self) -> impl Iterator<Item = Command> + '_ {
        self.commands.drain(..)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn of_ability(&self, ability: Ability) -> Vec<&Command> {
        self.commands
            .iter()
            .filter(|c| c.ability == ability)
            .collect()
    }

    pub fn for_unit(&self, unit: Tag) -> Vec<&Command> {
        self.commands.iter().filter(|c| c.unit == unit).collect()
    }
}

impl ActionSink for CommandBuffer {
    fn issue(&mut self, unit: Tag, ability: Ability, target: Target) {
        self.commands.push(Command {
            unit,
            ability,
            target,
        });
    }
}
