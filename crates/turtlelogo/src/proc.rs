use std::{collections::HashMap, sync::OnceLock};

use crate::{
    parse::Token,
    typ::{Skip, TurtleCmd},
};

/// Words with a meaning of their own. They can't be commands or procedure names.
pub const KEYWORDS: &[&str] = &["to", "end", "repeat", "save", "bckgr"];

/// What a primitive does with its input.
#[derive(Clone, Copy, Debug)]
pub enum Action {
    /// Takes no input.
    NoArg(fn() -> TurtleCmd),
    /// Takes a single number.
    Num(fn(f64) -> TurtleCmd),
}

/// A primitive command: a name, and a declaration of the input it expects.
#[derive(Clone, Copy, Debug)]
pub struct Builtin {
    pub name: &'static str,
    pub action: Action,
}

impl Builtin {
    pub fn takes_argument(&self) -> bool {
        matches!(self.action, Action::Num(_))
    }

    pub fn num_args(&self) -> usize {
        match self.action {
            Action::NoArg(_) => 0,
            Action::Num(_) => 1,
        }
    }
}

pub static BUILTINS: &[Builtin] = &[
    Builtin {
        name: "forward",
        action: Action::Num(TurtleCmd::Forward),
    },
    Builtin {
        name: "fd",
        action: Action::Num(TurtleCmd::Forward),
    },
    Builtin {
        name: "back",
        action: Action::Num(TurtleCmd::Back),
    },
    Builtin {
        name: "backward",
        action: Action::Num(TurtleCmd::Back),
    },
    Builtin {
        name: "bk",
        action: Action::Num(TurtleCmd::Back),
    },
    Builtin {
        name: "right",
        action: Action::Num(TurtleCmd::Right),
    },
    Builtin {
        name: "rt",
        action: Action::Num(TurtleCmd::Right),
    },
    Builtin {
        name: "left",
        action: Action::Num(TurtleCmd::Left),
    },
    Builtin {
        name: "lt",
        action: Action::Num(TurtleCmd::Left),
    },
    Builtin {
        name: "setheading",
        action: Action::Num(TurtleCmd::SetHeading),
    },
    Builtin {
        name: "seth",
        action: Action::Num(TurtleCmd::SetHeading),
    },
    Builtin {
        name: "penup",
        action: Action::NoArg(|| TurtleCmd::PenUp),
    },
    Builtin {
        name: "pu",
        action: Action::NoArg(|| TurtleCmd::PenUp),
    },
    Builtin {
        name: "pendown",
        action: Action::NoArg(|| TurtleCmd::PenDown),
    },
    Builtin {
        name: "pd",
        action: Action::NoArg(|| TurtleCmd::PenDown),
    },
    Builtin {
        name: "home",
        action: Action::NoArg(|| TurtleCmd::Reset),
    },
];

/// The command table: primitive commands by name.
///
/// A table is fixed once it's built. Most callers want [`Commands::standard`].
#[derive(Clone, Debug)]
pub struct Commands {
    by_name: HashMap<&'static str, Builtin>,
}

impl Commands {
    pub fn new(builtins: &'static [Builtin]) -> Self {
        Commands {
            by_name: builtins.iter().map(|b| (b.name, *b)).collect(),
        }
    }

    /// The table built from [`BUILTINS`].
    pub fn standard() -> &'static Commands {
        static STANDARD: OnceLock<Commands> = OnceLock::new();
        STANDARD.get_or_init(|| Commands::new(BUILTINS))
    }

    pub fn get(&self, name: &str) -> Option<&Builtin> {
        self.by_name.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_name.keys().copied()
    }
}

/// User-defined procedures, by name.
///
/// A procedure is just the index of the first token of its body. It has no parameters and no
/// scope: calling it runs the tokens from there up to the next `end`.
#[derive(Debug, Default)]
pub struct Procedures {
    bodies: HashMap<String, usize>,
}

impl Procedures {
    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.bodies.get(name).copied()
    }

    /// Register `name` with its body starting at token `body`.
    ///
    /// Primitives win over procedures, and the first definition of a name wins over later ones.
    pub fn define(&mut self, name: &Token, body: usize, commands: &Commands) -> Result<(), Skip> {
        let reserved = name.is_bracket();
        let name = name.as_str();
        if commands.contains(name) {
            return Err(Skip::ShadowsBuiltin {
                name: name.to_owned(),
            });
        }
        if reserved || KEYWORDS.contains(&name) {
            return Err(Skip::ReservedName {
                name: name.to_owned(),
            });
        }
        if self.bodies.contains_key(name) {
            return Err(Skip::Redefined {
                name: name.to_owned(),
            });
        }
        self.bodies.insert(name.to_owned(), body);
        Ok(())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.bodies.keys().map(String::as_str)
    }
}
