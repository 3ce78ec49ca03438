use crate::{
    parse::{self, Token},
    proc::{Action, Commands, Procedures},
    typ::{Skip, Turtle, TurtleCmd},
};

/// The kind of stretch of tokens an [`Env::exec`] call is running.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Frame {
    /// The script itself. Runs until the tokens run out.
    Top,
    /// A procedure body. Stops at the first `end`.
    Procedure,
    /// One iteration of a `repeat` body. Stops at the first `end` or at its closing `]`.
    Loop,
}

impl Frame {
    pub fn stops_at_end(self) -> bool {
        self != Frame::Top
    }
}

/// Limits that a host can put on a run. Neither is needed for a well-behaved script.
#[derive(Clone, Debug)]
pub struct Options {
    /// How many procedure calls and loop bodies may be nested inside each other. A call or
    /// loop that would go deeper is skipped.
    pub max_depth: usize,
    /// Stop the whole run after executing this many tokens.
    pub max_steps: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            max_depth: 512,
            max_steps: None,
        }
    }
}

/// What happened during a run, apart from the turtle's drawing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    /// Every token that was stepped over, in the order they were met.
    pub skipped: Vec<Skip>,
    /// Names of the procedures that got defined.
    pub procedures: Vec<String>,
    /// Whether the run was cut short by [`Options::max_steps`].
    pub truncated: bool,
}

/// The state of one run of a script.
///
/// The only mutable state that outlives a single token is the procedure table and the turtle;
/// the cursor and the "skipping a definition" flag belong to each [`Env::exec`] call.
pub struct Env<'a, T: Turtle + ?Sized> {
    tokens: &'a [Token],
    commands: &'a Commands,
    procs: Procedures,
    turtle: &'a mut T,
    options: Options,
    depth: usize,
    steps: u64,
    skipped: Vec<Skip>,
    truncated: bool,
}

impl<'a, T: Turtle + ?Sized> Env<'a, T> {
    pub fn new(tokens: &'a [Token], turtle: &'a mut T) -> Self {
        Env::with_options(tokens, turtle, Commands::standard(), Options::default())
    }

    pub fn with_options(
        tokens: &'a [Token],
        turtle: &'a mut T,
        commands: &'a Commands,
        options: Options,
    ) -> Self {
        Env {
            tokens,
            commands,
            procs: Procedures::default(),
            turtle,
            options,
            depth: 0,
            steps: 0,
            skipped: Vec::new(),
            truncated: false,
        }
    }

    pub fn into_report(self) -> Report {
        let mut procedures: Vec<String> = self.procs.names().map(str::to_owned).collect();
        procedures.sort();
        Report {
            skipped: self.skipped,
            procedures,
            truncated: self.truncated,
        }
    }

    fn token(&self, index: usize) -> Option<&'a Token> {
        self.tokens.get(index)
    }

    fn out_of_steps(&mut self) -> bool {
        if let Some(max) = self.options.max_steps {
            if self.steps >= max {
                self.truncated = true;
                return true;
            }
        }
        false
    }

    /// Run tokens starting at `start` until the frame is done.
    ///
    /// Returns the index at which we stopped: the `end` or `]` that closed the frame, or the
    /// number of tokens if we ran off the end. Nothing in the script can make this fail; tokens
    /// that don't make sense are recorded as skipped and stepped over.
    pub fn exec(&mut self, start: usize, frame: Frame) -> usize {
        let tokens = self.tokens;
        let mut index = start;
        // Set while we're stepping over the body of a `to` definition.
        let mut suppressed = false;

        while index < tokens.len() {
            if self.out_of_steps() {
                return tokens.len();
            }
            let token = &tokens[index];

            if token == "end" {
                if frame.stops_at_end() {
                    return index;
                }
                suppressed = false;
            } else if suppressed {
                index += 1;
                continue;
            } else if token == "to" {
                suppressed = true;
                if index + 2 < tokens.len() {
                    index += 1;
                    let name = &tokens[index];
                    if let Err(skip) = self.procs.define(name, index + 1, self.commands) {
                        self.skipped.push(skip);
                    }
                }
            } else if token == "save" {
                self.steps += 1;
                self.turtle.turtle_do(TurtleCmd::Save);
            } else if token == "bckgr" {
                self.steps += 1;
                if let Some(color) = self.token(index + 1) {
                    index += 1;
                    self.turtle
                        .turtle_do(TurtleCmd::Background(color.to_string()));
                }
            } else if token == "repeat" {
                self.steps += 1;
                index = self.repeat(index);
            } else if let Some(body) = self.procs.lookup(token.as_str()) {
                self.steps += 1;
                self.nested(token, body, Frame::Procedure);
            } else if token == "]" {
                if frame == Frame::Loop {
                    return index;
                }
            } else if token != "[" {
                self.steps += 1;
                match self.dispatch(index) {
                    Ok(consumed) => index += consumed,
                    Err(skip) => self.skipped.push(skip),
                }
            }
            index += 1;
        }
        index.min(tokens.len())
    }

    /// Run a nested frame, unless we're already nested too deeply.
    fn nested(&mut self, token: &Token, start: usize, frame: Frame) -> Option<usize> {
        if self.depth >= self.options.max_depth {
            self.skipped.push(Skip::DepthLimit {
                token: token.to_string(),
            });
            return None;
        }
        self.depth += 1;
        let stop = self.exec(start, frame);
        self.depth -= 1;
        Some(stop)
    }

    /// Handle `repeat <count> [ ... ]`, where `index` points at the `repeat`.
    ///
    /// Returns the index of the last token that belongs to the loop.
    fn repeat(&mut self, mut index: usize) -> usize {
        index += 1;
        let count = match self.token(index) {
            Some(tok) => {
                let count = parse::count(tok.as_str());
                if count.is_none() {
                    self.skipped.push(Skip::BadCount {
                        token: tok.to_string(),
                    });
                }
                count
            }
            None => {
                self.skipped.push(Skip::MissingBody);
                return index;
            }
        };

        let Some(open) = self.token(index + 1).filter(|t| *t == "[") else {
            self.skipped.push(Skip::MissingBody);
            return index;
        };
        index += 1;
        let body = index + 1;

        let count = count.unwrap_or(0);
        if count <= 0 {
            return matching_close(self.tokens, body);
        }
        for _ in 0..count {
            if self.out_of_steps() {
                return self.tokens.len();
            }
            self.steps += 1;
            match self.nested(open, body, Frame::Loop) {
                Some(stop) => index = stop,
                None => return matching_close(self.tokens, body),
            }
        }
        index
    }

    /// Run the primitive command at `index`.
    ///
    /// On success, returns the number of tokens consumed after the command itself.
    fn dispatch(&mut self, index: usize) -> Result<usize, Skip> {
        let tokens = self.tokens;
        let token = &tokens[index];
        let Some(builtin) = self.commands.get(token.as_str()) else {
            return Err(Skip::UnknownCommand {
                token: token.to_string(),
            });
        };

        match builtin.action {
            Action::NoArg(f) => {
                self.turtle.turtle_do(f());
                Ok(0)
            }
            Action::Num(f) => {
                let arg = self.token(index + 1).ok_or_else(|| Skip::MissingArg {
                    cmd: token.to_string(),
                })?;
                let x = parse::num(arg).ok_or_else(|| Skip::BadArg {
                    cmd: token.to_string(),
                    arg: arg.to_string(),
                })?;
                self.turtle.turtle_do(f(x));
                Ok(1)
            }
        }
    }
}

/// Find the `]` closing a body that starts at `body`, or the end of the tokens if it's never
/// closed.
fn matching_close(tokens: &[Token], body: usize) -> usize {
    let mut depth = 0usize;
    for (i, tok) in tokens.iter().enumerate().skip(body) {
        if tok == "[" {
            depth += 1;
        } else if tok == "]" {
            if depth == 0 {
                return i;
            }
            depth -= 1;
        }
    }
    tokens.len()
}

/// A tokenized script, ready to run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    tokens: Vec<Token>,
}

impl Program {
    pub fn parse(s: &str) -> Program {
        Program {
            tokens: parse::tokenize(s),
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Run the whole program with the standard commands and default limits.
    pub fn exec<T: Turtle + ?Sized>(&self, turtle: &mut T) -> Report {
        self.exec_with(turtle, Commands::standard(), Options::default())
    }

    /// Run the whole program.
    ///
    /// Every call starts from scratch: procedures defined by an earlier run are forgotten.
    pub fn exec_with<T: Turtle + ?Sized>(
        &self,
        turtle: &mut T,
        commands: &Commands,
        options: Options,
    ) -> Report {
        let mut env = Env::with_options(&self.tokens, turtle, commands, options);
        env.exec(0, Frame::Top);
        env.into_report()
    }
}
