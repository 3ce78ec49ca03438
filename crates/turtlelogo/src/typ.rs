/// A primitive instruction for the turtle.
///
/// Angles are in degrees. Turning right is clockwise on the screen.
#[derive(Debug, Clone, PartialEq)]
pub enum TurtleCmd {
    Forward(f64),
    Back(f64),
    Right(f64),
    Left(f64),
    SetHeading(f64),
    PenUp,
    PenDown,
    /// Go back to the origin, facing heading 0, with the pen down.
    Reset,
    /// Fill the whole drawing with a colour. The colour is whatever word the script supplied.
    Background(String),
    /// Ask the host to keep a copy of the drawing as it is right now.
    Save,
}

/// Something that can follow turtle commands.
///
/// The interpreter never looks at the turtle's state, so there's nothing to return.
pub trait Turtle {
    fn turtle_do(&mut self, cmd: TurtleCmd);
}

/// A turtle that just writes down what it was told to do.
impl Turtle for Vec<TurtleCmd> {
    fn turtle_do(&mut self, cmd: TurtleCmd) {
        self.push(cmd);
    }
}

impl<T: Turtle + ?Sized> Turtle for &mut T {
    fn turtle_do(&mut self, cmd: TurtleCmd) {
        (**self).turtle_do(cmd)
    }
}

impl std::fmt::Display for TurtleCmd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurtleCmd::Forward(x) => write!(f, "forward {x}"),
            TurtleCmd::Back(x) => write!(f, "back {x}"),
            TurtleCmd::Right(x) => write!(f, "right {x}"),
            TurtleCmd::Left(x) => write!(f, "left {x}"),
            TurtleCmd::SetHeading(x) => write!(f, "setheading {x}"),
            TurtleCmd::PenUp => f.write_str("penup"),
            TurtleCmd::PenDown => f.write_str("pendown"),
            TurtleCmd::Reset => f.write_str("home"),
            TurtleCmd::Background(c) => write!(f, "bckgr {c}"),
            TurtleCmd::Save => f.write_str("save"),
        }
    }
}

/// Why the interpreter stepped over a token instead of running it.
///
/// None of these stop a run: they're collected in the run's report so that a host can show
/// them if it wants to.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Skip {
    #[error("I don't know how to {token}")]
    UnknownCommand { token: String },
    #[error("not enough inputs to {cmd}")]
    MissingArg { cmd: String },
    #[error("{cmd} doesn't like {arg} as input")]
    BadArg { cmd: String, arg: String },
    #[error("repeat doesn't like {token} as a count")]
    BadCount { token: String },
    #[error("repeat needs a [ after its count")]
    MissingBody,
    #[error("{name} is already a primitive")]
    ShadowsBuiltin { name: String },
    #[error("{name} can't be used as a procedure name")]
    ReservedName { name: String },
    #[error("{name} is already defined")]
    Redefined { name: String },
    #[error("nesting too deep at {token}")]
    DepthLimit { token: String },
}
