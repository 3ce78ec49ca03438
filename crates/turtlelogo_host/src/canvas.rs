use kurbo::{BezPath, Point, Vec2};
use svg::node::element::{Path, Rectangle};
use svg::Document;
use turtlelogo::{Turtle, TurtleCmd};

use crate::Config;

/// A turtle that draws lines.
///
/// The turtle starts in the middle of the canvas, which is also the origin of its coordinates,
/// facing heading 0 (to the right) with its pen down. The y axis points down, like on a screen,
/// so turning right is clockwise.
pub struct Canvas {
    config: Config,
    pos: Point,
    // In degrees.
    heading: f64,
    pen_down: bool,
    background: String,
    paths: Vec<BezPath>,
    // The line we're in the middle of drawing, if the pen is down and we've moved.
    current: Option<BezPath>,
    saved: Vec<Document>,
}

/// Turn a colour word from a script into something svg understands.
///
/// Numbers from 0 to 255 are shades of grey; anything else is passed through, so `red` and
/// `#ff8800` both work.
pub fn css_color(word: &str) -> String {
    match word.parse::<u8>() {
        Ok(v) => format!("rgb({v},{v},{v})"),
        Err(_) => word.to_owned(),
    }
}

impl Canvas {
    pub fn new(config: Config) -> Canvas {
        Canvas {
            background: config.background.clone(),
            config,
            pos: Point::ORIGIN,
            heading: 0.0,
            pen_down: true,
            paths: Vec::new(),
            current: None,
            saved: Vec::new(),
        }
    }

    pub fn position(&self) -> Point {
        self.pos
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    /// All the lines drawn so far, including the one in progress.
    pub fn paths(&self) -> impl Iterator<Item = &BezPath> {
        self.paths.iter().chain(self.current.iter())
    }

    /// Drawings requested by `save`, oldest first.
    pub fn saved(&self) -> &[Document] {
        &self.saved
    }

    fn finish_line(&mut self) {
        if let Some(path) = self.current.take() {
            if path.elements().len() > 1 {
                self.paths.push(path);
            }
        }
    }

    fn move_by(&mut self, dist: f64) {
        let dest = self.pos + Vec2::from_angle(self.heading.to_radians()) * dist;
        if self.pen_down {
            let pos = self.pos;
            self.current
                .get_or_insert_with(|| {
                    let mut path = BezPath::new();
                    path.move_to(pos);
                    path
                })
                .line_to(dest);
        }
        self.pos = dest;
    }

    /// The drawing as it is now.
    pub fn document(&self) -> Document {
        let (w, h) = (self.config.width, self.config.height);
        let bg = Rectangle::new()
            .set("x", -w / 2.0)
            .set("y", -h / 2.0)
            .set("width", w)
            .set("height", h)
            .set("fill", css_color(&self.background));

        let mut doc = Document::new()
            .set("viewBox", (-w / 2.0, -h / 2.0, w, h))
            .set("width", w)
            .set("height", h)
            .add(bg);
        for path in self.paths() {
            doc = doc.add(
                Path::new()
                    .set("fill", "none")
                    .set("stroke", self.config.stroke.as_str())
                    .set("stroke-width", self.config.stroke_width)
                    .set("stroke-linecap", "round")
                    .set("stroke-linejoin", "round")
                    .set("d", path.to_svg()),
            );
        }
        doc
    }
}

impl Turtle for Canvas {
    fn turtle_do(&mut self, cmd: TurtleCmd) {
        match cmd {
            TurtleCmd::Forward(dist) => self.move_by(dist),
            TurtleCmd::Back(dist) => self.move_by(-dist),
            TurtleCmd::Right(ang) => self.heading += ang,
            TurtleCmd::Left(ang) => self.heading -= ang,
            TurtleCmd::SetHeading(ang) => self.heading = ang,
            TurtleCmd::PenUp => {
                self.finish_line();
                self.pen_down = false;
            }
            TurtleCmd::PenDown => {
                self.pen_down = true;
            }
            TurtleCmd::Reset => {
                self.finish_line();
                self.pos = Point::ORIGIN;
                self.heading = 0.0;
                self.pen_down = true;
            }
            TurtleCmd::Background(color) => {
                // Painting the background covers up everything drawn so far.
                self.current = None;
                self.paths.clear();
                self.background = color;
            }
            TurtleCmd::Save => {
                self.saved.push(self.document());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    fn canvas() -> Canvas {
        Canvas::new(Config::default())
    }

    fn assert_near(p: Point, x: f64, y: f64) {
        assert!((p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9, "{p:?} != ({x}, {y})");
    }

    #[test]
    fn moves_and_turns() {
        let mut c = canvas();
        c.turtle_do(TurtleCmd::Forward(10.0));
        assert_near(c.position(), 10.0, 0.0);
        c.turtle_do(TurtleCmd::Right(90.0));
        c.turtle_do(TurtleCmd::Forward(5.0));
        // y points down, so a right turn from heading 0 goes down the screen.
        assert_near(c.position(), 10.0, 5.0);
        c.turtle_do(TurtleCmd::Left(180.0));
        c.turtle_do(TurtleCmd::Back(5.0));
        assert_near(c.position(), 10.0, 10.0);
        c.turtle_do(TurtleCmd::SetHeading(180.0));
        c.turtle_do(TurtleCmd::Forward(10.0));
        assert_near(c.position(), 0.0, 10.0);
    }

    #[test]
    fn pen_controls_lines() {
        let mut c = canvas();
        c.turtle_do(TurtleCmd::Forward(10.0));
        c.turtle_do(TurtleCmd::Forward(10.0));
        c.turtle_do(TurtleCmd::PenUp);
        c.turtle_do(TurtleCmd::Forward(10.0));
        c.turtle_do(TurtleCmd::PenDown);
        c.turtle_do(TurtleCmd::Forward(10.0));

        let paths: Vec<_> = c.paths().collect();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].elements().len(), 3);
        assert_eq!(
            paths[1].elements(),
            &[
                PathEl::MoveTo(Point::new(30.0, 0.0)),
                PathEl::LineTo(Point::new(40.0, 0.0))
            ]
        );
    }

    #[test]
    fn turning_in_place_draws_nothing() {
        let mut c = canvas();
        c.turtle_do(TurtleCmd::Right(90.0));
        c.turtle_do(TurtleCmd::PenUp);
        assert_eq!(c.paths().count(), 0);
    }

    #[test]
    fn reset() {
        let mut c = canvas();
        c.turtle_do(TurtleCmd::Forward(10.0));
        c.turtle_do(TurtleCmd::Right(30.0));
        c.turtle_do(TurtleCmd::PenUp);
        c.turtle_do(TurtleCmd::Reset);
        assert_near(c.position(), 0.0, 0.0);
        assert_eq!(c.heading(), 0.0);
        assert!(c.is_pen_down());
        // Going home doesn't erase anything.
        assert_eq!(c.paths().count(), 1);
    }

    #[test]
    fn background_covers_drawing() {
        let mut c = canvas();
        c.turtle_do(TurtleCmd::Forward(10.0));
        c.turtle_do(TurtleCmd::Background("red".to_owned()));
        assert_eq!(c.paths().count(), 0);
        assert_eq!(c.background(), "red");
        c.turtle_do(TurtleCmd::Forward(10.0));
        assert_eq!(c.paths().count(), 1);
    }

    #[test]
    fn save_snapshots() {
        let mut c = canvas();
        c.turtle_do(TurtleCmd::Forward(10.0));
        c.turtle_do(TurtleCmd::Save);
        c.turtle_do(TurtleCmd::Background("0".to_owned()));
        c.turtle_do(TurtleCmd::Save);
        assert_eq!(c.saved().len(), 2);
        assert!(c.saved()[0].to_string().contains("<path"));
        assert!(!c.saved()[1].to_string().contains("<path"));
    }

    #[test]
    fn colors() {
        assert_eq!(css_color("0"), "rgb(0,0,0)");
        assert_eq!(css_color("255"), "rgb(255,255,255)");
        assert_eq!(css_color("256"), "256");
        assert_eq!(css_color("teal"), "teal");
    }
}
