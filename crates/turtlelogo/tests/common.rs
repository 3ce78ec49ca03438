use std::path::Path;

use turtlelogo::{Program, Report, TurtleCmd};

#[derive(Default, Clone)]
pub struct TestCase {
    input: String,
    expected: String,
}

fn exec_one(s: &str) -> (Vec<TurtleCmd>, Report) {
    let mut turtle = Vec::new();
    let report = Program::parse(s).exec(&mut turtle);
    (turtle, report)
}

impl TestCase {
    fn exec(&self) {
        let (a, _) = exec_one(&self.input);
        let (b, _) = exec_one(&self.expected);
        assert_eq!(a, b, "input:\n{}", self.input);
    }

    fn exec_skips(&self) {
        let (_, report) = exec_one(&self.input);
        let skipped: Vec<String> = report.skipped.iter().map(|s| s.to_string()).collect();
        let expected: Vec<&str> = self
            .expected
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        assert_eq!(skipped, expected, "input:\n{}", self.input);
    }
}

pub fn read_tests(path: impl AsRef<Path>) -> Vec<TestCase> {
    let text = std::fs::read_to_string(path).unwrap();
    let mut ret = Vec::new();
    let mut in_input = true;
    let mut cur = TestCase::default();

    fn separator_line(line: &str, ch: u8) -> bool {
        line.trim().len() >= 2 && line.trim().bytes().all(|c| c == ch)
    }

    for line in text.split_inclusive('\n') {
        if in_input {
            if separator_line(line, b'-') {
                in_input = false;
            } else {
                cur.input += line;
            }
        } else {
            if separator_line(line, b'=') {
                in_input = true;
                ret.push(std::mem::take(&mut cur));
            } else {
                cur.expected += line;
            }
        }
    }
    ret
}

#[test]
fn text_tests() {
    let tests = read_tests("tests/basic.txt");
    assert!(!tests.is_empty());
    for test in tests {
        test.exec();
    }
}

#[test]
fn skip_reports() {
    let tests = read_tests("tests/skips.txt");
    assert!(!tests.is_empty());
    for test in tests {
        test.exec_skips();
    }
}

#[test]
fn malformed_scripts_run_to_the_end() {
    // Whatever comes before it, a trailing `fd 1` at the top level still runs.
    let prefixes = [
        "]", "[", "]]] [[[", "repeat x", "repeat 2 [ ] ]", "fd", "fd fd", "bk x", "foo bar",
        "to fd end", "end end", "repeat -1 [ fd 2 ]", "pu pd pd", "seth NaN", "to p ] end p",
        "repeat 2 [ end",
    ];
    for prefix in prefixes {
        let (out, _) = exec_one(&format!("{prefix} fd 1"));
        assert_eq!(out.last(), Some(&TurtleCmd::Forward(1.0)), "prefix {prefix:?}");
    }
}
