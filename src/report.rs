//! Console sink for query results.

use crate::data::Show;

/// A query result, tagged by shape so one sink can print all of them.
pub enum Report<'a> {
    Show(&'a Show),
    Shows(Vec<&'a Show>),
    Line(String),
    Lines(Vec<String>),
    Int(i64),
    Float(f64),
}

const RULE_WIDTH: usize = 44;

/// Prints a banner with `title`, one line per element of `value` (a single
/// line for scalars), then a blank line.
pub fn report(title: &str, value: Report<'_>) {
    print!("{}", render(title, &value));
}

fn render(title: &str, value: &Report<'_>) -> String {
    let mut out = String::new();
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    match value {
        Report::Show(show) => {
            out.push_str(&show.to_string());
            out.push('\n');
        }
        Report::Shows(shows) => {
            for show in shows {
                out.push_str(&show.to_string());
                out.push('\n');
            }
        }
        Report::Line(line) => {
            out.push_str(line);
            out.push('\n');
        }
        Report::Lines(lines) => {
            for line in lines {
                out.push_str(line);
                out.push('\n');
            }
        }
        Report::Int(n) => {
            out.push_str(&n.to_string());
            out.push('\n');
        }
        Report::Float(x) => {
            out.push_str(&x.to_string());
            out.push('\n');
        }
    }

    out.push('\n');
    out
}

#[cfg(test)]
mod test_report {
    use super::*;

    #[test]
    fn test_banner_shape() {
        let block = render("Two Lines", &Report::Lines(vec!["a".into(), "b".into()]));
        let lines: Vec<&str> = block.split('\n').collect();

        assert_eq!(lines[0], "=".repeat(44));
        assert_eq!(lines[1], "Two Lines");
        assert_eq!(lines[2], "-".repeat(44));
        assert_eq!(lines[3], "a");
        assert_eq!(lines[4], "b");
        assert_eq!(lines[5], "");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_scalars_render_one_line() {
        let count = render("Count", &Report::Int(42));
        assert!(count.ends_with("42\n\n"));

        let mean = render("Mean", &Report::Float(8.25));
        assert!(mean.ends_with("8.25\n\n"));

        let text = render("Text", &Report::Line("A, B and C".into()));
        assert!(text.ends_with("A, B and C\n\n"));
    }
}
