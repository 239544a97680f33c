use super::{CourseView, MenuChoice};
use crate::commands::{CmdMessage, MessageLevel};
use crate::model::{Course, CourseDraft};
use chrono::{DateTime, Utc};
use colored::Colorize;
use std::io::{BufRead, Write};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
// Canonical hyphenated text form of a v4 UUID
const ID_WIDTH: usize = 36;

/// Production view over stdin/stdout. Generic over reader and writer so the
/// rendering can be exercised against buffers.
pub struct ConsoleView<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn write_line(&mut self, line: &str) {
        let _ = writeln!(self.output, "{}", line);
    }

    fn prompt(&mut self, label: &str) -> Option<String> {
        let _ = write!(self.output, "{}", label);
        let _ = self.output.flush();
        self.read_line()
    }

    /// None on EOF (closed stdin)
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

impl<R: BufRead, W: Write> CourseView for ConsoleView<R, W> {
    fn menu_choice(&mut self) -> MenuChoice {
        self.write_line("");
        self.write_line("==== Course Catalog ====");
        self.write_line("  1. Add course");
        self.write_line("  2. List courses");
        self.write_line("  3. Update course");
        self.write_line("  4. Delete course");
        self.write_line("  5. Exit");

        match self.prompt("Select an option: ") {
            // A closed stdin must not spin the loop on Unknown
            None => MenuChoice::Exit,
            Some(line) => line
                .trim()
                .parse::<i32>()
                .map(MenuChoice::from)
                .unwrap_or(MenuChoice::Unknown),
        }
    }

    fn course_draft(&mut self) -> CourseDraft {
        let name = self.prompt("Name: ").unwrap_or_default();
        let instructor = self.prompt("Instructor: ").unwrap_or_default();
        let credits = self
            .prompt("Credits: ")
            .and_then(|line| line.trim().parse::<i32>().ok())
            .unwrap_or(0);
        CourseDraft::new(name, instructor, credits)
    }

    fn course_id(&mut self) -> String {
        self.prompt("Course ID: ").unwrap_or_default()
    }

    fn render_courses(&mut self, courses: &[Course]) {
        if courses.is_empty() {
            self.write_line("No courses found.");
            return;
        }

        for course in courses {
            let credits_str = format!("{:>2} cr", course.credits);
            let time_ago = format_time_ago(course.updated_at);

            let label = match &course.instructor {
                Some(instructor) => format!("{} ({})", course.name, instructor),
                None => course.name.clone(),
            };

            let fixed_width = 2 + ID_WIDTH + 2 + credits_str.width() + 2 + TIME_WIDTH;
            let available = LINE_WIDTH.saturating_sub(fixed_width);
            let label_display = truncate_to_width(&label, available);
            let padding = available.saturating_sub(label_display.width());

            let line = format!(
                "  {}  {}{}{}  {}",
                course.id.to_string().dimmed(),
                label_display,
                " ".repeat(padding),
                credits_str,
                time_ago.dimmed()
            );
            self.write_line(&line);
        }
    }

    fn show_message(&mut self, message: &CmdMessage) {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        self.write_line(&line.to_string());
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
