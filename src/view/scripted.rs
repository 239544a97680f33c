use super::{CourseView, MenuChoice};
use crate::commands::CmdMessage;
use crate::model::{Course, CourseDraft};
use std::collections::VecDeque;

/// Scripted view double: queued inputs in, captured outputs out. Used by
/// controller tests to drive whole menu sessions without a terminal.
#[derive(Default)]
pub struct ScriptedView {
    choices: VecDeque<MenuChoice>,
    drafts: VecDeque<CourseDraft>,
    ids: VecDeque<String>,
    pub messages: Vec<CmdMessage>,
    pub rendered: Vec<Vec<Course>>,
}

impl ScriptedView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_choice(mut self, choice: MenuChoice) -> Self {
        self.choices.push_back(choice);
        self
    }

    pub fn with_draft(mut self, draft: CourseDraft) -> Self {
        self.drafts.push_back(draft);
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.ids.push_back(id.into());
        self
    }

    pub fn message_texts(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.content.as_str()).collect()
    }
}

impl CourseView for ScriptedView {
    fn menu_choice(&mut self) -> MenuChoice {
        // Script exhausted behaves like a closed stdin
        self.choices.pop_front().unwrap_or(MenuChoice::Exit)
    }

    fn course_draft(&mut self) -> CourseDraft {
        self.drafts.pop_front().unwrap_or_default()
    }

    fn course_id(&mut self) -> String {
        self.ids.pop_front().unwrap_or_default()
    }

    fn render_courses(&mut self, courses: &[Course]) {
        self.rendered.push(courses.to_vec());
    }

    fn show_message(&mut self, message: &CmdMessage) {
        self.messages.push(message.clone());
    }
}
