//! Menu loop: a single "awaiting menu choice" state, terminal on Exit.
//! Every failure raised during a dispatch is converted to a displayed
//! message at the loop boundary and the loop continues.

use crate::api::RegistraApi;
use crate::commands::CmdMessage;
use crate::error::Result;
use crate::store::CourseStore;
use crate::view::{CourseView, MenuChoice};

pub struct Controller<S: CourseStore, V: CourseView> {
    api: RegistraApi<S>,
    view: V,
}

impl<S: CourseStore, V: CourseView> Controller<S, V> {
    pub fn new(api: RegistraApi<S>, view: V) -> Self {
        Self { api, view }
    }

    pub fn run(&mut self) {
        loop {
            let outcome = match self.view.menu_choice() {
                MenuChoice::Add => self.add_course(),
                MenuChoice::List => self.list_courses(),
                MenuChoice::Update => self.update_course(),
                MenuChoice::Delete => self.delete_course(),
                MenuChoice::Exit => {
                    self.view
                        .show_message(&CmdMessage::info("Leaving the course catalog."));
                    return;
                }
                MenuChoice::Unknown => {
                    self.view
                        .show_message(&CmdMessage::warning("Invalid option. Try again."));
                    Ok(())
                }
            };

            if let Err(e) = outcome {
                self.view
                    .show_message(&CmdMessage::error(format!("Error: {}", e)));
            }
        }
    }

    fn add_course(&mut self) -> Result<()> {
        let draft = self.view.course_draft();
        let result = self.api.add_course(draft)?;
        self.show_messages(result.messages);
        Ok(())
    }

    fn list_courses(&mut self) -> Result<()> {
        let result = self.api.list_courses()?;
        self.view.render_courses(&result.listed_courses);
        Ok(())
    }

    fn update_course(&mut self) -> Result<()> {
        let id = self.view.course_id();
        // Report an unknown id before prompting for replacement values
        self.api.get_course(&id)?;

        self.view.show_message(&CmdMessage::info(
            "Enter the new course data (leave blank to keep current):",
        ));
        let draft = self.view.course_draft();
        let result = self.api.update_course(&id, &draft)?;
        self.show_messages(result.messages);
        Ok(())
    }

    fn delete_course(&mut self) -> Result<()> {
        let id = self.view.course_id();
        let result = self.api.delete_course(&id)?;
        self.show_messages(result.messages);
        Ok(())
    }

    fn show_messages(&mut self, messages: Vec<CmdMessage>) {
        for message in messages {
            self.view.show_message(&message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CourseDraft;
    use crate::store::memory::fixtures::CatalogFixture;
    use crate::store::memory::InMemoryStore;
    use crate::view::scripted::ScriptedView;

    fn run_session(store: InMemoryStore, view: ScriptedView) -> (RegistraApi<InMemoryStore>, ScriptedView) {
        let mut controller = Controller::new(RegistraApi::new(store), view);
        controller.run();
        (controller.api, controller.view)
    }

    #[test]
    fn exit_prints_farewell() {
        let view = ScriptedView::new().with_choice(MenuChoice::Exit);
        let (_, view) = run_session(InMemoryStore::new(), view);
        assert_eq!(view.message_texts(), ["Leaving the course catalog."]);
    }

    #[test]
    fn add_then_list_shows_the_course() {
        let view = ScriptedView::new()
            .with_choice(MenuChoice::Add)
            .with_draft(CourseDraft::new("Algebra", "Lee", 3))
            .with_choice(MenuChoice::List)
            .with_choice(MenuChoice::Exit);

        let (_, view) = run_session(InMemoryStore::new(), view);
        assert!(view.messages[0].content.starts_with("Course added with ID:"));
        assert_eq!(view.rendered.len(), 1);
        assert_eq!(view.rendered[0][0].name, "Algebra");
    }

    #[test]
    fn invalid_option_is_reported_and_loop_continues() {
        let view = ScriptedView::new()
            .with_choice(MenuChoice::Unknown)
            .with_choice(MenuChoice::List)
            .with_choice(MenuChoice::Exit);

        let (_, view) = run_session(InMemoryStore::new(), view);
        assert_eq!(view.message_texts()[0], "Invalid option. Try again.");
        assert_eq!(view.rendered.len(), 1);
    }

    #[test]
    fn validation_failure_is_reported_and_loop_continues() {
        let view = ScriptedView::new()
            .with_choice(MenuChoice::Add)
            .with_draft(CourseDraft::new("", "Lee", 3))
            .with_choice(MenuChoice::Exit);

        let (_, view) = run_session(InMemoryStore::new(), view);
        let texts = view.message_texts();
        assert!(texts[0].starts_with("Error: "));
        assert!(texts[0].contains("name"));
        assert_eq!(*texts.last().unwrap(), "Leaving the course catalog.");
    }

    #[test]
    fn update_unknown_id_fails_before_prompting_for_fields() {
        let view = ScriptedView::new()
            .with_choice(MenuChoice::Update)
            .with_id("no-such-id")
            // No draft queued: the session must never ask for one
            .with_choice(MenuChoice::Exit);

        let fixture = CatalogFixture::new().with_course("Algebra", None, 3);
        let (api, view) = run_session(fixture.store, view);
        assert!(view.message_texts()[0].contains("No course found"));

        let listed = api.list_courses().unwrap().listed_courses;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Algebra");
    }

    #[test]
    fn update_merges_only_non_empty_fields() {
        let fixture = CatalogFixture::new().with_course("Algebra", Some("Lee"), 3);
        let id = fixture.ids[0].to_string();

        let view = ScriptedView::new()
            .with_choice(MenuChoice::Update)
            .with_id(&id)
            .with_draft(CourseDraft::new("", "Ng", 0))
            .with_choice(MenuChoice::Exit);

        let (api, view) = run_session(fixture.store, view);
        assert!(view
            .message_texts()
            .iter()
            .any(|t| t.contains("Course updated")));

        let course = &api.get_course(&id).unwrap().affected_courses[0];
        assert_eq!(course.name, "Algebra");
        assert_eq!(course.instructor.as_deref(), Some("Ng"));
        assert_eq!(course.credits, 3);
    }

    #[test]
    fn delete_known_then_unknown_id() {
        let fixture = CatalogFixture::new().with_course("Algebra", None, 3);
        let id = fixture.ids[0].to_string();

        let view = ScriptedView::new()
            .with_choice(MenuChoice::Delete)
            .with_id(&id)
            .with_choice(MenuChoice::Delete)
            .with_id(&id)
            .with_choice(MenuChoice::Exit);

        let (api, view) = run_session(fixture.store, view);
        let texts = view.message_texts();
        assert_eq!(texts[0], "Course deleted.");
        assert!(texts[1].contains("No course found"));
        assert!(api.list_courses().unwrap().listed_courses.is_empty());
    }
}
