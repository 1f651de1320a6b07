//! Shared test doubles for navigation tests.
//!
//! Each integration test binary compiles this module separately and uses only
//! part of it.

use deeplink_router::navigation::Stage;

/// A screen handle: a name plus whether it is a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestScreen {
    pub name: String,
    pub container: bool,
}

#[allow(dead_code)]
pub fn screen(name: &str) -> TestScreen {
    TestScreen {
        name: name.to_string(),
        container: false,
    }
}

#[allow(dead_code)]
pub fn container_screen(name: &str) -> TestScreen {
    TestScreen {
        name: name.to_string(),
        container: true,
    }
}

/// Everything the navigator asked the stage to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Push {
        stack: usize,
        screen: String,
        animated: bool,
    },
    Embed {
        container: usize,
        screen: String,
    },
    Present {
        presenter: String,
        screen: String,
        animated: bool,
    },
}

/// A stage that records transitions instead of performing them.
#[derive(Debug, Default)]
pub struct RecordingStage {
    pub top_stack: Option<usize>,
    pub top_screen: Option<TestScreen>,
    pub events: Vec<Event>,
}

impl RecordingStage {
    /// A stage with a visible screen `root` inside navigation stack 1.
    #[allow(dead_code)]
    pub fn with_root() -> Self {
        Self {
            top_stack: Some(1),
            top_screen: Some(screen("root")),
            events: Vec::new(),
        }
    }
}

impl Stage for RecordingStage {
    type Screen = TestScreen;
    type Stack = usize;

    fn top_stack(&self) -> Option<usize> {
        self.top_stack
    }

    fn top_screen(&self) -> Option<TestScreen> {
        self.top_screen.clone()
    }

    fn is_container(&self, screen: &TestScreen) -> bool {
        screen.container
    }

    fn push(&mut self, stack: &usize, screen: TestScreen, animated: bool) {
        self.events.push(Event::Push {
            stack: *stack,
            screen: screen.name,
            animated,
        });
    }

    fn embed(&mut self, container: usize, screen: TestScreen) -> TestScreen {
        self.events.push(Event::Embed {
            container,
            screen: screen.name,
        });
        container_screen(&format!("container#{container}"))
    }

    fn present(&mut self, presenter: &TestScreen, screen: TestScreen, animated: bool) {
        self.events.push(Event::Present {
            presenter: presenter.name.clone(),
            screen: screen.name,
            animated,
        });
    }
}
