//! Shell configuration

/// Configuration for an interactive session
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Printed before each command is read
    pub prompt: String,

    /// Print the greeting when the session starts
    pub greeting: bool,
}

impl ShellConfig {
    pub fn new() -> Self {
        Self {
            prompt: "YT> ".to_string(),
            greeting: true,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_greeting(mut self, greeting: bool) -> Self {
        self.greeting = greeting;
        self
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::new()
    }
}
