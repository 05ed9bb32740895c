// Scripted Prompter for controller tests.
//
// - Answers confirmations with a fixed reply.
// - Records every question and notice for inspection.

use crate::modules::catalog::ports::Prompter;
use tokio::sync::Mutex;

pub struct ScriptedPrompter {
    reply: bool,
    pub questions: Mutex<Vec<String>>,
    pub notices: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn accepting() -> Self {
        Self::replying(true)
    }

    pub fn declining() -> Self {
        Self::replying(false)
    }

    fn replying(reply: bool) -> Self {
        Self {
            reply,
            questions: Mutex::new(Vec::new()),
            notices: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl Prompter for ScriptedPrompter {
    async fn confirm(&self, question: &str) -> bool {
        self.questions.lock().await.push(question.to_string());
        self.reply
    }

    async fn notify(&self, message: &str) {
        self.notices.lock().await.push(message.to_string());
    }
}
