use super::actions::{Action, RequestSeq};
use crate::backend::TriviaBackend;
use crate::trivia::{Draft, QuestionId, QuestionQuery};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs backend requests in the background and reports each outcome as an
/// [`Action`] on the channel returned by [`TaskManager::new`].
///
/// Requests are never aborted once spawned: a superseded search still runs to
/// completion and its late result is filtered by the list view.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn a request whose future resolves to the action to report
    pub fn spawn_request<F, Fut>(&mut self, description: String, request: F) -> TaskId
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Action> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let handle = tokio::spawn(async move {
            let action = request().await;
            // The receiver is gone only when the app is shutting down
            let _ = action_sender.send(action);
        });

        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Load the category directory
    pub fn spawn_category_load(&mut self, backend: Arc<dyn TriviaBackend>) -> TaskId {
        self.spawn_request("Load categories".to_string(), move || async move {
            match backend.fetch_categories().await {
                Ok(categories) => Action::CategoriesLoaded(categories),
                Err(e) => Action::CategoriesFailed(e.to_string()),
            }
        })
    }

    /// Fetch a list or search page tagged with `seq`
    pub fn spawn_question_fetch(
        &mut self,
        backend: Arc<dyn TriviaBackend>,
        seq: RequestSeq,
        query: QuestionQuery,
    ) -> TaskId {
        let description = format!("Fetch #{}: {}", seq, query.describe());
        self.spawn_request(description, move || async move {
            match backend.fetch_questions(&query).await {
                Ok(page) => Action::QuestionsLoaded { seq, page },
                Err(e) => Action::QuestionsFailed {
                    seq,
                    error: e.to_string(),
                },
            }
        })
    }

    pub fn spawn_question_delete(&mut self, backend: Arc<dyn TriviaBackend>, id: QuestionId) -> TaskId {
        self.spawn_request(format!("Delete question {}", id), move || async move {
            match backend.delete_question(id).await {
                Ok(()) => Action::QuestionDeleted(id),
                Err(e) => Action::DeleteFailed {
                    id,
                    error: e.to_string(),
                },
            }
        })
    }

    pub fn spawn_question_submit(&mut self, backend: Arc<dyn TriviaBackend>, draft: Draft) -> TaskId {
        self.spawn_request("Add question".to_string(), move || async move {
            match backend.create_question(&draft).await {
                Ok(()) => Action::QuestionAdded,
                Err(e) => Action::AddFailed(e.to_string()),
            }
        })
    }

    /// Forget tasks whose result has already been sent, returning their ids
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();

        for task_id in &finished {
            if let Some(task) = self.tasks.remove(task_id) {
                log::debug!("{} finished after {:?}", task.description, task.started_at.elapsed());
            }
        }

        finished
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Descriptions of in-flight requests, oldest first
    pub fn pending_descriptions(&self) -> Vec<String> {
        let mut tasks: Vec<&BackgroundTask> = self.tasks.values().collect();
        tasks.sort_by_key(|task| task.id);
        tasks.iter().map(|task| task.description.clone()).collect()
    }
}
