use super::{StoreError, TaskStore};
use crate::ClientConfig;
use crate::task::{NewTask, Task, TaskId, TaskUpdate};
use reqwest::{Client, Response, StatusCode};

/// [`TaskStore`] backed by the REST API at `<api_base_url>/tasks`.
#[derive(Debug, Clone)]
pub struct HttpTaskStore {
    client: Client,
    base_url: String,
}

impl HttpTaskStore {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    fn task_url(&self, id: TaskId) -> String {
        format!("{}/tasks/{}", self.base_url, id)
    }
}

fn ensure_success(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(StoreError::Status {
            status: status.as_u16(),
        })
    }
}

impl TaskStore for HttpTaskStore {
    #[tracing::instrument(skip(self))]
    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let response = self.client.get(self.tasks_url()).send().await?;
        let tasks: Vec<Task> = ensure_success(response)?.json().await?;
        tracing::debug!("Fetched {} tasks", tasks.len());
        Ok(tasks)
    }

    #[tracing::instrument(skip(self))]
    async fn get_task(&self, id: TaskId) -> Result<Task, StoreError> {
        let response = self.client.get(self.task_url(id)).send().await?;
        Ok(ensure_success(response)?.json().await?)
    }

    #[tracing::instrument(skip(self))]
    async fn create_task(&self, new_task: NewTask) -> Result<Task, StoreError> {
        let response = self
            .client
            .post(self.tasks_url())
            .json(&new_task)
            .send()
            .await?;
        let task: Task = ensure_success(response)?.json().await?;
        tracing::debug!("Store created task {}", task.id);
        Ok(task)
    }

    #[tracing::instrument(skip(self))]
    async fn update_task(&self, id: TaskId, update: TaskUpdate) -> Result<(), StoreError> {
        let response = self
            .client
            .put(self.task_url(id))
            .json(&update)
            .send()
            .await?;
        ensure_success(response)?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_task(&self, id: TaskId) -> Result<(), StoreError> {
        let response = self.client.delete(self.task_url(id)).send().await?;
        let status = response.status();
        // 204 carries no body; nothing else is read either way
        if status.is_success() || status == StatusCode::NO_CONTENT {
            Ok(())
        } else {
            Err(StoreError::Status {
                status: status.as_u16(),
            })
        }
    }
}
