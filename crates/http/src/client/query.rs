//! Question-answering API client methods

use super::{ClientError, QaClient};
use kbchat_core::{Answer, ChatAction, PendingQuery};
use tracing::debug;

impl QaClient {
    /// Create the GET request for a pending query
    pub fn request(&self, pending: &PendingQuery) -> reqwest::RequestBuilder {
        self.client
            .get(&self.endpoint)
            .query(&pending.query_params()[..])
    }

    /// Send a pending query and parse the answer
    pub async fn ask(&self, pending: &PendingQuery) -> Result<Answer, ClientError> {
        debug!(request = %pending.request, endpoint = %self.endpoint, "Sending query");
        let body = self.execute(self.request(pending)).await?;
        let answer = Answer::from_json(&body)?;
        debug!(
            request = %pending.request,
            citations = answer.citations.len(),
            "Received answer"
        );
        Ok(answer)
    }

    /// Send a pending query and wrap the outcome as its completion action
    pub async fn completion(&self, pending: &PendingQuery) -> ChatAction {
        let outcome = self.ask(pending).await.map_err(|e| e.to_string());
        ChatAction::Complete {
            request: pending.request,
            outcome,
        }
    }
}
