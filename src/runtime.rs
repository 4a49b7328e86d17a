// Runtime module - executes store commands against the backend
//
// Each command runs on its own tokio task so a slow endpoint never blocks the
// others. Answers come back over a bounded channel as completions, tagged
// with the ticket of the command that produced them. Ordering is not
// preserved; the store sorts that out.

use crate::api::CrmBackend;
use crate::store::{Command, Completion, Reply, Request};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Completion channel capacity; senders wait when the UI falls behind
pub const COMPLETION_BUFFER: usize = 256;

/// Spawns commands and forwards their completions to the event loop
#[derive(Clone)]
pub struct Executor {
    backend: Arc<dyn CrmBackend>,
    completions: mpsc::Sender<Completion>,
}

impl Executor {
    pub fn new(backend: Arc<dyn CrmBackend>, completions: mpsc::Sender<Completion>) -> Self {
        Self {
            backend,
            completions,
        }
    }

    /// Run every command concurrently
    pub fn spawn_all(&self, commands: Vec<Command>) {
        for command in commands {
            self.spawn(command);
        }
    }

    pub fn spawn(&self, command: Command) {
        let backend = self.backend.clone();
        let tx = self.completions.clone();
        tokio::spawn(async move {
            let label = command.request.label();
            let completion = execute(backend.as_ref(), command).await;
            if tx.send(completion).await.is_err() {
                // Receiver gone: the UI is shutting down
                tracing::debug!(request = %label, "Completion dropped, event loop closed");
            }
        });
    }
}

/// Perform one command and wrap the result in a completion
pub async fn execute(backend: &dyn CrmBackend, command: Command) -> Completion {
    let Command {
        ticket,
        token,
        request,
    } = command;
    let token = token.unwrap_or_default();
    let started = std::time::Instant::now();
    let label = request.label();

    let reply = match request {
        Request::Login { username, password } => {
            Reply::Login(backend.login(&username, &password).await)
        }
        Request::ListCustomers => Reply::Customers(backend.list_customers(&token).await),
        Request::GetCustomer(id) => Reply::Customer(id, backend.get_customer(&token, id).await),
        Request::ListInteractions(id) => {
            Reply::Interactions(id, backend.list_interactions(&token, id).await)
        }
        Request::GetRecommendations(id) => {
            Reply::Recommendations(id, backend.recommendations(&token, id).await)
        }
        Request::GetAnalytics => Reply::Analytics(backend.interaction_analytics(&token).await),
        Request::CreateCustomer(body) => {
            Reply::CustomerCreated(backend.create_customer(&token, &body).await)
        }
        Request::CreateInteraction(id, body) => {
            Reply::InteractionCreated(id, backend.add_interaction(&token, id, &body).await)
        }
        Request::SendEmail(id) => Reply::EmailSent(id, backend.send_email(&token, id).await),
    };

    tracing::debug!(
        seq = ticket.seq,
        request = %label,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Request finished"
    );

    Completion { ticket, reply }
}
