// Store module - client-side session and data synchronization
//
// A single state container updated only through two entry points:
// - dispatch(Action): a user intent; returns the commands to execute
// - resolve(Completion): a backend answer; returns follow-up commands
//
// Every command carries a Ticket (session epoch, selection generation,
// sequence number). An answer is committed only if its ticket still matches
// the current session, the current selection (for per-customer resources)
// and the latest request of its resource. Everything else is a stale
// response and is dropped without telling the user.

mod forms;
mod notice;
mod resource;
mod selection;
mod session;
mod view;

#[cfg(test)]
mod tests;

pub use forms::{CustomerForm, InteractionForm};
pub use notice::{Notice, NoticeLevel};
pub use resource::Resource;
pub use selection::Selection;
pub use session::{LoginState, Session};
pub use view::{filter_customers, ViewState};

use crate::api::{
    AnalyticsEntry, ApiError, Customer, CustomerId, Interaction, LoginGrant, NewCustomer,
    NewInteraction,
};

/// Editable text buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Password,
    Search,
    CustomerName,
    CustomerEmail,
    PurchaseHistory,
    InteractionType,
    InteractionDetails,
}

/// User intents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Login,
    Logout,
    Edit(Field, String),
    RefreshCustomers,
    Select(CustomerId),
    RequestRecommendations,
    ToggleAnalytics,
    LoadAnalytics,
    CreateCustomer,
    CreateInteraction,
    SendEmail,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Login => "login",
            Action::Logout => "logout",
            Action::Edit(..) => "edit",
            Action::RefreshCustomers => "refresh_customers",
            Action::Select(_) => "select",
            Action::RequestRecommendations => "request_recommendations",
            Action::ToggleAnalytics => "toggle_analytics",
            Action::LoadAnalytics => "load_analytics",
            Action::CreateCustomer => "create_customer",
            Action::CreateInteraction => "create_interaction",
            Action::SendEmail => "send_email",
        }
    }
}

/// Identity a request was issued under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub epoch: u64,
    pub generation: u64,
    pub seq: u64,
}

/// What to ask the backend
#[derive(Clone, PartialEq, Eq)]
pub enum Request {
    Login { username: String, password: String },
    ListCustomers,
    GetCustomer(CustomerId),
    ListInteractions(CustomerId),
    GetRecommendations(CustomerId),
    GetAnalytics,
    CreateCustomer(NewCustomer),
    CreateInteraction(CustomerId, NewInteraction),
    SendEmail(CustomerId),
}

impl Request {
    /// Short label for logs (never includes credentials)
    pub fn label(&self) -> String {
        match self {
            Request::Login { username, .. } => format!("login({username})"),
            Request::ListCustomers => "list_customers".to_string(),
            Request::GetCustomer(id) => format!("get_customer({id})"),
            Request::ListInteractions(id) => format!("list_interactions({id})"),
            Request::GetRecommendations(id) => format!("recommendations({id})"),
            Request::GetAnalytics => "analytics".to_string(),
            Request::CreateCustomer(_) => "create_customer".to_string(),
            Request::CreateInteraction(id, _) => format!("create_interaction({id})"),
            Request::SendEmail(id) => format!("send_email({id})"),
        }
    }
}

impl std::fmt::Debug for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// A request ready for the runtime, with the token it must carry
#[derive(Clone, PartialEq, Eq)]
pub struct Command {
    pub ticket: Ticket,
    pub token: Option<String>,
    pub request: Request,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("ticket", &self.ticket)
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

/// Backend answer for one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Login(Result<LoginGrant, ApiError>),
    Customers(Result<Vec<Customer>, ApiError>),
    Customer(CustomerId, Result<Customer, ApiError>),
    Interactions(CustomerId, Result<Vec<Interaction>, ApiError>),
    Recommendations(CustomerId, Result<Vec<String>, ApiError>),
    Analytics(Result<Vec<AnalyticsEntry>, ApiError>),
    CustomerCreated(Result<(), ApiError>),
    InteractionCreated(CustomerId, Result<(), ApiError>),
    EmailSent(CustomerId, Result<(), ApiError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub ticket: Ticket,
    pub reply: Reply,
}

/// Outcome of applying a fetch answer to a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Settled {
    Committed,
    Failed,
    Stale,
}

/// Apply a fetch result to `resource`, queueing an error notice on failure
fn settle<T: Default>(
    resource: &mut Resource<T>,
    notices: &mut Vec<Notice>,
    seq: u64,
    result: Result<T, ApiError>,
    what: &str,
) -> Settled {
    match result {
        Ok(value) => {
            if resource.commit(seq, value) {
                Settled::Committed
            } else {
                tracing::debug!(seq, what, "Dropping superseded response");
                Settled::Stale
            }
        }
        Err(err) => {
            let message = format!("Failed to load {what}: {err}");
            if resource.fail(seq, message.clone()) {
                tracing::warn!(
                    seq,
                    what,
                    malformed = err.is_decode(),
                    error = %err,
                    "Fetch failed"
                );
                notices.push(Notice::error(message));
                Settled::Failed
            } else {
                tracing::debug!(seq, what, "Dropping superseded failure");
                Settled::Stale
            }
        }
    }
}

/// The client state container
#[derive(Debug, Default)]
pub struct Store {
    session: Option<Session>,
    login: LoginState,
    customers: Resource<Vec<Customer>>,
    selection: Selection,
    detail: Resource<Option<Customer>>,
    interactions: Resource<Vec<Interaction>>,
    recommendations: Resource<Vec<String>>,
    analytics: Resource<Vec<AnalyticsEntry>>,
    customer_form: CustomerForm,
    interaction_form: InteractionForm,
    view: ViewState,
    notices: Vec<Notice>,
    epoch: u64,
    seq: u64,
}

impl Store {
    /// Fresh signed-out store with the login form pre-filled
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            login: LoginState::with_username(username),
            ..Self::default()
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Read access
    // ─────────────────────────────────────────────────────────────────────

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn login_state(&self) -> &LoginState {
        &self.login
    }

    pub fn customers(&self) -> &Resource<Vec<Customer>> {
        &self.customers
    }

    /// Customer list narrowed by the search term
    pub fn visible_customers(&self) -> Vec<&Customer> {
        filter_customers(self.customers.value(), &self.view.search)
    }

    pub fn selected_id(&self) -> Option<CustomerId> {
        self.selection.current()
    }

    pub fn detail(&self) -> &Resource<Option<Customer>> {
        &self.detail
    }

    pub fn interactions(&self) -> &Resource<Vec<Interaction>> {
        &self.interactions
    }

    pub fn recommendations(&self) -> &Resource<Vec<String>> {
        &self.recommendations
    }

    pub fn analytics(&self) -> &Resource<Vec<AnalyticsEntry>> {
        &self.analytics
    }

    pub fn customer_form(&self) -> &CustomerForm {
        &self.customer_form
    }

    pub fn interaction_form(&self) -> &InteractionForm {
        &self.interaction_form
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.login.username,
            Field::Password => &self.login.password,
            Field::Search => &self.view.search,
            Field::CustomerName => &self.customer_form.name,
            Field::CustomerEmail => &self.customer_form.email,
            Field::PurchaseHistory => &self.customer_form.purchase_history,
            Field::InteractionType => &self.interaction_form.kind,
            Field::InteractionDetails => &self.interaction_form.details,
        }
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Dispatch
    // ─────────────────────────────────────────────────────────────────────

    /// Apply a user intent and return the requests it requires
    pub fn dispatch(&mut self, action: Action) -> Vec<Command> {
        match action {
            Action::Edit(field, value) => {
                self.edit(field, value);
                Vec::new()
            }
            Action::Login => self.login(),
            other if self.session.is_none() => {
                tracing::debug!(action = other.name(), "Ignoring action while signed out");
                Vec::new()
            }
            Action::Logout => {
                self.logout();
                Vec::new()
            }
            Action::RefreshCustomers => vec![self.fetch_customers()],
            Action::Select(id) => vec![self.select(id)],
            Action::RequestRecommendations => self.request_recommendations(),
            Action::ToggleAnalytics => {
                self.view.analytics_visible = !self.view.analytics_visible;
                Vec::new()
            }
            Action::LoadAnalytics => self.load_analytics(),
            Action::CreateCustomer => self.create_customer(),
            Action::CreateInteraction => self.create_interaction(),
            Action::SendEmail => self.send_email(),
        }
    }

    fn edit(&mut self, field: Field, value: String) {
        if self.login.is_pending() && matches!(field, Field::Username | Field::Password) {
            tracing::debug!(?field, "Ignoring credential edit while login is in flight");
            return;
        }
        match field {
            Field::Username => self.login.username = value,
            Field::Password => self.login.password = value,
            Field::Search => self.view.search = value,
            Field::CustomerName => self.customer_form.name = value,
            Field::CustomerEmail => self.customer_form.email = value,
            Field::PurchaseHistory => self.customer_form.purchase_history = value,
            Field::InteractionType => self.interaction_form.kind = value,
            Field::InteractionDetails => self.interaction_form.details = value,
        }
    }

    fn issue(&mut self, request: Request) -> Command {
        self.seq += 1;
        let command = Command {
            ticket: Ticket {
                epoch: self.epoch,
                generation: self.selection.generation(),
                seq: self.seq,
            },
            token: self.session.as_ref().map(|s| s.token.clone()),
            request,
        };
        tracing::debug!(seq = self.seq, request = %command.request.label(), "Issuing request");
        command
    }

    fn login(&mut self) -> Vec<Command> {
        if self.session.is_some() {
            tracing::debug!("Already signed in");
            return Vec::new();
        }
        if self.login.is_pending() {
            tracing::debug!("Login already in flight");
            return Vec::new();
        }
        let username = self.login.username.trim().to_string();
        self.login.pending = Some(username.clone());
        self.login.error = None;
        let request = Request::Login {
            username,
            password: self.login.password.clone(),
        };
        vec![self.issue(request)]
    }

    fn logout(&mut self) {
        self.epoch += 1;
        self.session = None;
        self.login.reset();
        self.customers.clear();
        self.selection.clear();
        self.detail.clear();
        self.interactions.clear();
        self.recommendations.clear();
        self.analytics.clear();
        self.customer_form.clear();
        self.interaction_form.clear();
        self.view = ViewState::default();
        self.notices.push(Notice::info("Signed out"));
        tracing::info!(epoch = self.epoch, "Signed out, session state discarded");
    }

    fn fetch_customers(&mut self) -> Command {
        let command = self.issue(Request::ListCustomers);
        self.customers.begin(command.ticket.seq);
        command
    }

    fn select(&mut self, id: CustomerId) -> Command {
        // Recommendations first: they never carry over to a new selection
        self.recommendations.clear();
        self.detail.clear();
        self.interactions.clear();
        self.selection.select(id);

        let command = self.issue(Request::GetCustomer(id));
        self.detail.begin(command.ticket.seq);
        command
    }

    fn fetch_interactions(&mut self, id: CustomerId) -> Command {
        let command = self.issue(Request::ListInteractions(id));
        self.interactions.begin(command.ticket.seq);
        command
    }

    fn request_recommendations(&mut self) -> Vec<Command> {
        let Some(id) = self.selection.current() else {
            tracing::debug!("Recommendations requested without a selection");
            return Vec::new();
        };
        let command = self.issue(Request::GetRecommendations(id));
        self.recommendations.begin(command.ticket.seq);
        vec![command]
    }

    fn load_analytics(&mut self) -> Vec<Command> {
        if !self.view.analytics_visible {
            tracing::debug!("Analytics panel hidden, not loading");
            return Vec::new();
        }
        let command = self.issue(Request::GetAnalytics);
        self.analytics.begin(command.ticket.seq);
        vec![command]
    }

    fn create_customer(&mut self) -> Vec<Command> {
        if self.customer_form.pending {
            return Vec::new();
        }
        match self.customer_form.validate() {
            Ok(body) => {
                self.customer_form.pending = true;
                vec![self.issue(Request::CreateCustomer(body))]
            }
            Err(reason) => {
                self.notices.push(Notice::error(reason));
                Vec::new()
            }
        }
    }

    fn create_interaction(&mut self) -> Vec<Command> {
        let Some(id) = self.selection.current() else {
            tracing::debug!("Interaction submitted without a selection");
            return Vec::new();
        };
        if self.interaction_form.pending {
            return Vec::new();
        }
        match self.interaction_form.validate() {
            Ok(body) => {
                self.interaction_form.pending = true;
                vec![self.issue(Request::CreateInteraction(id, body))]
            }
            Err(reason) => {
                self.notices.push(Notice::error(reason));
                Vec::new()
            }
        }
    }

    fn send_email(&mut self) -> Vec<Command> {
        let Some(id) = self.selection.current() else {
            tracing::debug!("Email requested without a selection");
            return Vec::new();
        };
        vec![self.issue(Request::SendEmail(id))]
    }

    // ─────────────────────────────────────────────────────────────────────
    // Resolution
    // ─────────────────────────────────────────────────────────────────────

    /// Apply a backend answer and return any follow-up requests
    pub fn resolve(&mut self, completion: Completion) -> Vec<Command> {
        let Completion { ticket, reply } = completion;

        if ticket.epoch != self.epoch {
            tracing::debug!(
                seq = ticket.seq,
                epoch = ticket.epoch,
                current = self.epoch,
                "Dropping response from a previous session"
            );
            return Vec::new();
        }

        match reply {
            Reply::Login(result) => self.on_login(result),
            Reply::Customers(result) => {
                settle(
                    &mut self.customers,
                    &mut self.notices,
                    ticket.seq,
                    result,
                    "customers",
                );
                Vec::new()
            }
            Reply::Customer(id, result) => self.on_customer(ticket, id, result),
            Reply::Interactions(id, result) => {
                if self.is_stale_for_selection(ticket, id) {
                    return Vec::new();
                }
                settle(
                    &mut self.interactions,
                    &mut self.notices,
                    ticket.seq,
                    result,
                    "interactions",
                );
                Vec::new()
            }
            Reply::Recommendations(id, result) => {
                if self.is_stale_for_selection(ticket, id) {
                    return Vec::new();
                }
                settle(
                    &mut self.recommendations,
                    &mut self.notices,
                    ticket.seq,
                    result,
                    "recommendations",
                );
                Vec::new()
            }
            Reply::Analytics(result) => {
                settle(
                    &mut self.analytics,
                    &mut self.notices,
                    ticket.seq,
                    result,
                    "analytics",
                );
                Vec::new()
            }
            Reply::CustomerCreated(result) => self.on_customer_created(result),
            Reply::InteractionCreated(id, result) => self.on_interaction_created(id, result),
            Reply::EmailSent(id, result) => {
                self.on_email_sent(id, result);
                Vec::new()
            }
        }
    }

    fn is_stale_for_selection(&self, ticket: Ticket, id: CustomerId) -> bool {
        if self.selection.is_current(id, ticket.generation) {
            return false;
        }
        tracing::debug!(
            seq = ticket.seq,
            customer_id = id,
            selected = ?self.selection.current(),
            "Dropping response for a superseded selection"
        );
        true
    }

    fn on_login(&mut self, result: Result<LoginGrant, ApiError>) -> Vec<Command> {
        let submitted = self.login.pending.take();
        match result {
            Ok(grant) => {
                let username =
                    submitted.unwrap_or_else(|| self.login.username.trim().to_string());
                tracing::info!(user = %username, role = ?grant.role, "Signed in");
                self.session = Some(Session {
                    username: username.clone(),
                    token: grant.token,
                    role: grant.role,
                });
                self.login.password.clear();
                self.login.error = None;
                self.notices
                    .push(Notice::success(format!("Signed in as {username}")));
                vec![self.fetch_customers()]
            }
            Err(err) => {
                tracing::warn!(status = ?err.status(), error = %err, "Login rejected");
                let message = match &err {
                    ApiError::Status {
                        message: Some(message),
                        ..
                    } => message.clone(),
                    ApiError::Status { status: 401, .. } => "Invalid credentials".to_string(),
                    other => format!("Login error: {other}"),
                };
                self.login.error = Some(message);
                Vec::new()
            }
        }
    }

    fn on_customer(
        &mut self,
        ticket: Ticket,
        id: CustomerId,
        result: Result<Customer, ApiError>,
    ) -> Vec<Command> {
        if self.is_stale_for_selection(ticket, id) {
            return Vec::new();
        }
        let settled = settle(
            &mut self.detail,
            &mut self.notices,
            ticket.seq,
            result.map(Some),
            "customer details",
        );
        match settled {
            Settled::Committed => vec![self.fetch_interactions(id)],
            Settled::Failed | Settled::Stale => Vec::new(),
        }
    }

    fn on_customer_created(&mut self, result: Result<(), ApiError>) -> Vec<Command> {
        self.customer_form.pending = false;
        match result {
            Ok(()) => {
                tracing::info!(name = %self.customer_form.name.trim(), "Customer added");
                self.customer_form.clear();
                self.notices.push(Notice::success("Customer added"));
                vec![self.fetch_customers()]
            }
            Err(err) => {
                tracing::warn!(error = %err, "Create customer failed");
                self.notices.push(Notice::error(format!(
                    "Failed to add customer: {}",
                    err.user_message()
                )));
                Vec::new()
            }
        }
    }

    fn on_interaction_created(
        &mut self,
        id: CustomerId,
        result: Result<(), ApiError>,
    ) -> Vec<Command> {
        self.interaction_form.pending = false;
        match result {
            Ok(()) => {
                tracing::info!(customer_id = id, "Interaction added");
                self.interaction_form.clear();
                self.notices.push(Notice::success("Interaction added"));
                if self.selection.current() == Some(id) {
                    vec![self.fetch_interactions(id)]
                } else {
                    Vec::new()
                }
            }
            Err(err) => {
                tracing::warn!(customer_id = id, error = %err, "Add interaction failed");
                self.notices.push(Notice::error(format!(
                    "Failed to add interaction: {}",
                    err.user_message()
                )));
                Vec::new()
            }
        }
    }

    fn on_email_sent(&mut self, id: CustomerId, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                tracing::info!(customer_id = id, "Coupon email sent");
                self.notices.push(Notice::success("Email sent successfully"));
            }
            Err(err) => {
                tracing::warn!(customer_id = id, error = %err, "Send email failed");
                self.notices.push(Notice::error(format!(
                    "Failed to send email: {}",
                    err.user_message()
                )));
            }
        }
    }
}
