//! Store behaviour tests
//!
//! Completions are built by hand and fed back in arbitrary order, which is
//! how out-of-order network answers look from the store's side.

use super::*;

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn customer(id: CustomerId, name: &str) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        email: Some(format!("{}@example.com", name.to_lowercase())),
        purchase_history: Some("Espresso machine".to_string()),
    }
}

fn interaction(kind: &str) -> Interaction {
    Interaction {
        kind: kind.to_string(),
        details: Some("details".to_string()),
        timestamp: "2024-03-05T14:30:00".to_string(),
    }
}

fn answer(command: &Command, reply: Reply) -> Completion {
    Completion {
        ticket: command.ticket,
        reply,
    }
}

fn server_error(status: u16) -> ApiError {
    ApiError::Status {
        status,
        message: None,
    }
}

fn only(mut commands: Vec<Command>) -> Command {
    assert_eq!(commands.len(), 1, "expected exactly one command: {commands:?}");
    commands.remove(0)
}

/// Signed-in store with the initial customer list loaded
fn signed_in_with(customers: Vec<Customer>) -> Store {
    let mut store = Store::new("ana");
    store.dispatch(Action::Edit(Field::Password, "secret".into()));
    let login = only(store.dispatch(Action::Login));
    let fetch = only(store.resolve(answer(
        &login,
        Reply::Login(Ok(LoginGrant {
            token: "jwt".into(),
            role: Some("admin".into()),
        })),
    )));
    assert_eq!(fetch.request, Request::ListCustomers);
    assert!(store.resolve(answer(&fetch, Reply::Customers(Ok(customers)))).is_empty());
    store.drain_notices();
    store
}

fn signed_in() -> Store {
    signed_in_with(vec![customer(1, "Alice"), customer(2, "bob")])
}

/// Select `id` and let the detail answer land; returns the chained
/// interactions command
fn select_and_load(store: &mut Store, id: CustomerId, name: &str) -> Command {
    let detail = only(store.dispatch(Action::Select(id)));
    only(store.resolve(answer(&detail, Reply::Customer(id, Ok(customer(id, name))))))
}

// ─────────────────────────────────────────────────────────────────────────────
// Session
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn login_success_stores_token_and_fetches_customers() {
    let store = signed_in();
    let session = store.session().expect("signed in");
    assert_eq!(session.token, "jwt");
    assert_eq!(session.role.as_deref(), Some("admin"));
    assert_eq!(store.login_state().password, "");
    assert_eq!(store.customers().value().len(), 2);
}

#[test]
fn login_command_carries_no_token() {
    let mut store = Store::new("ana");
    let login = only(store.dispatch(Action::Login));
    assert_eq!(login.token, None);
    assert!(matches!(login.request, Request::Login { ref username, .. } if username == "ana"));
}

#[test]
fn login_is_busy_until_answered() {
    let mut store = Store::new("ana");
    let login = only(store.dispatch(Action::Login));
    assert!(store.login_state().is_pending());
    assert!(store.dispatch(Action::Login).is_empty());

    store.resolve(answer(&login, Reply::Login(Err(server_error(500)))));
    assert!(!store.login_state().is_pending());
    assert_eq!(store.dispatch(Action::Login).len(), 1);
}

#[test]
fn credentials_are_frozen_while_login_is_in_flight() {
    let mut store = Store::new("ana");
    store.dispatch(Action::Edit(Field::Password, "secret".into()));
    let login = only(store.dispatch(Action::Login));

    store.dispatch(Action::Edit(Field::Username, "mallory".into()));
    store.dispatch(Action::Edit(Field::Password, "other".into()));
    assert_eq!(store.login_state().username, "ana");
    assert_eq!(store.login_state().password, "secret");

    // Other buffers stay editable
    store.dispatch(Action::Edit(Field::Search, "al".into()));
    assert_eq!(store.view().search, "al");

    store.resolve(answer(
        &login,
        Reply::Login(Ok(LoginGrant {
            token: "jwt".into(),
            role: None,
        })),
    ));
    assert_eq!(store.session().map(|s| s.username.as_str()), Some("ana"));
}

#[test]
fn session_names_the_user_that_was_sent() {
    let mut store = Store::new("  ana ");
    let login = only(store.dispatch(Action::Login));
    store.resolve(answer(
        &login,
        Reply::Login(Ok(LoginGrant {
            token: "jwt".into(),
            role: None,
        })),
    ));
    assert_eq!(store.session().map(|s| s.username.as_str()), Some("ana"));
    assert!(!store.login_state().is_pending());
}

#[test]
fn credentials_are_editable_again_after_a_failed_login() {
    let mut store = Store::new("ana");
    let login = only(store.dispatch(Action::Login));
    store.resolve(answer(&login, Reply::Login(Err(server_error(401)))));

    store.dispatch(Action::Edit(Field::Username, "bea".into()));
    assert_eq!(store.login_state().username, "bea");
}

#[test]
fn login_failure_reports_inline_and_keeps_session_empty() {
    let mut store = Store::new("ana");
    let login = only(store.dispatch(Action::Login));
    let follow = store.resolve(answer(
        &login,
        Reply::Login(Err(ApiError::Status {
            status: 401,
            message: Some("Invalid credentials".into()),
        })),
    ));
    assert!(follow.is_empty());
    assert!(!store.is_authenticated());
    assert_eq!(
        store.login_state().error.as_deref(),
        Some("Invalid credentials")
    );
}

#[test]
fn login_while_signed_in_is_ignored() {
    let mut store = signed_in();
    assert!(store.dispatch(Action::Login).is_empty());
    assert_eq!(store.session().map(|s| s.token.as_str()), Some("jwt"));
}

#[test]
fn logout_discards_everything() {
    let mut store = signed_in();
    let interactions = select_and_load(&mut store, 1, "Alice");
    store.resolve(answer(
        &interactions,
        Reply::Interactions(1, Ok(vec![interaction("call")])),
    ));
    let recs = only(store.dispatch(Action::RequestRecommendations));
    store.resolve(answer(&recs, Reply::Recommendations(1, Ok(vec!["Beans".into()]))));
    store.dispatch(Action::ToggleAnalytics);
    let analytics = only(store.dispatch(Action::LoadAnalytics));
    store.resolve(answer(
        &analytics,
        Reply::Analytics(Ok(vec![AnalyticsEntry {
            name: "Alice".into(),
            interaction_count: 1,
        }])),
    ));
    store.dispatch(Action::Edit(Field::CustomerName, "Half typed".into()));

    assert!(store.dispatch(Action::Logout).is_empty());

    assert!(!store.is_authenticated());
    assert!(store.session().is_none());
    assert!(store.customers().value().is_empty());
    assert_eq!(store.selected_id(), None);
    assert!(store.detail().value().is_none());
    assert!(store.interactions().value().is_empty());
    assert!(store.recommendations().value().is_empty());
    assert!(store.analytics().value().is_empty());
    assert!(!store.view().analytics_visible);
    assert_eq!(store.customer_form(), &CustomerForm::default());
}

#[test]
fn responses_from_before_logout_are_dropped() {
    let mut store = signed_in();
    let refresh = only(store.dispatch(Action::RefreshCustomers));
    let detail = only(store.dispatch(Action::Select(1)));
    store.dispatch(Action::Logout);

    assert!(store
        .resolve(answer(&refresh, Reply::Customers(Ok(vec![customer(9, "Zed")]))))
        .is_empty());
    assert!(store
        .resolve(answer(&detail, Reply::Customer(1, Ok(customer(1, "Alice")))))
        .is_empty());
    assert!(store.customers().value().is_empty());
    assert!(store.detail().value().is_none());
}

#[test]
fn signed_out_store_ignores_everything_but_login_and_edits() {
    let mut store = Store::new("ana");
    for action in [
        Action::RefreshCustomers,
        Action::Select(1),
        Action::RequestRecommendations,
        Action::LoadAnalytics,
        Action::CreateCustomer,
        Action::CreateInteraction,
        Action::SendEmail,
        Action::Logout,
    ] {
        assert!(store.dispatch(action).is_empty());
    }
    store.dispatch(Action::Edit(Field::Username, "bo".into()));
    assert_eq!(store.field(Field::Username), "bo");
}

#[test]
fn requests_carry_bearer_token_after_login() {
    let mut store = signed_in();
    let refresh = only(store.dispatch(Action::RefreshCustomers));
    assert_eq!(refresh.token.as_deref(), Some("jwt"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Selection ordering
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn selecting_chains_interactions_for_same_id() {
    let mut store = signed_in();
    let interactions = select_and_load(&mut store, 2, "bob");
    assert_eq!(interactions.request, Request::ListInteractions(2));
    assert!(store.interactions().is_loading());

    store.resolve(answer(
        &interactions,
        Reply::Interactions(2, Ok(vec![interaction("email"), interaction("call")])),
    ));
    assert_eq!(store.interactions().value().len(), 2);
    assert_eq!(
        store.detail().value().as_ref().map(|c| c.name.as_str()),
        Some("bob")
    );
}

#[test]
fn late_detail_for_previous_selection_is_discarded() {
    let mut store = signed_in();
    let detail_a = only(store.dispatch(Action::Select(1)));
    let detail_b = only(store.dispatch(Action::Select(2)));

    // A resolves after the selection moved to B
    let follow = store.resolve(answer(&detail_a, Reply::Customer(1, Ok(customer(1, "Alice")))));
    assert!(follow.is_empty(), "no interactions fetch for a stale detail");
    assert_eq!(store.selected_id(), Some(2));
    assert!(store.detail().value().is_none());
    assert!(store.detail().is_loading());

    let follow = store.resolve(answer(&detail_b, Reply::Customer(2, Ok(customer(2, "bob")))));
    assert_eq!(only(follow).request, Request::ListInteractions(2));
    assert_eq!(store.detail().value().as_ref().map(|c| c.id), Some(2));
}

#[test]
fn late_interactions_for_previous_selection_are_discarded() {
    let mut store = signed_in();
    let interactions_a = select_and_load(&mut store, 1, "Alice");
    let interactions_b = select_and_load(&mut store, 2, "bob");

    store.resolve(answer(
        &interactions_a,
        Reply::Interactions(1, Ok(vec![interaction("from-alice")])),
    ));
    assert!(store.interactions().value().is_empty());
    assert!(store.interactions().is_loading());

    store.resolve(answer(
        &interactions_b,
        Reply::Interactions(2, Ok(vec![interaction("from-bob")])),
    ));
    assert_eq!(store.interactions().value()[0].kind, "from-bob");
}

#[test]
fn reselecting_same_customer_drops_the_first_answer() {
    let mut store = signed_in();
    let first = only(store.dispatch(Action::Select(1)));
    let second = only(store.dispatch(Action::Select(1)));

    assert!(store
        .resolve(answer(&first, Reply::Customer(1, Ok(customer(1, "Old Alice")))))
        .is_empty());
    assert!(store.detail().value().is_none());

    store.resolve(answer(&second, Reply::Customer(1, Ok(customer(1, "Alice")))));
    assert_eq!(
        store.detail().value().as_ref().map(|c| c.name.as_str()),
        Some("Alice")
    );
}

#[test]
fn any_resolution_order_ends_on_the_final_selection() {
    // Select 1, 2, 3; deliver every detail answer in each possible order
    let orders = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];
    for order in orders {
        let mut store = signed_in();
        let commands: Vec<Command> = (1..=3)
            .map(|id| only(store.dispatch(Action::Select(id))))
            .collect();
        for idx in order {
            let id = idx as CustomerId + 1;
            store.resolve(answer(
                &commands[idx],
                Reply::Customer(id, Ok(customer(id, "any"))),
            ));
            let shown = store.detail().value().as_ref().map(|c| c.id);
            assert!(shown.is_none() || shown == Some(3), "order {order:?} showed {shown:?}");
        }
        assert_eq!(store.detail().value().as_ref().map(|c| c.id), Some(3));
    }
}

#[test]
fn selecting_clears_recommendations_synchronously() {
    let mut store = signed_in();
    select_and_load(&mut store, 1, "Alice");
    let recs = only(store.dispatch(Action::RequestRecommendations));
    store.resolve(answer(
        &recs,
        Reply::Recommendations(1, Ok(vec!["Grinder".into(), "Beans".into()])),
    ));
    assert_eq!(store.recommendations().value().len(), 2);

    let _detail = store.dispatch(Action::Select(2));
    assert!(store.recommendations().value().is_empty());
    assert!(!store.recommendations().is_fetched());
}

#[test]
fn selection_does_not_fetch_recommendations() {
    let mut store = signed_in();
    let detail = only(store.dispatch(Action::Select(1)));
    assert_eq!(detail.request, Request::GetCustomer(1));
    let follow = store.resolve(answer(&detail, Reply::Customer(1, Ok(customer(1, "Alice")))));
    assert!(follow
        .iter()
        .all(|c| !matches!(c.request, Request::GetRecommendations(_))));
}

#[test]
fn recommendations_for_previous_selection_are_discarded() {
    let mut store = signed_in();
    select_and_load(&mut store, 1, "Alice");
    let recs = only(store.dispatch(Action::RequestRecommendations));
    select_and_load(&mut store, 2, "bob");

    store.resolve(answer(&recs, Reply::Recommendations(1, Ok(vec!["Beans".into()]))));
    assert!(store.recommendations().value().is_empty());
}

#[test]
fn detail_failure_resets_and_reports() {
    let mut store = signed_in();
    let detail = only(store.dispatch(Action::Select(1)));
    let follow = store.resolve(answer(&detail, Reply::Customer(1, Err(server_error(404)))));
    assert!(follow.is_empty());
    assert!(store.detail().value().is_none());
    assert!(!store.detail().is_loading());
    let notices = store.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
}

// ─────────────────────────────────────────────────────────────────────────────
// Fetchers
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn second_failing_recommendation_request_leaves_empty_state() {
    let mut store = signed_in();
    select_and_load(&mut store, 1, "Alice");

    let first = only(store.dispatch(Action::RequestRecommendations));
    store.resolve(answer(&first, Reply::Recommendations(1, Ok(vec!["Beans".into()]))));
    assert_eq!(store.recommendations().value().len(), 1);

    let second = only(store.dispatch(Action::RequestRecommendations));
    store.resolve(answer(&second, Reply::Recommendations(1, Err(server_error(500)))));

    assert!(store.recommendations().value().is_empty());
    assert!(store.recommendations().error().is_some());
    assert!(store
        .drain_notices()
        .iter()
        .any(|n| n.level == NoticeLevel::Error));
}

#[test]
fn overlapping_recommendation_requests_latest_wins() {
    let mut store = signed_in();
    select_and_load(&mut store, 1, "Alice");

    let first = only(store.dispatch(Action::RequestRecommendations));
    let second = only(store.dispatch(Action::RequestRecommendations));

    store.resolve(answer(&second, Reply::Recommendations(1, Err(server_error(500)))));
    store.resolve(answer(&first, Reply::Recommendations(1, Ok(vec!["Beans".into()]))));

    assert!(store.recommendations().value().is_empty());
    assert_eq!(store.drain_notices().len(), 1);
}

#[test]
fn malformed_payload_is_reported_as_such() {
    let mut store = signed_in();
    select_and_load(&mut store, 1, "Alice");
    let recs = only(store.dispatch(Action::RequestRecommendations));
    store.resolve(answer(
        &recs,
        Reply::Recommendations(
            1,
            Err(ApiError::Decode {
                endpoint: "GET /recommendations/1".into(),
                reason: "missing field `recommendations`".into(),
            }),
        ),
    ));
    let notices = store.drain_notices();
    assert!(notices[0].message.contains("malformed response"));
    assert!(store.recommendations().value().is_empty());
}

#[test]
fn empty_recommendations_are_fetched_without_notice() {
    let mut store = signed_in();
    select_and_load(&mut store, 1, "Alice");
    store.drain_notices();
    let recs = only(store.dispatch(Action::RequestRecommendations));
    store.resolve(answer(&recs, Reply::Recommendations(1, Ok(Vec::new()))));
    assert!(store.recommendations().is_fetched());
    assert!(store.drain_notices().is_empty());
}

#[test]
fn customer_list_failure_resets_to_empty() {
    let mut store = signed_in();
    let refresh = only(store.dispatch(Action::RefreshCustomers));
    store.resolve(answer(&refresh, Reply::Customers(Err(server_error(401)))));
    assert!(store.customers().value().is_empty());
    assert!(store.customers().error().is_some());
}

#[test]
fn loading_flags_are_independent() {
    let mut store = signed_in();
    store.dispatch(Action::ToggleAnalytics);
    let analytics = only(store.dispatch(Action::LoadAnalytics));
    assert!(store.analytics().is_loading());
    assert!(!store.customers().is_loading());
    assert!(!store.detail().is_loading());

    let refresh = only(store.dispatch(Action::RefreshCustomers));
    store.resolve(answer(&refresh, Reply::Customers(Ok(vec![customer(3, "Cy")]))));
    assert!(!store.customers().is_loading());
    assert!(store.analytics().is_loading());

    store.resolve(answer(&analytics, Reply::Analytics(Ok(Vec::new()))));
    assert!(!store.analytics().is_loading());
}

// ─────────────────────────────────────────────────────────────────────────────
// Analytics panel
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn opening_analytics_issues_no_request() {
    let mut store = signed_in();
    assert!(store.dispatch(Action::ToggleAnalytics).is_empty());
    assert!(store.view().analytics_visible);
    assert!(!store.analytics().is_loading());
}

#[test]
fn load_analytics_requires_open_panel() {
    let mut store = signed_in();
    assert!(store.dispatch(Action::LoadAnalytics).is_empty());

    store.dispatch(Action::ToggleAnalytics);
    let load = only(store.dispatch(Action::LoadAnalytics));
    assert_eq!(load.request, Request::GetAnalytics);

    store.resolve(answer(
        &load,
        Reply::Analytics(Ok(vec![
            AnalyticsEntry {
                name: "Alice".into(),
                interaction_count: 4,
            },
            AnalyticsEntry {
                name: "bob".into(),
                interaction_count: 0,
            },
        ])),
    ));
    assert_eq!(store.analytics().value().len(), 2);
}

#[test]
fn analytics_answer_survives_selection_change() {
    let mut store = signed_in();
    store.dispatch(Action::ToggleAnalytics);
    let load = only(store.dispatch(Action::LoadAnalytics));
    store.dispatch(Action::Select(2));
    store.resolve(answer(
        &load,
        Reply::Analytics(Ok(vec![AnalyticsEntry {
            name: "Alice".into(),
            interaction_count: 4,
        }])),
    ));
    assert_eq!(store.analytics().value().len(), 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// View state
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn search_filters_without_requests() {
    let mut store = signed_in();
    assert!(store
        .dispatch(Action::Edit(Field::Search, "AL".into()))
        .is_empty());
    let names: Vec<_> = store
        .visible_customers()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["Alice"]);

    store.dispatch(Action::Edit(Field::Search, String::new()));
    let names: Vec<_> = store
        .visible_customers()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["Alice", "bob"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Mutations
// ─────────────────────────────────────────────────────────────────────────────

fn fill_customer_form(store: &mut Store) {
    store.dispatch(Action::Edit(Field::CustomerName, "Cara".into()));
    store.dispatch(Action::Edit(Field::CustomerEmail, "cara@example.com".into()));
    store.dispatch(Action::Edit(Field::PurchaseHistory, "Kettle".into()));
}

#[test]
fn create_customer_clears_buffer_and_refreshes_list() {
    let mut store = signed_in();
    fill_customer_form(&mut store);

    let create = only(store.dispatch(Action::CreateCustomer));
    assert_eq!(
        create.request,
        Request::CreateCustomer(NewCustomer {
            name: "Cara".into(),
            email: "cara@example.com".into(),
            purchase_history: "Kettle".into(),
        })
    );

    let refresh = only(store.resolve(answer(&create, Reply::CustomerCreated(Ok(())))));
    assert_eq!(refresh.request, Request::ListCustomers);
    assert_eq!(store.customer_form(), &CustomerForm::default());

    store.resolve(answer(
        &refresh,
        Reply::Customers(Ok(vec![
            customer(1, "Alice"),
            customer(2, "bob"),
            customer(3, "Cara"),
        ])),
    ));
    assert!(store.customers().value().iter().any(|c| c.name == "Cara"));
}

#[test]
fn create_customer_failure_keeps_buffer() {
    let mut store = signed_in();
    fill_customer_form(&mut store);
    let create = only(store.dispatch(Action::CreateCustomer));
    let follow = store.resolve(answer(&create, Reply::CustomerCreated(Err(server_error(500)))));

    assert!(follow.is_empty());
    assert_eq!(store.field(Field::CustomerName), "Cara");
    assert!(!store.customer_form().pending);
    assert_eq!(store.customers().value().len(), 2, "no optimistic insert");
    assert_eq!(store.drain_notices()[0].level, NoticeLevel::Error);
}

#[test]
fn create_customer_rejects_blank_fields_locally() {
    let mut store = signed_in();
    store.dispatch(Action::Edit(Field::CustomerName, "Cara".into()));
    assert!(store.dispatch(Action::CreateCustomer).is_empty());
    assert_eq!(store.field(Field::CustomerName), "Cara");
    assert_eq!(store.drain_notices()[0].level, NoticeLevel::Error);
}

#[test]
fn create_customer_cannot_double_submit() {
    let mut store = signed_in();
    fill_customer_form(&mut store);
    let _create = only(store.dispatch(Action::CreateCustomer));
    assert!(store.dispatch(Action::CreateCustomer).is_empty());
}

#[test]
fn create_interaction_refreshes_log_for_selected_customer() {
    let mut store = signed_in();
    let interactions = select_and_load(&mut store, 1, "Alice");
    store.resolve(answer(&interactions, Reply::Interactions(1, Ok(Vec::new()))));

    store.dispatch(Action::Edit(Field::InteractionType, "call".into()));
    store.dispatch(Action::Edit(Field::InteractionDetails, "Asked about beans".into()));
    let create = only(store.dispatch(Action::CreateInteraction));
    assert_eq!(
        create.request,
        Request::CreateInteraction(
            1,
            NewInteraction {
                interaction_type: "call".into(),
                details: "Asked about beans".into(),
            }
        )
    );

    let refresh = only(store.resolve(answer(&create, Reply::InteractionCreated(1, Ok(())))));
    assert_eq!(refresh.request, Request::ListInteractions(1));
    assert_eq!(store.interaction_form(), &InteractionForm::default());
}

#[test]
fn create_interaction_after_selection_moved_skips_refresh() {
    let mut store = signed_in();
    select_and_load(&mut store, 1, "Alice");
    store.dispatch(Action::Edit(Field::InteractionType, "call".into()));
    let create = only(store.dispatch(Action::CreateInteraction));
    store.dispatch(Action::Select(2));

    let follow = store.resolve(answer(&create, Reply::InteractionCreated(1, Ok(()))));
    assert!(follow.is_empty());
}

#[test]
fn create_interaction_failure_keeps_buffer() {
    let mut store = signed_in();
    select_and_load(&mut store, 1, "Alice");
    store.dispatch(Action::Edit(Field::InteractionType, "call".into()));
    let create = only(store.dispatch(Action::CreateInteraction));
    store.resolve(answer(&create, Reply::InteractionCreated(1, Err(server_error(500)))));
    assert_eq!(store.field(Field::InteractionType), "call");
    assert!(!store.interaction_form().pending);
}

#[test]
fn mutations_needing_a_selection_are_noops_without_one() {
    let mut store = signed_in();
    store.dispatch(Action::Edit(Field::InteractionType, "call".into()));
    assert!(store.dispatch(Action::CreateInteraction).is_empty());
    assert!(store.dispatch(Action::SendEmail).is_empty());
    assert!(store.dispatch(Action::RequestRecommendations).is_empty());
    assert!(store.drain_notices().is_empty());
}

#[test]
fn send_email_reports_without_touching_state() {
    let mut store = signed_in();
    let interactions = select_and_load(&mut store, 1, "Alice");
    store.resolve(answer(&interactions, Reply::Interactions(1, Ok(vec![interaction("call")]))));
    store.drain_notices();

    let send = only(store.dispatch(Action::SendEmail));
    assert_eq!(send.request, Request::SendEmail(1));
    assert!(store.resolve(answer(&send, Reply::EmailSent(1, Ok(())))).is_empty());
    assert_eq!(store.drain_notices()[0].level, NoticeLevel::Success);
    assert_eq!(store.interactions().value().len(), 1);

    let send = only(store.dispatch(Action::SendEmail));
    store.resolve(answer(
        &send,
        Reply::EmailSent(
            1,
            Err(ApiError::Status {
                status: 500,
                message: Some("SMTP unavailable".into()),
            }),
        ),
    ));
    let notices = store.drain_notices();
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert!(notices[0].message.contains("SMTP unavailable"));
}

#[test]
fn request_debug_output_hides_password() {
    let request = Request::Login {
        username: "ana".into(),
        password: "hunter2".into(),
    };
    assert!(!format!("{request:?}").contains("hunter2"));
}
