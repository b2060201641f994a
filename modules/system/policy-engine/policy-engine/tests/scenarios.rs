#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use parking_lot::Mutex;
use policy_engine::{DomainError, Policy, PolicyEngineConfig, Service};
use policy_engine_sdk::{
    CheckRef, ConditionTree, Group, HookRef, Rule, UnknownAction, UnknownActionSink,
};
use serde_json::{Value, json};
use static_check_provider::StaticCheckProvider;

#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<UnknownAction>>,
}

impl UnknownActionSink for RecordingSink {
    fn unknown_action(&self, event: &UnknownAction) {
        self.events.lock().push(event.clone());
    }
}

/// Checks and hooks shared by every scenario.
fn provider() -> StaticCheckProvider<Value, Value> {
    StaticCheckProvider::new()
        .with_param_check("role", |subject: &Value, _: &Value, role: &Value| {
            subject["role"] == *role
        })
        .with_check("same_user", |subject: &Value, object: &Value| {
            subject["id"] == object["id"]
        })
        .with_check("own_resource", |subject: &Value, object: &Value| {
            object["owner_ids"]
                .as_array()
                .is_some_and(|owners| owners.contains(&subject["id"]))
        })
        .with_hook("preload_groups", |subject, mut object: Value, _| {
            // stands in for a store lookup of the owning group's members
            if object["group_id"] == json!("editors") {
                object["owner_ids"] = json!(["u1", "u3"]);
            }
            (subject, object)
        })
}

fn policy() -> Policy {
    Policy::build(vec![
        Rule::new("article", "create")
            .with_allow(ConditionTree::any([
                Group::check(CheckRef::with_param("role", "admin")),
                Group::check(CheckRef::with_param("role", "writer")),
            ]))
            .with_description("create an article"),
        Rule::new("user", "delete")
            .with_allow(ConditionTree::single(CheckRef::with_param("role", "admin")))
            .with_deny(ConditionTree::single(CheckRef::named("same_user"))),
        Rule::new("article", "update")
            .with_pre_hook(HookRef::by_name("preload_groups"))
            .with_allow(ConditionTree::single(CheckRef::named("own_resource"))),
    ])
    .unwrap()
}

fn service(sink: Arc<RecordingSink>) -> Service<StaticCheckProvider<Value, Value>> {
    Service::new(Arc::new(policy()), Arc::new(provider())).with_sink(sink)
}

#[test]
fn writer_may_create_article_reader_may_not() {
    let svc = service(Arc::default());

    assert!(
        svc.authorize_subject("article", "create", json!({"role": "writer"}))
            .unwrap()
    );
    assert!(
        svc.authorize_subject("article", "create", json!({"role": "admin"}))
            .unwrap()
    );
    assert!(
        !svc.authorize_subject("article", "create", json!({"role": "reader"}))
            .unwrap()
    );
}

#[test]
fn admin_cannot_delete_themselves() {
    let svc = service(Arc::default());
    let admin = json!({"id": "u1", "role": "admin"});

    assert!(
        !svc.authorize("user", "delete", admin.clone(), json!({"id": "u1"}))
            .unwrap()
    );
    assert!(
        svc.authorize("user", "delete", admin, json!({"id": "u2"}))
            .unwrap()
    );
}

#[test]
fn checks_observe_hydrated_object() {
    let svc = service(Arc::default());
    let article = json!({"id": "a1", "group_id": "editors"});

    // the authored object carries no owners; only the hook supplies them
    assert!(article.get("owner_ids").is_none());
    assert!(
        svc.authorize("article", "update", json!({"id": "u1"}), article.clone())
            .unwrap()
    );
    assert!(
        !svc.authorize("article", "update", json!({"id": "u2"}), article)
            .unwrap()
    );
    assert!(
        !svc.authorize(
            "article",
            "update",
            json!({"id": "u1"}),
            json!({"id": "a2", "group_id": "admins"})
        )
        .unwrap()
    );
}

#[test]
fn unknown_action_is_denied_and_signalled_once() {
    let sink = Arc::new(RecordingSink::default());
    let svc = service(Arc::clone(&sink));

    let allowed = svc
        .authorize("article", "archive", json!({"role": "admin"}), Value::Null)
        .unwrap();

    assert!(!allowed);
    assert_eq!(
        *sink.events.lock(),
        [UnknownAction {
            object_type: "article".to_owned(),
            action: "archive".to_owned(),
        }]
    );
}

#[test]
fn enforce_reports_unauthorized() {
    let svc = service(Arc::default());

    assert!(
        svc.enforce("article", "create", json!({"role": "writer"}), Value::Null)
            .is_ok()
    );
    let err = svc
        .enforce("article", "create", json!({"role": "reader"}), Value::Null)
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized { .. }));
}

#[test]
fn missing_hook_propagates_instead_of_denying() {
    let policy = Policy::build(vec![
        Rule::new("report", "view")
            .with_pre_hook(HookRef::qualified("warehouse", "load", [json!("q1")]))
            .with_allow(ConditionTree::single(Group::literal(true))),
    ])
    .unwrap();
    let svc = Service::new(Arc::new(policy), Arc::new(provider()));

    let err = svc
        .authorize_subject("report", "view", Value::Null)
        .unwrap_err();
    assert!(matches!(err, DomainError::UnresolvedHook { .. }));
}

#[test]
fn service_from_config() {
    let config: PolicyEngineConfig = serde_json::from_value(json!({
        "unknown_action_log": "debug",
        "rules": [
            {
                "object_type": "article",
                "action": "create",
                "allow": [{"name": "role", "param": "writer"}]
            },
            {
                "object_type": "user",
                "action": "delete",
                "allow": [{"name": "role", "param": "admin"}],
                "deny": ["same_user"]
            }
        ]
    }))
    .unwrap();

    let svc = Service::from_config(config, Arc::new(provider())).unwrap();

    assert_eq!(svc.policy().len(), 2);
    assert!(
        svc.authorize_subject("article", "create", json!({"role": "writer"}))
            .unwrap()
    );
    assert!(
        !svc.authorize(
            "user",
            "delete",
            json!({"id": "u1", "role": "admin"}),
            json!({"id": "u1"})
        )
        .unwrap()
    );
}

#[test]
fn duplicate_rules_in_config_abort_startup() {
    let config = PolicyEngineConfig {
        rules: vec![Rule::new("article", "create"), Rule::new("article", "create")],
        ..PolicyEngineConfig::default()
    };

    let err = Service::from_config(config, Arc::new(provider())).unwrap_err();
    assert!(matches!(err, DomainError::DuplicateRule { .. }));
}

#[test]
fn concurrent_decisions_share_one_service() {
    let svc = Arc::new(service(Arc::default()));

    std::thread::scope(|scope| {
        for i in 0..8 {
            let svc = Arc::clone(&svc);
            scope.spawn(move || {
                let role = if i % 2 == 0 { "writer" } else { "reader" };
                let allowed = svc
                    .authorize_subject("article", "create", json!({ "role": role }))
                    .unwrap();
                assert_eq!(allowed, i % 2 == 0);
            });
        }
    });
}
