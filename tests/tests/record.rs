use cqlmap::{condition::*, stmt::Command, Record, Row, Session, Value};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use tests::{
    records,
    records::{Timeline, Tweet, Users},
    setup, LoggingDriver,
};

#[test]
fn derived_schema() {
    let schema = Tweet::schema();
    assert_eq!(schema.table_name(), "tweet");
    assert_eq!(schema.columns, ["id", "timeline", "text", "time"]);
    assert_eq!(schema.key, ["id"]);

    let schema = Timeline::schema();
    assert_eq!(schema.key, ["id", "time"]);

    let schema = Users::schema();
    assert_eq!(schema.table_name(), "Users");
    assert_eq!(schema.columns, ["name", "followers", "details"]);
    assert_eq!(schema.key, ["name"]);
}

#[test]
fn default_key_is_first_column() {
    #[derive(Debug, Default, Record)]
    struct Event {
        kind: String,
        payload: String,
    }

    let (session, _log) = setup(records!(Event));
    let table = session.registry().table::<Event>();
    assert_eq!(table.name, "Event");
    assert_eq!(table.key_columns, ["kind"]);
}

#[test]
fn column_names_are_lowercased() {
    #[derive(Debug, Default, Record)]
    #[allow(non_snake_case)]
    struct Legacy {
        UserID: String,
        r#type: String,
    }

    assert_eq!(Legacy::schema().columns, ["userid", "type"]);
}

#[tokio::test]
async fn collection_columns() {
    let (session, log) = setup(records!(Users));
    let user = Users {
        name: "alice".to_string(),
        following: vec!["bob".to_string(), "carol".to_string()],
        details: BTreeMap::from([("city".to_string(), "Oslo".to_string())]),
        cached: Some("not stored".to_string()),
    };

    session.set(&user).await.unwrap();

    let (cql, params) = log.pop_query();
    assert_eq!(
        cql,
        "INSERT INTO Users (name, followers, details) VALUES (?,?,?)"
    );
    assert_eq!(
        params,
        [
            Value::from("alice"),
            Value::List(vec![Value::from("bob"), Value::from("carol")]),
            Value::Map(vec![(Value::from("city"), Value::from("Oslo"))]),
        ]
    );
}

#[tokio::test]
async fn contains_filters_and_null_collections() {
    let (session, log) = setup(records!(Users));
    log.respond_rows([Row::new()
        .with("name", "dave")
        .with("followers", Value::Null)
        .with("details", Value::Null)]);

    let mut user = Users {
        following: vec!["stale".to_string()],
        ..Users::default()
    };
    session
        .select(&mut user)
        .filter(contains("followers", "bob"))
        .filter(contains_key("details", "city"))
        .allow_filtering()
        .type_scan()
        .await
        .unwrap();

    assert_eq!(user.name, "dave");
    assert!(user.following.is_empty());
    assert!(user.details.is_empty());

    let (cql, params) = log.pop_query();
    assert_eq!(
        cql,
        "SELECT * FROM Users WHERE followers CONTAINS ? AND details CONTAINS KEY ? ALLOW FILTERING"
    );
    assert_eq!(params, [Value::from("bob"), Value::from("city")]);
}

#[tokio::test]
async fn keyspace_and_table_name_prefix() {
    let mut builder = records!(Tweet);
    builder.keyspace("app").table_name_prefix("test_");
    let (session, log) = setup(builder);

    assert_eq!(session.keyspace(), Some("app"));
    assert_eq!(session.table_name::<Tweet>(), "test_tweet");

    session.del(&Tweet::default()).await.unwrap();
    assert_eq!(log.pop_query().0, "DELETE FROM app.test_tweet WHERE id = ?");

    // Explicit table names are used as given
    let (cql, _) = session
        .statement(Command::Select)
        .from("raw_events")
        .build()
        .unwrap();
    assert_eq!(cql, "SELECT * FROM app.raw_events");
}

#[test]
fn shared_registry() {
    let mut builder = records!(Tweet);
    let first = builder.build(LoggingDriver::new());

    let mut builder = Session::builder();
    builder.registry(first.registry().clone());
    let second = builder.build(LoggingDriver::new());

    assert!(second.registry().is_registered::<Tweet>());
    assert!(!second.registry().is_registered::<Users>());
}

#[test]
fn unregistered_records_resolve_on_use() {
    let (session, _log) = setup(Session::builder());
    assert!(session.registry().is_empty());

    let (cql, _) = session.count::<Timeline>().build().unwrap();
    assert_eq!(cql, "SELECT COUNT(1) FROM timeline");
    assert!(session.registry().is_registered::<Timeline>());
}

#[test]
fn empty_in_list_is_vacuous() {
    let cond = in_list::<Value>("id", []);
    assert_eq!(cond.cql(), "id IN ()");
    assert!(cond.is_vacuous());
    assert!(!in_list("id", ["a"]).is_vacuous());
}

#[test]
fn single_operand_logic_is_unchanged() {
    assert_eq!(and(eq("a", 1i32), []), eq("a", 1i32));
    assert_eq!(or(eq("a", 1i32), []).cql(), "a = ?");
    assert_eq!(
        and(eq("a", 1i32), [or(eq("b", 2i32), [eq("c", 3i32)])]).cql(),
        "(a = ? AND (b = ? OR c = ?))"
    );
}

#[test]
fn truth_has_no_arguments() {
    let (cql, params) = truth().into_parts();
    assert_eq!(cql, "true");
    assert!(params.is_empty());
}
