use cqlmap::{asc, condition::*, desc, stmt::Command, Row, Value};
use pretty_assertions::assert_eq;
use tests::{records, records::Tweet, setup};

fn tweet() -> Tweet {
    Tweet {
        id: cqlmap::uuid("6f6f2e70-7e1a-4a57-9f54-2d7e1f5e4a01"),
        timeline: "me".to_string(),
        text: "hello".to_string(),
        time: 1_700_000_000_000,
    }
}

#[tokio::test]
async fn type_scan_loads_first_row() {
    let (session, log) = setup(records!(Tweet));
    let stored = tweet();
    log.respond_rows([stored.row()]);

    let mut loaded = Tweet::default();
    session
        .select(&mut loaded)
        .filter(eq("id", stored.id))
        .type_scan()
        .await
        .unwrap();

    assert_eq!(loaded, stored);

    let (cql, params) = log.pop_query();
    assert_eq!(cql, "SELECT * FROM tweet WHERE id = ?");
    assert_eq!(params, [Value::Uuid(stored.id)]);
}

#[tokio::test]
async fn type_scan_without_rows_is_not_found() {
    let (session, _log) = setup(records!(Tweet));

    let mut loaded = Tweet::default();
    let err = session
        .select(&mut loaded)
        .filter(eq("id", tweet().id))
        .type_scan()
        .await
        .unwrap_err();

    assert!(err.is_record_not_found());
    assert_eq!(err.to_string(), "record not found: table=tweet");
}

#[tokio::test]
async fn type_scan_ignores_unmapped_columns() {
    let (session, log) = setup(records!(Tweet));
    log.respond_rows([tweet().row().with("writetime", 99i64)]);

    let mut loaded = Tweet::default();
    session.select(&mut loaded).type_scan().await.unwrap();
    assert_eq!(loaded, tweet());
}

#[tokio::test]
async fn type_scan_reports_bad_column() {
    let (session, log) = setup(records!(Tweet));
    log.respond_rows([tweet().row().with("time", "yesterday")]);

    let mut loaded = Tweet::default();
    let err = session.select(&mut loaded).type_scan().await.unwrap_err();
    assert!(err.to_string().contains("failed to load column `time`"));
}

#[tokio::test]
async fn projection_order_and_limit() {
    let (session, log) = setup(records!(Tweet));
    log.respond_rows([Row::new().with("text", "hi").with("time", 5i64)]);

    let mut loaded = Tweet::default();
    session
        .select(&mut loaded)
        .columns(["text", "time"])
        .filter(eq("timeline", "me"))
        .filter(gt("time", 1i64))
        .order_by([desc("time"), asc("id")])
        .limit(10)
        .allow_filtering()
        .type_scan()
        .await
        .unwrap();

    assert_eq!(loaded.text, "hi");
    assert_eq!(loaded.time, 5);

    let (cql, params) = log.pop_query();
    assert_eq!(
        cql,
        "SELECT text, time FROM tweet WHERE timeline = ? AND time > ? ORDER BY time DESC, id ASC LIMIT 10 ALLOW FILTERING"
    );
    assert_eq!(params, [Value::from("me"), Value::I64(1)]);
}

#[tokio::test]
async fn filter_calls_accumulate() {
    let (session, _log) = setup(records!(Tweet));

    let (cql, params) = session
        .statement(Command::Select)
        .from_type::<Tweet>()
        .filter(eq("timeline", "me"))
        .filter(or(eq("text", "a"), [eq("text", "b")]))
        .build()
        .unwrap();

    assert_eq!(
        cql,
        "SELECT * FROM tweet WHERE timeline = ? AND (text = ? OR text = ?)"
    );
    assert_eq!(
        params,
        [Value::from("me"), Value::from("a"), Value::from("b")]
    );
}

#[tokio::test]
async fn replace_filter_drops_earlier_conditions() {
    let (session, _log) = setup(records!(Tweet));

    let (cql, params) = session
        .statement(Command::Select)
        .from_type::<Tweet>()
        .filter(eq("timeline", "me"))
        .replace_filter(in_list("id", ["a", "b"]))
        .build()
        .unwrap();

    assert_eq!(cql, "SELECT * FROM tweet WHERE id IN (?,?)");
    assert_eq!(params, [Value::from("a"), Value::from("b")]);
}

#[tokio::test]
async fn last_setting_wins() {
    let (session, _log) = setup(records!(Tweet));

    let (cql, _) = session
        .statement(Command::Select)
        .from_type::<Tweet>()
        .columns(["id"])
        .columns(["text"])
        .limit(1)
        .limit(2)
        .build()
        .unwrap();

    assert_eq!(cql, "SELECT text FROM tweet LIMIT 2");
}

#[tokio::test]
async fn scan_loads_columns_in_order() {
    let (session, log) = setup(records!(Tweet));
    log.respond_rows([Row::new().with("text", "hi").with("time", 7i64)]);

    let mut text = String::new();
    let mut time = 0i64;
    session
        .statement(Command::Select)
        .from_type::<Tweet>()
        .columns(["text", "time"])
        .scan(&mut [&mut text, &mut time])
        .await
        .unwrap();

    assert_eq!(text, "hi");
    assert_eq!(time, 7);
}

#[tokio::test]
async fn scan_rejects_short_rows() {
    let (session, log) = setup(records!(Tweet));
    log.respond_rows([Row::new().with("text", "hi")]);

    let mut text = String::new();
    let mut time = 0i64;
    let err = session
        .statement(Command::Select)
        .from_type::<Tweet>()
        .scan(&mut [&mut text, &mut time])
        .await
        .unwrap_err();

    assert!(err.is_invalid_result());
}

#[tokio::test]
async fn type_scan_requires_mapped_record() {
    let (session, log) = setup(records!(Tweet));
    log.respond_rows([tweet().row()]);

    let err = session
        .statement(Command::Select)
        .from_type::<Tweet>()
        .type_scan()
        .await
        .unwrap_err();

    assert!(err.is_adhoc());
    assert!(log.is_empty());
}

#[tokio::test]
async fn driver_errors_propagate() {
    let (session, log) = setup(records!(Tweet));
    log.fail(cqlmap::Error::from_args(format_args!("connection reset")));

    let mut loaded = Tweet::default();
    let err = session.select(&mut loaded).type_scan().await.unwrap_err();
    assert_eq!(err.to_string(), "connection reset");
}

#[tokio::test]
async fn insert_and_key_select_follow_table_columns() {
    let (session, log) = setup(records!(Tweet));
    let stored = tweet();
    let table = session.registry().table::<Tweet>();

    session.insert(&stored).exec().await.unwrap();
    let (cql, params) = log.pop_query();
    assert_eq!(
        cql,
        format!(
            "INSERT INTO tweet ({}) VALUES (?,?,?,?)",
            table.column_names().collect::<Vec<_>>().join(", ")
        )
    );
    assert_eq!(params, session.registry().column_values(&stored));

    log.respond_rows([stored.row()]);
    let mut loaded = Tweet::default();
    session
        .select(&mut loaded)
        .filter(session.registry().key_eq(&stored))
        .type_scan()
        .await
        .unwrap();
    assert_eq!(loaded, stored);

    let (cql, params) = log.pop_query();
    assert_eq!(cql, "SELECT * FROM tweet WHERE id = ?");
    let key: Vec<Value> = table
        .key_columns
        .iter()
        .map(|column| stored.row().get(column).cloned().unwrap())
        .collect();
    assert_eq!(params, key);
}

#[tokio::test]
async fn zero_limit_is_not_rendered() {
    let (session, _log) = setup(records!(Tweet));

    let (cql, _) = session
        .statement(Command::Select)
        .from_type::<Tweet>()
        .limit(0)
        .build()
        .unwrap();

    assert_eq!(cql, "SELECT * FROM tweet");
}
