use cqlmap::{condition::*, Row, Value};
use cqlmap_core::driver::Operation;
use pretty_assertions::assert_eq;
use tests::{
    records,
    records::{Timeline, Tweet},
    setup,
};

fn tweet() -> Tweet {
    Tweet {
        id: cqlmap::uuid("9a1e4b2c-3d5f-4e6a-8b7c-0d1e2f3a4b5c"),
        timeline: "me".to_string(),
        text: "first".to_string(),
        time: 1,
    }
}

#[tokio::test]
async fn get_loads_by_current_key() {
    let (session, log) = setup(records!(Tweet));
    let stored = tweet();
    log.respond_rows([stored.row()]);

    let mut loaded = Tweet {
        id: stored.id,
        ..Tweet::default()
    };
    session.get(&mut loaded).await.unwrap();
    assert_eq!(loaded, stored);

    let (cql, params) = log.pop_query();
    assert_eq!(cql, "SELECT * FROM tweet WHERE id = ?");
    assert_eq!(params, [Value::Uuid(stored.id)]);
}

#[tokio::test]
async fn get_missing_row() {
    let (session, _log) = setup(records!(Tweet));

    let mut loaded = tweet();
    let err = session.get(&mut loaded).await.unwrap_err();
    assert!(err.is_record_not_found());

    // The record is left as it was
    assert_eq!(loaded, tweet());
}

#[tokio::test]
async fn get_composite_key() {
    let (session, log) = setup(records!(Timeline));
    let stored = Timeline {
        id: "me".to_string(),
        time: 3,
        tweet: tweet().id,
    };
    log.respond_rows([Row::new()
        .with("id", "me")
        .with("time", 3i64)
        .with("tweet", stored.tweet)]);

    let mut loaded = Timeline {
        id: "me".to_string(),
        time: 3,
        ..Timeline::default()
    };
    session.get(&mut loaded).await.unwrap();
    assert_eq!(loaded, stored);

    let (cql, params) = log.pop_query();
    assert_eq!(cql, "SELECT * FROM timeline WHERE id = ? AND time = ?");
    assert_eq!(params, [Value::from("me"), Value::I64(3)]);
}

#[tokio::test]
async fn set_then_del() {
    let (session, log) = setup(records!(Tweet));
    let tweet = tweet();

    session.set(&tweet).await.unwrap();
    session.del(&tweet).await.unwrap();

    assert_eq!(
        log.pop_query().0,
        "INSERT INTO tweet (id, timeline, text, time) VALUES (?,?,?,?)"
    );
    assert_eq!(log.pop_query().0, "DELETE FROM tweet WHERE id = ?");
    assert!(log.is_empty());
}

#[tokio::test]
async fn count_scans_into_integer() {
    let (session, log) = setup(records!(Tweet));
    log.respond_rows([Row::new().with("count", 3i64)]);

    let mut count = 0i64;
    session
        .count::<Tweet>()
        .filter(eq("timeline", "me"))
        .allow_filtering()
        .scan(&mut [&mut count])
        .await
        .unwrap();

    assert_eq!(count, 3);

    let (cql, params) = log.pop_query();
    assert_eq!(cql, "SELECT COUNT(1) FROM tweet WHERE timeline = ?");
    assert_eq!(params, [Value::from("me")]);
}

#[tokio::test]
async fn exists() {
    let (session, log) = setup(records!(Tweet));

    log.respond_rows([Row::new().with("count", 1i64)]);
    assert!(session.exists(&tweet()).await.unwrap());

    log.respond_rows([Row::new().with("count", 0i64)]);
    assert!(!session.exists(&tweet()).await.unwrap());

    for _ in 0..2 {
        match log.pop() {
            Some(Operation::Fetch(query)) => {
                assert_eq!(query.cql, "SELECT COUNT(1) FROM tweet WHERE id = ?")
            }
            op => panic!("expected a read, got {op:#?}"),
        }
    }
}

#[tokio::test]
async fn exec_sends_raw_operations() {
    let (session, log) = setup(records!(Tweet));

    let query = cqlmap_core::driver::operation::Query::new("TRUNCATE tweet", vec![]);
    session
        .exec(Operation::Execute(query))
        .await
        .unwrap()
        .into_void()
        .unwrap();

    assert_eq!(log.pop_query(), ("TRUNCATE tweet".to_string(), vec![]));
}
