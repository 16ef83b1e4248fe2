use cqlmap::{condition::*, stmt::Command};
use pretty_assertions::assert_eq;
use tests::{records, records::Tweet, setup};
use tokio_stream::StreamExt;

fn tweets() -> Vec<Tweet> {
    (0..3)
        .map(|i| Tweet {
            id: cqlmap::Uuid::from_u128(i as u128 + 1),
            timeline: "me".to_string(),
            text: format!("tweet {i}"),
            time: i,
        })
        .collect()
}

#[tokio::test]
async fn query_runs_on_first_read() {
    let (session, log) = setup(records!(Tweet));
    log.respond_rows(tweets().iter().map(Tweet::row));

    let mut iter = session
        .statement(Command::Select)
        .from_type::<Tweet>()
        .filter(eq("timeline", "me"))
        .iter();

    assert!(log.is_empty());

    let mut tweet = Tweet::default();
    assert!(iter.type_scan(&mut tweet).await.unwrap());
    assert_eq!(tweet, tweets()[0]);
    assert_eq!(log.len(), 1);

    assert!(iter.type_scan(&mut tweet).await.unwrap());
    assert!(iter.type_scan(&mut tweet).await.unwrap());
    assert_eq!(tweet, tweets()[2]);

    assert!(!iter.type_scan(&mut tweet).await.unwrap());
    assert!(!iter.type_scan(&mut tweet).await.unwrap());
    assert_eq!(log.len(), 1);
}

#[tokio::test]
async fn collect_records() {
    let (session, log) = setup(records!(Tweet));
    log.respond_rows(tweets().iter().map(Tweet::row));

    let all: Vec<Tweet> = session
        .statement(Command::Select)
        .from_type::<Tweet>()
        .iter()
        .collect()
        .await
        .unwrap();

    assert_eq!(all, tweets());
}

#[tokio::test]
async fn empty_result() {
    let (session, _log) = setup(records!(Tweet));

    let all: Vec<Tweet> = session
        .statement(Command::Select)
        .from_type::<Tweet>()
        .iter()
        .collect()
        .await
        .unwrap();

    assert!(all.is_empty());
}

#[tokio::test]
async fn into_stream_yields_rows() {
    let (session, log) = setup(records!(Tweet));
    log.respond_rows(tweets().iter().map(Tweet::row));

    let stream = session
        .statement(Command::Select)
        .from_type::<Tweet>()
        .columns(["text"])
        .iter()
        .into_stream();
    tokio::pin!(stream);

    let mut texts = vec![];
    while let Some(row) = stream.next().await {
        let row = row.unwrap();
        texts.push(row.get("text").and_then(|v| v.as_str()).unwrap().to_string());
    }

    assert_eq!(texts, ["tweet 0", "tweet 1", "tweet 2"]);
}

#[tokio::test]
async fn read_error_ends_iteration() {
    let (session, log) = setup(records!(Tweet));
    log.fail(cqlmap::Error::record_not_found("table=tweet"));

    let mut iter = session
        .statement(Command::Select)
        .from_type::<Tweet>()
        .iter();

    assert!(iter.next_row().await.unwrap().is_err());
    assert!(iter.next_row().await.is_none());
}

#[tokio::test]
async fn invalid_statement_is_reported_on_first_read() {
    let (session, log) = setup(records!(Tweet));

    let mut iter = session
        .statement(Command::Update)
        .from_type::<Tweet>()
        .iter();

    assert!(iter.next_row().await.unwrap().unwrap_err().is_invalid_statement());
    assert!(iter.next_row().await.is_none());
    assert!(log.is_empty());
}
