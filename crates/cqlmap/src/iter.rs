use crate::Session;

use cqlmap_core::{
    driver::{operation::Query, Operation},
    schema::Record,
    stmt::{Row, RowStream},
    Error, Result,
};
use tokio_stream::Stream;

/// A lazy cursor over the rows of a query.
///
/// The query is sent to the driver on the first read.
#[derive(Debug)]
pub struct Iter<'a> {
    session: &'a Session,
    state: State,
}

#[derive(Debug)]
enum State {
    Pending(Query),

    /// The statement could not be rendered; reported on the first read
    Invalid(Error),

    Streaming(RowStream),
    Done,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(session: &'a Session, query: Result<Query>) -> Iter<'a> {
        let state = match query {
            Ok(query) => State::Pending(query),
            Err(err) => State::Invalid(err),
        };

        Iter { session, state }
    }

    /// Returns the next row, starting the query if needed.
    pub async fn next_row(&mut self) -> Option<Result<Row>> {
        match std::mem::replace(&mut self.state, State::Done) {
            State::Pending(query) => match self.session.exec(Operation::Fetch(query)).await {
                Ok(response) => match response.into_rows() {
                    Ok(rows) => self.state = State::Streaming(rows),
                    Err(err) => return Some(Err(err)),
                },
                Err(err) => return Some(Err(err)),
            },
            State::Invalid(err) => return Some(Err(err)),
            state => self.state = state,
        }

        let State::Streaming(rows) = &mut self.state else {
            return None;
        };

        let next = rows.next().await;

        match &next {
            Some(Ok(row)) => tracing::trace!(columns = row.len(), "loaded row"),
            Some(Err(_)) | None => self.state = State::Done,
        }

        next
    }

    /// Loads the next row into `record`. Returns `false` once the rows are
    /// exhausted.
    pub async fn type_scan<R: Record>(&mut self, record: &mut R) -> Result<bool> {
        match self.next_row().await {
            Some(row) => {
                self.session.registry().column_refs(record).load(row?)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Loads every remaining row into a new record.
    pub async fn collect<R: Record + Default>(mut self) -> Result<Vec<R>> {
        let mut ret = vec![];

        while let Some(row) = self.next_row().await {
            let mut record = R::default();
            self.session.registry().column_refs(&mut record).load(row?)?;
            ret.push(record);
        }

        Ok(ret)
    }

    /// Converts the cursor into a stream of rows.
    pub fn into_stream(mut self) -> impl Stream<Item = Result<Row>> + 'a {
        async_stream::stream! {
            while let Some(row) = self.next_row().await {
                yield row;
            }
        }
    }
}
