//! Records shared by the integration tests.

use cqlmap::Uuid;
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, PartialEq, cqlmap::Record)]
#[table = "tweet"]
#[key(id)]
pub struct Tweet {
    pub id: Uuid,
    pub timeline: String,
    pub text: String,
    pub time: i64,
}

impl Tweet {
    pub fn row(&self) -> cqlmap::Row {
        cqlmap::Row::new()
            .with("id", self.id)
            .with("timeline", &self.timeline)
            .with("text", &self.text)
            .with("time", self.time)
    }
}

#[derive(Debug, Default, Clone, PartialEq, cqlmap::Record)]
#[table = "timeline"]
#[key(id, time)]
pub struct Timeline {
    pub id: String,
    pub time: i64,
    pub tweet: Uuid,
}

#[derive(Debug, Default, Clone, PartialEq, cqlmap::Record)]
pub struct Users {
    #[key]
    pub name: String,

    #[column("followers")]
    pub following: Vec<String>,

    pub details: BTreeMap<String, String>,

    #[skip]
    pub cached: Option<String>,
}
