use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};
use tdorm_core::{
    async_trait,
    driver::{Connection, Driver, Rows},
    stmt::Value,
    Error, Result,
};

use crate::ExecLog;

/// A driver that records every statement it receives and answers with
/// scripted replies, in order.
///
/// `exec` with no reply queued reports zero affected rows; `query` with no
/// reply queued returns an empty result set.
#[derive(Debug, Clone, Default)]
pub struct MockDriver {
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
    replies: Arc<Mutex<VecDeque<Reply>>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverOp {
    Exec(String),
    Query(String),
    Ping,
}

#[derive(Debug)]
pub enum Reply {
    Affected(u64),
    Rows {
        columns: Vec<String>,
        rows: Vec<Vec<Value>>,
    },
    Error(Error),
}

impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the reply to the next `exec` or `query`.
    pub fn reply(&self, reply: Reply) -> &Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    /// Queues a result set.
    pub fn reply_rows(&self, columns: &[&str], rows: Vec<Vec<Value>>) -> &Self {
        self.reply(Reply::Rows {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        })
    }

    pub fn exec_log(&self) -> ExecLog {
        ExecLog::new(self.ops_log.clone())
    }
}

#[async_trait]
impl Driver for MockDriver {
    async fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(MockConnection {
            driver: self.clone(),
        }))
    }
}

#[derive(Debug)]
struct MockConnection {
    driver: MockDriver,
}

impl MockConnection {
    fn log(&self, op: DriverOp) {
        self.driver.ops_log.lock().unwrap().push(op);
    }

    fn next_reply(&self) -> Option<Reply> {
        self.driver.replies.lock().unwrap().pop_front()
    }
}

#[async_trait]
impl Connection for MockConnection {
    async fn exec(&mut self, sql: &str) -> Result<u64> {
        self.log(DriverOp::Exec(sql.to_string()));

        match self.next_reply() {
            None => Ok(0),
            Some(Reply::Affected(count)) => Ok(count),
            Some(Reply::Error(err)) => Err(err),
            Some(reply) => panic!("unexpected reply to exec; reply={reply:?}"),
        }
    }

    async fn query(&mut self, sql: &str) -> Result<Rows> {
        self.log(DriverOp::Query(sql.to_string()));

        match self.next_reply() {
            None => Ok(Rows::empty(vec![])),
            Some(Reply::Rows { columns, rows }) => Ok(Rows::new(columns, rows)),
            Some(Reply::Error(err)) => Err(err),
            Some(reply) => panic!("unexpected reply to query; reply={reply:?}"),
        }
    }

    async fn ping(&mut self) -> Result<()> {
        self.log(DriverOp::Ping);
        Ok(())
    }
}
