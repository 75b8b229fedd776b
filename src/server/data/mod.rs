//! Database repository layer.
//!
//! Repositories issue one statement per call against the shared connection pool and
//! convert SeaORM entity models into domain models before returning. There are no
//! retries and no multi-statement transactions; a failure aborts the whole call.

pub mod question;
pub mod user;

#[cfg(test)]
mod test;
