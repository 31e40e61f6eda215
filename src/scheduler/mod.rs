//! Task scheduling for the presence router.
//!
//! Gateway and voice callbacks never run routing logic themselves. They hand
//! [`dispatcher::Task`]s to a [`dispatcher::DispatcherHandle`], either for immediate
//! execution or after a settle delay, and a single dispatcher task executes them in
//! order.

pub mod dispatcher;

#[cfg(test)]
mod test;
