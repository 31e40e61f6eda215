use dioxus_logger::tracing;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;

use crate::{
    model::{command::Command, presence::EvaluationReason},
    service::presence::{
        command::CommandReply, triggers::SETTLE_DELAY, PresenceRouter, VoicePlatform,
    },
};

/// Work the dispatcher can carry out.
#[derive(Debug)]
pub enum Task {
    /// Re-run the routing policy.
    Evaluate(EvaluationReason),
    /// Move the designated user to main, then evaluate after the settle delay.
    RelocateDesignated,
    /// Run a text command and send the reply back.
    Command(Command, oneshot::Sender<CommandReply>),
}

enum Envelope {
    Now(Task),
    After(Duration, Task),
    Shutdown,
}

/// Cloneable sender side of the dispatcher queue.
///
/// Sending never blocks. If the dispatcher has stopped the task is dropped with a
/// warning, since there is nothing left to act on it.
#[derive(Clone)]
pub struct DispatcherHandle {
    sender: mpsc::UnboundedSender<Envelope>,
}

/// Receiving side of the queue, consumed by [`Dispatcher::new`].
pub struct Inbox {
    receiver: mpsc::UnboundedReceiver<Envelope>,
}

/// Creates a connected handle and inbox.
///
/// The handle can be given out before the dispatcher exists; tasks sent early wait
/// in the queue.
pub fn channel() -> (DispatcherHandle, Inbox) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (DispatcherHandle { sender }, Inbox { receiver })
}

impl DispatcherHandle {
    /// Queues a task for immediate execution.
    pub fn submit(&self, task: Task) {
        self.send(Envelope::Now(task));
    }

    /// Queues a task to run once `delay` has elapsed.
    ///
    /// Scheduled tasks are not coalesced; two schedules run twice.
    pub fn schedule(&self, delay: Duration, task: Task) {
        self.send(Envelope::After(delay, task));
    }

    /// Runs a command through the queue and waits for its reply.
    ///
    /// # Returns
    /// - `Some(CommandReply)` - The command ran
    /// - `None` - The dispatcher stopped before replying
    pub async fn command(&self, command: Command) -> Option<CommandReply> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.submit(Task::Command(command, reply_tx));
        reply_rx.await.ok()
    }

    /// Stops the dispatcher and cancels all pending scheduled tasks.
    pub fn shutdown(&self) {
        self.send(Envelope::Shutdown);
    }

    fn send(&self, envelope: Envelope) {
        if self.sender.send(envelope).is_err() {
            tracing::warn!("Dispatcher has stopped, dropping task");
        }
    }
}

/// Owns the router and executes queued and timed tasks one at a time.
pub struct Dispatcher<P> {
    router: PresenceRouter<P>,
    inbox: Inbox,
    timers: JoinSet<Task>,
    left_on_request: bool,
}

impl<P: VoicePlatform> Dispatcher<P> {
    pub fn new(router: PresenceRouter<P>, inbox: Inbox) -> Self {
        Self {
            router,
            inbox,
            timers: JoinSet::new(),
            left_on_request: false,
        }
    }

    /// Processes tasks until shut down or every handle is dropped.
    ///
    /// Pending timers are aborted when this returns.
    pub async fn run(mut self) {
        tracing::info!("Presence dispatcher started");

        loop {
            tokio::select! {
                envelope = self.inbox.receiver.recv() => match envelope {
                    Some(Envelope::Now(task)) => self.execute(task).await,
                    Some(Envelope::After(delay, task)) => self.start_timer(delay, task),
                    Some(Envelope::Shutdown) | None => break,
                },
                Some(fired) = self.timers.join_next(), if !self.timers.is_empty() => {
                    match fired {
                        Ok(task) => self.execute(task).await,
                        Err(e) => tracing::error!("Scheduled task failed: {}", e),
                    }
                }
            }
        }

        self.timers.abort_all();
        tracing::info!("Presence dispatcher stopped");
    }

    fn start_timer(&mut self, delay: Duration, task: Task) {
        self.timers.spawn(async move {
            tokio::time::sleep(delay).await;
            task
        });
    }

    async fn execute(&mut self, task: Task) {
        match task {
            // The agent's own disconnect after `$leave` is expected, not a drop to
            // recover from.
            Task::Evaluate(EvaluationReason::AgentDisconnected) if self.left_on_request => {
                tracing::debug!("Left voice on request, not rejoining");
            }
            Task::Evaluate(reason) => {
                self.left_on_request = false;
                self.router.evaluate(reason).await;
            }
            Task::RelocateDesignated => {
                self.router.relocate_designated().await;
                self.start_timer(
                    SETTLE_DELAY,
                    Task::Evaluate(EvaluationReason::DesignatedUser),
                );
            }
            Task::Command(command, reply_tx) => {
                let reply = self.router.execute(command).await;
                match reply {
                    CommandReply::Left => self.left_on_request = true,
                    CommandReply::Joining(_) | CommandReply::Checked(_) => {
                        self.left_on_request = false
                    }
                    _ => {}
                }
                if reply_tx.send(reply).is_err() {
                    tracing::warn!("Command reply receiver dropped");
                }
            }
        }
    }
}
