use super::*;

/// Tests immediate tasks run in submission order.
///
/// Expected: startup evaluation joins main before the command is answered
#[tokio::test(start_paused = true)]
async fn runs_submitted_tasks_in_order() {
    let platform = FakePlatform::new().with_humans(MAIN_ID, 1);
    let handle = spawn_dispatcher(&platform);

    handle.submit(Task::Evaluate(EvaluationReason::Startup));
    let reply = handle.command(Command::Check).await;

    assert_eq!(reply, Some(CommandReply::Checked(1)));
    assert_eq!(platform.current(), Some(ChannelId::new(MAIN_ID)));
    assert_eq!(platform.connect_count(), 1);
}

/// Tests that a scheduled evaluation waits for its delay.
///
/// Expected: nothing before the settle delay, join after it
#[tokio::test(start_paused = true)]
async fn scheduled_task_waits_for_delay() {
    let platform = FakePlatform::new().with_humans(MAIN_ID, 1);
    let handle = spawn_dispatcher(&platform);

    handle.schedule(
        SETTLE_DELAY,
        Task::Evaluate(EvaluationReason::MainChannelActivity),
    );

    sleep(SETTLE_DELAY - Duration::from_millis(100)).await;
    assert_eq!(platform.connect_count(), 0);

    sleep(Duration::from_millis(200)).await;
    assert_eq!(platform.current(), Some(ChannelId::new(MAIN_ID)));
}

/// Tests that evaluations read occupancy when they fire, not when scheduled.
///
/// Expected: a second human arriving during the delay sends the agent to the
/// waiting area
#[tokio::test(start_paused = true)]
async fn scheduled_evaluation_reads_current_state() {
    let platform = FakePlatform::new().with_humans(MAIN_ID, 1);
    let handle = spawn_dispatcher(&platform);

    handle.schedule(
        SETTLE_DELAY,
        Task::Evaluate(EvaluationReason::MainChannelActivity),
    );
    platform.set_humans(MAIN_ID, 2);

    sleep(SETTLE_DELAY * 2).await;
    assert_eq!(platform.current(), Some(ChannelId::new(WAITING_ID)));
}

/// Tests overlapping schedules are not coalesced but stay harmless.
///
/// Expected: one connect despite two evaluations
#[tokio::test(start_paused = true)]
async fn overlapping_evaluations_join_once() {
    let platform = FakePlatform::new().with_humans(MAIN_ID, 1);
    let handle = spawn_dispatcher(&platform);

    handle.schedule(
        SETTLE_DELAY,
        Task::Evaluate(EvaluationReason::MainChannelActivity),
    );
    sleep(Duration::from_millis(300)).await;
    handle.schedule(
        SETTLE_DELAY,
        Task::Evaluate(EvaluationReason::MainChannelActivity),
    );

    sleep(SETTLE_DELAY * 3).await;
    assert_eq!(platform.connect_count(), 1);
}

/// Scenario: designated user joins elsewhere.
///
/// Expected: moved after the relocate delay, policy evaluated a settle delay later
#[tokio::test(start_paused = true)]
async fn relocation_then_evaluation() {
    let platform = FakePlatform::new()
        .with_member(TARGET_USER)
        .with_humans(MAIN_ID, 1);
    let handle = spawn_dispatcher(&platform);

    handle.schedule(RELOCATE_DELAY, Task::RelocateDesignated);

    sleep(RELOCATE_DELAY - Duration::from_millis(100)).await;
    assert!(platform.state().moves.is_empty());

    sleep(Duration::from_millis(200)).await;
    assert_eq!(
        platform.state().moves,
        vec![(UserId::new(TARGET_USER), ChannelId::new(MAIN_ID))]
    );
    assert_eq!(platform.connect_count(), 0);

    sleep(SETTLE_DELAY).await;
    assert_eq!(platform.current(), Some(ChannelId::new(MAIN_ID)));
}

/// Tests that the agent's own disconnect after `$leave` does not rejoin.
///
/// Expected: still disconnected after the reconnect delay
#[tokio::test(start_paused = true)]
async fn requested_leave_is_not_undone() {
    let platform = FakePlatform::new()
        .with_humans(MAIN_ID, 1)
        .connected_to(MAIN_ID);
    let handle = spawn_dispatcher(&platform);

    let reply = handle.command(Command::Leave).await;
    assert_eq!(reply, Some(CommandReply::Left));

    handle.schedule(
        RECONNECT_DELAY,
        Task::Evaluate(EvaluationReason::AgentDisconnected),
    );
    sleep(RECONNECT_DELAY * 2).await;

    assert_eq!(platform.current(), None);
}

/// Tests that an involuntary disconnect rejoins after the reconnect delay.
///
/// Expected: agent back in main
#[tokio::test(start_paused = true)]
async fn dropped_connection_rejoins() {
    let platform = FakePlatform::new().with_humans(MAIN_ID, 1);
    let handle = spawn_dispatcher(&platform);

    handle.schedule(
        RECONNECT_DELAY,
        Task::Evaluate(EvaluationReason::AgentDisconnected),
    );
    sleep(RECONNECT_DELAY + Duration::from_millis(100)).await;

    assert_eq!(platform.current(), Some(ChannelId::new(MAIN_ID)));
}

/// Tests shutdown cancels pending timers.
///
/// Expected: no join after the delay, later sends are dropped
#[tokio::test(start_paused = true)]
async fn shutdown_cancels_timers() {
    let platform = FakePlatform::new().with_humans(MAIN_ID, 1);
    let handle = spawn_dispatcher(&platform);

    handle.schedule(
        SETTLE_DELAY,
        Task::Evaluate(EvaluationReason::MainChannelActivity),
    );
    handle.shutdown();

    sleep(SETTLE_DELAY * 2).await;
    assert_eq!(platform.connect_count(), 0);
    assert_eq!(handle.command(Command::Check).await, None);
}
