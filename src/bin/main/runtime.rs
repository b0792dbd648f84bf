use embassy_futures::select::{Either, select};
use embassy_time::{Instant, Timer};
use log::{info, trace};
use sposa_core::{
    error::EngineError,
    input::Command,
    scheduler::{FireOutcome, Scheduler},
};

use super::{keys::CommandChannel, terminal::TerminalView};

fn now_ms() -> u64 {
    Instant::now().as_millis()
}

/// Make sure the timer driver fires and the clock moves before pacing words.
pub(super) async fn probe_timer() -> Result<(), EngineError> {
    let before = Instant::now();
    Timer::after_millis(1).await;
    if Instant::now() <= before {
        return Err(EngineError::TimerUnavailable(
            "clock did not advance across a timer wait".into(),
        ));
    }
    Ok(())
}

/// Race the next command against the pending tick until the engine closes.
///
/// Losing the race drops the timer future, which cancels it; a tick that is
/// already stale by the time it fires is discarded by the scheduler.
pub(super) async fn drive(
    scheduler: &mut Scheduler,
    commands: &'static CommandChannel,
    view: &mut TerminalView,
    autoplay: bool,
) -> std::io::Result<()> {
    scheduler.start();
    if autoplay {
        scheduler.apply(Command::TogglePause, now_ms());
    }
    view.present(scheduler)?;

    while !scheduler.is_closed() {
        let pending = scheduler.pending();
        let due = async move {
            match pending {
                Some(tick) => {
                    Timer::at(Instant::try_from_millis(tick.due_ms).unwrap_or(Instant::MAX)).await;
                    tick
                }
                None => core::future::pending().await,
            }
        };

        match select(commands.receive(), due).await {
            Either::First(command) => scheduler.apply(command, now_ms()),
            Either::Second(tick) => {
                if scheduler.fire(tick, now_ms()) == FireOutcome::Stale {
                    trace!("runtime: discarded stale tick {:?}", tick);
                }
            }
        }

        view.present(scheduler)?;
    }

    let player = scheduler.player();
    info!(
        "runtime: closed at {}/{} speed={:.1}",
        player.position(),
        player.total(),
        player.speed()
    );
    Ok(())
}
