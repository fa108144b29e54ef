use nix::unistd::{fork, ForkResult};
use std::time::Duration;

/// How long the parent lingers after spawning, so the zombies stay
/// observable in the process table.
pub const LINGER: Duration = Duration::from_secs(600);

/// Tally of one spawn run. Child PIDs are deliberately not kept:
/// the whole point is that the parent never reaps anything.
#[derive(Debug, PartialEq, Eq)]
pub struct SpawnOutcome {
    pub requested: usize,
    pub spawned: usize,
    pub failed: usize,
}

/// Forks `count` children that each terminate at once without running
/// exit handlers. The parent never waits on them, so every child that
/// exits stays in the process table as a zombie until an ancestor
/// collects its status.
///
/// A failed fork is reported on stderr and counted in the outcome;
/// the loop carries on with the remaining forks.
pub fn spawn_zombies(count: usize) -> SpawnOutcome {
    let mut outcome = SpawnOutcome {
        requested: count,
        spawned: 0,
        failed: 0,
    };

    for _ in 0..count {
        match unsafe { fork() } {
            Ok(ForkResult::Child) => {
                // Child exits immediately, skipping all cleanup.
                unsafe { libc::_exit(0) };
            }
            Ok(ForkResult::Parent { .. }) => {
                // The child PID is dropped on purpose.
                outcome.spawned += 1;
            }
            Err(err) => {
                eprintln!("fork error: {}", err);
                outcome.failed += 1;
            }
        }
    }

    outcome
}
