//! Cooperative task scheduler.
//!
//! Every animation routine is an `async` block that suspends at explicit
//! [`next_tick`] / [`sleep`] points. The scheduler owns the live set and
//! resumes each task exactly once per pass, in admission order, on the calling
//! thread. No task runs concurrently with another, so tasks share the scene
//! through plain `Rc<RefCell<_>>` without locks.
//!
//! # Spawn policy
//!
//! Tasks spawned while a pass is running (a ship firing a projectile, a
//! spawner releasing a piece of debris) are queued on the [`Spawner`] and
//! admitted at the start of the *next* pass. A task therefore never receives
//! its first resume in the same pass that created it.
//!
//! # Lifecycle
//!
//! A task that suspends `N` times completes on its `N + 1`th resume and is
//! removed from the live set in that pass. A task that returns an error stops
//! the scheduler: [`Scheduler::step`] returns the error with the task's name
//! attached and the remaining tasks of that pass are not resumed.

use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::ops::ControlFlow;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, trace};

type TaskFuture = Pin<Box<dyn Future<Output = Result<()>>>>;

/// Identifier handed out at spawn time, unique for the scheduler's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct Task {
    id: TaskId,
    name: &'static str,
    future: TaskFuture,
}

#[derive(Default)]
struct SpawnQueue {
    next_id: u64,
    pending: Vec<Task>,
}

/// Cloneable handle for adding tasks, usable from inside running tasks.
#[derive(Clone, Default)]
pub struct Spawner {
    queue: Rc<RefCell<SpawnQueue>>,
}

impl Spawner {
    /// Queue `future` for admission at the start of the next pass.
    pub fn spawn<F>(&self, name: &'static str, future: F) -> TaskId
    where
        F: Future<Output = Result<()>> + 'static,
    {
        let mut queue = self.queue.borrow_mut();
        let id = TaskId(queue.next_id);
        queue.next_id += 1;
        queue.pending.push(Task {
            id,
            name,
            future: Box::pin(future),
        });
        trace!(task = name, %id, "task queued");
        id
    }

    /// Tasks waiting for the next pass.
    pub fn pending_len(&self) -> usize {
        self.queue.borrow().pending.len()
    }
}

impl fmt::Debug for Spawner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spawner")
            .field("pending", &self.pending_len())
            .finish()
    }
}

/// What one pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassReport {
    /// 1-based pass number.
    pub pass: u64,
    /// Tasks moved from the spawn queue into the live set.
    pub admitted: usize,
    /// Tasks resumed during the pass.
    pub resumed: usize,
    /// Tasks that finished and were removed.
    pub completed: usize,
}

#[derive(Default)]
pub struct Scheduler {
    live: Vec<Task>,
    spawner: Spawner,
    passes: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawner(&self) -> Spawner {
        self.spawner.clone()
    }

    pub fn spawn<F>(&self, name: &'static str, future: F) -> TaskId
    where
        F: Future<Output = Result<()>> + 'static,
    {
        self.spawner.spawn(name, future)
    }

    /// Tasks admitted and not yet finished.
    pub fn live_len(&self) -> usize {
        self.live.len()
    }

    pub fn pending_len(&self) -> usize {
        self.spawner.pending_len()
    }

    /// No live and no queued tasks.
    pub fn is_idle(&self) -> bool {
        self.live.is_empty() && self.pending_len() == 0
    }

    /// Passes run so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Names of live tasks in resume order, followed by queued ones.
    pub fn task_names(&self) -> Vec<&'static str> {
        let queue = self.spawner.queue.borrow();
        self.live
            .iter()
            .chain(queue.pending.iter())
            .map(|task| task.name)
            .collect()
    }

    /// Whether `id` is live or queued.
    pub fn contains(&self, id: TaskId) -> bool {
        self.live.iter().any(|task| task.id == id)
            || self.spawner.queue.borrow().pending.iter().any(|task| task.id == id)
    }

    /// Run one pass: admit queued tasks, then resume every live task once.
    pub fn step(&mut self) -> Result<PassReport> {
        let admitted = {
            let mut queue = self.spawner.queue.borrow_mut();
            let admitted = queue.pending.len();
            self.live.append(&mut queue.pending);
            admitted
        };
        self.passes += 1;

        let mut cx = Context::from_waker(Waker::noop());
        let before = self.live.len();
        let mut resumed = 0;
        let mut failure = None;

        self.live.retain_mut(|task| {
            if failure.is_some() {
                return true;
            }
            resumed += 1;
            match task.future.as_mut().poll(&mut cx) {
                Poll::Pending => true,
                Poll::Ready(Ok(())) => {
                    debug!(task = task.name, id = %task.id, "task finished");
                    false
                }
                Poll::Ready(Err(err)) => {
                    failure = Some(err.context(format!("task `{}` ({}) failed", task.name, task.id)));
                    false
                }
            }
        });

        if let Some(err) = failure {
            return Err(err);
        }

        Ok(PassReport {
            pass: self.passes,
            admitted,
            resumed,
            completed: before - self.live.len(),
        })
    }

    /// Run passes until the scheduler is idle or `after_pass` breaks.
    ///
    /// `after_pass` is called once after every pass (this is where the surface
    /// is redrawn). Between passes the thread sleeps for `interval`; a zero
    /// interval runs passes back to back. An idle scheduler returns at once
    /// without running a pass. Returns the number of passes run.
    pub fn run<F>(&mut self, interval: Duration, mut after_pass: F) -> Result<u64>
    where
        F: FnMut() -> Result<ControlFlow<()>>,
    {
        let start = self.passes;
        while !self.is_idle() {
            self.step()?;
            if after_pass()?.is_break() || self.is_idle() {
                break;
            }
            if !interval.is_zero() {
                std::thread::sleep(interval);
            }
        }
        Ok(self.passes - start)
    }
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("live", &self.task_names())
            .field("passes", &self.passes)
            .finish()
    }
}

/// Suspend point: completes after being polled `remaining` more times.
#[derive(Debug)]
#[must_use = "futures do nothing unless awaited"]
pub struct Sleep {
    remaining: u32,
}

impl Future for Sleep {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.remaining == 0 {
            return Poll::Ready(());
        }
        self.remaining -= 1;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

/// Suspend for `ticks` passes. `sleep(0)` does not suspend.
pub fn sleep(ticks: u32) -> Sleep {
    Sleep { remaining: ticks }
}

/// Suspend until the next pass.
pub fn next_tick() -> Sleep {
    sleep(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn task_with_n_suspends_finishes_on_resume_n_plus_one() {
        let mut scheduler = Scheduler::new();
        scheduler.spawn("sleeper", async {
            sleep(3).await;
            Ok(())
        });

        for pass in 1..=3 {
            let report = scheduler.step().unwrap();
            assert_eq!(report.completed, 0, "finished early on pass {pass}");
            assert_eq!(scheduler.live_len(), 1);
        }
        let report = scheduler.step().unwrap();
        assert_eq!(report.completed, 1);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn task_spawned_mid_pass_starts_next_pass() {
        let mut scheduler = Scheduler::new();
        let spawner = scheduler.spawner();
        let log = Rc::new(RefCell::new(Vec::new()));

        let parent_log = Rc::clone(&log);
        scheduler.spawn("parent", async move {
            parent_log.borrow_mut().push("parent");
            let child_log = Rc::clone(&parent_log);
            spawner.spawn("child", async move {
                child_log.borrow_mut().push("child");
                Ok(())
            });
            Ok(())
        });

        let first = scheduler.step().unwrap();
        assert_eq!(first.admitted, 1);
        assert_eq!(*log.borrow(), vec!["parent"]);
        assert_eq!(scheduler.pending_len(), 1);

        let second = scheduler.step().unwrap();
        assert_eq!(second.admitted, 1);
        assert_eq!(*log.borrow(), vec!["parent", "child"]);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn resumes_in_admission_order() {
        let mut scheduler = Scheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for name in ["a", "b", "c"] {
            let log = Rc::clone(&log);
            scheduler.spawn(name, async move {
                loop {
                    log.borrow_mut().push(name);
                    next_tick().await;
                }
            });
        }
        scheduler.step().unwrap();
        scheduler.step().unwrap();
        assert_eq!(*log.borrow(), vec!["a", "b", "c", "a", "b", "c"]);
    }

    #[test]
    fn failing_task_stops_the_pass() {
        let mut scheduler = Scheduler::new();
        let resumed_after = Rc::new(Cell::new(false));
        scheduler.spawn("broken", async { anyhow::bail!("boom") });
        let flag = Rc::clone(&resumed_after);
        scheduler.spawn("bystander", async move {
            flag.set(true);
            Ok(())
        });

        let err = scheduler.step().unwrap_err();
        assert!(format!("{err:#}").contains("task `broken` (#0) failed"));
        assert!(format!("{err:#}").contains("boom"));
        assert!(!resumed_after.get());
    }

    #[test]
    fn idle_scheduler_runs_no_pass() {
        let mut scheduler = Scheduler::new();
        let mut redraws = 0;
        let passes = scheduler
            .run(Duration::ZERO, || {
                redraws += 1;
                Ok(ControlFlow::Continue(()))
            })
            .unwrap();
        assert_eq!(passes, 0);
        assert_eq!(redraws, 0);
    }

    #[test]
    fn run_redraws_once_per_pass_until_idle() {
        let mut scheduler = Scheduler::new();
        scheduler.spawn("short", async {
            sleep(4).await;
            Ok(())
        });
        let mut redraws = 0;
        let passes = scheduler
            .run(Duration::ZERO, || {
                redraws += 1;
                Ok(ControlFlow::Continue(()))
            })
            .unwrap();
        assert_eq!(passes, 5);
        assert_eq!(redraws, 5);
    }

    #[test]
    fn after_pass_can_stop_the_loop() {
        let mut scheduler = Scheduler::new();
        scheduler.spawn("forever", async {
            loop {
                next_tick().await;
            }
        });
        let mut redraws = 0;
        let passes = scheduler
            .run(Duration::ZERO, || {
                redraws += 1;
                Ok(if redraws == 3 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                })
            })
            .unwrap();
        assert_eq!(passes, 3);
        assert_eq!(scheduler.live_len(), 1);
    }

    #[test]
    fn sleep_zero_is_ready() {
        let mut scheduler = Scheduler::new();
        scheduler.spawn("instant", async {
            sleep(0).await;
            Ok(())
        });
        assert_eq!(scheduler.step().unwrap().completed, 1);
    }

    #[test]
    fn contains_tracks_queued_and_live_tasks() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.spawn("one", async {
            next_tick().await;
            Ok(())
        });
        assert_eq!(id.to_string(), "#0");
        assert!(scheduler.contains(id));
        scheduler.step().unwrap();
        assert!(scheduler.contains(id));
        scheduler.step().unwrap();
        assert!(!scheduler.contains(id));
    }
}
