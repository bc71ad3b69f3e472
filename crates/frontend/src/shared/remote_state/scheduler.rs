//! Time and task seam for the sync layer
//!
//! Everything that sleeps or spawns goes through [`Scheduler`], so the
//! coalescer and the query driver can run under a virtual clock in tests.

use futures::future::{FutureExt, LocalBoxFuture};

pub trait Scheduler: Clone + 'static {
    /// Milliseconds since an arbitrary epoch
    fn now_ms(&self) -> f64;

    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()>;

    /// Run a task to completion in the background
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

/// Browser event loop: `Date.now`, `setTimeout`, `spawn_local`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        gloo_timers::future::TimeoutFuture::new(ms).boxed_local()
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        leptos::task::spawn_local(task);
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::{Cell, RefCell};
    use std::future::Future;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use futures::executor::{LocalPool, LocalSpawner};
    use futures::future::{FutureExt, LocalBoxFuture};
    use futures::task::LocalSpawnExt;

    use super::Scheduler;

    struct Timer {
        deadline: f64,
        wake: oneshot::Sender<()>,
    }

    struct Clock {
        now: Cell<f64>,
        timers: RefCell<Vec<Timer>>,
    }

    /// Scheduler over a manually advanced clock
    #[derive(Clone)]
    pub struct ManualScheduler {
        clock: Rc<Clock>,
        spawner: LocalSpawner,
    }

    impl Scheduler for ManualScheduler {
        fn now_ms(&self) -> f64 {
            self.clock.now.get()
        }

        fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
            let (tx, rx) = oneshot::channel();
            self.clock.timers.borrow_mut().push(Timer {
                deadline: self.clock.now.get() + f64::from(ms),
                wake: tx,
            });
            async move {
                let _ = rx.await;
            }
            .boxed_local()
        }

        fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
            self.spawner.spawn_local(task).expect("spawn on test pool");
        }
    }

    /// Single-threaded executor plus the virtual clock driving it
    pub struct TestRuntime {
        pool: LocalPool,
        scheduler: ManualScheduler,
    }

    impl TestRuntime {
        pub fn new() -> Self {
            let pool = LocalPool::new();
            let scheduler = ManualScheduler {
                clock: Rc::new(Clock {
                    now: Cell::new(0.0),
                    timers: RefCell::new(Vec::new()),
                }),
                spawner: pool.spawner(),
            };
            Self { pool, scheduler }
        }

        pub fn scheduler(&self) -> ManualScheduler {
            self.scheduler.clone()
        }

        pub fn now(&self) -> f64 {
            self.scheduler.clock.now.get()
        }

        /// Spawn `fut` and keep its output once it completes
        pub fn spawn_capture<T: 'static>(
            &self,
            fut: impl Future<Output = T> + 'static,
        ) -> Rc<RefCell<Option<T>>> {
            let slot = Rc::new(RefCell::new(None));
            let out = slot.clone();
            self.scheduler.spawn(
                async move {
                    *out.borrow_mut() = Some(fut.await);
                }
                .boxed_local(),
            );
            slot
        }

        pub fn run_until_stalled(&mut self) {
            self.pool.run_until_stalled();
        }

        /// Move the clock forward, firing due timers in deadline order
        pub fn advance(&mut self, ms: f64) {
            let target = self.now() + ms;
            self.pool.run_until_stalled();
            loop {
                let next = self
                    .scheduler
                    .clock
                    .timers
                    .borrow()
                    .iter()
                    .map(|t| t.deadline)
                    .filter(|d| *d <= target)
                    .fold(None, |acc: Option<f64>, d| Some(acc.map_or(d, |a| a.min(d))));
                let Some(deadline) = next else { break };
                self.scheduler.clock.now.set(deadline);
                let due: Vec<Timer> = {
                    let mut timers = self.scheduler.clock.timers.borrow_mut();
                    let (due, rest): (Vec<Timer>, Vec<Timer>) =
                        timers.drain(..).partition(|t| t.deadline <= deadline);
                    *timers = rest;
                    due
                };
                for timer in due {
                    let _ = timer.wake.send(());
                }
                self.pool.run_until_stalled();
            }
            self.scheduler.clock.now.set(target);
            self.pool.run_until_stalled();
        }
    }

    #[test]
    fn test_timers_fire_in_order() {
        let mut rt = TestRuntime::new();
        let s = rt.scheduler();
        let log = Rc::new(RefCell::new(Vec::new()));
        for ms in [30u32, 10, 20] {
            let log = log.clone();
            let sleep = s.sleep(ms);
            s.spawn(
                async move {
                    sleep.await;
                    log.borrow_mut().push(ms);
                }
                .boxed_local(),
            );
        }
        rt.advance(15.0);
        assert_eq!(*log.borrow(), vec![10]);
        rt.advance(15.0);
        assert_eq!(*log.borrow(), vec![10, 20, 30]);
        assert_eq!(rt.now(), 30.0);
    }
}
