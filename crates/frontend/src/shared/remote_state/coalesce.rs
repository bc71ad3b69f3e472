//! Debounced call coalescing
//!
//! A [`Coalescer`] turns a burst of calls into a single delayed invocation of
//! the wrapped function. In `latest` mode every caller of one window receives
//! the result of the call made with the last arguments; in `accumulate` mode
//! the function receives every argument of the window and each caller gets the
//! result at its own position.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture};

use super::scheduler::Scheduler;

/// Delay before the pending batch fires
#[derive(Clone)]
pub enum Wait {
    Fixed(u32),
    /// Evaluated on every call
    Dynamic(Rc<dyn Fn() -> u32>),
}

impl Wait {
    pub fn current(&self) -> u32 {
        match self {
            Wait::Fixed(ms) => *ms,
            Wait::Dynamic(f) => f(),
        }
    }
}

impl From<u32> for Wait {
    fn from(ms: u32) -> Self {
        Wait::Fixed(ms)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoalesceOptions {
    /// A cold call invokes immediately instead of waiting
    pub leading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoalesceError<E> {
    #[error("{0}")]
    Failed(E),
    #[error("batched call returned no result for position {0}")]
    MissingResult(usize),
    #[error("call was dropped before it settled")]
    Dropped,
}

type Reply<R, E> = oneshot::Sender<Result<R, CoalesceError<E>>>;
type LatestFn<A, R, E> = Rc<dyn Fn(A) -> LocalBoxFuture<'static, Result<R, E>>>;
type BatchFn<A, R, E> = Rc<dyn Fn(Vec<A>) -> LocalBoxFuture<'static, Result<Vec<R>, E>>>;

enum Invoke<A, R, E> {
    Latest(LatestFn<A, R, E>),
    Batch(BatchFn<A, R, E>),
}

impl<A, R, E> Clone for Invoke<A, R, E> {
    fn clone(&self) -> Self {
        match self {
            Invoke::Latest(f) => Invoke::Latest(f.clone()),
            Invoke::Batch(f) => Invoke::Batch(f.clone()),
        }
    }
}

struct Pending<A, R, E> {
    args: A,
    reply: Reply<R, E>,
}

struct State<A, R, E> {
    last_call_at: Option<f64>,
    pending: Vec<Pending<A, R, E>>,
    /// Bumped by every queued call; a timer only flushes its own generation
    generation: u64,
}

pub struct Coalescer<A, R, E, S> {
    scheduler: S,
    wait: Wait,
    options: CoalesceOptions,
    invoke: Invoke<A, R, E>,
    state: Rc<RefCell<State<A, R, E>>>,
}

impl<A, R, E, S: Clone> Clone for Coalescer<A, R, E, S> {
    fn clone(&self) -> Self {
        Self {
            scheduler: self.scheduler.clone(),
            wait: self.wait.clone(),
            options: self.options,
            invoke: self.invoke.clone(),
            state: self.state.clone(),
        }
    }
}

impl<A, R, E, S> Coalescer<A, R, E, S>
where
    A: 'static,
    R: Clone + 'static,
    E: Clone + 'static,
    S: Scheduler,
{
    /// Last call wins: `f` receives the arguments of the final call in a burst
    pub fn latest<F, Fut>(
        scheduler: S,
        wait: impl Into<Wait>,
        options: CoalesceOptions,
        f: F,
    ) -> Self
    where
        F: Fn(A) -> Fut + 'static,
        Fut: Future<Output = Result<R, E>> + 'static,
    {
        let invoke: LatestFn<A, R, E> = Rc::new(move |args| f(args).boxed_local());
        Self::with_invoke(scheduler, wait.into(), options, Invoke::Latest(invoke))
    }

    /// `f` receives every argument of the window, in call order
    pub fn accumulate<F, Fut>(
        scheduler: S,
        wait: impl Into<Wait>,
        options: CoalesceOptions,
        f: F,
    ) -> Self
    where
        F: Fn(Vec<A>) -> Fut + 'static,
        Fut: Future<Output = Result<Vec<R>, E>> + 'static,
    {
        let invoke: BatchFn<A, R, E> = Rc::new(move |args| f(args).boxed_local());
        Self::with_invoke(scheduler, wait.into(), options, Invoke::Batch(invoke))
    }

    fn with_invoke(scheduler: S, wait: Wait, options: CoalesceOptions, invoke: Invoke<A, R, E>) -> Self {
        Self {
            scheduler,
            wait,
            options,
            invoke,
            state: Rc::new(RefCell::new(State {
                last_call_at: None,
                pending: Vec::new(),
                generation: 0,
            })),
        }
    }

    /// Queue a call. The wrapped function runs in a spawned task, so the
    /// returned future only needs to be awaited by callers that want the result.
    pub fn call(&self, args: A) -> LocalBoxFuture<'static, Result<R, CoalesceError<E>>> {
        let wait = self.wait.current();
        let now = self.scheduler.now_ms();
        let cold = {
            let mut state = self.state.borrow_mut();
            let cold = state
                .last_call_at
                .map_or(true, |last| now - last > f64::from(wait));
            state.last_call_at = Some(now);
            cold
        };

        let (tx, rx) = oneshot::channel();

        if cold && self.options.leading {
            let this = self.clone();
            self.scheduler.spawn(
                async move {
                    this.invoke_batch(vec![Pending { args, reply: tx }]).await;
                }
                .boxed_local(),
            );
        } else {
            let generation = {
                let mut state = self.state.borrow_mut();
                state.pending.push(Pending { args, reply: tx });
                state.generation += 1;
                state.generation
            };
            let this = self.clone();
            let sleep = self.scheduler.sleep(wait);
            self.scheduler.spawn(
                async move {
                    sleep.await;
                    if this.state.borrow().generation != generation {
                        return;
                    }
                    let batch = std::mem::take(&mut this.state.borrow_mut().pending);
                    this.invoke_batch(batch).await;
                }
                .boxed_local(),
            );
        }

        async move { rx.await.unwrap_or(Err(CoalesceError::Dropped)) }.boxed_local()
    }

    async fn invoke_batch(&self, batch: Vec<Pending<A, R, E>>) {
        if batch.is_empty() {
            return;
        }
        let (mut args, replies): (Vec<A>, Vec<Reply<R, E>>) =
            batch.into_iter().map(|p| (p.args, p.reply)).unzip();

        match &self.invoke {
            Invoke::Latest(f) => {
                let Some(last) = args.pop() else { return };
                let result = f(last).await.map_err(CoalesceError::Failed);
                for reply in replies {
                    let _ = reply.send(result.clone());
                }
            }
            Invoke::Batch(f) => match f(args).await {
                Ok(results) => {
                    let mut results = results.into_iter();
                    for (index, reply) in replies.into_iter().enumerate() {
                        let _ = reply.send(results.next().ok_or(CoalesceError::MissingResult(index)));
                    }
                }
                Err(err) => {
                    for reply in replies {
                        let _ = reply.send(Err(CoalesceError::Failed(err.clone())));
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::super::scheduler::testing::{ManualScheduler, TestRuntime};
    use super::*;

    fn counting_latest(
        rt: &TestRuntime,
        wait: u32,
        leading: bool,
        calls: Rc<RefCell<Vec<i32>>>,
    ) -> Coalescer<i32, i32, String, ManualScheduler> {
        Coalescer::latest(rt.scheduler(), wait, CoalesceOptions { leading }, move |x: i32| {
            calls.borrow_mut().push(x);
            async move { Ok::<_, String>(x * 10) }
        })
    }

    #[test]
    fn test_burst_fires_once_after_last_call() {
        let mut rt = TestRuntime::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let c = counting_latest(&rt, 100, false, calls.clone());

        let a = rt.spawn_capture(c.call(1));
        rt.advance(50.0);
        let b = rt.spawn_capture(c.call(2));
        rt.advance(50.0);
        let d = rt.spawn_capture(c.call(3));

        rt.advance(99.0);
        assert!(calls.borrow().is_empty());
        rt.advance(1.0);
        assert_eq!(*calls.borrow(), vec![3]);

        assert_eq!(*a.borrow(), Some(Ok(30)));
        assert_eq!(*b.borrow(), Some(Ok(30)));
        assert_eq!(*d.borrow(), Some(Ok(30)));
    }

    #[test]
    fn test_leading_cold_call_fires_immediately() {
        let mut rt = TestRuntime::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let c = counting_latest(&rt, 100, true, calls.clone());

        let first = rt.spawn_capture(c.call(1));
        rt.run_until_stalled();
        assert_eq!(*calls.borrow(), vec![1]);
        assert_eq!(*first.borrow(), Some(Ok(10)));

        // warm now: debounced
        let _ = c.call(2);
        let _ = c.call(3);
        rt.advance(99.0);
        assert_eq!(*calls.borrow(), vec![1]);
        rt.advance(1.0);
        assert_eq!(*calls.borrow(), vec![1, 3]);

        // quiet period longer than wait: cold again
        rt.advance(150.0);
        let _ = c.call(4);
        rt.run_until_stalled();
        assert_eq!(*calls.borrow(), vec![1, 3, 4]);
    }

    #[test]
    fn test_accumulate_resolves_by_position() {
        let mut rt = TestRuntime::new();
        let batches = Rc::new(RefCell::new(Vec::new()));
        let seen = batches.clone();
        let c: Coalescer<&'static str, usize, String, _> =
            Coalescer::accumulate(rt.scheduler(), 20, CoalesceOptions::default(), move |args: Vec<&'static str>| {
                seen.borrow_mut().push(args.clone());
                async move { Ok::<_, String>(args.iter().map(|s| s.len()).collect()) }
            });

        let a = rt.spawn_capture(c.call("a"));
        let bb = rt.spawn_capture(c.call("bb"));
        let ccc = rt.spawn_capture(c.call("ccc"));
        rt.advance(20.0);

        assert_eq!(*batches.borrow(), vec![vec!["a", "bb", "ccc"]]);
        assert_eq!(*a.borrow(), Some(Ok(1)));
        assert_eq!(*bb.borrow(), Some(Ok(2)));
        assert_eq!(*ccc.borrow(), Some(Ok(3)));
    }

    #[test]
    fn test_short_batch_result_reports_missing_position() {
        let mut rt = TestRuntime::new();
        let c: Coalescer<u8, u8, String, _> =
            Coalescer::accumulate(rt.scheduler(), 10, CoalesceOptions::default(), |_args: Vec<u8>| async {
                Ok::<_, String>(vec![7])
            });
        let a = rt.spawn_capture(c.call(1));
        let b = rt.spawn_capture(c.call(2));
        rt.advance(10.0);
        assert_eq!(*a.borrow(), Some(Ok(7)));
        assert_eq!(*b.borrow(), Some(Err(CoalesceError::MissingResult(1))));
    }

    #[test]
    fn test_failure_reaches_every_caller() {
        let mut rt = TestRuntime::new();
        let c: Coalescer<u8, u8, String, _> =
            Coalescer::latest(rt.scheduler(), 10, CoalesceOptions::default(), |_x: u8| async {
                Err::<u8, _>("boom".to_string())
            });
        let a = rt.spawn_capture(c.call(1));
        let b = rt.spawn_capture(c.call(2));
        rt.advance(10.0);
        let expected = Some(Err(CoalesceError::Failed("boom".to_string())));
        assert_eq!(*a.borrow(), expected);
        assert_eq!(*b.borrow(), expected);
    }

    #[test]
    fn test_dynamic_wait_is_read_per_call() {
        let mut rt = TestRuntime::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let seen = calls.clone();
        let delay = Rc::new(Cell::new(50u32));
        let policy = delay.clone();
        let c: Coalescer<i32, (), String, _> = Coalescer::latest(
            rt.scheduler(),
            Wait::Dynamic(Rc::new(move || policy.get())),
            CoalesceOptions::default(),
            move |x: i32| {
                seen.borrow_mut().push(x);
                async { Ok::<_, String>(()) }
            },
        );

        let _ = c.call(1);
        delay.set(200);
        let _ = c.call(2);
        rt.advance(199.0);
        assert!(calls.borrow().is_empty());
        rt.advance(1.0);
        assert_eq!(*calls.borrow(), vec![2]);
    }
}
