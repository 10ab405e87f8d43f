//! Propagation scheduler — a fixed worker pool over a bounded seed queue.
//!
//! ```text
//!  feeder ──(seed, polarity)──▶ [bounded task queue] ──▶ worker 0..N
//!                                                          │ propagate()
//!  consumer ◀──────────── ResultStream ◀── results channel ◀┘
//! ```
//!
//! Workers borrow the graph read-only through [`std::thread::scope`]; each
//! result map is moved through the channel to the single consumer. The
//! stream ends when every worker has exited and dropped its sender.

use std::sync::mpsc::{self, Receiver, SyncSender};
use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;
use tracing::{debug, debug_span};

use crate::config::validate_workers;
use crate::model::*;
use crate::{Error, Result};
use super::propagate;

/// Propagation output for one seed of one class.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedResult {
    pub seed: NodeId,
    pub polarity: Polarity,
    pub strengths: PathStrengths,
}

/// Per-seed results in completion order. Iteration ends once all workers
/// have finished.
pub struct ResultStream {
    rx: Receiver<SeedResult>,
}

impl Iterator for ResultStream {
    type Item = SeedResult;

    fn next(&mut self) -> Option<SeedResult> {
        self.rx.recv().ok()
    }
}

type TaskQueue = Arc<Mutex<Receiver<(NodeId, Polarity)>>>;

/// Propagate every seed of both classes on `workers` threads and lend the
/// result stream to `consume`, which runs on the calling thread.
///
/// The stream is dropped as soon as `consume` returns, whether or not it was
/// drained, so workers still holding results stop instead of blocking.
///
/// Blocks until `consume` returns and every worker has been joined. A seed
/// scheduled in both classes is propagated once per class.
///
/// # Errors
///
/// - [`Error::Config`] if `workers < 1` or `queue_capacity < 1`; nothing is
///   spawned in that case.
/// - [`Error::Io`] if a worker thread cannot be spawned.
/// - [`Error::Worker`] if a worker panicked. The consumer's output is
///   discarded since the stream it saw was incomplete.
pub fn run_all<F, T>(
    graph: &SimilarityGraph,
    seeds: &SeedSets,
    hop_budget: usize,
    workers: usize,
    queue_capacity: usize,
    consume: F,
) -> Result<T>
where
    F: FnOnce(&mut ResultStream) -> T,
{
    validate_workers(workers)?;
    if queue_capacity < 1 {
        return Err(Error::Config("queue_capacity must be at least 1".into()));
    }

    thread::scope(|scope| -> Result<T> {
        let (task_tx, task_rx) = mpsc::sync_channel::<(NodeId, Polarity)>(queue_capacity);
        let (result_tx, result_rx) = mpsc::sync_channel::<SeedResult>(workers);
        let task_rx: TaskQueue = Arc::new(Mutex::new(task_rx));

        let mut handles = Vec::with_capacity(workers);
        for worker in 0..workers {
            let tasks = Arc::clone(&task_rx);
            let results = result_tx.clone();
            let handle = thread::Builder::new()
                .name(format!("propagate-{worker}"))
                .spawn_scoped(scope, move || work(worker, graph, hop_budget, tasks, results))?;
            handles.push(handle);
        }
        // Workers hold the only remaining senders and receivers.
        drop(result_tx);
        drop(task_rx);

        let feeder = scope.spawn(move || feed(seeds, task_tx));

        let mut stream = ResultStream { rx: result_rx };
        let output = consume(&mut stream);
        drop(stream);

        let mut panicked = Vec::new();
        let mut completed = 0;
        for (worker, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(done) => completed += done,
                Err(_) => panicked.push(worker),
            }
        }
        debug!(completed, scheduled = seeds.len(), "propagation pool joined");
        if feeder.join().is_err() {
            return Err(Error::Worker("seed feeder panicked".into()));
        }
        if !panicked.is_empty() {
            return Err(Error::Worker(format!("propagation workers {panicked:?} panicked")));
        }
        Ok(output)
    })
}

fn feed(seeds: &SeedSets, tasks: SyncSender<(NodeId, Polarity)>) {
    for task in seeds.tagged() {
        // Fails only once every worker is gone.
        if tasks.send(task).is_err() {
            break;
        }
    }
}

fn work(
    worker: usize,
    graph: &SimilarityGraph,
    hop_budget: usize,
    tasks: TaskQueue,
    results: SyncSender<SeedResult>,
) -> usize {
    let _span = debug_span!("propagation_worker", worker).entered();
    let mut done = 0;
    loop {
        let next = tasks.lock().recv();
        let Ok((seed, polarity)) = next else { break };

        let strengths = propagate(graph, seed, hop_budget);
        debug!(%seed, %polarity, entries = strengths.len(), "seed propagated");

        if results.send(SeedResult { seed, polarity, strengths }).is_err() {
            break;
        }
        done += 1;
    }
    debug!(done, "worker finished");
    done
}
