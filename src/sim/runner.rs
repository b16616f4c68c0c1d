//! Simulation runner - drives policies over a reference stream.
//!
//! Every run builds a fresh policy, so runs share no state and can be
//! repeated or executed concurrently with identical results.

use std::thread;

use tracing::{debug, trace};

use crate::common::{Error, ReferenceStream, Result};
use crate::policy::{PolicyKind, ReplacementPolicy};
use crate::sim::{FaultStats, RunResult, SimConfig, SimulationReport};

/// Drive an already-built policy over every reference in `stream`.
///
/// The policy should be fresh; its current frames are where the run starts.
pub fn run_with<P>(policy: &mut P, stream: &ReferenceStream) -> RunResult
where
    P: ReplacementPolicy + ?Sized,
{
    let kind = policy.kind();
    let frames = policy.frames().capacity();

    let mut traces = Vec::with_capacity(stream.len());
    let mut marks = Vec::with_capacity(stream.len());
    let mut stats = FaultStats::new();

    for (index, page) in stream.iter().enumerate() {
        let access = policy.access(stream, index);
        trace!(policy = %kind, index, %page, ?access, "reference");

        stats.record(access);
        marks.push(access.mark());
        traces.push(policy.frames().snapshot());
    }

    debug!(
        policy = %kind,
        frames,
        references = stats.references,
        faults = stats.faults,
        efficiency = stats.efficiency(),
        "run complete"
    );

    RunResult {
        policy: kind,
        frames,
        traces,
        marks,
        stats,
    }
}

/// Run a single policy with `frames` frames.
///
/// # Errors
/// - `Error::ZeroFrames` if `frames` is 0
/// - `Error::EmptyStream` if `stream` holds no references
pub fn run_policy(kind: PolicyKind, stream: &ReferenceStream, frames: usize) -> Result<RunResult> {
    check_inputs(stream, frames)?;

    let mut policy = kind.build(frames, stream);
    Ok(run_with(policy.as_mut(), stream))
}

/// Run FIFO and LRU in full and Optimal for its fault count.
///
/// # Errors
/// - `Error::ZeroFrames` if `frames` is 0
/// - `Error::EmptyStream` if `stream` holds no references
///
/// # Example
/// ```
/// use pagesim::{run_all, ReferenceStream};
///
/// let stream = ReferenceStream::from_ids([7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]).unwrap();
/// let report = run_all(&stream, 4).unwrap();
///
/// assert_eq!(report.optimal_faults(), 6);
/// assert!(report.optimal_faults() <= report.lru().faults());
/// ```
pub fn run_all(stream: &ReferenceStream, frames: usize) -> Result<SimulationReport> {
    check_inputs(stream, frames)?;

    let fifo = run_policy(PolicyKind::Fifo, stream, frames)?;
    let lru = run_policy(PolicyKind::Lru, stream, frames)?;
    let optimal = run_policy(PolicyKind::Optimal, stream, frames)?;

    Ok(report(stream, frames, fifo, lru, &optimal))
}

/// Same as [`run_all`], with FIFO and LRU on scoped worker threads.
///
/// # Errors
/// - `Error::ZeroFrames` if `frames` is 0
/// - `Error::EmptyStream` if `stream` holds no references
pub fn run_all_parallel(stream: &ReferenceStream, frames: usize) -> Result<SimulationReport> {
    check_inputs(stream, frames)?;

    let (fifo, lru, optimal) = thread::scope(|s| {
        let fifo = s.spawn(|| run_policy(PolicyKind::Fifo, stream, frames));
        let lru = s.spawn(|| run_policy(PolicyKind::Lru, stream, frames));
        let optimal = run_policy(PolicyKind::Optimal, stream, frames);

        (join(fifo), join(lru), optimal)
    });

    Ok(report(stream, frames, fifo?, lru?, &optimal?))
}

/// Run every policy selected in `config`, in order.
///
/// # Errors
/// - `Error::ZeroFrames` if `config.frames` is 0
/// - `Error::EmptyStream` if `stream` holds no references
pub fn run_configured(config: &SimConfig, stream: &ReferenceStream) -> Result<Vec<RunResult>> {
    check_inputs(stream, config.frames)?;

    if !config.parallel {
        return config
            .policies
            .iter()
            .map(|&kind| run_policy(kind, stream, config.frames))
            .collect();
    }

    thread::scope(|s| {
        let handles: Vec<_> = config
            .policies
            .iter()
            .map(|&kind| s.spawn(move || run_policy(kind, stream, config.frames)))
            .collect();

        handles.into_iter().map(join).collect()
    })
}

fn check_inputs(stream: &ReferenceStream, frames: usize) -> Result<()> {
    if frames == 0 {
        return Err(Error::ZeroFrames);
    }
    if stream.is_empty() {
        return Err(Error::EmptyStream);
    }
    Ok(())
}

fn report(
    stream: &ReferenceStream,
    frames: usize,
    fifo: RunResult,
    lru: RunResult,
    optimal: &RunResult,
) -> SimulationReport {
    SimulationReport {
        frames,
        references: stream.clone(),
        fifo,
        lru,
        optimal_faults: optimal.faults(),
    }
}

/// Join a worker, re-raising its panic on the calling thread.
fn join<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    match handle.join() {
        Ok(value) => value,
        Err(payload) => std::panic::resume_unwind(payload),
    }
}
