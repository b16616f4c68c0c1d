//! Policy scenario tests.
//!
//! Fixed reference strings with frame-by-frame expectations derived from
//! the replacement rules, plus the classic textbook results.

use pagesim::{run_all, run_policy, Mark, PolicyKind, ReferenceStream, StepTrace};

fn stream(ids: &[i64]) -> ReferenceStream {
    ReferenceStream::from_ids(ids.iter().copied()).unwrap()
}

fn traces(rows: &[&[Option<i64>]]) -> Vec<StepTrace> {
    rows.iter()
        .map(|row| StepTrace::from_ids(row.iter().copied()))
        .collect()
}

const CLASSIC: [i64; 7] = [0, 1, 2, 3, 0, 1, 4];
const TEXTBOOK: [i64; 13] = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];
const BELADY: [i64; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

// ============================================================================
// FIFO
// ============================================================================

/// Every reference faults: each page is pushed out just before it recurs.
#[test]
fn test_fifo_classic_stream() {
    let result = run_policy(PolicyKind::Fifo, &stream(&CLASSIC), 3).unwrap();

    assert_eq!(result.marks(), Mark::parse_seq("FFFFFFF").unwrap().as_slice());
    assert_eq!(result.faults(), 7);
    assert_eq!(
        result.traces(),
        traces(&[
            &[Some(0), None, None],
            &[Some(0), Some(1), None],
            &[Some(0), Some(1), Some(2)],
            &[Some(3), Some(1), Some(2)],
            &[Some(3), Some(0), Some(2)],
            &[Some(3), Some(0), Some(1)],
            &[Some(4), Some(0), Some(1)],
        ])
        .as_slice()
    );
}

#[test]
fn test_fifo_hits_leave_ring_pointer() {
    let result = run_policy(PolicyKind::Fifo, &stream(&[1, 2, 1, 3, 1]), 2).unwrap();

    assert_eq!(result.mark_string(), "FF/FF");
    assert_eq!(
        result.traces(),
        traces(&[
            &[Some(1), None],
            &[Some(1), Some(2)],
            &[Some(1), Some(2)],
            &[Some(3), Some(2)],
            &[Some(3), Some(1)],
        ])
        .as_slice()
    );
}

#[test]
fn test_fifo_belady_anomaly() {
    let stream = stream(&BELADY);
    let three = run_policy(PolicyKind::Fifo, &stream, 3).unwrap();
    let four = run_policy(PolicyKind::Fifo, &stream, 4).unwrap();

    assert_eq!(three.faults(), 9);
    assert_eq!(four.faults(), 10);
}

// ============================================================================
// LRU
// ============================================================================

#[test]
fn test_lru_classic_stream() {
    let result = run_policy(PolicyKind::Lru, &stream(&CLASSIC), 3).unwrap();

    assert_eq!(result.mark_string(), "FFFFFFF");
    assert_eq!(
        result.traces(),
        traces(&[
            &[Some(0), None, None],
            &[Some(0), Some(1), None],
            &[Some(0), Some(1), Some(2)],
            &[Some(1), Some(2), Some(3)],
            &[Some(2), Some(3), Some(0)],
            &[Some(3), Some(0), Some(1)],
            &[Some(0), Some(1), Some(4)],
        ])
        .as_slice()
    );
    // Before reference 5 (page 1), page 1 had just been evicted
    assert!(!result.traces()[4].contains(pagesim::Page::new(1)));
}

#[test]
fn test_lru_hit_moves_page_to_recent_end() {
    let result = run_policy(PolicyKind::Lru, &stream(&[1, 2, 3, 1, 4]), 3).unwrap();

    assert_eq!(result.mark_string(), "FFF/F");
    assert_eq!(result.traces()[3], StepTrace::from_ids([Some(2), Some(3), Some(1)]));
    // 2 is now least recent
    assert_eq!(result.traces()[4], StepTrace::from_ids([Some(3), Some(1), Some(4)]));
}

#[test]
fn test_lru_textbook_stream() {
    let result = run_policy(PolicyKind::Lru, &stream(&TEXTBOOK), 4).unwrap();
    assert_eq!(result.faults(), 6);
}

// ============================================================================
// Optimal
// ============================================================================

#[test]
fn test_optimal_textbook_stream() {
    let report = run_all(&stream(&TEXTBOOK), 4).unwrap();
    assert_eq!(report.optimal_faults(), 6);
}

#[test]
fn test_optimal_trace_keeps_slots() {
    let result = run_policy(PolicyKind::Optimal, &stream(&TEXTBOOK), 4).unwrap();

    assert_eq!(result.mark_string(), "FFFF/F/F/////");
    assert_eq!(
        result.traces()[5],
        StepTrace::from_ids([Some(3), Some(0), Some(1), Some(2)])
    );
    assert_eq!(
        result.traces()[12],
        StepTrace::from_ids([Some(3), Some(0), Some(4), Some(2)])
    );
}

#[test]
fn test_optimal_belady_stream() {
    let stream = stream(&BELADY);
    assert_eq!(run_policy(PolicyKind::Optimal, &stream, 3).unwrap().faults(), 7);
    assert_eq!(run_policy(PolicyKind::Optimal, &stream, 4).unwrap().faults(), 6);
}

// ============================================================================
// All policies
// ============================================================================

#[test]
fn test_single_frame_faults_on_every_change() {
    let stream = stream(&[1, 2, 1, 3, 2, 1, 4]);
    for kind in PolicyKind::ALL {
        let result = run_policy(kind, &stream, 1).unwrap();
        assert_eq!(result.faults(), stream.len(), "{}", kind);
        assert_eq!(result.efficiency(), 0.0);
    }
}

#[test]
fn test_single_frame_repeat_hits() {
    let stream = stream(&[5, 5, 6, 6, 6]);
    for kind in PolicyKind::ALL {
        assert_eq!(run_policy(kind, &stream, 1).unwrap().mark_string(), "F/F//");
    }
}

#[test]
fn test_frames_equal_to_distinct_pages() {
    let stream = stream(&TEXTBOOK);
    let distinct = stream.distinct_pages();

    for kind in PolicyKind::ALL {
        let result = run_policy(kind, &stream, distinct).unwrap();
        assert_eq!(result.faults(), distinct, "{}", kind);
    }
}

#[test]
fn test_more_frames_than_pages_keeps_empty_slots() {
    let result = run_policy(PolicyKind::Lru, &stream(&[1, 2, 1]), 5).unwrap();
    let last = result.traces().last().unwrap();

    assert_eq!(last.len(), 5);
    assert_eq!(last.resident_count(), 2);
}

#[test]
fn test_efficiency() {
    let report = run_all(&stream(&[1, 2, 1, 2]), 2).unwrap();

    assert_eq!(report.fifo().efficiency(), 50.0);
    assert_eq!(report.lru().hits(), 2);
    assert_eq!(report.fifo().stats().evictions, 0);
}
