// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use interval_core::interval::Interval;
use interval_core::period::Period;
use interval_core::timestamp::Timestamp;
use interval_set::{IntervalSet, intersection, union};
use serde::Serialize;
use std::{fs::File, io::BufWriter};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT | FmtSpan::CLOSE)
        .init();
}

// One month at 1-hour resolution.
const DAYS: i64 = 30;
const HORIZON_H: i64 = 24 * DAYS;

type Sched = IntervalSet<Period<i64>>;

#[inline]
fn tp(h: i64) -> Timestamp<i64> {
    Timestamp::new(h)
}

#[inline]
fn per(a: i64, b: i64) -> Period<i64> {
    Period::new(tp(a), tp(b))
}

#[derive(Debug, Clone, Serialize)]
struct RoomSummary {
    name: String,
    bookings_made: usize,
    bookings_cancelled: usize,
    busy_blocks: usize,
    busy_hours: i64,
    free_blocks: usize,
    free_hours: i64,
}

#[derive(Debug, Clone, Serialize)]
struct ScheduleReport {
    description: String,
    horizon_hours: i64,
    rooms: Vec<RoomSummary>,
    co_free_blocks: usize,
    co_free_hours: i64,
    either_busy_hours: i64,
    first_week_co_free: Vec<String>,
}

#[inline]
fn covered_hours(set: &Sched) -> i64 {
    set.iter()
        .map(|p| p.max().value() - p.min().value())
        .sum()
}

// Deterministic synthetic booking pattern: daily standing blocks with a
// per-room phase, plus a handful of longer multi-day reservations.
fn book_room(name: &str, phase: i64, long_every_days: i64) -> (Sched, usize, usize) {
    let mut busy = Sched::new();
    let mut made = 0usize;

    for day in 0..DAYS {
        let base = day * 24;
        // morning block
        busy.add([per(base + 8 + phase, base + 10 + phase)]);
        // afternoon block, touching the morning one every other day
        let start = base + 10 + phase + (day % 2) * 2;
        busy.add([per(start, start + 3)]);
        made += 2;
    }

    for day in (0..DAYS).step_by(long_every_days as usize) {
        let base = day * 24;
        busy.add([per(base + 20, base + 20 + 30)]);
        made += 1;
    }

    // A recurring cancellation: one late-morning hour every fourth day is
    // released again, splitting the standing block it falls inside.
    let mut cancelled = 0usize;
    for day in (0..DAYS).step_by(4) {
        let base = day * 24;
        busy.sub([per(base + 11 + phase, base + 12 + phase)]);
        cancelled += 1;
    }

    info!(
        room = name,
        bookings = made,
        cancellations = cancelled,
        blocks = busy.len(),
        "room schedule built"
    );
    (busy, made, cancelled)
}

fn summarize(name: &str, busy: &Sched, free: &Sched, made: usize, cancelled: usize) -> RoomSummary {
    RoomSummary {
        name: name.to_string(),
        bookings_made: made,
        bookings_cancelled: cancelled,
        busy_blocks: busy.len(),
        busy_hours: covered_hours(busy),
        free_blocks: free.len(),
        free_hours: covered_hours(free),
    }
}

fn main() {
    enable_tracing();

    let horizon = per(0, HORIZON_H);

    let (busy_a, made_a, cancelled_a) = book_room("alpha", 0, 7);
    let (busy_b, made_b, cancelled_b) = book_room("beta", 1, 5);

    // Free time is whatever part of the horizon the bookings do not cover.
    let free_a = busy_a.complement(&horizon);
    let free_b = busy_b.complement(&horizon);

    // Sanity: free and busy partition the horizon for each room.
    debug_assert!(busy_a.is_subset(&busy_a.overlaps(&horizon)));
    debug_assert_eq!(
        covered_hours(&free_a) + covered_hours(&busy_a.overlaps(&horizon)),
        HORIZON_H
    );

    // Slots where both rooms are free, and hours where at least one is busy.
    let co_free = intersection([&free_a, &free_b]);
    let either_busy = union([&busy_a, &busy_b]);

    info!(
        co_free_blocks = co_free.len(),
        co_free_hours = covered_hours(&co_free),
        either_busy_hours = covered_hours(&either_busy),
        "cross-room availability computed"
    );

    // Walk the co-free blocks of the first week.
    let first_week = per(0, 24 * 7);
    let first_week_co_free: Vec<String> = co_free
        .iter_between(first_week)
        .map(|p| format!("{}", p))
        .collect();

    let report = ScheduleReport {
        description: format!(
            "Room scheduling demo: {} days at 1-hour resolution, two rooms.",
            DAYS
        ),
        horizon_hours: HORIZON_H,
        rooms: vec![
            summarize("alpha", &busy_a, &free_a, made_a, cancelled_a),
            summarize("beta", &busy_b, &free_b, made_b, cancelled_b),
        ],
        co_free_blocks: co_free.len(),
        co_free_hours: covered_hours(&co_free),
        either_busy_hours: covered_hours(&either_busy),
        first_week_co_free,
    };

    let file = File::create("schedule_report.json").expect("create schedule_report.json");
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &report).expect("write json report");

    println!();
    println!("=================================================================");
    println!("======================= Scheduling Done =========================");
    println!("=================================================================");
    println!();
    println!("Wrote: schedule_report.json");
    println!(
        "Co-free: {} blocks, {} hours out of {}",
        report.co_free_blocks, report.co_free_hours, report.horizon_hours
    );
}
