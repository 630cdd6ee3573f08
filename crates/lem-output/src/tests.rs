//! Unit tests for lem-output.

#[cfg(test)]
mod helpers {
    use lem_core::Coord;
    use lem_flow::{EdmondsKarp, find_lanes};
    use lem_graph::{Colony, ColonyBuilder};
    use lem_schedule::{Schedule, Scheduler};

    /// `s-a-e` and `s-x-y-z-e`, three agents: `[2, 1]` load, 4 steps.
    pub fn fixture() -> (Colony, Schedule) {
        let rooms = ["s", "a", "x", "y", "z", "e"];
        let mut b = ColonyBuilder::new();
        for (i, name) in rooms.iter().enumerate() {
            b.add_room(name, Coord::new(i as i64, 0)).unwrap();
        }
        for (p, q) in [("s", "a"), ("a", "e"), ("s", "x"), ("x", "y"), ("y", "z"), ("z", "e")] {
            b.add_tunnel(p, q).unwrap();
        }
        b.set_start("s").unwrap();
        b.set_end("e").unwrap();
        let colony = b.build().unwrap();
        let lanes = find_lanes(&EdmondsKarp, &colony).unwrap();
        let schedule = Scheduler.plan(lanes, 3).unwrap();
        (colony, schedule)
    }

    pub fn input() -> Vec<String> {
        ["3", "##start", "s 0 0", "##end", "e 5 0"].map(String::from).to_vec()
    }
}

// ── Text ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod text {
    use crate::{RunSummary, StepEmitter, TextEmitter, TextOptions, emit_schedule};
    use super::helpers::{fixture, input};

    fn render(options: TextOptions) -> String {
        let (colony, schedule) = fixture();
        let input = input();
        let summary = RunSummary { agents: 3, max_flow: 2, input: &input, ..Default::default() };
        let mut out = TextEmitter::new(Vec::new(), options);
        emit_schedule(&schedule, &colony, &summary, &mut out).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn bare_steps() {
        let text = render(TextOptions::default());
        assert_eq!(
            text,
            "L1-a L3-x\n\
             L1-e L2-a L3-y\n\
             L2-e L3-z\n\
             L3-e\n"
        );
    }

    #[test]
    fn echo_then_blank_line() {
        let text = render(TextOptions { echo_input: true, ..Default::default() });
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(&lines[..6], ["3", "##start", "s 0 0", "##end", "e 5 0", ""]);
        assert_eq!(lines[6], "L1-a L3-x");
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn headers_and_flow_report() {
        let text = render(TextOptions { report_flow: true, step_headers: true, ..Default::default() });
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Max flow: 2");
        assert_eq!(lines[1], "Step 1: L1-a L3-x");
        assert_eq!(lines[4], "Step 4: L3-e");
    }

    #[test]
    fn finish_is_idempotent() {
        let mut out = TextEmitter::new(Vec::new(), TextOptions::default());
        out.finish().unwrap();
        out.finish().unwrap();
        assert!(out.into_inner().is_empty());
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv {
    use crate::{CsvEmitter, RunSummary, emit_schedule};
    use super::helpers::fixture;

    #[test]
    fn one_row_per_move() {
        let (colony, schedule) = fixture();
        let mut out = CsvEmitter::from_writer(Vec::new()).unwrap();
        let written = emit_schedule(&schedule, &colony, &RunSummary::default(), &mut out).unwrap();
        assert_eq!(written, 4);
    }

    #[test]
    fn file_has_header_and_rows() {
        let (colony, schedule) = fixture();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moves.csv");
        {
            let mut out = CsvEmitter::create(&path).unwrap();
            emit_schedule(&schedule, &colony, &RunSummary::default(), &mut out).unwrap();
        }
        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "step,agent,room");
        assert_eq!(lines[1], "1,1,a");
        assert_eq!(lines[2], "1,3,x");
        assert_eq!(lines.last(), Some(&"4,3,e"));
        assert_eq!(lines.len(), 1 + schedule.total_moves());
    }
}
