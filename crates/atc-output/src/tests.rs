//! Integration tests for atc-output.

use atc_core::{AdmissionKind, AirportId, GridPos, PlaneId, SimConfig, WorldConfig};
use atc_scenario::{AirportSpec, PlaneSpec, Scenario};
use atc_sim::{Sim, SimBuilder};

fn shuttle(world: WorldConfig, total_ticks: u64, output_interval_ticks: u64) -> Sim {
    let scenario = Scenario {
        airports: vec![
            AirportSpec { id: AirportId(1), position: GridPos::new(0, 0), runways: 1 },
            AirportSpec { id: AirportId(2), position: GridPos::new(3, 0), runways: 3 },
        ],
        planes: vec![
            PlaneSpec {
                id:            PlaneId(1),
                origin:        AirportId(1),
                destination:   AirportId(2),
                speed:         5.0,
                takeoff_ticks: 2,
                landing_ticks: 3,
            },
            PlaneSpec {
                id:            PlaneId(2),
                origin:        AirportId(2),
                destination:   AirportId(1),
                speed:         4.0,
                takeoff_ticks: 1,
                landing_ticks: 4,
            },
        ],
    };
    let config = SimConfig { total_ticks, seed: 42, output_interval_ticks };
    SimBuilder::new(config, world).scenario(scenario).build().unwrap()
}

fn first_available() -> WorldConfig {
    WorldConfig { admission: AdmissionKind::FirstAvailable, ..WorldConfig::default() }
}

// ── Stats / RunReport ─────────────────────────────────────────────────────────

#[cfg(test)]
mod report_tests {
    use super::*;
    use crate::{RunReport, Stats};
    use atc_sim::NoopObserver;

    #[test]
    fn stats_of_sample() {
        let s = Stats::of([1.0, 4.0, 2.0, 1.0]);
        assert_eq!(s, Stats { max: 4.0, min: 1.0, mean: 2.0 });
    }

    #[test]
    fn stats_of_empty_is_zero() {
        assert_eq!(Stats::of(std::iter::empty()), Stats::default());
    }

    #[test]
    fn report_reads_final_counters() {
        let mut sim = shuttle(first_available(), 100, 0);
        sim.run(&mut NoopObserver).unwrap();
        let report = RunReport::from_sim(&sim);

        assert_eq!(report.total_minutes, 100);
        assert_eq!(report.planes, 2);
        assert_eq!(report.flights, 2);
        assert_eq!(report.airports, 2);
        assert_eq!(report.runways, Stats { max: 3.0, min: 1.0, mean: 2.0 });
        assert_eq!(report.speed.observed.mean, 4.5);
        assert_eq!(report.speed.declared_mean, None);
        assert_eq!(report.grid_width, None);
        assert_eq!(report.landing_time.observed.max, 4.0);

        let takeoffs: u64 = sim.planes.iter().map(|p| p.counters().takeoffs).sum();
        assert!(takeoffs > 0);
        assert_eq!(report.takeoffs.mean, takeoffs as f64 / 2.0);
        assert!(report.airport_detail.iter().all(|a| !a.learning && a.q_values.is_empty()));
    }

    #[test]
    fn learned_airports_expose_estimates() {
        let mut sim = shuttle(WorldConfig::default(), 200, 0);
        sim.run(&mut NoopObserver).unwrap();
        let report = RunReport::from_sim(&sim);
        for a in &report.airport_detail {
            assert!(a.learning);
            assert!(a.decisions > 0);
            assert!(a.grants + a.declines <= a.decisions);
            assert!(!a.q_values.is_empty());
        }
    }

    #[test]
    fn generated_world_reports_declared_means_and_grid() {
        let world = WorldConfig::default();
        let config = SimConfig { total_ticks: 20, seed: 42, output_interval_ticks: 0 };
        let mut sim = SimBuilder::new(config, world.clone()).build().unwrap();
        sim.run(&mut NoopObserver).unwrap();
        let report = RunReport::from_sim(&sim);

        assert_eq!(report.grid_width, Some(world.grid_width));
        assert_eq!(report.speed.declared_mean, Some(world.mean_speed as f64));
        assert_eq!(report.landing_time.declared_mean, Some(world.mean_landing_ticks as f64));

        let text = report.to_string();
        assert!(text.contains("Grid: 50x50"));
        assert!(text.contains("Plane speed -> max:"));
        assert!(text.contains("mean declared/computed: 5.00/"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["speed"]["declared_mean"], 5.0);
        assert_eq!(json["grid_height"], 50);
    }

    #[test]
    fn summary_text_and_json() {
        let mut sim = shuttle(WorldConfig::default(), 50, 0);
        sim.run(&mut NoopObserver).unwrap();
        let report = RunReport::from_sim(&sim);

        let text = report.to_string();
        assert!(text.starts_with("----- FINAL SUMMARY -----"));
        assert!(text.contains("Total minutes: 50"));
        assert!(!text.contains("Grid:"));
        assert!(!text.contains("declared"));
        assert!(text.contains("Plane speed -> max: 5.00, min: 4.00, mean: 4.50"));
        assert!(text.contains("Airport ID: 1 (1 runways)"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["planes"], 2);
        assert!(json["speed"].get("declared_mean").is_none());
        assert!(json.get("grid_width").is_none());
        assert_eq!(json["speed"]["mean"], 4.5);
        assert!(json["airport_detail"][0]["q_values"].is_array());
    }
}

// ── CSV writer ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use atc_plane::PlaneState;
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{PlaneSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{SNAPSHOTS_FILE, SUMMARIES_FILE};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(plane_id: u32, tick: u64, runway: Option<u16>) -> PlaneSnapshotRow {
        PlaneSnapshotRow {
            plane_id,
            tick,
            state:       PlaneState::TakingOff,
            x:           plane_id as i32,
            y:           0,
            origin:      1,
            destination: 2,
            runway,
        }
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOTS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["plane_id", "tick", "state", "x", "y", "origin", "destination", "runway"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join(SUMMARIES_FILE)).unwrap();
        assert_eq!(rdr2.headers().unwrap().len(), 8);
    }

    #[test]
    fn snapshot_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(1, 5, Some(0)), snap_row(2, 5, None)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOTS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][2], "taking_off");
        assert_eq!(&rows[0][7], "0");
        assert_eq!(&rows[1][7], "");
    }

    #[test]
    fn summary_row_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            tick:               3,
            transitions:        1,
            waiting:            2,
            taking_off:         1,
            flying:             0,
            landing:            0,
            wait_after_landing: 0,
            runways_in_use:     1,
        })
        .unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SUMMARIES_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][7], "1");
    }

    #[test]
    fn missing_directory_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope")).is_err());
    }
}

// ── SimOutputObserver ─────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;
    use crate::{
        CsvWriter, OutputError, OutputResult, OutputWriter, PlaneSnapshotRow, SNAPSHOTS_FILE,
        SUMMARIES_FILE, SimOutputObserver, TickSummaryRow,
    };

    #[derive(Default)]
    struct Memory {
        snapshots: Vec<PlaneSnapshotRow>,
        summaries: Vec<TickSummaryRow>,
        finished:  u32,
    }

    impl OutputWriter for Memory {
        fn write_snapshots(&mut self, rows: &[PlaneSnapshotRow]) -> OutputResult<()> {
            self.snapshots.extend_from_slice(rows);
            Ok(())
        }

        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            self.summaries.push(*row);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    struct Failing;

    impl OutputWriter for Failing {
        fn write_snapshots(&mut self, _rows: &[PlaneSnapshotRow]) -> OutputResult<()> {
            Ok(())
        }

        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other(format!("tick {}", row.tick))))
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn rows_follow_tick_loop() {
        let mut sim = shuttle(first_available(), 20, 5);
        let mut obs = SimOutputObserver::new(Memory::default());
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mem = obs.into_writer();
        assert_eq!(mem.summaries.len(), 20);
        assert_eq!(mem.finished, 1);
        // Snapshots at ticks 0, 5, 10, 15, two planes each.
        assert_eq!(mem.snapshots.len(), 8);
        assert_eq!(mem.snapshots[0].tick, 0);
        assert_eq!(mem.snapshots[7].tick, 15);
        for row in &mem.summaries {
            let total = row.waiting + row.taking_off + row.flying + row.landing + row.wait_after_landing;
            assert_eq!(total, 2);
        }
    }

    #[test]
    fn first_error_is_kept() {
        let mut sim = shuttle(first_available(), 10, 0);
        let mut obs = SimOutputObserver::new(Failing);
        sim.run(&mut obs).unwrap();
        match obs.take_error() {
            Some(OutputError::Io(e)) => assert_eq!(e.to_string(), "tick 0"),
            other => panic!("expected the tick-0 error, got {other:?}"),
        }
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn csv_files_filled_by_run() {
        let dir = tempfile::tempdir().unwrap();
        let mut sim = shuttle(WorldConfig::default(), 30, 10);
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let summaries = csv::Reader::from_path(dir.path().join(SUMMARIES_FILE))
            .unwrap()
            .records()
            .count();
        assert_eq!(summaries, 30);
        let snapshots = csv::Reader::from_path(dir.path().join(SNAPSHOTS_FILE))
            .unwrap()
            .records()
            .count();
        assert_eq!(snapshots, 6);
    }
}
