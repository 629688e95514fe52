//! End-of-run report: a read-only aggregation over final counters.

use std::fmt;

use atc_airport::Airport;
use atc_plane::Plane;
use atc_sim::Sim;
use serde::Serialize;

/// Max / min / mean of a sample.  An empty sample reads as all zeros.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct Stats {
    pub max:  f64,
    pub min:  f64,
    pub mean: f64,
}

impl Stats {
    pub fn of<I: IntoIterator<Item = f64>>(values: I) -> Stats {
        let mut n = 0usize;
        let mut sum = 0.0;
        let mut max = f64::NEG_INFINITY;
        let mut min = f64::INFINITY;
        for v in values {
            n += 1;
            sum += v;
            max = max.max(v);
            min = min.min(v);
        }
        if n == 0 {
            return Stats::default();
        }
        Stats { max, min, mean: sum / n as f64 }
    }
}

/// A sampled parameter next to the mean it was drawn around.
///
/// `declared_mean` is `None` for a supplied scenario, whose fleet was not
/// drawn around any configured mean.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct DeclaredStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_mean: Option<f64>,
    #[serde(flatten)]
    pub observed:      Stats,
}

/// One learned estimate.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QValue {
    pub eligible: u16,
    pub action:   String,
    pub value:    f64,
}

/// Per-airport section of the report.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AirportReport {
    pub airport:      u32,
    pub runways:      usize,
    pub learning:     bool,
    pub decisions:    u64,
    pub explorations: u64,
    pub grants:       u64,
    pub declines:     u64,
    pub q_values:     Vec<QValue>,
}

impl AirportReport {
    fn of(airport: &Airport) -> Self {
        let gate = airport.policy().as_learned();
        let stats = gate.map(|g| g.stats()).unwrap_or_default();
        let q_values = gate
            .map(|g| {
                g.table()
                    .entries()
                    .into_iter()
                    .map(|(s, a, value)| QValue { eligible: s.0, action: a.to_string(), value })
                    .collect()
            })
            .unwrap_or_default();
        Self {
            airport:      airport.id.0,
            runways:      airport.runway_count(),
            learning:     gate.is_some(),
            decisions:    stats.decisions,
            explorations: stats.explorations,
            grants:       stats.grants,
            declines:     stats.declines,
            q_values,
        }
    }
}

/// Summary of a finished (or halted) run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunReport {
    pub total_minutes:  u64,
    pub flights:        usize,
    pub airports:       usize,
    pub planes:         usize,
    /// Grid the airports were placed on; `None` for a supplied scenario.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_width:     Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_height:    Option<u32>,
    pub runways:        Stats,
    pub speed:          DeclaredStats,
    pub takeoff_time:   DeclaredStats,
    pub landing_time:   DeclaredStats,
    pub takeoffs:       Stats,
    pub landings:       Stats,
    pub takeoff_delays: Stats,
    pub landing_delays: Stats,
    pub airport_detail: Vec<AirportReport>,
}

impl RunReport {
    pub fn from_sim(sim: &Sim) -> Self {
        let world = &sim.world;
        let declared = |mean: u32| sim.generated.then_some(mean as f64);
        let planes = &sim.planes;

        Self {
            total_minutes:  sim.now().0,
            flights:        planes.len(),
            airports:       sim.airports.len(),
            planes:         planes.len(),
            grid_width:     sim.generated.then_some(world.grid_width),
            grid_height:    sim.generated.then_some(world.grid_height),
            runways:        Stats::of(sim.airports.iter().map(|a| a.runway_count() as f64)),
            speed: DeclaredStats {
                declared_mean: declared(world.mean_speed),
                observed:      over(planes, |p| p.params().speed),
            },
            takeoff_time: DeclaredStats {
                declared_mean: declared(world.mean_takeoff_ticks),
                observed:      over(planes, |p| p.params().takeoff_ticks as f64),
            },
            landing_time: DeclaredStats {
                declared_mean: declared(world.mean_landing_ticks),
                observed:      over(planes, |p| p.params().landing_ticks as f64),
            },
            takeoffs:       over(planes, |p| p.counters().takeoffs as f64),
            landings:       over(planes, |p| p.counters().landings as f64),
            takeoff_delays: over(planes, |p| p.counters().takeoff_delay_ticks as f64),
            landing_delays: over(planes, |p| p.counters().landing_delay_ticks as f64),
            airport_detail: sim.airports.iter().map(AirportReport::of).collect(),
        }
    }
}

fn over(planes: &[Plane], f: impl Fn(&Plane) -> f64) -> Stats {
    Stats::of(planes.iter().map(f))
}

fn count_line(f: &mut fmt::Formatter<'_>, label: &str, s: &Stats) -> fmt::Result {
    writeln!(f, "{label} -> max: {:.0}, min: {:.0}, mean: {:.2}", s.max, s.min, s.mean)
}

fn declared_line(f: &mut fmt::Formatter<'_>, label: &str, s: &DeclaredStats) -> fmt::Result {
    let o = &s.observed;
    match s.declared_mean {
        Some(declared) => writeln!(
            f,
            "{label} -> max: {:.2}, min: {:.2}, mean declared/computed: {:.2}/{:.2}",
            o.max, o.min, declared, o.mean
        ),
        None => writeln!(f, "{label} -> max: {:.2}, min: {:.2}, mean: {:.2}", o.max, o.min, o.mean),
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----- FINAL SUMMARY -----")?;
        writeln!(f, "Total minutes: {}", self.total_minutes)?;
        writeln!(f, "Total flights: {}", self.flights)?;
        writeln!(f, "Airports: {}", self.airports)?;
        writeln!(f, "Planes: {}", self.planes)?;
        if let (Some(w), Some(h)) = (self.grid_width, self.grid_height) {
            writeln!(f, "Grid: {w}x{h}")?;
        }
        count_line(f, "Runways per airport", &self.runways)?;
        declared_line(f, "Plane speed", &self.speed)?;
        declared_line(f, "Takeoff time per plane", &self.takeoff_time)?;
        declared_line(f, "Landing time per plane", &self.landing_time)?;
        count_line(f, "Takeoffs per plane", &self.takeoffs)?;
        count_line(f, "Landings per plane", &self.landings)?;
        count_line(f, "Takeoff delays", &self.takeoff_delays)?;
        count_line(f, "Landing delays", &self.landing_delays)?;
        for a in self.airport_detail.iter().filter(|a| a.learning) {
            writeln!(
                f,
                "Airport ID: {} ({} runways) -> decisions: {}, explored: {}, grants: {}, declines: {}",
                a.airport, a.runways, a.decisions, a.explorations, a.grants, a.declines
            )?;
        }
        write!(f, "-------------------------")
    }
}
