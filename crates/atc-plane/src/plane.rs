//! The `Plane` agent and its per-tick step.

use atc_airport::{Airport, AirportRegistry};
use atc_core::{AirportId, GridPos, PlaneId, RunwayIndex, Tick};
use tracing::trace;

use crate::{PlaneCounters, PlaneError, PlaneParams, PlaneResult, PlaneState, Transition};

/// One plane shuttling between two airports.
///
/// The plane refers to its airports by id only; the airports themselves live
/// in the [`AirportRegistry`] passed to every [`step`][Self::step].
#[derive(Clone, Debug)]
pub struct Plane {
    pub id:      PlaneId,
    origin:      AirportId,
    destination: AirportId,
    position:    GridPos,
    target:      GridPos,
    state:       PlaneState,
    /// Gate hold, counted down in `Waiting` and `WaitAfterLanding`.
    hold:        u32,
    /// Runway occupancy, counted down in `TakingOff` and `Landing`.
    countdown:   u32,
    runway:      Option<RunwayIndex>,
    params:      PlaneParams,
    counters:    PlaneCounters,
}

impl Plane {
    /// A plane parked at `origin_position`, about to start its gate hold.
    pub fn new(
        id:              PlaneId,
        origin:          AirportId,
        destination:     AirportId,
        origin_position: GridPos,
        params:          PlaneParams,
    ) -> Self {
        Self {
            id,
            origin,
            destination,
            position:  origin_position,
            target:    origin_position,
            state:     PlaneState::Waiting,
            hold:      params.wait_ticks,
            countdown: 0,
            runway:    None,
            params,
            counters:  PlaneCounters::default(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn origin(&self) -> AirportId {
        self.origin
    }

    pub fn destination(&self) -> AirportId {
        self.destination
    }

    pub fn position(&self) -> GridPos {
        self.position
    }

    pub fn state(&self) -> PlaneState {
        self.state
    }

    pub fn runway(&self) -> Option<RunwayIndex> {
        self.runway
    }

    pub fn params(&self) -> &PlaneParams {
        &self.params
    }

    pub fn counters(&self) -> &PlaneCounters {
        &self.counters
    }

    // ── Step ──────────────────────────────────────────────────────────────

    /// Advance one tick: one state check, at most one transition.
    ///
    /// # Errors
    ///
    /// [`PlaneError::UnknownAirport`] if the origin or destination is missing
    /// from `airports`.  This is a setup bug; callers must stop the run.
    pub fn step(
        &mut self,
        airports: &mut AirportRegistry,
        tick:     Tick,
    ) -> PlaneResult<Option<Transition>> {
        for airport in [self.origin, self.destination] {
            if !airports.contains(airport) {
                return Err(PlaneError::UnknownAirport { plane: self.id, airport });
            }
        }

        let from = self.state;
        match self.state {
            PlaneState::Waiting => {
                if self.hold > 0 {
                    self.hold -= 1;
                } else {
                    match self.airport(airports, self.origin)?.request_runway(tick) {
                        Some(runway) => {
                            self.runway = Some(runway);
                            self.countdown = self.params.takeoff_ticks;
                            self.state = PlaneState::TakingOff;
                        }
                        None => {
                            self.counters.takeoff_delay_ticks += 1;
                            trace!(plane = %self.id, %tick, "takeoff delayed");
                        }
                    }
                }
            }

            PlaneState::TakingOff => {
                self.countdown = self.countdown.saturating_sub(1);
                if self.countdown == 0 {
                    self.release_held(airports, self.origin)?;
                    self.target = self.airport(airports, self.destination)?.position;
                    self.counters.takeoffs += 1;
                    self.state = PlaneState::Flying;
                }
            }

            PlaneState::Flying => {
                self.position = self.position.advance_toward(self.target, self.params.steps_per_tick());
                if self.position == self.target {
                    match self.airport(airports, self.destination)?.request_runway(tick) {
                        Some(runway) => {
                            self.runway = Some(runway);
                            self.countdown = self.params.landing_ticks;
                            self.state = PlaneState::Landing;
                        }
                        None => {
                            self.counters.landing_delay_ticks += 1;
                            trace!(plane = %self.id, %tick, "landing delayed");
                        }
                    }
                }
            }

            PlaneState::Landing => {
                self.countdown = self.countdown.saturating_sub(1);
                if self.countdown == 0 {
                    self.release_held(airports, self.destination)?;
                    self.counters.landings += 1;
                    self.hold = self.params.wait_ticks;
                    self.state = PlaneState::WaitAfterLanding;
                }
            }

            PlaneState::WaitAfterLanding => {
                if self.hold > 0 {
                    self.hold -= 1;
                } else {
                    std::mem::swap(&mut self.origin, &mut self.destination);
                    self.state = PlaneState::Waiting;
                }
            }
        }

        Ok((self.state != from).then_some(Transition { from, to: self.state }))
    }

    fn airport<'a>(
        &self,
        airports: &'a mut AirportRegistry,
        id:       AirportId,
    ) -> PlaneResult<&'a mut Airport> {
        airports
            .get_mut(id)
            .ok_or(PlaneError::UnknownAirport { plane: self.id, airport: id })
    }

    /// Return the held runway (if any) to `at`.
    fn release_held(&mut self, airports: &mut AirportRegistry, at: AirportId) -> PlaneResult<()> {
        if let Some(runway) = self.runway.take() {
            self.airport(airports, at)?.release_runway(runway);
        }
        Ok(())
    }
}
