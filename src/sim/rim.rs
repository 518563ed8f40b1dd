//! The basket rim: a solid bar the ball bounces off, with a scoring zone through its middle
//!
//! Overlap is a pure query (`test_collision`). Edge detection lives in
//! `update`, which compares against the previous frame's snapshot so a ball
//! resting in the rim across several frames produces one bounce, not one per frame.
//! A basket only counts when the ball enters the scoring zone while falling.

use serde::{Deserialize, Serialize};

use super::geometry::Bound;
use crate::config::RimGeometry;

/// Which rim regions a ball overlaps this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RimContact {
    pub boundary: bool,
    pub scoring: bool,
}

/// What the orchestrator should act on this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RimEvents {
    /// Ball just entered the rim's solid bar
    pub bounce: bool,
    /// Ball dropped into the scoring zone, first time this flight
    pub score: bool,
}

/// The rim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rim {
    pub bounds: Bound,
    pub scoring_zone: Bound,
    /// Contact seen on the previous `update`
    previous: RimContact,
    /// Scored during the current flight
    scored: bool,
}

impl Rim {
    pub fn new(geometry: &RimGeometry) -> Self {
        Self::with_zones(geometry.bounds(), geometry.scoring_zone())
    }

    pub fn with_zones(bounds: Bound, scoring_zone: Bound) -> Self {
        Self {
            bounds,
            scoring_zone,
            previous: RimContact::default(),
            scored: false,
        }
    }

    /// Overlap of `ball` with the bar and with the scoring zone
    pub fn test_collision(&self, ball: &Bound) -> RimContact {
        RimContact {
            boundary: ball.overlaps(&self.bounds),
            scoring: ball.overlaps(&self.scoring_zone),
        }
    }

    /// Classify this frame against the last one and remember it.
    ///
    /// `falling` is whether the ball is moving down this frame. Entering the
    /// scoring zone while rising is not a basket, and a ball already inside
    /// the zone cannot turn it into one by starting to fall. A frame that
    /// scores never also bounces.
    pub fn update(&mut self, ball: &Bound, falling: bool) -> RimEvents {
        let contact = self.test_collision(ball);

        let score = contact.scoring && !self.previous.scoring && falling && !self.scored;
        if score {
            self.scored = true;
        }
        let bounce = contact.boundary && !self.previous.boundary && !score;

        self.previous = contact;
        RimEvents { bounce, score }
    }

    /// True while the ball was overlapping the bar on the last update
    pub fn is_marked(&self) -> bool {
        self.previous.boundary
    }

    pub fn has_scored(&self) -> bool {
        self.scored
    }

    /// Forget the previous frame and the score latch. Part of the episode reset.
    pub fn reset_mark(&mut self) {
        self.previous = RimContact::default();
        self.scored = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rim() -> Rim {
        // Bar 64 wide at (0,100), scoring zone below it
        Rim::with_zones(
            Bound::new(0.0, 100.0, 64.0, 8.0),
            Bound::new(8.0, 108.0, 48.0, 24.0),
        )
    }

    #[test]
    fn test_collision_regions() {
        let rim = rim();
        let far = Bound::new(300.0, 300.0, 32.0, 32.0);
        assert_eq!(rim.test_collision(&far), RimContact::default());

        let on_bar = Bound::new(40.0, 80.0, 32.0, 24.0);
        assert_eq!(
            rim.test_collision(&on_bar),
            RimContact {
                boundary: true,
                scoring: false
            }
        );

        let inside_zone = Bound::new(20.0, 112.0, 16.0, 16.0);
        assert!(rim.scoring_zone.contains(&inside_zone));
        assert!(rim.test_collision(&inside_zone).scoring);
        assert!(!rim.test_collision(&inside_zone).boundary);
    }

    #[test]
    fn test_sustained_overlap_bounces_once() {
        let mut rim = rim();
        let on_bar = Bound::new(40.0, 80.0, 32.0, 24.0);

        let events: Vec<_> = (0..5).map(|_| rim.update(&on_bar, true)).collect();
        assert_eq!(events.iter().filter(|e| e.bounce).count(), 1);
        assert!(events[0].bounce);
        assert!(rim.is_marked());
    }

    #[test]
    fn test_leaving_and_reentering_bounces_again() {
        let mut rim = rim();
        let on_bar = Bound::new(40.0, 80.0, 32.0, 24.0);
        let away = Bound::new(200.0, 0.0, 32.0, 32.0);

        assert!(rim.update(&on_bar, true).bounce);
        assert!(!rim.update(&away, true).bounce);
        assert!(!rim.is_marked());
        assert!(rim.update(&on_bar, true).bounce);
    }

    #[test]
    fn test_reset_mark_rearms_bounce() {
        let mut rim = rim();
        let on_bar = Bound::new(40.0, 80.0, 32.0, 24.0);

        assert!(rim.update(&on_bar, true).bounce);
        assert!(!rim.update(&on_bar, true).bounce);

        rim.reset_mark();
        assert!(!rim.is_marked());
        let bounces = (0..3).filter(|_| rim.update(&on_bar, true).bounce).count();
        assert_eq!(bounces, 1);
    }

    #[test]
    fn test_score_latched_per_flight() {
        let mut rim = rim();
        let inside_zone = Bound::new(20.0, 112.0, 16.0, 16.0);
        let away = Bound::new(200.0, 0.0, 32.0, 32.0);

        assert!(rim.update(&inside_zone, true).score);
        assert!(!rim.update(&inside_zone, true).score);
        rim.update(&away, true);
        // Falling back through the net does not count twice
        assert!(!rim.update(&inside_zone, true).score);
        assert!(rim.has_scored());

        rim.reset_mark();
        assert!(rim.update(&inside_zone, true).score);
    }

    #[test]
    fn test_scoring_frame_does_not_bounce() {
        let mut rim = rim();
        // Straddles the bar and the zone
        let straddle = Bound::new(16.0, 96.0, 32.0, 32.0);
        let contact = rim.test_collision(&straddle);
        assert!(contact.boundary && contact.scoring);

        let events = rim.update(&straddle, true);
        assert!(events.score);
        assert!(!events.bounce);
    }

    #[test]
    fn test_rising_entry_does_not_score() {
        let mut rim = rim();
        // Coming up from under the net
        let below_zone = Bound::new(20.0, 140.0, 16.0, 16.0);
        let in_zone = Bound::new(20.0, 120.0, 16.0, 16.0);

        rim.update(&below_zone, false);
        assert!(!rim.update(&in_zone, false).score);
        // Starting to fall while already inside is not an entry from above
        assert!(!rim.update(&in_zone, true).score);
        assert!(!rim.has_scored());
    }

    #[test]
    fn test_bar_hit_from_below_bounces_despite_zone_overlap() {
        let mut rim = rim();
        let straddle = Bound::new(16.0, 96.0, 32.0, 32.0);
        let events = rim.update(&straddle, false);
        assert!(events.bounce);
        assert!(!events.score);
    }
}
