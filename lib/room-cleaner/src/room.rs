/*
 * Copyright (C) 2023 Asim Ihsan
 * SPDX-License-Identifier: AGPL-3.0-only
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU Affero General Public License as published by the Free
 * Software Foundation, version 3.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A
 * PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>
 */

use crate::error::{CleanRoomError, InputError};
use crate::instructions::{parse_instructions, Direction};
use crate::Environment;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// One square over in `direction`, or `None` if that leaves the `i32` range.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The room spans `0..=width` by `0..=height`; both edges are reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Room {
    width: i32,
    height: i32,
}

impl Room {
    pub fn new(width: i32, height: i32) -> Result<Self, InputError> {
        if width <= 0 || height <= 0 {
            return Err(InputError::NonPositiveRoom { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, location: Location) -> bool {
        (0..=self.width).contains(&location.x) && (0..=self.height).contains(&location.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareState {
    Clean,
    Dirty,
}

/// RoomPercept is what the robot's dirt sensor reports for the square directly beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomPercept {
    pub location: Location,
    pub square_state: SquareState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub position: Location,
    pub cleaned: usize,
}

impl Display for CleaningReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}\n{}",
            self.position.x, self.position.y, self.cleaned
        )
    }
}

#[derive(Debug, Clone)]
pub struct RoomSimulator {
    room: Room,
    position: Location,
    dirt: FxHashSet<Location>,
    cleaned: usize,
}

impl RoomSimulator {
    pub fn new(
        room: Room,
        start: Location,
        dirt: impl IntoIterator<Item = Location>,
    ) -> Result<Self, CleanRoomError> {
        if !room.contains(start) {
            return Err(InputError::OutsideRoom {
                what: "robot start",
                location: start,
            }
            .into());
        }
        let mut dirt_set = FxHashSet::default();
        for location in dirt {
            if !room.contains(location) {
                return Err(InputError::OutsideRoom {
                    what: "dirt",
                    location,
                }
                .into());
            }
            dirt_set.insert(location);
        }
        info!(
            width = room.width(),
            height = room.height(),
            %start,
            dirt = dirt_set.len(),
            "room ready"
        );
        Ok(Self {
            room,
            position: start,
            dirt: dirt_set,
            cleaned: 0,
        })
    }

    /// Run every instruction in order and report where the robot ended up.
    ///
    /// The instructions are decoded before anything moves, so an invalid character leaves the
    /// simulator untouched. Once the robot sets off, the square it starts on counts as visited;
    /// an empty instruction string cleans nothing.
    pub fn execute(&mut self, instructions: &str) -> Result<CleaningReport, CleanRoomError> {
        let directions = parse_instructions(instructions)?;
        if !directions.is_empty() {
            self.clean_current_square();
        }
        for direction in &directions {
            self.execute_action(direction);
        }
        info!(
            position = %self.position,
            cleaned = self.cleaned,
            "finished following instructions"
        );
        Ok(self.report())
    }

    pub fn report(&self) -> CleaningReport {
        CleaningReport {
            position: self.position,
            cleaned: self.cleaned,
        }
    }

    pub fn room(&self) -> Room {
        self.room
    }

    pub fn position(&self) -> Location {
        self.position
    }

    pub fn cleaned(&self) -> usize {
        self.cleaned
    }

    pub fn remaining_dirt(&self) -> usize {
        self.dirt.len()
    }

    fn clean_current_square(&mut self) {
        if self.dirt.remove(&self.position) {
            self.cleaned += 1;
            info!(position = %self.position, "removed dirt");
        }
    }
}

impl Environment for RoomSimulator {
    type Action = Direction;
    type Percept = RoomPercept;
    type Score = usize;

    fn percept(&self) -> Self::Percept {
        let square_state = if self.dirt.contains(&self.position) {
            SquareState::Dirty
        } else {
            SquareState::Clean
        };
        RoomPercept {
            location: self.position,
            square_state,
        }
    }

    fn execute_action(&mut self, action: &Self::Action) {
        let candidate = match self.position.step(*action) {
            Some(candidate) if self.room.contains(candidate) => candidate,
            _ => {
                debug!(%action, position = %self.position, "blocked by wall");
                return;
            }
        };
        self.position = candidate;
        debug!(%action, position = %self.position, "moved");
        self.clean_current_square();
    }

    fn score(&self) -> Self::Score {
        self.cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn simulator(width: i32, height: i32, start: (i32, i32), dirt: &[(i32, i32)]) -> RoomSimulator {
        RoomSimulator::new(
            Room::new(width, height).unwrap(),
            Location::new(start.0, start.1),
            dirt.iter().map(|&(x, y)| Location::new(x, y)),
        )
        .unwrap()
    }

    #[test]
    fn test_example_route() {
        let mut sim = simulator(5, 5, (1, 2), &[(1, 0), (2, 2), (2, 3)]);
        let report = sim.execute("NNESEESWNWW").unwrap();
        assert_eq!(report.position, Location::new(1, 3));
        assert_eq!(report.cleaned, 1);
        assert_eq!(sim.remaining_dirt(), 2);
    }

    #[test]
    fn test_west_at_origin_stays_put() {
        let mut sim = simulator(5, 5, (0, 0), &[]);
        let report = sim.execute("W").unwrap();
        assert_eq!(report.position, Location::new(0, 0));
    }

    #[test]
    fn test_south_at_origin_stays_put() {
        let mut sim = simulator(5, 5, (0, 0), &[]);
        assert_eq!(sim.execute("SSS").unwrap().position, Location::new(0, 0));
    }

    #[test]
    fn test_far_edges_are_reachable_but_not_passable() {
        let mut sim = simulator(3, 2, (0, 0), &[(3, 2)]);
        let report = sim.execute("EEEEENNNN").unwrap();
        assert_eq!(report.position, Location::new(3, 2));
        assert_eq!(report.cleaned, 1);
    }

    #[test]
    fn test_revisit_counts_once() {
        let mut sim = simulator(5, 5, (0, 0), &[(1, 0)]);
        let report = sim.execute("EWEWEW").unwrap();
        assert_eq!(report.cleaned, 1);
        assert_eq!(sim.remaining_dirt(), 0);
    }

    #[test]
    fn test_start_square_is_cleaned_once_robot_moves() {
        let mut sim = simulator(5, 5, (2, 2), &[(2, 2)]);
        assert_eq!(sim.percept().square_state, SquareState::Dirty);
        let report = sim.execute("NS").unwrap();
        assert_eq!(report.position, Location::new(2, 2));
        assert_eq!(report.cleaned, 1);
        assert_eq!(sim.percept().square_state, SquareState::Clean);
    }

    #[test]
    fn test_no_instructions_leaves_start_square_dirty() {
        let mut sim = simulator(5, 5, (2, 2), &[(2, 2)]);
        let report = sim.execute("").unwrap();
        assert_eq!(report.cleaned, 0);
        assert_eq!(sim.percept().square_state, SquareState::Dirty);
    }

    #[test]
    fn test_far_edge_at_i32_max_blocks_instead_of_overflowing() {
        let mut sim = simulator(i32::MAX, 1, (i32::MAX, 1), &[]);
        let report = sim.execute("EN").unwrap();
        assert_eq!(report.position, Location::new(i32::MAX, 1));
        assert_eq!(Location::new(i32::MAX, 0).step(Direction::East), None);
        assert_eq!(
            Location::new(0, i32::MIN).step(Direction::South),
            None
        );
    }

    #[test]
    fn test_duplicate_dirt_collapses() {
        let mut sim = simulator(5, 5, (0, 0), &[(0, 1), (0, 1), (0, 1)]);
        assert_eq!(sim.remaining_dirt(), 1);
        assert_eq!(sim.execute("N").unwrap().cleaned, 1);
    }

    #[test]
    fn test_invalid_instruction_leaves_state_untouched() {
        let mut sim = simulator(5, 5, (1, 1), &[(1, 1), (1, 2)]);
        assert_eq!(
            sim.execute("NNx"),
            Err(CleanRoomError::InvalidInstruction {
                instruction: 'x',
                index: 2
            })
        );
        assert_eq!(sim.position(), Location::new(1, 1));
        assert_eq!(sim.cleaned(), 0);
        assert_eq!(sim.remaining_dirt(), 2);
    }

    #[test]
    fn test_start_outside_room_is_rejected() {
        let result = RoomSimulator::new(
            Room::new(2, 2).unwrap(),
            Location::new(3, 0),
            std::iter::empty(),
        );
        assert_eq!(
            result.unwrap_err(),
            CleanRoomError::InvalidInput(InputError::OutsideRoom {
                what: "robot start",
                location: Location::new(3, 0),
            })
        );
    }

    #[test]
    fn test_dirt_outside_room_is_rejected() {
        let result = RoomSimulator::new(
            Room::new(2, 2).unwrap(),
            Location::new(0, 0),
            vec![Location::new(1, 1), Location::new(-1, 1)],
        );
        assert!(matches!(
            result,
            Err(CleanRoomError::InvalidInput(InputError::OutsideRoom { what: "dirt", .. }))
        ));
    }

    #[test]
    fn test_non_positive_room_is_rejected() {
        assert_eq!(
            Room::new(0, 4),
            Err(InputError::NonPositiveRoom {
                width: 0,
                height: 4
            })
        );
        assert!(Room::new(3, -1).is_err());
    }

    #[test]
    fn test_execute_action_and_score() {
        let mut sim = simulator(2, 1, (0, 0), &[(1, 0), (2, 1)]);
        assert_eq!(sim.score(), 0);
        sim.execute_action(&Direction::East);
        assert_eq!(sim.score(), 1);
        sim.execute_action(&Direction::North);
        sim.execute_action(&Direction::East);
        assert_eq!(sim.score(), 2);
        assert_eq!(sim.percept().location, Location::new(2, 1));
    }

    #[test]
    fn test_report_display() {
        let report = CleaningReport {
            position: Location::new(1, 3),
            cleaned: 1,
        };
        assert_eq!(report.to_string(), "1 3\n1");
    }

    #[test]
    fn test_report_json_round_trip() {
        let report = CleaningReport {
            position: Location::new(4, 0),
            cleaned: 2,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"position":{"x":4,"y":0},"cleaned":2}"#);
        assert_eq!(
            serde_json::from_str::<CleaningReport>(&json).unwrap(),
            report
        );
    }

    fn scenario() -> impl Strategy<Value = (i32, i32, (i32, i32), Vec<(i32, i32)>, String)> {
        (1..10i32, 1..10i32).prop_flat_map(|(width, height)| {
            (
                Just(width),
                Just(height),
                (0..=width, 0..=height),
                prop::collection::vec((0..=width, 0..=height), 0..12),
                "[NSEW]{0,64}",
            )
        })
    }

    proptest! {
        #[test]
        fn test_position_stays_in_room(
            (width, height, start, dirt, instructions) in scenario(),
        ) {
            let mut sim = simulator(width, height, start, &dirt);
            let report = sim.execute(&instructions).unwrap();
            prop_assert!(sim.room().contains(report.position));
        }

        #[test]
        fn test_cleaned_never_exceeds_distinct_dirt(
            (width, height, start, dirt, instructions) in scenario(),
        ) {
            let distinct: FxHashSet<_> = dirt.iter().copied().collect();
            let mut sim = simulator(width, height, start, &dirt);
            let report = sim.execute(&instructions).unwrap();
            prop_assert!(report.cleaned <= distinct.len());
            prop_assert_eq!(report.cleaned + sim.remaining_dirt(), distinct.len());
        }

        #[test]
        fn test_no_dirt_means_nothing_cleaned(
            (width, height, start, _dirt, instructions) in scenario(),
        ) {
            let mut sim = simulator(width, height, start, &[]);
            prop_assert_eq!(sim.execute(&instructions).unwrap().cleaned, 0);
        }

        #[test]
        fn test_cleaned_is_cumulative_across_runs(
            (width, height, start, dirt, instructions) in scenario(),
        ) {
            let distinct: FxHashSet<_> = dirt.iter().copied().collect();
            let mut sim = simulator(width, height, start, &dirt);
            let first = sim.execute(&instructions).unwrap();
            let second = sim.execute(&instructions).unwrap();
            prop_assert!(second.cleaned >= first.cleaned);
            prop_assert_eq!(second.cleaned + sim.remaining_dirt(), distinct.len());
        }
    }
}
