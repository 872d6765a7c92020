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

//! A robotic vacuum driven around a bounded room by a string of compass instructions.
//!
//! The robot starts somewhere in the room, some cells are dirty, and every dirty cell the robot
//! visits gets cleaned. Running the instructions yields the final position and how many dirt
//! patches were removed.

pub mod error;
pub mod instructions;
pub mod room;
pub mod setup;

pub use error::{CleanRoomError, InputError};
pub use instructions::{parse_instructions, Direction};
pub use room::{CleaningReport, Location, Room, RoomPercept, RoomSimulator, SquareState};
pub use setup::RoomSetup;

/// An Environment is something a robot senses and acts in.
///
/// The robot only sees the Percept of where it currently is, and can only change the Environment
/// through an Action. The Environment keeps its own score of how well the robot is doing.
pub trait Environment {
    type Action;
    type Percept;
    type Score: num_traits::NumAssign + Copy;

    fn percept(&self) -> Self::Percept;
    fn execute_action(&mut self, action: &Self::Action);

    /// Returns the score of the Environment in its current state. This is not a running total
    /// over time steps.
    fn score(&self) -> Self::Score;
}
