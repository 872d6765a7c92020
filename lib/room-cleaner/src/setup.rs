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

// Text layout, one item per line:
//
//   <width> <height>
//   <robot x> <robot y>
//   <dirt x> <dirt y>      zero or more
//   <instructions>

use crate::error::{CleanRoomError, InputError};
use crate::room::{CleaningReport, Location, Room, RoomSimulator};
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSetup {
    pub room: Room,
    pub start: Location,
    pub dirt: Vec<Location>,
    pub instructions: String,
}

impl RoomSetup {
    pub fn simulator(&self) -> Result<RoomSimulator, CleanRoomError> {
        RoomSimulator::new(self.room, self.start, self.dirt.iter().copied())
    }

    /// Build a fresh simulator and run this setup's instructions on it.
    pub fn run(&self) -> Result<CleaningReport, CleanRoomError> {
        self.simulator()?.execute(&self.instructions)
    }
}

impl FromStr for RoomSetup {
    type Err = CleanRoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines: Vec<(usize, &str)> = s
            .lines()
            .map(str::trim)
            .enumerate()
            .map(|(i, line)| (i + 1, line))
            .collect();
        while matches!(lines.last(), Some((_, line)) if line.is_empty()) {
            lines.pop();
        }

        match lines.len() {
            0 => return Err(InputError::MissingLine("room dimensions").into()),
            1 => return Err(InputError::MissingLine("robot start").into()),
            2 => return Err(InputError::MissingLine("robot start or instructions").into()),
            _ => {}
        }

        let (width, height) = parse_coordinate(lines[0])?;
        let room = Room::new(width, height)?;

        let (x, y) = parse_coordinate(lines[1])?;
        let start = Location::new(x, y);

        let (_, instructions) = lines[lines.len() - 1];
        let dirt = lines[2..lines.len() - 1]
            .iter()
            .map(|&line| parse_coordinate(line).map(|(x, y)| Location::new(x, y)))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(dirt = dirt.len(), instructions, "parsed room setup");
        Ok(Self {
            room,
            start,
            dirt,
            instructions: instructions.to_string(),
        })
    }
}

fn parse_coordinate((line, text): (usize, &str)) -> Result<(i32, i32), InputError> {
    let malformed = || InputError::MalformedCoordinate {
        line,
        text: text.to_string(),
    };
    let mut parts = text.split_whitespace();
    let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };
    let a = a.parse().map_err(|_| malformed())?;
    let b = b.parse().map_err(|_| malformed())?;
    Ok((a, b))
}
