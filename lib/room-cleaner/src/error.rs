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

use crate::room::Location;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CleanRoomError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("invalid instruction {instruction:?} at index {index}")]
    InvalidInstruction { instruction: char, index: usize },
}

/// What was wrong with the room description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("missing {0} line")]
    MissingLine(&'static str),

    #[error("line {line}: expected two integers `<x> <y>`, found {text:?}")]
    MalformedCoordinate { line: usize, text: String },

    #[error("room dimensions must be positive, found {width} {height}")]
    NonPositiveRoom { width: i32, height: i32 },

    #[error("{what} at {location} lies outside the room")]
    OutsideRoom {
        what: &'static str,
        location: Location,
    },
}
