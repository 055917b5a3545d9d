use crate::common::{Terrain, TerrainError};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid number of Ants")]
    InvalidAnts,
    #[error("invalid format of room")]
    InvalidRoom,
    #[error("room name can't be started with 'L'")]
    ReservedPrefix,
    #[error("room name can't have '-'")]
    DashInName,
    #[error("room coords can only be numbers")]
    InvalidCoords,
    #[error(transparent)]
    Room(#[from] TerrainError),
    #[error("error with ## command")]
    BadCommand,
    #[error("invalid format of path")]
    InvalidLink,
    #[error("{source}. Line: '{line}'")]
    Link { line: String, source: TerrainError },
    #[error("here is no Ants")]
    NoAnts,
    #[error("here is no Rooms or Paths")]
    NoRooms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Ants,
    Rooms,
    Links,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Start,
    End,
}

/// A parsed colony: the ant count and the room graph.
#[derive(Debug, Clone)]
pub struct Colony {
    pub ants: usize,
    pub terrain: Terrain,
}

impl Colony {
    pub fn parse(content: &str) -> Result<Self, ParseError> {
        let mut parser = ColonyParser::new();
        for line in content.lines() {
            parser.read_line(line)?;
        }
        parser.finish()
    }
}

struct ColonyParser {
    section: Section,
    pending: Option<Marker>,
    ants: usize,
    terrain: Terrain,
}

impl ColonyParser {
    fn new() -> Self {
        ColonyParser {
            section: Section::Ants,
            pending: None,
            ants: 0,
            terrain: Terrain::new(),
        }
    }

    fn read_line(&mut self, line: &str) -> Result<(), ParseError> {
        if line.is_empty() || (line.starts_with('#') && !line.starts_with("##")) {
            return Ok(());
        }

        match self.section {
            Section::Ants => {
                self.ants = match line.parse::<i64>().map(usize::try_from) {
                    Ok(Ok(ants)) if ants >= 1 => ants,
                    _ => return Err(ParseError::InvalidAnts),
                };
                self.section = Section::Rooms;
                Ok(())
            }
            Section::Rooms => {
                if line.starts_with("##") {
                    return self.read_command(line);
                }
                if self.pending.is_none() && line.split(' ').count() != 3 {
                    debug!("switching to links at '{line}'");
                    self.section = Section::Links;
                    return self.read_link(line);
                }
                self.read_room(line)
            }
            Section::Links => self.read_link(line),
        }
    }

    fn read_command(&mut self, line: &str) -> Result<(), ParseError> {
        let marker = match line {
            "##start" if self.terrain.start().is_none() => Marker::Start,
            "##end" if self.terrain.end().is_none() => Marker::End,
            _ => return Err(ParseError::BadCommand),
        };
        if self.pending.is_some() {
            return Err(ParseError::BadCommand);
        }
        self.pending = Some(marker);
        Ok(())
    }

    fn read_room(&mut self, line: &str) -> Result<(), ParseError> {
        let fields: Vec<&str> = line.split(' ').collect();
        let [name, x, y] = fields[..] else {
            return Err(ParseError::InvalidRoom);
        };
        if name.is_empty() {
            return Err(ParseError::InvalidRoom);
        }
        if name.starts_with('L') {
            return Err(ParseError::ReservedPrefix);
        }
        if name.contains('-') {
            return Err(ParseError::DashInName);
        }
        if self.terrain.room_id(name).is_some() {
            return Err(TerrainError::DuplicateRoom(name.to_string()).into());
        }
        let (Ok(x), Ok(y)) = (x.parse::<i64>(), y.parse::<i64>()) else {
            return Err(ParseError::InvalidCoords);
        };

        let room = self.terrain.add_room(name, Some((x, y)))?;
        match self.pending.take() {
            Some(Marker::Start) => self.terrain.set_start(room),
            Some(Marker::End) => self.terrain.set_end(room),
            None => {}
        }
        Ok(())
    }

    fn read_link(&mut self, line: &str) -> Result<(), ParseError> {
        let names: Vec<&str> = line.split('-').collect();
        let [a, b] = names[..] else {
            return Err(ParseError::InvalidLink);
        };
        if a.is_empty() || b.is_empty() {
            return Err(ParseError::InvalidLink);
        }
        let added = self
            .terrain
            .add_corridor(a, b)
            .map_err(|source| ParseError::Link {
                line: line.to_string(),
                source,
            })?;
        if !added {
            debug!("duplicate link '{line}' ignored");
        }
        Ok(())
    }

    fn finish(self) -> Result<Colony, ParseError> {
        match self.section {
            Section::Ants => Err(ParseError::NoAnts),
            Section::Rooms => Err(ParseError::NoRooms),
            Section::Links => Ok(Colony {
                ants: self.ants,
                terrain: self.terrain,
            }),
        }
    }
}
