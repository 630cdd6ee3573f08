//! Text loader for colony description files.
//!
//! # Format
//!
//! ```text
//! 3            <- agent count, first line, positive integer
//! ##start
//! s 0 0        <- room: <name> <x> <y>
//! a 1 0
//! ##end
//! e 2 0
//! s-a          <- tunnel: <name>-<name>
//! a-e
//! # anything else starting with '#' is a comment
//! ```
//!
//! `##start` / `##end` apply to the next room line; any other line in
//! between is an error.  Empty lines are skipped.  Structural rules
//! (duplicate roles, unknown rooms, self-loops) are left to
//! [`ColonyBuilder`] and reported with the offending line number.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

use lem_core::Coord;

use crate::{Colony, ColonyBuilder, GraphError, ParseError, ParseResult, Role};

// ── Public API ────────────────────────────────────────────────────────────────

/// A parsed input file: agent count, colony, and the accepted input lines
/// (kept so the front end can echo the input before the movement log).
#[derive(Clone, Debug)]
pub struct AntFarm {
    pub agents: u32,
    pub colony: Colony,
    pub lines:  Vec<String>,
}

/// Load an [`AntFarm`] from a file.
pub fn load_farm(path: &Path) -> ParseResult<AntFarm> {
    let file = File::open(path)?;
    load_farm_reader(BufReader::new(file))
}

/// Parse an [`AntFarm`] from an in-memory string.
pub fn parse_farm(text: &str) -> ParseResult<AntFarm> {
    load_farm_reader(Cursor::new(text))
}

/// Load an [`AntFarm`] from any buffered reader.
pub fn load_farm_reader<R: BufRead>(reader: R) -> ParseResult<AntFarm> {
    let mut parser = Parser::default();
    for (i, line) in reader.lines().enumerate() {
        parser.feed(i + 1, line?)?;
    }
    parser.finish()
}

// ── Parser state ──────────────────────────────────────────────────────────────

#[derive(Default)]
struct Parser {
    agents:  Option<u32>,
    builder: ColonyBuilder,
    /// Role announced by `##start` / `##end`, waiting for its room line.
    pending: Option<(Role, usize)>,
    lines:   Vec<String>,
}

enum Line<'a> {
    Blank,
    Command(Role),
    Comment,
    Room { name: &'a str, x: &'a str, y: &'a str },
    Tunnel { a: &'a str, b: &'a str },
    Malformed(&'static str),
}

impl Parser {
    fn feed(&mut self, line_no: usize, raw: String) -> ParseResult<()> {
        let text = raw.trim();

        if self.agents.is_none() {
            if text.is_empty() {
                return Err(ParseError::Syntax { line: line_no, msg: "missing agent count".into() });
            }
            let count = text.parse::<u32>().ok().filter(|&n| n > 0).ok_or_else(|| {
                ParseError::Syntax {
                    line: line_no,
                    msg:  format!("invalid agent count '{text}'"),
                }
            })?;
            self.agents = Some(count);
            self.lines.push(text.to_owned());
            return Ok(());
        }

        match classify(text) {
            Line::Blank => return Ok(()),
            Line::Comment => {}
            Line::Command(role) => {
                if let Some((pending, at)) = self.pending {
                    return Err(ParseError::Syntax {
                        line: line_no,
                        msg:  format!("##{pending} on line {at} is not followed by a room"),
                    });
                }
                self.pending = Some((role, line_no));
            }
            Line::Room { name, x, y } => {
                let coord = Coord::new(
                    parse_coord(line_no, x)?,
                    parse_coord(line_no, y)?,
                );
                self.builder.add_room(name, coord).map_err(at(line_no))?;
                if let Some((role, _)) = self.pending.take() {
                    self.builder.set_role(role, name).map_err(at(line_no))?;
                }
            }
            Line::Tunnel { a, b } => {
                self.expect_no_pending(line_no)?;
                self.builder.add_tunnel(a, b).map_err(at(line_no))?;
            }
            Line::Malformed(msg) => {
                return Err(ParseError::Syntax { line: line_no, msg: msg.to_owned() });
            }
        }
        self.lines.push(text.to_owned());
        Ok(())
    }

    fn expect_no_pending(&self, line_no: usize) -> ParseResult<()> {
        match self.pending {
            Some((role, at)) => Err(ParseError::Syntax {
                line: line_no,
                msg:  format!("##{role} on line {at} must be followed by a room"),
            }),
            None => Ok(()),
        }
    }

    fn finish(self) -> ParseResult<AntFarm> {
        let agents = self.agents.ok_or(ParseError::Empty)?;
        if let Some((role, at)) = self.pending {
            return Err(ParseError::Syntax {
                line: at,
                msg:  format!("##{role} is not followed by a room"),
            });
        }
        let colony = self.builder.build()?;
        log::info!(
            "loaded {} agents, {} rooms, {} tunnels",
            agents,
            colony.room_count(),
            colony.tunnel_count()
        );
        Ok(AntFarm { agents, colony, lines: self.lines })
    }
}

fn classify(text: &str) -> Line<'_> {
    if text.is_empty() {
        return Line::Blank;
    }
    match text {
        "##start" => return Line::Command(Role::Start),
        "##end"   => return Line::Command(Role::End),
        _ if text.starts_with('#') => return Line::Comment,
        _ => {}
    }

    let mut fields = text.split_whitespace();
    match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(name), Some(x), Some(y), None) => Line::Room { name, x, y },
        (Some(token), None, None, None) => match token.split_once('-') {
            Some((a, b)) if !a.is_empty() && !b.is_empty() && !b.contains('-') => {
                Line::Tunnel { a, b }
            }
            Some(_) => Line::Malformed("tunnel must be '<room>-<room>'"),
            None => Line::Malformed("expected '<name> <x> <y>' or '<room>-<room>'"),
        },
        _ => Line::Malformed("expected '<name> <x> <y>' or '<room>-<room>'"),
    }
}

fn parse_coord(line: usize, field: &str) -> ParseResult<i64> {
    field.parse::<i64>().map_err(|_| ParseError::Syntax {
        line,
        msg: format!("invalid coordinate '{field}'"),
    })
}

fn at(line: usize) -> impl Fn(GraphError) -> ParseError {
    move |source| ParseError::Graph { line, source }
}
