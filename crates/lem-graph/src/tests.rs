//! Unit tests for lem-graph.
//!
//! Colonies are hand-built or parsed from inline text; no fixture files.

#[cfg(test)]
mod helpers {
    use lem_core::Coord;
    use crate::{Colony, ColonyBuilder};

    /// `start - a - end` plus a detour `start - b - c - end`.
    pub fn two_route_colony() -> Colony {
        let mut b = ColonyBuilder::new();
        for (i, name) in ["start", "a", "b", "c", "end"].iter().enumerate() {
            b.add_room(name, Coord::new(i as i64, 0)).unwrap();
        }
        b.add_tunnel("start", "a").unwrap();
        b.add_tunnel("a", "end").unwrap();
        b.add_tunnel("start", "b").unwrap();
        b.add_tunnel("b", "c").unwrap();
        b.add_tunnel("c", "end").unwrap();
        b.set_start("start").unwrap();
        b.set_end("end").unwrap();
        b.build().unwrap()
    }
}

// ── Builder contract ──────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use lem_core::{Coord, RoomId};
    use crate::{ColonyBuilder, GraphError, Role};

    #[test]
    fn add_room_is_idempotent() {
        let mut b = ColonyBuilder::new();
        let first  = b.add_room("a", Coord::new(1, 2)).unwrap();
        let second = b.add_room("a", Coord::new(9, 9)).unwrap();
        assert_eq!(first, second);
        assert_eq!(b.room_count(), 1);

        b.add_room("z", Coord::default()).unwrap();
        b.set_start("a").unwrap();
        b.set_end("z").unwrap();
        let colony = b.build().unwrap();
        // First declaration wins.
        assert_eq!(colony.room(RoomId(0)).coord, Coord::new(1, 2));
    }

    #[test]
    fn tunnel_to_unknown_room() {
        let mut b = ColonyBuilder::new();
        b.add_room("a", Coord::default()).unwrap();
        assert_eq!(
            b.add_tunnel("a", "ghost"),
            Err(GraphError::UnknownRoom("ghost".into()))
        );
        assert_eq!(
            b.add_tunnel("ghost", "a"),
            Err(GraphError::UnknownRoom("ghost".into()))
        );
    }

    #[test]
    fn self_loop_rejected() {
        let mut b = ColonyBuilder::new();
        b.add_room("a", Coord::default()).unwrap();
        assert!(matches!(
            b.add_tunnel("a", "a"),
            Err(GraphError::InvalidTunnel { .. })
        ));
        assert_eq!(b.tunnel_count(), 0);
    }

    #[test]
    fn duplicate_tunnel_merges() {
        let mut b = ColonyBuilder::new();
        b.add_room("a", Coord::default()).unwrap();
        b.add_room("b", Coord::default()).unwrap();
        let t1 = b.add_tunnel("a", "b").unwrap();
        let t2 = b.add_tunnel("b", "a").unwrap();
        assert_eq!(t1, t2);
        assert_eq!(b.tunnel_count(), 1);

        b.set_start("a").unwrap();
        b.set_end("b").unwrap();
        let colony = b.build().unwrap();
        assert_eq!(colony.tunnel(t1).multiplicity, 2);
        // Still a single neighbour entry on each side.
        assert_eq!(colony.degree(colony.start()), 1);
        assert_eq!(colony.degree(colony.end()), 1);
    }

    #[test]
    fn duplicate_role_rejected() {
        let mut b = ColonyBuilder::new();
        b.add_room("a", Coord::default()).unwrap();
        b.add_room("b", Coord::default()).unwrap();
        b.set_start("a").unwrap();
        let err = b.set_start("b").unwrap_err();
        assert_eq!(
            err,
            GraphError::DuplicateRole {
                role:      Role::Start,
                existing:  "a".into(),
                duplicate: "b".into(),
            }
        );
        b.set_end("b").unwrap();
        assert!(matches!(
            b.set_end("a"),
            Err(GraphError::DuplicateRole { role: Role::End, .. })
        ));
    }

    #[test]
    fn role_on_unknown_room() {
        let mut b = ColonyBuilder::new();
        assert_eq!(b.set_end("nowhere"), Err(GraphError::UnknownRoom("nowhere".into())));
    }

    #[test]
    fn missing_roles() {
        let mut b = ColonyBuilder::new();
        b.add_room("a", Coord::default()).unwrap();
        assert!(matches!(b.build(), Err(GraphError::MissingRole(Role::Start))));

        let mut b = ColonyBuilder::new();
        b.add_room("a", Coord::default()).unwrap();
        b.set_start("a").unwrap();
        assert!(matches!(b.build(), Err(GraphError::MissingRole(Role::End))));
    }

    #[test]
    fn invalid_names() {
        let mut b = ColonyBuilder::new();
        for bad in ["", "Lobby", "#x", "a-b", "a b"] {
            assert!(
                matches!(b.add_room(bad, Coord::default()), Err(GraphError::InvalidRoomName { .. })),
                "{bad:?} should be rejected"
            );
        }
        assert_eq!(b.room_count(), 0);
    }

    #[test]
    fn start_equal_end_builds() {
        let mut b = ColonyBuilder::new();
        b.add_room("only", Coord::default()).unwrap();
        b.set_start("only").unwrap();
        b.set_end("only").unwrap();
        let colony = b.build().unwrap();
        assert_eq!(colony.start(), colony.end());
    }
}

// ── Colony queries ────────────────────────────────────────────────────────────

#[cfg(test)]
mod queries {
    #[test]
    fn lookup_and_roles() {
        let colony = super::helpers::two_route_colony();
        let a = colony.room_id("a").unwrap();
        assert_eq!(colony.name(a), "a");
        assert!(colony.is_interior(a));
        assert!(!colony.is_interior(colony.start()));
        assert!(!colony.is_interior(colony.end()));
        assert!(colony.room_id("missing").is_none());
    }

    #[test]
    fn neighbours_in_declaration_order() {
        let colony = super::helpers::two_route_colony();
        let names: Vec<_> = colony
            .neighbors(colony.start())
            .map(|(_, r)| colony.name(r).to_owned())
            .collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn tunnel_between_is_symmetric() {
        let colony = super::helpers::two_route_colony();
        let b = colony.room_id("b").unwrap();
        let c = colony.room_id("c").unwrap();
        let t = colony.tunnel_between(b, c).unwrap();
        assert_eq!(colony.tunnel_between(c, b), Some(t));
        assert_eq!(colony.tunnel(t).other(b), c);
        assert!(colony.tunnel_between(b, colony.end()).is_none());
    }
}

// ── Text loader ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Write;

    use crate::{GraphError, ParseError, Role, load_farm, parse_farm};

    const SIMPLE: &str = "\
3
##start
start 0 0
# a comment
a 1 0

##end
end 2 0
start-a
a-end
";

    #[test]
    fn parses_simple_farm() {
        let farm = parse_farm(SIMPLE).unwrap();
        assert_eq!(farm.agents, 3);
        assert_eq!(farm.colony.room_count(), 3);
        assert_eq!(farm.colony.tunnel_count(), 2);
        assert_eq!(farm.colony.name(farm.colony.start()), "start");
        assert_eq!(farm.colony.name(farm.colony.end()), "end");
        // Blank line dropped, comment kept.
        assert_eq!(farm.lines.len(), 9);
        assert_eq!(farm.lines[3], "# a comment");
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SIMPLE.as_bytes()).unwrap();
        let farm = load_farm(file.path()).unwrap();
        assert_eq!(farm.agents, 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_farm(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }

    #[test]
    fn empty_input() {
        assert!(matches!(parse_farm(""), Err(ParseError::Empty)));
    }

    #[test]
    fn bad_agent_count() {
        for text in ["zero\n", "0\n", "-4\n"] {
            assert!(matches!(
                parse_farm(text),
                Err(ParseError::Syntax { line: 1, .. })
            ));
        }
    }

    #[test]
    fn duplicate_start_reports_line() {
        let text = "1\n##start\na 0 0\n##start\nb 1 1\n##end\nc 2 2\n";
        match parse_farm(text).unwrap_err() {
            ParseError::Graph { line, source } => {
                assert_eq!(line, 5);
                assert!(matches!(source, GraphError::DuplicateRole { role: Role::Start, .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_room_in_tunnel() {
        let text = "1\n##start\na 0 0\n##end\nb 1 1\na-zz\n";
        match parse_farm(text).unwrap_err() {
            ParseError::Graph { line, source } => {
                assert_eq!(line, 6);
                assert_eq!(source, GraphError::UnknownRoom("zz".into()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn command_without_room() {
        let text = "1\n##start\na-b\n";
        assert!(matches!(parse_farm(text), Err(ParseError::Syntax { line: 3, .. })));

        let text = "1\na 0 0\n##end\n";
        assert!(matches!(parse_farm(text), Err(ParseError::Syntax { line: 3, .. })));
    }

    #[test]
    fn malformed_lines() {
        let base = "1\n##start\na 0 0\n##end\nb 1 1\n";
        for bad in ["a-b-c", "lonely", "a 1", "a x 1", "a 1 2 3", "-b"] {
            let text = format!("{base}{bad}\n");
            assert!(
                matches!(parse_farm(&text), Err(ParseError::Syntax { line: 6, .. })),
                "{bad:?} should be a syntax error"
            );
        }
    }

    #[test]
    fn missing_end_room() {
        let text = "1\n##start\na 0 0\n";
        assert!(matches!(
            parse_farm(text),
            Err(ParseError::Incomplete(GraphError::MissingRole(Role::End)))
        ));
    }
}
