// tests/parser.rs
use rover_sim::{Command, Direction, ParseError, parse};

#[test]
fn test_simple_commands() {
    assert_eq!(parse("MOVE"), Ok(Command::Move));
    assert_eq!(parse("LEFT"), Ok(Command::Left));
    assert_eq!(parse("RIGHT"), Ok(Command::Right));
    assert_eq!(parse("REPORT"), Ok(Command::Report));
}

#[test]
fn test_case_and_whitespace_are_ignored() {
    assert_eq!(parse("move"), Ok(Command::Move));
    assert_eq!(parse("MoVe"), Ok(Command::Move));
    assert_eq!(parse("  MOVE  "), Ok(Command::Move));
    assert_eq!(
        parse("place 3,4,south"),
        Ok(Command::Place {
            x: 3,
            y: 4,
            direction: Direction::South
        })
    );
}

#[test]
fn test_place_all_directions() {
    for direction in Direction::ALL {
        assert_eq!(
            parse(&format!("PLACE 0,0,{direction}")),
            Ok(Command::Place { x: 0, y: 0, direction })
        );
    }
}

#[test]
fn test_place_negative_coordinates() {
    assert_eq!(
        parse("PLACE -1,-2,WEST"),
        Ok(Command::Place {
            x: -1,
            y: -2,
            direction: Direction::West
        })
    );
}

#[test]
fn test_place_wrong_argument_count() {
    for input in ["PLACE 1,2", "PLACE 1,2,NORTH,EXTRA", "PLACE"] {
        let err = parse(input).unwrap_err();
        assert_eq!(err, ParseError::PlaceArity, "{input}");
        assert!(err.to_string().contains("exactly 3 arguments"));
    }
}

#[test]
fn test_place_bad_fields() {
    for input in ["PLACE X,2,NORTH", "PLACE 1,Y,NORTH", "PLACE 1,2,INVALID", "PLACE 1.5,2,EAST"] {
        let err = parse(input).unwrap_err();
        assert!(matches!(err, ParseError::InvalidPlace(_)), "{input}");
        assert!(err.to_string().starts_with("Invalid PLACE command"));
    }
    assert_eq!(
        parse("place 1,2,up").unwrap_err().to_string(),
        "Invalid PLACE command: PLACE 1,2,UP"
    );
}

#[test]
fn test_unknown_command_keeps_raw_text() {
    let err = parse("Jump").unwrap_err();
    assert_eq!(err, ParseError::UnknownCommand("Jump".to_owned()));
    assert_eq!(err.to_string(), "Unknown command: 'Jump'");
    assert!(matches!(parse(""), Err(ParseError::UnknownCommand(_))));
    assert!(matches!(parse("MOVE NOW"), Err(ParseError::UnknownCommand(_))));
}

#[test]
fn test_display_parses_back() {
    let commands = [
        Command::Place { x: 2, y: 5, direction: Direction::East },
        Command::Move,
        Command::Left,
        Command::Right,
        Command::Report,
    ];
    for command in commands {
        assert_eq!(command.to_string().parse::<Command>(), Ok(command));
    }
}

#[test]
fn test_place_accepts_coordinates_wider_than_the_grid() {
    assert_eq!(
        parse("PLACE 99999999999,-99999999999,NORTH"),
        Ok(Command::Place {
            x: 99_999_999_999,
            y: -99_999_999_999,
            direction: Direction::North
        })
    );
}
