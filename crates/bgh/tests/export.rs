use bg_analysis::{
    CandidateMove, CheckerPlay, EvalKind, HintDecision, HintRequest, MatchRecord, PositionClass,
    PrecomputedResignation, ResignValue,
};
use bg_core::{Board, CubeContext, Dice, Player};
use bgh::{ExportError, Exporter, OutputOptions};
use std::io::Read;

const MONEY_GAME: &str = r#"{
  "games": [
    {
      "info": { "game_number": 1 },
      "records": [
        {
          "player": "0",
          "ctx": { "cube_value": 1, "on_roll": "0" },
          "action": {
            "type": "normal",
            "dice": [3, 1],
            "moves": [
              { "notation": "8/5 6/5", "equity": 0.15, "eval": { "evaluation": { "plies": 2 } } },
              { "notation": "24/21 24/23", "equity": 0.05, "eval": { "evaluation": { "plies": 2 } } }
            ],
            "chosen": 0,
            "luck": 0.4,
            "cube": {
              "equities": { "no_double": 0.4, "double_take": 0.3, "double_pass": 1.0, "optimal": 0.4 },
              "eval": { "evaluation": { "plies": 2 } }
            }
          }
        },
        {
          "player": "0",
          "ctx": { "cube_value": 1, "on_roll": "0" },
          "action": {
            "type": "double",
            "cube": {
              "equities": { "no_double": 0.3, "double_take": 0.8, "double_pass": 1.0, "optimal": 0.8 },
              "eval": { "evaluation": { "plies": 2 } }
            }
          }
        },
        {
          "player": "1",
          "ctx": { "cube_value": 1, "on_roll": "0" },
          "comment": "nice take",
          "action": {
            "type": "take",
            "cube": {
              "equities": { "no_double": 0.3, "double_take": 0.8, "double_pass": 1.0, "optimal": 0.8 },
              "eval": { "evaluation": { "plies": 2 } }
            }
          }
        }
      ]
    }
  ]
}"#;

const DOUBLE_TAKE_LINES: &str = ":\n  3 +1.000 +0.200 1.0000 0.2000\
                                 :\n  2 +0.800 +0.000 0.8000 0.0000\
                                 :\n  1 +0.300 -0.500 0.3000 -0.5000\
                                 :\n  double_take (71.429)\n";

const SUMMARY: &str = "\n>CP:0.000:0.000:na:na:na:na:0.000:0.000:0.000:0.000:0.000:elite\
                       \n>CB:0.000:0.000:0.000:0.000:na:na:0.000:0.000:0.000:0.000:0.000:elite\
                       \n>OV:0.000:0.000:0.000:0.000:na:na:0.000:0.000:0.000:0.000:0.000:elite\
                       \n>LK:0.000:0.000:na:na:na:0.400:40.000:400.000:40.000:very_lucky\
                       \n>FB:2050.0:2050.0\n\n";

fn plain_options() -> OutputOptions {
    OutputOptions {
        move_probabilities: false,
        cube_probabilities: false,
        ..OutputOptions::default()
    }
}

fn exporter() -> Exporter {
    Exporter::new(Default::default(), plain_options())
}

fn money_match() -> MatchRecord {
    serde_json::from_str(MONEY_GAME).unwrap()
}

fn expected_money_match() -> String {
    let mut expected = String::from("\n\n1:0:0:0:0:1:0:0\n");
    expected.push_str("\n~B:31:lucky:0.400:40.000:okay\n  #\n");
    expected.push_str("* 8/5 6/5: 0.150:15.000\n");
    expected.push_str("  24/21 24/23: 0.050:5.000\n");
    expected.push_str("  #\n  okay:0:");
    expected.push_str(":\n  3 +1.000 +0.600 1.0000 0.6000");
    expected.push_str(":\n  1 +0.400 +0.000 0.4000 0.0000");
    expected.push_str(":\n  2 +0.300 -0.100 0.3000 -0.1000");
    expected.push_str(":\n  no_double_take (14.286)\n");
    expected.push_str("\n~B:Double  #\n  okay:0:");
    expected.push_str(DOUBLE_TAKE_LINES);
    expected.push_str("\n~W:Take  #\n  okay:0:");
    expected.push_str(DOUBLE_TAKE_LINES);
    expected.push_str("Annotation:\nnice take\n");
    expected.push_str(SUMMARY);
    expected.push_str("\n$\n");
    expected.push_str(SUMMARY);
    expected
}

#[test]
fn exports_money_match() {
    let mut out = Vec::new();
    exporter().export_match(&money_match(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), expected_money_match());
}

const MATCH_GAME: &str = r#"{
  "games": [
    {
      "info": { "game_number": 1, "match_length": 7 },
      "records": [
        {
          "player": "0",
          "ctx": {
            "cube_value": 1,
            "on_roll": "0",
            "match_length": 7,
            "match_equity": { "win": 0.7, "lose": 0.3 }
          },
          "action": {
            "type": "normal",
            "dice": [3, 1],
            "moves": [
              { "notation": "8/5 6/5", "equity": 0.15, "eval": { "evaluation": { "plies": 2 } } },
              { "notation": "24/21 24/23", "equity": 0.05, "eval": { "evaluation": { "plies": 2 } } }
            ],
            "chosen": 1,
            "luck": 0.4,
            "cube": {
              "equities": { "no_double": 0.3, "double_take": 0.8, "double_pass": 1.0, "optimal": 0.8 },
              "eval": { "evaluation": { "plies": 2 } }
            }
          }
        }
      ]
    }
  ]
}"#;

const MATCH_SUMMARY: &str =
    "\n>CP:0.000:0.000:na:na:na:na:0.100:2.000:100.000:2.000:100.000:harmless\
     \n>CB:0.000:0.000:na:na:na:na:0.500:10.000:500.000:10.000:500.000:harmless\
     \n>OV:0.000:0.000:na:na:na:na:0.600:12.000:300.000:6.000:600.000:harmless\
     \n>LK:0.000:0.000:na:na:na:0.400:8.000:400.000:8.000:very_lucky\
     \n>FB:0:411.1\n\n";

#[test]
fn exports_match_play_in_percent() {
    let record: MatchRecord = serde_json::from_str(MATCH_GAME).unwrap();
    let mut out = Vec::new();
    exporter().export_match(&record, &mut out).unwrap();

    let mut expected = String::from("\n\n1:0:0:0:7:1:0:0\n");
    expected.push_str("\n~B:31:lucky:0.400:8.000:bad\n  #\n");
    expected.push_str("  8/5 6/5: 15.00%:53.000\n");
    expected.push_str("* 24/21 24/23:  5.00%:51.000\n");
    expected.push_str("  #\n  very_bad:-10.00%:");
    expected.push_str(":\n  3  70.00%  +4.00% 0.7000 0.0400");
    expected.push_str(":\n  2  66.00%  +0.00% 0.6600 0.0000");
    expected.push_str(":\n  1  56.00% -10.00% 0.5600 -0.1000");
    expected.push_str(":\n  double_take (71.429)\n");
    expected.push_str(MATCH_SUMMARY);
    expected.push_str("\n$\n");
    expected.push_str(MATCH_SUMMARY);
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn exports_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("match.bgh");
    let mut file = std::fs::File::create(&path).unwrap();
    exporter().export_match(&money_match(), &mut file).unwrap();
    drop(file);

    let mut written = String::new();
    std::fs::File::open(&path)
        .unwrap()
        .read_to_string(&mut written)
        .unwrap();
    assert_eq!(written, expected_money_match());
}

#[test]
fn annotations_can_be_left_out() {
    let options = OutputOptions {
        include_annotations: false,
        ..plain_options()
    };
    let mut out = Vec::new();
    Exporter::new(Default::default(), options)
        .export_match(&money_match(), &mut out)
        .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains("Annotation:"));
    assert_eq!(text.matches("\n$\n").count(), 1);
}

#[test]
fn invalid_game_is_not_written() {
    let mut record = money_match();
    let mut broken = record.games[0].clone();
    broken.info.game_number = 2;
    if let bg_analysis::RecordAction::Normal(play) = &mut broken.records[0].action {
        play.chosen = Some(7);
    }
    record.games.push(broken);

    let mut out = Vec::new();
    let result = exporter().export_match(&record, &mut out);
    assert!(matches!(result, Err(ExportError::Analysis(_))));

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("\n\n1:0:0:0:0:1:0:0\n"));
    assert!(!text.contains("\n\n2:0:0"));
    assert_eq!(text.matches("\n$\n").count(), 1);
}

#[test]
fn exports_single_move() {
    let record = money_match();
    let mut out = Vec::new();
    exporter().export_move(&record.games[0], 1, &mut out).unwrap();
    let expected = format!("\n~B:Double  #\n  okay:0:{DOUBLE_TAKE_LINES}");
    assert_eq!(String::from_utf8(out).unwrap(), expected);

    let result = exporter().export_move(&record.games[0], 9, &mut Vec::new());
    assert!(matches!(
        result,
        Err(ExportError::NoSuchRecord { index: 9, count: 3 })
    ));
}

fn gammonish_board() -> Board {
    let mut checkers = [[0u8; 25]; 2];
    checkers[Player::Zero.index()][10] = 5;
    checkers[Player::Zero.index()][12] = 10;
    checkers[Player::One.index()][0] = 3;
    Board::new(checkers).unwrap()
}

fn move_hint(resignation: Option<PrecomputedResignation>) -> HintRequest {
    let candidate = |notation: &str, equity: f32| CandidateMove {
        notation: notation.to_string(),
        equity,
        eval: EvalKind::Evaluation { plies: 0 },
        probabilities: None,
    };
    HintRequest {
        player: Player::Zero,
        ctx: CubeContext::money(Player::Zero),
        board: Some(gammonish_board()),
        resignation,
        decision: HintDecision::Move(CheckerPlay {
            dice: Dice(6, 5),
            moves: vec![
                candidate("13/2", -0.95),
                candidate("11/5 11/6", -0.97),
                candidate("13/7 13/8", -0.99),
            ],
            chosen: None,
            luck: None,
            cube: None,
        }),
    }
}

#[test]
fn hint_recommends_resignation_at_face_value() {
    let hint = move_hint(Some(PrecomputedResignation {
        class: PositionClass::Race,
        proposed: Some(ResignValue::Gammon),
    }));
    let options = OutputOptions {
        moves_shown: 2,
        ..plain_options()
    };
    let mut out = Vec::new();
    Exporter::new(Default::default(), options)
        .export_hint(&hint, &mut out)
        .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Resign:2\n  13/2:-0.950:-95.000\n  11/5 11/6:-0.970:-97.000\n"
    );
}

#[test]
fn hint_suppresses_mismatched_resignation() {
    let hint = move_hint(Some(PrecomputedResignation {
        class: PositionClass::Race,
        proposed: Some(ResignValue::Backgammon),
    }));
    let mut out = Vec::new();
    exporter().export_hint(&hint, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains("Resign"));
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn cube_hint_has_no_annotation() {
    let hint: HintRequest = serde_json::from_str(
        r#"{
            "player": "0",
            "ctx": { "cube_value": 1, "on_roll": "0" },
            "decision": {
                "type": "cube",
                "cube": {
                    "equities": { "no_double": 0.3, "double_take": 0.8, "double_pass": 1.0, "optimal": 0.8 },
                    "eval": { "evaluation": { "plies": 2 } }
                }
            }
        }"#,
    )
    .unwrap();
    let mut out = Vec::new();
    exporter().export_hint(&hint, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("  #\n  okay:0:{DOUBLE_TAKE_LINES}")
    );
}
