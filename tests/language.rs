use std::{fmt::Write as _, fs};

use pretty_assertions::assert_eq;
use snakelet::{
    config::{Config, IndexPolicy, OperatorScan},
    error::{ErrorKind, RuntimeError},
    interpreter::{
        session::{Response, Session},
        value::core::Value,
    },
    run_source,
};
use walkdir::WalkDir;

#[test]
fn session_transcripts_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/sessions").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "session"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let (expected, actual) = replay_transcript(&content);
        assert_eq!(expected, actual, "transcript {path:?} diverged");
        count += 1;
    }

    assert!(count > 0, "No transcripts found in tests/sessions");
}

/// Replays a transcript and returns the expected and the actual text.
///
/// Lines starting with `>>> ` are commands; every other line is a response
/// of the command above it. `#!` lines select options, other `#` lines are
/// comments.
fn replay_transcript(content: &str) -> (String, String) {
    let mut config = Config::default();
    let mut expected = String::new();
    let mut commands = Vec::new();

    for line in content.lines() {
        if let Some(directive) = line.strip_prefix("#!") {
            match directive.trim() {
                "top-level-operators" => config.operator_scan = OperatorScan::TopLevel,
                "strict-index" => config.index_policy = IndexPolicy::Strict,
                other => panic!("Unknown transcript directive '{other}'"),
            }
            continue;
        }
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        expected.push_str(line);
        expected.push('\n');

        if let Some(command) = line.strip_prefix(">>> ") {
            commands.push(command.to_string());
        }
    }

    let mut session = Session::new(config);
    let mut actual = String::new();

    for command in commands {
        writeln!(actual, ">>> {command}").unwrap();
        for response in session.execute(&command) {
            writeln!(actual, "{response}").unwrap();
        }
    }

    (expected, actual)
}

fn execute_all(session: &mut Session, commands: &[&str]) {
    for command in commands {
        let responses = session.execute(command);
        assert!(responses.iter().all(|r| !matches!(r, Response::Diagnostic(_))),
                "'{command}' failed: {responses:?}");
    }
}

fn render(session: &mut Session, name: &str) -> String {
    match session.execute(&format!("print({name})")).as_slice() {
        [Response::Output(text)] => text.clone(),
        other => panic!("print({name}) produced {other:?}"),
    }
}

#[test]
fn copied_lists_are_independent_both_ways() {
    let mut session = Session::default();
    execute_all(&mut session, &["l = [1, [2, 3]]", "m = l"]);

    execute_all(&mut session, &["append(m, 4)"]);
    assert_eq!(render(&mut session, "l"), "[1, [2, 3]]");
    assert_eq!(render(&mut session, "m"), "[1, [2, 3], 4]");

    execute_all(&mut session, &["append(l, 5)", "l[0] = 'a'"]);
    assert_eq!(render(&mut session, "l"), "['a', [2, 3], 5]");
    assert_eq!(render(&mut session, "m"), "[1, [2, 3], 4]");
}

#[test]
fn nested_element_reads_are_copies() {
    let mut session = Session::default();
    execute_all(&mut session,
                &["outer = [[1], [2]]", "first = outer[0]", "append(first, 9)"]);

    assert_eq!(render(&mut session, "first"), "[1, 9]");
    assert_eq!(render(&mut session, "outer"), "[[1], [2]]");
}

#[test]
fn repeated_self_assignment_keeps_value() {
    let mut session = Session::default();
    execute_all(&mut session, &["data = [1, \"two\", [3, '4'], 5.5]"]);
    let before = render(&mut session, "data");

    for _ in 0..1_000 {
        execute_all(&mut session, &["data = data"]);
    }

    assert_eq!(render(&mut session, "data"), before);
    assert_eq!(session.variables().len(), 1);
}

#[test]
fn rejected_names_create_no_variable() {
    let mut session = Session::default();

    for command in ["1bad = 1", "_ok = 1", "abcdefghijklmnop = 1", "a-b = 1"] {
        let responses = session.execute(command);
        assert!(matches!(responses.as_slice(),
                         [Response::Diagnostic(error)] if error.kind() == ErrorKind::Syntax),
                "'{command}' gave {responses:?}");
    }

    assert!(session.variables().is_empty());

    execute_all(&mut session, &["a_2 = 1", "Z = 2"]);
    assert!(session.variables().contains("a_2"));
    assert!(session.variables().contains("Z"));
}

#[test]
fn failed_assignment_leaves_target_untouched() {
    let mut session = Session::default();
    execute_all(&mut session, &["x = 1", "l = [1, 2]"]);

    session.execute("x = 5 / 0");
    session.execute("x = y");
    session.execute("l[1] = 1 + 'c'");
    session.execute("l[7] = 3");
    session.execute("append(l, nope)");

    assert_eq!(session.variables().find("x"), Some(&Value::Integer(1)));
    assert_eq!(render(&mut session, "l"), "[1, 2]");
}

#[test]
fn failed_first_assignment_does_not_create_variable() {
    let mut session = Session::default();
    let responses = session.execute("fresh = 1 / 0");

    assert_eq!(responses, vec![Response::Diagnostic(RuntimeError::DivisionByZero)]);
    assert!(!session.variables().contains("fresh"));
}

#[test]
fn both_operand_errors_are_reported() {
    let mut session = Session::default();
    let responses = session.execute("x = foo + bar");

    assert_eq!(responses,
               vec![Response::Diagnostic(RuntimeError::UnknownVariable { name: "foo".into() }),
                    Response::Diagnostic(RuntimeError::UnknownVariable { name: "bar".into() }),]);
}

#[test]
fn error_kinds_cover_every_category() {
    let mut session = Session::default();
    execute_all(&mut session, &["l = [1]", "n = 2"]);

    let kind_of = |session: &mut Session, command: &str| match session.execute(command).as_slice() {
        [Response::Diagnostic(error)] => error.kind(),
        other => panic!("'{command}' produced {other:?}"),
    };

    assert_eq!(kind_of(&mut session, "nonsense"), ErrorKind::Syntax);
    assert_eq!(kind_of(&mut session, "print(ghost)"), ErrorKind::Name);
    assert_eq!(kind_of(&mut session, "append(n, 1)"), ErrorKind::Type);
    assert_eq!(kind_of(&mut session, "x = n + 1.5"), ErrorKind::Type);
    assert_eq!(kind_of(&mut session, "x = l[3]"), ErrorKind::Value);
    assert_eq!(kind_of(&mut session, "x = 1.0 / 0.0"), ErrorKind::Value);
}

#[test]
fn text_literals_are_truncated() {
    let mut session = Session::default();
    let long = "y".repeat(70);
    execute_all(&mut session, &[&format!("t = \"{long}\"")]);

    assert_eq!(session.variables().find("t"),
               Some(&Value::Text("y".repeat(50))));
}

#[test]
fn blank_commands_are_silent() {
    let mut session = Session::default();

    assert!(session.execute("").is_empty());
    assert!(session.execute("   \t ").is_empty());
}

#[test]
fn sessions_do_not_share_variables() {
    let mut first = Session::default();
    let mut second = Session::default();
    execute_all(&mut first, &["shared = 1"]);

    assert!(second.variables().find("shared").is_none());
    assert_eq!(second.execute("print(shared)"),
               vec![Response::Diagnostic(RuntimeError::UnknownVariable { name:
                                                                             "shared".into() })]);
}

#[test]
fn scripts_stop_at_exit() {
    let script = "x = 1\nprint(x)\nexit\nprint(x)\n";
    let lines: Vec<String> = run_source(script, Config::default()).iter()
                                                                  .map(ToString::to_string)
                                                                  .collect();

    assert_eq!(lines, vec!["1".to_string()]);
}

#[test]
fn leading_minus_depends_on_scan_mode() {
    let classic = run_source("x = -5 - 3\nprint(x)", Config::default());
    assert!(matches!(classic.last(), Some(Response::Diagnostic(_))));

    let config = Config { operator_scan: OperatorScan::TopLevel,
                          ..Config::default() };
    let top_level = run_source("x = -5 - 3\nprint(x)", config);
    assert_eq!(top_level, vec![Response::Output("-8".to_string())]);
}

#[test]
fn top_level_scan_keeps_negative_list_elements() {
    let config = Config { operator_scan: OperatorScan::TopLevel,
                          ..Config::default() };
    let responses = run_source("l = [1, -2]\nprint(l)", config);

    assert_eq!(responses, vec![Response::Output("[1, -2]".to_string())]);
}

#[test]
fn integer_overflow_is_a_value_error() {
    let responses = run_source("x = 9223372036854775807 + 1", Config::default());

    assert_eq!(responses, vec![Response::Diagnostic(RuntimeError::Overflow)]);
    assert_eq!(RuntimeError::Overflow.kind(), ErrorKind::Value);
}

#[test]
fn lenient_and_strict_index_policies() {
    let lenient = run_source("l = [7, 8]\nx = l[one]\nprint(x)", Config::default());
    assert_eq!(lenient, vec![Response::Output("7".to_string())]);

    let config = Config { index_policy: IndexPolicy::Strict,
                          ..Config::default() };
    let strict = run_source("l = [7, 8]\nx = l[one]", config);
    assert_eq!(strict,
               vec![Response::Diagnostic(RuntimeError::InvalidIndex { index: "one".into() })]);
}
