//! End-to-end tests: model file in, model file out

mod common;

use common::{output_lines, placement, placements, program, run_program};
use llang_core::Value;

fn record(x: i64, z: i64, glyph: char) -> String {
    format!("1 15 {x} 0 {z} 1 0 0 0 1 0 0 0 1 3005pt{glyph}.dat")
}

#[test]
fn test_print_string() {
    let report = run_program(&program(&[&["3068b.dat", "3005pth.dat", "3005pti.dat"]]), "");
    assert!(report.errors.is_empty());
    assert_eq!(placements(&report), vec![record(10, 10, 'h'), record(50, 10, 'i')]);
}

#[test]
fn test_second_print_moves_down() {
    let report = run_program(
        &program(&[&["3068b.dat", "3005pta.dat"], &["3068b.dat", "3005ptb.dat"]]),
        "",
    );
    assert_eq!(placements(&report), vec![record(10, 10, 'a'), record(10, -30, 'b')]);
}

#[test]
fn test_header_written_once() {
    let report = run_program(
        &program(&[&["3068b.dat", "3005pta.dat"], &["3068b.dat", "3005ptb.dat"]]),
        "",
    );
    let lines = output_lines(&report);
    assert_eq!(lines[0], "0 L Lang output");
    assert_eq!(lines.iter().filter(|l| *l == "0 L Lang output").count(), 1);
    assert_eq!(lines.last().map(String::as_str), Some("0 STEP"));
}

#[test]
fn test_program_without_prints() {
    let report = run_program(&program(&[&["3626bp01.dat", "3023.dat", "3005pt1.dat"]]), "");
    assert_eq!(output_lines(&report), vec!["0 STEP".to_string()]);
    assert_eq!(report.symbols.get("3626bp01.dat"), Some(&Value::Number(1)));
}

#[test]
fn test_assignment_then_print() {
    let report = run_program(
        &program(&[
            &["3626bp01.dat", "3023.dat", "3005pt1.dat", "3005pt2.dat"],
            &["3068b.dat", "3626bp01.dat"],
        ]),
        "",
    );
    assert!(report.errors.is_empty());
    assert_eq!(placements(&report), vec![record(10, 10, '1'), record(50, 10, '2')]);
}

#[test]
fn test_any_assignment_part_works() {
    let report = run_program(
        &program(&[
            &["3626bp02.dat", "3024.dat", "3005pta.dat"],
            &["3068b.dat", "3626bp02.dat"],
        ]),
        "",
    );
    assert_eq!(placements(&report), vec![record(10, 10, 'a')]);
}

#[test]
fn test_long_numeral() {
    let digits = ["3005pt1.dat", "3005pt2.dat", "3005pt3.dat", "3005pt4.dat", "3005pt5.dat"];
    let mut statement = vec!["3068b.dat"];
    statement.extend(digits);
    let report = run_program(&program(&[statement.as_slice()]), "");
    let glyphs: Vec<String> = placements(&report)
        .iter()
        .filter_map(|l| l.split_whitespace().last().map(str::to_string))
        .collect();
    assert_eq!(
        glyphs,
        vec!["3005pt1.dat", "3005pt2.dat", "3005pt3.dat", "3005pt4.dat", "3005pt5.dat"]
    );
}

#[test]
fn test_print_of_assignment_binds_and_prints() {
    let report = run_program(
        &program(&[&["3068b.dat", "3626bp01.dat", "3023.dat", "3005pta.dat"]]),
        "",
    );
    assert_eq!(placements(&report), vec![record(10, 10, 'a')]);
    assert_eq!(report.symbols.get("3626bp01.dat"), Some(&Value::from("a")));
}

#[test]
fn test_undefined_identifier_prints_zero() {
    let report = run_program(&program(&[&["3068b.dat", "3626bp02.dat"]]), "");
    assert_eq!(report.errors.count("undefined-identifier"), 1);
    assert_eq!(placements(&report), vec![record(10, 10, '0')]);
}

#[test]
fn test_unknown_part_does_not_stop_the_run() {
    let report = run_program(
        &program(&[&["3001.dat"], &["3068b.dat", "3005pta.dat"]]),
        "",
    );
    assert_eq!(report.errors.count("syntax"), 1);
    assert_eq!(report.errors.iter().next().map(|d| d.statement), Some(1));
    assert_eq!(placements(&report), vec![record(10, 10, 'a')]);
}

#[test]
fn test_arguments_identifier() {
    let report = run_program(&program(&[&["3068b.dat", "3626ap01.dat"]]), "HI");
    assert_eq!(placements(&report), vec![record(10, 10, 'h'), record(50, 10, 'i')]);
}

#[test]
fn test_adjacent_coordinates_merge() {
    // `2 1` becomes the numeral 21, leaving the positioned print without a body
    let report = run_program(
        &program(&[
            &["3069b.dat", "3005pt2.dat", "3005pt1.dat", "3005pta.dat"],
            &["3068b.dat", "3005ptb.dat"],
        ]),
        "",
    );
    assert_eq!(report.errors.count("syntax"), 1);
    assert_eq!(placements(&report), vec![record(10, 10, 'b')]);
}

#[test]
fn test_print_at_with_identifiers() {
    let report = run_program(
        &program(&[
            &["3626bp01.dat", "3023.dat", "3005pt2.dat"],
            &["3626bp02.dat", "3023.dat", "3005pt1.dat"],
            &["3069b.dat", "3626bp01.dat", "3626bp02.dat", "3005pta.dat"],
            &["3068b.dat", "3005ptb.dat"],
        ]),
        "",
    );
    assert!(report.errors.is_empty());
    assert_eq!(placements(&report), vec![record(90, -30, 'a'), record(10, 10, 'b')]);
}

#[test]
fn test_non_placement_records_are_ignored() {
    let lines = vec![
        "0 FILE main.ldr".to_string(),
        "2 24 0 0 0 10 0 0".to_string(),
        placement("3068b.dat"),
        "0 // comment".to_string(),
        placement("3005pta.dat"),
        "0 STEP".to_string(),
    ];
    let report = run_program(&lines, "");
    assert_eq!(placements(&report), vec![record(10, 10, 'a')]);
}

#[test]
fn test_runs_are_deterministic() {
    let lines = program(&[
        &["3626bp01.dat", "3023.dat", "3005pth.dat"],
        &["3068b.dat", "3626bp01.dat"],
        &["3068b.dat", "3626bp02.dat"],
    ]);
    let first = run_program(&lines, "x");
    let second = run_program(&lines, "x");
    assert_eq!(first.output, second.output);
    assert_eq!(first.errors, second.errors);
}

#[test]
fn test_huge_bound_coordinates_fall_back_to_origin() {
    let mut numeral = vec!["3626bp01.dat", "3023.dat"];
    numeral.extend(["3005pt5.dat"; 18]);
    let report = run_program(
        &program(&[
            numeral.as_slice(),
            &["3069b.dat", "3626bp01.dat", "3005pt1.dat", "3005pta.dat"],
            &["3069b.dat", "3005pt1.dat", "3626bp01.dat", "3005ptb.dat"],
            &["3069b.dat", "3626bp01.dat", "3626bp01.dat", "3005pth.dat"],
        ]),
        "",
    );
    assert_eq!(
        report.symbols.get("3626bp01.dat"),
        Some(&Value::Number(555_555_555_555_555_555))
    );
    assert_eq!(report.errors.count("invalid-coordinate"), 4);
    assert_eq!(
        placements(&report),
        vec![record(10, -30, 'a'), record(50, 10, 'b'), record(10, 10, 'h')]
    );
}

#[test]
fn test_thousands_of_nested_prints() {
    let mut statement = vec!["3068b.dat"; 5_000];
    statement.push("3005pta.dat");
    let report = run_program(&program(&[statement.as_slice()]), "");
    assert!(report.errors.is_empty());
    let placed = placements(&report);
    assert_eq!(placed.len(), 5_000);
    assert_eq!(placed[0], record(10, 10, 'a'));
    assert_eq!(placed[4_999], record(10, 10 - 40 * 4_999, 'a'));
}
