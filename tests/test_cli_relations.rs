use assert_cmd::Command;
use assert_fs::{prelude::FileWriteStr, NamedTempFile};
use predicates::{prelude::predicate, str::ContainsPredicate};

const INSTANCE: &str = r#"R = (A, B)
F = {A->B}
"#;

fn test_relations_for_instance(
    instance: &str,
    additional_args: &[&str],
    expected: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("dependencies.txt")?;
    file.write_str(instance)?;
    let mut cmd = Command::cargo_bin("strong_arms")?;
    cmd.arg("relations")
        .arg("-f")
        .arg(file.path())
        .arg("--logging-level")
        .arg("off")
        .args(additional_args);
    cmd.assert().success().stdout(predicate::eq(expected));
    file.close()?;
    Ok(())
}

fn contains(s: &str) -> ContainsPredicate {
    predicate::str::contains(s)
}

#[test]
fn test_regular_relation() -> Result<(), Box<dyn std::error::Error>> {
    let expected = [
        "-".repeat(25).as_str(),
        "Armstrong relation table:",
        "",
        "  A  |  B  ",
        "-----------",
        "  0  |  0  ",
        "  1  |  1  ",
        "  2  |  2  ",
        "  3  |  2  ",
        "",
    ]
    .join("\n");
    test_relations_for_instance(INSTANCE, &["-r", "regular"], &expected)
}

#[test]
fn test_strong_relation() -> Result<(), Box<dyn std::error::Error>> {
    let expected = [
        "-".repeat(32).as_str(),
        "Strong Armstrong relation table:",
        "",
        "  A   |  B   ",
        "-------------",
        "  00  |  00  ",
        "  01  |  00  ",
        "  10  |  10  ",
        "  11  |  10  ",
        "",
    ]
    .join("\n");
    test_relations_for_instance(INSTANCE, &["-r", "strong", "--verify"], &expected)
}

#[test]
fn test_all_relations() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("dependencies.txt")?;
    file.write_str(INSTANCE)?;
    let mut cmd = Command::cargo_bin("strong_arms")?;
    cmd.args(["relations", "--verify", "--logging-level", "off", "-f"])
        .arg(file.path());
    cmd.assert()
        .success()
        .stdout(contains("Armstrong relation table:"))
        .stdout(contains("Strong Armstrong relation table:"))
        .stdout(contains("Strong Armstrong relation table (product):"));
    file.close()?;
    Ok(())
}

#[test]
fn test_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("strong_arms")?;
    cmd.args([
        "relations",
        "--json",
        "--logging-level",
        "off",
        "--input-json",
        r#"{"columns": ["A", "B"], "dependencies": {"A": "B"}}"#,
    ]);
    cmd.assert()
        .success()
        .stdout(contains(r#""columns":["A","B"]"#))
        .stdout(contains(r#""armstrong":[[0,0],[1,1],[2,2],[3,2]]"#))
        .stdout(contains(r#""armstrong_latex":[{"key":"0","#))
        .stdout(contains(r#""s_armstrong_paul":[["00","00"],["01","00"],["10","10"],["11","10"]]"#));
    Ok(())
}

#[test]
fn test_invalid_json_request() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("strong_arms")?;
    cmd.args([
        "relations",
        "--logging-level",
        "off",
        "--input-json",
        r#"{"columns": ["A", "A"], "dependencies": {}}"#,
    ]);
    cmd.assert().failure().stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn test_composite_determinant_in_file() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("dependencies.txt")?;
    file.write_str("R = (A, B, C)\nF = {AB->C}\n")?;
    let mut cmd = Command::cargo_bin("strong_arms")?;
    cmd.args(["relations", "--logging-level", "off", "-f"])
        .arg(file.path());
    cmd.assert().failure();
    file.close()?;
    Ok(())
}

#[test]
fn test_both_inputs_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("strong_arms")?;
    cmd.args([
        "relations",
        "-f",
        "dependencies.txt",
        "--input-json",
        r#"{"columns": ["A"], "dependencies": {}}"#,
    ]);
    cmd.assert().failure();
    Ok(())
}

#[test]
fn test_no_input_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("strong_arms")?;
    cmd.arg("relations");
    cmd.assert().failure();
    Ok(())
}
