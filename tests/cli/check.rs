use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, unstable_output_filters};

const CONDITIONAL_TEXT: &str = "export function Status({ online }) {
  return <div>Status: {online && 'online'}</div>;
}
";

const TEXT_AFTER_CONDITIONAL: &str = "export function Badge({ pro }) {
  return (
    <p>
      {pro && <Star />}
      Member
    </p>
  );
}
";

const PLAIN: &str = "export const A = () => <p>Hi</p>;\n";

#[test]
fn test_clean_file() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        "export function Status({ online }) {
  return <div>Status: {online && <span>online</span>}</div>;
}
",
    )?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 source file - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_dangerous_conditional() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", CONDITIONAL_TEXT)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    error: Conditionally rendered text node with siblings must be wrapped in a block-level container.  dangerous-conditional
      --> ./src/app.tsx:2:23
      |
    2 |   return <div>Status: {online && 'online'}</div>;
      |                       ^
      = hint: render the text inside its own element, e.g. {cond && <span>text</span>}

    ✘ 1 problem

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_dangerous_literal_points_at_text() -> Result<()> {
    let test = CliTest::with_file("src/badge.jsx", TEXT_AFTER_CONDITIONAL)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    error: Text node is a sibling of a conditional expression and must be wrapped in a block-level container.  dangerous-literal
      --> ./src/badge.jsx:5:7
      |
    5 |       Member
      |       ^
      = hint: wrap the text in its own element, e.g. <span>text</span>

    ✘ 1 problem

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_multiple_files_sorted() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/b.tsx", CONDITIONAL_TEXT)?;
    test.write_file("src/a.jsx", TEXT_AFTER_CONDITIONAL)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    error: Text node is a sibling of a conditional expression and must be wrapped in a block-level container.  dangerous-literal
      --> ./src/a.jsx:5:7
      |
    5 |       Member
      |       ^
      = hint: wrap the text in its own element, e.g. <span>text</span>

    error: Conditionally rendered text node with siblings must be wrapped in a block-level container.  dangerous-conditional
      --> ./src/b.tsx:2:23
      |
    2 |   return <div>Status: {online && 'online'}</div>;
      |                       ^
      = hint: render the text inside its own element, e.g. {cond && <span>text</span>}

    ✘ 2 problems

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_gutter_fits_widest_line_number() -> Result<()> {
    let mut code = "export function Status({ online }) {\n".to_string();
    code.push_str(&"  const unused = 1;\n".repeat(8));
    code.push_str("  return <div>Status: {online && 'online'}</div>;\n}\n");
    let test = CliTest::with_file("src/app.tsx", &code)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    error: Conditionally rendered text node with siblings must be wrapped in a block-level container.  dangerous-conditional
      --> ./src/app.tsx:10:23
       |
    10 |   return <div>Status: {online && 'online'}</div>;
       |                       ^
       = hint: render the text inside its own element, e.g. {cond && <span>text</span>}

    ✘ 1 problem

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_json_format() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", CONDITIONAL_TEXT)?;

    assert_cmd_snapshot!(test.check_command().args(["--format", "json"]), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    [
      {
        "rule": "dangerous-conditional",
        "severity": "error",
        "message": "Conditionally rendered text node with siblings must be wrapped in a block-level container.",
        "file": "./src/app.tsx",
        "line": 2,
        "column": 23,
        "hint": "render the text inside its own element, e.g. {cond && <span>text</span>}"
      }
    ]

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_json_format_clean() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", PLAIN)?;

    assert_cmd_snapshot!(test.check_command().args(["--format", "json"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    []

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_rule_filter() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", CONDITIONAL_TEXT)?;

    assert_cmd_snapshot!(test.check_command().arg("dangerous-literal"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 source file - no issues found

    ----- stderr -----
    ");

    assert_cmd_snapshot!(test.check_command().arg("dangerous-conditional"), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    error: Conditionally rendered text node with siblings must be wrapped in a block-level container.  dangerous-conditional
      --> ./src/app.tsx:2:23
      |
    2 |   return <div>Status: {online && 'online'}</div>;
      |                       ^
      = hint: render the text inside its own element, e.g. {cond && <span>text</span>}

    ✘ 1 problem

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_suppression_comments() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        "export function Status({ online }) {
  return (
    <div>
      Status:
      {/* wrapcheck-disable-next-line dangerous-conditional */}
      {online && 'online'}
    </div>
  );
}
",
    )?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 source file - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_parse_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/broken.tsx", "export const A = () => <div>;\n")?;
    test.write_file("src/ok.tsx", PLAIN)?;

    insta::with_settings!({ filters => unstable_output_filters() }, {
        assert_cmd_snapshot!(test.check_command(), @r"
        success: false
        exit_code: 1
        ----- stdout -----
        error: Failed to parse ./src/broken.tsx: [DETAILS]  parse-error
          --> ./src/broken.tsx

        ✘ 1 problem

        ----- stderr -----
        warning: 1 file(s) could not be parsed (use -v for details)
        ");
    });

    Ok(())
}

#[test]
fn test_verbose_parse_error_details() -> Result<()> {
    let test = CliTest::with_file("src/broken.tsx", "export const A = () => <div>;\n")?;

    insta::with_settings!({ filters => unstable_output_filters() }, {
        assert_cmd_snapshot!(test.check_command().arg("--verbose"), @r"
        success: false
        exit_code: 1
        ----- stdout -----
        error: Failed to parse ./src/broken.tsx: [DETAILS]  parse-error
          --> ./src/broken.tsx

        ✘ 1 problem

        ----- stderr -----
        Note: No .wrapcheckrc.json found, using default configuration
        warning: ./src/broken.tsx - Failed to parse ./src/broken.tsx: [DETAILS]
        ");
    });

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".wrapcheckrc.json",
        r#"{
         "ignores": ["**/generated/**"],
         "includes": []
     }"#,
    )?;
    test.write_file("src/generated/app.tsx", CONDITIONAL_TEXT)?;
    test.write_file("src/app.tsx", PLAIN)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 source file - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_config_includes() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".wrapcheckrc.json", r#"{ "includes": ["src"] }"#)?;
    test.write_file("scripts/app.tsx", CONDITIONAL_TEXT)?;
    test.write_file("src/app.tsx", PLAIN)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 source file - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_test_files_ignored_by_default() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.test.tsx", CONDITIONAL_TEXT)?;
    test.write_file("src/__tests__/status.jsx", CONDITIONAL_TEXT)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 0 source files - no issues found

    ----- stderr -----
    ");

    test.write_file(".wrapcheckrc.json", r#"{ "ignoreTestFiles": false }"#)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    error: Conditionally rendered text node with siblings must be wrapped in a block-level container.  dangerous-conditional
      --> ./src/__tests__/status.jsx:2:23
      |
    2 |   return <div>Status: {online && 'online'}</div>;
      |                       ^
      = hint: render the text inside its own element, e.g. {cond && <span>text</span>}

    error: Conditionally rendered text node with siblings must be wrapped in a block-level container.  dangerous-conditional
      --> ./src/app.test.tsx:2:23
      |
    2 |   return <div>Status: {online && 'online'}</div>;
      |                       ^
      = hint: render the text inside its own element, e.g. {cond && <span>text</span>}

    ✘ 2 problems

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", CONDITIONAL_TEXT)?;
    test.write_file(".wrapcheckrc.json", r#"{ "ignores": ["[unclosed"] }"#)?;

    insta::with_settings!({ filters => unstable_output_filters() }, {
        assert_cmd_snapshot!(test.check_command(), @r#"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Invalid config file: [ROOT]/.wrapcheckrc.json: Invalid glob pattern in 'ignores': "[unclosed": Pattern syntax error near position 0: invalid range pattern
        "#);
    });

    Ok(())
}

#[test]
fn test_source_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("web/app.tsx", CONDITIONAL_TEXT)?;

    assert_cmd_snapshot!(test.check_command().args(["--source-root", "web"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    error: Conditionally rendered text node with siblings must be wrapped in a block-level container.  dangerous-conditional
      --> web/app.tsx:2:23
      |
    2 |   return <div>Status: {online && 'online'}</div>;
      |                       ^
      = hint: render the text inside its own element, e.g. {cond && <span>text</span>}

    ✘ 1 problem

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("--help"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    A fast CLI tool for finding JSX text nodes that break browser auto-translation

    Usage: wrapcheck [COMMAND]

    Commands:
      check  Find JSX text nodes that crash React when the page is auto-translated
      init   Initialize a new .wrapcheckrc.json configuration file
      help   Print this message or the help of the given subcommand(s)

    Options:
      -h, --help     Print help
      -V, --version  Print version

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_unknown_rule_rejected() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.check_command().arg("hardcoded"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: invalid value 'hardcoded' for '[CHECKS]...'
      [possible values: dangerous-conditional, dangerous-literal]

    For more information, try '--help'.
    ");

    Ok(())
}
