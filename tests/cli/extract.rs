use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const MAIN_TS: &str = r#"function main() {
    // TRANSLATORS: foo comment
    // with multiple lines
    i18n.G("foo")

    // this comment has no translators tag
    i18n.G("abc")

    // TRANSLATORS: plural
    i18n.NG("singular", "plural", 99)

    i18n.G("zz %s")
}
"#;

#[test]
fn test_extract_sorted_to_stdout() -> Result<()> {
    let test = CliTest::with_file("main.ts", MAIN_TS)?;
    let _settings = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.command().args([
        "--sort-output",
        "--package-name",
        "snappy",
        "--msgid-bugs-address",
        "snappy-devel@lists.ubuntu.com",
        "main.ts",
    ]));

    Ok(())
}

#[test]
fn test_extract_to_file() -> Result<()> {
    let test = CliTest::with_file("main.ts", MAIN_TS)?;
    let _settings = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.command().args(["-o", "out.pot", "-s", "main.ts"]));

    let pot = test.read_file("out.pot")?;
    assert!(pot.starts_with("# SOME DESCRIPTIVE TITLE.\n"));
    assert!(pot.ends_with("msgid   \"zz %s\"\nmsgstr  \"\"\n\n"));

    Ok(())
}

#[test]
fn test_extract_multiple_keywords() -> Result<()> {
    let test = CliTest::with_file(
        "main.ts",
        r#"function main() {
    // TRANSLATORS: foo comment
    i18n.G("foo")

    // TRANSLATORS: bar comment
    i18n.Translate("goo foo")
}
"#,
    )?;
    let _settings = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(
        test.command()
            .args(["--keyword", "i18n.G,i18n.Translate", "main.ts"])
    );

    Ok(())
}

#[test]
fn test_extract_no_location() -> Result<()> {
    let test = CliTest::with_file("main.ts", MAIN_TS)?;
    let _settings = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.command().args(["--no-location", "main.ts"]));

    Ok(())
}

#[test]
fn test_extract_directory_input() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/b.tsx", "export const B = () => <p>{i18n.G(\"bee\")}</p>;\n")?;
    test.write_file("src/a.ts", "i18n.G(\"ay\");\n")?;
    test.write_file("src/notes.md", "i18n.G(\"not source\")\n")?;
    test.write_file("src/node_modules/dep/index.js", "i18n.G(\"dependency\");\n")?;
    let _settings = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.command().arg("src"));

    Ok(())
}

#[test]
fn test_extract_uses_config_file() -> Result<()> {
    let test = CliTest::with_file("main.ts", "tr(\"hello\");\ni18n.G(\"skipped\");\n")?;
    test.write_file(
        ".xgettextrc.json",
        r#"{ "keywords": ["tr"], "packageName": "demo 1.0" }"#,
    )?;

    let output = test.command().args(["-o", "out.pot", "main.ts"]).output()?;
    assert!(output.status.success());

    let pot = test.read_file("out.pot")?;
    assert!(pot.contains("Project-Id-Version: demo 1.0\\n"));
    assert!(pot.contains("msgid   \"hello\""));
    assert!(!pot.contains("skipped"));

    Ok(())
}

#[test]
fn test_extract_parse_error_fails_without_output() -> Result<()> {
    let test = CliTest::with_file("good.ts", "i18n.G(\"fine\");\n")?;
    test.write_file("bad.ts", "i18n.G(\"broken\";\n")?;

    let output = test
        .command()
        .args(["-o", "out.pot", "good.ts", "bad.ts"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: failed to parse bad.ts:1: "), "stderr: {stderr}");
    assert!(!test.root().join("out.pot").exists());

    Ok(())
}

#[test]
fn test_extract_missing_file_fails() -> Result<()> {
    let test = CliTest::new()?;
    let _settings = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.command().args(["-o", "out.pot", "missing.ts"]));
    assert!(!test.root().join("out.pot").exists());

    Ok(())
}

#[test]
fn test_no_arguments_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage:"));

    Ok(())
}
