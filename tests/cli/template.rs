use crate::harness::TestContext;
use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn template_show_prints_default_until_edited() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["template", "show", "--passcode", "123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{{englishTitle}}"))
        .stdout(predicate::str::contains("{{loc3_date}}"));
}

#[test]
fn template_wrong_passcode_is_rejected() {
    let ctx = TestContext::new();
    let file = ctx.write_file("t.md", b"never saved");

    ctx.cli()
        .args(["tp", "edit", "--passcode", "1234", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Incorrect passcode"));

    ctx.store_file().assert(predicate::path::missing());
}

#[test]
fn template_without_passcode_on_non_terminal_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["template", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--passcode"));
}

#[test]
fn template_edit_persists_across_runs() {
    let ctx = TestContext::new();
    ctx.save_template("Custom {{title}}");

    ctx.cli()
        .args(["template", "show", "--passcode", "123"])
        .assert()
        .success()
        .stdout("Custom {{title}}\n");

    ctx.store_file().assert(predicate::str::contains("poster_prompt_template"));
}

#[test]
fn template_reset_restores_default() {
    let ctx = TestContext::new();
    ctx.save_template("Custom {{title}}");

    ctx.cli()
        .args(["template", "reset", "--passcode", "123", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored default prompt template"));

    ctx.cli()
        .args(["template", "show", "--passcode", "123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Custom").not())
        .stdout(predicate::str::contains("{{dateRange}}"));
}

#[test]
fn template_reset_needs_confirmation_when_not_interactive() {
    let ctx = TestContext::new();
    ctx.save_template("Custom {{title}}");

    ctx.cli()
        .args(["template", "reset", "--passcode", "123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn template_path_points_into_home() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["template", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(ctx.store_path().display().to_string()));
}

#[test]
fn template_tokens_lists_every_placeholder() {
    let ctx = TestContext::new();

    let assert = ctx.cli().args(["template", "tokens"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for token in [
        "{{title}}",
        "{{englishTitle}}",
        "{{dateRange}}",
        "{{loc1_name}}",
        "{{loc1_date}}",
        "{{loc2_name}}",
        "{{loc2_date}}",
        "{{loc3_name}}",
        "{{loc3_date}}",
    ] {
        assert!(stdout.contains(token), "missing {token}");
    }
}

#[test]
fn template_reset_recovers_from_non_string_store_entries() {
    let ctx = TestContext::new();
    ctx.store_file().write_str("poster_prompt_template = 42\ntheme = 1\n").unwrap();

    ctx.cli().args(["template", "reset", "--passcode", "123", "--yes"]).assert().success();

    ctx.store_file().assert(predicate::str::contains("theme = 1"));
    ctx.cli()
        .args(["template", "show", "--passcode", "123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{{dateRange}}"));
}
