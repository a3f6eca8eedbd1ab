//! CLI surface tests — argument handling, exit codes, file output.

use std::fs;
use std::process::Command;

fn mixtape() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mixtape"))
}

#[test]
fn missing_argument_prints_usage_and_exits_cleanly() {
    let output = mixtape().output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("usage:"));
}

#[test]
fn unreadable_file_reports_an_error() {
    let output = mixtape().arg("no/such/playlist.mix").output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot read"));
}

#[test]
fn valid_file_prints_json_and_writes_the_page() {
    let dir = tempfile::tempdir().unwrap();
    let src_path = dir.path().join("playlist.mix");
    let page_path = dir.path().join("playlist.html");
    fs::write(
        &src_path,
        r#"PLAYLIST "Rock Classics" DURACAO_MAXIMA 120 min GENERO "Rock" ANO 2023 FAIXA_ETARIA LIVRE
MUSICA "Kashmir" AUTOR "Led Zeppelin" DURACAO 8 min
"#,
    )
    .unwrap();

    let output = mixtape()
        .arg(&src_path)
        .arg("-o")
        .arg(&page_path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"Rock Classics\""));
    assert!(stdout.contains("\"total_duration_minutes\": 8"));

    let page = fs::read_to_string(&page_path).unwrap();
    assert!(page.contains("<title>Playlist: Rock Classics</title>"));
}

#[test]
fn semantic_failure_lists_diagnostics_and_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let src_path = dir.path().join("bad.mix");
    fs::write(
        &src_path,
        r#"PLAYLIST "Bad" DURACAO_MAXIMA 10 min GENERO "Pop" ANO 2030 FAIXA_ETARIA 20
MUSICA "Long" AUTOR "X" DURACAO 15 min
"#,
    )
    .unwrap();

    let output = mixtape().arg(&src_path).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("semantic errors found:"));
    assert!(stderr.contains("must not be in the future"));
}
