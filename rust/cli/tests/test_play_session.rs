use twentyone_cli::run;

// The play command reads real stdin through `run`; under the test harness
// stdin is at EOF, so the session opens, prints its header, and ends with
// the summary. Scripted sessions are covered by the handler tests in the
// play module, which inject a Cursor.

#[test]
fn play_session_opens_and_summarizes_on_eof() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(
        ["twentyone", "play", "--seed", "9", "--balance", "500"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0);

    let stdout = String::from_utf8_lossy(&out);
    assert!(stdout.contains("play: seed=9 balance=500"));
    assert!(stdout.contains("Place your bet to start"));
    assert!(stdout.contains("Rounds played: 0"));
    assert!(stdout.contains("Final balance: 500"));
}

#[test]
fn play_rejects_zero_rounds() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(
        ["twentyone", "play", "--rounds", "0"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 2);

    let stderr = String::from_utf8_lossy(&err);
    assert!(stderr.contains("rounds must be >= 1"));
}
