use {
    rstest::rstest,
    rstest_reuse::{apply, template},
    session::ReverseOptions,
    std::path::PathBuf,
    textbuf::{BufferOverflow, Strategy},
};

#[template]
#[rstest]
fn reverse_transcripts(#[files("sample_sessions/reverse/*.stdin")] path: PathBuf) {}

#[apply(reverse_transcripts)]
fn reverse_two_cursor(path: PathBuf) {
    run_reverse(path, Strategy::TwoCursor);
}

#[apply(reverse_transcripts)]
fn reverse_recursive(path: PathBuf) {
    run_reverse(path, Strategy::Recursive);
}

fn run_reverse(path: PathBuf, strategy: Strategy) {
    let transcript = Transcript::from(path);
    let options = ReverseOptions {
        strategy,
        ..ReverseOptions::default()
    };
    let mut output = Vec::new();
    session::reverse_session(&mut transcript.input.as_bytes(), &mut output, &options).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), transcript.expected_output);
}

#[rstest]
fn code(#[files("sample_sessions/code/*.stdin")] path: PathBuf) {
    let transcript = Transcript::from(path);
    let mut output = Vec::new();
    session::code_session(&mut transcript.input.as_bytes(), &mut output).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), transcript.expected_output);
}

#[test]
fn reverse_rejects_overlong_word() {
    let input = "x".repeat(150);
    let mut output = Vec::new();
    let err = session::reverse_session(
        &mut input.as_bytes(),
        &mut output,
        &ReverseOptions::default(),
    )
    .unwrap_err();
    assert!(err.downcast_ref::<BufferOverflow>().is_some());
    assert_eq!(String::from_utf8(output).unwrap(), "Enter any string:");
}

#[test]
fn reverse_respects_custom_capacity() {
    let options = ReverseOptions {
        capacity: 4,
        strategy: Strategy::Recursive,
    };
    let mut output = Vec::new();
    let buffer =
        session::reverse_session(&mut "abc\n".as_bytes(), &mut output, &options).unwrap();
    assert_eq!(buffer.to_string(), "cba");
    let err = session::reverse_session(&mut "abcd\n".as_bytes(), &mut Vec::new(), &options)
        .unwrap_err();
    assert!(err.downcast_ref::<BufferOverflow>().is_some());
}

#[test]
fn code_without_input_fails() {
    let mut output = Vec::new();
    assert!(session::code_session(&mut "".as_bytes(), &mut output).is_err());
}

struct Transcript {
    input: String,
    expected_output: String,
}

impl From<PathBuf> for Transcript {
    fn from(mut path: PathBuf) -> Self {
        let input = std::fs::read_to_string(&path).unwrap_or_default();

        path.set_extension("stdout");
        let expected_output = std::fs::read_to_string(&path).unwrap_or_else(|e| {
            panic!("failed to read expected output file at path {path:?}: {e}")
        });

        Transcript {
            input,
            expected_output,
        }
    }
}
