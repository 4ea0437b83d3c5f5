use {
    assert_cmd::Command,
    std::{
        fs::read_to_string,
        path::{Path, PathBuf},
    },
};

fn res() -> PathBuf {
    Path::new(file!())
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("res")
}

fn examples() -> Vec<PathBuf> {
    let mut examples: Vec<_> = res()
        .join("examples")
        .read_dir()
        .unwrap()
        .map(Result::unwrap)
        .filter(|entry| entry.metadata().unwrap().is_dir())
        .map(|entry| entry.path())
        .collect();
    examples.sort();
    examples
}

fn expected(example: &Path, extension: &str) -> String {
    let name = example.file_name().unwrap().to_str().unwrap();
    read_to_string(example.join(format!("{name}.{extension}"))).unwrap()
}

fn instance(example: &Path) -> PathBuf {
    let name = example.file_name().unwrap().to_str().unwrap();
    example.join(format!("{name}.xml"))
}

#[test]
fn render_examples() {
    for example in examples() {
        let output = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .arg("render")
            .arg(instance(&example))
            .output()
            .unwrap();

        assert!(output.status.success(), "failed to render {example:?}");
        assert_eq!(
            String::from_utf8(output.stdout).unwrap(),
            expected(&example, "fol"),
            "unexpected rendering of {example:?}"
        );
    }
}

#[test]
fn render_raw_examples() {
    for example in examples() {
        Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .arg("render")
            .arg("--raw")
            .arg(instance(&example))
            .assert()
            .success()
            .stdout(expected(&example, "raw"));
    }
}

#[test]
fn render_from_stdin() {
    let example = res().join("examples/reflexivity");

    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .arg("render")
        .pipe_stdin(instance(&example))
        .unwrap()
        .assert()
        .success()
        .stdout("∀x.(E(x, x))\n");
}

#[test]
fn render_directory() {
    let lines: String = examples()
        .iter()
        .map(|example| expected(example, "fol"))
        .collect();

    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .arg("render")
        .arg(res().join("examples"))
        .assert()
        .success()
        .stdout(lines);
}

#[test]
fn list_atoms() {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .arg("atoms")
        .arg(instance(&res().join("examples/transitivity")))
        .assert()
        .success()
        .stdout("Atom$0\nAtom$1\nAtom$2\n");
}

#[test]
fn reject_missing_relation() {
    let output = Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .arg("render")
        .arg(res().join("broken/missing_relation.xml"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        stderr.contains("node `Atom$0` has no `relation` tuple"),
        "unexpected error: {stderr}"
    );
}

#[test]
fn reject_malformed_xml() {
    let output = Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .arg("render")
        .arg(res().join("broken/truncated.xml"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("could not parse file"));
}
