use std::fs;
use std::path::{Path, PathBuf};

const INPUT_MARKER: &str = "=== INPUT ===";
const OUTPUT_MARKER: &str = "=== OUTPUT ===";

/// Runs every `*.{input_ext}` file in `dir` through `render` and compares against `*.{golden_ext}`.
///
/// A missing golden file is written and the test fails so it gets reviewed; `BLESS=1` rewrites
/// all of them.
pub fn run_golden_dir<F>(test_name: &str, dir: &Path, input_ext: &str, golden_ext: &str, mut render: F)
where
    F: FnMut(&Path, &str) -> String,
{
    let mut inputs: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("failed to read test dir {:?}: {}", dir, e))
        .filter_map(|ent| ent.ok().map(|e| e.path()))
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some(input_ext))
        .collect();
    inputs.sort();
    assert!(!inputs.is_empty(), "no *.{input_ext} inputs in {dir:?}");

    let bless = std::env::var("BLESS").is_ok();

    for input in inputs {
        let source = fs::read_to_string(&input)
            .unwrap_or_else(|e| panic!("failed to read {:?}: {}", input, e));
        let actual = render(&input, &source);
        let golden_path = input.with_extension(golden_ext);

        if bless {
            write_golden(&golden_path, &source, &actual);
            continue;
        }

        let Ok(expected) = fs::read_to_string(&golden_path) else {
            write_golden(&golden_path, &source, &actual);
            panic!(
                "generated missing golden file {:?}\n\
                 Review it, then re-run (or BLESS=1 cargo test {}).",
                golden_path, test_name
            );
        };

        assert_eq!(
            normalize_output(output_section(&expected)),
            normalize_output(&actual),
            "golden mismatch\ninput: {:?}\ngolden: {:?}\nTo update: BLESS=1 cargo test {}",
            input,
            golden_path,
            test_name
        );
    }
}

fn write_golden(path: &Path, source: &str, output: &str) {
    let mut contents = format!("{INPUT_MARKER}\n{source}");
    if !contents.ends_with('\n') {
        contents.push('\n');
    }
    contents.push_str(OUTPUT_MARKER);
    contents.push('\n');
    contents.push_str(&normalize_output(output));

    fs::write(path, contents)
        .unwrap_or_else(|e| panic!("failed to write golden file {:?}: {}", path, e));
}

fn output_section(contents: &str) -> &str {
    match contents.find(OUTPUT_MARKER) {
        Some(idx) => {
            let after = &contents[idx + OUTPUT_MARKER.len()..];
            after
                .strip_prefix("\r\n")
                .or_else(|| after.strip_prefix('\n'))
                .unwrap_or(after)
        }
        None => contents,
    }
}

// Only trailing whitespace per line is normalized.
fn normalize_output(s: &str) -> String {
    let mut out = String::new();
    for line in s.lines() {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
