//! Compile-and-run tests for generated modules.
//!
//! Each case renders a module for one option set, appends a `main` that
//! sets the variables, calls `init()` and checks the statics, then lets
//! trybuild build and run it.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use envgen::{LogBackend, RenderOptions};

struct Case {
    name: &'static str,
    options: RenderOptions,
}

fn case(
    name: &'static str,
    package_name: &str,
    flags: [bool; 4],
    log_backend: LogBackend,
) -> Case {
    let [dotenv_enabled, dotenv_logging_enabled, exit_on_parse_error, log_parse_error] = flags;

    Case {
        name,
        options: RenderOptions {
            package_name: package_name.to_string(),
            dotenv_enabled,
            dotenv_logging_enabled,
            exit_on_parse_error,
            log_parse_error,
            log_backend,
        },
    }
}

fn cases() -> Vec<Case> {
    use LogBackend::{Stderr, Tracing};

    vec![
        case("all_off", "env", [false, false, false, false], Stderr),
        case("dotenv_silent", "env", [true, false, false, false], Stderr),
        case("dotenv_stderr", "env", [true, true, false, false], Stderr),
        case("dotenv_tracing", "env", [true, true, false, false], Tracing),
        case("exit_only", "env", [false, false, true, false], Stderr),
        case("log_stderr", "env", [false, false, false, true], Stderr),
        case("log_tracing", "env", [false, false, false, true], Tracing),
        case("log_and_exit", "settings", [false, false, true, true], Tracing),
        case("everything", "config", [true, true, true, true], Stderr),
    ]
}

fn mapping() -> HashMap<String, String> {
    [
        ("PORT", "8080"),
        ("DEBUG", "true"),
        ("NAME", "svc"),
        ("RETRIES", "3"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// A `main` exercising `init()`. `RETRIES` is unparseable unless the
/// module would exit on it.
fn main_for(options: &RenderOptions) -> String {
    let package = &options.package_name;
    let (retries, expected) = if options.exit_on_parse_error {
        ("3", 3)
    } else {
        ("many", 0)
    };

    format!(
        r#"
fn main() {{
    unsafe {{
        std::env::set_var("PORT", "8080");
        std::env::set_var("DEBUG", "TRUE");
        std::env::set_var("NAME", "svc");
        std::env::set_var("RETRIES", "{retries}");
    }}

    {package}::init();

    assert_eq!({package}::Port.get(), Some(&8080));
    assert_eq!({package}::Debug.get(), Some(&true));
    assert_eq!({package}::Name.get().map(String::as_str), Some("svc"));
    assert_eq!({package}::Retries.get(), Some(&{expected}));
}}
"#
    )
}

/// Module and `main` for the exit path. The program re-runs itself with
/// `FIRST_COUNT` broken and `SECOND_COUNT` valid: `init()` must still exit
/// with status 1, so a later success does not clear the failure. With both
/// valid the child returns normally.
fn exit_after_failure() -> String {
    let mapping: HashMap<String, String> = [("FIRST_COUNT", "1"), ("SECOND_COUNT", "2")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let options = RenderOptions {
        package_name: "vars".to_string(),
        exit_on_parse_error: true,
        log_parse_error: true,
        ..RenderOptions::default()
    };

    let source = envgen::render_mapping(&mapping, &options).expect("mapping should render");

    source
        + r#"
fn main() {
    if std::env::var_os("ENVGEN_CHILD").is_some() {
        vars::init();

        let first = std::env::var("FIRST_COUNT").unwrap().parse::<i64>().unwrap();
        assert_eq!(vars::FirstCount.get(), Some(&first));
        assert_eq!(vars::SecondCount.get(), Some(&5));
        return;
    }

    let run = |first: &str| {
        std::process::Command::new(std::env::current_exe().unwrap())
            .env("ENVGEN_CHILD", "1")
            .env("FIRST_COUNT", first)
            .env("SECOND_COUNT", "5")
            .status()
            .unwrap()
    };

    assert_eq!(run("many").code(), Some(1));
    assert!(run("3").success());
}
"#
}

#[test]
fn generated_modules_compile_and_run() {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("generated");
    fs::create_dir_all(&dir).expect("create case directory");

    let mapping = mapping();
    let t = trybuild::TestCases::new();

    for case in cases() {
        let source =
            envgen::render_mapping(&mapping, &case.options).expect("mapping should render");
        let path = dir.join(format!("{}.rs", case.name));

        fs::write(&path, source + &main_for(&case.options)).expect("write case");
        t.pass(path);
    }

    let path = dir.join("exit_after_failure.rs");
    fs::write(&path, exit_after_failure()).expect("write case");
    t.pass(path);
}
