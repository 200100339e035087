use std::{fs, path::PathBuf};

use tempfile::tempdir;

use protogen::ProtogenError;
use protogen_cli::{Args, run};

/// Workspace-level `demos/` directory
fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Collects all .json files from a directory
fn collect_json_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args(input: &PathBuf, output: &PathBuf) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        profile: None,
        profile_name: None,
        package: Some("demo".to_string()),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_json_files(demos_dir());

    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename = format!(
            "{}.proto",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        match run(&args(demo_path, &output_path)) {
            Ok(()) => {
                let proto = fs::read_to_string(&output_path).unwrap();
                assert!(
                    proto.starts_with("syntax = \"proto3\";\n\npackage demo;\n"),
                    "unexpected header in output of {}",
                    demo_path.display()
                );
            }
            Err(e) => failed_demos.push((demo_path.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_json_files(demos_dir().join("errors"));

    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.proto",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        match run(&args(demo_path, &output_path)) {
            Ok(()) => unexpectedly_succeeded.push(demo_path.clone()),
            Err(err) => {
                assert!(
                    matches!(err, ProtogenError::Parse { .. }),
                    "{} failed with a non-parse error: {err}",
                    demo_path.display()
                );
                assert!(!output_path.exists(), "output written for a failed run");
            }
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error demos failed as expected",
        error_demos.len()
    );
}

#[test]
fn e2e_profile_file_selection() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_dir().join("petstore.json");
    let output = temp_dir.path().join("petstore.proto");
    let profile = demos_dir().join("profiles").join("petstore.json");

    let mut run_args = args(&input, &output);
    run_args.package = None;
    run_args.profile = Some(profile.to_string_lossy().to_string());

    run(&run_args).expect("default profile should render");
    let proto = fs::read_to_string(&output).unwrap();
    assert!(proto.contains("package petstore.v1;\n"));
    assert!(proto.contains("service PetService {\n"));
    assert!(proto.contains("    rpc getPetById(getPetByIdRequest) returns (Pet) {}\n"));
    assert!(proto.contains("    repeated Tag tags = 5;\n"));

    run_args.profile_name = Some("verbatim".to_string());
    run(&run_args).expect("verbatim profile should render");
    let proto = fs::read_to_string(&output).unwrap();
    assert!(proto.contains("package petstore.verbatim;\n"));
    assert!(proto.contains("service pet_service {\n"));
    assert!(proto.contains("    rpc add_pet(pet) returns (pet) {}\n"));

    run_args.profile_name = Some("missing".to_string());
    let err = run(&run_args).unwrap_err();
    assert_eq!(err.to_string(), "profile `missing` not found");
}

#[test]
fn e2e_package_override() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_dir().join("petstore.json");
    let output = temp_dir.path().join("petstore.proto");
    let profile = demos_dir().join("profiles").join("petstore.json");

    let mut run_args = args(&input, &output);
    run_args.profile = Some(profile.to_string_lossy().to_string());
    run_args.profile_name = Some("unpackaged".to_string());
    run_args.package = None;

    let err = run(&run_args).unwrap_err();
    assert!(matches!(err, ProtogenError::Profile(_)));

    run_args.package = Some("petstore.v2".to_string());
    run(&run_args).expect("package from the command line should be used");
    let proto = fs::read_to_string(&output).unwrap();
    assert!(proto.contains("package petstore.v2;\n"));
    assert!(proto.contains("    string pet_name = 3;\n"));
}

#[test]
fn e2e_missing_package_without_profile() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_dir().join("empty.json");
    let output = temp_dir.path().join("empty.proto");

    let mut run_args = args(&input, &output);
    run_args.package = None;

    let err = run(&run_args).unwrap_err();
    assert!(matches!(err, ProtogenError::Profile(_)));
    assert!(!output.exists());
}
