use super::*;

#[test]
fn should_build_every_variant_with_default_roots() {
    let workdir = Workdir::new().with_variant("dark").with_variant("light");

    let output = workdir.command().output().unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    for variant in ["dark", "light"] {
        assert_eq!(
            workdir.output_files(variant),
            vec!["next.ico", "pause.ico", "play.ico", "previous.ico"]
        );
    }
    let stdout = stdout(&output);
    let output_root = stdout
        .trim()
        .strip_prefix("Generated thumbbar icons in: ")
        .unwrap();
    assert!(Path::new(output_root).is_absolute());
    assert!(Path::new(output_root).ends_with("build/windows/thumbbar"));
    assert!(stderr(&output).is_empty());
}

#[test]
fn should_pack_four_frames_in_ascending_order() {
    let workdir = Workdir::new().with_variant("dark");

    workdir
        .command_with_roots()
        .args(["--variants", "dark"])
        .assert()
        .success();

    for name in ICON_NAMES {
        let icon = read_icon(&workdir.icon("dark", name));
        let sizes = icon
            .entries()
            .iter()
            .map(|e| (e.width(), e.height()))
            .collect::<Vec<_>>();
        assert_eq!(sizes, vec![(16, 16), (20, 20), (24, 24), (32, 32)]);
    }
}

#[test]
fn should_keep_transparent_corners() {
    let workdir = Workdir::new().with_variant("light");

    workdir
        .command_with_roots()
        .args(["--variants", "light"])
        .assert()
        .success();

    let icon = read_icon(&workdir.icon("light", "play"));
    for entry in icon.entries() {
        let image = entry.decode().unwrap();
        let (width, height) = (image.width() as usize, image.height() as usize);
        let alpha = |x: usize, y: usize| image.rgba_data()[(y * width + x) * 4 + 3];
        assert_eq!(alpha(0, 0), 0);
        assert_eq!(alpha(width - 1, height - 1), 0);
        assert_eq!(alpha(width / 2, height / 2), 255);
    }
}

#[test]
fn should_fail_on_missing_variant_after_building_earlier_ones() {
    let workdir = Workdir::new().with_variant("dark");

    let output = workdir
        .command_with_roots()
        .args(["--variants", "dark,light"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(workdir.output_files("dark").len(), 4);
    assert!(!workdir.output().join("light").exists());
    let stderr = stderr(&output);
    assert!(stderr.starts_with("Error: variant folder not found: "));
    assert!(stderr.trim_end().ends_with("light"));
    assert_eq!(stderr.lines().count(), 1);
    assert!(stdout(&output).is_empty());
}

#[test]
fn should_fail_on_missing_source_after_building_earlier_icons() {
    let workdir = Workdir::new().with_sources("dark", &["previous", "play", "pause"], CIRCLE);

    let output = workdir
        .command_with_roots()
        .args(["--variants", "dark"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error: missing icon source: "));
    assert!(stderr(&output).trim_end().ends_with("next.svg"));
    assert_eq!(
        workdir.output_files("dark"),
        vec!["pause.ico", "play.ico", "previous.ico"]
    );
    assert_eq!(read_icon(&workdir.icon("dark", "pause")).entries().len(), 4);
}

#[test]
fn should_fail_on_empty_variant_list_without_touching_files() {
    let workdir = Workdir::new().with_variant("dark");

    for variants in ["", " , ,"] {
        let output = workdir
            .command_with_roots()
            .args(["--variants", variants])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        assert_eq!(stderr(&output), "Error: no variants specified\n");
        assert!(!workdir.output().exists());
    }
}

#[test]
fn should_fail_on_malformed_source() {
    let workdir = Workdir::new()
        .with_variant("dark")
        .with_sources("dark", &["play"], "<svg");

    let output = workdir
        .command_with_roots()
        .args(["--variants", "dark"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr(&output);
    assert!(stderr.starts_with("Error: failed to render "));
    assert!(stderr.contains("play.svg at 16x16"));
    assert_eq!(workdir.output_files("dark"), vec!["previous.ico"]);
}

#[test]
fn should_produce_identical_output_when_run_again() {
    let workdir = Workdir::new().with_variant("dark");
    let run = || {
        workdir
            .command_with_roots()
            .args(["--variants", "dark"])
            .assert()
            .success();
        ICON_NAMES
            .iter()
            .map(|name| std::fs::read(workdir.icon("dark", name)).unwrap())
            .collect::<Vec<_>>()
    };

    let first = run();
    let second = run();

    assert_eq!(first, second);
}

#[test]
fn should_read_options_from_environment() {
    let workdir = Workdir::new().with_variant("high-contrast");

    workdir
        .command()
        .env("THUMBBAR_INPUT", workdir.input())
        .env("THUMBBAR_OUTPUT", workdir.path().join("icons"))
        .env("THUMBBAR_VARIANTS", "high-contrast")
        .assert()
        .success();

    assert!(workdir
        .path()
        .join("icons")
        .join("high-contrast")
        .join("play.ico")
        .is_file());
}
