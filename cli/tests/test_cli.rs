/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use kconn::graphs::generators::karate_club;
use kconn_cli::cli_main;
use std::io::Write;
use std::path::Path;
use tempfile::Builder;

const KARATE_K_NUMBERS: [usize; 34] = [
    4, 4, 4, 4, 3, 3, 3, 4, 4, 2, 3, 1, 2, 4, 2, 2, 2, 2, 2, 3, 2, 2, 2, 3, 3, 3, 2, 3, 3, 3, 4,
    3, 4, 4,
];

fn write_karate(path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "# Zachary's karate club")?;
    for (u, v) in karate_club().edges() {
        writeln!(file, "{}\t{}", u, v)?;
    }
    Ok(())
}

#[test]
fn test_knumbers() -> Result<()> {
    let tmp_dir = Builder::new().prefix("KNumbers").tempdir()?;
    let input = tmp_dir.path().join("karate.tsv");
    write_karate(&input)?;
    let input = input.display().to_string();

    for par in [false, true] {
        let output = tmp_dir.path().join("out").join("knumbers.json");
        let output_name = output.display().to_string();
        let mut args = vec!["kconn", "knumbers", &input, "-o", &output_name, "--fmt", "json"];
        if par {
            args.extend(["--par", "-j", "2"]);
        }
        cli_main(args)?;

        let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&output)?)?;
        let map = json.as_object().unwrap();
        assert_eq!(map.len(), 34);
        for (node, &k) in KARATE_K_NUMBERS.iter().enumerate() {
            assert_eq!(map[&node.to_string()], serde_json::json!(k), "node {}", node);
        }
    }
    Ok(())
}

#[test]
fn test_components() -> Result<()> {
    let tmp_dir = Builder::new().prefix("Components").tempdir()?;
    let input = tmp_dir.path().join("karate.tsv");
    write_karate(&input)?;
    let input = input.display().to_string();
    let output = tmp_dir.path().join("components.tsv");
    let output_name = output.display().to_string();

    cli_main(vec![
        "kconn",
        "components",
        &input,
        "-o",
        &output_name,
        "--flow",
        "edmonds-karp",
    ])?;

    let text = std::fs::read_to_string(&output)?;
    let lines = text.lines().collect::<Vec<_>>();
    let all_nodes = (0..34).map(|node| node.to_string()).collect::<Vec<_>>();
    assert_eq!(lines[0], format!("1\t{}", all_nodes.join(" ")));
    let mut max_level = 0;
    for line in &lines {
        let (level, nodes) = line.split_once('\t').unwrap();
        let level = level.parse::<usize>()?;
        assert!(level >= max_level);
        max_level = level;
        assert!(nodes.split(' ').count() > level);
    }
    assert_eq!(max_level, 4);
    Ok(())
}

#[test]
fn test_cuts() -> Result<()> {
    let tmp_dir = Builder::new().prefix("Cuts").tempdir()?;
    let input = tmp_dir.path().join("karate.tsv");
    write_karate(&input)?;
    let input = input.display().to_string();
    let output = tmp_dir.path().join("cuts.txt");
    let output_name = output.display().to_string();

    cli_main(vec!["kconn", "cuts", &input, "-o", &output_name])?;
    assert_eq!(std::fs::read_to_string(&output)?, "0\n");

    cli_main(vec!["kconn", "cuts", &input, "-o", &output_name, "-k", "1"])?;
    assert_eq!(std::fs::read_to_string(&output)?, "0\n");
    Ok(())
}

#[test]
fn test_connectivity_labels() -> Result<()> {
    let tmp_dir = Builder::new().prefix("Connectivity").tempdir()?;
    let input = tmp_dir.path().join("square.csv");
    std::fs::write(&input, "source,target\nalice,bob\nbob,carol\ncarol,dave\ndave,alice\n")?;
    let input = input.display().to_string();
    let output = tmp_dir.path().join("connectivity.txt");
    let output_name = output.display().to_string();
    let csv = ["--labels", "--separator", ",", "--lines-to-skip", "1"];

    let mut args = vec!["kconn", "connectivity", &input, "-o", &output_name, "--cut"];
    args.extend(csv);
    cli_main(args)?;
    let text = std::fs::read_to_string(&output)?;
    let lines = text.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], "2");
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].split(' ').count(), 2);

    let mut args = vec![
        "kconn",
        "connectivity",
        &input,
        "-o",
        &output_name,
        "--cut",
        "-s",
        "alice",
        "-t",
        "carol",
    ];
    args.extend(csv);
    cli_main(args)?;
    assert_eq!(std::fs::read_to_string(&output)?, "2\nbob dave\n");

    let mut args = vec![
        "kconn",
        "connectivity",
        &input,
        "-o",
        &output_name,
        "-s",
        "alice",
        "-t",
        "zoe",
    ];
    args.extend(csv);
    assert!(cli_main(args).is_err());
    Ok(())
}
