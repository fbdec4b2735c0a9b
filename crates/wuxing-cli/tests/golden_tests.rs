use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use similar::{ChangeTag, TextDiff};

fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

fn golden_dir() -> PathBuf {
    project_root().join("golden")
}

fn update_golden() -> bool {
    std::env::var("UPDATE_GOLDEN").is_ok()
}

fn diff_strings(expected: &str, actual: &str) -> String {
    let diff = TextDiff::from_lines(expected, actual);
    let mut out = String::new();
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        out.push_str(&format!("{sign}{change}"));
    }
    out
}

fn wuxing(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wuxing"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("SHOPIFY_SHOP_NAME")
        .env_remove("SHOPIFY_API_KEY")
        .env_remove("SHOPIFY_API_SECRET")
        .env_remove("SHOPIFY_API_VERSION")
        .output()
        .expect("Failed to execute wuxing")
}

const CASES: &[(&str, &[&str])] = &[
    ("regions", &["regions"]),
    ("regions_us", &["regions", "--country", "美国"]),
    (
        "classify_json",
        &[
            "classify",
            "--year",
            "2023",
            "--month",
            "3",
            "--day",
            "7",
            "--hour",
            "14",
            "--output-format",
            "json",
        ],
    ),
    (
        "calculate_beijing",
        &[
            "calculate",
            "--date",
            "2024-01-01",
            "--time",
            "20:00",
            "--country",
            "中国",
            "--region",
            "北京",
        ],
    ),
    (
        "calculate_unknown_country_json",
        &[
            "calculate",
            "--date",
            "2023-03-07",
            "--time",
            "14:00",
            "--country",
            "Atlantis",
            "--region",
            "x",
            "--output-format",
            "json",
        ],
    ),
    ("products_fire", &["products", "--element", "火"]),
];

#[test]
fn golden_output() {
    let golden = golden_dir();

    for (name, args) in CASES {
        let golden_path = golden.join(format!("{name}.txt"));
        let output = wuxing(args);

        assert!(
            output.status.success(),
            "wuxing failed for {}: {}",
            name,
            String::from_utf8_lossy(&output.stderr)
        );

        let actual = String::from_utf8(output.stdout).expect("Output is not valid UTF-8");

        if update_golden() {
            fs::create_dir_all(&golden).ok();
            fs::write(&golden_path, &actual)
                .unwrap_or_else(|e| panic!("Failed to write golden file {golden_path:?}: {e}"));
            eprintln!("Updated golden file: {golden_path:?}");
            continue;
        }

        let expected = fs::read_to_string(&golden_path).unwrap_or_else(|e| {
            panic!(
                "Golden file {golden_path:?} not found: {e}\n\
                 Hint: Run with UPDATE_GOLDEN=1 to generate golden files"
            )
        });

        if actual != expected {
            let diff = diff_strings(&expected, &actual);
            panic!(
                "Golden test mismatch for {name}:\n\n\
                 {diff}\n\n\
                 Run with UPDATE_GOLDEN=1 to refresh snapshots"
            );
        }
    }
}

#[test]
fn calculate_is_repeatable() {
    let args = [
        "calculate",
        "--date",
        "1990-12-31",
        "--time",
        "23:30",
        "--country",
        "日本",
        "--region",
        "东京",
        "--output-format",
        "json",
    ];
    let first = wuxing(&args);
    let second = wuxing(&args);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let json: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    assert_eq!(json["adjusted"], "1991-01-01T08:30:00");
    assert_eq!(json["offset_hours"], 9);
}

#[test]
fn invalid_element_is_input_error() {
    let output = wuxing(&["products", "--element", "aether"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: "));
}

#[test]
fn invalid_time_renders_json_envelope() {
    let output = wuxing(&[
        "calculate",
        "--date",
        "2024-01-01",
        "--time",
        "late",
        "--country",
        "中国",
        "--region",
        "北京",
        "--output-format",
        "json",
    ]);
    assert_eq!(output.status.code(), Some(2));

    let envelope: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["exit_code"], 2);
    assert!(envelope["error"].as_str().unwrap().contains("late"));
}

#[test]
fn invalid_output_format_is_input_error() {
    let output = wuxing(&["regions", "--output-format", "yaml"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn unknown_country_listing_is_input_error() {
    let output = wuxing(&["regions", "--country", "Atlantis"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn cart_requires_shop_name() {
    let output = wuxing(&["cart", "--product", "1"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn cart_rejects_unknown_product() {
    let output = wuxing(&["cart", "--product", "404", "--shop-name", "jade-house"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn cart_prints_url() {
    let output = wuxing(&[
        "cart",
        "--product",
        "1",
        "--product",
        "6",
        "--shop-name",
        "jade-house",
        "--output-format",
        "json",
    ]);
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(
        json["cart_url"]
            .as_str()
            .unwrap()
            .starts_with("https://jade-house.myshopify.com/cart/")
    );
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
}
