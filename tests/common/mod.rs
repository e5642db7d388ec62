// Test utility module for shelfscope integration tests
#![allow(dead_code)]

use indoc::indoc;
use shelfscope::catalog::{Catalog, Product};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};

/// Four products over three categories, with one non-canonical status.
pub const SAMPLE_SNAPSHOT: &str = indoc! {r#"
    [
      {
        "id": "1",
        "productName": "Apple Bar",
        "category": "Snacks",
        "status": "active",
        "score": 90,
        "lastUpdated": "2024-03-01",
        "explanation": "All ingredients traced to source",
        "flags": ["added sugar"],
        "suggestions": [],
        "ingredients": [
          { "name": "Apple", "source": "Washington", "verified": true },
          { "name": "Oats", "source": "Canada", "verified": true }
        ],
        "certifications": ["Organic"]
      },
      {
        "id": "2",
        "productName": "Banana Chip",
        "category": "Snacks",
        "status": "pending",
        "score": 50,
        "lastUpdated": "2024-01-15",
        "explanation": "Frying oil supplier undisclosed",
        "flags": ["added sugar", "palm oil"],
        "suggestions": ["Disclose oil supplier"],
        "ingredients": [
          { "name": "Banana", "source": "Ecuador", "verified": true },
          { "name": "Palm oil", "source": "Unknown", "verified": false }
        ],
        "certifications": []
      },
      {
        "id": "3",
        "productName": "Avocado Oil",
        "category": "Pantry",
        "status": "active",
        "score": 70,
        "lastUpdated": "2024-02-20",
        "explanation": "Single-origin, partially verified",
        "flags": [],
        "suggestions": ["Verify bottling facility"],
        "ingredients": [
          { "name": "Avocado", "source": "Mexico", "verified": true }
        ],
        "certifications": ["Organic", "Non-GMO"]
      },
      {
        "id": "4",
        "productName": "Zucchini Crisps",
        "category": "Snacks",
        "status": "archived",
        "score": 65,
        "lastUpdated": "2023-12-05",
        "explanation": "",
        "flags": ["palm oil"],
        "suggestions": [],
        "ingredients": [],
        "certifications": []
      }
    ]
"#};

// Binary execution result for tests that need to verify CLI behavior
#[derive(Debug)]
pub struct BinaryResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub duration: Duration,
}

impl BinaryResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

pub fn sample_catalog() -> Catalog {
    Catalog::from_json(SAMPLE_SNAPSHOT).expect("sample snapshot parses")
}

pub fn ids(rows: &[&Product]) -> Vec<String> {
    rows.iter().map(|p| p.id.clone()).collect()
}

/// Write the sample snapshot into `dir` and return its path.
pub fn write_snapshot(dir: &Path) -> PathBuf {
    let path = dir.join("catalog.json");
    std::fs::write(&path, SAMPLE_SNAPSHOT).expect("Failed to write snapshot");
    path
}

/// Run the shelfscope binary with `dir` as the working directory.
pub fn run_shelfscope(dir: &Path, args: &[&str]) -> BinaryResult {
    let start = Instant::now();
    let output = Command::new(env!("CARGO_BIN_EXE_shelfscope"))
        .args(args)
        .current_dir(dir)
        .env_remove("SHELFSCOPE_CONFIG")
        .env_remove("SHELFSCOPE_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute shelfscope");

    BinaryResult {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code().unwrap_or(-1),
        duration: start.elapsed(),
    }
}
