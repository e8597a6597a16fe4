//! Proof transcript exporter.
//!
//! Runs each registered theorem function against a fresh `ProofBuilder`, checks the
//! resulting transcript, and writes it to `<out-dir>/<name>.proof` -- formula entries
//! only, one per line, `"{i}. {formula}"`, indices renumbered over formula entries
//! alone (comments carry no index in the on-disk format). Also deletes any `.proof`
//! file under `out-dir` left over from a previous run whose name doesn't match a
//! currently registered theorem, so the directory's contents always match the
//! registered set exactly.
//!
//! Plain `println!`/`eprintln!` progress output; no logging facade.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use panoka::checker::{assert_proof_is_valid, ProofEntry};
use panoka::ProofBuilder;

/// One registered theorem: a name (used for the output filename) and the function
/// that proves it against a fresh transcript.
struct Theorem {
    name: &'static str,
    prove: fn(&mut ProofBuilder),
}

fn registered_theorems() -> Vec<Theorem> {
    vec![
        Theorem {
            name: "eq_is_symmetric",
            prove: |b| {
                b.prove_eq_is_symmetric();
            },
        },
        Theorem {
            name: "eq_is_transitive",
            prove: |b| {
                b.prove_eq_is_transitive();
            },
        },
        Theorem {
            name: "adding_zero_commutes",
            prove: |b| {
                panoka::theorems::prove_adding_zero_commutes(b);
            },
        },
        Theorem {
            name: "succ_commutes_with_addition",
            prove: |b| {
                panoka::theorems::prove_succ_commutes_with_addition(b);
            },
        },
        Theorem {
            name: "addition_is_commutative",
            prove: |b| {
                panoka::theorems::prove_addition_is_commutative(b);
            },
        },
        Theorem {
            name: "one_less_than_or_eq_two",
            prove: |b| {
                panoka::theorems::prove_one_less_than_or_eq_two(b);
            },
        },
        Theorem {
            name: "one_times_one_equals_one",
            prove: |b| {
                panoka::theorems::prove_one_times_one_equals_one(b);
            },
        },
    ]
}

/// Renders a transcript as formula entries only, renumbered from 0,
/// `"{i}. {formula}"` per line, no trailing newline.
fn render_transcript(proof: &[ProofEntry]) -> String {
    let lines: Vec<String> = proof
        .iter()
        .filter_map(|e| match e {
            ProofEntry::Formula(f) => Some(f),
            ProofEntry::Comment(_) => None,
        })
        .enumerate()
        .map(|(i, f)| format!("{}. {}", i, f))
        .collect();
    lines.join("\n")
}

fn parse_out_dir(args: &[String]) -> PathBuf {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--out-dir" {
            if let Some(dir) = iter.next() {
                return PathBuf::from(dir);
            }
            eprintln!("--out-dir requires a path argument");
            std::process::exit(1);
        }
    }
    PathBuf::from("./proofs")
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let out_dir = parse_out_dir(&args);

    fs::create_dir_all(&out_dir)
        .unwrap_or_else(|e| panic!("failed to create {}: {}", out_dir.display(), e));

    let theorems = registered_theorems();
    let mut written_names = Vec::with_capacity(theorems.len());

    for theorem in &theorems {
        let mut builder = ProofBuilder::new();
        (theorem.prove)(&mut builder);
        assert_proof_is_valid(builder.proof())
            .unwrap_or_else(|e| panic!("theorem {} failed to check: {}", theorem.name, e));

        let rendered = render_transcript(builder.proof());
        let path = out_dir.join(format!("{}.proof", theorem.name));
        fs::write(&path, rendered)
            .unwrap_or_else(|e| panic!("failed to write {}: {}", path.display(), e));
        println!("wrote {}", path.display());
        written_names.push(theorem.name.to_string());
    }

    prune_stale_files(&out_dir, &written_names);
}

/// Removes any `*.proof` file in `out_dir` whose stem isn't one of `keep`, so the
/// directory's contents match the registered theorem set exactly.
fn prune_stale_files(out_dir: &Path, keep: &[String]) {
    let entries = match fs::read_dir(out_dir) {
        Ok(e) => e,
        Err(_) => return,
    };
    for entry in entries.filter_map(Result::ok) {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("proof") {
            continue;
        }
        let stem = match path.file_stem().and_then(|s| s.to_str()) {
            Some(s) => s,
            None => continue,
        };
        if !keep.iter().any(|k| k == stem) {
            println!("removing stale transcript {}", path.display());
            let _ = fs::remove_file(&path);
        }
    }
}
